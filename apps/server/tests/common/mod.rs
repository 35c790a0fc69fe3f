//! Common test utilities and fixtures for integration tests.
//!
//! Every test gets a freshly seeded in-memory state, so tests are
//! independent and need no external services.

pub mod fixtures;

use std::time::Duration;

use axum::Router;
use axum_test::TestServer;

use edu_helper_server::config::Config;
use edu_helper_server::{build_router, AppState};

/// Test context holding the seeded state and its router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with a fast playback tick.
    pub fn new() -> Self {
        let config = Config {
            playback_tick: Duration::from_millis(10),
            ..Config::default()
        };
        let state = AppState::new(&config);
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
