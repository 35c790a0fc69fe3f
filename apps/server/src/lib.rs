pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
pub use crate::state::AppState;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Seeding page state...");
    let state = AppState::new(&config);

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with all page routes.
pub fn build_router(state: AppState) -> Router {
    let home_routes = Router::new()
        .route("/api/home", get(routes::home::get))
        .route("/api/home/flashcard/toggle", post(routes::home::toggle_card))
        .route("/api/home/flashcard/next", post(routes::home::next_card))
        .route("/api/home/audio/toggle", post(routes::home::toggle_audio))
        .route("/api/home/upload", post(routes::home::upload));

    let flashcard_routes = Router::new()
        .route(
            "/api/flashcards",
            get(routes::flashcards::list).post(routes::flashcards::create),
        )
        .route("/api/flashcards/{id}", axum::routing::delete(routes::flashcards::delete))
        .route(
            "/api/flashcards/study-mode",
            post(routes::flashcards::toggle_study_mode),
        )
        .route("/api/flashcards/study", get(routes::flashcards::study))
        .route(
            "/api/flashcards/study/{action}",
            post(routes::flashcards::study_action),
        );

    let audio_routes = Router::new()
        .route("/api/audio", get(routes::audio::get))
        .route("/api/audio/play", post(routes::audio::play))
        .route("/api/audio/pause", post(routes::audio::pause))
        .route("/api/audio/toggle", post(routes::audio::toggle))
        .route("/api/audio/seek", put(routes::audio::seek))
        .route("/api/audio/volume", put(routes::audio::volume))
        .route("/api/audio/speed", put(routes::audio::speed))
        .route("/api/audio/convert", post(routes::audio::convert));

    let summary_routes = Router::new()
        .route("/api/summary", get(routes::summary::get))
        .route(
            "/api/summary/flashcard/{action}",
            post(routes::summary::flashcard_action),
        );

    let placeholder_routes = Router::new()
        .route("/api/notes", get(routes::placeholder::notes))
        .route("/api/notes/{feature}", post(routes::placeholder::notes_action))
        .route("/api/quiz", get(routes::placeholder::quiz))
        .route("/api/quiz/{feature}", post(routes::placeholder::quiz_action));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/routes", get(routes::about::routes))
        .route("/api/about", get(routes::about::get))
        .merge(home_routes)
        .merge(flashcard_routes)
        .merge(audio_routes)
        .merge(summary_routes)
        .merge(placeholder_routes)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let app = build_router(AppState::new(&Config::default()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = build_router(AppState::new(&Config::default()));
        let response = app
            .oneshot(Request::builder().uri("/api/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
