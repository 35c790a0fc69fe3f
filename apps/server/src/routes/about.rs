//! About page and route table

use axum::Json;
use study_core::content;

use crate::models::*;

/// GET /api/about
pub async fn get() -> Json<About> {
    Json(content::about())
}

/// GET /api/routes
pub async fn routes() -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: content::routes(),
    })
}
