//! REST API layer: route handlers, OpenAPI document, and router
//! composition.
//!
//! Status endpoints are mounted under `/api/v1`; the health check sits at
//! the root.

pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());
    with_swagger_ui(router)
}

#[cfg(feature = "swagger-ui")]
fn with_swagger_ui(router: Router<AppState>) -> Router<AppState> {
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

#[cfg(not(feature = "swagger-ui"))]
fn with_swagger_ui(router: Router<AppState>) -> Router<AppState> {
    router
}
