use std::path::Path;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{settings, status},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(title = "Gatekeeper panel API"))]
struct ApiDoc;

/// Builds the panel router.
///
/// Serves the JSON API under `/api`, its OpenAPI document at `/api/openapi.json`
/// with Swagger UI at `/api/docs`, and falls back to static files from `static_dir`.
///
/// # Arguments
/// - `static_dir` - Directory holding the panel's HTML and assets
pub fn router(static_dir: &Path) -> Router<AppState> {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(settings::get_settings, settings::update_settings))
        .routes(routes!(status::get_status))
        .split_for_parts();

    api.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
