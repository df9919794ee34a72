use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod features;
pub mod middleware;
pub mod state;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::health,
        features::lifts::handlers::list_lifts,
        features::lifts::handlers::create_lift,
        features::lifts::handlers::update_lift,
        features::lifts::handlers::delete_lift,
    ),
    components(
        schemas(
            storage::models::Lift,
            storage::dto::lift::CreateLiftRequest,
            storage::dto::lift::UpdateLiftRequest,
            storage::dto::lift::MessageResponse,
        )
    ),
    tags(
        (name = "lifts", description = "Car service lift endpoints"),
        (name = "health", description = "Liveness probe"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

/// Full application router without CORS, which depends on deployment config.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(features::health::routes())
        .merge(features::lifts::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
