//! HTTP route trees and their composition into the application router.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

/// Per-game song and category management routes.
pub mod catalog;
/// Game lifecycle and gameplay routes.
pub mod game;
/// Health check routes.
pub mod health;
/// Roster management routes.
pub mod roster;

/// Compose all route trees, mount the Swagger UI, and wire in shared state.
pub fn router(state: SharedState) -> Router<()> {
    let swagger = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    health::router()
        .merge(game::router())
        .merge(catalog::router())
        .merge(roster::router())
        .merge(swagger)
        .with_state(state)
}
