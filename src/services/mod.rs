//! Business-logic services sitting between the routes and the game state.

/// Per-game song and category catalog management.
pub mod catalog_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Game lifecycle, turn rotation, and attempt scoring.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Player roster management.
pub mod roster_service;
