use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" for this in-memory backend.
    pub status: String,
    /// Number of games currently held in memory.
    pub games: usize,
}

impl HealthResponse {
    /// Create a health response for the given live game count.
    pub fn ok(games: usize) -> Self {
        Self {
            status: "ok".to_string(),
            games,
        }
    }
}
