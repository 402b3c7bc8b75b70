use serde::Serialize;
use utoipa::ToSchema;

/// Generic acknowledgement returned by mutating endpoints with no richer
/// payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human-readable confirmation of what happened.
    pub message: String,
}

impl ActionResponse {
    /// Build an acknowledgement from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
