//! Request/response schemas shared by the HTTP layer.

use std::time::SystemTime;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Common acknowledgement payloads.
pub mod common;
/// Game lifecycle, turn, and attempt schemas.
pub mod game;
/// Health check schema.
pub mod health;
/// Per-game song, category, and roster management schemas.
pub mod roster;
/// Validation helpers for DTOs.
pub mod validation;

pub(crate) fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
