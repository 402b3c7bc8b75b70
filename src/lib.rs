//! Library crate for verse-hunt-back, exposing modules for binaries and integration tests.

pub mod dto;
pub mod error;
pub mod lyrics;
pub mod routes;
pub mod services;
pub mod state;
