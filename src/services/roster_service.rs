//! Business logic for roster management on an existing game.

use uuid::Uuid;

use crate::{
    dto::roster::{AddPlayerRequest, UpdatePlayerRequest},
    error::ServiceError,
    services::game_service::lookup_game,
    state::SharedState,
};

/// Add a player with a zeroed score. Duplicate usernames are rejected.
pub async fn add_player(
    state: &SharedState,
    game_id: Uuid,
    request: AddPlayerRequest,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    game.add_player(request.username, request.avatar)?;
    Ok(())
}

/// Update a player; renames propagate into the ledger and turn state.
pub async fn update_player(
    state: &SharedState,
    game_id: Uuid,
    username: String,
    request: UpdatePlayerRequest,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    game.update_player(&username, request.username, request.avatar)?;
    Ok(())
}

/// Remove a player and their ledger entry.
pub async fn remove_player(
    state: &SharedState,
    game_id: Uuid,
    username: String,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    game.remove_player(&username)?;
    Ok(())
}
