//! Business logic for per-game song and category management.

use tracing::info;
use uuid::Uuid;

use crate::{
    dto::{
        game::{SongInput, SongSummary},
        roster::{CreateCategoryRequest, RenameCategoryRequest},
    },
    error::ServiceError,
    services::game_service::lookup_game,
    state::SharedState,
};

/// Add a song to a game's catalog, creating its category on demand.
pub async fn add_song(
    state: &SharedState,
    game_id: Uuid,
    input: SongInput,
) -> Result<SongSummary, ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    let song = game.add_song(state.next_song_id(), input.into());
    info!(game_id = %game_id, song_id = song.id, category = %song.category, "song added");
    Ok(song.into())
}

/// Replace every field of an existing song, re-parsing its lyrics.
pub async fn update_song(
    state: &SharedState,
    game_id: Uuid,
    song_id: u64,
    input: SongInput,
) -> Result<SongSummary, ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    let song = game.update_song(song_id, input.into())?;
    Ok(song.into())
}

/// Delete a song, pruning its category when emptied.
pub async fn delete_song(
    state: &SharedState,
    game_id: Uuid,
    song_id: u64,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    game.remove_song(song_id)?;
    Ok(())
}

/// Create an empty category; a no-op when it already exists.
pub async fn add_category(
    state: &SharedState,
    game_id: Uuid,
    request: CreateCategoryRequest,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    game.add_category(&request.name);
    Ok(())
}

/// Rename a category, rewriting every member song's category field.
pub async fn rename_category(
    state: &SharedState,
    game_id: Uuid,
    name: String,
    request: RenameCategoryRequest,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    game.rename_category(&name, &request.new_name)?;
    Ok(())
}

/// Delete a category and every song it lists.
pub async fn delete_category(
    state: &SharedState,
    game_id: Uuid,
    name: String,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, game_id)?;
    let mut game = handle.lock().await;
    game.remove_category(&name)?;
    info!(game_id = %game_id, category = %name, "category deleted with its songs");
    Ok(())
}
