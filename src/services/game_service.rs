//! Business logic for game bootstrap, turn rotation, and attempt scoring.
//! Every operation locks exactly one game for its full duration so
//! read-modify-write sequences never interleave across requests.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dto::game::{
        AdvanceTurnResponse, AttemptRequest, AttemptResponse, CategorySelection,
        CreateGameRequest, GameSnapshot, SongSelection, SongSummary, StartGameResponse,
    },
    error::ServiceError,
    state::{
        SharedState,
        game::{Game, Player},
    },
};

/// Resolve a game's lock handle or report it missing.
pub(crate) fn lookup_game(
    state: &SharedState,
    id: Uuid,
) -> Result<Arc<Mutex<crate::state::game::Game>>, ServiceError> {
    state
        .game(id)
        .ok_or_else(|| ServiceError::NotFound(format!("game `{id}` not found")))
}

/// Bootstrap a fresh game in the waiting phase.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameSnapshot, ServiceError> {
    let CreateGameRequest {
        name,
        players,
        songs,
        categories,
    } = request;

    let players = players
        .into_iter()
        .map(|player| Player {
            username: player.username,
            avatar: player.avatar,
        })
        .collect();

    let mut game = Game::new(name, players)?;
    for category in categories {
        game.add_category(&category);
    }
    for song in songs {
        game.add_song(state.next_song_id(), song.into());
    }

    info!(game_id = %game.id, players = game.players.len(), "created game");
    let snapshot = GameSnapshot::from(&game);
    state.insert_game(game);
    Ok(snapshot)
}

/// Full snapshot of a game.
pub async fn get_game(state: &SharedState, id: Uuid) -> Result<GameSnapshot, ServiceError> {
    let handle = lookup_game(state, id)?;
    let game = handle.lock().await;
    Ok(GameSnapshot::from(&*game))
}

/// Start a waiting game: random opening player, round 1.
pub async fn start_game(state: &SharedState, id: Uuid) -> Result<StartGameResponse, ServiceError> {
    let handle = lookup_game(state, id)?;
    let mut game = handle.lock().await;
    let current_player = game.start(&mut rand::rng())?;
    info!(game_id = %id, %current_player, "game started");
    Ok(StartGameResponse {
        current_player,
        round: game.current_round,
    })
}

/// Rotate the turn, opening a new round or finishing the game when the
/// current round exhausts.
pub async fn advance_turn(
    state: &SharedState,
    id: Uuid,
) -> Result<AdvanceTurnResponse, ServiceError> {
    let handle = lookup_game(state, id)?;
    let mut game = handle.lock().await;
    let outcome = game.advance_turn(&mut rand::rng())?;
    debug!(game_id = %id, round = game.current_round, ?outcome, "turn advanced");
    Ok(AdvanceTurnResponse::from_outcome(
        outcome,
        game.current_round,
        game.phase,
    ))
}

/// Preview the songs of a category without consuming it.
pub async fn select_category(
    state: &SharedState,
    id: Uuid,
    selection: CategorySelection,
) -> Result<Vec<SongSummary>, ServiceError> {
    let handle = lookup_game(state, id)?;
    let game = handle.lock().await;
    let songs = game.select_category(&selection.category)?;
    Ok(songs.into_iter().map(Into::into).collect())
}

/// Mark a category as consumed for future round-advance decisions.
pub async fn complete_category(
    state: &SharedState,
    id: Uuid,
    selection: CategorySelection,
) -> Result<(), ServiceError> {
    let handle = lookup_game(state, id)?;
    let mut game = handle.lock().await;
    game.complete_category(&selection.category)?;
    Ok(())
}

/// Resolve a song of the game for presentation.
pub async fn select_song(
    state: &SharedState,
    id: Uuid,
    selection: SongSelection,
) -> Result<SongSummary, ServiceError> {
    let handle = lookup_game(state, id)?;
    let game = handle.lock().await;
    Ok(game.song(selection.song_id)?.into())
}

/// Score a lyrics attempt and credit the attempting player.
pub async fn attempt_lyrics(
    state: &SharedState,
    id: Uuid,
    request: AttemptRequest,
) -> Result<AttemptResponse, ServiceError> {
    let handle = lookup_game(state, id)?;
    let mut game = handle.lock().await;
    let report = game.attempt_lyrics(request.song_id, &request.player, &request.words)?;
    debug!(
        game_id = %id,
        song_id = request.song_id,
        player = %request.player,
        score = report.outcome.score,
        points = report.points_awarded,
        "lyrics attempt scored"
    );

    let outcome = report.outcome;
    Ok(AttemptResponse {
        correct: outcome.correct,
        expected_lines: outcome.expected_lines,
        token_results: outcome
            .token_results
            .into_iter()
            .map(|result| crate::dto::game::TokenResultDto {
                expected: result.expected,
                attempted: result.attempted,
                correct: result.correct,
            })
            .collect(),
        score: outcome.score,
        points_awarded: report.points_awarded,
    })
}
