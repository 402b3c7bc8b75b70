use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::game::{
        AdvanceTurnResponse, AttemptRequest, AttemptResponse, CategorySelection,
        CreateGameRequest, GameSnapshot, SongSelection, SongSummary, StartGameResponse,
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes driving game creation, turn rotation, and attempts.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/start", post(start_game))
        .route("/games/{id}/next-turn", post(next_turn))
        .route("/games/{id}/select-category", post(select_category))
        .route("/games/{id}/complete-category", post(complete_category))
        .route("/games/{id}/select-song", post(select_song))
        .route("/games/{id}/attempt", post(attempt_lyrics))
}

/// Create a fresh game in the waiting phase.
#[utoipa::path(
    post,
    path = "/games",
    tag = "game",
    request_body = CreateGameRequest,
    responses((status = 200, description = "Game created", body = GameSnapshot))
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<CreateGameRequest>>,
) -> Result<Json<GameSnapshot>, AppError> {
    Ok(Json(game_service::create_game(&state, payload).await?))
}

/// Retrieve the full snapshot of a game.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses((status = 200, description = "Game snapshot", body = GameSnapshot))
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameSnapshot>, AppError> {
    Ok(Json(game_service::get_game(&state, id).await?))
}

/// Start a waiting game, picking a random opening player.
#[utoipa::path(
    post,
    path = "/games/{id}/start",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses((status = 200, description = "Game started", body = StartGameResponse))
)]
pub async fn start_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StartGameResponse>, AppError> {
    Ok(Json(game_service::start_game(&state, id).await?))
}

/// Advance the turn rotation.
#[utoipa::path(
    post,
    path = "/games/{id}/next-turn",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses((status = 200, description = "Turn advanced", body = AdvanceTurnResponse))
)]
pub async fn next_turn(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceTurnResponse>, AppError> {
    Ok(Json(game_service::advance_turn(&state, id).await?))
}

/// Preview the songs of a category without consuming it.
#[utoipa::path(
    post,
    path = "/games/{id}/select-category",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = CategorySelection,
    responses((status = 200, description = "Songs of the category", body = [SongSummary]))
)]
pub async fn select_category(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<CategorySelection>>,
) -> Result<Json<Vec<SongSummary>>, AppError> {
    Ok(Json(
        game_service::select_category(&state, id, payload).await?,
    ))
}

/// Mark a category as consumed for round-advance decisions.
#[utoipa::path(
    post,
    path = "/games/{id}/complete-category",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = CategorySelection,
    responses((status = 200, description = "Category marked as played"))
)]
pub async fn complete_category(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<CategorySelection>>,
) -> Result<Json<crate::dto::common::ActionResponse>, AppError> {
    game_service::complete_category(&state, id, payload).await?;
    Ok(Json(crate::dto::common::ActionResponse::new(
        "category marked as played",
    )))
}

/// Resolve a song for presentation.
#[utoipa::path(
    post,
    path = "/games/{id}/select-song",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = SongSelection,
    responses((status = 200, description = "Song record", body = SongSummary))
)]
pub async fn select_song(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SongSelection>,
) -> Result<Json<SongSummary>, AppError> {
    Ok(Json(game_service::select_song(&state, id, payload).await?))
}

/// Score an ordered word attempt against a song's hidden lines.
#[utoipa::path(
    post,
    path = "/games/{id}/attempt",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = AttemptRequest,
    responses((status = 200, description = "Attempt scored", body = AttemptResponse))
)]
pub async fn attempt_lyrics(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<AttemptRequest>>,
) -> Result<Json<AttemptResponse>, AppError> {
    Ok(Json(
        game_service::attempt_lyrics(&state, id, payload).await?,
    ))
}
