use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{post, put},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        common::ActionResponse,
        roster::{AddPlayerRequest, UpdatePlayerRequest},
    },
    error::AppError,
    services::roster_service,
    state::SharedState,
};

/// Routes managing a game's player roster.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games/{id}/players", post(add_player))
        .route(
            "/games/{id}/players/{username}",
            put(update_player).delete(remove_player),
        )
}

/// Add a player to the game.
#[utoipa::path(
    post,
    path = "/games/{id}/players",
    tag = "roster",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = AddPlayerRequest,
    responses(
        (status = 200, description = "Player added", body = ActionResponse),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn add_player(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<AddPlayerRequest>>,
) -> Result<Json<ActionResponse>, AppError> {
    roster_service::add_player(&state, id, payload).await?;
    Ok(Json(ActionResponse::new("player added")))
}

/// Update a player's username or avatar.
#[utoipa::path(
    put,
    path = "/games/{id}/players/{username}",
    tag = "roster",
    params(
        ("id" = Uuid, Path, description = "Identifier of the game"),
        ("username" = String, Path, description = "Current username")
    ),
    request_body = UpdatePlayerRequest,
    responses((status = 200, description = "Player updated", body = ActionResponse))
)]
pub async fn update_player(
    State(state): State<SharedState>,
    Path((id, username)): Path<(Uuid, String)>,
    Valid(Json(payload)): Valid<Json<UpdatePlayerRequest>>,
) -> Result<Json<ActionResponse>, AppError> {
    roster_service::update_player(&state, id, username, payload).await?;
    Ok(Json(ActionResponse::new("player updated")))
}

/// Remove a player from the game.
#[utoipa::path(
    delete,
    path = "/games/{id}/players/{username}",
    tag = "roster",
    params(
        ("id" = Uuid, Path, description = "Identifier of the game"),
        ("username" = String, Path, description = "Username to remove")
    ),
    responses((status = 200, description = "Player removed", body = ActionResponse))
)]
pub async fn remove_player(
    State(state): State<SharedState>,
    Path((id, username)): Path<(Uuid, String)>,
) -> Result<Json<ActionResponse>, AppError> {
    roster_service::remove_player(&state, id, username).await?;
    Ok(Json(ActionResponse::new("player removed")))
}
