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
        game::{SongInput, SongSummary},
        roster::{CreateCategoryRequest, RenameCategoryRequest},
    },
    error::AppError,
    services::catalog_service,
    state::SharedState,
};

/// Routes managing a game's song and category catalog.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games/{id}/songs", post(add_song))
        .route(
            "/games/{id}/songs/{song_id}",
            put(update_song).delete(delete_song),
        )
        .route("/games/{id}/categories", post(add_category))
        .route(
            "/games/{id}/categories/{name}",
            put(rename_category).delete(delete_category),
        )
}

/// Add a song to the game, creating its category on demand.
#[utoipa::path(
    post,
    path = "/games/{id}/songs",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = SongInput,
    responses((status = 200, description = "Song added", body = SongSummary))
)]
pub async fn add_song(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<SongInput>>,
) -> Result<Json<SongSummary>, AppError> {
    Ok(Json(catalog_service::add_song(&state, id, payload).await?))
}

/// Replace every field of a song, re-parsing its lyrics.
#[utoipa::path(
    put,
    path = "/games/{id}/songs/{song_id}",
    tag = "catalog",
    params(
        ("id" = Uuid, Path, description = "Identifier of the game"),
        ("song_id" = u64, Path, description = "Identifier of the song")
    ),
    request_body = SongInput,
    responses((status = 200, description = "Song updated", body = SongSummary))
)]
pub async fn update_song(
    State(state): State<SharedState>,
    Path((id, song_id)): Path<(Uuid, u64)>,
    Valid(Json(payload)): Valid<Json<SongInput>>,
) -> Result<Json<SongSummary>, AppError> {
    Ok(Json(
        catalog_service::update_song(&state, id, song_id, payload).await?,
    ))
}

/// Delete a song, pruning its category when emptied.
#[utoipa::path(
    delete,
    path = "/games/{id}/songs/{song_id}",
    tag = "catalog",
    params(
        ("id" = Uuid, Path, description = "Identifier of the game"),
        ("song_id" = u64, Path, description = "Identifier of the song")
    ),
    responses((status = 200, description = "Song deleted", body = ActionResponse))
)]
pub async fn delete_song(
    State(state): State<SharedState>,
    Path((id, song_id)): Path<(Uuid, u64)>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::delete_song(&state, id, song_id).await?;
    Ok(Json(ActionResponse::new("song deleted")))
}

/// Create an empty category.
#[utoipa::path(
    post,
    path = "/games/{id}/categories",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = CreateCategoryRequest,
    responses((status = 200, description = "Category created", body = ActionResponse))
)]
pub async fn add_category(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<CreateCategoryRequest>>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::add_category(&state, id, payload).await?;
    Ok(Json(ActionResponse::new("category created")))
}

/// Rename a category, rewriting every member song.
#[utoipa::path(
    put,
    path = "/games/{id}/categories/{name}",
    tag = "catalog",
    params(
        ("id" = Uuid, Path, description = "Identifier of the game"),
        ("name" = String, Path, description = "Current category name")
    ),
    request_body = RenameCategoryRequest,
    responses((status = 200, description = "Category renamed", body = ActionResponse))
)]
pub async fn rename_category(
    State(state): State<SharedState>,
    Path((id, name)): Path<(Uuid, String)>,
    Valid(Json(payload)): Valid<Json<RenameCategoryRequest>>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::rename_category(&state, id, name, payload).await?;
    Ok(Json(ActionResponse::new("category renamed")))
}

/// Delete a category and every song it lists.
#[utoipa::path(
    delete,
    path = "/games/{id}/categories/{name}",
    tag = "catalog",
    params(
        ("id" = Uuid, Path, description = "Identifier of the game"),
        ("name" = String, Path, description = "Category name")
    ),
    responses((status = 200, description = "Category deleted", body = ActionResponse))
)]
pub async fn delete_category(
    State(state): State<SharedState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::delete_category(&state, id, name).await?;
    Ok(Json(ActionResponse::new("category deleted")))
}
