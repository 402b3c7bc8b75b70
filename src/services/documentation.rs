use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Verse Hunt backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::create_game,
        crate::routes::game::get_game,
        crate::routes::game::start_game,
        crate::routes::game::next_turn,
        crate::routes::game::select_category,
        crate::routes::game::complete_category,
        crate::routes::game::select_song,
        crate::routes::game::attempt_lyrics,
        crate::routes::catalog::add_song,
        crate::routes::catalog::update_song,
        crate::routes::catalog::delete_song,
        crate::routes::catalog::add_category,
        crate::routes::catalog::rename_category,
        crate::routes::catalog::delete_category,
        crate::routes::roster::add_player,
        crate::routes::roster::update_player,
        crate::routes::roster::remove_player,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::ActionResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::PlayerInput,
            crate::dto::game::SongInput,
            crate::dto::game::GameSnapshot,
            crate::dto::game::GamePhaseDto,
            crate::dto::game::SongSummary,
            crate::dto::game::LyricLineDto,
            crate::dto::game::PlayerSummary,
            crate::dto::game::CategorySummary,
            crate::dto::game::ScoreEntry,
            crate::dto::game::StartGameResponse,
            crate::dto::game::AdvanceTurnResponse,
            crate::dto::game::CategorySelection,
            crate::dto::game::SongSelection,
            crate::dto::game::AttemptRequest,
            crate::dto::game::AttemptResponse,
            crate::dto::game::TokenResultDto,
            crate::dto::roster::AddPlayerRequest,
            crate::dto::roster::UpdatePlayerRequest,
            crate::dto::roster::CreateCategoryRequest,
            crate::dto::roster::RenameCategoryRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "game", description = "Game lifecycle, turn rotation, and attempts"),
        (name = "catalog", description = "Per-game song and category management"),
        (name = "roster", description = "Per-game player management"),
    )
)]
pub struct ApiDoc;
