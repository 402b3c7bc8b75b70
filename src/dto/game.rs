use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{format_system_time, validation::validate_username},
    lyrics::lrc::LyricLine,
    state::game::{Game, GamePhase, Player, Song, SongFields, TurnOutcome},
};

/// Payload used to bootstrap a brand-new game instance.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateGameRequest {
    /// Display name of the game.
    #[validate(length(min = 1, message = "game name must not be empty"))]
    pub name: String,
    /// Initial roster; at least one player.
    #[validate(length(min = 1, message = "a game requires at least one player"), nested)]
    pub players: Vec<PlayerInput>,
    /// Optional initial songs, each carrying its category.
    #[serde(default)]
    #[validate(nested)]
    pub songs: Vec<SongInput>,
    /// Optional extra categories to create empty.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Incoming player definition.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PlayerInput {
    /// Username, unique within the game.
    #[validate(custom(function = validate_username))]
    pub username: String,
    /// Optional avatar reference.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Song details supplied when adding or replacing a song.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SongInput {
    /// Display title.
    #[validate(length(min = 1, message = "song title must not be empty"))]
    pub title: String,
    /// Category the song belongs to.
    #[validate(length(min = 1, message = "song category must not be empty"))]
    pub category: String,
    /// External video reference.
    #[validate(url)]
    pub video_url: String,
    /// External audio-service identifier.
    pub audio_id: String,
    /// Raw LRC document.
    pub lrc: String,
    /// Indices of lyric lines to hide.
    #[serde(default)]
    pub hidden_line_indices: Vec<usize>,
}

impl From<SongInput> for SongFields {
    fn from(input: SongInput) -> Self {
        Self {
            title: input.title,
            category: input.category,
            video_url: input.video_url,
            audio_id: input.audio_id,
            lrc: input.lrc,
            hidden_line_indices: input.hidden_line_indices,
        }
    }
}

/// Lifecycle phase as exposed to clients.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GamePhaseDto {
    /// Accepting roster and catalog edits.
    Waiting,
    /// Rounds in progress.
    Playing,
    /// Final scores available.
    Finished,
}

impl From<GamePhase> for GamePhaseDto {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Waiting => GamePhaseDto::Waiting,
            GamePhase::Playing => GamePhaseDto::Playing,
            GamePhase::Finished => GamePhaseDto::Finished,
        }
    }
}

/// One timed lyric line of a song.
#[derive(Debug, Serialize, ToSchema)]
pub struct LyricLineDto {
    /// Playback offset in milliseconds.
    pub time_ms: u64,
    /// Lyric text.
    pub text: String,
}

impl From<&LyricLine> for LyricLineDto {
    fn from(line: &LyricLine) -> Self {
        Self {
            time_ms: line.time_ms,
            text: line.text.clone(),
        }
    }
}

/// Public projection of a song.
#[derive(Debug, Serialize, ToSchema)]
pub struct SongSummary {
    /// Stable identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Category name.
    pub category: String,
    /// External video reference.
    pub video_url: String,
    /// External audio-service identifier.
    pub audio_id: String,
    /// Raw LRC document.
    pub lrc: String,
    /// Parsed lyric timeline.
    pub lines: Vec<LyricLineDto>,
    /// Indices of hidden lines.
    pub hidden_line_indices: Vec<usize>,
}

impl From<&Song> for SongSummary {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id,
            title: song.title.clone(),
            category: song.category.clone(),
            video_url: song.video_url.clone(),
            audio_id: song.audio_id.clone(),
            lrc: song.lrc.clone(),
            lines: song.lines.iter().map(Into::into).collect(),
            hidden_line_indices: song.hidden_line_indices.clone(),
        }
    }
}

/// Public projection of a player with their current score.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerSummary {
    /// Username.
    pub username: String,
    /// Optional avatar reference.
    pub avatar: Option<String>,
    /// Current score.
    pub score: i32,
}

/// A category and the song ids it lists, in insertion order.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategorySummary {
    /// Category name.
    pub name: String,
    /// Member song ids.
    pub song_ids: Vec<u64>,
}

/// One entry of the score ledger.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreEntry {
    /// Player username.
    pub username: String,
    /// Accumulated points.
    pub points: i32,
}

/// Full snapshot of a game, returned on creation and lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameSnapshot {
    /// Primary key of the game.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Creation timestamp, RFC3339.
    pub created_at: String,
    /// Last mutation timestamp, RFC3339.
    pub updated_at: String,
    /// Roster with current scores.
    pub players: Vec<PlayerSummary>,
    /// Per-game categories.
    pub categories: Vec<CategorySummary>,
    /// Per-game songs.
    pub songs: Vec<SongSummary>,
    /// Categories already consumed.
    pub played_categories: Vec<String>,
    /// Round counter (0 before start).
    pub current_round: u32,
    /// Player currently holding the turn.
    pub current_player: Option<String>,
    /// Players that already took a turn this round.
    pub players_played_this_round: Vec<String>,
    /// Lifecycle phase.
    pub state: GamePhaseDto,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let players = game
            .players
            .iter()
            .map(|Player { username, avatar }| PlayerSummary {
                username: username.clone(),
                avatar: avatar.clone(),
                score: game.scores.get(username).copied().unwrap_or(0),
            })
            .collect();

        Self {
            id: game.id,
            name: game.name.clone(),
            created_at: format_system_time(game.created_at),
            updated_at: format_system_time(game.updated_at),
            players,
            categories: game
                .categories
                .iter()
                .map(|(name, song_ids)| CategorySummary {
                    name: name.clone(),
                    song_ids: song_ids.clone(),
                })
                .collect(),
            songs: game.songs.values().map(Into::into).collect(),
            played_categories: game.played_categories.clone(),
            current_round: game.current_round,
            current_player: game.current_player.clone(),
            players_played_this_round: game.players_played_this_round.clone(),
            state: game.phase.into(),
        }
    }
}

/// Response to starting a game.
#[derive(Debug, Serialize, ToSchema)]
pub struct StartGameResponse {
    /// Player opening the first round.
    pub current_player: String,
    /// Round counter, always 1 here.
    pub round: u32,
}

/// Response to advancing the turn rotation.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdvanceTurnResponse {
    /// Lifecycle phase after the advance.
    pub state: GamePhaseDto,
    /// Round counter after the advance.
    pub round: u32,
    /// True when the previous round was exhausted by this advance.
    pub round_complete: bool,
    /// Player now holding the turn; absent when the game finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_player: Option<String>,
    /// Final score ledger; present only when the game finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_scores: Option<Vec<ScoreEntry>>,
}

impl AdvanceTurnResponse {
    /// Project a turn outcome together with the post-advance round counter.
    pub fn from_outcome(outcome: TurnOutcome, round: u32, state: GamePhase) -> Self {
        match outcome {
            TurnOutcome::RoundInProgress { current_player } => Self {
                state: state.into(),
                round,
                round_complete: false,
                current_player: Some(current_player),
                final_scores: None,
            },
            TurnOutcome::NewRound {
                round,
                current_player,
            } => Self {
                state: state.into(),
                round,
                round_complete: true,
                current_player: Some(current_player),
                final_scores: None,
            },
            TurnOutcome::Finished { scores } => Self {
                state: state.into(),
                round,
                round_complete: true,
                current_player: None,
                final_scores: Some(
                    scores
                        .into_iter()
                        .map(|(username, points)| ScoreEntry { username, points })
                        .collect(),
                ),
            },
        }
    }
}

/// Request naming a category of the game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CategorySelection {
    /// Category name.
    #[validate(length(min = 1, message = "category name must not be empty"))]
    pub category: String,
}

/// Request naming a song of the game.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SongSelection {
    /// Song identifier.
    pub song_id: u64,
}

/// A lyrics reconstruction attempt by one player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AttemptRequest {
    /// Target song identifier.
    pub song_id: u64,
    /// Username of the attempting player.
    #[validate(custom(function = validate_username))]
    pub player: String,
    /// Ordered guessed words.
    #[serde(default)]
    pub words: Vec<String>,
}

/// Pairwise judgement of one expected token against one attempted token.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResultDto {
    /// Token extracted from the hidden line.
    pub expected: String,
    /// Token the player supplied at the same position.
    pub attempted: String,
    /// Whether the pair matched.
    pub correct: bool,
}

/// Scoring report for one attempt.
#[derive(Debug, Serialize, ToSchema)]
pub struct AttemptResponse {
    /// True when every expected token was matched.
    pub correct: bool,
    /// Texts of the hidden lines, for display.
    pub expected_lines: Vec<String>,
    /// Positional token comparisons.
    pub token_results: Vec<TokenResultDto>,
    /// Percentage score, floored.
    pub score: u32,
    /// Points credited to the player's ledger entry.
    pub points_awarded: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_serialize_in_snake_case() {
        assert_eq!(
            serde_json::to_value(GamePhaseDto::Waiting).unwrap(),
            serde_json::json!("waiting")
        );
        assert_eq!(
            serde_json::to_value(GamePhaseDto::Finished).unwrap(),
            serde_json::json!("finished")
        );
    }

    #[test]
    fn advance_response_omits_absent_fields() {
        let response = AdvanceTurnResponse::from_outcome(
            TurnOutcome::RoundInProgress {
                current_player: "alice".into(),
            },
            1,
            GamePhase::Playing,
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["current_player"], "alice");
        assert_eq!(value["round_complete"], false);
        assert!(value.get("final_scores").is_none());
    }

    #[test]
    fn finished_response_carries_the_ledger() {
        let mut scores = indexmap::IndexMap::new();
        scores.insert("alice".to_string(), 10);
        scores.insert("bob".to_string(), 0);
        let response =
            AdvanceTurnResponse::from_outcome(TurnOutcome::Finished { scores }, 3, GamePhase::Finished);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["state"], "finished");
        assert!(value.get("current_player").is_none());
        assert_eq!(value["final_scores"][0]["username"], "alice");
        assert_eq!(value["final_scores"][0]["points"], 10);
    }
}
