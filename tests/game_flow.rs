//! End-to-end flow through the service layer: create a game, rotate turns,
//! score attempts, and finish once every category is played.

use uuid::Uuid;

use verse_hunt_back::{
    dto::game::{
        AttemptRequest, CategorySelection, CreateGameRequest, GamePhaseDto, PlayerInput,
        SongInput, SongSelection,
    },
    error::ServiceError,
    services::game_service,
    state::AppState,
};

fn create_request() -> CreateGameRequest {
    CreateGameRequest {
        name: "friday night".into(),
        players: vec![
            PlayerInput {
                username: "A".into(),
                avatar: None,
            },
            PlayerInput {
                username: "B".into(),
                avatar: None,
            },
        ],
        songs: vec![SongInput {
            title: "Greeting Song".into(),
            category: "Pop".into(),
            video_url: "https://example.com/watch?v=greeting".into(),
            audio_id: "greeting-1".into(),
            lrc: "[00:01.000]hello world\n[00:05.000]goodbye moon".into(),
            hidden_line_indices: vec![0],
        }],
        categories: vec![],
    }
}

fn attempt(song_id: u64, player: &str) -> AttemptRequest {
    AttemptRequest {
        song_id,
        player: player.into(),
        words: vec!["hello".into(), "world".into()],
    }
}

#[tokio::test]
async fn full_game_awards_points_and_finishes() {
    let state = AppState::new();

    let snapshot = game_service::create_game(&state, create_request())
        .await
        .unwrap();
    assert_eq!(snapshot.state, GamePhaseDto::Waiting);
    assert_eq!(snapshot.current_round, 0);
    assert_eq!(snapshot.categories.len(), 1);
    let song_id = snapshot.songs[0].id;
    let game_id = snapshot.id;

    let started = game_service::start_game(&state, game_id).await.unwrap();
    assert_eq!(started.round, 1);
    assert!(["A", "B"].contains(&started.current_player.as_str()));

    // First advance: the other player is still owed a turn this round.
    let turn = game_service::advance_turn(&state, game_id).await.unwrap();
    assert!(!turn.round_complete);
    let second = turn.current_player.unwrap();
    assert_ne!(second, started.current_player);

    // Second advance exhausts the round; the unplayed category opens round 2.
    let turn = game_service::advance_turn(&state, game_id).await.unwrap();
    assert!(turn.round_complete);
    assert_eq!(turn.round, 2);
    assert!(turn.final_scores.is_none());

    // Both players reconstruct the hidden line perfectly.
    for player in ["A", "B"] {
        let report = game_service::attempt_lyrics(&state, game_id, attempt(song_id, player))
            .await
            .unwrap();
        assert!(report.correct);
        assert_eq!(report.score, 100);
        assert_eq!(report.points_awarded, 10);
        assert_eq!(report.expected_lines, vec!["hello world".to_string()]);
    }

    game_service::complete_category(
        &state,
        game_id,
        CategorySelection {
            category: "Pop".into(),
        },
    )
    .await
    .unwrap();

    // With the sole category consumed, the game must finish once the current
    // round exhausts, regardless of how many turns that takes.
    let mut final_scores = None;
    for _ in 0..4 {
        let turn = game_service::advance_turn(&state, game_id).await.unwrap();
        if let Some(scores) = turn.final_scores {
            assert_eq!(turn.state, GamePhaseDto::Finished);
            final_scores = Some(scores);
            break;
        }
    }
    let final_scores = final_scores.expect("game should have finished");
    assert_eq!(final_scores.len(), 2);
    for entry in final_scores {
        assert_eq!(entry.points, 10, "player {}", entry.username);
    }

    // Terminal state rejects further rotation.
    let err = game_service::advance_turn(&state, game_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));
}

#[tokio::test]
async fn preview_does_not_consume_a_category() {
    let state = AppState::new();
    let snapshot = game_service::create_game(&state, create_request())
        .await
        .unwrap();
    let game_id = snapshot.id;

    let songs = game_service::select_category(
        &state,
        game_id,
        CategorySelection {
            category: "Pop".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(songs.len(), 1);

    let refreshed = game_service::get_game(&state, game_id).await.unwrap();
    assert!(refreshed.played_categories.is_empty());

    let song = game_service::select_song(
        &state,
        game_id,
        SongSelection {
            song_id: songs[0].id,
        },
    )
    .await
    .unwrap();
    assert_eq!(song.title, "Greeting Song");
}

#[tokio::test]
async fn unknown_references_report_not_found() {
    let state = AppState::new();

    let err = game_service::get_game(&state, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let snapshot = game_service::create_game(&state, create_request())
        .await
        .unwrap();
    let err = game_service::select_song(
        &state,
        snapshot.id,
        SongSelection { song_id: 999 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
