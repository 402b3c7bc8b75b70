use std::time::SystemTime;

use indexmap::IndexMap;
use rand::{Rng, seq::IndexedRandom};
use thiserror::Error;
use uuid::Uuid;

use crate::lyrics::{
    lrc::{LyricLine, parse_lrc},
    scoring::{AttemptOutcome, points_for, score_attempt},
};

/// Lifecycle phase of a game session. Transitions are one-way:
/// `Waiting → Playing → Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Initial phase; the roster and catalog can be edited freely.
    Waiting,
    /// Rounds and turns are in progress.
    Playing,
    /// Every category has been played; final scores are available.
    Finished,
}

/// Errors raised by game session and catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game must be waiting for this operation.
    #[error("game is not waiting to start (current phase: {0:?})")]
    NotWaiting(GamePhase),
    /// The game must be playing for this operation.
    #[error("game is not in the playing phase (current phase: {0:?})")]
    NotPlaying(GamePhase),
    /// The named category is not part of this game.
    #[error("category `{0}` is not part of this game")]
    UnknownCategory(String),
    /// The song id is not part of this game.
    #[error("song `{0}` is not part of this game")]
    UnknownSong(u64),
    /// The username does not belong to any player of this game.
    #[error("player `{0}` is not part of this game")]
    UnknownPlayer(String),
    /// A player with this username already exists in the game.
    #[error("player `{0}` already exists in this game")]
    DuplicatePlayer(String),
    /// The game has no players to rotate through.
    #[error("game has no players")]
    NoPlayers,
}

/// A song in a game's catalog, with its parsed lyric timeline.
#[derive(Debug, Clone)]
pub struct Song {
    /// Stable identifier, unique across the process lifetime.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Name of the category the song belongs to.
    pub category: String,
    /// External video reference (e.g. a YouTube URL).
    pub video_url: String,
    /// External audio-service identifier (e.g. a Spotify track id).
    pub audio_id: String,
    /// Raw LRC document the timeline was parsed from.
    pub lrc: String,
    /// Timed lyric lines parsed from `lrc`, in input order.
    pub lines: Vec<LyricLine>,
    /// Indices into `lines` whose text must be guessed. Out-of-range values
    /// are tolerated and simply yield no expected text.
    pub hidden_line_indices: Vec<usize>,
}

/// Caller-supplied fields for creating or replacing a song.
#[derive(Debug, Clone)]
pub struct SongFields {
    /// Display title.
    pub title: String,
    /// Category the song belongs to (created on demand).
    pub category: String,
    /// External video reference.
    pub video_url: String,
    /// External audio-service identifier.
    pub audio_id: String,
    /// Raw LRC document.
    pub lrc: String,
    /// Indices of lines to hide.
    pub hidden_line_indices: Vec<usize>,
}

impl Song {
    /// Build a song from its fields, parsing the LRC timeline.
    fn new(id: u64, fields: SongFields) -> Self {
        let lines = parse_lrc(&fields.lrc);
        Self {
            id,
            title: fields.title,
            category: fields.category,
            video_url: fields.video_url,
            audio_id: fields.audio_id,
            lrc: fields.lrc,
            lines,
            hidden_line_indices: fields.hidden_line_indices,
        }
    }
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Username, unique within the game.
    pub username: String,
    /// Optional avatar reference.
    pub avatar: Option<String>,
}

/// Result of scoring one lyrics attempt, including the points granted.
#[derive(Debug, Clone)]
pub struct AttemptReport {
    /// Scorer output: correctness, hidden line texts, token results, score.
    pub outcome: AttemptOutcome,
    /// Points added to the attempting player's ledger entry.
    pub points_awarded: i32,
}

/// Result of advancing the turn rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Players are still owed a turn this round.
    RoundInProgress {
        /// Player now holding the turn.
        current_player: String,
    },
    /// The round was exhausted and a new one started.
    NewRound {
        /// The new round number.
        round: u32,
        /// Player opening the new round.
        current_player: String,
    },
    /// Every category has been played; the game is over.
    Finished {
        /// Final score ledger, username → points.
        scores: IndexMap<String, i32>,
    },
}

/// One game session: roster, per-game song/category catalog, round and turn
/// rotation state, and the score ledger.
#[derive(Debug, Clone)]
pub struct Game {
    /// Primary key of the game.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last mutation timestamp.
    pub updated_at: SystemTime,
    /// Participating players, in join order.
    pub players: Vec<Player>,
    /// Songs owned by this game, keyed by id.
    pub songs: IndexMap<u64, Song>,
    /// Category name → member song ids. Emptied categories are pruned.
    pub categories: IndexMap<String, Vec<u64>>,
    /// Categories already consumed by play.
    pub played_categories: Vec<String>,
    /// Round counter; 0 before the game starts, 1 from the first round on.
    pub current_round: u32,
    /// Username of the player currently holding the turn.
    pub current_player: Option<String>,
    /// Players that already took their turn in the current round.
    pub players_played_this_round: Vec<String>,
    /// Lifecycle phase.
    pub phase: GamePhase,
    /// Score ledger; every key is a current player.
    pub scores: IndexMap<String, i32>,
}

impl Game {
    /// Build a fresh game in the waiting phase with zeroed scores.
    pub fn new(name: String, players: Vec<Player>) -> Result<Self, GameError> {
        let mut scores = IndexMap::new();
        for player in &players {
            if scores.insert(player.username.clone(), 0).is_some() {
                return Err(GameError::DuplicatePlayer(player.username.clone()));
            }
        }

        let timestamp = SystemTime::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: timestamp,
            updated_at: timestamp,
            players,
            songs: IndexMap::new(),
            categories: IndexMap::new(),
            played_categories: Vec::new(),
            current_round: 0,
            current_player: None,
            players_played_this_round: Vec::new(),
            phase: GamePhase::Waiting,
            scores,
        })
    }

    fn touch(&mut self) {
        self.updated_at = SystemTime::now();
    }

    // -----------------------------------------------------------------------
    // Catalog
    // -----------------------------------------------------------------------

    /// Add a song under a caller-allocated id, creating its category on
    /// demand. Returns the stored song.
    pub fn add_song(&mut self, id: u64, fields: SongFields) -> &Song {
        let song = Song::new(id, fields);
        self.categories
            .entry(song.category.clone())
            .or_default()
            .push(id);
        self.songs.insert(id, song);
        self.touch();
        &self.songs[&id]
    }

    /// Replace every field of an existing song, re-parsing its lyrics and
    /// moving it between categories when the category changed.
    pub fn update_song(&mut self, id: u64, fields: SongFields) -> Result<&Song, GameError> {
        let old_category = self
            .songs
            .get(&id)
            .ok_or(GameError::UnknownSong(id))?
            .category
            .clone();

        if old_category != fields.category {
            self.unlink_song_from_category(id, &old_category);
            self.categories
                .entry(fields.category.clone())
                .or_default()
                .push(id);
        }

        self.songs.insert(id, Song::new(id, fields));
        self.touch();
        Ok(&self.songs[&id])
    }

    /// Delete a song, pruning its category if that leaves it empty.
    pub fn remove_song(&mut self, id: u64) -> Result<(), GameError> {
        let song = self
            .songs
            .shift_remove(&id)
            .ok_or(GameError::UnknownSong(id))?;
        self.unlink_song_from_category(id, &song.category);
        self.touch();
        Ok(())
    }

    /// Create an empty category; a no-op when the name already exists.
    pub fn add_category(&mut self, name: &str) {
        self.categories.entry(name.to_string()).or_default();
        self.touch();
    }

    /// Rename a category, rewriting the `category` field of every member
    /// song. Renaming a category to itself is a no-op.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<(), GameError> {
        if old == new {
            return Ok(());
        }
        let song_ids = self
            .categories
            .shift_remove(old)
            .ok_or_else(|| GameError::UnknownCategory(old.to_string()))?;

        for id in &song_ids {
            if let Some(song) = self.songs.get_mut(id) {
                song.category = new.to_string();
            }
        }
        self.categories
            .entry(new.to_string())
            .or_default()
            .extend(song_ids);
        self.touch();
        Ok(())
    }

    /// Delete a category and every song it lists.
    pub fn remove_category(&mut self, name: &str) -> Result<(), GameError> {
        let song_ids = self
            .categories
            .shift_remove(name)
            .ok_or_else(|| GameError::UnknownCategory(name.to_string()))?;
        for id in song_ids {
            self.songs.shift_remove(&id);
        }
        self.touch();
        Ok(())
    }

    fn unlink_song_from_category(&mut self, id: u64, category: &str) {
        if let Some(song_ids) = self.categories.get_mut(category) {
            song_ids.retain(|&member| member != id);
            if song_ids.is_empty() {
                self.categories.shift_remove(category);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Roster
    // -----------------------------------------------------------------------

    /// Add a player with a zeroed ledger entry. Usernames are unique.
    pub fn add_player(
        &mut self,
        username: String,
        avatar: Option<String>,
    ) -> Result<(), GameError> {
        if self.scores.contains_key(&username) {
            return Err(GameError::DuplicatePlayer(username));
        }
        self.scores.insert(username.clone(), 0);
        self.players.push(Player { username, avatar });
        self.touch();
        Ok(())
    }

    /// Update a player. A username change propagates into the score ledger,
    /// the current-player pointer, and the per-round played list. The avatar
    /// uses the double-option convention: `None` keeps it, `Some(None)`
    /// clears it, `Some(Some(_))` replaces it.
    pub fn update_player(
        &mut self,
        username: &str,
        new_username: Option<String>,
        avatar: Option<Option<String>>,
    ) -> Result<(), GameError> {
        let position = self
            .players
            .iter()
            .position(|player| player.username == username)
            .ok_or_else(|| GameError::UnknownPlayer(username.to_string()))?;

        if let Some(new_username) = new_username
            && new_username != username
        {
            if self.scores.contains_key(&new_username) {
                return Err(GameError::DuplicatePlayer(new_username));
            }
            if let Some(score) = self.scores.shift_remove(username) {
                self.scores.insert(new_username.clone(), score);
            }
            if self.current_player.as_deref() == Some(username) {
                self.current_player = Some(new_username.clone());
            }
            for played in &mut self.players_played_this_round {
                if played == username {
                    *played = new_username.clone();
                }
            }
            self.players[position].username = new_username;
        }

        if let Some(avatar) = avatar {
            self.players[position].avatar = avatar;
        }
        self.touch();
        Ok(())
    }

    /// Remove a player together with their ledger and round-tracking entries.
    /// The current-player pointer is cleared when it named the removed player.
    pub fn remove_player(&mut self, username: &str) -> Result<(), GameError> {
        let position = self
            .players
            .iter()
            .position(|player| player.username == username)
            .ok_or_else(|| GameError::UnknownPlayer(username.to_string()))?;

        self.players.remove(position);
        self.scores.shift_remove(username);
        self.players_played_this_round
            .retain(|played| played != username);
        if self.current_player.as_deref() == Some(username) {
            self.current_player = None;
        }
        self.touch();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Start the game: pick a random opening player and enter round 1.
    pub fn start(&mut self, rng: &mut impl Rng) -> Result<String, GameError> {
        if self.phase != GamePhase::Waiting {
            return Err(GameError::NotWaiting(self.phase));
        }
        let opener = self.pick_player(rng, None)?;

        self.phase = GamePhase::Playing;
        self.current_round = 1;
        self.players_played_this_round.clear();
        self.current_player = Some(opener.clone());
        self.touch();
        Ok(opener)
    }

    /// Mark the current player's turn as taken and rotate to the next one,
    /// starting a new round or finishing the game when the round exhausts.
    pub fn advance_turn(&mut self, rng: &mut impl Rng) -> Result<TurnOutcome, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::NotPlaying(self.phase));
        }

        let finished_player = self.current_player.clone();
        if let Some(player) = &finished_player
            && !self.players_played_this_round.contains(player)
        {
            self.players_played_this_round.push(player.clone());
        }

        let waiting: Vec<String> = self
            .players
            .iter()
            .filter(|player| !self.players_played_this_round.contains(&player.username))
            .map(|player| player.username.clone())
            .collect();

        let outcome = if let Some(next) = waiting.choose(rng) {
            self.current_player = Some(next.clone());
            TurnOutcome::RoundInProgress {
                current_player: next.clone(),
            }
        } else if self.remaining_categories().is_empty() {
            self.phase = GamePhase::Finished;
            self.current_player = None;
            TurnOutcome::Finished {
                scores: self.scores.clone(),
            }
        } else {
            // Pick before mutating so an emptied roster leaves the round
            // state untouched.
            let opener = self.pick_player(rng, finished_player.as_deref())?;
            self.current_round += 1;
            self.players_played_this_round.clear();
            self.current_player = Some(opener.clone());
            TurnOutcome::NewRound {
                round: self.current_round,
                current_player: opener,
            }
        };

        self.touch();
        Ok(outcome)
    }

    /// List the songs of a category without touching any round state, so a
    /// client can preview before committing.
    pub fn select_category(&self, name: &str) -> Result<Vec<&Song>, GameError> {
        let song_ids = self
            .categories
            .get(name)
            .ok_or_else(|| GameError::UnknownCategory(name.to_string()))?;
        Ok(song_ids.iter().filter_map(|id| self.songs.get(id)).collect())
    }

    /// Mark a category as consumed. Idempotent.
    pub fn complete_category(&mut self, name: &str) -> Result<(), GameError> {
        if !self.categories.contains_key(name) {
            return Err(GameError::UnknownCategory(name.to_string()));
        }
        if !self.played_categories.iter().any(|played| played == name) {
            self.played_categories.push(name.to_string());
            self.touch();
        }
        Ok(())
    }

    /// Resolve a song of this game by id.
    pub fn song(&self, id: u64) -> Result<&Song, GameError> {
        self.songs.get(&id).ok_or(GameError::UnknownSong(id))
    }

    /// Score an ordered word attempt against a song's hidden lines and credit
    /// the attempting player's ledger entry.
    pub fn attempt_lyrics(
        &mut self,
        song_id: u64,
        player: &str,
        words: &[String],
    ) -> Result<AttemptReport, GameError> {
        let song = self.song(song_id)?;
        let outcome = score_attempt(&song.lines, &song.hidden_line_indices, words);

        let score = self
            .scores
            .get_mut(player)
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
        let points_awarded = points_for(outcome.score);
        *score += points_awarded;
        self.touch();

        Ok(AttemptReport {
            outcome,
            points_awarded,
        })
    }

    fn remaining_categories(&self) -> Vec<&String> {
        self.categories
            .keys()
            .filter(|name| !self.played_categories.contains(name))
            .collect()
    }

    /// Uniform random pick over the roster, excluding `avoid` unless that
    /// would leave no candidate.
    fn pick_player(&self, rng: &mut impl Rng, avoid: Option<&str>) -> Result<String, GameError> {
        let mut candidates: Vec<&str> = self
            .players
            .iter()
            .map(|player| player.username.as_str())
            .filter(|username| Some(*username) != avoid)
            .collect();
        if candidates.is_empty() {
            candidates = self
                .players
                .iter()
                .map(|player| player.username.as_str())
                .collect();
        }
        candidates
            .choose(rng)
            .map(|username| username.to_string())
            .ok_or(GameError::NoPlayers)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn players(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .map(|name| Player {
                username: name.to_string(),
                avatar: None,
            })
            .collect()
    }

    fn song_fields(category: &str, lrc: &str, hidden: &[usize]) -> SongFields {
        SongFields {
            title: "Test Song".into(),
            category: category.into(),
            video_url: "https://example.com/watch".into(),
            audio_id: "track-1".into(),
            lrc: lrc.into(),
            hidden_line_indices: hidden.to_vec(),
        }
    }

    fn game_with_category() -> Game {
        let mut game =
            Game::new("quiz night".into(), players(&["alice", "bob", "carol"])).unwrap();
        game.add_song(1, song_fields("Pop", "[00:01]hello world", &[0]));
        game
    }

    #[test]
    fn new_game_rejects_duplicate_usernames() {
        let err = Game::new("dup".into(), players(&["alice", "alice"])).unwrap_err();
        assert_eq!(err, GameError::DuplicatePlayer("alice".into()));
    }

    #[test]
    fn start_picks_one_roster_player_and_enters_round_one() {
        let mut game = game_with_category();
        let opener = game.start(&mut rng()).unwrap();
        assert!(game.players.iter().any(|p| p.username == opener));
        assert_eq!(game.current_player.as_deref(), Some(opener.as_str()));
        assert_eq!(game.current_round, 1);
        assert_eq!(game.phase, GamePhase::Playing);
        assert!(game.players_played_this_round.is_empty());
    }

    #[test]
    fn start_requires_waiting_phase() {
        let mut game = game_with_category();
        game.start(&mut rng()).unwrap();
        assert!(matches!(
            game.start(&mut rng()),
            Err(GameError::NotWaiting(GamePhase::Playing))
        ));
    }

    #[test]
    fn advance_requires_playing_phase() {
        let mut game = game_with_category();
        assert!(matches!(
            game.advance_turn(&mut rng()),
            Err(GameError::NotPlaying(GamePhase::Waiting))
        ));
    }

    #[test]
    fn rotation_visits_every_player_once_per_round() {
        let mut game = game_with_category();
        let mut rng = rng();
        game.start(&mut rng).unwrap();

        for expected_played in 1..game.players.len() {
            let finished = game.current_player.clone().unwrap();
            match game.advance_turn(&mut rng).unwrap() {
                TurnOutcome::RoundInProgress { current_player } => {
                    assert_ne!(current_player, finished);
                    assert!(!game.players_played_this_round.contains(&current_player));
                }
                other => panic!("round ended early: {other:?}"),
            }
            assert_eq!(game.players_played_this_round.len(), expected_played);
        }

        // Third advance exhausts the round; the unplayed category forces a
        // new round rather than a finish.
        let finished = game.current_player.clone().unwrap();
        match game.advance_turn(&mut rng).unwrap() {
            TurnOutcome::NewRound {
                round,
                current_player,
            } => {
                assert_eq!(round, 2);
                assert_ne!(current_player, finished);
            }
            other => panic!("expected a new round, got {other:?}"),
        }
        assert!(game.players_played_this_round.is_empty());
        assert_eq!(game.current_round, 2);
    }

    #[test]
    fn sole_player_keeps_the_turn_across_rounds() {
        let mut game = Game::new("solo".into(), players(&["alice"])).unwrap();
        game.add_song(1, song_fields("Pop", "[00:01]hello", &[0]));
        let mut rng = rng();
        game.start(&mut rng).unwrap();
        match game.advance_turn(&mut rng).unwrap() {
            TurnOutcome::NewRound { current_player, .. } => assert_eq!(current_player, "alice"),
            other => panic!("expected a new round, got {other:?}"),
        }
    }

    #[test]
    fn emptied_roster_fails_the_advance_without_touching_round_state() {
        let mut game = game_with_category();
        let mut rng = rng();
        game.start(&mut rng).unwrap();
        for player in ["alice", "bob", "carol"] {
            game.remove_player(player).unwrap();
        }

        assert!(matches!(
            game.advance_turn(&mut rng),
            Err(GameError::NoPlayers)
        ));
        assert_eq!(game.current_round, 1);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn game_finishes_exactly_when_all_categories_are_played() {
        let mut game = game_with_category();
        game.add_song(2, song_fields("Rock", "[00:01]la la", &[0]));
        let mut rng = rng();
        game.start(&mut rng).unwrap();

        game.complete_category("Pop").unwrap();
        // Exhaust round 1: one category remains, so the game must not finish.
        for _ in 0..game.players.len() {
            let outcome = game.advance_turn(&mut rng).unwrap();
            assert!(!matches!(outcome, TurnOutcome::Finished { .. }));
        }
        assert_eq!(game.current_round, 2);

        game.complete_category("Rock").unwrap();
        let mut last = None;
        for _ in 0..game.players.len() {
            last = Some(game.advance_turn(&mut rng).unwrap());
        }
        match last {
            Some(TurnOutcome::Finished { scores }) => {
                assert_eq!(scores.len(), 3);
                assert_eq!(game.phase, GamePhase::Finished);
            }
            other => panic!("expected the game to finish, got {other:?}"),
        }
    }

    #[test]
    fn complete_category_is_idempotent() {
        let mut game = game_with_category();
        game.complete_category("Pop").unwrap();
        game.complete_category("Pop").unwrap();
        assert_eq!(game.played_categories, vec!["Pop".to_string()]);
        assert!(matches!(
            game.complete_category("Jazz"),
            Err(GameError::UnknownCategory(_))
        ));
    }

    #[test]
    fn select_category_returns_songs_without_mutating() {
        let mut game = game_with_category();
        game.add_song(2, song_fields("Pop", "[00:02]more", &[0]));
        let songs = game.select_category("Pop").unwrap();
        assert_eq!(songs.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(game.played_categories.is_empty());
        assert!(game.select_category("Jazz").is_err());
    }

    #[test]
    fn removing_a_category_cascades_to_its_songs() {
        let mut game = game_with_category();
        game.add_song(2, song_fields("Pop", "[00:02]more", &[0]));
        game.remove_category("Pop").unwrap();
        assert!(game.categories.is_empty());
        assert!(matches!(game.song(1), Err(GameError::UnknownSong(1))));
        assert!(matches!(game.song(2), Err(GameError::UnknownSong(2))));
    }

    #[test]
    fn removing_the_last_song_prunes_its_category() {
        let mut game = game_with_category();
        game.remove_song(1).unwrap();
        assert!(!game.categories.contains_key("Pop"));
        assert!(matches!(
            game.remove_song(1),
            Err(GameError::UnknownSong(1))
        ));
    }

    #[test]
    fn updating_a_song_moves_it_between_categories() {
        let mut game = game_with_category();
        game.update_song(1, song_fields("Rock", "[00:03]new words", &[0]))
            .unwrap();
        assert!(!game.categories.contains_key("Pop"));
        assert_eq!(game.categories["Rock"], vec![1]);
        let song = game.song(1).unwrap();
        assert_eq!(song.category, "Rock");
        assert_eq!(song.lines[0].text, "new words");
    }

    #[test]
    fn renaming_a_category_rewrites_member_songs() {
        let mut game = game_with_category();
        game.rename_category("Pop", "Classics").unwrap();
        assert!(!game.categories.contains_key("Pop"));
        assert_eq!(game.categories["Classics"], vec![1]);
        assert_eq!(game.song(1).unwrap().category, "Classics");
        // Renaming to itself is a no-op even when the name is unknown.
        game.rename_category("Classics", "Classics").unwrap();
        assert!(game.rename_category("Pop", "Other").is_err());
    }

    #[test]
    fn adding_an_existing_category_is_a_no_op() {
        let mut game = game_with_category();
        game.add_category("Pop");
        assert_eq!(game.categories["Pop"], vec![1]);
        game.add_category("Empty");
        assert!(game.categories["Empty"].is_empty());
    }

    #[test]
    fn player_rename_propagates_everywhere() {
        let mut game = game_with_category();
        let mut rng = rng();
        game.start(&mut rng).unwrap();
        let current = game.current_player.clone().unwrap();
        game.advance_turn(&mut rng).unwrap();

        game.update_player(&current, Some("renamed".into()), None)
            .unwrap();
        assert!(game.scores.contains_key("renamed"));
        assert!(!game.scores.contains_key(&current));
        assert!(
            game.players_played_this_round
                .contains(&"renamed".to_string())
        );
        assert!(game.players.iter().any(|p| p.username == "renamed"));
    }

    #[test]
    fn player_add_and_remove_keep_the_ledger_consistent() {
        let mut game = game_with_category();
        assert!(matches!(
            game.add_player("alice".into(), None),
            Err(GameError::DuplicatePlayer(_))
        ));
        game.add_player("dave".into(), Some("dave.png".into()))
            .unwrap();
        assert_eq!(game.scores["dave"], 0);

        game.remove_player("dave").unwrap();
        assert!(!game.scores.contains_key("dave"));
        assert!(matches!(
            game.remove_player("dave"),
            Err(GameError::UnknownPlayer(_))
        ));
    }

    #[test]
    fn removing_the_current_player_clears_the_pointer() {
        let mut game = game_with_category();
        let mut rng = rng();
        let opener = game.start(&mut rng).unwrap();
        game.remove_player(&opener).unwrap();
        assert_eq!(game.current_player, None);
        assert!(!game.scores.contains_key(&opener));
    }

    #[test]
    fn attempt_credits_points_only_at_eighty_percent() {
        let mut game = game_with_category();
        let words = vec!["hello".to_string(), "world".to_string()];
        let report = game.attempt_lyrics(1, "alice", &words).unwrap();
        assert!(report.outcome.correct);
        assert_eq!(report.outcome.score, 100);
        assert_eq!(report.points_awarded, 10);
        assert_eq!(game.scores["alice"], 10);

        let half = vec!["hello".to_string(), "moon".to_string()];
        let report = game.attempt_lyrics(1, "bob", &half).unwrap();
        assert_eq!(report.outcome.score, 50);
        assert_eq!(report.points_awarded, 0);
        assert_eq!(game.scores["bob"], 0);
    }

    #[test]
    fn attempt_rejects_unknown_song_and_player() {
        let mut game = game_with_category();
        assert!(matches!(
            game.attempt_lyrics(99, "alice", &[]),
            Err(GameError::UnknownSong(99))
        ));
        assert!(matches!(
            game.attempt_lyrics(1, "mallory", &[]),
            Err(GameError::UnknownPlayer(_))
        ));
    }
}
