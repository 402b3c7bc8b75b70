//! Process-scoped application state: the in-memory game store and id source.

pub mod game;

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::state::game::Game;

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Monotonic id source for songs, starting at 1.
#[derive(Debug)]
pub struct IdSequence(AtomicU64);

impl IdSequence {
    /// Create a sequence whose first issued id is 1.
    pub fn new() -> Self {
        Self(AtomicU64::new(1))
    }

    /// Hand out the next id.
    pub fn next_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Central application state. Every game lives behind its own mutex so each
/// operation is a single-writer read-modify-write against one game; nothing
/// is persisted beyond the process lifetime.
pub struct AppState {
    games: DashMap<Uuid, Arc<Mutex<Game>>>,
    song_ids: IdSequence,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new() -> SharedState {
        Arc::new(Self {
            games: DashMap::new(),
            song_ids: IdSequence::new(),
        })
    }

    /// Register a freshly built game and return its lock handle.
    pub fn insert_game(&self, game: Game) -> Arc<Mutex<Game>> {
        let id = game.id;
        let handle = Arc::new(Mutex::new(game));
        self.games.insert(id, handle.clone());
        handle
    }

    /// Look up the lock handle of a game. The `Arc` is cloned out so the map
    /// shard is released before the caller awaits the mutex.
    pub fn game(&self, id: Uuid) -> Option<Arc<Mutex<Game>>> {
        self.games.get(&id).map(|entry| entry.value().clone())
    }

    /// Number of games currently held in memory.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Allocate a fresh song id, unique for the process lifetime.
    pub fn next_song_id(&self) -> u64 {
        self.song_ids.next_id()
    }
}
