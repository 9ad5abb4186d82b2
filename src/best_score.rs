//! Best round score
//!
//! The lowest full-round stroke total, persisted to a key-value store
//! (LocalStorage in the browser) under [`crate::consts::BEST_SCORE_KEY`].

#[cfg(target_arch = "wasm32")]
use crate::consts::BEST_SCORE_KEY;

/// Shown by the HUD when no round has been completed yet
pub const NO_BEST_MARKER: &str = "—";

/// Durable storage for the best score
///
/// Reads degrade to `None` on missing or malformed data; writes are
/// best-effort and never fail the game.
pub trait ScoreStore {
    fn read_best(&self) -> Option<u32>;
    fn write_best(&mut self, strokes: u32);
    fn clear_best(&mut self);
}

/// Decode a stored value; anything that is not a non-negative integer is ignored
pub fn parse_best_score(raw: &str) -> Option<u32> {
    match serde_json::from_str::<u32>(raw.trim()) {
        Ok(strokes) => Some(strokes),
        Err(e) => {
            log::warn!("Ignoring malformed best score {:?}: {}", raw, e);
            None
        }
    }
}

/// Encode a best score for storage
pub fn encode_best_score(strokes: u32) -> String {
    // A u32 always serializes
    serde_json::to_string(&strokes).unwrap_or_else(|_| strokes.to_string())
}

/// In-memory store holding the raw persisted text
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from whatever text a previous session left behind
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ScoreStore for MemoryStore {
    fn read_best(&self) -> Option<u32> {
        self.raw.as_deref().and_then(parse_best_score)
    }

    fn write_best(&mut self, strokes: u32) {
        self.raw = Some(encode_best_score(strokes));
    }

    fn clear_best(&mut self) {
        self.raw = None;
    }
}

/// Best score backed by the browser's LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn read_best(&self) -> Option<u32> {
        let raw = Self::storage()?.get_item(BEST_SCORE_KEY).ok()??;
        parse_best_score(&raw)
    }

    fn write_best(&mut self, strokes: u32) {
        if let Some(storage) = Self::storage() {
            if storage
                .set_item(BEST_SCORE_KEY, &encode_best_score(strokes))
                .is_ok()
            {
                log::info!("Best score saved ({} strokes)", strokes);
            } else {
                log::warn!("Could not save best score");
            }
        }
    }

    fn clear_best(&mut self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(BEST_SCORE_KEY);
            log::info!("Best score cleared");
        }
    }
}

/// The in-game view of the best score, kept in sync with a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    strokes: Option<u32>,
}

impl BestScore {
    /// Read the persisted value (startup)
    pub fn load(store: &impl ScoreStore) -> Self {
        let strokes = store.read_best();
        match strokes {
            Some(s) => log::info!("Loaded best score: {} strokes", s),
            None => log::info!("No best score found, starting fresh"),
        }
        Self { strokes }
    }

    pub fn get(&self) -> Option<u32> {
        self.strokes
    }

    /// Check if a round total would become the new best
    pub fn improved_by(&self, total: u32) -> bool {
        self.strokes.is_none_or(|best| total < best)
    }

    /// Record a finished round; persists and returns true only on improvement
    pub fn record(&mut self, total: u32, store: &mut impl ScoreStore) -> bool {
        if !self.improved_by(total) {
            return false;
        }
        self.strokes = Some(total);
        store.write_best(total);
        true
    }

    /// Forget the best score, in memory and in the store
    pub fn reset(&mut self, store: &mut impl ScoreStore) {
        self.strokes = None;
        store.clear_best();
    }

    /// HUD text: the stroke count or the empty marker
    pub fn label(&self) -> String {
        self.strokes
            .map(|s| s.to_string())
            .unwrap_or_else(|| NO_BEST_MARKER.to_string())
    }
}
