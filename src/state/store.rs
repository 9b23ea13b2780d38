//! Load-or-initialize persistence of `GameState` in a key-value store.

use crate::config::GameConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::GameState;

/// String key-value backend the game state is persisted in.
pub trait StateStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// The browser's `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn backend() -> StoreResult<web_sys::Storage> {
        let win = web_sys::window().ok_or(StoreError::Unavailable)?;
        match win.local_storage() {
            Ok(Some(store)) => Ok(store),
            Ok(None) => Err(StoreError::Unavailable),
            Err(e) => Err(StoreError::Backend(format!("{e:?}"))),
        }
    }
}

impl StateStorage for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::backend()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::backend()?
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}

pub struct GameStore<'a, S: StateStorage> {
    storage: S,
    config: &'a GameConfig,
}

impl<'a, S: StateStorage> GameStore<'a, S> {
    pub fn new(storage: S, config: &'a GameConfig) -> Self {
        Self { storage, config }
    }

    /// Read the saved state, if any. Errors on unreadable storage or a
    /// malformed record.
    pub fn try_load(&self) -> StoreResult<Option<GameState>> {
        let Some(raw) = self.storage.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        let mut state: GameState = serde_json::from_str(&raw)?;
        state.sanitize(self.config);
        Ok(Some(state))
    }

    /// Saved state, or a fresh one stamped `now_ms` when nothing usable is stored.
    pub fn load_or_default(&self, now_ms: u64) -> GameState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                log::info!("no saved game under '{}', starting fresh", self.config.storage_key);
                GameState::new(now_ms, self.config)
            }
            Err(e) => {
                log::warn!("discarding saved game: {e}");
                GameState::new(now_ms, self.config)
            }
        }
    }

    pub fn save(&self, state: &GameState) -> StoreResult<()> {
        let raw = serde_json::to_string(state)?;
        self.storage.set(&self.config.storage_key, &raw)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
