//! In-memory save repository, used by tests and suitable for previews
//! where persistence across restarts is not wanted.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use driftwood_core::error::EngineError;

use crate::save::{SaveGame, SaveRepository};

/// A [`SaveRepository`] backed by a mutex-guarded map keyed by slot.
#[derive(Debug, Default)]
pub struct InMemorySaveRepository {
    slots: Mutex<BTreeMap<String, SaveGame>>,
}

impl InMemorySaveRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, SaveGame>>, EngineError> {
        self.slots
            .lock()
            .map_err(|_| EngineError::Persistence("save store lock poisoned".to_owned()))
    }
}

#[async_trait]
impl SaveRepository for InMemorySaveRepository {
    async fn store(&self, save: &SaveGame) -> Result<(), EngineError> {
        self.locked()?.insert(save.slot.clone(), save.clone());
        Ok(())
    }

    async fn load(&self, slot: &str) -> Result<Option<SaveGame>, EngineError> {
        Ok(self.locked()?.get(slot).cloned())
    }

    async fn list(&self) -> Result<Vec<SaveGame>, EngineError> {
        let mut saves: Vec<SaveGame> = self.locked()?.values().cloned().collect();
        saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(saves)
    }

    async fn delete(&self, slot: &str) -> Result<bool, EngineError> {
        Ok(self.locked()?.remove(slot).is_some())
    }
}
