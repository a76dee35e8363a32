//! Save-game record, storage abstraction, and slot helpers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use driftwood_core::clock::Clock;
use driftwood_core::error::EngineError;
use driftwood_state::player_state::PlayerState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Slot reserved for the automatic save. Manual saves use any other slot
/// name; writing a manual save to this slot overwrites the autosave.
pub const AUTOSAVE_SLOT: &str = "autosave";

/// One stored save: a complete player-state record plus the bookkeeping
/// needed to list and pick saves without deserializing state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGame {
    /// Unique save identifier.
    pub id: Uuid,
    /// Slot this save occupies. One save per slot; writing replaces.
    pub slot: String,
    /// Display name shown in a load menu.
    pub name: String,
    /// When the save was written.
    pub timestamp: DateTime<Utc>,
    /// The full state record.
    pub state: PlayerState,
}

/// Storage abstraction for save games. Hosts implement this over their
/// medium (browser storage, disk, a database); tests use
/// [`crate::InMemorySaveRepository`].
#[async_trait]
pub trait SaveRepository: Send + Sync {
    /// Writes a save into its slot, replacing any existing occupant.
    async fn store(&self, save: &SaveGame) -> Result<(), EngineError>;

    /// Loads the save occupying a slot, if any.
    async fn load(&self, slot: &str) -> Result<Option<SaveGame>, EngineError>;

    /// Lists all saves, newest first.
    async fn list(&self) -> Result<Vec<SaveGame>, EngineError>;

    /// Deletes the save occupying a slot. Returns whether one existed.
    async fn delete(&self, slot: &str) -> Result<bool, EngineError>;
}

/// Writes `state` into `slot`, stamping its last-saved timestamp from the
/// clock. Returns the stored record.
///
/// # Errors
///
/// Propagates `EngineError::Persistence` from the repository.
pub async fn write_save(
    repository: &dyn SaveRepository,
    slot: &str,
    name: &str,
    mut state: PlayerState,
    clock: &dyn Clock,
) -> Result<SaveGame, EngineError> {
    let timestamp = clock.now();
    state.metadata.last_saved = timestamp;
    let save = SaveGame {
        id: Uuid::new_v4(),
        slot: slot.to_owned(),
        name: name.to_owned(),
        timestamp,
        state,
    };
    repository.store(&save).await?;
    tracing::debug!(slot, save_id = %save.id, "save written");
    Ok(save)
}

/// Writes the autosave.
///
/// # Errors
///
/// Propagates `EngineError::Persistence` from the repository.
pub async fn autosave(
    repository: &dyn SaveRepository,
    state: PlayerState,
    clock: &dyn Clock,
) -> Result<SaveGame, EngineError> {
    write_save(repository, AUTOSAVE_SLOT, "Autosave", state, clock).await
}

/// Picks the state record to resume: the autosave when present, otherwise
/// the newest save of any slot, otherwise `None`.
///
/// # Errors
///
/// Propagates `EngineError::Persistence` from the repository.
pub async fn load_preferred(
    repository: &dyn SaveRepository,
) -> Result<Option<PlayerState>, EngineError> {
    if let Some(save) = repository.load(AUTOSAVE_SLOT).await? {
        return Ok(Some(save.state));
    }
    let saves = repository.list().await?;
    Ok(saves.into_iter().next().map(|save| save.state))
}
