//! Driftwood — Session Persistence bounded context.
//!
//! Defines the save-game record, the storage abstraction the host
//! implements, and slot conventions (one reserved autosave slot plus
//! named manual slots). The engine itself never persists; hosts drive
//! saving through these helpers.

pub mod memory;
pub mod save;

pub use memory::InMemorySaveRepository;
pub use save::{AUTOSAVE_SLOT, SaveGame, SaveRepository, autosave, load_preferred, write_save};
