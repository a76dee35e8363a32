//! Driftwood — Player State bounded context.
//!
//! Owns the single mutable player-state record. The [`store::StateStore`]
//! is the sole mutator; every other component reads the record or requests
//! mutations through the store's operations, each of which is an explicit
//! [`store::StateTransition`] applied through one exhaustive match so the
//! clamp and no-op invariants live in one place.

pub mod player_state;
pub mod store;

pub use player_state::{
    Boat, Character, CombatState, Enemy, Inventory, Metadata, PlayerState, Progression,
    StartOptions, WeakPointState,
};
pub use store::{StateStore, StateTransition};
