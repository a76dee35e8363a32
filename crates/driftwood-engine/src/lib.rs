//! Driftwood — Engine Orchestration bounded context.
//!
//! Translates a player's choice into state mutations: selects the
//! consequence set (base, trait-bonus, or legacy pass/fail), applies it,
//! advances combat, crafts, gathers, and exposes the character-creation
//! transition. Scene navigation and its entry side effects live in
//! [`navigator`].

pub mod engine;
pub mod navigator;

pub use engine::{CombatOutcome, GameEngine};
