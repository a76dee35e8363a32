//! Driftwood Core — shared engine abstractions.
//!
//! This crate defines the error taxonomy and time abstraction that every
//! other crate in the workspace depends on. It contains no game logic.

pub mod clock;
pub mod error;
