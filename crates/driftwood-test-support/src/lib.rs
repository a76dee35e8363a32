//! Shared test utilities for the Driftwood engine.

mod clock;

pub use clock::FixedClock;
