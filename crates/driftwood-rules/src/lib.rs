//! Driftwood — Condition Evaluation bounded context.
//!
//! A pure, recursive boolean-expression interpreter over the player-state
//! record. Side-effect-free and referentially transparent: the presentation
//! layer re-evaluates conditions on every render to decide choice and
//! content visibility, so the same state must always produce the same
//! answer.

pub mod evaluator;

pub use evaluator::{evaluate, evaluate_all};
