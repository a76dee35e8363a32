//! Engine error types.

use thiserror::Error;

/// Top-level error type for the Driftwood engine.
///
/// Most engine operations degrade to a logged no-op or a boolean failure
/// instead of returning one of these; the variants below cover the cases a
/// caller can meaningfully act on. Catalog load failure is the only error
/// that is allowed to block session start.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A scene id did not resolve in the content catalog.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// A recipe id did not resolve in the content catalog.
    ///
    /// The engine itself reports unknown recipes as a logged `false` from
    /// crafting; this variant is reserved for hosts wrapping crafting in a
    /// fallible API of their own.
    #[error("recipe not found: {0}")]
    RecipeNotFound(String),

    /// The content catalog could not be parsed.
    #[error("catalog load failed: {0}")]
    CatalogLoad(#[from] serde_json::Error),

    /// The content catalog parsed but is structurally unusable.
    #[error("catalog invalid: {0}")]
    CatalogInvalid(String),

    /// A save repository operation failed.
    #[error("persistence error: {0}")]
    Persistence(String),
}
