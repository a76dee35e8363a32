//! Choices — selectable actions with guard conditions and one of three
//! consequence-resolution modes.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::consequence::Consequence;

/// Bonus consequences gated on the character holding a trait. Multiple
/// matching checks stack, in declaration order, on top of the base
/// consequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitCheck {
    /// Trait id that activates the bonus.
    pub trait_id: String,
    /// Consequences applied when the trait is held.
    pub bonus_consequences: Vec<Consequence>,
}

/// Legacy pass/fail check. Exactly one branch fires, and base consequences
/// are NOT applied when this mode is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCheck {
    /// Trait id that decides the branch.
    pub trait_id: String,
    /// Consequences applied when the trait is held.
    pub success_consequences: Vec<Consequence>,
    /// Consequences applied when the trait is absent.
    pub failure_consequences: Vec<Consequence>,
}

/// A selectable action presented to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Choice id, unique within the catalog.
    pub id: String,
    /// Display text.
    pub text: String,
    /// Optional flavor description.
    #[serde(default)]
    pub description: Option<String>,
    /// Guard conditions; absent or empty means always available.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Base consequences.
    #[serde(default)]
    pub consequences: Vec<Consequence>,
    /// Additive trait-gated bonuses. When non-empty this mode takes
    /// priority over `skill_check`.
    #[serde(default)]
    pub trait_checks: Vec<TraitCheck>,
    /// Legacy pass/fail mode, kept for older content.
    #[serde(default)]
    pub skill_check: Option<SkillCheck>,
}
