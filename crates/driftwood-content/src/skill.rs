//! Skill and trait definitions.

use serde::{Deserialize, Serialize};

/// The broad discipline a skill belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    /// Staying alive: foraging, shelter, navigation.
    Survival,
    /// Fighting and defending.
    Combat,
    /// Making and repairing things.
    Crafting,
}

/// An acquirable skill. Choosing a skill at character creation grants all
/// of its listed traits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Display name.
    pub name: String,
    /// Author-facing description.
    pub description: String,
    /// Discipline this skill belongs to.
    pub category: SkillCategory,
    /// Trait ids granted by acquiring this skill.
    #[serde(default)]
    pub traits: Vec<String>,
}

/// A derived, permanent character tag granted by chosen skills. Traits gate
/// bonus consequences and conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDefinition {
    /// Display name.
    pub name: String,
    /// Author-facing description.
    pub description: String,
    /// Free-form effect tags consumed by the presentation layer.
    #[serde(default)]
    pub effects: Vec<String>,
}
