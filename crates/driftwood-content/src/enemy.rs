//! Enemy definitions.

use serde::{Deserialize, Serialize};

/// A named, independently destructible sub-target on an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakPointDefinition {
    /// Weak point id, unique within the enemy.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hit points of the weak point.
    pub hp: i32,
}

/// One attack an enemy can make. Consumed by the presentation layer when
/// driving combat scenes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyAttack {
    /// Attack id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Damage dealt to the character.
    pub damage: i32,
    /// Author-facing description.
    #[serde(default)]
    pub description: String,
}

/// The authored definition of an enemy. The runtime record (current hp,
/// defeated flag) lives in the player state and is created lazily on first
/// entry into a combat scene referencing this enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyDefinition {
    /// Display name.
    pub name: String,
    /// Author-facing description.
    #[serde(default)]
    pub description: String,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Optional weak points.
    #[serde(default)]
    pub weak_points: Option<Vec<WeakPointDefinition>>,
    /// Attacks available to this enemy.
    #[serde(default)]
    pub attacks: Vec<EnemyAttack>,
}
