//! Condition expressions — the closed boolean vocabulary gating choices and
//! content visibility.

use serde::{Deserialize, Serialize};

/// A character stat that conditions may compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    /// Current hit points.
    Hp,
    /// Current stamina.
    Stamina,
    /// Maximum hit points.
    MaxHp,
    /// Maximum stamina.
    MaxStamina,
}

/// One entry of a `hasResources` requirement list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirement {
    /// Item id required.
    pub item_id: String,
    /// Minimum quantity required.
    pub quantity: u32,
}

/// A pure boolean expression over player state.
///
/// The vocabulary is closed: there is no extension point, and a
/// discriminant outside it deserializes to [`Condition::Unknown`], which
/// the evaluator logs and treats as false.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Condition {
    /// Character has acquired the skill.
    HasSkill {
        /// Skill id to test.
        skill_id: String,
    },
    /// Character holds the trait.
    HasTrait {
        /// Trait id to test.
        trait_id: String,
    },
    /// Inventory holds at least `quantity` of the item.
    HasItem {
        /// Item id to test.
        item_id: String,
        /// Minimum quantity.
        quantity: u32,
    },
    /// Every listed resource requirement holds.
    HasResources {
        /// Requirements that must all be satisfied.
        resources: Vec<ResourceRequirement>,
    },
    /// The stat is strictly greater than the value.
    StatGreaterThan {
        /// Stat to compare.
        stat: StatKind,
        /// Threshold (exclusive).
        value: i32,
    },
    /// The stat is strictly less than the value.
    StatLessThan {
        /// Stat to compare.
        stat: StatKind,
        /// Threshold (exclusive).
        value: i32,
    },
    /// The boat has been repaired.
    BoatRepaired,
    /// The enemy's runtime record exists and is defeated.
    EnemyDefeated {
        /// Enemy id to test.
        enemy_id: String,
    },
    /// The scene id appears in the transition history.
    SceneVisited {
        /// Scene id to test.
        scene_id: String,
    },
    /// All children hold (vacuously true when empty).
    And {
        /// Child conditions.
        conditions: Vec<Condition>,
    },
    /// At least one child holds (false when empty).
    Or {
        /// Child conditions.
        conditions: Vec<Condition>,
    },
    /// Negation of the FIRST child only. Authored content always supplies
    /// exactly one child; extra children are ignored and an empty list
    /// evaluates false.
    Not {
        /// Child conditions; only index 0 is inspected.
        conditions: Vec<Condition>,
    },
    /// Catch-all for discriminants outside the closed vocabulary.
    #[serde(other)]
    Unknown,
}
