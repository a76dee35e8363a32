//! Item and recipe definitions.

use serde::{Deserialize, Serialize};

/// The kind of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    /// Raw material gathered in the world.
    Resource,
    /// A crafted implement.
    Tool,
    /// Something to fight with.
    Weapon,
    /// A boat upgrade.
    Upgrade,
}

/// An item definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Author-facing description.
    pub description: String,
    /// Item kind.
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// One required input of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Item id of the ingredient.
    pub item_id: String,
    /// Base quantity required before skill modifiers.
    pub quantity: u32,
}

/// Optional cost adjustment applied when the character holds the named
/// skill. A multiplier below 1.0 is a discount; required quantities are
/// ceiling-rounded after applying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillModifier {
    /// Skill id that activates the modifier.
    pub skill_id: String,
    /// Multiplier applied to each ingredient quantity.
    pub cost_multiplier: f64,
}

/// A crafting recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Display name.
    pub name: String,
    /// Author-facing description.
    #[serde(default)]
    pub description: String,
    /// Item id produced on success.
    pub result_item_id: String,
    /// Quantity of the result item produced.
    pub result_quantity: u32,
    /// Ordered ingredient list; all must be satisfied before any is
    /// consumed.
    pub ingredients: Vec<Ingredient>,
    /// Crafting duration in seconds. Presentation-only: the core grants the
    /// result atomically once the presentation timer completes.
    #[serde(default)]
    pub craft_time: u32,
    /// Optional skill-based cost adjustment.
    #[serde(default)]
    pub skill_modifier: Option<SkillModifier>,
}
