//! Driftwood — Content Catalog bounded context.
//!
//! The immutable, authored side of the engine: scenes, choices, conditions,
//! consequences, items, recipes, and enemy definitions, keyed by stable
//! string identifiers and loaded once per session from JSON. The engine
//! never validates cross-references within the catalog; a dangling id is
//! interpreted as a no-op at the point of use.

pub mod catalog;
pub mod choice;
pub mod condition;
pub mod consequence;
pub mod enemy;
pub mod item;
pub mod scene;
pub mod skill;

pub use catalog::Catalog;
pub use choice::{Choice, SkillCheck, TraitCheck};
pub use condition::{Condition, ResourceRequirement, StatKind};
pub use consequence::{Consequence, MutableStat};
pub use enemy::{EnemyAttack, EnemyDefinition, WeakPointDefinition};
pub use item::{Ingredient, Item, ItemKind, Recipe, SkillModifier};
pub use scene::{ContentBlock, EndingKind, ResourceSpot, Scene, SceneKind};
pub use skill::{Skill, SkillCategory, TraitDefinition};
