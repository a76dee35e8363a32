//! The Content Catalog — everything authored, loaded once per session.

use std::collections::BTreeMap;

use driftwood_core::error::EngineError;
use serde::{Deserialize, Serialize};

use crate::enemy::EnemyDefinition;
use crate::item::{Item, Recipe};
use crate::scene::Scene;
use crate::skill::{Skill, TraitDefinition};

/// The immutable content catalog.
///
/// Loading performs the only structural validation the engine does: the
/// start scene id must resolve. Every other cross-reference is left to the
/// documented silent-no-op behavior at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Content schema version string.
    #[serde(default)]
    pub version: String,
    /// Title of the authored game.
    #[serde(default)]
    pub title: String,
    /// Author-facing description.
    #[serde(default)]
    pub description: String,
    /// Skills by id.
    #[serde(default)]
    pub skills: BTreeMap<String, Skill>,
    /// Traits by id.
    #[serde(default)]
    pub traits: BTreeMap<String, TraitDefinition>,
    /// Items by id.
    #[serde(default)]
    pub items: BTreeMap<String, Item>,
    /// Recipes by id.
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
    /// Enemy definitions by id.
    #[serde(default)]
    pub enemies: BTreeMap<String, EnemyDefinition>,
    /// Scenes by id.
    pub scenes: BTreeMap<String, Scene>,
    /// Designated start scene id.
    pub start_scene_id: String,
}

impl Catalog {
    /// Parses a catalog from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::CatalogLoad` on malformed JSON and
    /// `EngineError::CatalogInvalid` if the start scene id does not
    /// resolve. Either failure blocks session start.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a catalog from an already-decoded JSON value and validates it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Catalog::from_json_str`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, EngineError> {
        let catalog: Self = serde_json::from_value(value)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.scenes.contains_key(&self.start_scene_id) {
            Ok(())
        } else {
            Err(EngineError::CatalogInvalid(format!(
                "start scene id {:?} does not resolve",
                self.start_scene_id
            )))
        }
    }

    /// Looks up a scene by id.
    #[must_use]
    pub fn scene(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.get(scene_id)
    }

    /// Looks up a skill by id.
    #[must_use]
    pub fn skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.get(skill_id)
    }

    /// Looks up a trait definition by id.
    #[must_use]
    pub fn trait_definition(&self, trait_id: &str) -> Option<&TraitDefinition> {
        self.traits.get(trait_id)
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.get(item_id)
    }

    /// Looks up a recipe by id.
    #[must_use]
    pub fn recipe(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.get(recipe_id)
    }

    /// Looks up an enemy definition by id.
    #[must_use]
    pub fn enemy(&self, enemy_id: &str) -> Option<&EnemyDefinition> {
        self.enemies.get(enemy_id)
    }

    /// The scene the start scene id resolves to.
    ///
    /// Resolution cannot fail after validation, but the lookup stays
    /// fallible rather than panicking.
    #[must_use]
    pub fn start_scene(&self) -> Option<&Scene> {
        self.scene(&self.start_scene_id)
    }
}
