//! The game engine — choice resolution, crafting, gathering, combat
//! advancement, and the character-creation transition.

use driftwood_content::catalog::Catalog;
use driftwood_content::choice::Choice;
use driftwood_content::consequence::{Consequence, MutableStat};
use driftwood_content::scene::Scene;
use driftwood_core::clock::Clock;
use driftwood_core::error::EngineError;
use driftwood_state::player_state::{PlayerState, StartOptions};
use driftwood_state::store::StateStore;

/// Skill id that activates recipe cost modifiers.
const CRAFTING_SKILL: &str = "crafting";

/// Skill id that boosts gathered quantities.
const FORAGING_SKILL: &str = "foraging";

/// Flat gathering multiplier granted by the foraging skill.
const FORAGING_MULTIPLIER: f64 = 1.5;

/// Outcome of a combat-end check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Combat continues, or no combat is active.
    Ongoing,
    /// The enemy was defeated. Combat has been ended.
    Victory,
    /// The character reached 0 hp. Combat has been ended.
    Defeat,
}

/// The orchestration layer. Owns the content catalog and the state store;
/// its operations are the only supported mutation entry points for the
/// presentation layer.
#[derive(Debug)]
pub struct GameEngine {
    catalog: Catalog,
    store: StateStore,
}

impl GameEngine {
    /// Starts a fresh session and navigates to the catalog's start scene.
    #[must_use]
    pub fn new(catalog: Catalog, options: &StartOptions, clock: &dyn Clock) -> Self {
        let store = StateStore::from_options(options, clock);
        let mut engine = Self { catalog, store };
        let start_scene_id = engine.catalog.start_scene_id.clone();
        // The catalog validated this id at load; a failure here means the
        // caller bypassed `Catalog::from_json_str`.
        if let Err(error) =
            crate::navigator::navigate_to_scene(&engine.catalog, &mut engine.store, &start_scene_id)
        {
            tracing::error!(%error, "start scene navigation failed");
        }
        engine
    }

    /// Resumes a session from a restored state record. No start-scene
    /// navigation happens; the record's current scene stands.
    #[must_use]
    pub fn from_state(catalog: Catalog, state: PlayerState) -> Self {
        Self {
            catalog,
            store: StateStore::new(state),
        }
    }

    /// The content catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only access to the state store for queries.
    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Defensive snapshot of the player state for the presentation and
    /// persistence boundaries.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.store.snapshot()
    }

    /// The resolved current scene, when the current id is valid.
    #[must_use]
    pub fn current_scene(&self) -> Option<&Scene> {
        crate::navigator::current_scene(&self.catalog, &self.store)
    }

    /// Navigates to a scene.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SceneNotFound` for an unresolvable id; state
    /// is left unchanged.
    pub fn navigate_to_scene(&mut self, scene_id: &str) -> Result<&Scene, EngineError> {
        crate::navigator::navigate_to_scene(&self.catalog, &mut self.store, scene_id)
    }

    /// Whether a choice's guard conditions are satisfied. The presentation
    /// layer calls this on every render to filter visible choices.
    #[must_use]
    pub fn is_available(&self, choice: &Choice) -> bool {
        driftwood_rules::evaluate_all(self.store.state(), &choice.conditions)
    }

    /// Resolves a choice. Three mutually exclusive modes, in priority
    /// order:
    ///
    /// 1. Trait checks declared: base consequences always apply first,
    ///    then every held trait's bonus consequences, stacking in
    ///    declaration order.
    /// 2. Legacy skill check declared: the success branch applies when the
    ///    named trait is held, otherwise the failure branch. Exclusive of
    ///    base consequences.
    /// 3. Neither: base consequences only.
    ///
    /// Afterwards, if combat is active, the choice id is recorded in the
    /// encounter history and the turn counter advances, regardless of
    /// which branch fired.
    pub fn process_choice(&mut self, choice: &Choice) {
        if !choice.trait_checks.is_empty() {
            self.apply_consequences(&choice.consequences);

            let bonuses: Vec<Consequence> = choice
                .trait_checks
                .iter()
                .filter(|check| self.store.has_trait(&check.trait_id))
                .flat_map(|check| check.bonus_consequences.iter().cloned())
                .collect();
            self.apply_consequences(&bonuses);
        } else if let Some(check) = &choice.skill_check {
            let branch = if self.store.has_trait(&check.trait_id) {
                &check.success_consequences
            } else {
                &check.failure_consequences
            };
            self.apply_consequences(branch);
        } else {
            self.apply_consequences(&choice.consequences);
        }

        if self.store.state().combat.active {
            self.store.record_combat_action(&choice.id);
            self.store.advance_combat_turn();
        }
    }

    fn apply_consequences(&mut self, consequences: &[Consequence]) {
        // Batches run to completion: a navigate mid-batch does not
        // short-circuit the consequences after it.
        for consequence in consequences {
            self.apply_consequence(consequence);
        }
    }

    fn apply_consequence(&mut self, consequence: &Consequence) {
        match consequence {
            Consequence::Navigate { scene_id } => {
                if let Err(error) =
                    crate::navigator::navigate_to_scene(&self.catalog, &mut self.store, scene_id)
                {
                    tracing::warn!(%error, "navigate consequence skipped");
                }
            }
            Consequence::AddItem { item_id, quantity } => {
                self.store.add_item(item_id, *quantity);
            }
            Consequence::RemoveItem { item_id, quantity } => {
                if !self.store.remove_item(item_id, *quantity) {
                    tracing::warn!(item_id, quantity, "removeItem consequence short; skipped");
                }
            }
            Consequence::ModifyStat { stat, amount } => match stat {
                MutableStat::Hp => self.store.modify_hp(*amount),
                MutableStat::Stamina => self.store.modify_stamina(*amount),
            },
            Consequence::SetBoatRepaired => self.store.set_boat_repaired(true),
            Consequence::DamageEnemy { enemy_id, damage } => {
                self.store.damage_enemy(enemy_id, *damage);
            }
            Consequence::SetEnemyDefeated { enemy_id } => {
                self.store.set_enemy_defeated(enemy_id, true);
            }
            Consequence::UnlockChoice { choice_id } => self.store.unlock_choice(choice_id),
            Consequence::Unknown => {
                tracing::warn!("unknown consequence kind skipped");
            }
        }
    }

    /// Crafts a recipe. All-or-nothing: every (skill-adjusted) ingredient
    /// quantity is verified before any is consumed, so a `true` return
    /// means the full exchange happened and `false` means nothing changed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn craft_item(&mut self, recipe_id: &str) -> bool {
        let Some(recipe) = self.catalog.recipe(recipe_id) else {
            tracing::warn!(recipe_id, "craft for unknown recipe ignored");
            return false;
        };

        let multiplier = recipe
            .skill_modifier
            .as_ref()
            .filter(|modifier| {
                modifier.skill_id == CRAFTING_SKILL && self.store.has_skill(CRAFTING_SKILL)
            })
            .map(|modifier| modifier.cost_multiplier);

        let costs: Vec<(&str, u32)> = recipe
            .ingredients
            .iter()
            .map(|ingredient| {
                let quantity = match multiplier {
                    Some(multiplier) => {
                        (f64::from(ingredient.quantity) * multiplier).ceil() as u32
                    }
                    None => ingredient.quantity,
                };
                (ingredient.item_id.as_str(), quantity)
            })
            .collect();

        if !costs
            .iter()
            .all(|(item_id, quantity)| self.store.has_item(item_id, *quantity))
        {
            return false;
        }

        // The availability check above guarantees every removal succeeds.
        for (item_id, quantity) in &costs {
            self.store.remove_item(item_id, *quantity);
        }
        self.store
            .add_item(&recipe.result_item_id, recipe.result_quantity);
        true
    }

    /// Gathers a resource. The foraging skill grants a flat 1.5×
    /// multiplier, floor-rounded. Returns the quantity actually granted.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn gather_resource(&mut self, item_id: &str, base_quantity: u32) -> u32 {
        let quantity = if self.store.has_skill(FORAGING_SKILL) {
            (f64::from(base_quantity) * FORAGING_MULTIPLIER).floor() as u32
        } else {
            base_quantity
        };
        self.store.add_item(item_id, quantity);
        quantity
    }

    /// Checks whether the active encounter has ended, ending it as a side
    /// effect when a terminal condition holds. Victory (enemy defeated) is
    /// checked before defeat (character hp ≤ 0), so a simultaneous finish
    /// goes to the player. Once combat has ended, further calls return
    /// [`CombatOutcome::Ongoing`]; the check does not re-trigger.
    pub fn check_combat_end(&mut self) -> CombatOutcome {
        let combat = &self.store.state().combat;
        if !combat.active {
            return CombatOutcome::Ongoing;
        }
        let Some(enemy_id) = combat.enemy_id.clone() else {
            return CombatOutcome::Ongoing;
        };

        if self.store.is_enemy_defeated(&enemy_id) {
            self.store.end_combat();
            return CombatOutcome::Victory;
        }
        if self.store.state().character.hp <= 0 {
            self.store.end_combat();
            return CombatOutcome::Defeat;
        }
        CombatOutcome::Ongoing
    }

    /// Confirms character creation: derives traits as the deduplicated
    /// union of the chosen skills' granted traits, in first-appearance
    /// order, then assigns skills and traits wholesale. Unknown skill ids
    /// are skipped. Expected to run exactly once per session.
    pub fn create_character(&mut self, skill_ids: &[String]) {
        let mut traits: Vec<String> = Vec::new();
        for skill_id in skill_ids {
            if let Some(skill) = self.catalog.skill(skill_id) {
                for trait_id in &skill.traits {
                    if !traits.contains(trait_id) {
                        traits.push(trait_id.clone());
                    }
                }
            }
        }
        self.store.set_character_skills(skill_ids.to_vec(), traits);
    }

    /// Accumulates play time, driven by the presentation layer's session
    /// timer.
    pub fn record_play_time(&mut self, seconds: u64) {
        self.store.accumulate_play_time(seconds);
    }
}
