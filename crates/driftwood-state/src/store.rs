//! The State Store — sole mutator of the player-state record.
//!
//! Every mutation is expressed as a [`StateTransition`] and routed through
//! one exhaustive `apply` match. Operations that can fail validate before
//! producing a transition; `apply` itself never fails, it only enforces the
//! record's invariants (clamping, zero-entry deletion, unknown-id no-ops).

use chrono::{DateTime, Utc};
use driftwood_core::clock::Clock;

use crate::player_state::{
    CombatState, Enemy, PlayerState, StartOptions, WeakPointState,
};

/// An atomic transition of the player-state record.
#[derive(Debug, Clone)]
pub enum StateTransition {
    /// Adjust character hp by a signed delta, clamped to `[0, max_hp]`.
    HpModified {
        /// Signed delta.
        delta: i32,
    },
    /// Adjust character stamina by a signed delta, clamped to
    /// `[0, max_stamina]`.
    StaminaModified {
        /// Signed delta.
        delta: i32,
    },
    /// Wholesale replacement of the character's skills and derived traits.
    SkillsAssigned {
        /// Skill ids.
        skills: Vec<String>,
        /// Derived trait ids.
        traits: Vec<String>,
    },
    /// Increment an inventory entry.
    ItemAdded {
        /// Item id.
        item_id: String,
        /// Quantity to add (positive).
        quantity: u32,
    },
    /// Decrement an inventory entry. The store validates sufficiency
    /// before producing this transition.
    ItemRemoved {
        /// Item id.
        item_id: String,
        /// Quantity to remove.
        quantity: u32,
    },
    /// Set the boat's repaired flag.
    BoatRepairSet {
        /// New repaired flag.
        repaired: bool,
    },
    /// Record a boat upgrade (set semantics).
    BoatUpgradeAdded {
        /// Upgrade item id.
        upgrade_id: String,
    },
    /// Create a runtime enemy record. No-op when one already exists.
    EnemyInitialized {
        /// Enemy id.
        enemy_id: String,
        /// Display name from the definition.
        name: String,
        /// Maximum hit points from the definition.
        max_hp: i32,
        /// Weak points from the definition, all undestroyed.
        weak_points: Option<Vec<WeakPointState>>,
    },
    /// Deal damage to an enemy. No-op on an unknown id.
    EnemyDamaged {
        /// Enemy id.
        enemy_id: String,
        /// Damage amount.
        damage: i32,
    },
    /// Set an enemy's defeated flag. Defeat forces hp to 0. No-op on an
    /// unknown id.
    EnemyDefeatSet {
        /// Enemy id.
        enemy_id: String,
        /// New defeated flag.
        defeated: bool,
    },
    /// Wholesale-replace the combat sub-record with an active encounter.
    CombatStarted {
        /// Enemy being fought.
        enemy_id: String,
    },
    /// Wholesale-replace the combat sub-record with the inactive record.
    CombatEnded,
    /// Append an action id to the encounter history.
    CombatActionRecorded {
        /// Choice id taken.
        action_id: String,
    },
    /// Increment the encounter turn counter.
    CombatTurnAdvanced,
    /// Update the current scene, appending to history only on a distinct
    /// transition.
    SceneEntered {
        /// Destination scene id.
        scene_id: String,
    },
    /// Record an unlocked choice id (set semantics).
    ChoiceUnlocked {
        /// Choice id.
        choice_id: String,
    },
    /// Accumulate play time.
    PlayTimeAccumulated {
        /// Seconds elapsed.
        seconds: u64,
    },
    /// Stamp the last-saved timestamp.
    SavedAt {
        /// Save time.
        timestamp: DateTime<Utc>,
    },
}

/// Holds and mutates the player-state record.
#[derive(Debug)]
pub struct StateStore {
    state: PlayerState,
}

impl StateStore {
    /// Wraps an existing record (restored session).
    #[must_use]
    pub fn new(state: PlayerState) -> Self {
        Self { state }
    }

    /// Builds a store around a fresh record.
    #[must_use]
    pub fn from_options(options: &StartOptions, clock: &dyn Clock) -> Self {
        Self::new(PlayerState::new(options, clock))
    }

    /// Read access for in-process collaborators (evaluator, engine).
    #[must_use]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Defensive copy for the presentation and persistence boundaries.
    /// Callers must not assume mutation-through-reference.
    #[must_use]
    pub fn snapshot(&self) -> PlayerState {
        self.state.clone()
    }

    /// Wholesale-replaces the record (load from a save).
    pub fn restore(&mut self, state: PlayerState) {
        self.state = state;
    }

    /// Applies one transition. Infallible: invariants are enforced here,
    /// and transitions referencing unknown ids degrade to logged no-ops.
    fn apply(&mut self, transition: StateTransition) {
        match transition {
            StateTransition::HpModified { delta } => {
                let character = &mut self.state.character;
                // Saturating: an extreme delta must land on the clamp
                // bound, not overflow before the clamp runs.
                character.hp = character.hp.saturating_add(delta).clamp(0, character.max_hp);
            }
            StateTransition::StaminaModified { delta } => {
                let character = &mut self.state.character;
                character.stamina = character
                    .stamina
                    .saturating_add(delta)
                    .clamp(0, character.max_stamina);
            }
            StateTransition::SkillsAssigned { skills, traits } => {
                self.state.character.skills = skills;
                self.state.character.traits = traits;
            }
            StateTransition::ItemAdded { item_id, quantity } => {
                *self.state.inventory.entry(item_id).or_insert(0) += quantity;
            }
            StateTransition::ItemRemoved { item_id, quantity } => {
                if let Some(current) = self.state.inventory.get_mut(&item_id) {
                    *current = current.saturating_sub(quantity);
                    if *current == 0 {
                        self.state.inventory.remove(&item_id);
                    }
                }
            }
            StateTransition::BoatRepairSet { repaired } => {
                let boat = &mut self.state.boat;
                boat.repaired = repaired;
                // A repaired boat that was at zero hull is made whole;
                // a damaged-but-floating hull keeps its current hp.
                if repaired && boat.hp == 0 {
                    boat.hp = boat.max_hp;
                }
            }
            StateTransition::BoatUpgradeAdded { upgrade_id } => {
                if !self.state.boat.upgrades.contains(&upgrade_id) {
                    self.state.boat.upgrades.push(upgrade_id);
                }
            }
            StateTransition::EnemyInitialized {
                enemy_id,
                name,
                max_hp,
                weak_points,
            } => {
                self.state.enemies.entry(enemy_id.clone()).or_insert(Enemy {
                    id: enemy_id,
                    name,
                    hp: max_hp,
                    max_hp,
                    defeated: false,
                    weak_points,
                });
            }
            StateTransition::EnemyDamaged { enemy_id, damage } => {
                if let Some(enemy) = self.state.enemies.get_mut(&enemy_id) {
                    enemy.hp = enemy.hp.saturating_sub(damage).max(0);
                    if enemy.hp == 0 {
                        enemy.defeated = true;
                    }
                } else {
                    tracing::warn!(enemy_id, "damage to unknown enemy ignored");
                }
            }
            StateTransition::EnemyDefeatSet { enemy_id, defeated } => {
                if let Some(enemy) = self.state.enemies.get_mut(&enemy_id) {
                    enemy.defeated = defeated;
                    if defeated {
                        enemy.hp = 0;
                    }
                } else {
                    tracing::warn!(enemy_id, "defeat flag for unknown enemy ignored");
                }
            }
            StateTransition::CombatStarted { enemy_id } => {
                self.state.combat = CombatState {
                    active: true,
                    enemy_id: Some(enemy_id),
                    turn_count: 0,
                    player_actions: Vec::new(),
                };
            }
            StateTransition::CombatEnded => {
                self.state.combat = CombatState::inactive();
            }
            StateTransition::CombatActionRecorded { action_id } => {
                self.state.combat.player_actions.push(action_id);
            }
            StateTransition::CombatTurnAdvanced => {
                self.state.combat.turn_count += 1;
            }
            StateTransition::SceneEntered { scene_id } => {
                let progression = &mut self.state.progression;
                if progression.current_scene_id != scene_id {
                    progression.scene_history.push(scene_id.clone());
                }
                progression.current_scene_id = scene_id;
            }
            StateTransition::ChoiceUnlocked { choice_id } => {
                let unlocked = &mut self.state.progression.unlocked_choices;
                if !unlocked.contains(&choice_id) {
                    unlocked.push(choice_id);
                }
            }
            StateTransition::PlayTimeAccumulated { seconds } => {
                self.state.metadata.play_time += seconds;
            }
            StateTransition::SavedAt { timestamp } => {
                self.state.metadata.last_saved = timestamp;
            }
        }
    }

    // --- character ---

    /// Adjusts hp by `delta`, clamped to `[0, max_hp]`.
    pub fn modify_hp(&mut self, delta: i32) {
        self.apply(StateTransition::HpModified { delta });
    }

    /// Adjusts stamina by `delta`, clamped to `[0, max_stamina]`.
    pub fn modify_stamina(&mut self, delta: i32) {
        self.apply(StateTransition::StaminaModified { delta });
    }

    /// Replaces skills and traits wholesale. Intended to run exactly once,
    /// at character creation.
    pub fn set_character_skills(&mut self, skills: Vec<String>, traits: Vec<String>) {
        self.apply(StateTransition::SkillsAssigned { skills, traits });
    }

    /// Whether the character has acquired the skill.
    #[must_use]
    pub fn has_skill(&self, skill_id: &str) -> bool {
        self.state.character.skills.iter().any(|s| s == skill_id)
    }

    /// Whether the character holds the trait.
    #[must_use]
    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.state.character.traits.iter().any(|t| t == trait_id)
    }

    // --- inventory ---

    /// Grants `quantity` of an item. `quantity` is assumed positive.
    pub fn add_item(&mut self, item_id: &str, quantity: u32) {
        self.apply(StateTransition::ItemAdded {
            item_id: item_id.to_owned(),
            quantity,
        });
    }

    /// Consumes `quantity` of an item. All-or-nothing: returns `false` and
    /// mutates nothing when the held quantity is insufficient.
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        if self.item_quantity(item_id) < quantity {
            return false;
        }
        self.apply(StateTransition::ItemRemoved {
            item_id: item_id.to_owned(),
            quantity,
        });
        true
    }

    /// Whether the inventory holds at least `quantity` of the item.
    #[must_use]
    pub fn has_item(&self, item_id: &str, quantity: u32) -> bool {
        self.item_quantity(item_id) >= quantity
    }

    /// Held quantity of an item (0 when absent).
    #[must_use]
    pub fn item_quantity(&self, item_id: &str) -> u32 {
        self.state.inventory.get(item_id).copied().unwrap_or(0)
    }

    // --- boat ---

    /// Sets the repaired flag. Repairing a zero-hull boat fills it to max.
    pub fn set_boat_repaired(&mut self, repaired: bool) {
        self.apply(StateTransition::BoatRepairSet { repaired });
    }

    /// Records a boat upgrade; adding one already present is a no-op.
    pub fn add_boat_upgrade(&mut self, upgrade_id: &str) {
        self.apply(StateTransition::BoatUpgradeAdded {
            upgrade_id: upgrade_id.to_owned(),
        });
    }

    // --- enemies ---

    /// Creates a runtime enemy record; no-op when one already exists.
    pub fn initialize_enemy(
        &mut self,
        enemy_id: &str,
        name: &str,
        max_hp: i32,
        weak_points: Option<Vec<WeakPointState>>,
    ) {
        self.apply(StateTransition::EnemyInitialized {
            enemy_id: enemy_id.to_owned(),
            name: name.to_owned(),
            max_hp,
            weak_points,
        });
    }

    /// Deals damage, clamping hp to `>= 0`; hp reaching exactly 0 sets the
    /// defeated flag. No-op on an unknown id.
    pub fn damage_enemy(&mut self, enemy_id: &str, damage: i32) {
        self.apply(StateTransition::EnemyDamaged {
            enemy_id: enemy_id.to_owned(),
            damage,
        });
    }

    /// Sets the defeated flag; setting it forces hp to 0. No-op on an
    /// unknown id.
    pub fn set_enemy_defeated(&mut self, enemy_id: &str, defeated: bool) {
        self.apply(StateTransition::EnemyDefeatSet {
            enemy_id: enemy_id.to_owned(),
            defeated,
        });
    }

    /// The runtime enemy record, when one exists.
    #[must_use]
    pub fn enemy(&self, enemy_id: &str) -> Option<&Enemy> {
        self.state.enemies.get(enemy_id)
    }

    /// Whether the enemy's runtime record exists and is defeated.
    #[must_use]
    pub fn is_enemy_defeated(&self, enemy_id: &str) -> bool {
        self.state
            .enemies
            .get(enemy_id)
            .is_some_and(|enemy| enemy.defeated)
    }

    // --- combat ---

    /// Replaces the combat sub-record with a fresh active encounter.
    pub fn start_combat(&mut self, enemy_id: &str) {
        self.apply(StateTransition::CombatStarted {
            enemy_id: enemy_id.to_owned(),
        });
    }

    /// Replaces the combat sub-record with the inactive record.
    pub fn end_combat(&mut self) {
        self.apply(StateTransition::CombatEnded);
    }

    /// Appends an action id to the encounter history.
    pub fn record_combat_action(&mut self, action_id: &str) {
        self.apply(StateTransition::CombatActionRecorded {
            action_id: action_id.to_owned(),
        });
    }

    /// Increments the encounter turn counter.
    pub fn advance_combat_turn(&mut self) {
        self.apply(StateTransition::CombatTurnAdvanced);
    }

    // --- progression ---

    /// Records a scene transition. Appends to history only when the
    /// destination differs from the current scene id, then updates the
    /// current id.
    pub fn set_current_scene(&mut self, scene_id: &str) {
        self.apply(StateTransition::SceneEntered {
            scene_id: scene_id.to_owned(),
        });
    }

    /// Whether the scene id appears in the transition history.
    #[must_use]
    pub fn has_visited_scene(&self, scene_id: &str) -> bool {
        self.state
            .progression
            .scene_history
            .iter()
            .any(|s| s == scene_id)
    }

    /// Records an unlocked choice id (set semantics).
    pub fn unlock_choice(&mut self, choice_id: &str) {
        self.apply(StateTransition::ChoiceUnlocked {
            choice_id: choice_id.to_owned(),
        });
    }

    /// Whether a choice id has been unlocked. No condition in the core
    /// consumes this; it exists for the presentation layer.
    #[must_use]
    pub fn is_choice_unlocked(&self, choice_id: &str) -> bool {
        self.state
            .progression
            .unlocked_choices
            .iter()
            .any(|c| c == choice_id)
    }

    // --- metadata ---

    /// Accumulates play time.
    pub fn accumulate_play_time(&mut self, seconds: u64) {
        self.apply(StateTransition::PlayTimeAccumulated { seconds });
    }

    /// Stamps the last-saved timestamp.
    pub fn mark_saved(&mut self, now: DateTime<Utc>) {
        self.apply(StateTransition::SavedAt { timestamp: now });
    }
}
