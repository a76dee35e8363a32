//! The condition evaluator.

use driftwood_content::condition::{Condition, StatKind};
use driftwood_state::player_state::{Character, PlayerState};

/// Evaluates one condition against the current player state.
///
/// Pure: no side effects beyond tracing, and the same state always yields
/// the same result. Unknown kinds and malformed `not` lists are logged and
/// evaluate false, never fail.
#[must_use]
pub fn evaluate(state: &PlayerState, condition: &Condition) -> bool {
    match condition {
        Condition::HasSkill { skill_id } => {
            state.character.skills.iter().any(|s| s == skill_id)
        }
        Condition::HasTrait { trait_id } => {
            state.character.traits.iter().any(|t| t == trait_id)
        }
        Condition::HasItem { item_id, quantity } => held_quantity(state, item_id) >= *quantity,
        Condition::HasResources { resources } => resources
            .iter()
            .all(|requirement| held_quantity(state, &requirement.item_id) >= requirement.quantity),
        Condition::StatGreaterThan { stat, value } => stat_value(&state.character, *stat) > *value,
        Condition::StatLessThan { stat, value } => stat_value(&state.character, *stat) < *value,
        Condition::BoatRepaired => state.boat.repaired,
        Condition::EnemyDefeated { enemy_id } => state
            .enemies
            .get(enemy_id)
            .is_some_and(|enemy| enemy.defeated),
        Condition::SceneVisited { scene_id } => state
            .progression
            .scene_history
            .iter()
            .any(|visited| visited == scene_id),
        Condition::And { conditions } => conditions.iter().all(|child| evaluate(state, child)),
        Condition::Or { conditions } => conditions.iter().any(|child| evaluate(state, child)),
        // Only the first child is inspected. Authored content supplies
        // exactly one; extra children are ignored.
        Condition::Not { conditions } => match conditions.first() {
            Some(first) => !evaluate(state, first),
            None => {
                tracing::warn!("`not` condition with no children evaluates false");
                false
            }
        },
        Condition::Unknown => {
            tracing::warn!("unknown condition kind evaluates false");
            false
        }
    }
}

/// Evaluates a guard list: every condition must hold. An empty list is
/// vacuously satisfied, so unguarded choices are always available.
#[must_use]
pub fn evaluate_all(state: &PlayerState, conditions: &[Condition]) -> bool {
    conditions.iter().all(|condition| evaluate(state, condition))
}

fn held_quantity(state: &PlayerState, item_id: &str) -> u32 {
    state.inventory.get(item_id).copied().unwrap_or(0)
}

fn stat_value(character: &Character, stat: StatKind) -> i32 {
    match stat {
        StatKind::Hp => character.hp,
        StatKind::Stamina => character.stamina,
        StatKind::MaxHp => character.max_hp,
        StatKind::MaxStamina => character.max_stamina,
    }
}
