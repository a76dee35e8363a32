//! Scene navigation — resolve a scene id, record the transition, and
//! perform scene-entry side effects.

use driftwood_content::catalog::Catalog;
use driftwood_content::scene::{Scene, SceneKind};
use driftwood_core::error::EngineError;
use driftwood_state::player_state::WeakPointState;
use driftwood_state::store::StateStore;

/// Resolves `scene_id` and records the transition.
///
/// Entering a combat scene lazily initializes the referenced enemy's
/// runtime record (only when absent, only when the catalog defines the
/// enemy) and (re-)starts the combat sub-record on EVERY entry: the turn
/// counter and action history reset while the enemy's hp persists.
///
/// # Errors
///
/// Returns `EngineError::SceneNotFound` for an unresolvable id; state is
/// left untouched and the transition is not recorded. This is a terminal
/// authoring error for that transition, not a recoverable one.
pub fn navigate_to_scene<'a>(
    catalog: &'a Catalog,
    store: &mut StateStore,
    scene_id: &str,
) -> Result<&'a Scene, EngineError> {
    let Some(scene) = catalog.scene(scene_id) else {
        return Err(EngineError::SceneNotFound(scene_id.to_owned()));
    };

    store.set_current_scene(scene_id);

    if let SceneKind::Combat { enemy_id, .. } = &scene.kind {
        if store.enemy(enemy_id).is_none() {
            if let Some(definition) = catalog.enemy(enemy_id) {
                let weak_points = definition.weak_points.as_ref().map(|points| {
                    points
                        .iter()
                        .map(|point| WeakPointState {
                            id: point.id.clone(),
                            name: point.name.clone(),
                            destroyed: false,
                        })
                        .collect()
                });
                store.initialize_enemy(enemy_id, &definition.name, definition.max_hp, weak_points);
            } else {
                tracing::warn!(enemy_id, scene_id, "combat scene references unknown enemy");
            }
        }
        // Unconditional: re-entry restarts the encounter bookkeeping.
        store.start_combat(enemy_id);
    }

    Ok(scene)
}

/// Resolves the store's current scene id through the catalog. A stale or
/// invalid id yields `None`.
#[must_use]
pub fn current_scene<'a>(catalog: &'a Catalog, store: &StateStore) -> Option<&'a Scene> {
    catalog.scene(&store.state().progression.current_scene_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use driftwood_state::player_state::StartOptions;
    use driftwood_test_support::FixedClock;

    fn catalog() -> Catalog {
        Catalog::from_value(serde_json::json!({
            "enemies": {
                "reefShark": {
                    "name": "Reef Shark",
                    "maxHp": 50,
                    "weakPoints": [{"id": "gills", "name": "Gills", "hp": 10}]
                }
            },
            "scenes": {
                "beach": {"id": "beach", "type": "narrative", "choices": []},
                "reefFight": {
                    "id": "reefFight",
                    "type": "combat",
                    "enemyId": "reefShark",
                    "choices": [],
                    "victorySceneId": "beach",
                    "defeatSceneId": "beach"
                },
                "ghostFight": {
                    "id": "ghostFight",
                    "type": "combat",
                    "enemyId": "nobody",
                    "choices": [],
                    "victorySceneId": "beach",
                    "defeatSceneId": "beach"
                }
            },
            "startSceneId": "beach"
        }))
        .unwrap()
    }

    fn fresh_store() -> StateStore {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
        StateStore::from_options(&StartOptions::default(), &clock)
    }

    #[test]
    fn test_unknown_scene_leaves_state_untouched() {
        // Arrange
        let catalog = catalog();
        let mut store = fresh_store();
        let before = store.snapshot();

        // Act
        let result = navigate_to_scene(&catalog, &mut store, "atlantis");

        // Assert
        match result.unwrap_err() {
            EngineError::SceneNotFound(id) => assert_eq!(id, "atlantis"),
            other => panic!("expected SceneNotFound, got {other:?}"),
        }
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_combat_entry_initializes_enemy_and_starts_combat() {
        // Arrange
        let catalog = catalog();
        let mut store = fresh_store();

        // Act
        let scene = navigate_to_scene(&catalog, &mut store, "reefFight").unwrap();

        // Assert
        assert_eq!(scene.id, "reefFight");
        let enemy = store.enemy("reefShark").unwrap();
        assert_eq!(enemy.hp, 50);
        assert_eq!(enemy.name, "Reef Shark");
        let weak_points = enemy.weak_points.as_ref().unwrap();
        assert_eq!(weak_points.len(), 1);
        assert!(!weak_points[0].destroyed);
        assert!(store.state().combat.active);
        assert_eq!(store.state().combat.enemy_id.as_deref(), Some("reefShark"));
    }

    #[test]
    fn test_combat_reentry_keeps_enemy_hp_but_resets_encounter() {
        // Arrange — fight, take damage, leave.
        let catalog = catalog();
        let mut store = fresh_store();
        navigate_to_scene(&catalog, &mut store, "reefFight").unwrap();
        store.damage_enemy("reefShark", 20);
        store.record_combat_action("stab");
        store.advance_combat_turn();
        navigate_to_scene(&catalog, &mut store, "beach").unwrap();

        // Act — come back.
        navigate_to_scene(&catalog, &mut store, "reefFight").unwrap();

        // Assert
        assert_eq!(store.enemy("reefShark").unwrap().hp, 30);
        assert_eq!(store.state().combat.turn_count, 0);
        assert!(store.state().combat.player_actions.is_empty());
    }

    #[test]
    fn test_combat_scene_with_unknown_enemy_still_starts_combat() {
        // Arrange
        let catalog = catalog();
        let mut store = fresh_store();

        // Act
        navigate_to_scene(&catalog, &mut store, "ghostFight").unwrap();

        // Assert — no runtime record, but the encounter bookkeeping runs.
        assert!(store.enemy("nobody").is_none());
        assert!(store.state().combat.active);
    }

    #[test]
    fn test_current_scene_resolves_through_the_catalog() {
        let catalog = catalog();
        let mut store = fresh_store();

        assert!(current_scene(&catalog, &store).is_none());

        navigate_to_scene(&catalog, &mut store, "beach").unwrap();
        assert_eq!(current_scene(&catalog, &store).unwrap().id, "beach");
    }
}
