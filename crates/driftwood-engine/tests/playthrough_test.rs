//! End-to-end playthroughs exercising navigation, choice resolution,
//! gathering, crafting, combat, and session persistence together.

mod common;

use driftwood_content::choice::Choice;
use driftwood_content::scene::SceneKind;
use driftwood_engine::{CombatOutcome, GameEngine};
use driftwood_session::{InMemorySaveRepository, autosave, load_preferred};

/// Clones a choice off the current scene by id.
fn scene_choice(engine: &GameEngine, choice_id: &str) -> Choice {
    let scene = engine.current_scene().expect("engine has a current scene");
    let choices: Vec<&Choice> = match &scene.kind {
        SceneKind::Narrative { choices }
        | SceneKind::Choice { choices }
        | SceneKind::Combat { choices, .. } => choices.iter().collect(),
        SceneKind::Gathering { exit_choice, .. } | SceneKind::Crafting { exit_choice, .. } => {
            vec![exit_choice.as_ref()]
        }
        _ => Vec::new(),
    };
    choices
        .into_iter()
        .find(|choice| choice.id == choice_id)
        .unwrap_or_else(|| panic!("scene {} has no choice {choice_id}", scene.id))
        .clone()
}

#[test]
fn test_full_escape_playthrough() {
    // Arrange — a crafter-forager wakes on the start scene.
    let mut engine = common::fresh_engine();
    assert_eq!(engine.current_scene().unwrap().id, "wakeUp");
    engine.create_character(&["foraging".into(), "crafting".into()]);
    engine.navigate_to_scene("beach").unwrap();

    // Act — gather bark in the grove. Foraging turns 2 into floor(3.0).
    let to_grove = scene_choice(&engine, "toGrove");
    engine.process_choice(&to_grove);
    assert_eq!(engine.current_scene().unwrap().id, "grove");
    let granted = engine.gather_resource("bark", 2);
    assert_eq!(granted, 3);

    // Craft at the campfire. The crafting skill drops the 4-bark cost to
    // ceil(3.0) = 3, exactly what was gathered.
    engine.navigate_to_scene("campfire").unwrap();
    assert!(engine.craft_item("patchKit"));
    assert_eq!(engine.store().item_quantity("bark"), 0);
    assert_eq!(engine.store().item_quantity("boatPatchKit"), 1);

    // Back at the beach, the gated repair choice has become available.
    let leave = scene_choice(&engine, "leaveCampfire");
    engine.process_choice(&leave);
    let patch_boat = scene_choice(&engine, "patchBoat");
    assert!(engine.is_available(&patch_boat));
    engine.process_choice(&patch_boat);

    // Assert — the kit was consumed, the boat made whole, the ending
    // reached, and the route recorded in order.
    let state = engine.state();
    assert_eq!(engine.current_scene().unwrap().id, "sailAway");
    assert!(state.boat.repaired);
    assert_eq!(state.boat.hp, 100);
    assert_eq!(engine.store().item_quantity("boatPatchKit"), 0);
    assert_eq!(
        state.progression.scene_history,
        vec!["wakeUp", "beach", "grove", "campfire", "beach", "sailAway"]
    );
}

#[test]
fn test_gated_choice_is_hidden_until_its_condition_holds() {
    let mut engine = common::fresh_engine();
    engine.navigate_to_scene("beach").unwrap();

    let patch_boat = scene_choice(&engine, "patchBoat");
    assert!(!engine.is_available(&patch_boat));

    engine.gather_resource("boatPatchKit", 1);
    assert!(engine.is_available(&patch_boat));
}

#[test]
fn test_gathering_without_foraging_grants_the_base_quantity() {
    let mut engine = common::fresh_engine();
    engine.create_character(&["crafting".into()]);
    engine.navigate_to_scene("grove").unwrap();

    assert_eq!(engine.gather_resource("bark", 2), 2);
}

#[test]
fn test_combat_victory_with_trait_bonus_damage() {
    // Arrange — a fighter's ironGrip adds 5 bonus damage per thrust, so
    // the 30 hp shark falls in two turns instead of three.
    let mut engine = common::fresh_engine();
    engine.create_character(&["fighting".into()]);
    engine.navigate_to_scene("reefFight").unwrap();
    let thrust = scene_choice(&engine, "spearThrust");

    // Act
    engine.process_choice(&thrust);
    assert_eq!(engine.check_combat_end(), CombatOutcome::Ongoing);
    engine.process_choice(&thrust);
    let outcome = engine.check_combat_end();

    // Assert — victory ends combat; the host then follows the scene's
    // victory route.
    assert_eq!(outcome, CombatOutcome::Victory);
    assert!(!engine.store().state().combat.active);
    assert!(engine.store().is_enemy_defeated("reefShark"));
    let SceneKind::Combat { victory_scene_id, .. } = &engine.current_scene().unwrap().kind else {
        panic!("expected a combat scene");
    };
    let destination = victory_scene_id.clone();
    engine.navigate_to_scene(&destination).unwrap();
    assert_eq!(engine.current_scene().unwrap().id, "beach");
}

#[test]
fn test_enemy_hp_survives_a_retreat_but_the_encounter_resets() {
    // Arrange — wound the shark, then flee. Retreating costs hp and
    // navigates away, which leaves the encounter behind.
    let mut engine = common::fresh_engine();
    engine.navigate_to_scene("reefFight").unwrap();
    let thrust = scene_choice(&engine, "spearThrust");
    let retreat = scene_choice(&engine, "retreat");
    engine.process_choice(&thrust);
    engine.process_choice(&retreat);
    assert_eq!(engine.current_scene().unwrap().id, "beach");
    assert_eq!(engine.store().state().character.hp, 85);

    // Act — wade back out.
    engine.navigate_to_scene("reefFight").unwrap();

    // Assert — the wound persists, the turn ledger does not.
    let state = engine.store().state();
    assert_eq!(state.enemies["reefShark"].hp, 20);
    assert_eq!(state.combat.turn_count, 0);
    assert!(state.combat.player_actions.is_empty());
}

#[test]
fn test_combat_actions_and_turns_are_ledgered() {
    let mut engine = common::fresh_engine();
    engine.navigate_to_scene("reefFight").unwrap();
    let thrust = scene_choice(&engine, "spearThrust");

    engine.process_choice(&thrust);
    engine.process_choice(&thrust);

    let combat = &engine.store().state().combat;
    assert_eq!(combat.player_actions, vec!["spearThrust", "spearThrust"]);
    assert_eq!(combat.turn_count, 2);
}

#[tokio::test]
async fn test_session_survives_an_autosave_and_resume() {
    // Arrange — make some distinctive progress.
    let mut engine = common::fresh_engine();
    engine.create_character(&["foraging".into()]);
    engine.navigate_to_scene("grove").unwrap();
    engine.gather_resource("bark", 2);
    engine.record_play_time(90);

    // Act — autosave, then resume a brand-new engine from the pick.
    let repository = InMemorySaveRepository::new();
    autosave(&repository, engine.state(), &common::fixed_clock())
        .await
        .unwrap();
    let restored = load_preferred(&repository).await.unwrap().unwrap();
    let resumed = GameEngine::from_state(common::island_catalog(), restored);

    // Assert — the resumed session matches in every dimension that was
    // touched, and sits on the saved scene without re-navigating.
    assert_eq!(resumed.current_scene().unwrap().id, "grove");
    assert_eq!(resumed.store().item_quantity("bark"), 3);
    assert!(resumed.store().has_skill("foraging"));
    assert_eq!(resumed.store().state().metadata.play_time, 90);
    assert_eq!(
        resumed.store().state().progression.scene_history,
        vec!["wakeUp", "grove"]
    );
}
