//! Shared test helpers for engine integration tests.
#![allow(dead_code)]

use chrono::TimeZone;
use driftwood_content::catalog::Catalog;
use driftwood_engine::GameEngine;
use driftwood_state::player_state::StartOptions;
use driftwood_test_support::FixedClock;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> FixedClock {
    FixedClock(chrono::Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
}

/// A small but complete island: character creation, a beach hub, a
/// gathering grove, a crafting campfire, a reef-shark fight, and two
/// endings.
pub fn island_catalog() -> Catalog {
    Catalog::from_value(serde_json::json!({
        "version": "1.0.0",
        "title": "Island Test Run",
        "skills": {
            "foraging": {
                "name": "Foraging",
                "description": "Finding food and materials.",
                "category": "survival",
                "traits": ["keenEye"]
            },
            "crafting": {
                "name": "Crafting",
                "description": "Making things.",
                "category": "crafting",
                "traits": ["steadyHands"]
            },
            "fighting": {
                "name": "Fighting",
                "description": "Holding your own.",
                "category": "combat",
                "traits": ["ironGrip"]
            }
        },
        "traits": {
            "keenEye": {"name": "Keen Eye", "description": "Spots the useful."},
            "steadyHands": {"name": "Steady Hands", "description": "Wastes nothing."},
            "ironGrip": {"name": "Iron Grip", "description": "Hits harder."}
        },
        "items": {
            "bark": {"name": "Bark", "description": "Stringy bark.", "type": "resource"},
            "wood": {"name": "Wood", "description": "Driftwood.", "type": "resource"},
            "boatPatchKit": {
                "name": "Boat Patch Kit",
                "description": "Seals a hull breach.",
                "type": "tool"
            }
        },
        "recipes": {
            "patchKit": {
                "name": "Boat Patch Kit",
                "description": "Bark and patience.",
                "resultItemId": "boatPatchKit",
                "resultQuantity": 1,
                "ingredients": [{"itemId": "bark", "quantity": 4}],
                "craftTime": 10,
                "skillModifier": {"skillId": "crafting", "costMultiplier": 0.75}
            }
        },
        "enemies": {
            "reefShark": {
                "name": "Reef Shark",
                "description": "Circles the shallows.",
                "maxHp": 30,
                "weakPoints": [{"id": "gills", "name": "Gills", "hp": 10}],
                "attacks": [
                    {"id": "bite", "name": "Bite", "damage": 15, "description": "Teeth."}
                ]
            }
        },
        "scenes": {
            "wakeUp": {
                "id": "wakeUp",
                "type": "characterCreation",
                "skillSelectionCount": 2,
                "availableSkills": ["foraging", "crafting", "fighting"],
                "traitSelectionCount": 0,
                "availableTraits": [],
                "nextSceneId": "beach"
            },
            "beach": {
                "id": "beach",
                "type": "choice",
                "content": [{"type": "text", "content": "Waves hiss over broken planks."}],
                "choices": [
                    {
                        "id": "toGrove",
                        "text": "Head into the grove",
                        "consequences": [{"type": "navigate", "sceneId": "grove"}]
                    },
                    {
                        "id": "toReef",
                        "text": "Wade out to the reef",
                        "consequences": [{"type": "navigate", "sceneId": "reefFight"}]
                    },
                    {
                        "id": "patchBoat",
                        "text": "Patch the boat",
                        "conditions": [
                            {"type": "hasItem", "itemId": "boatPatchKit", "quantity": 1}
                        ],
                        "consequences": [
                            {"type": "removeItem", "itemId": "boatPatchKit", "quantity": 1},
                            {"type": "setBoatRepaired"},
                            {"type": "navigate", "sceneId": "sailAway"}
                        ]
                    }
                ]
            },
            "grove": {
                "id": "grove",
                "type": "gathering",
                "resources": [
                    {"itemId": "bark", "baseQuantity": 2, "gatherTime": 5},
                    {"itemId": "wood", "baseQuantity": 2, "gatherTime": 5}
                ],
                "exitChoice": {
                    "id": "leaveGrove",
                    "text": "Back to the beach",
                    "consequences": [{"type": "navigate", "sceneId": "beach"}]
                }
            },
            "campfire": {
                "id": "campfire",
                "type": "crafting",
                "availableRecipes": ["patchKit"],
                "exitChoice": {
                    "id": "leaveCampfire",
                    "text": "Back to the beach",
                    "consequences": [{"type": "navigate", "sceneId": "beach"}]
                }
            },
            "reefFight": {
                "id": "reefFight",
                "type": "combat",
                "enemyId": "reefShark",
                "choices": [
                    {
                        "id": "spearThrust",
                        "text": "Thrust the spear",
                        "consequences": [
                            {"type": "damageEnemy", "enemyId": "reefShark", "damage": 10}
                        ],
                        "traitChecks": [
                            {
                                "traitId": "ironGrip",
                                "bonusConsequences": [
                                    {"type": "damageEnemy", "enemyId": "reefShark", "damage": 5}
                                ]
                            }
                        ]
                    },
                    {
                        "id": "retreat",
                        "text": "Kick back to shore",
                        "consequences": [
                            {"type": "modifyStat", "stat": "hp", "amount": -15},
                            {"type": "navigate", "sceneId": "beach"}
                        ]
                    }
                ],
                "victorySceneId": "beach",
                "defeatSceneId": "lostAtSea"
            },
            "sailAway": {
                "id": "sailAway",
                "type": "ending",
                "endingType": "victory",
                "canRestart": true
            },
            "lostAtSea": {
                "id": "lostAtSea",
                "type": "ending",
                "endingType": "defeat",
                "canRestart": true
            }
        },
        "startSceneId": "wakeUp"
    }))
    .unwrap()
}

/// A fresh engine sitting on the island catalog's start scene.
pub fn fresh_engine() -> GameEngine {
    GameEngine::new(island_catalog(), &StartOptions::default(), &fixed_clock())
}
