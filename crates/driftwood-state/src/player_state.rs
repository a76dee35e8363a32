//! The player-state record — a plain, fully self-contained, serializable
//! snapshot of one play session.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use driftwood_core::clock::Clock;
use serde::{Deserialize, Serialize};

/// Schema version written into fresh state records.
pub const STATE_SCHEMA_VERSION: &str = "1.0.0";

/// Item id → positive quantity. An id present implies quantity > 0;
/// zero-quantity entries are deleted, never stored.
pub type Inventory = BTreeMap<String, u32>;

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Current hit points, clamped to `[0, max_hp]` on every mutation.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Current stamina, clamped to `[0, max_stamina]` on every mutation.
    pub stamina: i32,
    /// Maximum stamina.
    pub max_stamina: i32,
    /// Acquired skill ids, in selection order.
    pub skills: Vec<String>,
    /// Trait ids derived from the chosen skills at character creation.
    /// Not re-derived afterwards.
    pub traits: Vec<String>,
}

/// The boat the player is trying to escape on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    /// Whether the boat has been repaired.
    pub repaired: bool,
    /// Current hull points.
    pub hp: i32,
    /// Maximum hull points.
    pub max_hp: i32,
    /// Applied upgrade item ids, set semantics.
    pub upgrades: Vec<String>,
}

/// Runtime state of one weak point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakPointState {
    /// Weak point id from the enemy definition.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the weak point has been destroyed.
    pub destroyed: bool,
}

/// Runtime state of one enemy, created lazily on first entry into a combat
/// scene that references it and never re-initialized afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    /// Enemy id from the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current hit points, clamped to `>= 0`.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Whether the enemy has been defeated. Kept consistent with hp == 0.
    pub defeated: bool,
    /// Weak points, when the definition has them.
    #[serde(default)]
    pub weak_points: Option<Vec<WeakPointState>>,
}

/// The transient combat sub-record. Wholesale-replaced whenever combat
/// starts or ends; only the current encounter's correctness depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatState {
    /// Whether an encounter is in progress.
    pub active: bool,
    /// The enemy being fought.
    pub enemy_id: Option<String>,
    /// Turns taken this encounter.
    pub turn_count: u32,
    /// Action ids taken this encounter, in order.
    pub player_actions: Vec<String>,
}

impl CombatState {
    /// The inactive, empty sub-record.
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            active: false,
            enemy_id: None,
            turn_count: 0,
            player_actions: Vec::new(),
        }
    }
}

/// Story progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    /// Current scene id. Empty before the first navigation.
    pub current_scene_id: String,
    /// Ordered history of distinct scene-id transitions. A transition to
    /// the scene already current is not appended, so a scene revisited
    /// non-consecutively appears more than once.
    pub scene_history: Vec<String>,
    /// Completed objective ids. Reserved: no consequence writes it yet.
    pub completed_objectives: Vec<String>,
    /// Unlocked choice ids. Write-only within the core; exposed for the
    /// presentation layer.
    pub unlocked_choices: Vec<String>,
}

/// Bookkeeping consumed by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Accumulated play time in seconds.
    pub play_time: u64,
    /// Timestamp of the last save.
    pub last_saved: DateTime<Utc>,
    /// State schema version.
    pub version: String,
}

/// Startup configuration for a fresh state. Replaces the original's
/// compile-time "start with everything" toggle: hosts that want a stocked
/// debug inventory pass one in explicitly.
#[derive(Debug, Clone)]
pub struct StartOptions {
    /// Character display name.
    pub character_name: String,
    /// Inventory the session starts with.
    pub starting_inventory: Inventory,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            character_name: "Castaway".to_owned(),
            starting_inventory: Inventory::new(),
        }
    }
}

/// The complete player-state record for one play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// The player character.
    pub character: Character,
    /// Owned items.
    pub inventory: Inventory,
    /// The boat.
    pub boat: Boat,
    /// Runtime enemy records by enemy id.
    pub enemies: BTreeMap<String, Enemy>,
    /// The transient combat sub-record.
    pub combat: CombatState,
    /// Story progression.
    pub progression: Progression,
    /// Persistence bookkeeping.
    pub metadata: Metadata,
}

impl PlayerState {
    /// Builds a fresh state from startup options.
    #[must_use]
    pub fn new(options: &StartOptions, clock: &dyn Clock) -> Self {
        Self {
            character: Character {
                name: options.character_name.clone(),
                hp: 100,
                max_hp: 100,
                stamina: 100,
                max_stamina: 100,
                skills: Vec::new(),
                traits: Vec::new(),
            },
            inventory: options.starting_inventory.clone(),
            boat: Boat {
                repaired: false,
                hp: 0,
                max_hp: 100,
                upgrades: Vec::new(),
            },
            enemies: BTreeMap::new(),
            combat: CombatState::inactive(),
            progression: Progression {
                current_scene_id: String::new(),
                scene_history: Vec::new(),
                completed_objectives: Vec::new(),
                unlocked_choices: Vec::new(),
            },
            metadata: Metadata {
                play_time: 0,
                last_saved: clock.now(),
                version: STATE_SCHEMA_VERSION.to_owned(),
            },
        }
    }
}
