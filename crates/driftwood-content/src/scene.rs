//! Scenes — named units of presented content with type-specific shapes.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::consequence::Consequence;

/// A block of presentable content within a scene. The core carries these
/// opaquely; rendering is the presentation layer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ContentBlock {
    /// Prose.
    Text {
        /// Text content.
        content: String,
        /// Optional styling hint.
        #[serde(default)]
        class_name: Option<String>,
    },
    /// An illustration.
    Image {
        /// Image source.
        src: String,
        /// Alt text.
        alt: String,
        /// Optional styling hint.
        #[serde(default)]
        class_name: Option<String>,
    },
    /// A stats readout.
    Stats {
        /// Show hit points.
        show_hp: bool,
        /// Show stamina.
        show_stamina: bool,
        /// Show the inventory summary.
        show_inventory: bool,
    },
    /// An inventory listing.
    Inventory {
        /// Optional heading.
        #[serde(default)]
        title: Option<String>,
    },
    /// A presentation-layer timer. The listed consequences fire when it
    /// completes; the core only stores them.
    Timer {
        /// Duration in seconds.
        duration: u32,
        /// Consequences the presentation layer submits on completion.
        on_complete: Vec<Consequence>,
    },
    /// Catch-all for unrecognized block kinds.
    #[serde(other)]
    Unknown,
}

/// How an ending scene concludes the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndingKind {
    /// The player won.
    Victory,
    /// The player lost.
    Defeat,
    /// The player escaped without resolving the story.
    Escape,
}

/// One gatherable resource offered by a gathering scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpot {
    /// Item id granted.
    pub item_id: String,
    /// Quantity granted before skill multipliers.
    pub base_quantity: u32,
    /// Gathering duration in seconds, driving the presentation-layer
    /// progress indicator only.
    pub gather_time: u32,
}

/// The type-specific shape of a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SceneKind {
    /// Skill selection at the start of a session.
    CharacterCreation {
        /// How many skills the player picks.
        skill_selection_count: u32,
        /// Skill ids on offer.
        available_skills: Vec<String>,
        /// How many traits are displayed for confirmation.
        trait_selection_count: u32,
        /// Trait ids on offer.
        available_traits: Vec<String>,
        /// Scene entered after confirmation.
        next_scene_id: String,
    },
    /// Prose with choices.
    Narrative {
        /// Choices offered.
        choices: Vec<Choice>,
    },
    /// A decision point.
    Choice {
        /// Choices offered.
        choices: Vec<Choice>,
    },
    /// Resource gathering.
    Gathering {
        /// Gatherable resources.
        resources: Vec<ResourceSpot>,
        /// Choice that leaves the scene.
        exit_choice: Box<Choice>,
    },
    /// Crafting at a workbench.
    Crafting {
        /// Recipe ids on offer.
        available_recipes: Vec<String>,
        /// Choice that leaves the scene.
        exit_choice: Box<Choice>,
    },
    /// An encounter. Entering (re-)starts the combat sub-record; the
    /// enemy's runtime hp persists across entries.
    Combat {
        /// Enemy fought in this scene.
        enemy_id: String,
        /// Combat actions.
        choices: Vec<Choice>,
        /// Scene entered on victory.
        victory_scene_id: String,
        /// Scene entered on defeat.
        defeat_scene_id: String,
    },
    /// A story conclusion.
    Ending {
        /// How the story concluded.
        ending_type: EndingKind,
        /// Whether the presentation layer offers a restart.
        can_restart: bool,
    },
}

/// A named unit of presented content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Scene id, unique within the catalog.
    pub id: String,
    /// Optional heading.
    #[serde(default)]
    pub title: Option<String>,
    /// Presentable blocks, carried opaquely.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Type-specific shape.
    #[serde(flatten)]
    pub kind: SceneKind,
}
