//! Consequences — atomic state-mutation instructions executed when a choice
//! resolves.

use serde::{Deserialize, Serialize};

/// A character stat that consequences may modify. Narrower than
/// [`crate::condition::StatKind`]: maximums are not mutable through the
/// consequence vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MutableStat {
    /// Current hit points.
    Hp,
    /// Current stamina.
    Stamina,
}

/// An atomic state mutation instruction.
///
/// An unrecognized discriminant deserializes to [`Consequence::Unknown`];
/// the engine logs and skips it without aborting the rest of the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Consequence {
    /// Transition to another scene.
    Navigate {
        /// Destination scene id.
        scene_id: String,
    },
    /// Grant items.
    AddItem {
        /// Item id to grant.
        item_id: String,
        /// Quantity to grant (positive).
        quantity: u32,
    },
    /// Consume items. Short by any amount, nothing is removed.
    RemoveItem {
        /// Item id to consume.
        item_id: String,
        /// Quantity to consume.
        quantity: u32,
    },
    /// Adjust a character stat by a signed amount, clamped to `[0, max]`.
    ModifyStat {
        /// Stat to adjust.
        stat: MutableStat,
        /// Signed delta.
        amount: i32,
    },
    /// Mark the boat repaired. Fills boat hp to max only when hp is
    /// exactly 0.
    SetBoatRepaired,
    /// Deal damage to an enemy's runtime record.
    DamageEnemy {
        /// Enemy id to damage.
        enemy_id: String,
        /// Damage amount.
        damage: i32,
    },
    /// Force an enemy defeated (hp drops to 0).
    SetEnemyDefeated {
        /// Enemy id to defeat.
        enemy_id: String,
    },
    /// Record a choice id in the unlocked set.
    UnlockChoice {
        /// Choice id to unlock.
        choice_id: String,
    },
    /// Catch-all for discriminants outside the closed vocabulary.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_consequence_parses() {
        let json = r#"{"type":"navigate","sceneId":"beach"}"#;

        let consequence: Consequence = serde_json::from_str(json).unwrap();

        match consequence {
            Consequence::Navigate { scene_id } => assert_eq!(scene_id, "beach"),
            other => panic!("expected Navigate, got {other:?}"),
        }
    }

    #[test]
    fn test_modify_stat_consequence_parses_signed_amount() {
        let json = r#"{"type":"modifyStat","stat":"stamina","amount":-10}"#;

        let consequence: Consequence = serde_json::from_str(json).unwrap();

        match consequence {
            Consequence::ModifyStat { stat, amount } => {
                assert_eq!(stat, MutableStat::Stamina);
                assert_eq!(amount, -10);
            }
            other => panic!("expected ModifyStat, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_discriminant_parses_to_unknown() {
        let json = r#"{"type":"summonKraken","enemyId":"kraken"}"#;

        let consequence: Consequence = serde_json::from_str(json).unwrap();

        assert!(matches!(consequence, Consequence::Unknown));
    }
}
