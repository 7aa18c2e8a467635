mod common;

use common::{player, templates};
use game_core::{AttributeKind, AttributeSet, ConfigError, PersistedCharacter, Player};

#[test]
fn restored_character_is_rested_with_points_recomputed() {
    let mut hero = player("beginner", 4);
    {
        let stats = hero.stats_mut();
        assert!(stats.allocate_point(AttributeKind::Str, 6));
        assert!(stats.allocate_point(AttributeKind::Dex, 4));
        stats.gain_experience(50);
        stats.take_damage(120);
    }

    let data = hero.to_persisted();
    assert_eq!(data.bonus_attributes, AttributeSet::new(6, 4, 0, 0, 0));

    let restored = Player::from_persisted(&data, &templates()).unwrap();
    let stats = restored.stats();
    assert_eq!(stats.final_attributes(), hero.stats().final_attributes());
    assert_eq!(stats.derived_stats(), hero.stats().derived_stats());
    assert_eq!(stats.available_points(), 5);
    assert_eq!(stats.current_experience(), 0);
    assert_eq!(stats.current_hp(), stats.max_hp());
    assert_eq!(stats.current_mp(), stats.max_mp());
}

#[test]
fn over_allocated_data_is_rejected() {
    let data = PersistedCharacter {
        class_id: "beginner".to_string(),
        level: 2,
        bonus_attributes: AttributeSet::new(3, 3, 0, 0, 0),
    };
    assert_eq!(
        Player::from_persisted(&data, &templates()).unwrap_err(),
        ConfigError::OverAllocated {
            allocated: 6,
            budget: 5
        }
    );
}

#[test]
fn bonus_total_past_u32_is_rejected() {
    let data = PersistedCharacter {
        class_id: "beginner".to_string(),
        level: 2,
        bonus_attributes: AttributeSet::new(u32::MAX, 1, 0, 0, 0),
    };
    assert_eq!(
        Player::from_persisted(&data, &templates()).unwrap_err(),
        ConfigError::OverAllocated {
            allocated: u32::MAX,
            budget: 5
        }
    );
}

#[test]
fn level_outside_range_is_rejected() {
    for level in [0, 101] {
        let data = PersistedCharacter {
            class_id: "beginner".to_string(),
            level,
            bonus_attributes: AttributeSet::ZERO,
        };
        assert_eq!(
            Player::from_persisted(&data, &templates()).unwrap_err(),
            ConfigError::LevelOutOfRange(level)
        );
    }
}

#[test]
fn unknown_class_is_rejected() {
    let data = PersistedCharacter {
        class_id: "paladin".to_string(),
        level: 1,
        bonus_attributes: AttributeSet::ZERO,
    };
    assert_eq!(
        Player::from_persisted(&data, &templates()).unwrap_err(),
        ConfigError::UnknownClass("paladin".to_string())
    );
}

#[cfg(feature = "serde")]
#[test]
fn persisted_json_shape() {
    let data = player("beginner", 3).to_persisted();
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "class_id": "beginner",
            "level": 3,
            "bonus_attributes": { "str": 0, "dex": 0, "vit": 0, "int": 0, "spr": 0 }
        })
    );

    let back: PersistedCharacter = serde_json::from_value(json).unwrap();
    assert_eq!(back, data);
}
