#![allow(dead_code)]

use game_core::{
    AttributeSet, ClassTemplate, MonsterTemplate, Player, RngOracle, TemplateSnapshot,
};

/// Template catalog mirroring the shipped content plus a few test-only
/// entries with hand-picked stats.
pub fn templates() -> TemplateSnapshot {
    TemplateSnapshot::new(
        vec![
            ClassTemplate::new("beginner", "Beginner", AttributeSet::uniform(5)),
            // attack 20 at level 1
            ClassTemplate::new("weakling", "Weakling", AttributeSet::new(3, 3, 0, 0, 0)),
            // dexterity 50, flee chance 100 against a 0-dex monster
            ClassTemplate::new("runner", "Runner", AttributeSet::new(0, 50, 0, 0, 0)),
            // accuracy far above any evasion, crit 5
            ClassTemplate::new("sharpshooter", "Sharpshooter", AttributeSet::new(0, 40, 0, 0, 0)),
        ],
        vec![
            MonsterTemplate::new("slime", "Slime", 1, AttributeSet::new(3, 2, 4, 1, 2), 10),
            MonsterTemplate::new("goblin", "Goblin", 3, AttributeSet::new(6, 5, 6, 2, 3), 30),
            // defense 25 at level 1
            MonsterTemplate::new("turtle", "Turtle", 1, AttributeSet::new(3, 0, 9, 0, 0), 5),
            // zero dexterity, sturdy
            MonsterTemplate::new("statue", "Statue", 1, AttributeSet::new(0, 0, 20, 0, 0), 1),
            // one-shots a level-1 beginner
            MonsterTemplate::new("ogre", "Ogre", 10, AttributeSet::new(60, 40, 1, 0, 0), 500),
            // harmless, pays for two level-ups from level 1
            MonsterTemplate::new("pinata", "Pinata", 1, AttributeSet::ZERO, 230),
        ],
    )
}

pub fn player(class_id: &str, level: u32) -> Player {
    Player::new("Hero", class_id, level, &templates()).expect("test class exists")
}

/// RNG that returns the same percentage for every draw.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoll(pub f64);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }

    fn roll_percent(&self, _seed: u64) -> f64 {
        self.0
    }
}
