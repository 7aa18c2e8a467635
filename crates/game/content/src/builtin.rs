//! Tables compiled into the binary.

use game_core::{AiPattern, AttributeSet, ClassTemplate, MonsterTemplate, TemplateSnapshot};

/// Class templates available without any data files.
pub fn builtin_classes() -> Vec<ClassTemplate> {
    vec![
        ClassTemplate::new("beginner", "Beginner", AttributeSet::uniform(5)),
        ClassTemplate::new("warrior", "Warrior", AttributeSet::new(10, 5, 8, 3, 4)),
    ]
}

/// Monster templates available without any data files.
pub fn builtin_monsters() -> Vec<MonsterTemplate> {
    vec![
        MonsterTemplate::new("slime", "Slime", 1, AttributeSet::new(3, 2, 4, 1, 2), 10)
            .with_description("The weakest monster")
            .with_color("#4ecdc4")
            .with_ai_pattern(AiPattern::Basic),
        MonsterTemplate::new("goblin", "Goblin", 3, AttributeSet::new(6, 5, 6, 2, 3), 30)
            .with_description("A slightly stronger monster")
            .with_color("#ff6b6b")
            .with_ai_pattern(AiPattern::Basic),
    ]
}

/// Every built-in table as a ready-to-use template oracle.
pub fn builtin_snapshot() -> TemplateSnapshot {
    TemplateSnapshot::new(builtin_classes(), builtin_monsters())
}
