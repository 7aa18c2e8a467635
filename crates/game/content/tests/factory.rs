use std::fs;

use game_content::{ContentFactory, builtin_snapshot};
use game_core::{AttributeSet, Monster, TemplateOracle};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

#[test]
fn shipped_data_matches_builtin_tables() {
    let factory = ContentFactory::new(DATA_DIR);

    assert_eq!(factory.load_snapshot().unwrap(), builtin_snapshot());
}

#[test]
fn empty_directory_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = ContentFactory::new(dir.path()).load_snapshot().unwrap();

    assert_eq!(snapshot, builtin_snapshot());
}

#[test]
fn files_override_and_extend_builtin() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(ContentFactory::MONSTERS_FILE),
        r#"(
            monsters: [
                (
                    id: "slime",
                    name: "King Slime",
                    level: 5,
                    base_attributes: (str: 8, dex: 3, vit: 12, int: 2, spr: 4),
                    exp_reward: 80,
                ),
                (
                    id: "wolf",
                    name: "Wolf",
                    level: 4,
                    base_attributes: (str: 7, dex: 9, vit: 5, int: 1, spr: 2),
                    exp_reward: 45,
                ),
            ],
        )"#,
    )
    .unwrap();

    let snapshot = ContentFactory::new(dir.path()).load_snapshot().unwrap();

    assert_eq!(snapshot.monster_ids(), vec!["slime", "goblin", "wolf"]);
    assert_eq!(snapshot.monster("slime").unwrap().name, "King Slime");
    assert_eq!(
        snapshot.class("warrior").unwrap().base_attributes,
        AttributeSet::new(10, 5, 8, 3, 4)
    );

    let wolf = Monster::spawn("wolf", &snapshot).unwrap();
    assert_eq!(wolf.stats().level(), 4);
}

#[test]
fn malformed_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(ContentFactory::CLASSES_FILE);
    fs::write(&path, "(classes: [ (id: \"broken\" ) ])").unwrap();

    let err = ContentFactory::new(dir.path()).load_snapshot().unwrap_err();

    assert!(err.to_string().contains(&path.display().to_string()));
}
