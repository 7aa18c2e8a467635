//! In-memory template oracle.

use super::templates::{ClassTemplate, MonsterTemplate, TemplateOracle};

/// Owned catalog of templates implementing [`TemplateOracle`].
///
/// Lookups are linear; catalogs hold a handful of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateSnapshot {
    pub classes: Vec<ClassTemplate>,
    pub monsters: Vec<MonsterTemplate>,
}

impl TemplateSnapshot {
    pub fn new(classes: Vec<ClassTemplate>, monsters: Vec<MonsterTemplate>) -> Self {
        Self { classes, monsters }
    }

    /// Insert or replace a class template by id.
    pub fn upsert_class(&mut self, template: ClassTemplate) {
        match self.classes.iter_mut().find(|c| c.id == template.id) {
            Some(existing) => *existing = template,
            None => self.classes.push(template),
        }
    }

    /// Insert or replace a monster template by id.
    pub fn upsert_monster(&mut self, template: MonsterTemplate) {
        match self.monsters.iter_mut().find(|m| m.id == template.id) {
            Some(existing) => *existing = template,
            None => self.monsters.push(template),
        }
    }
}

impl TemplateOracle for TemplateSnapshot {
    fn class(&self, id: &str) -> Option<&ClassTemplate> {
        self.classes.iter().find(|c| c.id == id)
    }

    fn monster(&self, id: &str) -> Option<&MonsterTemplate> {
        self.monsters.iter().find(|m| m.id == id)
    }

    fn class_ids(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.id.as_str()).collect()
    }

    fn monster_ids(&self) -> Vec<&str> {
        self.monsters.iter().map(|m| m.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AttributeSet;

    #[test]
    fn lookup_and_upsert() {
        let mut snapshot = TemplateSnapshot::default();
        let base = AttributeSet::uniform(5);
        snapshot.upsert_class(ClassTemplate::new("beginner", "Beginner", base));
        snapshot.upsert_monster(MonsterTemplate::new("slime", "Slime", 1, base, 10));
        snapshot.upsert_monster(MonsterTemplate::new("slime", "Big Slime", 2, base, 20));

        assert_eq!(snapshot.class("beginner").unwrap().name, "Beginner");
        assert_eq!(snapshot.monster("slime").unwrap().name, "Big Slime");
        assert_eq!(snapshot.monster_ids(), vec!["slime"]);
        assert!(snapshot.class("warrior").is_none());
    }
}
