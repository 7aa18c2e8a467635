//! Content factory for building template oracles from data files.

use std::path::{Path, PathBuf};

use game_core::TemplateSnapshot;

use crate::builtin::builtin_snapshot;
use crate::loaders::{ClassLoader, LoadResult, MonsterLoader};

/// Content factory that loads templates from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── classes.ron
/// └── monsters.ron
/// ```
///
/// Both files are optional. Entries found on disk replace built-in entries
/// with the same id and are appended otherwise.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CLASSES_FILE: &'static str = "classes.ron";
    pub const MONSTERS_FILE: &'static str = "monsters.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load class templates from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<Vec<game_core::ClassTemplate>> {
        ClassLoader::load(&self.data_dir.join(Self::CLASSES_FILE))
    }

    /// Load monster templates from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<Vec<game_core::MonsterTemplate>> {
        MonsterLoader::load(&self.data_dir.join(Self::MONSTERS_FILE))
    }

    /// Built-in tables overlaid with whatever files the data directory holds.
    pub fn load_snapshot(&self) -> LoadResult<TemplateSnapshot> {
        let mut snapshot = builtin_snapshot();

        if self.data_dir.join(Self::CLASSES_FILE).exists() {
            let classes = self.load_classes()?;
            tracing::debug!(
                "Loaded {} class templates from {}",
                classes.len(),
                self.data_dir.display()
            );
            for class in classes {
                snapshot.upsert_class(class);
            }
        }

        if self.data_dir.join(Self::MONSTERS_FILE).exists() {
            let monsters = self.load_monsters()?;
            tracing::debug!(
                "Loaded {} monster templates from {}",
                monsters.len(),
                self.data_dir.display()
            );
            for monster in monsters {
                snapshot.upsert_monster(monster);
            }
        }

        Ok(snapshot)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
