//! Class catalog loader.

use std::path::Path;

use game_core::ClassTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassTemplate>,
}

/// Loader for class templates from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load class templates from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ClassTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid class catalog {}: {}", path.display(), e))
    }

    /// Parse and validate a class catalog from RON text.
    ///
    /// Ids must be unique and non-blank; base attributes may not exceed
    /// `MAX_BASE_ATTRIBUTE`.
    pub fn parse(content: &str) -> LoadResult<Vec<ClassTemplate>> {
        let catalog: ClassCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        ensure_unique_ids("class", catalog.classes.iter().map(|c| c.id.as_str()))?;
        if let Some(class) = catalog.classes.iter().find(|c| c.id.trim().is_empty()) {
            anyhow::bail!("Class '{}' has an empty id", class.name);
        }
        for class in &catalog.classes {
            class
                .validate()
                .map_err(|e| anyhow::anyhow!("Class '{}' is invalid: {}", class.id, e))?;
        }

        Ok(catalog.classes)
    }
}
