//! Content loaders for reading game data from files.
//!
//! Loaders convert RON files into game-core template types. Every template
//! type derives serde behind game-core's `serde` feature, so the files use
//! the core field names directly.

pub mod classes;
pub mod factory;
pub mod monsters;

pub use classes::{ClassCatalog, ClassLoader};
pub use factory::ContentFactory;
pub use monsters::{MonsterCatalog, MonsterLoader};

use std::collections::HashSet;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first id that appears twice.
pub(crate) fn ensure_unique_ids<'a>(
    kind: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(())
}
