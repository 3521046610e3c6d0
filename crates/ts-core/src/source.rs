//! Table sources: where the resolution engine gets its tables from.
//!
//! The engine consumes exactly one external operation, [`TableSource::fetch`].
//! Lookup is infallible by policy: a source that cannot find a table
//! substitutes the one-entry fallback from [`Table::missing`], so rendering
//! never needs an error path for absent tables.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::library::load_table;
use crate::table::Table;

/// Supplies tables by name to the resolution engine.
pub trait TableSource {
    /// Fetch the table registered under `name`, falling back to
    /// [`Table::missing`] when it cannot be found.
    fn fetch(&mut self, name: &str) -> Table;
}

/// An in-memory source, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<String, Table>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table under a name.
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    /// Register a table under a name, builder-style.
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.insert(name, table);
        self
    }
}

impl TableSource for MemorySource {
    fn fetch(&mut self, name: &str) -> Table {
        self.tables
            .get(name)
            .cloned()
            .unwrap_or_else(|| Table::missing(name))
    }
}

/// Reads `<dir>/<name>.json` files, memoizing each table after first load.
///
/// The memo map is the process-level table cache. It lives here, owned by
/// the caller, never inside the engine: a render carries no state across
/// calls, and dropping the source drops the cache.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    cache: HashMap<String, Table>,
}

impl DirectorySource {
    /// Create a source reading from the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }
}

impl TableSource for DirectorySource {
    fn fetch(&mut self, name: &str) -> Table {
        if let Some(table) = self.cache.get(name) {
            return table.clone();
        }
        // Table names never escape the directory.
        let table = if name.contains(['/', '\\']) || name.contains("..") {
            Table::missing(name)
        } else {
            load_table(&self.dir.join(format!("{name}.json")))
                .unwrap_or_else(|_| Table::missing(name))
        };
        self.cache.insert(name.to_string(), table.clone());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn memory_source_returns_registered_table() {
        let mut source = MemorySource::new()
            .with_table("color", [("1", "red")].into_iter().collect::<Table>());
        assert_eq!(source.fetch("color").get("1"), Some("red"));
    }

    #[test]
    fn memory_source_falls_back_for_unknown_table() {
        let mut source = MemorySource::new();
        let table = source.fetch("ghost");
        assert_eq!(table.get("1"), Some("Missing table: ghost"));
    }

    #[test]
    fn directory_source_loads_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("color.json"), r#"{"1": "red", "2": "blue"}"#).unwrap();
        let mut source = DirectorySource::new(dir.path());
        let table = source.fetch("color");
        assert_eq!(table.get("2"), Some("blue"));
    }

    #[test]
    fn directory_source_falls_back_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut source = DirectorySource::new(dir.path());
        assert_eq!(
            source.fetch("nothing").get("1"),
            Some("Missing table: nothing")
        );
    }

    #[test]
    fn directory_source_falls_back_for_broken_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.json"), "not json").unwrap();
        let mut source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch("bad").get("1"), Some("Missing table: bad"));
    }

    #[test]
    fn directory_source_memoizes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("color.json");
        fs::write(&path, r#"{"1": "red"}"#).unwrap();
        let mut source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch("color").get("1"), Some("red"));
        // A later edit is not observed: the first load is cached.
        fs::write(&path, r#"{"1": "green"}"#).unwrap();
        assert_eq!(source.fetch("color").get("1"), Some("red"));
    }

    #[test]
    fn directory_source_rejects_path_escapes() {
        let dir = TempDir::new().unwrap();
        let mut source = DirectorySource::new(dir.path());
        let table = source.fetch("../secrets");
        assert_eq!(table.get("1"), Some("Missing table: ../secrets"));
    }
}
