//! Loading tables, the table index, and stored templates from disk.
//!
//! On-disk layout mirrors the web app this engine grew out of: a project
//! directory holds `templates.json` (a list of template strings) and a
//! `tables/` subdirectory with one `<name>.json` object per table plus an
//! optional `index.json` listing the table names.

use std::path::Path;

use crate::error::{TsError, TsResult};
use crate::table::Table;

/// Load a single table from a JSON object file.
pub fn load_table(path: &Path) -> TsResult<Table> {
    let text = std::fs::read_to_string(path).map_err(|source| TsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the table index (`index.json`) from a tables directory.
pub fn read_index(dir: &Path) -> TsResult<Vec<String>> {
    read_string_list(&dir.join("index.json"))
}

/// Read a stored template list (`templates.json`).
pub fn read_templates(path: &Path) -> TsResult<Vec<String>> {
    read_string_list(path)
}

/// List table names by scanning a directory for `*.json` files, excluding
/// the index itself. Names are file stems, sorted.
pub fn scan_tables(dir: &Path) -> TsResult<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|source| TsError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|stem| stem != "index")
        .collect();
    names.sort();
    Ok(names)
}

fn read_string_list(path: &Path) -> TsResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| TsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_table_reads_json_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weather.json");
        fs::write(&path, r#"{"1-3": "rain", "4-6": "sun"}"#).unwrap();
        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("4-6"), Some("sun"));
    }

    #[test]
    fn load_table_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_table(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TsError::Read { .. }));
    }

    #[test]
    fn load_table_bad_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, TsError::Json { .. }));
    }

    #[test]
    fn read_index_and_templates() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.json"),
            r#"["color", "animal", "weather"]"#,
        )
        .unwrap();
        let names = read_index(dir.path()).unwrap();
        assert_eq!(names, vec!["color", "animal", "weather"]);

        let templates_path = dir.path().join("templates.json");
        fs::write(&templates_path, r#"["The {color} {animal}."]"#).unwrap();
        let templates = read_templates(&templates_path).unwrap();
        assert_eq!(templates, vec!["The {color} {animal}."]);
    }

    #[test]
    fn scan_tables_lists_stems_without_index() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("color.json"), "{}").unwrap();
        fs::write(dir.path().join("animal.json"), "{}").unwrap();
        fs::write(dir.path().join("index.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let names = scan_tables(dir.path()).unwrap();
        assert_eq!(names, vec!["animal", "color"]);
    }
}
