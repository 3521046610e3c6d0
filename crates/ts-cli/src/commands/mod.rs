pub mod check;
pub mod generate;
pub mod init;
pub mod roll;
pub mod tables;
pub mod templates;

use std::path::{Path, PathBuf};

use colored::Colorize;
use ts_core::DirectorySource;
use ts_engine::{Renderer, Warning};

/// The tables subdirectory of a project.
fn tables_dir(dir: &Path) -> PathBuf {
    dir.join("tables")
}

/// The stored template list of a project.
fn templates_path(dir: &Path) -> PathBuf {
    dir.join("templates.json")
}

/// Build a renderer over the project's tables, seeded if requested.
fn make_renderer(dir: &Path, seed: Option<u64>) -> Renderer<DirectorySource> {
    let source = DirectorySource::new(tables_dir(dir));
    match seed {
        Some(seed) => Renderer::with_seed(source, seed),
        None => Renderer::new(source),
    }
}

/// Print render warnings to stderr.
fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
}

/// List table names: the index if present, a directory scan otherwise.
fn table_names(dir: &Path) -> Result<Vec<String>, String> {
    let tables = tables_dir(dir);
    match ts_core::library::read_index(&tables) {
        Ok(names) => Ok(names),
        Err(_) => ts_core::library::scan_tables(&tables).map_err(|e| e.to_string()),
    }
}
