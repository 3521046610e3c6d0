use std::path::Path;

use colored::Colorize;
use ts_core::library::{load_table, scan_tables};

use super::tables_dir;

pub fn run(dir: &Path) -> Result<(), String> {
    let tables = tables_dir(dir);
    let names = scan_tables(&tables).map_err(|e| e.to_string())?;

    if names.is_empty() {
        return Err(format!("no tables found under {}", tables.display()));
    }

    let mut problems = 0;
    for name in &names {
        match load_table(&tables.join(format!("{name}.json"))) {
            Ok(table) => {
                if table.is_empty() {
                    println!("{} {name}: table has no entries", "warning:".yellow().bold());
                    problems += 1;
                }
                for issue in table.validate() {
                    println!("{} {name}: {issue}", "error:".red().bold());
                    problems += 1;
                }
            }
            Err(e) => {
                println!("{} {e}", "error:".red().bold());
                problems += 1;
            }
        }
    }

    if problems > 0 {
        Err(format!(
            "{} problem{} in {} table{}",
            problems,
            if problems == 1 { "" } else { "s" },
            names.len(),
            if names.len() == 1 { "" } else { "s" },
        ))
    } else {
        println!(
            "  {} table{} OK",
            names.len(),
            if names.len() == 1 { "" } else { "s" },
        );
        Ok(())
    }
}
