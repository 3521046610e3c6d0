use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use ts_core::library::load_table;

use super::{table_names, tables_dir};

pub fn run(dir: &Path) -> Result<(), String> {
    let names = table_names(dir)?;

    if names.is_empty() {
        println!("  No tables found.");
        return Ok(());
    }

    let mut listing = Table::new();
    listing.set_content_arrangement(ContentArrangement::Dynamic);
    listing.set_header(vec!["Name", "Entries", "Kind"]);

    let tables = tables_dir(dir);
    for name in &names {
        match load_table(&tables.join(format!("{name}.json"))) {
            Ok(table) => {
                let kind = if table.is_weighted() {
                    "weighted"
                } else {
                    "uniform"
                };
                listing.add_row(vec![name.as_str(), &table.len().to_string(), kind]);
            }
            Err(_) => {
                listing.add_row(vec![name.as_str(), "—", "unreadable"]);
            }
        }
    }

    println!("{listing}");
    println!();
    println!("  {} tables", names.len());

    Ok(())
}
