use std::path::Path;

use ts_core::library::read_templates;

use super::templates_path;

pub fn run(dir: &Path) -> Result<(), String> {
    let stored = read_templates(&templates_path(dir)).map_err(|e| e.to_string())?;

    if stored.is_empty() {
        println!("  No stored templates.");
        return Ok(());
    }

    for (i, template) in stored.iter().enumerate() {
        println!("  [{}] {template}", i + 1);
    }
    println!();
    println!("  {} templates", stored.len());

    Ok(())
}
