use std::fs;
use std::path::Path;

const SAMPLE_TABLES: &[(&str, &str)] = &[
    (
        "color",
        r#"{
  "1": "red",
  "2": "emerald",
  "3": "ash-grey",
  "4": "golden"
}
"#,
    ),
    (
        "animal",
        r#"{
  "1-3": "wolf",
  "4-5": "raven",
  "6": "wyvern"
}
"#,
    ),
    (
        "mood",
        r#"{
  "1-3": "calm",
  "4-5": "wary",
  "6": "furious"
}
"#,
    ),
    (
        "gender",
        r#"{
  "he": "he",
  "she": "she",
  "they": "they"
}
"#,
    ),
    (
        "race",
        r#"{
  "1": "elf",
  "2": "dwarf"
}
"#,
    ),
    (
        "hero_elf_name",
        r#"{
  "1": "thalion",
  "2": "aerendil",
  "3": "lúthwen"
}
"#,
    ),
    (
        "hero_dwarf_name",
        r#"{
  "1": "borin",
  "2": "datha",
  "3": "grimma"
}
"#,
    ),
];

const SAMPLE_TEMPLATES: &str = r#"[
  "The {mood} {color} {animal} strikes [2d6+3] times.",
  "{^hero_{race}_name} sets out wearing {!color} and {!color}.",
  "{^@gender} shouts. Then {@gender} runs for [10-20] paces."
]
"#;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{name}' already exists"));
    }

    let tables = dir.join("tables");
    fs::create_dir_all(&tables).map_err(|e| format!("cannot create directory: {e}"))?;

    for (table_name, content) in SAMPLE_TABLES {
        fs::write(tables.join(format!("{table_name}.json")), content)
            .map_err(|e| format!("cannot write {table_name}.json: {e}"))?;
    }

    let index: Vec<&str> = SAMPLE_TABLES.iter().map(|(name, _)| *name).collect();
    let index_json =
        serde_json::to_string_pretty(&index).map_err(|e| format!("cannot encode index: {e}"))?;
    fs::write(tables.join("index.json"), index_json + "\n")
        .map_err(|e| format!("cannot write index.json: {e}"))?;

    fs::write(dir.join("templates.json"), SAMPLE_TEMPLATES)
        .map_err(|e| format!("cannot write templates.json: {e}"))?;

    println!("Created project '{name}' in {name}/");
    println!("  templates.json — stored template strings");
    println!("  tables/        — one JSON object per table, plus index.json");
    println!();
    println!("Get started:");
    println!("  cd {name}");
    println!("  tablespin generate            # Render the first stored template");
    println!("  tablespin roll animal -n 3    # Roll a table directly");
    println!("  tablespin check               # Validate table keys");

    Ok(())
}
