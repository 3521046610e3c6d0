use std::path::Path;

use ts_core::library::read_templates;

use super::{make_renderer, print_warnings, templates_path};

pub fn run(
    dir: &Path,
    template: Option<&str>,
    count: usize,
    seed: Option<u64>,
) -> Result<(), String> {
    let template = match template {
        Some(t) => t.to_string(),
        None => {
            let stored = read_templates(&templates_path(dir)).map_err(|e| e.to_string())?;
            stored
                .first()
                .cloned()
                .ok_or_else(|| "no stored templates; pass a template string".to_string())?
        }
    };

    let mut renderer = make_renderer(dir, seed);
    let mut outputs = Vec::with_capacity(count);
    for _ in 0..count {
        let rendered = renderer.render(&template);
        print_warnings(&rendered.warnings);
        outputs.push(rendered.text);
    }

    println!("{}", outputs.join("\n\n"));
    Ok(())
}
