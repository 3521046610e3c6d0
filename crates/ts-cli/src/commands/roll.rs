use std::path::Path;

use super::{make_renderer, print_warnings};

pub fn run(dir: &Path, name: &str, count: usize, seed: Option<u64>) -> Result<(), String> {
    let mut renderer = make_renderer(dir, seed);
    // A bare placeholder is exactly one roll on the named table.
    let template = format!("{{{name}}}");
    for _ in 0..count {
        let rendered = renderer.render(&template);
        print_warnings(&rendered.warnings);
        println!("{rendered}");
    }
    Ok(())
}
