//! Recursive placeholder-resolution engine for Tablespin templates.
//!
//! A template mixes literal text with brace-delimited table lookups and
//! bracket-delimited dice expressions:
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `{name}` | roll table `name` |
//! | `{@name}` | roll once, reuse for later `{@name}` in the same render |
//! | `{^name}` | roll and uppercase the first character |
//! | `{!name}` | roll a value not yet used for `name` in this render |
//! | `{outer_{inner}}` | resolve `inner` first, splice into the outer key |
//! | `[2d6+3]` | dice expression, evaluated to an integer |
//! | `[10-20]` | inclusive random integer range |
//!
//! Unmatched `{` or `[` are literal characters; a render never fails.
//!
//! ```
//! use ts_core::{MemorySource, Table};
//! use ts_engine::Renderer;
//!
//! let color: Table = [("1", "red")].into_iter().collect();
//! let source = MemorySource::new().with_table("color", color);
//! let mut renderer = Renderer::with_seed(source, 42);
//! assert_eq!(renderer.render("a {color} door").to_string(), "a red door");
//! ```

/// Dice and range expression evaluation.
pub mod eval;
/// Parsed template nodes.
pub mod node;
/// Template parser: raw string to node tree.
pub mod parse;
/// The render entry point and its result type.
pub mod render;
/// Depth-first resolution of node trees, modifiers, and render state.
pub mod resolve;

/// Re-export the expression evaluator.
pub use eval::{EvalError, evaluate, evaluate_display};
/// Re-export the node type.
pub use node::Node;
/// Re-export the parser.
pub use parse::parse;
/// Re-export the renderer and its result.
pub use render::{Rendered, Renderer};
/// Re-export modifier handling and warnings.
pub use resolve::{ExhaustPolicy, Modifiers, UNIQUE_ATTEMPTS, Warning, strip_modifiers};
