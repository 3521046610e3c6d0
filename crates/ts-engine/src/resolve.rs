//! Depth-first resolution of a node tree against a table source.
//!
//! A placeholder's children are fully resolved to a string before its own
//! modifiers are examined, which is what makes nested placeholders like
//! `{hero_{race}_name}` work: the inner result is spliced into the key
//! used for the outer lookup.

use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::rngs::StdRng;
use ts_core::{RollError, Table, TableSource};

use crate::eval::evaluate_display;
use crate::node::Node;

/// Attempts made to find an unused value before giving up on uniqueness.
pub const UNIQUE_ATTEMPTS: usize = 50;

/// Modifier flags stripped from the front of a resolved placeholder body.
///
/// Flags are independent booleans, not an enum: a template may legally
/// combine any subset in any order. When `use_cache` and `unique` are both
/// set, uniqueness wins and the cache is bypassed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// `@`: roll once, reuse for every later hit on the same key.
    pub use_cache: bool,
    /// `^`: uppercase the first character of the picked value.
    pub capitalize: bool,
    /// `!`: avoid values already emitted for this key in this render.
    pub unique: bool,
}

/// Strip recognized modifier prefixes (`@`, `^`, `!`), in any order and
/// repetition, until none remain. The remainder is the table key.
pub fn strip_modifiers(body: &str) -> (Modifiers, &str) {
    let mut modifiers = Modifiers::default();
    let mut rest = body;
    loop {
        match rest.chars().next() {
            Some('@') => modifiers.use_cache = true,
            Some('^') => modifiers.capitalize = true,
            Some('!') => modifiers.unique = true,
            _ => return (modifiers, rest),
        }
        rest = &rest[1..];
    }
}

/// What to do when a unique placeholder has used up every value its table
/// can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExhaustPolicy {
    /// Accept a repeated value after the attempt cap (the documented
    /// default: a render always produces some string).
    #[default]
    AcceptDuplicate,
    /// Forget which values were used for that key and start the pool over.
    ResetPool,
}

/// A non-fatal problem noticed during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A unique placeholder ran out of unused values.
    UniquePoolExhausted {
        /// The table that was exhausted.
        table: String,
    },
    /// A numeric table contained keys the weighted roller had to skip.
    SkippedKeys {
        /// The table with the malformed keys.
        table: String,
        /// The keys that were skipped.
        keys: Vec<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UniquePoolExhausted { table } => write!(
                f,
                "table '{table}': no unused value found in {UNIQUE_ATTEMPTS} attempts, repeating one"
            ),
            Self::SkippedKeys { table, keys } => {
                write!(f, "table '{table}': skipped malformed keys: {}", keys.join(", "))
            }
        }
    }
}

/// Per-render state. Created fresh for every top-level render call and
/// discarded afterward — nothing leaks across renders.
#[derive(Debug)]
pub(crate) struct RenderState {
    cache: HashMap<String, String>,
    used: HashMap<String, HashSet<String>>,
    warned_tables: HashSet<String>,
    exhaust_policy: ExhaustPolicy,
    pub(crate) warnings: Vec<Warning>,
}

impl RenderState {
    pub(crate) fn new(exhaust_policy: ExhaustPolicy) -> Self {
        Self {
            cache: HashMap::new(),
            used: HashMap::new(),
            warned_tables: HashSet::new(),
            exhaust_policy,
            warnings: Vec::new(),
        }
    }
}

/// Resolve a node sequence to its output text, in source order.
pub(crate) fn resolve_nodes<S: TableSource>(
    nodes: &[Node],
    source: &mut S,
    rng: &mut StdRng,
    state: &mut RenderState,
) -> String {
    let mut output = String::new();
    for node in nodes {
        match node {
            Node::Text(text) => output.push_str(text),
            Node::Dice(expr) => output.push_str(&evaluate_display(expr, rng)),
            Node::Placeholder { children, .. } => {
                let inner = resolve_nodes(children, source, rng, state);
                let (modifiers, table_key) = strip_modifiers(&inner);
                output.push_str(&resolve_placeholder(
                    modifiers, table_key, source, rng, state,
                ));
            }
        }
    }
    output
}

fn resolve_placeholder<S: TableSource>(
    modifiers: Modifiers,
    table_key: &str,
    source: &mut S,
    rng: &mut StdRng,
    state: &mut RenderState,
) -> String {
    // Uniqueness takes precedence: a placeholder that is both cached and
    // unique bypasses the cache entirely.
    let cacheable = modifiers.use_cache && !modifiers.unique;

    if cacheable {
        if let Some(cached) = state.cache.get(table_key) {
            return finish(cached.clone(), modifiers);
        }
    }

    let table = source.fetch(table_key);
    warn_skipped_keys(&table, table_key, state);

    let picked = if modifiers.unique {
        pick_unique(&table, table_key, rng, state)
    } else {
        pick_value(&table, table_key, rng)
    };

    if cacheable {
        state.cache.insert(table_key.to_string(), picked.clone());
    }
    finish(picked, modifiers)
}

/// Apply capitalization last, after cache and uniqueness bookkeeping: the
/// cache always stores the raw picked value.
fn finish(picked: String, modifiers: Modifiers) -> String {
    if modifiers.capitalize {
        capitalize_first(&picked)
    } else {
        picked
    }
}

/// One roll, mapped to displayed text: the value under the rolled key, or
/// an in-band diagnostic when the table cannot produce one.
fn pick_value(table: &Table, table_key: &str, rng: &mut StdRng) -> String {
    match table.roll(rng) {
        Ok(key) => table
            .get(key)
            .map(str::to_string)
            .unwrap_or_else(|| format!("[Missing entry for {table_key}]")),
        Err(RollError::NoMatch(roll)) => format!("[No result for roll {roll}]"),
        Err(RollError::Empty) => format!("[Missing entry for {table_key}]"),
    }
}

/// Roll repeatedly, seeking a value not yet emitted for this key. After
/// [`UNIQUE_ATTEMPTS`] collisions the exhaust policy decides: accept the
/// repeat (default) or reset the pool. Either way the render goes on.
fn pick_unique(table: &Table, table_key: &str, rng: &mut StdRng, state: &mut RenderState) -> String {
    let mut picked = pick_value(table, table_key, rng);
    let mut attempts = 1;
    while attempts < UNIQUE_ATTEMPTS && is_used(state, table_key, &picked) {
        picked = pick_value(table, table_key, rng);
        attempts += 1;
    }

    if is_used(state, table_key, &picked) {
        state.warnings.push(Warning::UniquePoolExhausted {
            table: table_key.to_string(),
        });
        if state.exhaust_policy == ExhaustPolicy::ResetPool {
            state.used.remove(table_key);
        }
    }

    state
        .used
        .entry(table_key.to_string())
        .or_default()
        .insert(picked.clone());
    picked
}

fn is_used(state: &RenderState, table_key: &str, value: &str) -> bool {
    state
        .used
        .get(table_key)
        .is_some_and(|set| set.contains(value))
}

fn warn_skipped_keys(table: &Table, table_key: &str, state: &mut RenderState) {
    if state.warned_tables.contains(table_key) {
        return;
    }
    let skipped = table.skipped_keys();
    if !skipped.is_empty() {
        state.warnings.push(Warning::SkippedKeys {
            table: table_key.to_string(),
            keys: skipped.iter().map(|k| (*k).to_string()).collect(),
        });
    }
    state.warned_tables.insert(table_key.to_string());
}

/// Uppercase only the first character. ASCII-oriented on purpose; this is
/// not word capitalization.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
