//! The render entry point: one call, one scoped cache and used-value set.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ts_core::TableSource;

use crate::parse::parse;
use crate::resolve::{ExhaustPolicy, RenderState, Warning, resolve_nodes};

/// The outcome of one render: the resolved text plus any warnings picked
/// up along the way. Displays as the text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The fully resolved output string.
    pub text: String,
    /// Non-fatal problems noticed during resolution.
    pub warnings: Vec<Warning>,
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The resolution engine. Owns a table source and an RNG; each call to
/// [`Renderer::render`] runs with fresh cache and used-value state, so
/// nothing carries over between renders except what the source itself
/// chooses to memoize.
#[derive(Debug)]
pub struct Renderer<S: TableSource> {
    source: S,
    rng: StdRng,
    exhaust_policy: ExhaustPolicy,
}

impl<S: TableSource> Renderer<S> {
    /// Create a renderer seeded from the operating system.
    pub fn new(source: S) -> Self {
        Self {
            source,
            rng: StdRng::from_os_rng(),
            exhaust_policy: ExhaustPolicy::default(),
        }
    }

    /// Create a renderer with a fixed seed, for reproducible output.
    pub fn with_seed(source: S, seed: u64) -> Self {
        Self {
            source,
            rng: StdRng::seed_from_u64(seed),
            exhaust_policy: ExhaustPolicy::default(),
        }
    }

    /// Set the policy applied when a unique placeholder exhausts its table.
    pub fn with_exhaust_policy(mut self, policy: ExhaustPolicy) -> Self {
        self.exhaust_policy = policy;
        self
    }

    /// Render a template to its final text.
    ///
    /// Never fails: malformed syntax degrades to literal text, missing
    /// tables roll against a fallback, and bad expressions surface as
    /// bracketed diagnostics inside the output.
    pub fn render(&mut self, template: &str) -> Rendered {
        let nodes = parse(template);
        let mut state = RenderState::new(self.exhaust_policy);
        let text = resolve_nodes(&nodes, &mut self.source, &mut self.rng, &mut state);
        Rendered {
            text,
            warnings: state.warnings,
        }
    }

    /// Access the table source, e.g. to register tables or reach a cache.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the renderer and reclaim its source.
    pub fn into_source(self) -> S {
        self.source
    }
}
