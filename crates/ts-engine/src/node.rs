//! Parsed template nodes.

/// One node of a parsed template, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted verbatim.
    Text(String),

    /// A brace-delimited placeholder naming a table to roll against.
    Placeholder {
        /// Raw inner text between the outer braces. Resolution works from
        /// `children`; this is kept for diagnostics only.
        content: String,
        /// Parse of that same inner text.
        children: Vec<Node>,
    },

    /// A bracket-delimited dice or range expression, unevaluated.
    Dice(String),
}
