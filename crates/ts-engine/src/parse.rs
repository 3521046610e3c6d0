//! Template parser: raw string to node tree.
//!
//! Total over all inputs — malformed syntax degrades to literal text, so
//! parsing never fails. An unmatched `{` or `[` becomes a one-character
//! text node and scanning resumes immediately after it.

use crate::node::Node;

/// Parse a template into an ordered sequence of nodes.
pub fn parse(input: &str) -> Vec<Node> {
    let chars: Vec<char> = input.chars().collect();
    parse_chars(&chars)
}

fn parse_chars(chars: &[char]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '{' => {
                // Scan for the matching brace, counting nesting depth.
                let mut depth = 1;
                let mut j = i + 1;
                while j < chars.len() && depth > 0 {
                    match chars[j] {
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        _ => {}
                    }
                    j += 1;
                }
                if depth == 0 {
                    let inner = &chars[i + 1..j - 1];
                    nodes.push(Node::Placeholder {
                        content: inner.iter().collect(),
                        children: parse_chars(inner),
                    });
                    i = j;
                } else {
                    nodes.push(Node::Text("{".to_string()));
                    i += 1;
                }
            }
            '[' => {
                // Brackets do not nest: the next ']' closes.
                match chars[i + 1..].iter().position(|&c| c == ']') {
                    Some(offset) => {
                        let j = i + 1 + offset;
                        nodes.push(Node::Dice(chars[i + 1..j].iter().collect()));
                        i = j + 1;
                    }
                    None => {
                        nodes.push(Node::Text("[".to_string()));
                        i += 1;
                    }
                }
            }
            _ => {
                let start = i;
                while i < chars.len() && chars[i] != '{' && chars[i] != '[' {
                    i += 1;
                }
                nodes.push(Node::Text(chars[start..i].iter().collect()));
            }
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Reassemble the raw text a node tree was parsed from.
    fn flatten(nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Placeholder { content, .. } => {
                    out.push('{');
                    out.push_str(content);
                    out.push('}');
                }
                Node::Dice(expr) => {
                    out.push('[');
                    out.push_str(expr);
                    out.push(']');
                }
            }
        }
        out
    }

    #[test]
    fn plain_text_is_one_node() {
        assert_eq!(
            parse("just some words"),
            vec![Node::Text("just some words".to_string())]
        );
    }

    #[test]
    fn single_placeholder() {
        assert_eq!(
            parse("{color}"),
            vec![Node::Placeholder {
                content: "color".to_string(),
                children: vec![Node::Text("color".to_string())],
            }]
        );
    }

    #[test]
    fn nested_placeholder() {
        let nodes = parse("{hero_{race}_name}");
        assert_eq!(nodes.len(), 1);
        let Node::Placeholder { content, children } = &nodes[0] else {
            panic!("expected placeholder, got {nodes:?}");
        };
        assert_eq!(content, "hero_{race}_name");
        assert_eq!(
            children,
            &vec![
                Node::Text("hero_".to_string()),
                Node::Placeholder {
                    content: "race".to_string(),
                    children: vec![Node::Text("race".to_string())],
                },
                Node::Text("_name".to_string()),
            ]
        );
    }

    #[test]
    fn empty_placeholder() {
        assert_eq!(
            parse("{}"),
            vec![Node::Placeholder {
                content: String::new(),
                children: vec![],
            }]
        );
    }

    #[test]
    fn unterminated_brace_degrades_to_literal() {
        assert_eq!(
            parse("{a{b}c"),
            vec![
                Node::Text("{".to_string()),
                Node::Text("a".to_string()),
                Node::Placeholder {
                    content: "b".to_string(),
                    children: vec![Node::Text("b".to_string())],
                },
                Node::Text("c".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_bracket_degrades_to_literal() {
        assert_eq!(
            parse("[2d6"),
            vec![Node::Text("[".to_string()), Node::Text("2d6".to_string())]
        );
    }

    #[test]
    fn dice_expression() {
        assert_eq!(
            parse("roll [2d6+3] now"),
            vec![
                Node::Text("roll ".to_string()),
                Node::Dice("2d6+3".to_string()),
                Node::Text(" now".to_string()),
            ]
        );
    }

    #[test]
    fn stray_closers_are_plain_text() {
        assert_eq!(parse("a}b]c"), vec![Node::Text("a}b]c".to_string())]);
    }

    #[test]
    fn mixed_template() {
        let nodes = parse("{^adjective} {noun} [1d4]");
        assert_eq!(nodes.len(), 5);
        assert!(matches!(&nodes[0], Node::Placeholder { content, .. } if content == "^adjective"));
        assert!(matches!(&nodes[4], Node::Dice(e) if e == "1d4"));
    }

    proptest! {
        #[test]
        fn parse_is_total_and_round_trips(input in ".*") {
            // Every input parses, and reassembling the spans reproduces it
            // exactly, including degraded delimiters.
            let nodes = parse(&input);
            prop_assert_eq!(flatten(&nodes), input);
        }

        #[test]
        fn delimiter_free_input_is_single_text_node(
            input in "[^{}\\[\\]]+"
        ) {
            let nodes = parse(&input);
            prop_assert_eq!(nodes, vec![Node::Text(input.clone())]);
        }
    }
}
