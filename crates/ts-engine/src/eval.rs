//! Dice and range expression evaluation.
//!
//! Evaluates the inner text of `[...]` nodes: either an inclusive random
//! range (`10-20`) or a left-to-right chain of dice terms and integers
//! joined by `+`/`-` (`2d6+3`). Deliberately not a general arithmetic
//! parser — no precedence, no parentheses.

use rand::Rng;
use rand::rngs::StdRng;

/// Errors from evaluating a bracketed expression. These never abort a
/// render; the resolver embeds them in the output as `[<message>]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Not a dice expression and not a valid `min-max` range.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A dice expression that yields no tokens or has unusable sides.
    #[error("invalid roll: {0}")]
    InvalidRoll(String),

    /// An integer term that could not be parsed.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

enum Token {
    /// `NdS` with N possibly omitted.
    Dice { count: String, sides: String },
    /// A bare integer term.
    Number(String),
    /// A pending `+` or `-`.
    Op(char),
}

/// Evaluate an expression to an integer.
pub fn evaluate(expr: &str, rng: &mut StdRng) -> Result<i64, EvalError> {
    let cleaned: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    if !cleaned.contains('d') {
        return eval_range(&cleaned, rng);
    }

    let tokens = tokenize(&cleaned);
    if tokens.is_empty() {
        return Err(EvalError::InvalidRoll(cleaned));
    }

    let mut total: i64 = 0;
    let mut pending = '+';
    for token in tokens {
        match token {
            Token::Op(op) => pending = op,
            Token::Dice { count, sides } => {
                let count: u32 = if count.is_empty() {
                    1
                } else {
                    count
                        .parse()
                        .map_err(|_| EvalError::InvalidRoll(cleaned.clone()))?
                };
                let sides: u32 = sides
                    .parse()
                    .map_err(|_| EvalError::InvalidRoll(cleaned.clone()))?;
                if sides == 0 {
                    return Err(EvalError::InvalidRoll(cleaned.clone()));
                }
                let mut sum: i64 = 0;
                for _ in 0..count {
                    sum += i64::from(rng.random_range(1..=sides));
                }
                total = apply(total, pending, sum);
            }
            Token::Number(text) => {
                let value: i64 = text
                    .parse()
                    .map_err(|_| EvalError::InvalidNumber(text.clone()))?;
                total = apply(total, pending, value);
            }
        }
    }
    Ok(total)
}

/// Evaluate and render: integers as themselves, failures as the bracketed
/// in-band diagnostic embedded directly in the output.
pub fn evaluate_display(expr: &str, rng: &mut StdRng) -> String {
    match evaluate(expr, rng) {
        Ok(total) => total.to_string(),
        Err(err) => format!("[{err}]"),
    }
}

fn apply(total: i64, op: char, value: i64) -> i64 {
    if op == '-' {
        total.wrapping_sub(value)
    } else {
        total.wrapping_add(value)
    }
}

/// A `min-max` inclusive range draw.
fn eval_range(cleaned: &str, rng: &mut StdRng) -> Result<i64, EvalError> {
    let parts: Vec<&str> = cleaned.split('-').collect();
    if let [min, max] = parts.as_slice() {
        if let (Ok(min), Ok(max)) = (min.parse::<i64>(), max.parse::<i64>()) {
            if min <= max {
                return Ok(rng.random_range(min..=max));
            }
        }
    }
    Err(EvalError::InvalidRange(cleaned.to_string()))
}

/// Extract `NdS` terms, integers, and `+`/`-` operators, skipping anything
/// unrecognized between them.
fn tokenize(expr: &str) -> Vec<Token> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '+' || c == '-' {
            tokens.push(Token::Op(c));
            i += 1;
            continue;
        }
        if c.is_ascii_digit() || c == 'd' {
            // Try a dice term: digits* 'd' digits+.
            let mut j = i;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            if j < chars.len() && chars[j] == 'd' {
                let mut k = j + 1;
                while k < chars.len() && chars[k].is_ascii_digit() {
                    k += 1;
                }
                if k > j + 1 {
                    tokens.push(Token::Dice {
                        count: chars[i..j].iter().collect(),
                        sides: chars[j + 1..k].iter().collect(),
                    });
                    i = k;
                    continue;
                }
            }
            if j > i {
                tokens.push(Token::Number(chars[i..j].iter().collect()));
                i = j;
                continue;
            }
        }
        i += 1;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn dice_with_modifier_stays_in_bounds() {
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let total = evaluate("2d6+3", &mut rng).unwrap();
            assert!((5..=15).contains(&total), "out of bounds: {total}");
            seen.insert(total);
        }
        // A degenerate RNG would hit one value 1000 times.
        assert!(seen.len() > 1);
    }

    #[test]
    fn range_is_inclusive() {
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let total = evaluate("10-20", &mut rng).unwrap();
            assert!((10..=20).contains(&total));
            seen.insert(total);
        }
        assert!(seen.contains(&10) && seen.contains(&20));
    }

    #[test]
    fn inverted_range_is_invalid() {
        assert_eq!(
            evaluate("20-10", &mut rng()),
            Err(EvalError::InvalidRange("20-10".to_string()))
        );
    }

    #[test]
    fn count_defaults_to_one() {
        let mut rng = rng();
        for _ in 0..100 {
            let total = evaluate("d20", &mut rng).unwrap();
            assert!((1..=20).contains(&total));
        }
    }

    #[test]
    fn subtraction_folds_left_to_right() {
        let mut rng = rng();
        for _ in 0..100 {
            let total = evaluate("1d4-10", &mut rng).unwrap();
            assert!((-9..=-6).contains(&total));
        }
    }

    #[test]
    fn whitespace_is_stripped() {
        let mut rng = rng();
        let total = evaluate(" 2d6 + 3 ", &mut rng).unwrap();
        assert!((5..=15).contains(&total));
    }

    #[test]
    fn garbage_without_dice_marker_is_invalid_range() {
        assert_eq!(
            evaluate("abc", &mut rng()),
            Err(EvalError::InvalidRange("abc".to_string()))
        );
    }

    #[test]
    fn dice_marker_with_no_tokens_is_invalid_roll() {
        assert_eq!(
            evaluate("xdy", &mut rng()),
            Err(EvalError::InvalidRoll("xdy".to_string()))
        );
    }

    #[test]
    fn zero_sided_die_is_invalid() {
        assert_eq!(
            evaluate("2d0", &mut rng()),
            Err(EvalError::InvalidRoll("2d0".to_string()))
        );
    }

    #[test]
    fn display_helper_brackets_diagnostics() {
        let mut rng = rng();
        assert_eq!(
            evaluate_display("20-10", &mut rng),
            "[invalid range: 20-10]"
        );
        let ok = evaluate_display("1d1", &mut rng);
        assert_eq!(ok, "1");
    }

    #[test]
    fn unrecognized_characters_are_skipped() {
        // Mirrors regex-extraction semantics: "2d6 healing +3" keeps the
        // dice term, the operator, and the number.
        let mut rng = rng();
        for _ in 0..100 {
            let total = evaluate("2d6zz+3", &mut rng).unwrap();
            assert!((5..=15).contains(&total));
        }
    }
}
