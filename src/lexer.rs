//! Token classification for rpcalc
//!
//! A line is split on whitespace and each token is classified into one
//! [`Value`] cell. Classification never fails: a token that looks numeric
//! but does not parse is dropped, and anything unrecognized becomes an
//! unresolved variable reference.
//!
//! Classification order per token:
//!   1. base-prefixed literal (`0x` `0d` `0o` `0b`)
//!   2. base-10 numeric literal
//!   3. assignment target (`name=`)
//!   4. registered keyword
//!   5. variable reference

use crate::registry::Registry;
use crate::value::Value;
use bigdecimal::BigDecimal;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, hex_digit1, oct_digit1, one_of, satisfy},
    combinator::{all_consuming, map_opt, recognize, rest},
    multi::many1,
    sequence::{pair, preceded, terminated},
    IResult,
};
use num_bigint::BigInt;
use std::str::FromStr;

/// Hexadecimal literal: `0x1f`
fn hex_literal(input: &str) -> IResult<&str, BigDecimal> {
    map_opt(preceded(tag("0x"), hex_digit1), |digits: &str| {
        BigInt::parse_bytes(digits.as_bytes(), 16).map(BigDecimal::from)
    })(input)
}

/// Explicit decimal literal: `0d25`; the remainder uses the full decimal
/// grammar, so fractions and exponents are allowed
fn dec_literal(input: &str) -> IResult<&str, BigDecimal> {
    map_opt(preceded(tag("0d"), rest), |digits: &str| {
        if digits.is_empty() {
            None
        } else {
            BigDecimal::from_str(digits).ok()
        }
    })(input)
}

/// Octal literal: `0o17`
fn oct_literal(input: &str) -> IResult<&str, BigDecimal> {
    map_opt(preceded(tag("0o"), oct_digit1), |digits: &str| {
        BigInt::parse_bytes(digits.as_bytes(), 8).map(BigDecimal::from)
    })(input)
}

/// Binary literal: `0b101`
fn bin_literal(input: &str) -> IResult<&str, BigDecimal> {
    map_opt(
        preceded(tag("0b"), recognize(many1(one_of("01")))),
        |digits: &str| BigInt::parse_bytes(digits.as_bytes(), 2).map(BigDecimal::from),
    )(input)
}

/// Any base-prefixed literal; the whole token must be consumed
fn based_literal(input: &str) -> IResult<&str, BigDecimal> {
    all_consuming(alt((hex_literal, dec_literal, oct_literal, bin_literal)))(input)
}

/// An identifier: letter or underscore, then letters, digits, underscores
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

/// An assignment target: an identifier followed by `=`.
///
/// The identifier requirement keeps `==`, `<=`, `>=`, and `!=` out of this
/// rule.
fn assignment_target(input: &str) -> IResult<&str, &str> {
    all_consuming(terminated(identifier, char('=')))(input)
}

/// Whether a token is plausibly a numeric literal. Tokens that pass this
/// check but fail to parse are dropped rather than kept as variables.
fn looks_numeric(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('+') | Some('-') | Some('.') => {
            matches!(chars.next(), Some(c) if c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Classify one token, or `None` when it should be dropped
fn classify_token(token: &str, registry: &Registry) -> Option<Value> {
    if let Ok((_, n)) = based_literal(token) {
        return Some(Value::Number(n));
    }
    if let Ok(n) = BigDecimal::from_str(token) {
        return Some(Value::Number(n));
    }
    if looks_numeric(token) {
        return None;
    }
    if let Ok((_, name)) = assignment_target(token) {
        return Some(Value::Assignment(name.to_string()));
    }
    if registry.is_keyword(token) {
        return Some(Value::Code {
            name: token.to_string(),
            body: None,
        });
    }
    Some(Value::Variable(token.to_string()))
}

/// Classify one input line into stack cells.
///
/// Returns the cells in order plus the names of any assignment targets seen
/// on the line, so the session can pre-register them in the variable table.
pub fn classify_line(line: &str, registry: &Registry) -> (Vec<Value>, Vec<String>) {
    let mut cells = Vec::new();
    let mut targets = Vec::new();
    for token in line.split_whitespace() {
        if let Some(cell) = classify_token(token, registry) {
            if let Value::Assignment(name) = &cell {
                targets.push(name.clone());
            }
            cells.push(cell);
        }
    }
    (cells, targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(token: &str) -> Option<Value> {
        classify_token(token, &Registry::new())
    }

    fn number(token: &str) -> BigDecimal {
        match classify(token) {
            Some(Value::Number(n)) => n,
            other => panic!("{token} classified as {other:?}"),
        }
    }

    #[test]
    fn test_base_prefixes() {
        assert_eq!(number("0x10"), BigDecimal::from(16));
        assert_eq!(number("0xff"), BigDecimal::from(255));
        assert_eq!(number("0b101"), BigDecimal::from(5));
        assert_eq!(number("0o17"), BigDecimal::from(15));
        assert_eq!(number("0d25"), BigDecimal::from(25));
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(number("42"), BigDecimal::from(42));
        assert_eq!(number("-5"), BigDecimal::from(-5));
        assert_eq!(number("2.5"), BigDecimal::from_str("2.5").unwrap());
        assert_eq!(number("2e3"), BigDecimal::from(2000));
    }

    #[test]
    fn test_malformed_numerics_are_dropped() {
        assert_eq!(classify("3abc"), None);
        assert_eq!(classify("0x"), None);
        assert_eq!(classify("0b12"), None);
    }

    #[test]
    fn test_assignment_targets() {
        assert_eq!(classify("x="), Some(Value::Assignment("x".into())));
        assert_eq!(
            classify("total_2="),
            Some(Value::Assignment("total_2".into()))
        );
        // comparison operators are keywords, not assignments
        assert!(matches!(classify("=="), Some(Value::Code { .. })));
        assert!(matches!(classify("<="), Some(Value::Code { .. })));
        assert!(matches!(classify("!="), Some(Value::Code { .. })));
    }

    #[test]
    fn test_keywords_and_variables() {
        assert!(matches!(classify("+"), Some(Value::Code { .. })));
        assert!(matches!(classify("dup"), Some(Value::Code { .. })));
        assert_eq!(classify("kib"), Some(Value::Variable("kib".into())));
    }

    #[test]
    fn test_classify_line_collects_targets() {
        let (cells, targets) = classify_line("1024 x=", &Registry::new());
        assert_eq!(cells.len(), 2);
        assert_eq!(targets, vec!["x".to_string()]);
    }

    #[test]
    fn test_blank_line() {
        let (cells, targets) = classify_line("   ", &Registry::new());
        assert!(cells.is_empty());
        assert!(targets.is_empty());
    }
}
