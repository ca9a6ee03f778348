//! Value model for rpcalc - every stack cell is one of these
//!
//! Classification turns raw tokens into `Value` cells, and the evaluator
//! reduces runs of cells into fewer cells. A cell is either data (a number,
//! a byte sequence), a deferred reference (a variable), an instruction to
//! bind (an assignment), or code (an operator invocation, optionally
//! carrying a captured macro body).

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use std::fmt;

/// A value that can sit on the operand stack
#[derive(Debug, Clone)]
pub enum Value {
    /// An exact arbitrary-precision decimal number
    Number(BigDecimal),
    /// An unresolved reference, looked up in the variable table at
    /// evaluation time
    Variable(String),
    /// An opaque byte sequence, produced by the byte-order operators
    Bytes(Vec<u8>),
    /// Bind the value immediately preceding this cell to the named variable
    Assignment(String),
    /// An operator invocation. With a captured body this is a macro
    /// definition or instance; without one it is a pending dispatch on the
    /// keyword registry.
    Code {
        name: String,
        body: Option<Vec<Value>>,
    },
}

impl Value {
    /// Short label for the variant, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Variable(_) => "variable",
            Value::Bytes(_) => "bytes",
            Value::Assignment(_) => "assignment",
            Value::Code { .. } => "code",
        }
    }

    /// Convenience constructor for integer-valued cells
    pub fn number<T: Into<BigDecimal>>(n: T) -> Self {
        Value::Number(n.into())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Variable(a), Value::Variable(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Assignment(a), Value::Assignment(b)) => a == b,
            (
                Value::Code { name: a, body: ab },
                Value::Code { name: b, body: bb },
            ) => a == b && ab == bb,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}:Number", n),
            Value::Variable(v) => write!(f, "{}:Variable", v),
            Value::Bytes(b) => write!(f, "{}:Bytes", hex::encode(b)),
            Value::Assignment(a) => write!(f, "{}:Assignment", a),
            Value::Code { name, body: None } => write!(f, "{}:Code", name),
            Value::Code {
                name,
                body: Some(body),
            } => {
                write!(f, "{}:Code[", name)?;
                for (i, v) in body.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Narrow a decimal to its integer part, truncating toward zero.
///
/// This is the narrowing used by every integer-only operator (modulus,
/// bitwise logic, shifts, factorial) and by the non-decimal display modes.
pub(crate) fn integer_part(n: &BigDecimal) -> BigInt {
    n.with_scale_round(0, RoundingMode::Down)
        .into_bigint_and_exponent()
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::number(1).kind_name(), "number");
        assert_eq!(Value::Variable("x".into()).kind_name(), "variable");
        assert_eq!(Value::Bytes(vec![1]).kind_name(), "bytes");
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Value::number(3).to_string(), "3:Number");
        assert_eq!(Value::Variable("x".into()).to_string(), "x:Variable");
        let m = Value::Code {
            name: "sq".into(),
            body: Some(vec![
                Value::Code {
                    name: "dup".into(),
                    body: None,
                },
                Value::Code {
                    name: "*".into(),
                    body: None,
                },
            ]),
        };
        assert_eq!(m.to_string(), "sq:Code[dup:Code *:Code]");
    }

    #[test]
    fn test_integer_part_truncates_toward_zero() {
        let n = BigDecimal::from_str("2.9").unwrap();
        assert_eq!(integer_part(&n), BigInt::from(2));
        let n = BigDecimal::from_str("-2.9").unwrap();
        assert_eq!(integer_part(&n), BigInt::from(-2));
    }
}
