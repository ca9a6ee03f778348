//! Transcendental functions, numeric utilities, and constants
//!
//! Transcendental operators narrow their operands to `f64`, compute with
//! the std math routines, and re-box the approximation as an exact decimal.
//! This narrowing is the one place exactness is lost; `fact` stays exact.

use super::{Evaluator, EvalError};
use crate::registry::Op;
use crate::value::{integer_part, Value};
use bigdecimal::{BigDecimal, One, RoundingMode, ToPrimitive};
use num_bigint::{BigInt, Sign};
use std::f64::consts;
use std::str::FromStr;

/// Narrow a decimal to its 64-bit float approximation.
///
/// The explicit call site is the documented precision boundary: exact
/// arithmetic is not preserved through the transcendental functions.
pub(crate) fn approx(n: &BigDecimal, op: &str) -> Result<f64, EvalError> {
    n.to_f64()
        .filter(|f| f.is_finite())
        .ok_or_else(|| EvalError::NotFinite { op: op.into() })
}

/// Re-box a float approximation as an exact decimal.
///
/// Goes through the float's shortest round-trip decimal form, so `pi`
/// renders as `3.141592653589793` rather than the full binary expansion.
pub(crate) fn from_approx(f: f64, op: &str) -> Result<BigDecimal, EvalError> {
    if !f.is_finite() {
        return Err(EvalError::NotFinite { op: op.into() });
    }
    BigDecimal::from_str(&f.to_string()).map_err(|_| EvalError::NotFinite { op: op.into() })
}

impl Evaluator {
    /// One-operand float functions: trigonometry, roots, logarithms
    pub(crate) fn transcendental(
        &mut self,
        i: usize,
        op: &str,
        which: Op,
    ) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let x = approx(&self.number_at(i - 1, op)?, op)?;
        let y = match which {
            Op::Acos => x.acos(),
            Op::Asin => x.asin(),
            Op::Atan => x.atan(),
            Op::Cos => x.cos(),
            Op::Cosh => x.cosh(),
            Op::Sin => x.sin(),
            Op::Sinh => x.sinh(),
            Op::Tanh => x.tanh(),
            Op::Sqrt => x.sqrt(),
            Op::Ln => x.ln(),
            Op::Log => x.log10(),
            _ => unreachable!("transcendental dispatch"),
        };
        self.reduce_unary(i, Value::Number(from_approx(y, op)?))
    }

    /// `a b pow` raises a to the b'th power; `**` and `exp` are aliases
    pub(crate) fn power(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 2, op)?;
        let a = approx(&self.number_at(i - 2, op)?, op)?;
        let b = approx(&self.number_at(i - 1, op)?, op)?;
        self.reduce_binary(i, Value::Number(from_approx(a.powf(b), op)?))
    }

    /// Exact factorial: the product over `[1, n]`; anything below 2 is 1
    pub(crate) fn factorial(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let n = integer_part(&self.number_at(i - 1, op)?)
            .to_i64()
            .ok_or_else(|| EvalError::TypeMismatch {
                op: op.into(),
                expected: "a machine-sized integer",
                got: "an oversized number".to_string(),
            })?;
        let mut product = BigInt::one();
        for k in 2..=n {
            product *= k;
        }
        self.reduce_unary(i, Value::Number(BigDecimal::from(product)))
    }

    /// Rounding, parts, sign, and absolute value
    pub(crate) fn numeric_unary(
        &mut self,
        i: usize,
        op: &str,
        which: Op,
    ) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let a = self.number_at(i - 1, op)?;
        let result = match which {
            Op::Ceil => a.with_scale_round(0, RoundingMode::Ceiling),
            Op::Floor => a.with_scale_round(0, RoundingMode::Floor),
            Op::Round => a.with_scale_round(0, RoundingMode::HalfUp),
            Op::Ip => a.with_scale_round(0, RoundingMode::Down),
            Op::Fp => &a - a.with_scale_round(0, RoundingMode::Down),
            Op::Sign => match a.sign() {
                Sign::Minus => -BigDecimal::one(),
                Sign::NoSign => BigDecimal::from(0),
                Sign::Plus => BigDecimal::one(),
            },
            Op::Abs => a.abs(),
            _ => unreachable!("numeric_unary dispatch"),
        };
        self.reduce_unary(i, Value::Number(result))
    }

    /// `max` and `min` of the two preceding numbers
    pub(crate) fn extremum(&mut self, i: usize, op: &str, which: Op) -> Result<usize, EvalError> {
        self.need(i, 2, op)?;
        let a = self.number_at(i - 2, op)?;
        let b = self.number_at(i - 1, op)?;
        let result = match which {
            Op::Max => {
                if a >= b {
                    a
                } else {
                    b
                }
            }
            Op::Min => {
                if a <= b {
                    a
                } else {
                    b
                }
            }
            _ => unreachable!("extremum dispatch"),
        };
        self.reduce_binary(i, Value::Number(result))
    }

    /// Constants produce a number in place with no operand consumed
    pub(crate) fn constant(&mut self, i: usize, op: &str, which: Op) -> Result<usize, EvalError> {
        let value = match which {
            Op::E => from_approx(consts::E, op)?,
            Op::Pi => from_approx(consts::PI, op)?,
            Op::Rand => from_approx(rand::random::<f64>(), op)?,
            _ => unreachable!("constant dispatch"),
        };
        self.stack[i] = Value::Number(value);
        Ok(i + 1)
    }
}
