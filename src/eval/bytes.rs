//! Byte-order conversion operators
//!
//! `hnl`/`hns` serialize a number to its big-endian byte sequence; `nhl`/
//! `nhs` read one back. Nothing touches a network: the conversion happens
//! on a value already in memory. The "long" form is 64 bits wide and the
//! "short" form 32.

use super::{Evaluator, EvalError};
use crate::value::{integer_part, Value};
use bigdecimal::{BigDecimal, ToPrimitive};

impl Evaluator {
    /// `hnl` / `hns`: number to big-endian bytes
    pub(crate) fn to_network(&mut self, i: usize, op: &str, wide: bool) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let n = integer_part(&self.number_at(i - 1, op)?);
        let bytes = if wide {
            let v = n.to_i64().ok_or_else(|| EvalError::TypeMismatch {
                op: op.into(),
                expected: "a 64-bit integer",
                got: n.to_string(),
            })?;
            v.to_be_bytes().to_vec()
        } else {
            let v = n.to_i32().ok_or_else(|| EvalError::TypeMismatch {
                op: op.into(),
                expected: "a 32-bit integer",
                got: n.to_string(),
            })?;
            v.to_be_bytes().to_vec()
        };
        self.reduce_unary(i, Value::Bytes(bytes))
    }

    /// `nhl` / `nhs`: big-endian bytes back to a number. A number passes
    /// through unchanged, since it is already in host representation.
    pub(crate) fn to_host(&mut self, i: usize, op: &str, wide: bool) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        match self.stack[i - 1].clone() {
            Value::Bytes(bytes) => {
                let value: i64 = if wide {
                    let arr: [u8; 8] =
                        bytes
                            .as_slice()
                            .try_into()
                            .map_err(|_| EvalError::TypeMismatch {
                                op: op.into(),
                                expected: "an 8-byte sequence",
                                got: format!("{} byte(s)", bytes.len()),
                            })?;
                    i64::from_be_bytes(arr)
                } else {
                    let arr: [u8; 4] =
                        bytes
                            .as_slice()
                            .try_into()
                            .map_err(|_| EvalError::TypeMismatch {
                                op: op.into(),
                                expected: "a 4-byte sequence",
                                got: format!("{} byte(s)", bytes.len()),
                            })?;
                    i32::from_be_bytes(arr) as i64
                };
                self.reduce_unary(i, Value::Number(BigDecimal::from(value)))
            }
            Value::Number(n) => self.reduce_unary(i, Value::Number(n)),
            other => Err(EvalError::TypeMismatch {
                op: op.into(),
                expected: "a byte sequence",
                got: other.kind_name().to_string(),
            }),
        }
    }
}
