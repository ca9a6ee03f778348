//! Stack-shape operators
//!
//! All contracts address the stack relative to the operator's position:
//! counts are taken from the cell immediately below, and every operator
//! removes itself as part of its reduction. `pick` is the one exception,
//! treating its count as an absolute stack index.

use super::{Evaluator, EvalError};
use crate::value::{integer_part, Value};
use bigdecimal::{BigDecimal, ToPrimitive};

impl Evaluator {
    /// Integer count at stack index `idx`
    fn count_at(&self, idx: usize, op: &str) -> Result<i64, EvalError> {
        let n = self.number_at(idx, op)?;
        integer_part(&n)
            .to_i64()
            .ok_or_else(|| EvalError::TypeMismatch {
                op: op.into(),
                expected: "a machine-sized count",
                got: n.to_string(),
            })
    }

    /// Non-negative count at stack index `idx`
    fn unsigned_count_at(&self, idx: usize, op: &str) -> Result<usize, EvalError> {
        let n = self.count_at(idx, op)?;
        usize::try_from(n).map_err(|_| EvalError::TypeMismatch {
            op: op.into(),
            expected: "a non-negative count",
            got: n.to_string(),
        })
    }

    /// `depth` pushes the cursor position: the number of settled cells,
    /// not the total stack length
    pub(crate) fn stack_depth(&mut self, i: usize) -> Result<usize, EvalError> {
        self.stack[i] = Value::Number(BigDecimal::from(i as u64));
        Ok(i + 1)
    }

    /// `drop` removes the single preceding value
    pub(crate) fn stack_drop(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        self.stack.drain(i - 1..=i);
        Ok(i - 1)
    }

    /// `n dropn` removes the n values below the count
    pub(crate) fn stack_dropn(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let n = self.unsigned_count_at(i - 1, op)?;
        self.need(i, n + 1, op)?;
        self.stack.drain(i - 1 - n..=i);
        Ok(i - 1 - n)
    }

    /// `dup` duplicates the single preceding value in place
    pub(crate) fn stack_dup(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        self.stack[i] = self.stack[i - 1].clone();
        Ok(i)
    }

    /// `n dupn` duplicates the n values below the count, in order
    pub(crate) fn stack_dupn(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let n = self.unsigned_count_at(i - 1, op)?;
        self.need(i, n + 1, op)?;
        let copies: Vec<Value> = self.stack[i - 1 - n..i - 1].to_vec();
        self.stack.splice(i - 1..=i, copies);
        Ok(i - 1)
    }

    /// `n pick` copies the value at absolute stack index n
    pub(crate) fn stack_pick(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let index = self.count_at(i - 1, op)?;
        let settled = i - 1;
        if index < 0 || index as usize >= settled {
            return Err(EvalError::IndexOutOfRange {
                op: op.into(),
                index,
                len: settled,
            });
        }
        let value = self.stack[index as usize].clone();
        self.stack.splice(i - 1..=i, [value]);
        Ok(i - 1)
    }

    /// `n roll` rotates the settled segment below the count upward by n;
    /// `n rolld` rotates it downward. The count reduces modulo the segment
    /// length.
    pub(crate) fn stack_roll(&mut self, i: usize, op: &str, down: bool) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let n = self.count_at(i - 1, op)?;
        let segment = i - 1;
        self.stack.drain(i - 1..=i);
        if segment > 1 {
            let k = n.rem_euclid(segment as i64) as usize;
            if down {
                self.stack[..segment].rotate_left(k);
            } else {
                self.stack[..segment].rotate_right(k);
            }
        }
        Ok(segment)
    }

    /// `n repeat value` replaces the count, the operator, and the value
    /// that follows it with n copies of that value
    pub(crate) fn stack_repeat(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        if i + 1 >= self.stack.len() {
            return Err(EvalError::MissingOperand {
                op: op.into(),
                what: "a value to repeat",
            });
        }
        let n = self.unsigned_count_at(i - 1, op)?;
        let template = self.stack[i + 1].clone();
        self.stack
            .splice(i - 1..=i + 1, std::iter::repeat(template).take(n));
        Ok(i - 1)
    }

    /// `swap` exchanges the two preceding values in place
    pub(crate) fn stack_swap(&mut self, i: usize, op: &str) -> Result<usize, EvalError> {
        self.need(i, 2, op)?;
        self.stack.swap(i - 1, i - 2);
        self.stack.remove(i);
        Ok(i)
    }
}
