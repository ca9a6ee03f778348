//! Stack evaluator for rpcalc - the reduction engine
//!
//! The evaluator owns the persistent operand stack, the cursor separating
//! settled cells from pending ones, the variable table, the keyword
//! registry, and the session flags. One input line is classified, appended
//! to the stack, and reduced left to right from the cursor until the cursor
//! reaches the stack end; everything then persists into the next line.
//!
//! Every operator checks its operand count and types before touching the
//! stack and returns a structured [`EvalError`] when the check fails. A
//! failing cell is reported and skipped, so one bad word never aborts the
//! rest of the line, although it can leave the stack partially reduced.

use crate::display::{self, Mode};
use crate::lexer;
use crate::registry::{Kind, Op, Registry};
use crate::value::{integer_part, Value};
use bigdecimal::{BigDecimal, One, ToPrimitive, Zero};
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

mod bytes;
mod math;
mod stack;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("{op}: needs {needed} operand(s), only {have} on the stack")]
    InsufficientOperands {
        op: String,
        needed: usize,
        have: usize,
    },
    #[error("{op}: expected {expected}, got {got}")]
    TypeMismatch {
        op: String,
        expected: &'static str,
        got: String,
    },
    #[error("{op}: missing {what}")]
    MissingOperand { op: String, what: &'static str },
    #[error("{op}: division by zero")]
    DivisionByZero { op: String },
    #[error("{op}: index {index} out of range for {len} stack value(s)")]
    IndexOutOfRange { op: String, index: i64, len: usize },
    #[error("{op}: result does not fit a finite 64-bit float")]
    NotFinite { op: String },
    #[error("unknown word: {0}")]
    UnknownWord(String),
}

/// One calculator session: stack, cursor, variables, registry, and flags.
///
/// State lives for the whole session and is torn down with the value; there
/// is no persistence and no sharing between sessions.
pub struct Evaluator {
    stack: Vec<Value>,
    cursor: usize,
    vars: HashMap<String, Value>,
    registry: Registry,
    mode: Mode,
    vertical: bool,
    debug: bool,
    exit: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            stack: Vec::new(),
            cursor: 0,
            vars: HashMap::new(),
            registry: Registry::new(),
            mode: Mode::Dec,
            vertical: false,
            debug: false,
            exit: false,
        }
    }

    /// The current stack contents
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// The cursor position: cells before it are settled
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The variable table
    pub fn vars(&self) -> &HashMap<String, Value> {
        &self.vars
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_debug(&mut self, on: bool) {
        self.debug = on;
    }

    /// Whether `exit` has been evaluated; the read loop checks this after
    /// each line
    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    /// Classify one line, append it to the stack, reduce, and render the
    /// resulting stack in the active display mode.
    pub fn eval_line(&mut self, line: &str) -> String {
        let (cells, targets) = lexer::classify_line(line, &self.registry);
        for name in targets {
            // pre-register assignment targets without clobbering a binding
            if !self.vars.contains_key(&name) {
                let placeholder = Value::Assignment(name.clone());
                self.vars.insert(name, placeholder);
            }
        }
        if self.debug {
            for cell in &cells {
                eprintln!("classified: {}", cell);
            }
        }
        self.stack.extend(cells);
        self.reduce();
        self.render()
    }

    /// Render the current stack without evaluating anything
    pub fn render(&self) -> String {
        display::render_stack(&self.stack, self.mode, self.vertical)
    }

    /// Reduce pending cells until the cursor reaches the stack end.
    ///
    /// A cell whose reduction fails is reported to stderr and left in
    /// place; the cursor moves past it and reduction continues.
    pub fn reduce(&mut self) {
        while self.cursor < self.stack.len() {
            let i = self.cursor;
            if self.debug {
                eprintln!("evaluating [{}] {}", i, self.stack[i]);
            }
            match self.step(i) {
                Ok(next) => self.cursor = next,
                Err(err) => {
                    eprintln!("{}", err);
                    self.cursor = i + 1;
                }
            }
            if self.debug {
                eprintln!(
                    "stack: {} vars: {}",
                    display::render_stack(&self.stack, self.mode, false),
                    display::render_vars(&self.vars, self.mode, false)
                );
            }
        }
    }

    /// Reduce the single cell at `i`, returning the next cursor position
    fn step(&mut self, i: usize) -> Result<usize, EvalError> {
        let cell = self.stack[i].clone();
        match cell {
            Value::Number(_) | Value::Bytes(_) => Ok(i + 1),
            Value::Variable(name) => self.resolve_variable(i, &name),
            Value::Assignment(name) => self.assign(i, &name),
            Value::Code {
                body: Some(body), ..
            } => {
                // a resolved macro instance: splice its body in place and
                // re-examine from the splice point
                self.stack.splice(i..=i, body);
                Ok(i)
            }
            Value::Code { name, body: None } => self.dispatch(i, &name),
        }
    }

    /// Replace a variable reference with its bound value. Unbound
    /// references stay on the stack with a diagnostic.
    fn resolve_variable(&mut self, i: usize, name: &str) -> Result<usize, EvalError> {
        match self.vars.get(name) {
            Some(Value::Variable(n)) if n == name => {
                eprintln!("variable bound to itself: {}", name);
                Ok(i + 1)
            }
            Some(Value::Assignment(_)) | None => {
                eprintln!("undefined variable: {}", name);
                Ok(i + 1)
            }
            Some(bound) => {
                self.stack[i] = bound.clone();
                Ok(i)
            }
        }
    }

    /// Bind the preceding value to `name`, consuming both cells
    fn assign(&mut self, i: usize, name: &str) -> Result<usize, EvalError> {
        if i == 0 {
            return Err(EvalError::InsufficientOperands {
                op: format!("{}=", name),
                needed: 1,
                have: 0,
            });
        }
        let bound = self.stack[i - 1].clone();
        self.vars.insert(name.to_string(), bound);
        self.stack.drain(i - 1..=i);
        Ok(i - 1)
    }

    /// Dispatch a body-less `Code` cell through the registry
    fn dispatch(&mut self, i: usize, name: &str) -> Result<usize, EvalError> {
        match self.registry.kind(name) {
            Some(Kind::Builtin(op)) => self.builtin(i, name, op),
            Some(Kind::Macro) | Some(Kind::Assign) | None => self.expand_word(i, name),
        }
    }

    /// Expand a macro or user word from the variable table. A captured body
    /// splices in place; any other bound value replaces the cell.
    fn expand_word(&mut self, i: usize, name: &str) -> Result<usize, EvalError> {
        match self.vars.get(name) {
            Some(Value::Code {
                body: Some(body), ..
            }) => {
                let body = body.clone();
                self.stack.splice(i..=i, body);
                Ok(i)
            }
            Some(Value::Assignment(_)) | None => Err(EvalError::UnknownWord(name.to_string())),
            Some(bound) => {
                self.stack[i] = bound.clone();
                Ok(i)
            }
        }
    }

    fn builtin(&mut self, i: usize, name: &str, op: Op) -> Result<usize, EvalError> {
        match op {
            Op::Add | Op::Sub | Op::Mul | Op::Div => self.arith(i, name, op),
            Op::Mod | Op::BitAnd | Op::BitOr | Op::BitXor | Op::Shl | Op::Shr => {
                self.bitwise(i, name, op)
            }
            Op::Not | Op::BitNot | Op::Incr | Op::Decr => self.unary(i, name, op),
            Op::Lt | Op::Le | Op::Gt | Op::Ge | Op::Eq | Op::Ne => self.compare(i, name, op),
            Op::BoolAnd | Op::BoolOr | Op::BoolXor => self.boolean(i, name, op),
            Op::Acos
            | Op::Asin
            | Op::Atan
            | Op::Cos
            | Op::Cosh
            | Op::Sin
            | Op::Sinh
            | Op::Tanh
            | Op::Sqrt
            | Op::Ln
            | Op::Log => self.transcendental(i, name, op),
            Op::Pow => self.power(i, name),
            Op::Fact => self.factorial(i, name),
            Op::Ceil | Op::Floor | Op::Round | Op::Ip | Op::Fp | Op::Sign | Op::Abs => {
                self.numeric_unary(i, name, op)
            }
            Op::Max | Op::Min => self.extremum(i, name, op),
            Op::E | Op::Pi | Op::Rand => self.constant(i, name, op),
            Op::Hex => self.set_mode(i, Mode::Hex),
            Op::Dec => self.set_mode(i, Mode::Dec),
            Op::Bin => self.set_mode(i, Mode::Bin),
            Op::Oct => self.set_mode(i, Mode::Oct),
            Op::Hnl => self.to_network(i, name, true),
            Op::Hns => self.to_network(i, name, false),
            Op::Nhl => self.to_host(i, name, true),
            Op::Nhs => self.to_host(i, name, false),
            Op::Depth => self.stack_depth(i),
            Op::Drop => self.stack_drop(i, name),
            Op::DropN => self.stack_dropn(i, name),
            Op::Dup => self.stack_dup(i, name),
            Op::DupN => self.stack_dupn(i, name),
            Op::Pick => self.stack_pick(i, name),
            Op::Roll => self.stack_roll(i, name, false),
            Op::RollD => self.stack_roll(i, name, true),
            Op::Repeat => self.stack_repeat(i, name),
            Op::Swap => self.stack_swap(i, name),
            Op::StackToggle => {
                self.vertical = !self.vertical;
                self.stack.remove(i);
                Ok(i)
            }
            Op::Cla => {
                self.stack.clear();
                self.vars.clear();
                Ok(0)
            }
            Op::Clr => {
                self.stack.clear();
                Ok(0)
            }
            Op::Clv => {
                self.vars.clear();
                self.stack.remove(i);
                Ok(i)
            }
            Op::Macro => self.define_macro(i),
            Op::Debug => {
                self.debug = !self.debug;
                eprintln!(
                    "debug tracing {}",
                    if self.debug { "enabled" } else { "disabled" }
                );
                self.stack.remove(i);
                Ok(i)
            }
            Op::Help => {
                eprint!("{}", self.registry.usage());
                self.stack.remove(i);
                Ok(i)
            }
            Op::Exit => {
                self.exit = true;
                self.stack.remove(i);
                // skip whatever is still pending on this line
                Ok(self.stack.len())
            }
        }
    }

    /// Exact binary arithmetic on the two preceding numbers
    fn arith(&mut self, i: usize, op: &str, which: Op) -> Result<usize, EvalError> {
        self.need(i, 2, op)?;
        let a = self.number_at(i - 2, op)?;
        let b = self.number_at(i - 1, op)?;
        let result = match which {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => {
                if b.is_zero() {
                    return Err(EvalError::DivisionByZero { op: op.into() });
                }
                a / b
            }
            _ => unreachable!("arith dispatch"),
        };
        self.reduce_binary(i, Value::Number(result))
    }

    /// Integer-narrowed binary operations: modulus, bitwise logic, shifts
    fn bitwise(&mut self, i: usize, op: &str, which: Op) -> Result<usize, EvalError> {
        self.need(i, 2, op)?;
        let a = integer_part(&self.number_at(i - 2, op)?);
        let b_dec = self.number_at(i - 1, op)?;
        let result: BigInt = match which {
            Op::Mod => {
                let b = integer_part(&b_dec);
                if b.is_zero() {
                    return Err(EvalError::DivisionByZero { op: op.into() });
                }
                a % b
            }
            Op::BitAnd => a & integer_part(&b_dec),
            Op::BitOr => a | integer_part(&b_dec),
            Op::BitXor => a ^ integer_part(&b_dec),
            Op::Shl | Op::Shr => {
                let count = integer_part(&b_dec).to_usize().ok_or_else(|| {
                    EvalError::TypeMismatch {
                        op: op.into(),
                        expected: "a non-negative shift count",
                        got: b_dec.to_string(),
                    }
                })?;
                if which == Op::Shl {
                    a << count
                } else {
                    a >> count
                }
            }
            _ => unreachable!("bitwise dispatch"),
        };
        self.reduce_binary(i, Value::Number(BigDecimal::from(result)))
    }

    /// Unary operators: boolean not, bitwise not, increment, decrement
    fn unary(&mut self, i: usize, op: &str, which: Op) -> Result<usize, EvalError> {
        self.need(i, 1, op)?;
        let a = self.number_at(i - 1, op)?;
        let result = match which {
            Op::Not => {
                if a.is_zero() {
                    BigDecimal::one()
                } else {
                    BigDecimal::zero()
                }
            }
            Op::BitNot => BigDecimal::from(!integer_part(&a)),
            Op::Incr => a + BigDecimal::one(),
            Op::Decr => a - BigDecimal::one(),
            _ => unreachable!("unary dispatch"),
        };
        self.reduce_unary(i, Value::Number(result))
    }

    /// Three-way comparison of the two preceding numbers; the result is the
    /// One/Zero boolean encoding
    fn compare(&mut self, i: usize, op: &str, which: Op) -> Result<usize, EvalError> {
        self.need(i, 2, op)?;
        let a = self.number_at(i - 2, op)?;
        let b = self.number_at(i - 1, op)?;
        let ord = a.cmp(&b);
        let truth = match which {
            Op::Lt => ord == Ordering::Less,
            Op::Le => ord != Ordering::Greater,
            Op::Gt => ord == Ordering::Greater,
            Op::Ge => ord != Ordering::Less,
            Op::Eq => ord == Ordering::Equal,
            Op::Ne => ord != Ordering::Equal,
            _ => unreachable!("compare dispatch"),
        };
        self.reduce_binary(i, Value::Number(encode_bool(truth)))
    }

    /// Boolean connectives over unsigned-integer truthiness.
    ///
    /// Operands coerce through an unsigned narrowing, so negative values
    /// count as false.
    fn boolean(&mut self, i: usize, op: &str, which: Op) -> Result<usize, EvalError> {
        self.need(i, 2, op)?;
        let a = self.truthy(i - 2, op)?;
        let b = self.truthy(i - 1, op)?;
        let truth = match which {
            Op::BoolAnd => a && b,
            Op::BoolOr => a || b,
            Op::BoolXor => a != b,
            _ => unreachable!("boolean dispatch"),
        };
        self.reduce_binary(i, Value::Number(encode_bool(truth)))
    }

    /// Capture every remaining pending cell as the body of a new macro.
    ///
    /// `macro name cells...` registers `name` as a keyword, binds the body
    /// in the variable table, and removes the captured region from the
    /// stack.
    fn define_macro(&mut self, i: usize) -> Result<usize, EvalError> {
        let name = match self.stack.get(i + 1) {
            Some(Value::Variable(n)) => n.clone(),
            Some(Value::Code { name: n, .. }) => n.clone(),
            Some(other) => {
                return Err(EvalError::TypeMismatch {
                    op: "macro".into(),
                    expected: "a name",
                    got: other.kind_name().to_string(),
                })
            }
            None => {
                return Err(EvalError::MissingOperand {
                    op: "macro".into(),
                    what: "a name",
                })
            }
        };
        let body: Vec<Value> = self.stack[i + 2..].to_vec();
        if self.debug {
            eprintln!("defining macro {} with {} cell(s)", name, body.len());
        }
        self.registry.define_macro(&name);
        self.vars.insert(
            name.clone(),
            Value::Code {
                name,
                body: Some(body),
            },
        );
        self.stack.truncate(i);
        Ok(i)
    }

    fn set_mode(&mut self, i: usize, mode: Mode) -> Result<usize, EvalError> {
        self.mode = mode;
        self.stack.remove(i);
        Ok(i)
    }

    // ========================================
    // Shared operand helpers
    // ========================================

    /// Require `needed` settled cells below position `i`
    pub(crate) fn need(&self, i: usize, needed: usize, op: &str) -> Result<(), EvalError> {
        if i < needed {
            return Err(EvalError::InsufficientOperands {
                op: op.into(),
                needed,
                have: i,
            });
        }
        Ok(())
    }

    /// The number at stack index `idx`
    pub(crate) fn number_at(&self, idx: usize, op: &str) -> Result<BigDecimal, EvalError> {
        match &self.stack[idx] {
            Value::Number(n) => Ok(n.clone()),
            other => Err(EvalError::TypeMismatch {
                op: op.into(),
                expected: "a number",
                got: other.kind_name().to_string(),
            }),
        }
    }

    /// Unsigned-integer truthiness of the number at `idx`
    fn truthy(&self, idx: usize, op: &str) -> Result<bool, EvalError> {
        let n = self.number_at(idx, op)?;
        Ok(integer_part(&n).to_u64().map_or(false, |v| v != 0))
    }

    /// Replace the operator cell at `i` with `result` and remove its two
    /// operands
    pub(crate) fn reduce_binary(&mut self, i: usize, result: Value) -> Result<usize, EvalError> {
        self.stack[i] = result;
        self.stack.drain(i - 2..i);
        Ok(i - 2)
    }

    /// Replace the operator cell at `i` with `result` and remove its one
    /// operand
    pub(crate) fn reduce_unary(&mut self, i: usize, result: Value) -> Result<usize, EvalError> {
        self.stack[i] = result;
        self.stack.remove(i - 1);
        Ok(i - 1)
    }
}

/// The boolean encoding used by comparison and boolean operators
fn encode_bool(truth: bool) -> BigDecimal {
    if truth {
        BigDecimal::one()
    } else {
        BigDecimal::zero()
    }
}
