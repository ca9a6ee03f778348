//! rpcalc - a reverse polish notation calculator
//!
//! # Overview
//!
//! rpcalc is a line-oriented RPN calculator over a persistent operand
//! stack. Operands precede the operator that consumes them: numbers push
//! themselves, operators reduce the values below them.
//!
//! # Core Concepts
//!
//! ## Stack-Based Evaluation
//!
//! ```text
//! # Numbers push themselves to the stack
//! 3 4              # Stack: [ 3, 4 ]
//!
//! # Operators consume the values below them
//! 3 4 +            # Stack: [ 7 ]
//!
//! # The stack persists between lines
//! 3 4              # Stack: [ 3, 4 ]
//! +                # Stack: [ 7 ]
//! ```
//!
//! ## Variables and Macros
//!
//! ```text
//! # name= binds the preceding value
//! 1024 x=          # variable x is 1024
//! x x *            # Stack: [ 1048576 ]
//!
//! # macro captures the rest of the line as a named word
//! macro sq dup *
//! 5 sq             # Stack: [ 25 ]
//! ```
//!
//! ## Display Modes
//!
//! ```text
//! 255 hex          # Stack: [ 0xff ]
//! dec              # Stack: [ 255 ]
//! ```
//!
//! # Example
//!
//! ```rust
//! use rpcalc::Evaluator;
//!
//! let mut calc = Evaluator::new();
//! assert_eq!(calc.eval_line("3 4 +"), "[ 7 ]");
//! assert_eq!(calc.eval_line("5 *"), "[ 35 ]");
//! ```
//!
//! Arithmetic is exact arbitrary-precision decimal; the transcendental
//! functions are the documented exception, computing through a 64-bit
//! float approximation.

pub mod display;
pub mod eval;
pub mod lexer;
pub mod registry;
pub mod value;

// Re-export commonly used items
pub use display::Mode;
pub use eval::{EvalError, Evaluator};
pub use registry::{Kind, Op, Registry};
pub use value::Value;

/// Convenience function to evaluate one line in a fresh session and return
/// the rendered stack
pub fn eval(input: &str) -> String {
    let mut session = Evaluator::new();
    session.eval_line(input)
}
