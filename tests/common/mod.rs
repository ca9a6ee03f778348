//! Common test utilities for rpcalc integration tests

pub use rpcalc::{Evaluator, Value};

/// Evaluate one line in a fresh session and return the rendered stack
pub fn eval(input: &str) -> String {
    rpcalc::eval(input)
}

/// Evaluate lines in order in one session and return the last rendering
#[allow(dead_code)]
pub fn eval_lines(lines: &[&str]) -> String {
    let mut session = Evaluator::new();
    let mut rendered = String::new();
    for line in lines {
        rendered = session.eval_line(line);
    }
    rendered
}

/// Evaluate lines and hand back the session for state inspection
#[allow(dead_code)]
pub fn session_after(lines: &[&str]) -> Evaluator {
    let mut session = Evaluator::new();
    for line in lines {
        session.eval_line(line);
    }
    session
}
