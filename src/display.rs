//! Display formatting for the operand stack and variable table
//!
//! The stack renders as a bracketed list after every input line:
//! comma-separated when horizontal, newline-separated when vertical.
//! Numbers render in the active numeral base; the non-decimal modes
//! truncate to the integer part and use the base prefix.

use crate::value::{integer_part, Value};
use bigdecimal::BigDecimal;
use std::collections::HashMap;

/// The numeral base used to render numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dec,
    Hex,
    Bin,
    Oct,
}

/// Render the whole stack. An empty stack renders as an empty string.
pub fn render_stack(stack: &[Value], mode: Mode, vertical: bool) -> String {
    if stack.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = stack.iter().map(|v| render_value(v, mode)).collect();
    let sep = if vertical { "\n" } else { ", " };
    format!("[ {} ]", parts.join(sep))
}

/// Render the variable table with sorted names
pub fn render_vars(vars: &HashMap<String, Value>, mode: Mode, vertical: bool) -> String {
    if vars.is_empty() {
        return String::new();
    }
    let mut names: Vec<&String> = vars.keys().collect();
    names.sort_unstable();
    let parts: Vec<String> = names
        .iter()
        .map(|name| format!("{}: {}", name, render_value(&vars[*name], mode)))
        .collect();
    let sep = if vertical { "\n" } else { ", " };
    format!("[ {} ]", parts.join(sep))
}

/// Render a single cell
pub fn render_value(value: &Value, mode: Mode) -> String {
    match value {
        Value::Number(n) => render_number(n, mode),
        Value::Variable(name) => name.clone(),
        Value::Assignment(name) => name.clone(),
        Value::Code { name, .. } => name.clone(),
        Value::Bytes(bytes) => render_bytes(bytes, mode),
    }
}

fn render_number(n: &BigDecimal, mode: Mode) -> String {
    match mode {
        Mode::Dec => {
            if n.is_integer() {
                n.with_scale(0).to_string()
            } else {
                n.normalized().to_string()
            }
        }
        Mode::Hex => format!("{:#x}", integer_part(n)),
        Mode::Bin => format!("{:#b}", integer_part(n)),
        Mode::Oct => format!("{:#o}", integer_part(n)),
    }
}

fn render_bytes(bytes: &[u8], mode: Mode) -> String {
    match mode {
        Mode::Dec => {
            let parts: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
            format!("[{}]", parts.join(" "))
        }
        Mode::Hex => format!("0x{}", hex::encode(bytes)),
        Mode::Bin => {
            let digits: String = bytes.iter().map(|b| format!("{:08b}", b)).collect();
            format!("0b{}", digits)
        }
        Mode::Oct => {
            let digits: String = bytes.iter().map(|b| format!("{:03o}", b)).collect();
            format!("0o{}", digits)
        }
    }
}
