//! Integration tests for the stack-shape operators

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval, eval_lines, session_after};

#[test]
fn test_dup() {
    assert_eq!(eval("5 dup"), "[ 5, 5 ]");
}

#[test]
fn test_dup_then_multiply() {
    assert_eq!(eval("5 dup *"), "[ 25 ]");
}

#[test]
fn test_swap() {
    assert_eq!(eval("1 2 swap"), "[ 2, 1 ]");
}

#[test]
fn test_drop() {
    assert_eq!(eval("1 2 drop"), "[ 1 ]");
}

#[test]
fn test_dropn() {
    assert_eq!(eval("1 2 3 2 dropn"), "[ 1 ]");
    assert_eq!(eval("1 2 3 0 dropn"), "[ 1, 2, 3 ]");
}

#[test]
fn test_dupn_keeps_order() {
    assert_eq!(eval("1 2 3 2 dupn"), "[ 1, 2, 3, 2, 3 ]");
}

#[test]
fn test_pick_is_an_absolute_index() {
    assert_eq!(eval("1 2 3 0 pick"), "[ 1, 2, 3, 1 ]");
    assert_eq!(eval("1 2 3 2 pick"), "[ 1, 2, 3, 3 ]");
}

#[test]
fn test_pick_out_of_range_is_recoverable() {
    // count and operator stay put, reduction continues
    assert_eq!(eval("1 2 9 pick"), "[ 1, 2, 9, pick ]");
}

#[test]
fn test_roll() {
    assert_eq!(eval("1 2 3 4 1 roll"), "[ 4, 1, 2, 3 ]");
    assert_eq!(eval("1 2 3 4 2 roll"), "[ 3, 4, 1, 2 ]");
}

#[test]
fn test_rolld() {
    assert_eq!(eval("1 2 3 4 1 rolld"), "[ 2, 3, 4, 1 ]");
}

#[test]
fn test_roll_count_wraps() {
    // the count reduces modulo the segment length
    assert_eq!(eval("1 2 3 4 5 roll"), "[ 4, 1, 2, 3 ]");
}

#[test]
fn test_repeat_splices_copies() {
    // '2 repeat +' becomes two additions
    assert_eq!(eval("2 3 4 2 repeat +"), "[ 9 ]");
}

#[test]
fn test_repeat_zero_times() {
    assert_eq!(eval("5 0 repeat dup"), "[ 5 ]");
}

#[test]
fn test_depth_reports_settled_prefix() {
    assert_eq!(eval("1 2 3 depth"), "[ 1, 2, 3, 3 ]");
    assert_eq!(eval("depth"), "[ 0 ]");
}

#[test]
fn test_depth_counts_reductions() {
    // after the addition only one settled cell remains below the cursor
    assert_eq!(eval("3 4 + depth"), "[ 7, 1 ]");
}

#[test]
fn test_cla_resets_everything() {
    let session = session_after(&["1024 x=", "1 2 3", "cla"]);
    assert!(session.stack().is_empty());
    assert!(session.vars().is_empty());
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_clr_keeps_variables() {
    assert_eq!(eval_lines(&["5 x=", "1 2", "clr", "x"]), "[ 5 ]");
}

#[test]
fn test_clv_keeps_stack() {
    assert_eq!(eval_lines(&["5 x=", "1 2", "clv"]), "[ 1, 2 ]");
}

#[test]
fn test_underflow_is_recoverable() {
    assert_eq!(eval("dup"), "[ dup ]");
    assert_eq!(eval_lines(&["dup", "clr", "5 dup"]), "[ 5, 5 ]");
}
