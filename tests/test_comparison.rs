//! Integration tests for comparison and boolean operators

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval, eval_lines, session_after};

#[test]
fn test_less_than() {
    assert_eq!(eval("3 4 <"), "[ 1 ]");
    assert_eq!(eval("4 3 <"), "[ 0 ]");
    assert_eq!(eval("3 3 <"), "[ 0 ]");
}

#[test]
fn test_less_or_equal() {
    assert_eq!(eval("3 4 <="), "[ 1 ]");
    assert_eq!(eval("3 3 <="), "[ 1 ]");
    assert_eq!(eval("4 3 <="), "[ 0 ]");
}

#[test]
fn test_greater_than() {
    assert_eq!(eval("4 3 >"), "[ 1 ]");
    assert_eq!(eval("3 4 >"), "[ 0 ]");
}

#[test]
fn test_greater_or_equal() {
    assert_eq!(eval("4 4 >="), "[ 1 ]");
    assert_eq!(eval("3 4 >="), "[ 0 ]");
}

#[test]
fn test_equality() {
    assert_eq!(eval("3 3 =="), "[ 1 ]");
    assert_eq!(eval("3 4 =="), "[ 0 ]");
    assert_eq!(eval("3 4 !="), "[ 1 ]");
    assert_eq!(eval("3 3 !="), "[ 0 ]");
}

#[test]
fn test_comparison_ignores_scale() {
    assert_eq!(eval("2.50 2.5 =="), "[ 1 ]");
}

#[test]
fn test_boolean_and() {
    assert_eq!(eval("1 0 &&"), "[ 0 ]");
    assert_eq!(eval("2 3 &&"), "[ 1 ]");
    assert_eq!(eval("0 0 &&"), "[ 0 ]");
}

#[test]
fn test_boolean_or() {
    assert_eq!(eval("1 0 ||"), "[ 1 ]");
    assert_eq!(eval("0 0 ||"), "[ 0 ]");
}

#[test]
fn test_boolean_xor() {
    assert_eq!(eval("1 1 ^^"), "[ 0 ]");
    assert_eq!(eval("0 1 ^^"), "[ 1 ]");
    assert_eq!(eval("1 0 ^^"), "[ 1 ]");
    assert_eq!(eval("0 0 ^^"), "[ 0 ]");
}

#[test]
fn test_comparison_result_feeds_arithmetic() {
    // boolean encoding is an ordinary number
    assert_eq!(eval("3 4 < 5 *"), "[ 5 ]");
}
