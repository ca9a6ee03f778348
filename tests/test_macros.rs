//! Integration tests for macro definition and substitution

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval, eval_lines, session_after};

#[test]
fn test_macro_substitution() {
    assert_eq!(eval_lines(&["macro sq dup *", "5 sq"]), "[ 25 ]");
}

#[test]
fn test_macro_definition_empties_the_line() {
    assert_eq!(eval("macro sq dup *"), "");
}

#[test]
fn test_macro_with_literal_body() {
    assert_eq!(eval_lines(&["macro kib 1024 *", "2 kib"]), "[ 2048 ]");
}

#[test]
fn test_macro_referencing_macro() {
    assert_eq!(
        eval_lines(&["macro sq dup *", "macro quad sq sq", "3 quad"]),
        "[ 81 ]"
    );
}

#[test]
fn test_macro_shadows_builtin() {
    assert_eq!(eval_lines(&["macro dup 1 +", "5 dup"]), "[ 6 ]");
}

#[test]
fn test_macro_used_twice() {
    assert_eq!(eval_lines(&["macro sq dup *", "2 sq", "sq"]), "[ 16 ]");
}

#[test]
fn test_clv_discards_macro_bodies() {
    // the name survives in the registry but its body is gone; the
    // invocation is reported and left on the stack
    assert_eq!(
        eval_lines(&["macro sq dup *", "clv", "5 sq"]),
        "[ 5, sq ]"
    );
}

#[test]
fn test_macro_without_a_name_is_recoverable() {
    assert_eq!(eval("macro"), "[ macro ]");
}

#[test]
fn test_unknown_word_does_not_end_the_session() {
    assert_eq!(eval_lines(&["nosuchword", "3 4 +"]), "[ nosuchword, 7 ]");
}
