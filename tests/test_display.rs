//! Integration tests for display modes and byte-order operators

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval, eval_lines, session_after};
use rpcalc::Mode;

#[test]
fn test_hex_mode() {
    assert_eq!(eval("255 hex"), "[ 0xff ]");
}

#[test]
fn test_mode_switch_is_idempotent() {
    let session = session_after(&["5 hex hex"]);
    assert_eq!(session.mode(), Mode::Hex);
    assert_eq!(session.render(), "[ 0x5 ]");
}

#[test]
fn test_mode_persists_between_lines() {
    assert_eq!(eval_lines(&["hex", "255"]), "[ 0xff ]");
}

#[test]
fn test_binary_and_octal_modes() {
    assert_eq!(eval("5 bin"), "[ 0b101 ]");
    assert_eq!(eval("8 oct"), "[ 0o10 ]");
}

#[test]
fn test_dec_mode_restores_full_precision() {
    assert_eq!(eval_lines(&["2.5 hex", "dec"]), "[ 2.5 ]");
}

#[test]
fn test_non_decimal_modes_truncate() {
    assert_eq!(eval("3.7 hex"), "[ 0x3 ]");
}

#[test]
fn test_base_prefixed_input_round_trips() {
    assert_eq!(eval("0xff 1 + hex"), "[ 0x100 ]");
}

#[test]
fn test_vertical_toggle() {
    assert_eq!(eval("1 2 stack"), "[ 1\n2 ]");
    // toggling twice restores horizontal rendering
    assert_eq!(eval("1 2 stack stack"), "[ 1, 2 ]");
}

#[test]
fn test_malformed_numerics_vanish() {
    assert_eq!(eval("3abc 5"), "[ 5 ]");
    assert_eq!(eval("0x 5"), "[ 5 ]");
}

#[test]
fn test_host_to_network_long() {
    assert_eq!(eval("5 hnl hex"), "[ 0x0000000000000005 ]");
    assert_eq!(eval("5 hnl nhl"), "[ 5 ]");
}

#[test]
fn test_host_to_network_short() {
    assert_eq!(eval("258 hns hex"), "[ 0x00000102 ]");
    assert_eq!(eval("258 hns nhs"), "[ 258 ]");
}

#[test]
fn test_network_conversions_handle_negatives() {
    assert_eq!(eval("-1 hns nhs"), "[ -1 ]");
}

#[test]
fn test_number_passes_through_to_host() {
    assert_eq!(eval("5 nhl"), "[ 5 ]");
}

#[test]
fn test_bytes_render_in_decimal_mode() {
    assert_eq!(eval("258 hns"), "[ [0 0 1 2] ]");
}
