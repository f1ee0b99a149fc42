use super::*;

#[test]
fn delimited_numerals_are_preserved_verbatim() {
    assert_eq!(repair("[1,2,3]"), "[1,2,3]");
    assert_eq!(repair("[0]"), "[0]");
    assert_eq!(repair("[-1.5e-3]"), "[-1.5e-3]");
    assert_eq!(repair(r#"{"n": 42}"#), r#"{"n":42}"#);
    assert_eq!(repair("[1.25E+10]"), "[1.25E+10]");
    assert_eq!(repair("[42 ]"), "[42]");
}

#[test]
fn numeral_at_end_of_input_becomes_null() {
    // A numeral abutting end of input may be mid-write; null stands in.
    assert_eq!(repair("[1,2,3"), "[1,2,null]");
    assert_eq!(repair(r#"{"a":12.5"#), r#"{"a":null}"#);
    assert_eq!(repair("[-7"), "[null]");
}

#[test]
fn dangling_fraction_or_exponent_becomes_null() {
    assert_eq!(repair("[1."), "[null]");
    assert_eq!(repair("[2e"), "[null]");
    assert_eq!(repair("[2e-"), "[null]");
    assert_eq!(repair("[1.5e+"), "[null]");
}

#[test]
fn lone_minus_is_a_rejection() {
    assert_eq!(repair("[-]"), "[]");
}

#[test]
fn number_grammar_is_strict_json() {
    // A leading zero only matches by itself; the rest is rejected, not
    // reinterpreted.
    assert_eq!(repair("[01]"), "[0,1]");
}

#[cfg(feature = "serde")]
#[test]
fn preserved_numerals_keep_their_value() {
    let v = parse(&repair(r#"{"a": -12.5e3, "b": 0.125}"#));
    assert_eq!(v["a"], serde_json::json!(-12.5e3));
    assert_eq!(v["b"], serde_json::json!(0.125));
}
