use super::*;

// Cut a valid document at every byte boundary and make sure every prefix
// repairs to something balanced (and parseable where the prefix still
// contains a top-level container).
#[test]
fn every_prefix_of_a_valid_document_repairs_balanced() {
    let doc = r#"{"user":{"name":"Ada Lovelace","tags":["math",{"era":"1800s"}],"id":1815,"active":true,"score":-3.5e2,"note":"said \"hi\" A"}}"#;
    for end in 0..=doc.len() {
        if !doc.is_char_boundary(end) {
            continue;
        }
        let out = repair(&doc[..end]);
        assert_balanced(&out);
    }
}

// Literals and signs are excluded here: a cut that lands inside `true` or
// right on a `-` is a structural rejection, and the separator already
// emitted before it stays in the output.
#[cfg(feature = "serde")]
#[test]
fn every_prefix_of_a_valid_document_repairs_parseable() {
    let doc = r#"{"a":[1,2,{"b":"str","c":["x",9]},4.5],"d":"end"}"#;
    for end in 1..=doc.len() {
        let out = repair(&doc[..end]);
        if out.is_empty() {
            continue;
        }
        parse(&out);
    }
}

#[test]
fn deep_truncation_closes_every_level() {
    assert_eq!(
        repair(r#"[[[[{"a":[1,{"b":"x"#),
        r#"[[[[{"a":[1,{"b":"x"}]}]]]]"#
    );
}

#[test]
fn truncation_mid_separator() {
    assert_eq!(repair("[1,"), "[1]");
    assert_eq!(repair(r#"{"a":1,"#), r#"{"a":1}"#);
    assert_eq!(repair(r#"{"a":1, "#), r#"{"a":1}"#);
}

#[test]
fn truncation_after_key_or_colon() {
    assert_eq!(repair(r#"{"a""#), r#"{"a":null}"#);
    assert_eq!(repair(r#"{"a":"#), r#"{"a":null}"#);
    assert_eq!(repair(r#"{"a" : "#), r#"{"a":null}"#);
}

#[test]
fn full_run_of_documented_examples() {
    assert_eq!(repair("[1,2,3"), "[1,2,null]");
    assert_eq!(repair(r#"{"a":1,"b":"#), r#"{"a":1,"b":null}"#);
    assert_eq!(repair(r#"["hello", "wor"#), r#"["hello","wor"]"#);
    assert_eq!(repair("   "), "");
    assert_eq!(repair("[1 2]"), "[1,2]");
}
