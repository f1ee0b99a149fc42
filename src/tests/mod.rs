use crate::repair;

// Shared test helpers

/// Assert that every `{`/`[` emitted outside of strings has a matching
/// closer of the right kind, and nothing closes early.
fn assert_balanced(out: &str) {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escape = false;
    for c in out.chars() {
        if in_string {
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => stack.push(c),
            '}' => assert_eq!(stack.pop(), Some('{'), "unmatched }} in {out:?}"),
            ']' => assert_eq!(stack.pop(), Some('['), "unmatched ]] in {out:?}"),
            _ => {}
        }
    }
    assert!(!in_string, "unterminated string in {out:?}");
    assert!(stack.is_empty(), "unclosed containers in {out:?}");
}

#[cfg(feature = "serde")]
fn parse(out: &str) -> serde_json::Value {
    serde_json::from_str(out).unwrap_or_else(|e| panic!("output {out:?} does not parse: {e}"))
}

mod numbers;
mod truncation;
