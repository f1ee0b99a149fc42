//! Mend truncated or malformed JSON into well-formed JSON.
//!
//! The typical input is a JSON document cut off mid-token by an interrupted
//! stream or a partial API response. A single forward-only pass validates,
//! normalizes, and patches structural defects — missing commas and colons,
//! unterminated strings, numbers, and containers — while emitting the
//! corrected text. Repairing never fails: anything that cannot be salvaged
//! is dropped in favor of a structurally valid result, degrading to an
//! empty string when no top-level object or array is found.

pub mod cli;
pub mod error;
mod emit;
mod parser;

pub use error::{RepairError, RepairErrorKind};
pub use parser::RepairLogEntry;

use std::io::Write;

/// Repair a possibly truncated JSON text into the closest well-formed JSON
/// text that preserves all unambiguously-parseable content.
///
/// Empty or whitespace-only input, and input whose first significant
/// character is not `{` or `[`, yield an empty string.
///
/// ```
/// assert_eq!(jsonmend::repair(r#"{"a":1,"b":"#), r#"{"a":1,"b":null}"#);
/// assert_eq!(jsonmend::repair(r#"["hello", "wor"#), r#"["hello","wor"]"#);
/// ```
pub fn repair(input: &str) -> String {
    let mut logger = parser::Logger::new(false);
    parser::repair_to_string_impl(input, &mut logger)
}

/// Repair and return both the result and a log of every patch applied.
pub fn repair_with_log(input: &str) -> (String, Vec<RepairLogEntry>) {
    let mut logger = parser::Logger::new(true);
    let out = parser::repair_to_string_impl(input, &mut logger);
    (out, logger.into_entries())
}

/// Repair a possibly truncated JSON text and write the result into an
/// `io::Write`. Output is buffered and handed over in one final write, so
/// the only reportable error is the write itself.
pub fn repair_to_writer<W: Write>(input: &str, writer: &mut W) -> Result<(), RepairError> {
    let mut emitter = emit::WriterEmitter::with_capacity(writer, input.len().saturating_add(8));
    let mut logger = parser::Logger::new(false);
    parser::repair_root(input, &mut emitter, &mut logger)?;
    emitter.flush_all()
}

#[cfg(feature = "serde")]
/// Repair and then parse into a `serde_json::Value`. Fails when nothing
/// usable was found (the repaired text is empty) or the repaired text does
/// not parse.
pub fn repair_to_value(input: &str) -> Result<serde_json::Value, RepairError> {
    let s = repair(input);
    serde_json::from_str(&s).map_err(|e| RepairError::from_serde("parse", e))
}

#[cfg(test)]
mod tests;
