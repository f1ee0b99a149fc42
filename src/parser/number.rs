use super::Logger;
use super::err_at;
use crate::emit::{Emitter, MResult};
use crate::error::RepairErrorKind;

/// Consume a JSON numeral anchored at the cursor.
///
/// A numeral that is delimited by further input is emitted verbatim. A
/// numeral that runs into end of input is ambiguous — `42` may be the whole
/// value or the front half of `425` cut mid-write — so it is conservatively
/// replaced by `null`. A dangling continuation at end of input (`1.`, `2e`,
/// `3e-`) is treated the same way, with the dangling characters consumed.
pub fn parse_number<E: Emitter>(input: &mut &str, out: &mut E, logger: &mut Logger) -> MResult<()> {
    let s = *input;
    let Some((end, dangle)) = match_number(s) else {
        let c = s.chars().next().unwrap_or('\0');
        return Err(err_at(logger, s, RepairErrorKind::UnexpectedChar(c)));
    };
    if end == s.len() || dangle > 0 {
        *input = &s[end + dangle..];
        logger.log(input, "replaced truncated numeral with null");
        out.emit_str("null")
    } else {
        *input = &s[end..];
        out.emit_str(&s[..end])
    }
}

/// Greedy match of the JSON number grammar: `-? int frac? exp?` with
/// `int = 0 | [1-9][0-9]*`, `frac = . [0-9]+`, `exp = [eE] [+-]? [0-9]+`.
///
/// Returns the byte length of the match plus the length of an incomplete
/// continuation hitting end of input (a lone `.` or an exponent marker with
/// no digits); the second value is nonzero only when the input ends there.
fn match_number(s: &str) -> Option<(usize, usize)> {
    let b = s.as_bytes();
    let mut i = 0usize;
    if b.first() == Some(&b'-') {
        i += 1;
    }
    match b.get(i) {
        Some(&b'0') => i += 1,
        Some(c) if c.is_ascii_digit() => {
            while i < b.len() && b[i].is_ascii_digit() {
                i += 1;
            }
        }
        _ => return None,
    }
    let mut dangle = 0usize;
    if b.get(i) == Some(&b'.') {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 {
            i = j;
        } else if j == b.len() {
            dangle = j - i;
        }
    }
    if dangle == 0 && matches!(b.get(i), Some(&(b'e' | b'E'))) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(&(b'+' | b'-'))) {
            j += 1;
        }
        let digits_from = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_from {
            i = j;
        } else if j == b.len() {
            dangle = j - i;
        }
    }
    Some((i, dangle))
}
