use super::Logger;
use super::err_at;
use crate::emit::{Emitter, MResult};
use crate::error::RepairErrorKind;
use memchr::memchr2;

/// Consume a double-quoted string starting exactly at a `"`.
///
/// A normally terminated string is copied verbatim, opening through closing
/// quote. Anywhere the token can no longer be validly continued — raw
/// control character, bare trailing backslash, short or non-hex `\u` escape,
/// or end of input before the closing quote — the scanned prefix is copied
/// and a synthetic closing quote appended. The input remaining after such a
/// truncation point is abandoned (the cursor jumps to end of input), trading
/// the unusable tail for structural validity.
pub fn parse_string<E: Emitter>(input: &mut &str, out: &mut E, logger: &mut Logger) -> MResult<()> {
    let s = *input;
    if !s.starts_with('"') {
        let c = s.chars().next().unwrap_or('\0');
        return Err(err_at(logger, s, RepairErrorKind::UnexpectedChar(c)));
    }
    let bytes = s.as_bytes();
    let mut i = 1usize;
    loop {
        let Some(off) = memchr2(b'"', b'\\', &bytes[i..]) else {
            // No closing quote ahead; stop at the first control byte if any,
            // otherwise at end of input.
            let stop = match control_pos(&bytes[i..]) {
                Some(p) => i + p,
                None => bytes.len(),
            };
            return close_truncated(input, s, stop, out, logger);
        };
        // A control byte before the next quote/backslash also truncates.
        if let Some(p) = control_pos(&bytes[i..i + off]) {
            return close_truncated(input, s, i + p, out, logger);
        }
        let j = i + off;
        if bytes[j] == b'"' {
            *input = &s[j + 1..];
            return out.emit_str(&s[..j + 1]);
        }
        // Escape sequence at j.
        match bytes.get(j + 1) {
            None => return close_truncated(input, s, j, out, logger),
            Some(&(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't')) => i = j + 2,
            Some(&b'u') => {
                let hex_ok = j + 6 <= bytes.len()
                    && bytes[j + 2..j + 6].iter().all(u8::is_ascii_hexdigit);
                if hex_ok {
                    i = j + 6;
                } else {
                    return close_truncated(input, s, j, out, logger);
                }
            }
            Some(_) => return close_truncated(input, s, j, out, logger),
        }
    }
}

#[inline]
fn control_pos(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b < 0x20)
}

fn close_truncated<'a, E: Emitter>(
    input: &mut &'a str,
    s: &'a str,
    stop: usize,
    out: &mut E,
    logger: &mut Logger,
) -> MResult<()> {
    *input = &s[s.len()..];
    logger.log(input, "closed truncated string");
    out.emit_str(&s[..stop])?;
    out.emit_char('"')
}
