/// Skip the maximal run of JSON whitespace (space, tab, LF, CR) at the
/// cursor. Returns whether any non-whitespace input remains, so callers can
/// tell "ran out of input" from "found the next token".
#[inline]
pub fn skip_ws(input: &mut &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            _ => break,
        }
    }
    *input = &input[i..];
    !input.is_empty()
}
