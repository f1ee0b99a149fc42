use super::lex::skip_ws;
use super::{ContainerKind, Logger, parse_value, repair_comma};
use crate::emit::{Emitter, MResult};

/// Consume an array starting at `[`. Only separator repair applies between
/// elements; a value that fails to parse rejects the whole array, and
/// exhausted input forces the close.
pub fn parse_array<'i, E: Emitter>(
    input: &mut &'i str,
    stack: &mut Vec<ContainerKind>,
    out: &mut E,
    logger: &mut Logger,
) -> MResult<()> {
    debug_assert!(input.starts_with('['));
    *input = &input[1..];
    stack.push(ContainerKind::Array);
    out.emit_char('[')?;
    let mut first = true;
    loop {
        if !skip_ws(input) {
            logger.log(input, "closed truncated array");
            stack.pop();
            return out.emit_char(']');
        }
        if input.starts_with(']') {
            *input = &input[1..];
            stack.pop();
            return out.emit_char(']');
        }
        // Element separator, deferred until an element is actually produced.
        if !first {
            out.emit_char(',')?;
        }
        first = false;
        parse_value(input, stack, out, logger)?;
        repair_comma(input, logger);
    }
}
