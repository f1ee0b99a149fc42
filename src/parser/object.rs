use super::lex::skip_ws;
use super::strings::parse_string;
use super::{ContainerKind, Logger, err_at, parse_value, repair_comma};
use crate::emit::{Emitter, MResult};
use crate::error::RepairErrorKind;

/// Consume an object starting at `{`, repairing as it goes: a missing colon
/// is synthesized, a missing value becomes `null` when the member clearly
/// ends there, missing separators get a comma, and exhausted input forces
/// the close. A key that is not a string is not repaired; it rejects the
/// whole object.
pub fn parse_object<'i, E: Emitter>(
    input: &mut &'i str,
    stack: &mut Vec<ContainerKind>,
    out: &mut E,
    logger: &mut Logger,
) -> MResult<()> {
    debug_assert!(input.starts_with('{'));
    *input = &input[1..];
    stack.push(ContainerKind::Object);
    out.emit_char('{')?;
    let mut first = true;
    loop {
        if !skip_ws(input) {
            logger.log(input, "closed truncated object");
            stack.pop();
            return out.emit_char('}');
        }
        if input.starts_with('}') {
            *input = &input[1..];
            stack.pop();
            return out.emit_char('}');
        }
        // The member separator, deferred until a member is actually produced
        // so a trailing one never reaches the output.
        if !first {
            out.emit_char(',')?;
        }
        first = false;

        // Key: must already be a string (possibly truncated).
        if !input.starts_with('"') {
            return Err(err_at(logger, input, RepairErrorKind::ObjectKeyExpected));
        }
        parse_string(input, out, logger)?;

        skip_ws(input);
        if input.starts_with(':') {
            *input = &input[1..];
            out.emit_char(':')?;
        } else {
            logger.log(input, "inserted missing colon");
            out.emit_char(':')?;
        }

        // Value. When the member visibly ends right here, the value was lost
        // to truncation and null stands in; any other failure below this
        // point is unrecoverable at this level.
        skip_ws(input);
        if input.is_empty() || input.starts_with('}') || input.starts_with(',') {
            logger.log(input, "inserted null for missing value");
            out.emit_str("null")?;
        } else {
            parse_value(input, stack, out, logger)?;
        }

        repair_comma(input, logger);
    }
}
