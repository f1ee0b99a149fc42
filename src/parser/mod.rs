use crate::emit::{Emitter, MResult, StringEmitter};
use crate::error::{RepairError, RepairErrorKind};
// Hand-written recursive descent repairer using &str slicing; the cursor only
// ever moves forward (the view shrinks from the front, never grows back).

pub(crate) mod lex;
mod array;
mod number;
mod object;
mod strings;

use array::parse_array;
use lex::skip_ws;
use number::parse_number;
use object::parse_object;
use strings::parse_string;

/// One applied repair: what was patched and where in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    /// Byte offset into the original input at which the patch took effect.
    pub position: usize,
    pub message: &'static str,
}

/// Collects `RepairLogEntry` values when enabled; a disabled logger costs a
/// branch per patch and nothing else.
pub(crate) struct Logger {
    enable: bool,
    // Length of the input up to the end of the trimmed region, so a position
    // can be recovered from the length of the remaining suffix.
    base: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn new(enable: bool) -> Self {
        Self {
            enable,
            base: 0,
            entries: Vec::new(),
        }
    }

    fn pos(&self, rest: &str) -> usize {
        self.base - rest.len()
    }

    fn log(&mut self, rest: &str, message: &'static str) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                position: self.pos(rest),
                message,
            });
        }
    }

    pub(crate) fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

/// Which container a stack slot keeps open. A plain tag is all the forced
/// close needs to pick the matching delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    fn closer(self) -> char {
        match self {
            ContainerKind::Object => '}',
            ContainerKind::Array => ']',
        }
    }
}

fn err_at(logger: &Logger, rest: &str, kind: RepairErrorKind) -> RepairError {
    RepairError::new(kind, logger.pos(rest))
}

pub(crate) fn repair_to_string_impl(input: &str, logger: &mut Logger) -> String {
    let mut out = String::with_capacity(input.len().saturating_add(4));
    {
        let mut se = StringEmitter::new(&mut out);
        // A StringEmitter cannot fail, and structural rejection is already
        // swallowed inside repair_root.
        let _ = repair_root(input, &mut se, logger);
    }
    out
}

/// Run the whole repair: trim, consume one top-level container, then drain
/// the nesting stack appending the matching closer for every container still
/// open. Structural rejection ends the consumption phase early but is not an
/// error here; only emitter failures escape.
pub(crate) fn repair_root<E: Emitter>(
    input: &str,
    out: &mut E,
    logger: &mut Logger,
) -> MResult<()> {
    let mut cur = input.trim_matches([' ', '\t', '\n', '\r']);
    logger.base = input.trim_end_matches([' ', '\t', '\n', '\r']).len();

    let mut stack: Vec<ContainerKind> = Vec::new();
    let res = match cur.as_bytes().first() {
        Some(b'{') => parse_object(&mut cur, &mut stack, out, logger),
        Some(b'[') => parse_array(&mut cur, &mut stack, out, logger),
        // Anything else at the top level is out of scope; the stack is empty
        // and the drain below emits nothing.
        _ => Ok(()),
    };
    match res {
        Ok(()) => {}
        Err(RepairError {
            kind: RepairErrorKind::Io(_),
            ..
        }) => return res,
        Err(_) => {}
    }

    while let Some(kind) = stack.pop() {
        logger.log(
            cur,
            match kind {
                ContainerKind::Object => "closed unterminated object",
                ContainerKind::Array => "closed unterminated array",
            },
        );
        out.emit_char(kind.closer())?;
    }
    Ok(())
}

/// Consume one JSON value at the cursor, dispatching on its first character.
/// Fails on exhausted input or an unrecognized token; trailing whitespace is
/// skipped on success.
fn parse_value<'i, E: Emitter>(
    input: &mut &'i str,
    stack: &mut Vec<ContainerKind>,
    out: &mut E,
    logger: &mut Logger,
) -> MResult<()> {
    if !skip_ws(input) {
        return Err(err_at(logger, input, RepairErrorKind::UnexpectedEnd));
    }
    match input.as_bytes()[0] {
        b'"' => parse_string(input, out, logger)?,
        b'-' | b'0'..=b'9' => parse_number(input, out, logger)?,
        b'{' => parse_object(input, stack, out, logger)?,
        b'[' => parse_array(input, stack, out, logger)?,
        b't' => parse_literal(input, "true", out, logger)?,
        b'f' => parse_literal(input, "false", out, logger)?,
        b'n' => parse_literal(input, "null", out, logger)?,
        _ => {
            let c = input.chars().next().unwrap_or('\0');
            return Err(err_at(logger, input, RepairErrorKind::UnexpectedChar(c)));
        }
    }
    skip_ws(input);
    Ok(())
}

/// Exact-match recognizer for `true` / `false` / `null`. A partial literal at
/// end of input does not match and consumes nothing; the caller's
/// missing-value fallback covers it where one applies.
fn parse_literal<E: Emitter>(
    input: &mut &str,
    lit: &'static str,
    out: &mut E,
    logger: &mut Logger,
) -> MResult<()> {
    match input.strip_prefix(lit) {
        Some(rest) => {
            *input = rest;
            out.emit_str(lit)
        }
        None => {
            let c = input.chars().next().unwrap_or('\0');
            Err(err_at(logger, input, RepairErrorKind::UnexpectedChar(c)))
        }
    }
}

/// Consume the separator after an element/member. End of input and an
/// upcoming closer both legitimately need no comma; any other following
/// token means the source omitted one. The comma itself is emitted by the
/// container loop right before the next element, so a separator that turns
/// out to be trailing never reaches the output. This never fails.
fn repair_comma(input: &mut &str, logger: &mut Logger) {
    if !skip_ws(input) {
        return;
    }
    match input.as_bytes()[0] {
        b',' => *input = &input[1..],
        b']' | b'}' => {}
        _ => logger.log(input, "inserted missing comma"),
    }
}
