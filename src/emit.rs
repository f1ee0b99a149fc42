use crate::error::{RepairError, RepairErrorKind};
use std::io::Write;

pub type MResult<T> = Result<T, RepairError>;

/// Sink for the corrected token stream. Append-only by construction: the
/// parser never rewrites what it has already emitted.
pub trait Emitter {
    fn emit_str(&mut self, s: &str) -> MResult<()>;
    fn emit_char(&mut self, c: char) -> MResult<()> {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.emit_str(s)
    }
}

pub struct StringEmitter<'a> {
    out: &'a mut String,
}

impl<'a> StringEmitter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }
}

impl<'a> Emitter for StringEmitter<'a> {
    fn emit_str(&mut self, s: &str) -> MResult<()> {
        self.out.push_str(s);
        Ok(())
    }
}

/// Buffers output and hands it to the writer in one final `flush_all`, so a
/// short write cannot leave a half-repaired document behind.
pub struct WriterEmitter<'a, W: Write> {
    w: &'a mut W,
    buf: Vec<u8>,
}

impl<'a, W: Write> WriterEmitter<'a, W> {
    pub fn with_capacity(w: &'a mut W, cap: usize) -> Self {
        Self {
            w,
            buf: Vec::with_capacity(cap),
        }
    }

    pub fn flush_all(&mut self) -> MResult<()> {
        if !self.buf.is_empty() {
            self.w
                .write_all(&self.buf)
                .map_err(|e| RepairError::new(RepairErrorKind::Io(e.to_string()), 0))?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl<'a, W: Write> Emitter for WriterEmitter<'a, W> {
    fn emit_str(&mut self, s: &str) -> MResult<()> {
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}
