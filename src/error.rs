use thiserror::Error;

/// What went wrong, without the position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("object key must be a string")]
    ObjectKeyExpected,
    #[error("{0}")]
    Parse(String),
    #[error("write error: {0}")]
    Io(String),
}

/// An error raised while consuming a construct that no repair rule covers,
/// or a failed write when repairing into an `io::Write` sink.
///
/// The position is a byte offset into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct RepairError {
    pub kind: RepairErrorKind,
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    #[cfg(feature = "serde")]
    pub(crate) fn from_serde(what: &str, err: serde_json::Error) -> Self {
        Self {
            kind: RepairErrorKind::Parse(format!("serde_json {} error: {}", what, err)),
            position: err.column(),
        }
    }
}
