//! Contains the Error and Result type used by the encoder, decoder and level
//! file framing.

/// Various errors that can occur while building, encoding or decoding NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A value was outside the domain of a fixed width type, or a length did
    /// not fit in its length prefix.
    Range,

    /// Wrong kind of value for the position, eg a list with mixed element
    /// types or an End tag held as a compound value.
    Type,

    /// A compound contained the same key twice.
    DuplicateKey,

    /// A tag byte that is not in `0..=12`. Contains the offending byte.
    UnknownTag(u8),

    /// The input ended part way through a value.
    TruncatedInput,

    /// Expected UTF-8 string data but it was not valid. Contains the invalid
    /// bytes.
    Encoding(Vec<u8>),

    /// The level file header declared a body length that does not match the
    /// data that followed it.
    LengthMismatch { declared: usize, actual: usize },

    /// Reading or writing a file failed.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn range(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Range,
        }
    }

    pub(crate) fn type_mismatch(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Type,
        }
    }

    pub(crate) fn duplicate_key(key: &str) -> Self {
        Self {
            msg: format!("duplicate compound key: {:?}", key),
            kind: ErrorKind::DuplicateKey,
        }
    }

    pub(crate) fn unknown_tag(tag: u8, offset: usize) -> Self {
        Self {
            msg: format!("invalid nbt tag value {} at offset {}", tag, offset),
            kind: ErrorKind::UnknownTag(tag),
        }
    }

    pub(crate) fn truncated(offset: usize, wanted: usize) -> Self {
        Self {
            msg: format!(
                "eof: needed {} more bytes at offset {} but input ended",
                wanted, offset
            ),
            kind: ErrorKind::TruncatedInput,
        }
    }

    pub(crate) fn nonunicode_string(data: &[u8], offset: usize) -> Self {
        Self {
            msg: format!(
                "invalid nbt string at offset {}: nonunicode: {}",
                offset,
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Encoding(data.to_vec()),
        }
    }

    pub(crate) fn length_mismatch(declared: usize, actual: usize) -> Self {
        Self {
            msg: format!(
                "level file declares a body of {} bytes but {} bytes are present",
                declared, actual
            ),
            kind: ErrorKind::LengthMismatch { declared, actual },
        }
    }

    /// Prefix the message with some context, such as the field being built.
    pub(crate) fn context(self, ctx: &str) -> Self {
        Self {
            msg: format!("{}: {}", ctx, self.msg),
            kind: self.kind,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self.kind, ErrorKind::Range)
    }

    pub fn is_type(&self) -> bool {
        matches!(self.kind, ErrorKind::Type)
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.kind, ErrorKind::DuplicateKey)
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::TruncatedInput)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: e.to_string(),
                kind: ErrorKind::TruncatedInput,
            },
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}
