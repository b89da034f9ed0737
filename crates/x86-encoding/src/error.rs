//! Error types and clause span tracking for diagnostics.

use alloc::string::String;
use core::fmt;

/// Location of a clause within an encoding string.
///
/// Encoding strings are a single line, so a span is just the byte offset and
/// length of the clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// 0-based byte offset from the start of the syntax.
    pub offset: usize,
    /// Byte length of the spanned clause.
    pub len: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// 1-based column of the first byte.
    #[must_use]
    pub fn col(&self) -> usize {
        self.offset + 1
    }

    /// The spanned text, if the span lies within `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.offset..self.offset + self.len)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.col())
    }
}

/// Error produced while parsing an encoding string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingError {
    /// The syntax contained no clauses.
    Empty,

    /// A clause matched none of the known forms.
    UnrecognizedClause {
        /// The clause text.
        clause: String,
        /// Location of the clause.
        span: Span,
    },

    /// A REX marker was combined with a VEX/EVEX descriptor, or two vector
    /// descriptors were given.
    ConflictingPrefix {
        /// The clause that introduced the conflict.
        clause: String,
        /// Location of the clause.
        span: Span,
    },

    /// A prefix restriction or REX marker appeared after the opcode had
    /// started.
    MisplacedPrefix {
        /// The clause text.
        clause: String,
        /// Location of the clause.
        span: Span,
    },

    /// A dot-separated part of a VEX/EVEX descriptor was not understood.
    BadVectorPart {
        /// The descriptor containing the part.
        clause: String,
        /// The offending part.
        part: String,
        /// Location of the descriptor.
        span: Span,
    },

    /// A VEX/EVEX descriptor set the same field twice.
    DuplicateVectorPart {
        /// The descriptor containing the part.
        clause: String,
        /// The repeated part.
        part: String,
        /// Location of the descriptor.
        span: Span,
    },

    /// A VEX/EVEX descriptor named no opcode map.
    MissingOpcodeMap {
        /// The descriptor text.
        clause: String,
        /// Location of the descriptor.
        span: Span,
    },

    /// A ModR/M descriptor appeared before any opcode byte, after a
    /// register-modified opcode, or after another `/r` or `/digit`.
    MisplacedModRm {
        /// The clause text.
        clause: String,
        /// Location of the clause.
        span: Span,
    },

    /// A ModR/M bit pattern contradicted an earlier constraint.
    ConflictingModRm {
        /// The clause text.
        clause: String,
        /// Location of the clause.
        span: Span,
    },

    /// A `mod:reg:rm` pattern could not be parsed.
    MalformedBitPattern {
        /// The clause text.
        clause: String,
        /// Location of the clause.
        span: Span,
    },

    /// A trailing clause that may appear once (`/is4`, a code offset) was
    /// repeated.
    DuplicateClause {
        /// The clause text.
        clause: String,
        /// Location of the repeated clause.
        span: Span,
    },

    /// The encoding never named an opcode byte.
    MissingOpcode {
        /// The whole syntax.
        syntax: String,
    },
}

impl EncodingError {
    /// Location of the offending clause, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            EncodingError::Empty | EncodingError::MissingOpcode { .. } => None,
            EncodingError::UnrecognizedClause { span, .. }
            | EncodingError::ConflictingPrefix { span, .. }
            | EncodingError::MisplacedPrefix { span, .. }
            | EncodingError::BadVectorPart { span, .. }
            | EncodingError::DuplicateVectorPart { span, .. }
            | EncodingError::MissingOpcodeMap { span, .. }
            | EncodingError::MisplacedModRm { span, .. }
            | EncodingError::ConflictingModRm { span, .. }
            | EncodingError::MalformedBitPattern { span, .. }
            | EncodingError::DuplicateClause { span, .. } => Some(*span),
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::Empty => write!(f, "empty encoding syntax"),
            EncodingError::UnrecognizedClause { clause, span } => {
                write!(f, "{}: unrecognized encoding clause '{}'", span, clause)
            }
            EncodingError::ConflictingPrefix { clause, span } => {
                write!(f, "{}: conflicting prefix clause '{}'", span, clause)
            }
            EncodingError::MisplacedPrefix { clause, span } => {
                write!(f, "{}: prefix clause '{}' after the opcode", span, clause)
            }
            EncodingError::BadVectorPart { clause, part, span } => {
                write!(f, "{}: bad part '{}' in '{}'", span, part, clause)
            }
            EncodingError::DuplicateVectorPart { clause, part, span } => {
                write!(f, "{}: duplicate part '{}' in '{}'", span, part, clause)
            }
            EncodingError::MissingOpcodeMap { clause, span } => {
                write!(f, "{}: missing opcode map in '{}'", span, clause)
            }
            EncodingError::MisplacedModRm { clause, span } => {
                write!(f, "{}: misplaced ModR/M clause '{}'", span, clause)
            }
            EncodingError::ConflictingModRm { clause, span } => {
                write!(
                    f,
                    "{}: ModR/M clause '{}' contradicts an earlier constraint",
                    span, clause
                )
            }
            EncodingError::MalformedBitPattern { clause, span } => {
                write!(f, "{}: malformed ModR/M bit pattern '{}'", span, clause)
            }
            EncodingError::DuplicateClause { clause, span } => {
                write!(f, "{}: unexpected second '{}' clause", span, clause)
            }
            EncodingError::MissingOpcode { syntax } => {
                write!(f, "encoding '{}' has no opcode", syntax)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {}

/// Error produced when a serialized value cannot be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A name did not match any variant of a closed enumeration.
    UnknownName {
        /// What was being decoded.
        what: &'static str,
        /// The unrecognized name.
        name: String,
    },

    /// A hex string was malformed.
    BadHex {
        /// The offending text.
        text: String,
    },

    /// A ModR/M constraint string was malformed.
    BadModRmField {
        /// The offending text.
        text: String,
    },

    /// A byte that must be a legacy prefix was not one.
    BadPrefix {
        /// The offending byte.
        byte: u8,
    },

    /// A parameter object disagreed with the catalog entry of the same uid.
    CatalogMismatch {
        /// The parameter uid.
        uid: String,
        /// The first field that differed.
        field: &'static str,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownName { what, name } => {
                write!(f, "unknown {} '{}'", what, name)
            }
            DecodeError::BadHex { text } => write!(f, "invalid hex string '{}'", text),
            DecodeError::BadModRmField { text } => {
                write!(f, "invalid ModR/M field '{}'", text)
            }
            DecodeError::BadPrefix { byte } => {
                write!(f, "byte {:#04x} is not a legacy prefix", byte)
            }
            DecodeError::CatalogMismatch { uid, field } => {
                write!(f, "parameter {} does not match the catalog: {}", uid, field)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Error produced while assembling machine code with [`crate::Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// More bytes were supplied than the field can hold.
    FieldTooLong {
        /// The field being set.
        field: &'static str,
        /// Bytes supplied.
        len: usize,
        /// Field capacity.
        max: usize,
    },

    /// The output buffer cannot hold the encoded instruction.
    BufferFull {
        /// Bytes the instruction needs.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeError::FieldTooLong { field, len, max } => {
                write!(f, "{} of {} bytes exceeds {}-byte limit", field, len, max)
            }
            CodeError::BufferFull { needed, available } => write!(
                f,
                "instruction needs {} bytes but only {} remain",
                needed, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodeError {}
