//! Clause lexer for encoding strings.
//!
//! An encoding string is a whitespace-separated list of clauses. The lexer
//! splits the string, records where each clause sits, and classifies it.
//! Clauses whose meaning depends on their neighbours (legacy prefix bytes
//! versus opcode bytes, implied immediates) are left as plain hex bytes for
//! the parser.

use alloc::vec::Vec;

use crate::encoding::{ModRmField, VectorKind};
use crate::error::{EncodingError, Span};

/// One clause of an encoding string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'src> {
    /// Classification.
    pub kind: ClauseKind,
    /// Source text, borrowed from the syntax.
    pub text: &'src str,
    /// Source location.
    pub span: Span,
}

/// `NP` or `NFx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// `NP`.
    NoVexPrefixes,
    /// `NFx`.
    NoRepPrefixes,
}

/// `REX`, `REX.R` or `REX.W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RexMarker {
    /// `REX`.
    Plain,
    /// `REX.R`.
    R,
    /// `REX.W`.
    W,
}

/// Clause classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// Two hex digits.
    Hex(u8),
    /// `XX+rb`, `+rw`, `+rd`, `+ro` or `+r`.
    RegisterOpcode(u8),
    /// `XX+i`.
    StackOpcode(u8),
    /// `NP` or `NFx`.
    Restriction(Restriction),
    /// `REX`, `REX.R`, `REX.W`.
    Rex(RexMarker),
    /// `VEX.…` or `EVEX.…`; the parts are decoded by the parser.
    Vector(VectorKind),
    /// `/r` (`None`) or `/digit`.
    ModRm(Option<u8>),
    /// `mod:reg:rm`.
    BitPattern {
        /// Constraint on mod.
        md: ModRmField,
        /// Constraint on reg.
        reg: ModRmField,
        /// Constraint on r/m.
        rm: ModRmField,
    },
    /// `ib`, `iw`, `id`, `io`, `iq` with the size in bytes.
    Immediate(u8),
    /// `cb`, `cw`, `cd`, `cp`, `co`, `ct` with the size in bytes.
    CodeOffset(u8),
    /// `/is4`.
    Is4,
    /// `/vsib`.
    Vsib,
    /// A lone `+`.
    Plus,
}

/// Split an encoding string into classified clauses.
///
/// # Errors
///
/// Returns [`EncodingError::UnrecognizedClause`] for a clause of no known
/// form and [`EncodingError::MalformedBitPattern`] for a `mod:reg:rm`
/// clause that cannot be read.
pub fn tokenize(syntax: &str) -> Result<Vec<Clause<'_>>, EncodingError> {
    let bytes = syntax.as_bytes();
    let mut clauses = Vec::with_capacity(bytes.len() / 3 + 1);
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let text = &syntax[start..pos];
        let span = Span::new(start, pos - start);
        let kind = classify(text).ok_or_else(|| {
            if text.contains(':') {
                EncodingError::MalformedBitPattern {
                    clause: text.into(),
                    span,
                }
            } else {
                EncodingError::UnrecognizedClause {
                    clause: text.into(),
                    span,
                }
            }
        })?;
        clauses.push(Clause { kind, text, span });
    }

    Ok(clauses)
}

fn classify(text: &str) -> Option<ClauseKind> {
    let kind = match text {
        "+" => ClauseKind::Plus,
        "NP" => ClauseKind::Restriction(Restriction::NoVexPrefixes),
        "NFx" => ClauseKind::Restriction(Restriction::NoRepPrefixes),
        "REX" => ClauseKind::Rex(RexMarker::Plain),
        "REX.R" => ClauseKind::Rex(RexMarker::R),
        "REX.W" => ClauseKind::Rex(RexMarker::W),
        "/r" => ClauseKind::ModRm(None),
        "/is4" => ClauseKind::Is4,
        "/vsib" => ClauseKind::Vsib,
        "ib" => ClauseKind::Immediate(1),
        "iw" => ClauseKind::Immediate(2),
        "id" => ClauseKind::Immediate(4),
        "io" | "iq" => ClauseKind::Immediate(8),
        // Checked before hex bytes: `cb` and `cd` are also valid hex.
        "cb" => ClauseKind::CodeOffset(1),
        "cw" => ClauseKind::CodeOffset(2),
        "cd" => ClauseKind::CodeOffset(4),
        "cp" => ClauseKind::CodeOffset(6),
        "co" => ClauseKind::CodeOffset(8),
        "ct" => ClauseKind::CodeOffset(10),
        _ => return classify_structured(text),
    };
    Some(kind)
}

fn classify_structured(text: &str) -> Option<ClauseKind> {
    if let Some(digit) = text.strip_prefix('/') {
        return match digit.as_bytes() {
            [d @ b'0'..=b'7'] => Some(ClauseKind::ModRm(Some(d - b'0'))),
            _ => None,
        };
    }
    if text.starts_with("VEX.") {
        return Some(ClauseKind::Vector(VectorKind::Vex));
    }
    if text.starts_with("EVEX.") {
        return Some(ClauseKind::Vector(VectorKind::Evex));
    }
    if text.contains(':') {
        return bit_pattern(text);
    }
    if let Some((opcode, suffix)) = text.split_once('+') {
        let opcode = hex_byte(opcode)?;
        return match suffix {
            "rb" | "rw" | "rd" | "ro" | "r" => Some(ClauseKind::RegisterOpcode(opcode)),
            "i" => Some(ClauseKind::StackOpcode(opcode)),
            _ => None,
        };
    }
    hex_byte(text).map(ClauseKind::Hex)
}

/// Exactly two hex digits.
fn hex_byte(text: &str) -> Option<u8> {
    match text.as_bytes() {
        [hi, lo] => Some((hex_digit(*hi)? << 4) | hex_digit(*lo)?),
        _ => None,
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── ModR/M bit patterns ────────────────────────────────────────────────

/// `mod:reg:rm`, optionally wrapped as `(…)` or `!(…)`. A leading `!`
/// negates the mod field, which must then be a literal.
fn bit_pattern(text: &str) -> Option<ClauseKind> {
    let (negated, inner) = if let Some(rest) = text.strip_prefix("!(") {
        match rest.strip_suffix(')') {
            Some(inner) if inner.contains(':') && !inner.starts_with('(') => (true, inner),
            // `!(11):rrr:bbb`: only the mod field is wrapped.
            _ => (false, text),
        }
    } else if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        (false, inner)
    } else {
        (false, text)
    };

    let mut fields = inner.split(':');
    let (md, reg, rm) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }

    let md = match (negated, mod_field(md)?) {
        (false, md) => md,
        (true, ModRmField::Equals(v)) => ModRmField::NotEquals(v),
        (true, _) => return None,
    };
    Some(ClauseKind::BitPattern {
        md,
        reg: three_bit_field(reg, "rrr")?,
        rm: three_bit_field(rm, "bbb")?,
    })
}

fn mod_field(text: &str) -> Option<ModRmField> {
    if text == "mm" {
        return Some(ModRmField::Any);
    }
    if let Some(inner) = text.strip_prefix("!(").and_then(|t| t.strip_suffix(')')) {
        return binary(inner, 2).map(ModRmField::NotEquals);
    }
    binary(text, 2).map(ModRmField::Equals)
}

fn three_bit_field(text: &str, placeholder: &str) -> Option<ModRmField> {
    if text == placeholder {
        return Some(ModRmField::Any);
    }
    binary(text, 3).map(ModRmField::Equals)
}

/// A binary literal of exactly `width` digits.
fn binary(text: &str, width: usize) -> Option<u8> {
    if text.len() != width {
        return None;
    }
    text.bytes().try_fold(0u8, |acc, c| match c {
        b'0' => Some(acc << 1),
        b'1' => Some((acc << 1) | 1),
        _ => None,
    })
}
