//! Encoding-string parser.
//!
//! Turns one line of Intel opcode-column syntax into an [`Encoding`]. The
//! clauses are read left to right in two phases: a prefix phase (`NP`,
//! `NFx`, REX markers, legacy prefix bytes and a leading `9B`), then a body
//! phase holding the vector prefix, opcode bytes, ModR/M descriptors and
//! trailing markers.

use tracing::debug;

use crate::encoding::{
    Encoding, ImpliedPrefix, ModRmField, OpcodeMap, VectorKind, VectorLength, VectorWidth,
};
use crate::error::EncodingError;
use crate::lexer::{tokenize, Clause, ClauseKind, Restriction, RexMarker};
use crate::prefix::Prefix;

/// FWAIT, which some x87 forms carry ahead of their prefixes.
const FWAIT: u8 = 0x9b;

/// Parse an encoding string.
///
/// # Errors
///
/// Returns an [`EncodingError`] naming the first clause that could not be
/// accepted, or [`EncodingError::Empty`] / [`EncodingError::MissingOpcode`]
/// when the string as a whole is unusable.
///
/// # Examples
///
/// ```rust
/// use x86_encoding::{parse_encoding, ModRmField};
///
/// let enc = parse_encoding("REX.W + 81 /0 id").unwrap();
/// assert!(enc.rex_w);
/// assert_eq!(enc.opcode, vec![0x81]);
/// assert_eq!(enc.modrm_reg, ModRmField::Equals(0));
/// ```
pub fn parse_encoding(syntax: &str) -> Result<Encoding, EncodingError> {
    let result = parse(syntax);
    if let Err(err) = &result {
        match err.span() {
            Some(span) => debug!(syntax, offset = span.offset, error = %err, "invalid encoding"),
            None => debug!(syntax, error = %err, "invalid encoding"),
        }
    }
    result
}

fn parse(syntax: &str) -> Result<Encoding, EncodingError> {
    let clauses = tokenize(syntax)?;
    if clauses.is_empty() {
        return Err(EncodingError::Empty);
    }

    let mut enc = Encoding::blank(syntax);
    let body = parse_prefixes(&mut enc, &clauses);
    let mut parser = BodyParser {
        enc,
        modrm_descriptor: false,
        after_modrm: false,
        after_slash_r: false,
    };
    for clause in &clauses[body..] {
        parser.clause(clause)?;
    }

    let enc = parser.enc;
    if enc.opcode.is_empty() {
        return Err(EncodingError::MissingOpcode {
            syntax: syntax.into(),
        });
    }
    Ok(enc)
}

/// Consume the prefix phase, returning the index of the first body clause.
fn parse_prefixes(enc: &mut Encoding, clauses: &[Clause<'_>]) -> usize {
    for (i, clause) in clauses.iter().enumerate() {
        match clause.kind {
            ClauseKind::Plus => {}
            ClauseKind::Restriction(Restriction::NoVexPrefixes) => enc.no_vex_prefixes = true,
            ClauseKind::Restriction(Restriction::NoRepPrefixes) => enc.no_rep_prefixes = true,
            ClauseKind::Rex(marker) => {
                enc.rex = true;
                match marker {
                    RexMarker::Plain => {}
                    RexMarker::R => enc.rex_r = true,
                    RexMarker::W => enc.rex_w = true,
                }
            }
            // A lone 9B is FWAIT itself.
            ClauseKind::Hex(FWAIT) if i + 1 < clauses.len() => enc.prefix_opcodes.push(FWAIT),
            ClauseKind::Hex(byte) => match Prefix::from_byte(byte) {
                Some(prefix) => enc.mandatory_prefixes.push(prefix),
                None => return i,
            },
            _ => return i,
        }
    }
    clauses.len()
}

struct BodyParser {
    enc: Encoding,
    /// A `/r` or `/digit` has been seen.
    modrm_descriptor: bool,
    /// Any ModR/M clause has been seen.
    after_modrm: bool,
    /// A `/r` has been seen; later hex bytes are immediates.
    after_slash_r: bool,
}

impl BodyParser {
    fn clause(&mut self, clause: &Clause<'_>) -> Result<(), EncodingError> {
        match clause.kind {
            ClauseKind::Plus | ClauseKind::Immediate(_) => {}
            ClauseKind::Restriction(_) => return Err(misplaced_prefix(clause)),
            ClauseKind::Rex(_) if self.enc.vector != VectorKind::None => {
                return Err(conflicting_prefix(clause))
            }
            ClauseKind::Rex(_) => return Err(misplaced_prefix(clause)),
            ClauseKind::Vector(kind) => self.vector(kind, clause)?,
            ClauseKind::Hex(byte) if self.after_slash_r => self.enc.implied_immediate.push(byte),
            ClauseKind::Hex(byte) => self.enc.opcode.push(byte),
            ClauseKind::RegisterOpcode(byte) => {
                let idx = self.modified_opcode(byte, clause)?;
                self.enc.register_modifier = Some(idx);
            }
            ClauseKind::StackOpcode(byte) => {
                let idx = self.modified_opcode(byte, clause)?;
                self.enc.stack_index = Some(idx);
            }
            ClauseKind::ModRm(digit) => {
                self.check_modrm_position(clause)?;
                if self.modrm_descriptor {
                    return Err(misplaced_modrm(clause));
                }
                self.modrm_descriptor = true;
                self.after_slash_r = digit.is_none();
                let reg = digit.map_or(ModRmField::Any, ModRmField::Equals);
                self.constrain(ModRmField::Any, reg, ModRmField::Any, clause)?;
            }
            ClauseKind::BitPattern { md, reg, rm } => {
                self.check_modrm_position(clause)?;
                self.constrain(md, reg, rm, clause)?;
            }
            ClauseKind::CodeOffset(_) => {
                if self.enc.code_offset {
                    return Err(duplicate_clause(clause));
                }
                self.enc.code_offset = true;
            }
            ClauseKind::Is4 => {
                if self.enc.is4 {
                    return Err(duplicate_clause(clause));
                }
                self.enc.is4 = true;
            }
            ClauseKind::Vsib => {
                self.check_modrm_position(clause)?;
                self.enc.vsib = true;
                self.enc.modrm = true;
            }
        }
        Ok(())
    }

    /// Push a `+rb`/`+i` opcode byte and return its index.
    fn modified_opcode(&mut self, byte: u8, clause: &Clause<'_>) -> Result<usize, EncodingError> {
        if self.enc.modified_opcode().is_some() {
            return Err(duplicate_clause(clause));
        }
        if self.after_modrm {
            return Err(misplaced_modrm(clause));
        }
        self.enc.opcode.push(byte);
        Ok(self.enc.opcode.len() - 1)
    }

    fn check_modrm_position(&self, clause: &Clause<'_>) -> Result<(), EncodingError> {
        if self.enc.opcode.is_empty() || self.enc.modified_opcode().is_some() {
            return Err(misplaced_modrm(clause));
        }
        Ok(())
    }

    fn constrain(
        &mut self,
        md: ModRmField,
        reg: ModRmField,
        rm: ModRmField,
        clause: &Clause<'_>,
    ) -> Result<(), EncodingError> {
        let enc = &mut self.enc;
        if !enc.modrm_mod.compatible(md)
            || !enc.modrm_reg.compatible(reg)
            || !enc.modrm_rm.compatible(rm)
        {
            return Err(EncodingError::ConflictingModRm {
                clause: clause.text.into(),
                span: clause.span,
            });
        }
        enc.modrm_mod = enc.modrm_mod.narrow(md);
        enc.modrm_reg = enc.modrm_reg.narrow(reg);
        enc.modrm_rm = enc.modrm_rm.narrow(rm);
        enc.modrm = true;
        self.after_modrm = true;
        Ok(())
    }

    /// Decode a `VEX.…`/`EVEX.…` descriptor. Parts may come in any order.
    fn vector(&mut self, kind: VectorKind, clause: &Clause<'_>) -> Result<(), EncodingError> {
        if self.enc.rex || self.enc.vector != VectorKind::None {
            return Err(conflicting_prefix(clause));
        }
        if !self.enc.opcode.is_empty() {
            return Err(misplaced_prefix(clause));
        }

        let evex = kind == VectorKind::Evex;
        let mut length = None;
        let mut pp = None;
        let mut map = None;
        let mut width = None;

        // The head (`VEX`/`EVEX`) was checked by the lexer.
        for part in clause.text.split('.').skip(1) {
            match part {
                // Operand roles are carried by the parameters.
                "NDS" | "NDD" | "DDS" => {}
                "128" | "L0" | "LZ" => set_once(&mut length, VectorLength::L128, part, clause)?,
                "256" | "L1" => set_once(&mut length, VectorLength::L256, part, clause)?,
                "512" if evex => set_once(&mut length, VectorLength::L512, part, clause)?,
                "LIG" | "LLIG" => set_once(&mut length, VectorLength::Ignored, part, clause)?,
                "NP" => set_once(&mut pp, ImpliedPrefix::None, part, clause)?,
                "66" => set_once(&mut pp, ImpliedPrefix::P66, part, clause)?,
                "F3" => set_once(&mut pp, ImpliedPrefix::PF3, part, clause)?,
                "F2" => set_once(&mut pp, ImpliedPrefix::PF2, part, clause)?,
                "0F" => set_once(&mut map, OpcodeMap::Map0F, part, clause)?,
                "0F38" => set_once(&mut map, OpcodeMap::Map0F38, part, clause)?,
                "0F3A" => set_once(&mut map, OpcodeMap::Map0F3A, part, clause)?,
                "MAP5" if evex => set_once(&mut map, OpcodeMap::Map5, part, clause)?,
                "MAP6" if evex => set_once(&mut map, OpcodeMap::Map6, part, clause)?,
                "W0" => set_once(&mut width, VectorWidth::W0, part, clause)?,
                "W1" => set_once(&mut width, VectorWidth::W1, part, clause)?,
                "WIG" => set_once(&mut width, VectorWidth::Ignored, part, clause)?,
                _ => {
                    return Err(EncodingError::BadVectorPart {
                        clause: clause.text.into(),
                        part: part.into(),
                        span: clause.span,
                    })
                }
            }
        }

        let Some(map) = map else {
            return Err(EncodingError::MissingOpcodeMap {
                clause: clause.text.into(),
                span: clause.span,
            });
        };

        let enc = &mut self.enc;
        enc.vector = kind;
        enc.opcode_map = Some(map);
        enc.vector_length = length.unwrap_or_default();
        enc.implied_prefix = pp.unwrap_or_default();
        enc.vector_width = width.unwrap_or_default();
        Ok(())
    }
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    part: &str,
    clause: &Clause<'_>,
) -> Result<(), EncodingError> {
    if slot.is_some() {
        return Err(EncodingError::DuplicateVectorPart {
            clause: clause.text.into(),
            part: part.into(),
            span: clause.span,
        });
    }
    *slot = Some(value);
    Ok(())
}

fn misplaced_prefix(clause: &Clause<'_>) -> EncodingError {
    EncodingError::MisplacedPrefix {
        clause: clause.text.into(),
        span: clause.span,
    }
}

fn conflicting_prefix(clause: &Clause<'_>) -> EncodingError {
    EncodingError::ConflictingPrefix {
        clause: clause.text.into(),
        span: clause.span,
    }
}

fn misplaced_modrm(clause: &Clause<'_>) -> EncodingError {
    EncodingError::MisplacedModRm {
        clause: clause.text.into(),
        span: clause.span,
    }
}

fn duplicate_clause(clause: &Clause<'_>) -> EncodingError {
    EncodingError::DuplicateClause {
        clause: clause.text.into(),
        span: clause.span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Span;

    fn parse_ok(syntax: &str) -> Encoding {
        parse_encoding(syntax).unwrap_or_else(|e| panic!("{}: {}", syntax, e))
    }

    #[test]
    fn rex_with_plus() {
        let enc = parse_ok("REX + 81 /0 id");
        assert!(enc.rex);
        assert!(!enc.rex_w);
        assert_eq!(enc.opcode, vec![0x81]);
        assert!(enc.modrm);
        assert_eq!(enc.modrm_reg, ModRmField::Equals(0));
        assert!(enc.implied_immediate.is_empty());
    }

    #[test]
    fn rex_w_implies_rex() {
        let enc = parse_ok("REX.W + 03 /r");
        assert!(enc.rex && enc.rex_w && !enc.rex_r);
        assert_eq!(enc.modrm_reg, ModRmField::Any);
        assert_eq!(enc.syntax, "REX.W + 03 /r");
    }

    #[test]
    fn mandatory_prefixes_in_order() {
        let enc = parse_ok("66 REX.W 0F 3A 16 /r ib");
        assert_eq!(enc.mandatory_prefixes, vec![Prefix::OperandSize]);
        assert!(enc.rex_w);
        assert_eq!(enc.opcode, vec![0x0f, 0x3a, 0x16]);

        let enc = parse_ok("F2 66 0F 38 F1 /r");
        assert_eq!(
            enc.mandatory_prefixes,
            vec![Prefix::RepeatNot, Prefix::OperandSize]
        );
    }

    #[test]
    fn fwait_prefix_opcode() {
        let enc = parse_ok("9B DF E0");
        assert_eq!(enc.prefix_opcodes, vec![0x9b]);
        assert_eq!(enc.opcode, vec![0xdf, 0xe0]);

        let enc = parse_ok("9B");
        assert!(enc.prefix_opcodes.is_empty());
        assert_eq!(enc.opcode, vec![0x9b]);

        let enc = parse_ok("9B 66 37");
        assert_eq!(enc.prefix_opcodes, vec![0x9b]);
        assert_eq!(enc.mandatory_prefixes, vec![Prefix::OperandSize]);
        assert_eq!(enc.opcode, vec![0x37]);
    }

    #[test]
    fn register_modifier_and_stack_index() {
        let enc = parse_ok("0F C8+rd");
        assert_eq!(enc.opcode, vec![0x0f, 0xc8]);
        assert_eq!(enc.register_modifier, Some(1));
        assert_eq!(enc.stack_index, None);

        let enc = parse_ok("D8 C0+i");
        assert_eq!(enc.stack_index, Some(1));
        assert_eq!(enc.modified_opcode(), Some(1));
    }

    #[test]
    fn bit_patterns() {
        let enc = parse_ok("F3 0F 38 DD 11:rrr:bbb");
        assert!(enc.modrm);
        assert_eq!(enc.modrm_mod, ModRmField::Equals(0b11));
        assert_eq!(enc.modrm_reg, ModRmField::Any);

        let enc = parse_ok("F3 0F 38 DD !(11):rrr:bbb");
        assert_eq!(enc.modrm_mod, ModRmField::NotEquals(0b11));

        let enc = parse_ok("F3 0F 38 DD 11:101:bbb");
        assert_eq!(enc.modrm_reg, ModRmField::Equals(0b101));

        let enc = parse_ok("F3 0F 38 DD 11:rrr:101");
        assert_eq!(enc.modrm_rm, ModRmField::Equals(0b101));
    }

    #[test]
    fn digit_then_pattern_narrows() {
        let enc = parse_ok("0F 01 /7 11:111:000");
        assert_eq!(enc.modrm_mod, ModRmField::Equals(3));
        assert_eq!(enc.modrm_reg, ModRmField::Equals(7));
        assert_eq!(enc.modrm_rm, ModRmField::Equals(0));
    }

    #[test]
    fn implied_immediate_after_slash_r() {
        let enc = parse_ok("0F 0F /r B4");
        assert_eq!(enc.opcode, vec![0x0f, 0x0f]);
        assert_eq!(enc.implied_immediate, vec![0xb4]);
    }

    #[test]
    fn hex_after_digit_is_opcode() {
        let enc = parse_ok("0F 01 /7 F8");
        assert_eq!(enc.opcode, vec![0x0f, 0x01, 0xf8]);
        assert!(enc.implied_immediate.is_empty());
        assert_eq!(enc.modrm_reg, ModRmField::Equals(7));

        let enc = parse_ok("0F 01 11:111:000 F8");
        assert_eq!(enc.opcode, vec![0x0f, 0x01, 0xf8]);
        assert!(enc.implied_immediate.is_empty());
    }

    #[test]
    fn vex_parts_any_order() {
        let a = parse_ok("VEX.256.66.0F38.W0 13 /r");
        let b = parse_ok("VEX.W0.0F38.66.256 13 /r");
        assert_eq!(a.vector, VectorKind::Vex);
        assert_eq!(a.vector_length, VectorLength::L256);
        assert_eq!(a.implied_prefix, ImpliedPrefix::P66);
        assert_eq!(a.opcode_map, Some(OpcodeMap::Map0F38));
        assert_eq!(a.vector_width, VectorWidth::W0);
        assert_eq!(
            (a.vector_length, a.implied_prefix, a.opcode_map, a.vector_width),
            (b.vector_length, b.implied_prefix, b.opcode_map, b.vector_width)
        );
    }

    #[test]
    fn vex_defaults_and_ignored_parts() {
        let enc = parse_ok("VEX.NDS.LIG.F2.0F.WIG 58 /r");
        assert_eq!(enc.vector_length, VectorLength::Ignored);
        assert_eq!(enc.vector_width, VectorWidth::Ignored);
        assert_eq!(enc.implied_prefix, ImpliedPrefix::PF2);

        let enc = parse_ok("VEX.0F 77");
        assert_eq!(enc.vector_length, VectorLength::L128);
        assert_eq!(enc.vector_width, VectorWidth::W0);
        assert_eq!(enc.implied_prefix, ImpliedPrefix::None);
    }

    #[test]
    fn evex_descriptor() {
        let enc = parse_ok("EVEX.512.F3.MAP5.W0 58 /r");
        assert_eq!(enc.vector, VectorKind::Evex);
        assert_eq!(enc.vector_length, VectorLength::L512);
        assert_eq!(enc.opcode_map, Some(OpcodeMap::Map5));
        assert_eq!(enc.vector_size(), 512);
    }

    #[test]
    fn is4_and_vsib() {
        let enc = parse_ok("VEX.128.66.0F3A.W0 4B /r /is4");
        assert!(enc.is4);
        let enc = parse_ok("VEX.128.66.0F38.W0 92 /r /vsib");
        assert!(enc.vsib);
        assert!(enc.modrm);
    }

    #[test]
    fn code_offset() {
        let enc = parse_ok("E8 cd");
        assert!(enc.code_offset);
        assert_eq!(enc.opcode, vec![0xe8]);
    }

    #[test]
    fn errors() {
        assert_eq!(parse_encoding(""), Err(EncodingError::Empty));
        assert_eq!(parse_encoding("   "), Err(EncodingError::Empty));
        assert!(matches!(
            parse_encoding("0F XX"),
            Err(EncodingError::UnrecognizedClause { span, .. }) if span == Span::new(3, 2)
        ));
        assert!(matches!(
            parse_encoding("REX.W VEX.128.0F 58 /r"),
            Err(EncodingError::ConflictingPrefix { .. })
        ));
        assert!(matches!(
            parse_encoding("VEX.128.0F EVEX.128.0F 58 /r"),
            Err(EncodingError::ConflictingPrefix { .. })
        ));
        assert!(matches!(
            parse_encoding("VEX.128.0F.W2 58"),
            Err(EncodingError::BadVectorPart { ref part, .. }) if part == "W2"
        ));
        assert!(matches!(
            parse_encoding("VEX.512.0F 58"),
            Err(EncodingError::BadVectorPart { .. })
        ));
        assert!(matches!(
            parse_encoding("VEX.128.256.0F 58"),
            Err(EncodingError::DuplicateVectorPart { ref part, .. }) if part == "256"
        ));
        assert!(matches!(
            parse_encoding("VEX.128.66 58"),
            Err(EncodingError::MissingOpcodeMap { .. })
        ));
        assert!(matches!(
            parse_encoding("/r 01"),
            Err(EncodingError::MisplacedModRm { .. })
        ));
        assert!(matches!(
            parse_encoding("B8+rd /r"),
            Err(EncodingError::MisplacedModRm { .. })
        ));
        assert!(matches!(
            parse_encoding("01 /r /r"),
            Err(EncodingError::MisplacedModRm { .. })
        ));
        assert!(matches!(
            parse_encoding("0F 01 /7 11:110:000"),
            Err(EncodingError::ConflictingModRm { .. })
        ));
        assert!(matches!(
            parse_encoding("0F 01 !(11):rrr:bbb !(00):rrr:bbb"),
            Err(EncodingError::ConflictingModRm { .. })
        ));
        assert!(matches!(
            parse_encoding("0F 01 11:rrr"),
            Err(EncodingError::MalformedBitPattern { .. })
        ));
        assert!(matches!(
            parse_encoding("EA cd cp"),
            Err(EncodingError::DuplicateClause { .. })
        ));
        assert!(matches!(
            parse_encoding("VEX.128.66.0F3A.W0 4B /r /is4 /is4"),
            Err(EncodingError::DuplicateClause { .. })
        ));
        assert!(matches!(
            parse_encoding("REX.W"),
            Err(EncodingError::MissingOpcode { .. })
        ));
        assert!(matches!(
            parse_encoding("0F NP 58"),
            Err(EncodingError::MisplacedPrefix { .. })
        ));
    }
}
