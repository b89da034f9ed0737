//! Matching machine code against an [`Encoding`].
//!
//! The matcher checks the parts of an instruction that the encoding string
//! fixes: prefixes, the vector prefix fields, opcode bytes, ModR/M
//! constraints and implied immediates. Operands are not decoded, so a wrong
//! register or displacement is not detected.

use core::fmt;
use core::str::FromStr;

use tracing::trace;

use crate::encoding::{Encoding, VectorKind};
use crate::error::DecodeError;
use crate::modrm::{ModRm, Sib};
use crate::prefix::{Evex, Prefix, Rex, Vex};

/// Outcome of [`Encoding::matches_machine_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineCodeMatch {
    /// The machine code is an instance of the encoding.
    Match,
    /// No bytes at all.
    NoMachineCode,
    /// The bytes ran out before the opcode.
    NoOpcode,
    /// A required prefix opcode such as `9B` is missing.
    MissingPrefixOpcode,
    /// A 66, F2 or F3 prefix is present where `NP` or a vector prefix
    /// forbids it.
    ForbiddenVexPrefix,
    /// An F2 or F3 prefix is present where `NFx` forbids it.
    ForbiddenRepPrefix,
    /// A mandatory legacy prefix is absent.
    MissingMandatoryPrefix,
    /// A required REX prefix is absent.
    MissingRexPrefix,
    /// REX.R is required but clear.
    MissingRexR,
    /// REX.W is required but clear.
    MissingRexW,
    /// No `C4`/`C5` byte where a VEX prefix is required.
    MissingVexPrefix,
    /// The VEX prefix is cut short.
    TruncatedVexPrefix,
    /// A 2-byte VEX prefix where the map or W needs the 3-byte form.
    Unexpected2ByteVexPrefix,
    /// The vector prefix selects another opcode map.
    WrongVexMap,
    /// The vector prefix has the wrong W bit.
    WrongVexW,
    /// The vector prefix has the wrong length.
    WrongVexL,
    /// The vector prefix implies the wrong legacy prefix.
    WrongVexPp,
    /// No `62` byte where an EVEX prefix is required.
    MissingEvexPrefix,
    /// The EVEX prefix is cut short.
    TruncatedEvexPrefix,
    /// The EVEX fixed bits are wrong.
    MalformedEvexPrefix,
    /// An opcode byte differs.
    WrongOpcode,
    /// A register or stack-index opcode byte is outside its 8-value range.
    WrongModifiedOpcode,
    /// The ModR/M byte is missing.
    MissingModRm,
    /// ModR/M.mod violates its constraint.
    WrongModRmMod,
    /// ModR/M.reg violates its constraint.
    WrongModRmReg,
    /// ModR/M.r/m violates its constraint.
    WrongModRmRm,
    /// The implied immediate is cut short.
    MissingImpliedImmediate,
    /// The implied immediate differs.
    WrongImpliedImmediate,
}

impl MachineCodeMatch {
    /// Every variant.
    pub const ALL: [MachineCodeMatch; 28] = [
        MachineCodeMatch::Match,
        MachineCodeMatch::NoMachineCode,
        MachineCodeMatch::NoOpcode,
        MachineCodeMatch::MissingPrefixOpcode,
        MachineCodeMatch::ForbiddenVexPrefix,
        MachineCodeMatch::ForbiddenRepPrefix,
        MachineCodeMatch::MissingMandatoryPrefix,
        MachineCodeMatch::MissingRexPrefix,
        MachineCodeMatch::MissingRexR,
        MachineCodeMatch::MissingRexW,
        MachineCodeMatch::MissingVexPrefix,
        MachineCodeMatch::TruncatedVexPrefix,
        MachineCodeMatch::Unexpected2ByteVexPrefix,
        MachineCodeMatch::WrongVexMap,
        MachineCodeMatch::WrongVexW,
        MachineCodeMatch::WrongVexL,
        MachineCodeMatch::WrongVexPp,
        MachineCodeMatch::MissingEvexPrefix,
        MachineCodeMatch::TruncatedEvexPrefix,
        MachineCodeMatch::MalformedEvexPrefix,
        MachineCodeMatch::WrongOpcode,
        MachineCodeMatch::WrongModifiedOpcode,
        MachineCodeMatch::MissingModRm,
        MachineCodeMatch::WrongModRmMod,
        MachineCodeMatch::WrongModRmReg,
        MachineCodeMatch::WrongModRmRm,
        MachineCodeMatch::MissingImpliedImmediate,
        MachineCodeMatch::WrongImpliedImmediate,
    ];

    /// Human-readable description.
    pub const fn as_str(self) -> &'static str {
        match self {
            MachineCodeMatch::Match => "match",
            MachineCodeMatch::NoMachineCode => "no machine code",
            MachineCodeMatch::NoOpcode => "no opcode",
            MachineCodeMatch::MissingPrefixOpcode => "no prefix opcode",
            MachineCodeMatch::ForbiddenVexPrefix => "forbidden VEX prefix",
            MachineCodeMatch::ForbiddenRepPrefix => "forbidden rep prefix",
            MachineCodeMatch::MissingMandatoryPrefix => "missing mandatory prefix",
            MachineCodeMatch::MissingRexPrefix => "missing REX prefix",
            MachineCodeMatch::MissingRexR => "missing REX.R",
            MachineCodeMatch::MissingRexW => "missing REX.W",
            MachineCodeMatch::MissingVexPrefix => "missing VEX prefix",
            MachineCodeMatch::TruncatedVexPrefix => "truncated VEX prefix",
            MachineCodeMatch::Unexpected2ByteVexPrefix => "unexpected 2-byte VEX prefix",
            MachineCodeMatch::WrongVexMap => "wrong VEX.m_mmmm",
            MachineCodeMatch::WrongVexW => "wrong VEX.W",
            MachineCodeMatch::WrongVexL => "wrong VEX.L",
            MachineCodeMatch::WrongVexPp => "wrong VEX.pp",
            MachineCodeMatch::MissingEvexPrefix => "missing EVEX prefix",
            MachineCodeMatch::TruncatedEvexPrefix => "truncated EVEX prefix",
            MachineCodeMatch::MalformedEvexPrefix => "malformed EVEX prefix",
            MachineCodeMatch::WrongOpcode => "wrong opcode",
            MachineCodeMatch::WrongModifiedOpcode => "wrong modified opcode",
            MachineCodeMatch::MissingModRm => "missing ModR/M byte",
            MachineCodeMatch::WrongModRmMod => "wrong ModR/M.mod",
            MachineCodeMatch::WrongModRmReg => "wrong ModR/M.reg",
            MachineCodeMatch::WrongModRmRm => "wrong ModR/M.r/m",
            MachineCodeMatch::MissingImpliedImmediate => "missing implied immediate",
            MachineCodeMatch::WrongImpliedImmediate => "wrong implied immediate",
        }
    }

    /// Whether the bytes matched.
    #[inline]
    pub fn is_match(self) -> bool {
        self == MachineCodeMatch::Match
    }

    /// Whether the mismatch is only due to the bytes running out early.
    pub fn is_truncation(self) -> bool {
        matches!(
            self,
            MachineCodeMatch::NoMachineCode
                | MachineCodeMatch::NoOpcode
                | MachineCodeMatch::TruncatedVexPrefix
                | MachineCodeMatch::TruncatedEvexPrefix
                | MachineCodeMatch::MissingModRm
                | MachineCodeMatch::MissingImpliedImmediate
        )
    }
}

impl fmt::Display for MachineCodeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineCodeMatch {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MachineCodeMatch::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownName {
                what: "match outcome",
                name: s.into(),
            })
    }
}

impl Encoding {
    /// Check whether `code` could be an instance of this encoding.
    ///
    /// Only the leading instruction is examined; any bytes after the
    /// matched fields are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use x86_encoding::{parse_encoding, MachineCodeMatch};
    ///
    /// let enc = parse_encoding("80 /2 ib").unwrap();
    /// assert_eq!(enc.matches_machine_code(&[0x80, 0xd1, 0x80]), MachineCodeMatch::Match);
    /// assert_eq!(enc.matches_machine_code(&[0x80, 0xc1, 0x80]), MachineCodeMatch::WrongModRmReg);
    /// ```
    pub fn matches_machine_code(&self, code: &[u8]) -> MachineCodeMatch {
        let outcome = self.match_code(code);
        if !outcome.is_match() {
            trace!(syntax = %self.syntax, len = code.len(), %outcome, "machine code mismatch");
        }
        outcome
    }

    fn match_code(&self, code: &[u8]) -> MachineCodeMatch {
        use MachineCodeMatch::*;

        if code.is_empty() {
            return NoMachineCode;
        }
        let Some(mut rest) = code.strip_prefix(self.prefix_opcodes.as_slice()) else {
            return MissingPrefixOpcode;
        };

        // ── Legacy prefixes ──
        let mut seen = 0u16;
        while let Some((&byte, tail)) = rest.split_first() {
            let Some(prefix) = Prefix::from_byte(byte) else {
                break;
            };
            if !self.mandatory_prefixes.contains(&prefix) {
                if prefix.is_simd_selector()
                    && (self.no_vex_prefixes || self.vector != VectorKind::None)
                {
                    return ForbiddenVexPrefix;
                }
                if prefix.is_repeat() && self.no_rep_prefixes {
                    return ForbiddenRepPrefix;
                }
            }
            seen |= prefix.mask();
            rest = tail;
        }
        let Some(&first) = rest.first() else {
            return NoOpcode;
        };
        if self.mandatory_prefixes.iter().any(|p| seen & p.mask() == 0) {
            return MissingMandatoryPrefix;
        }

        // ── REX ──
        if self.rex || self.rex_r || self.rex_w {
            let Some(rex) = Rex::from_byte(first) else {
                return MissingRexPrefix;
            };
            if self.rex_r && !rex.r() {
                return MissingRexR;
            }
            if self.rex_w && !rex.w() {
                return MissingRexW;
            }
            rest = &rest[1..];
        } else if self.vector == VectorKind::None
            && Rex::from_byte(first).is_some()
            && self.opcode.first().map_or(true, |op| op >> 4 != 0b0100)
        {
            // Optional REX prefix.
            rest = &rest[1..];
        }

        // ── VEX / EVEX ──
        let outcome = match self.vector {
            VectorKind::None => Match,
            VectorKind::Vex => self.match_vex(&mut rest),
            VectorKind::Evex => self.match_evex(&mut rest),
        };
        if !outcome.is_match() {
            return outcome;
        }

        // ── Opcode ──
        if rest.len() < self.opcode.len() {
            return NoOpcode;
        }
        let (opcode, tail) = rest.split_at(self.opcode.len());
        rest = tail;
        let modified = self.modified_opcode();
        for (i, (&want, &got)) in self.opcode.iter().zip(opcode).enumerate() {
            if Some(i) == modified {
                if got.checked_sub(want).map_or(true, |delta| delta > 7) {
                    return WrongModifiedOpcode;
                }
            } else if got != want {
                return WrongOpcode;
            }
        }

        // ── ModR/M ──
        let modrm = if self.needs_modrm() {
            let Some(&byte) = rest.first() else {
                return MissingModRm;
            };
            let modrm = ModRm(byte);
            if !self.modrm_mod.matches(modrm.md()) {
                return WrongModRmMod;
            }
            if !self.modrm_reg.matches(modrm.reg()) {
                return WrongModRmReg;
            }
            if !self.modrm_rm.matches(modrm.rm()) {
                return WrongModRmRm;
            }
            Some(modrm)
        } else {
            None
        };

        // ── Implied immediate ──
        if !self.implied_immediate.is_empty() {
            // Skip the addressing bytes: ModR/M, SIB and displacement.
            let mut at = 0;
            if let Some(modrm) = modrm {
                at = 1;
                let mut sib = None;
                if modrm.has_sib() {
                    let Some(&byte) = rest.get(1) else {
                        return MissingImpliedImmediate;
                    };
                    sib = Some(Sib(byte));
                    at += 1;
                }
                at += modrm.displacement_len(sib);
            }
            let got = rest.get(at..).unwrap_or_default();
            if got.len() < self.implied_immediate.len() {
                return MissingImpliedImmediate;
            }
            if !got.starts_with(&self.implied_immediate) {
                return WrongImpliedImmediate;
            }
        }

        Match
    }

    fn match_vex(&self, rest: &mut &[u8]) -> MachineCodeMatch {
        use MachineCodeMatch::*;

        let len = match rest.first() {
            Some(0xc4) => 3,
            Some(0xc5) => 2,
            _ => return MissingVexPrefix,
        };
        // Room for the prefix and at least one opcode byte.
        if rest.len() <= len {
            return TruncatedVexPrefix;
        }
        let vex = if len == 3 {
            Vex::from_three_byte(rest[1], rest[2])
        } else {
            if self.opcode_map.map(|m| m.value()) != Some(1) || self.vector_width.bit() == Some(true)
            {
                return Unexpected2ByteVexPrefix;
            }
            Vex::from_two_byte(rest[1])
        };
        *rest = &rest[len..];

        self.match_vector_fields(vex.map(), vex.w(), Some(u8::from(vex.l())), vex.pp())
    }

    fn match_evex(&self, rest: &mut &[u8]) -> MachineCodeMatch {
        use MachineCodeMatch::*;

        if rest.first() != Some(&0x62) {
            return MissingEvexPrefix;
        }
        if rest.len() < 5 {
            return TruncatedEvexPrefix;
        }
        let evex = Evex([rest[1], rest[2], rest[3]]);
        if !evex.has_valid_fixed_bits() {
            return MalformedEvexPrefix;
        }
        // With EVEX.b set on a register form, L'L holds the rounding mode.
        let embedded_rounding = (self.rounding || self.suppress)
            && evex.broadcast()
            && self.needs_modrm()
            && rest
                .get(4 + self.opcode.len())
                .map_or(true, |&byte| !ModRm(byte).is_memory());
        let ll = (!embedded_rounding).then(|| evex.ll());
        *rest = &rest[4..];

        self.match_vector_fields(evex.map(), evex.w(), ll, evex.pp())
    }

    fn match_vector_fields(&self, map: u8, w: bool, ll: Option<u8>, pp: u8) -> MachineCodeMatch {
        use MachineCodeMatch::*;

        if self.opcode_map.map(|m| m.value()) != Some(map) {
            return WrongVexMap;
        }
        if self.vector_width.bit().is_some_and(|want| want != w) {
            return WrongVexW;
        }
        if let (Some(want), Some(ll)) = (self.vector_length.bits(), ll) {
            if want != ll {
                return WrongVexL;
            }
        }
        if self.implied_prefix.bits() != pp {
            return WrongVexPp;
        }
        Match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_encoding;

    fn check(syntax: &str, code: &[u8]) -> MachineCodeMatch {
        parse_encoding(syntax)
            .unwrap_or_else(|e| panic!("{}: {}", syntax, e))
            .matches_machine_code(code)
    }

    #[test]
    fn plain_opcode() {
        assert_eq!(check("37", &[0x37]), MachineCodeMatch::Match);
        assert_eq!(check("37", &[0x38]), MachineCodeMatch::WrongOpcode);
        assert_eq!(check("37", &[]), MachineCodeMatch::NoMachineCode);
    }

    #[test]
    fn register_modified_opcode_in_rex_row() {
        assert_eq!(check("48+rw", &[0x49]), MachineCodeMatch::Match);
        assert_eq!(check("48+rw", &[0x4f]), MachineCodeMatch::Match);
        assert_eq!(check("48+rw", &[0x50]), MachineCodeMatch::WrongModifiedOpcode);
        assert_eq!(check("48+rw", &[0x47]), MachineCodeMatch::WrongModifiedOpcode);
    }

    #[test]
    fn modified_opcode_does_not_wrap() {
        assert_eq!(check("F8+rd", &[0x03]), MachineCodeMatch::WrongModifiedOpcode);
        assert_eq!(check("F8+rd", &[0xff]), MachineCodeMatch::Match);
    }

    #[test]
    fn optional_rex_is_skipped() {
        assert_eq!(check("0F C8+rd", &[0x41, 0x0f, 0xc9]), MachineCodeMatch::Match);
        assert_eq!(check("01 /r", &[0x48, 0x01, 0xc8]), MachineCodeMatch::Match);
    }

    #[test]
    fn prefix_opcode_then_prefixes() {
        assert_eq!(
            check("9B 66 37", &[0x9b, 0x66, 0x67, 0x37, 0x12]),
            MachineCodeMatch::Match
        );
        assert_eq!(
            check("9B 66 37", &[0x66, 0x37]),
            MachineCodeMatch::MissingPrefixOpcode
        );
    }

    #[test]
    fn mandatory_prefixes() {
        assert_eq!(
            check("66 37", &[0x37, 0x12]),
            MachineCodeMatch::MissingMandatoryPrefix
        );
        assert_eq!(check("66 37", &[0x67, 0x66, 0x37]), MachineCodeMatch::Match);
        assert_eq!(check("66 37", &[0x66]), MachineCodeMatch::NoOpcode);
        assert_eq!(check("9B 66 37", &[0x9b]), MachineCodeMatch::NoOpcode);
        assert_eq!(check("F2 66 0F 38 F1 /r", &[0xf2]), MachineCodeMatch::NoOpcode);
    }

    #[test]
    fn forbidden_prefixes() {
        assert_eq!(
            check("NP 0F 58 /r", &[0x66, 0x0f, 0x58, 0xc1]),
            MachineCodeMatch::ForbiddenVexPrefix
        );
        assert_eq!(
            check("NFx 66 0F AE /7", &[0x66, 0x0f, 0xae, 0x38]),
            MachineCodeMatch::Match
        );
        assert_eq!(
            check("NFx 66 0F AE /7", &[0xf3, 0x66, 0x0f, 0xae, 0x38]),
            MachineCodeMatch::ForbiddenRepPrefix
        );
        assert_eq!(
            check("VEX.128.0F.WIG 58 /r", &[0x66, 0xc5, 0xf8, 0x58, 0xc1]),
            MachineCodeMatch::ForbiddenVexPrefix
        );
    }

    #[test]
    fn required_rex() {
        assert_eq!(check("REX.W + 03 /r", &[0x48, 0x03, 0xc1]), MachineCodeMatch::Match);
        assert_eq!(
            check("REX.W + 03 /r", &[0x03, 0xc1]),
            MachineCodeMatch::MissingRexPrefix
        );
        assert_eq!(
            check("REX.W + 03 /r", &[0x41, 0x03, 0xc1]),
            MachineCodeMatch::MissingRexW
        );
        assert_eq!(check("REX.R 0F 20 /r", &[0x41, 0x0f, 0x20, 0xc0]), MachineCodeMatch::MissingRexR);
    }

    #[test]
    fn vex_three_and_two_byte() {
        assert_eq!(
            check("VEX.256.66.0F38.W0 13 /r", &[0xc4, 0xe2, 0x7d, 0x13, 0xea]),
            MachineCodeMatch::Match
        );
        assert_eq!(
            check("VEX.NDS.256.66.0F.WIG 58 /r", &[0xc5, 0x65, 0x58, 0xf1]),
            MachineCodeMatch::Match
        );
        assert_eq!(
            check("VEX.256.66.0F38.W0 13 /r", &[0xc5, 0x7d, 0x13, 0xea]),
            MachineCodeMatch::Unexpected2ByteVexPrefix
        );
        assert_eq!(
            check("VEX.128.66.0F38.W0 13 /r", &[0xc4, 0xe2, 0x7d, 0x13, 0xea]),
            MachineCodeMatch::WrongVexL
        );
        assert_eq!(
            check("VEX.256.F2.0F38.W0 13 /r", &[0xc4, 0xe2, 0x7d, 0x13, 0xea]),
            MachineCodeMatch::WrongVexPp
        );
        assert_eq!(
            check("VEX.256.66.0F3A.W0 13 /r", &[0xc4, 0xe2, 0x7d, 0x13, 0xea]),
            MachineCodeMatch::WrongVexMap
        );
        assert_eq!(
            check("VEX.256.66.0F38.W1 13 /r", &[0xc4, 0xe2, 0x7d, 0x13, 0xea]),
            MachineCodeMatch::WrongVexW
        );
        assert_eq!(
            check("VEX.256.66.0F38.W0 13 /r", &[0xc4, 0xe2, 0x7d]),
            MachineCodeMatch::TruncatedVexPrefix
        );
        assert_eq!(
            check("VEX.256.66.0F38.W0 13 /r", &[0x0f, 0x38, 0x13]),
            MachineCodeMatch::MissingVexPrefix
        );
    }

    #[test]
    fn evex() {
        let code = [0x62, 0x11, 0xe5, 0x28, 0x58, 0xf7];
        assert_eq!(check("EVEX.256.66.0F.W1 58 /r", &code), MachineCodeMatch::Match);
        assert_eq!(check("EVEX.512.66.0F.W1 58 /r", &code), MachineCodeMatch::WrongVexL);
        assert_eq!(check("EVEX.LLIG.66.0F.W1 58 /r", &code), MachineCodeMatch::Match);
        assert_eq!(
            check("EVEX.256.66.0F.W1 58 /r", &code[..4]),
            MachineCodeMatch::TruncatedEvexPrefix
        );
        assert_eq!(
            check("EVEX.256.66.0F.W1 58 /r", &[0x62, 0x19, 0xe5, 0x28, 0x58, 0xf7]),
            MachineCodeMatch::MalformedEvexPrefix
        );
        assert_eq!(
            check("EVEX.256.66.0F.W1 58 /r", &[0xc5, 0x65, 0x58, 0xf1]),
            MachineCodeMatch::MissingEvexPrefix
        );
    }

    #[test]
    fn modrm_constraints() {
        assert_eq!(check("80 /2 ib", &[0x80, 0xd1, 0x80]), MachineCodeMatch::Match);
        assert_eq!(check("80 /2 ib", &[0x80]), MachineCodeMatch::MissingModRm);
        assert_eq!(
            check("F3 0F 38 DD 11:rrr:bbb", &[0xf3, 0x0f, 0x38, 0xdd, 0x01]),
            MachineCodeMatch::WrongModRmMod
        );
        assert_eq!(
            check("F3 0F 38 DD !(11):rrr:bbb", &[0xf3, 0x0f, 0x38, 0xdd, 0xc1]),
            MachineCodeMatch::WrongModRmMod
        );
        assert_eq!(
            check("F3 0F 38 DD 11:rrr:101", &[0xf3, 0x0f, 0x38, 0xdd, 0xc1]),
            MachineCodeMatch::WrongModRmRm
        );
    }

    #[test]
    fn implied_immediate_after_addressing() {
        let syntax = "0F 0F /r B4";
        assert_eq!(check(syntax, &[0x0f, 0x0f, 0xc1, 0xb4]), MachineCodeMatch::Match);
        // disp8
        assert_eq!(
            check(syntax, &[0x0f, 0x0f, 0x41, 0x10, 0xb4]),
            MachineCodeMatch::Match
        );
        // SIB + disp32
        assert_eq!(
            check(syntax, &[0x0f, 0x0f, 0x84, 0x24, 1, 2, 3, 4, 0xb4]),
            MachineCodeMatch::Match
        );
        assert_eq!(
            check(syntax, &[0x0f, 0x0f, 0xc1, 0xb5]),
            MachineCodeMatch::WrongImpliedImmediate
        );
        assert_eq!(
            check(syntax, &[0x0f, 0x0f, 0x05, 1, 2]),
            MachineCodeMatch::MissingImpliedImmediate
        );
        assert_eq!(
            check(syntax, &[0x0f, 0x0f, 0x04]),
            MachineCodeMatch::MissingImpliedImmediate
        );
    }

    #[test]
    fn truncation_classification() {
        assert!(MachineCodeMatch::MissingModRm.is_truncation());
        assert!(!MachineCodeMatch::WrongOpcode.is_truncation());
        assert!(!MachineCodeMatch::Match.is_truncation());
    }

    #[test]
    fn outcome_names_round_trip() {
        for m in MachineCodeMatch::ALL {
            assert_eq!(m.as_str().parse::<MachineCodeMatch>(), Ok(m));
        }
        assert_eq!(MachineCodeMatch::MissingRexW.to_string(), "missing REX.W");
    }

    #[test]
    fn rounding_form_skips_length() {
        let mut enc = parse_encoding("EVEX.512.66.0F.W1 58 /r").unwrap();
        let code = [0x62, 0xf1, 0xf5, 0x18, 0x58, 0xc2];
        assert_eq!(enc.matches_machine_code(&code), MachineCodeMatch::WrongVexL);
        enc.rounding = true;
        assert_eq!(enc.matches_machine_code(&code), MachineCodeMatch::Match);
    }
}
