//! Structured form of an instruction encoding string.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::{DecodeError, EncodingError};
use crate::prefix::Prefix;

// ─── Vector prefix fields ───────────────────────────────────────────────

/// Which vector prefix family, if any, the encoding requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VectorKind {
    /// No VEX or EVEX prefix.
    #[default]
    None,
    /// A 2- or 3-byte VEX prefix.
    Vex,
    /// A 4-byte EVEX prefix.
    Evex,
}

impl VectorKind {
    /// Every variant.
    pub const ALL: [VectorKind; 3] = [VectorKind::None, VectorKind::Vex, VectorKind::Evex];

    /// Canonical spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            VectorKind::None => "none",
            VectorKind::Vex => "VEX",
            VectorKind::Evex => "EVEX",
        }
    }
}

/// Vector length (VEX.L, EVEX.L'L).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VectorLength {
    /// 128 bits, `L0`, `LZ`.
    #[default]
    L128,
    /// 256 bits, `L1`.
    L256,
    /// 512 bits, EVEX only.
    L512,
    /// `LIG`/`LLIG`: the length bits are ignored.
    Ignored,
}

impl VectorLength {
    /// Every variant.
    pub const ALL: [VectorLength; 4] = [
        VectorLength::L128,
        VectorLength::L256,
        VectorLength::L512,
        VectorLength::Ignored,
    ];

    /// Canonical spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            VectorLength::L128 => "128",
            VectorLength::L256 => "256",
            VectorLength::L512 => "512",
            VectorLength::Ignored => "LIG",
        }
    }

    /// The L'L bits for this length, or `None` when ignored.
    pub const fn bits(self) -> Option<u8> {
        match self {
            VectorLength::L128 => Some(0b00),
            VectorLength::L256 => Some(0b01),
            VectorLength::L512 => Some(0b10),
            VectorLength::Ignored => None,
        }
    }
}

/// The legacy prefix implied by VEX.pp/EVEX.pp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImpliedPrefix {
    /// `pp = 00`.
    #[default]
    None,
    /// `pp = 01`.
    P66,
    /// `pp = 10`.
    PF3,
    /// `pp = 11`.
    PF2,
}

impl ImpliedPrefix {
    /// Every variant.
    pub const ALL: [ImpliedPrefix; 4] = [
        ImpliedPrefix::None,
        ImpliedPrefix::P66,
        ImpliedPrefix::PF3,
        ImpliedPrefix::PF2,
    ];

    /// Canonical spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            ImpliedPrefix::None => "NP",
            ImpliedPrefix::P66 => "66",
            ImpliedPrefix::PF3 => "F3",
            ImpliedPrefix::PF2 => "F2",
        }
    }

    /// The 2-bit pp value.
    pub const fn bits(self) -> u8 {
        match self {
            ImpliedPrefix::None => 0b00,
            ImpliedPrefix::P66 => 0b01,
            ImpliedPrefix::PF3 => 0b10,
            ImpliedPrefix::PF2 => 0b11,
        }
    }
}

/// Opcode map selected by VEX.m-mmmm/EVEX.mmm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpcodeMap {
    /// `0F`.
    Map0F = 1,
    /// `0F 38`.
    Map0F38 = 2,
    /// `0F 3A`.
    Map0F3A = 3,
    /// EVEX map 5.
    Map5 = 5,
    /// EVEX map 6.
    Map6 = 6,
}

impl OpcodeMap {
    /// Every variant.
    pub const ALL: [OpcodeMap; 5] = [
        OpcodeMap::Map0F,
        OpcodeMap::Map0F38,
        OpcodeMap::Map0F3A,
        OpcodeMap::Map5,
        OpcodeMap::Map6,
    ];

    /// Canonical spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            OpcodeMap::Map0F => "0F",
            OpcodeMap::Map0F38 => "0F38",
            OpcodeMap::Map0F3A => "0F3A",
            OpcodeMap::Map5 => "MAP5",
            OpcodeMap::Map6 => "MAP6",
        }
    }

    /// The m-mmmm value.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Legacy escape bytes that select this map without a vector prefix.
    pub const fn escape(self) -> &'static [u8] {
        match self {
            OpcodeMap::Map0F => &[0x0f],
            OpcodeMap::Map0F38 => &[0x0f, 0x38],
            OpcodeMap::Map0F3A => &[0x0f, 0x3a],
            OpcodeMap::Map5 | OpcodeMap::Map6 => &[],
        }
    }

    /// Only reachable through EVEX.
    pub const fn is_evex_only(self) -> bool {
        matches!(self, OpcodeMap::Map5 | OpcodeMap::Map6)
    }
}

/// VEX.W/EVEX.W requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VectorWidth {
    /// W clear.
    #[default]
    W0,
    /// W set.
    W1,
    /// `WIG`: W is ignored.
    Ignored,
}

impl VectorWidth {
    /// Every variant.
    pub const ALL: [VectorWidth; 3] = [VectorWidth::W0, VectorWidth::W1, VectorWidth::Ignored];

    /// Canonical spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            VectorWidth::W0 => "W0",
            VectorWidth::W1 => "W1",
            VectorWidth::Ignored => "WIG",
        }
    }

    /// The required W bit, or `None` when ignored.
    pub const fn bit(self) -> Option<bool> {
        match self {
            VectorWidth::W0 => Some(false),
            VectorWidth::W1 => Some(true),
            VectorWidth::Ignored => None,
        }
    }
}

macro_rules! named_enum {
    ($($ty:ident => $what:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = DecodeError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::ALL
                        .into_iter()
                        .find(|v| v.as_str() == s)
                        .ok_or_else(|| DecodeError::UnknownName {
                            what: $what,
                            name: s.into(),
                        })
                }
            }
        )*
    };
}

pub(crate) use named_enum;

named_enum! {
    VectorKind => "vector prefix kind",
    VectorLength => "vector length",
    ImpliedPrefix => "implied prefix",
    OpcodeMap => "opcode map",
    VectorWidth => "vector width",
}

// ─── ModR/M constraints ─────────────────────────────────────────────────

/// Constraint on one ModR/M field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModRmField {
    /// Any value.
    #[default]
    Any,
    /// Exactly this value.
    Equals(u8),
    /// Anything but this value (`!(11)`).
    NotEquals(u8),
}

impl ModRmField {
    /// Whether `value` satisfies the constraint.
    #[inline]
    pub fn matches(self, value: u8) -> bool {
        match self {
            ModRmField::Any => true,
            ModRmField::Equals(v) => value == v,
            ModRmField::NotEquals(v) => value != v,
        }
    }

    /// Unconstrained.
    #[inline]
    pub fn is_any(self) -> bool {
        self == ModRmField::Any
    }

    /// Whether both constraints can hold at once.
    pub(crate) fn compatible(self, other: ModRmField) -> bool {
        match (self, other) {
            (ModRmField::Any, _) | (_, ModRmField::Any) => true,
            (ModRmField::Equals(a), ModRmField::Equals(b)) => a == b,
            (ModRmField::Equals(a), ModRmField::NotEquals(b))
            | (ModRmField::NotEquals(b), ModRmField::Equals(a)) => a != b,
            // One excluded value is all a field can hold.
            (ModRmField::NotEquals(a), ModRmField::NotEquals(b)) => a == b,
        }
    }

    /// The narrower of two compatible constraints.
    pub(crate) fn narrow(self, other: ModRmField) -> ModRmField {
        match (self, other) {
            (ModRmField::Any, c) | (c, ModRmField::Any) => c,
            (c @ ModRmField::Equals(_), _) | (_, c @ ModRmField::Equals(_)) => c,
            (c, _) => c,
        }
    }
}

// ─── Encoding ───────────────────────────────────────────────────────────

/// One instruction encoding, as written in the Intel manuals' opcode column
/// (for example `VEX.128.66.0F38.W0 13 /r`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoding {
    /// The text the encoding was parsed from.
    pub syntax: String,

    /// Opcodes that precede every prefix, such as `9B` (FWAIT).
    pub prefix_opcodes: Vec<u8>,
    /// `NP`: non-mandatory 66, F2 and F3 prefixes are forbidden.
    pub no_vex_prefixes: bool,
    /// `NFx`: non-mandatory F2 and F3 prefixes are forbidden.
    pub no_rep_prefixes: bool,
    /// Legacy prefixes that are part of the opcode, in source order.
    pub mandatory_prefixes: Vec<Prefix>,

    /// A REX prefix is always required.
    pub rex: bool,
    /// A REX prefix with R set is required.
    pub rex_r: bool,
    /// A REX prefix with W set is required.
    pub rex_w: bool,

    /// Vector prefix family.
    pub vector: VectorKind,
    /// VEX.L / EVEX.L'L.
    pub vector_length: VectorLength,
    /// VEX.pp / EVEX.pp.
    pub implied_prefix: ImpliedPrefix,
    /// VEX.m-mmmm / EVEX.mmm. Always set when `vector` is not `None`.
    pub opcode_map: Option<OpcodeMap>,
    /// VEX.W / EVEX.W.
    pub vector_width: VectorWidth,
    /// A register is carried in the upper nibble of an 8-bit immediate.
    pub is4: bool,
    /// EVEX opmask support.
    pub mask: bool,
    /// EVEX zeroing-masking support.
    pub zero: bool,
    /// EVEX embedded rounding support. With EVEX.b set on a register form,
    /// L'L is the rounding mode and the vector length goes unchecked.
    pub rounding: bool,
    /// EVEX suppress-all-exceptions support. Relaxes the length check the
    /// same way as `rounding`.
    pub suppress: bool,

    /// Opcode bytes, excluding any vector prefix.
    pub opcode: Vec<u8>,
    /// Index of the opcode byte whose low 3 bits name a register (`+rb`).
    pub register_modifier: Option<usize>,
    /// Index of the opcode byte whose low 3 bits name an x87 stack slot (`+i`).
    pub stack_index: Option<usize>,
    /// A code offset follows the opcode.
    pub code_offset: bool,

    /// A ModR/M byte is always present.
    pub modrm: bool,
    /// Constraint on ModR/M.mod.
    pub modrm_mod: ModRmField,
    /// Constraint on ModR/M.reg.
    pub modrm_reg: ModRmField,
    /// Constraint on ModR/M.r/m.
    pub modrm_rm: ModRmField,

    /// The memory operand uses VSIB addressing.
    pub vsib: bool,

    /// Immediate bytes baked into the opcode (3DNow! suffixes and similar).
    pub implied_immediate: Vec<u8>,
}

impl Encoding {
    /// An encoding with no fields set, to be filled in by the parser.
    pub(crate) fn blank(syntax: &str) -> Encoding {
        Encoding {
            syntax: syntax.into(),
            prefix_opcodes: Vec::new(),
            no_vex_prefixes: false,
            no_rep_prefixes: false,
            mandatory_prefixes: Vec::new(),
            rex: false,
            rex_r: false,
            rex_w: false,
            vector: VectorKind::None,
            vector_length: VectorLength::default(),
            implied_prefix: ImpliedPrefix::default(),
            opcode_map: None,
            vector_width: VectorWidth::default(),
            is4: false,
            mask: false,
            zero: false,
            rounding: false,
            suppress: false,
            opcode: Vec::new(),
            register_modifier: None,
            stack_index: None,
            code_offset: false,
            modrm: false,
            modrm_mod: ModRmField::Any,
            modrm_reg: ModRmField::Any,
            modrm_rm: ModRmField::Any,
            vsib: false,
            implied_immediate: Vec::new(),
        }
    }

    /// Vector size in bits: 0 without a vector prefix, otherwise 128, 256
    /// or 512. An ignored length reports 128.
    pub fn vector_size(&self) -> u16 {
        if self.vector == VectorKind::None {
            return 0;
        }
        match self.vector_length {
            VectorLength::L128 | VectorLength::Ignored => 128,
            VectorLength::L256 => 256,
            VectorLength::L512 => 512,
        }
    }

    /// The opcode byte that may be offset by a register or stack index.
    pub fn modified_opcode(&self) -> Option<usize> {
        self.register_modifier.or(self.stack_index)
    }

    /// Whether any ModR/M byte is expected.
    pub fn needs_modrm(&self) -> bool {
        self.modrm
            || !self.modrm_mod.is_any()
            || !self.modrm_reg.is_any()
            || !self.modrm_rm.is_any()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.syntax)
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_encoding(s)
    }
}
