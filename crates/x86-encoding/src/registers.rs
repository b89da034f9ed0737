//! Register table.
//!
//! Every register that an instruction parameter can name, with the numbers
//! used to place it in ModR/M, VEX.vvvv, EVEX and `/is4` fields.

use core::fmt;
use core::str::FromStr;

use crate::error::DecodeError;

/// Register class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterType {
    /// AL..R15, in every width.
    GeneralPurpose,
    /// ES, CS, SS, DS, FS, GS.
    Segment,
    /// The x87 FPU stack, ST(0)..ST(7).
    X87,
    /// CR0..CR8.
    Control,
    /// DR0..DR7.
    Debug,
    /// AVX-512 opmask registers K0..K7.
    Opmask,
    /// MM0..MM7.
    Mmx,
    /// XMM0..XMM31.
    Xmm,
    /// YMM0..YMM31.
    Ymm,
    /// ZMM0..ZMM31.
    Zmm,
}

impl RegisterType {
    /// All register classes.
    pub const ALL: [RegisterType; 10] = [
        RegisterType::GeneralPurpose,
        RegisterType::Segment,
        RegisterType::X87,
        RegisterType::Control,
        RegisterType::Debug,
        RegisterType::Opmask,
        RegisterType::Mmx,
        RegisterType::Xmm,
        RegisterType::Ymm,
        RegisterType::Zmm,
    ];

    /// Human-readable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            RegisterType::GeneralPurpose => "general purpose register",
            RegisterType::Segment => "segment register",
            RegisterType::X87 => "x87 register",
            RegisterType::Control => "control register",
            RegisterType::Debug => "debug register",
            RegisterType::Opmask => "opmask register",
            RegisterType::Mmx => "MMX register",
            RegisterType::Xmm => "XMM register",
            RegisterType::Ymm => "YMM register",
            RegisterType::Zmm => "ZMM register",
        }
    }
}

impl fmt::Display for RegisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegisterType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegisterType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownName {
                what: "register type",
                name: s.into(),
            })
    }
}

/// How a register is placed in a ModR/M-style field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEncoding {
    /// The register needs a REX prefix (R8..R15, SPL..DIL, XMM8..).
    pub rex: bool,
    /// Bit 3 of the register number (REX.R/B, inverted in VEX/EVEX).
    pub extended: bool,
    /// Bit 4 of the register number (EVEX.R'/V', inverted on the wire).
    pub high: bool,
    /// The low three bits.
    pub bits: u8,
}

/// One architectural register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register {
    /// Canonical lower-case name.
    pub name: &'static str,
    /// Register class.
    pub kind: RegisterType,
    /// Width in bits.
    pub bits: u16,
    /// Encoding number for ModR/M.reg, VEX.vvvv and `/is4` (up to 5 bits).
    pub reg: u8,
    /// Encoding number when used as a memory base.
    pub addr: u8,
    /// Minimum CPU mode in bits (64 for long-mode-only registers), or 0.
    pub min_mode: u8,
    /// Only reachable with an EVEX prefix.
    pub evex: bool,
    /// Alternative spellings.
    pub aliases: &'static [&'static str],
}

impl Register {
    const fn new(name: &'static str, kind: RegisterType, bits: u16, reg: u8) -> Self {
        Register {
            name,
            kind,
            bits,
            reg,
            addr: reg,
            min_mode: 0,
            evex: false,
            aliases: &[],
        }
    }

    const fn with_addr(self, addr: u8) -> Self {
        Register { addr, ..self }
    }

    const fn long_mode(self) -> Self {
        Register {
            min_mode: 64,
            ..self
        }
    }

    const fn evex_only(self) -> Self {
        Register { evex: true, ..self }
    }

    const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Register { aliases, ..self }
    }

    /// SPL, BPL, SIL and DIL share numbers with AH..BH and are only
    /// selected when a REX prefix is present.
    pub fn is_rex_byte_register(&self) -> bool {
        self.kind == RegisterType::GeneralPurpose
            && self.bits == 8
            && self.min_mode == 64
            && self.reg < 8
    }

    /// AH, CH, DH and BH, which cannot be encoded alongside a REX prefix.
    pub fn is_high_byte(&self) -> bool {
        self.kind == RegisterType::GeneralPurpose
            && self.bits == 8
            && self.min_mode == 0
            && self.reg >= 4
    }

    /// Placement in ModR/M.reg or ModR/M.rm.
    pub fn modrm(&self) -> FieldEncoding {
        FieldEncoding {
            rex: self.reg > 7 || self.is_rex_byte_register(),
            extended: self.reg & 0b01000 != 0,
            high: self.reg & 0b10000 != 0,
            bits: self.reg & 0b111,
        }
    }

    /// Placement as a memory base register.
    pub fn base(&self) -> FieldEncoding {
        FieldEncoding {
            rex: self.addr > 7,
            extended: self.addr & 0b01000 != 0,
            high: false,
            bits: self.addr & 0b111,
        }
    }

    /// The inverted VEX.vvvv value and the EVEX.V' bit as stored on the wire.
    pub fn vex_vvvv(&self) -> (bool, u8) {
        (self.reg < 16, !self.reg & 0xf)
    }

    /// The register placed in the high nibble of a `/is4` immediate.
    pub fn vex_is4(&self) -> u8 {
        self.reg << 4
    }

    /// Whether `name` is this register's name or one of its aliases
    /// (ASCII case-insensitive).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Looks a register up by name or alias.
pub fn register(name: &str) -> Option<&'static Register> {
    REGISTERS.iter().find(|r| r.is_named(name))
}

// 8-bit general purpose registers.
pub const AL: Register = Register::new("al", RegisterType::GeneralPurpose, 8, 0x0);
pub const CL: Register = Register::new("cl", RegisterType::GeneralPurpose, 8, 0x1);
pub const DL: Register = Register::new("dl", RegisterType::GeneralPurpose, 8, 0x2);
pub const BL: Register = Register::new("bl", RegisterType::GeneralPurpose, 8, 0x3);
pub const AH: Register = Register::new("ah", RegisterType::GeneralPurpose, 8, 0x4);
pub const CH: Register = Register::new("ch", RegisterType::GeneralPurpose, 8, 0x5);
pub const DH: Register = Register::new("dh", RegisterType::GeneralPurpose, 8, 0x6);
pub const BH: Register = Register::new("bh", RegisterType::GeneralPurpose, 8, 0x7);
pub const SPL: Register = Register::new("spl", RegisterType::GeneralPurpose, 8, 0x4).long_mode();
pub const BPL: Register = Register::new("bpl", RegisterType::GeneralPurpose, 8, 0x5).long_mode();
pub const SIL: Register = Register::new("sil", RegisterType::GeneralPurpose, 8, 0x6).long_mode();
pub const DIL: Register = Register::new("dil", RegisterType::GeneralPurpose, 8, 0x7).long_mode();
pub const R8L: Register = Register::new("r8l", RegisterType::GeneralPurpose, 8, 0x8).long_mode().with_aliases(&["r8b"]);
pub const R9L: Register = Register::new("r9l", RegisterType::GeneralPurpose, 8, 0x9).long_mode().with_aliases(&["r9b"]);
pub const R10L: Register = Register::new("r10l", RegisterType::GeneralPurpose, 8, 0xa).long_mode().with_aliases(&["r10b"]);
pub const R11L: Register = Register::new("r11l", RegisterType::GeneralPurpose, 8, 0xb).long_mode().with_aliases(&["r11b"]);
pub const R12L: Register = Register::new("r12l", RegisterType::GeneralPurpose, 8, 0xc).long_mode().with_aliases(&["r12b"]);
pub const R13L: Register = Register::new("r13l", RegisterType::GeneralPurpose, 8, 0xd).long_mode().with_aliases(&["r13b"]);
pub const R14L: Register = Register::new("r14l", RegisterType::GeneralPurpose, 8, 0xe).long_mode().with_aliases(&["r14b"]);
pub const R15L: Register = Register::new("r15l", RegisterType::GeneralPurpose, 8, 0xf).long_mode().with_aliases(&["r15b"]);

// 16-bit general purpose registers.
pub const AX: Register = Register::new("ax", RegisterType::GeneralPurpose, 16, 0x0);
pub const CX: Register = Register::new("cx", RegisterType::GeneralPurpose, 16, 0x1);
pub const DX: Register = Register::new("dx", RegisterType::GeneralPurpose, 16, 0x2);
pub const BX: Register = Register::new("bx", RegisterType::GeneralPurpose, 16, 0x3);
pub const SP: Register = Register::new("sp", RegisterType::GeneralPurpose, 16, 0x4);
pub const BP: Register = Register::new("bp", RegisterType::GeneralPurpose, 16, 0x5);
pub const SI: Register = Register::new("si", RegisterType::GeneralPurpose, 16, 0x6);
pub const DI: Register = Register::new("di", RegisterType::GeneralPurpose, 16, 0x7);
pub const R8W: Register = Register::new("r8w", RegisterType::GeneralPurpose, 16, 0x8).long_mode();
pub const R9W: Register = Register::new("r9w", RegisterType::GeneralPurpose, 16, 0x9).long_mode();
pub const R10W: Register = Register::new("r10w", RegisterType::GeneralPurpose, 16, 0xa).long_mode();
pub const R11W: Register = Register::new("r11w", RegisterType::GeneralPurpose, 16, 0xb).long_mode();
pub const R12W: Register = Register::new("r12w", RegisterType::GeneralPurpose, 16, 0xc).long_mode();
pub const R13W: Register = Register::new("r13w", RegisterType::GeneralPurpose, 16, 0xd).long_mode();
pub const R14W: Register = Register::new("r14w", RegisterType::GeneralPurpose, 16, 0xe).long_mode();
pub const R15W: Register = Register::new("r15w", RegisterType::GeneralPurpose, 16, 0xf).long_mode();

// 32-bit general purpose registers.
pub const EAX: Register = Register::new("eax", RegisterType::GeneralPurpose, 32, 0x0);
pub const ECX: Register = Register::new("ecx", RegisterType::GeneralPurpose, 32, 0x1);
pub const EDX: Register = Register::new("edx", RegisterType::GeneralPurpose, 32, 0x2);
pub const EBX: Register = Register::new("ebx", RegisterType::GeneralPurpose, 32, 0x3);
pub const ESP: Register = Register::new("esp", RegisterType::GeneralPurpose, 32, 0x4);
pub const EBP: Register = Register::new("ebp", RegisterType::GeneralPurpose, 32, 0x5);
pub const ESI: Register = Register::new("esi", RegisterType::GeneralPurpose, 32, 0x6);
pub const EDI: Register = Register::new("edi", RegisterType::GeneralPurpose, 32, 0x7);
pub const R8D: Register = Register::new("r8d", RegisterType::GeneralPurpose, 32, 0x8).long_mode();
pub const R9D: Register = Register::new("r9d", RegisterType::GeneralPurpose, 32, 0x9).long_mode();
pub const R10D: Register = Register::new("r10d", RegisterType::GeneralPurpose, 32, 0xa).long_mode();
pub const R11D: Register = Register::new("r11d", RegisterType::GeneralPurpose, 32, 0xb).long_mode();
pub const R12D: Register = Register::new("r12d", RegisterType::GeneralPurpose, 32, 0xc).long_mode();
pub const R13D: Register = Register::new("r13d", RegisterType::GeneralPurpose, 32, 0xd).long_mode();
pub const R14D: Register = Register::new("r14d", RegisterType::GeneralPurpose, 32, 0xe).long_mode();
pub const R15D: Register = Register::new("r15d", RegisterType::GeneralPurpose, 32, 0xf).long_mode();

// 64-bit general purpose registers.
pub const RAX: Register = Register::new("rax", RegisterType::GeneralPurpose, 64, 0x0).long_mode();
pub const RCX: Register = Register::new("rcx", RegisterType::GeneralPurpose, 64, 0x1).long_mode();
pub const RDX: Register = Register::new("rdx", RegisterType::GeneralPurpose, 64, 0x2).long_mode();
pub const RBX: Register = Register::new("rbx", RegisterType::GeneralPurpose, 64, 0x3).long_mode();
pub const RSP: Register = Register::new("rsp", RegisterType::GeneralPurpose, 64, 0x4).long_mode();
pub const RBP: Register = Register::new("rbp", RegisterType::GeneralPurpose, 64, 0x5).long_mode();
pub const RSI: Register = Register::new("rsi", RegisterType::GeneralPurpose, 64, 0x6).long_mode();
pub const RDI: Register = Register::new("rdi", RegisterType::GeneralPurpose, 64, 0x7).long_mode();
pub const R8: Register = Register::new("r8", RegisterType::GeneralPurpose, 64, 0x8).long_mode();
pub const R9: Register = Register::new("r9", RegisterType::GeneralPurpose, 64, 0x9).long_mode();
pub const R10: Register = Register::new("r10", RegisterType::GeneralPurpose, 64, 0xa).long_mode();
pub const R11: Register = Register::new("r11", RegisterType::GeneralPurpose, 64, 0xb).long_mode();
pub const R12: Register = Register::new("r12", RegisterType::GeneralPurpose, 64, 0xc).long_mode();
pub const R13: Register = Register::new("r13", RegisterType::GeneralPurpose, 64, 0xd).long_mode();
pub const R14: Register = Register::new("r14", RegisterType::GeneralPurpose, 64, 0xe).long_mode();
pub const R15: Register = Register::new("r15", RegisterType::GeneralPurpose, 64, 0xf).long_mode();

// Segment registers.
pub const ES: Register = Register::new("es", RegisterType::Segment, 16, 0x0);
pub const CS: Register = Register::new("cs", RegisterType::Segment, 16, 0x1);
pub const SS: Register = Register::new("ss", RegisterType::Segment, 16, 0x2);
pub const DS: Register = Register::new("ds", RegisterType::Segment, 16, 0x3);
pub const FS: Register = Register::new("fs", RegisterType::Segment, 16, 0x4);
pub const GS: Register = Register::new("gs", RegisterType::Segment, 16, 0x5);

// x87 stack registers.
pub const ST0: Register = Register::new("st0", RegisterType::X87, 80, 0x0);
pub const ST1: Register = Register::new("st1", RegisterType::X87, 80, 0x1);
pub const ST2: Register = Register::new("st2", RegisterType::X87, 80, 0x2);
pub const ST3: Register = Register::new("st3", RegisterType::X87, 80, 0x3);
pub const ST4: Register = Register::new("st4", RegisterType::X87, 80, 0x4);
pub const ST5: Register = Register::new("st5", RegisterType::X87, 80, 0x5);
pub const ST6: Register = Register::new("st6", RegisterType::X87, 80, 0x6);
pub const ST7: Register = Register::new("st7", RegisterType::X87, 80, 0x7);

// Control registers.
pub const CR0: Register = Register::new("cr0", RegisterType::Control, 64, 0x0);
pub const CR1: Register = Register::new("cr1", RegisterType::Control, 64, 0x1);
pub const CR2: Register = Register::new("cr2", RegisterType::Control, 64, 0x2);
pub const CR3: Register = Register::new("cr3", RegisterType::Control, 64, 0x3);
pub const CR4: Register = Register::new("cr4", RegisterType::Control, 64, 0x4);
pub const CR5: Register = Register::new("cr5", RegisterType::Control, 64, 0x5);
pub const CR6: Register = Register::new("cr6", RegisterType::Control, 64, 0x6);
pub const CR7: Register = Register::new("cr7", RegisterType::Control, 64, 0x7);
pub const CR8: Register = Register::new("cr8", RegisterType::Control, 64, 0x8).long_mode();

// Debug registers.
pub const DR0: Register = Register::new("dr0", RegisterType::Debug, 64, 0x0);
pub const DR1: Register = Register::new("dr1", RegisterType::Debug, 64, 0x1);
pub const DR2: Register = Register::new("dr2", RegisterType::Debug, 64, 0x2);
pub const DR3: Register = Register::new("dr3", RegisterType::Debug, 64, 0x3);
pub const DR4: Register = Register::new("dr4", RegisterType::Debug, 64, 0x4);
pub const DR5: Register = Register::new("dr5", RegisterType::Debug, 64, 0x5);
pub const DR6: Register = Register::new("dr6", RegisterType::Debug, 64, 0x6);
pub const DR7: Register = Register::new("dr7", RegisterType::Debug, 64, 0x7);

// Opmask registers.
pub const K0: Register = Register::new("k0", RegisterType::Opmask, 64, 0x0);
pub const K1: Register = Register::new("k1", RegisterType::Opmask, 64, 0x1);
pub const K2: Register = Register::new("k2", RegisterType::Opmask, 64, 0x2);
pub const K3: Register = Register::new("k3", RegisterType::Opmask, 64, 0x3);
pub const K4: Register = Register::new("k4", RegisterType::Opmask, 64, 0x4);
pub const K5: Register = Register::new("k5", RegisterType::Opmask, 64, 0x5);
pub const K6: Register = Register::new("k6", RegisterType::Opmask, 64, 0x6);
pub const K7: Register = Register::new("k7", RegisterType::Opmask, 64, 0x7);

// MMX registers.
pub const MM0: Register = Register::new("mm0", RegisterType::Mmx, 64, 0x0).with_aliases(&["mmx0"]);
pub const MM1: Register = Register::new("mm1", RegisterType::Mmx, 64, 0x1).with_aliases(&["mmx1"]);
pub const MM2: Register = Register::new("mm2", RegisterType::Mmx, 64, 0x2).with_aliases(&["mmx2"]);
pub const MM3: Register = Register::new("mm3", RegisterType::Mmx, 64, 0x3).with_aliases(&["mmx3"]);
pub const MM4: Register = Register::new("mm4", RegisterType::Mmx, 64, 0x4).with_aliases(&["mmx4"]);
pub const MM5: Register = Register::new("mm5", RegisterType::Mmx, 64, 0x5).with_aliases(&["mmx5"]);
pub const MM6: Register = Register::new("mm6", RegisterType::Mmx, 64, 0x6).with_aliases(&["mmx6"]);
pub const MM7: Register = Register::new("mm7", RegisterType::Mmx, 64, 0x7).with_aliases(&["mmx7"]);

// 128-bit XMM registers.
pub const XMM0: Register = Register::new("xmm0", RegisterType::Xmm, 128, 0x0);
pub const XMM1: Register = Register::new("xmm1", RegisterType::Xmm, 128, 0x1);
pub const XMM2: Register = Register::new("xmm2", RegisterType::Xmm, 128, 0x2);
pub const XMM3: Register = Register::new("xmm3", RegisterType::Xmm, 128, 0x3);
pub const XMM4: Register = Register::new("xmm4", RegisterType::Xmm, 128, 0x4);
pub const XMM5: Register = Register::new("xmm5", RegisterType::Xmm, 128, 0x5);
pub const XMM6: Register = Register::new("xmm6", RegisterType::Xmm, 128, 0x6);
pub const XMM7: Register = Register::new("xmm7", RegisterType::Xmm, 128, 0x7);
pub const XMM8: Register = Register::new("xmm8", RegisterType::Xmm, 128, 0x8).long_mode();
pub const XMM9: Register = Register::new("xmm9", RegisterType::Xmm, 128, 0x9).long_mode();
pub const XMM10: Register = Register::new("xmm10", RegisterType::Xmm, 128, 0xa).long_mode();
pub const XMM11: Register = Register::new("xmm11", RegisterType::Xmm, 128, 0xb).long_mode();
pub const XMM12: Register = Register::new("xmm12", RegisterType::Xmm, 128, 0xc).long_mode();
pub const XMM13: Register = Register::new("xmm13", RegisterType::Xmm, 128, 0xd).long_mode();
pub const XMM14: Register = Register::new("xmm14", RegisterType::Xmm, 128, 0xe).long_mode();
pub const XMM15: Register = Register::new("xmm15", RegisterType::Xmm, 128, 0xf).long_mode();
pub const XMM16: Register = Register::new("xmm16", RegisterType::Xmm, 128, 0x10).long_mode().evex_only();
pub const XMM17: Register = Register::new("xmm17", RegisterType::Xmm, 128, 0x11).long_mode().evex_only();
pub const XMM18: Register = Register::new("xmm18", RegisterType::Xmm, 128, 0x12).long_mode().evex_only();
pub const XMM19: Register = Register::new("xmm19", RegisterType::Xmm, 128, 0x13).long_mode().evex_only();
pub const XMM20: Register = Register::new("xmm20", RegisterType::Xmm, 128, 0x14).long_mode().evex_only();
pub const XMM21: Register = Register::new("xmm21", RegisterType::Xmm, 128, 0x15).long_mode().evex_only();
pub const XMM22: Register = Register::new("xmm22", RegisterType::Xmm, 128, 0x16).long_mode().evex_only();
pub const XMM23: Register = Register::new("xmm23", RegisterType::Xmm, 128, 0x17).long_mode().evex_only();
pub const XMM24: Register = Register::new("xmm24", RegisterType::Xmm, 128, 0x18).long_mode().evex_only();
pub const XMM25: Register = Register::new("xmm25", RegisterType::Xmm, 128, 0x19).long_mode().evex_only();
pub const XMM26: Register = Register::new("xmm26", RegisterType::Xmm, 128, 0x1a).long_mode().evex_only();
pub const XMM27: Register = Register::new("xmm27", RegisterType::Xmm, 128, 0x1b).long_mode().evex_only();
pub const XMM28: Register = Register::new("xmm28", RegisterType::Xmm, 128, 0x1c).long_mode().evex_only();
pub const XMM29: Register = Register::new("xmm29", RegisterType::Xmm, 128, 0x1d).long_mode().evex_only();
pub const XMM30: Register = Register::new("xmm30", RegisterType::Xmm, 128, 0x1e).long_mode().evex_only();
pub const XMM31: Register = Register::new("xmm31", RegisterType::Xmm, 128, 0x1f).long_mode().evex_only();

// 256-bit YMM registers.
pub const YMM0: Register = Register::new("ymm0", RegisterType::Ymm, 256, 0x0);
pub const YMM1: Register = Register::new("ymm1", RegisterType::Ymm, 256, 0x1);
pub const YMM2: Register = Register::new("ymm2", RegisterType::Ymm, 256, 0x2);
pub const YMM3: Register = Register::new("ymm3", RegisterType::Ymm, 256, 0x3);
pub const YMM4: Register = Register::new("ymm4", RegisterType::Ymm, 256, 0x4);
pub const YMM5: Register = Register::new("ymm5", RegisterType::Ymm, 256, 0x5);
pub const YMM6: Register = Register::new("ymm6", RegisterType::Ymm, 256, 0x6);
pub const YMM7: Register = Register::new("ymm7", RegisterType::Ymm, 256, 0x7);
pub const YMM8: Register = Register::new("ymm8", RegisterType::Ymm, 256, 0x8).long_mode();
pub const YMM9: Register = Register::new("ymm9", RegisterType::Ymm, 256, 0x9).long_mode();
pub const YMM10: Register = Register::new("ymm10", RegisterType::Ymm, 256, 0xa).long_mode();
pub const YMM11: Register = Register::new("ymm11", RegisterType::Ymm, 256, 0xb).long_mode();
pub const YMM12: Register = Register::new("ymm12", RegisterType::Ymm, 256, 0xc).long_mode();
pub const YMM13: Register = Register::new("ymm13", RegisterType::Ymm, 256, 0xd).long_mode();
pub const YMM14: Register = Register::new("ymm14", RegisterType::Ymm, 256, 0xe).long_mode();
pub const YMM15: Register = Register::new("ymm15", RegisterType::Ymm, 256, 0xf).long_mode();
pub const YMM16: Register = Register::new("ymm16", RegisterType::Ymm, 256, 0x10).long_mode().evex_only();
pub const YMM17: Register = Register::new("ymm17", RegisterType::Ymm, 256, 0x11).long_mode().evex_only();
pub const YMM18: Register = Register::new("ymm18", RegisterType::Ymm, 256, 0x12).long_mode().evex_only();
pub const YMM19: Register = Register::new("ymm19", RegisterType::Ymm, 256, 0x13).long_mode().evex_only();
pub const YMM20: Register = Register::new("ymm20", RegisterType::Ymm, 256, 0x14).long_mode().evex_only();
pub const YMM21: Register = Register::new("ymm21", RegisterType::Ymm, 256, 0x15).long_mode().evex_only();
pub const YMM22: Register = Register::new("ymm22", RegisterType::Ymm, 256, 0x16).long_mode().evex_only();
pub const YMM23: Register = Register::new("ymm23", RegisterType::Ymm, 256, 0x17).long_mode().evex_only();
pub const YMM24: Register = Register::new("ymm24", RegisterType::Ymm, 256, 0x18).long_mode().evex_only();
pub const YMM25: Register = Register::new("ymm25", RegisterType::Ymm, 256, 0x19).long_mode().evex_only();
pub const YMM26: Register = Register::new("ymm26", RegisterType::Ymm, 256, 0x1a).long_mode().evex_only();
pub const YMM27: Register = Register::new("ymm27", RegisterType::Ymm, 256, 0x1b).long_mode().evex_only();
pub const YMM28: Register = Register::new("ymm28", RegisterType::Ymm, 256, 0x1c).long_mode().evex_only();
pub const YMM29: Register = Register::new("ymm29", RegisterType::Ymm, 256, 0x1d).long_mode().evex_only();
pub const YMM30: Register = Register::new("ymm30", RegisterType::Ymm, 256, 0x1e).long_mode().evex_only();
pub const YMM31: Register = Register::new("ymm31", RegisterType::Ymm, 256, 0x1f).long_mode().evex_only();

// 512-bit ZMM registers.
pub const ZMM0: Register = Register::new("zmm0", RegisterType::Zmm, 512, 0x0).long_mode().evex_only();
pub const ZMM1: Register = Register::new("zmm1", RegisterType::Zmm, 512, 0x1).long_mode().evex_only();
pub const ZMM2: Register = Register::new("zmm2", RegisterType::Zmm, 512, 0x2).long_mode().evex_only();
pub const ZMM3: Register = Register::new("zmm3", RegisterType::Zmm, 512, 0x3).long_mode().evex_only();
pub const ZMM4: Register = Register::new("zmm4", RegisterType::Zmm, 512, 0x4).long_mode().evex_only();
pub const ZMM5: Register = Register::new("zmm5", RegisterType::Zmm, 512, 0x5).long_mode().evex_only();
pub const ZMM6: Register = Register::new("zmm6", RegisterType::Zmm, 512, 0x6).long_mode().evex_only();
pub const ZMM7: Register = Register::new("zmm7", RegisterType::Zmm, 512, 0x7).long_mode().evex_only();
pub const ZMM8: Register = Register::new("zmm8", RegisterType::Zmm, 512, 0x8).long_mode().evex_only();
pub const ZMM9: Register = Register::new("zmm9", RegisterType::Zmm, 512, 0x9).long_mode().evex_only();
pub const ZMM10: Register = Register::new("zmm10", RegisterType::Zmm, 512, 0xa).long_mode().evex_only();
pub const ZMM11: Register = Register::new("zmm11", RegisterType::Zmm, 512, 0xb).long_mode().evex_only();
pub const ZMM12: Register = Register::new("zmm12", RegisterType::Zmm, 512, 0xc).long_mode().evex_only();
pub const ZMM13: Register = Register::new("zmm13", RegisterType::Zmm, 512, 0xd).long_mode().evex_only();
pub const ZMM14: Register = Register::new("zmm14", RegisterType::Zmm, 512, 0xe).long_mode().evex_only();
pub const ZMM15: Register = Register::new("zmm15", RegisterType::Zmm, 512, 0xf).long_mode().evex_only();
pub const ZMM16: Register = Register::new("zmm16", RegisterType::Zmm, 512, 0x10).long_mode().evex_only();
pub const ZMM17: Register = Register::new("zmm17", RegisterType::Zmm, 512, 0x11).long_mode().evex_only();
pub const ZMM18: Register = Register::new("zmm18", RegisterType::Zmm, 512, 0x12).long_mode().evex_only();
pub const ZMM19: Register = Register::new("zmm19", RegisterType::Zmm, 512, 0x13).long_mode().evex_only();
pub const ZMM20: Register = Register::new("zmm20", RegisterType::Zmm, 512, 0x14).long_mode().evex_only();
pub const ZMM21: Register = Register::new("zmm21", RegisterType::Zmm, 512, 0x15).long_mode().evex_only();
pub const ZMM22: Register = Register::new("zmm22", RegisterType::Zmm, 512, 0x16).long_mode().evex_only();
pub const ZMM23: Register = Register::new("zmm23", RegisterType::Zmm, 512, 0x17).long_mode().evex_only();
pub const ZMM24: Register = Register::new("zmm24", RegisterType::Zmm, 512, 0x18).long_mode().evex_only();
pub const ZMM25: Register = Register::new("zmm25", RegisterType::Zmm, 512, 0x19).long_mode().evex_only();
pub const ZMM26: Register = Register::new("zmm26", RegisterType::Zmm, 512, 0x1a).long_mode().evex_only();
pub const ZMM27: Register = Register::new("zmm27", RegisterType::Zmm, 512, 0x1b).long_mode().evex_only();
pub const ZMM28: Register = Register::new("zmm28", RegisterType::Zmm, 512, 0x1c).long_mode().evex_only();
pub const ZMM29: Register = Register::new("zmm29", RegisterType::Zmm, 512, 0x1d).long_mode().evex_only();
pub const ZMM30: Register = Register::new("zmm30", RegisterType::Zmm, 512, 0x1e).long_mode().evex_only();
pub const ZMM31: Register = Register::new("zmm31", RegisterType::Zmm, 512, 0x1f).long_mode().evex_only();

/// Every register in the table.
pub static REGISTERS: &[Register] = &[
    AL, CL, DL, BL, AH, CH, DH, BH, SPL, BPL, SIL, DIL, R8L, R9L, R10L, R11L, R12L, R13L, R14L,
    R15L, AX, CX, DX, BX, SP, BP, SI, DI, R8W, R9W, R10W, R11W, R12W, R13W, R14W, R15W, EAX,
    ECX, EDX, EBX, ESP, EBP, ESI, EDI, R8D, R9D, R10D, R11D, R12D, R13D, R14D, R15D, RAX, RCX,
    RDX, RBX, RSP, RBP, RSI, RDI, R8, R9, R10, R11, R12, R13, R14, R15, ES, CS, SS, DS, FS, GS,
    ST0, ST1, ST2, ST3, ST4, ST5, ST6, ST7, CR0, CR1, CR2, CR3, CR4, CR5, CR6, CR7, CR8, DR0,
    DR1, DR2, DR3, DR4, DR5, DR6, DR7, K0, K1, K2, K3, K4, K5, K6, K7, MM0, MM1, MM2, MM3, MM4,
    MM5, MM6, MM7, XMM0, XMM1, XMM2, XMM3, XMM4, XMM5, XMM6, XMM7, XMM8, XMM9, XMM10, XMM11,
    XMM12, XMM13, XMM14, XMM15, XMM16, XMM17, XMM18, XMM19, XMM20, XMM21, XMM22, XMM23, XMM24,
    XMM25, XMM26, XMM27, XMM28, XMM29, XMM30, XMM31, YMM0, YMM1, YMM2, YMM3, YMM4, YMM5, YMM6,
    YMM7, YMM8, YMM9, YMM10, YMM11, YMM12, YMM13, YMM14, YMM15, YMM16, YMM17, YMM18, YMM19,
    YMM20, YMM21, YMM22, YMM23, YMM24, YMM25, YMM26, YMM27, YMM28, YMM29, YMM30, YMM31, ZMM0,
    ZMM1, ZMM2, ZMM3, ZMM4, ZMM5, ZMM6, ZMM7, ZMM8, ZMM9, ZMM10, ZMM11, ZMM12, ZMM13, ZMM14,
    ZMM15, ZMM16, ZMM17, ZMM18, ZMM19, ZMM20, ZMM21, ZMM22, ZMM23, ZMM24, ZMM25, ZMM26, ZMM27,
    ZMM28, ZMM29, ZMM30, ZMM31,
];

/// 8-bit general purpose registers.
pub const GENERAL_PURPOSE_8: &[Register] = &[
    AL, CL, DL, BL, AH, CH, DH, BH, SPL, BPL, SIL, DIL, R8L, R9L, R10L, R11L, R12L, R13L, R14L,
    R15L,
];

/// 16-bit general purpose registers.
pub const GENERAL_PURPOSE_16: &[Register] = &[
    AX, CX, DX, BX, SP, BP, SI, DI, R8W, R9W, R10W, R11W, R12W, R13W, R14W, R15W,
];

/// 32-bit general purpose registers.
pub const GENERAL_PURPOSE_32: &[Register] = &[
    EAX, ECX, EDX, EBX, ESP, EBP, ESI, EDI, R8D, R9D, R10D, R11D, R12D, R13D, R14D, R15D,
];

/// 64-bit general purpose registers.
pub const GENERAL_PURPOSE_64: &[Register] = &[
    RAX, RCX, RDX, RBX, RSP, RBP, RSI, RDI, R8, R9, R10, R11, R12, R13, R14, R15,
];

/// Segment registers.
pub const SEGMENT: &[Register] = &[ES, CS, SS, DS, FS, GS];

/// x87 stack indices.
pub const STACK_INDICES: &[Register] = &[ST0, ST1, ST2, ST3, ST4, ST5, ST6, ST7];

/// CR0..CR7, selected through ModR/M.reg.
pub const CONTROL: &[Register] = &[CR0, CR1, CR2, CR3, CR4, CR5, CR6, CR7];

/// DR0..DR7.
pub const DEBUG: &[Register] = &[DR0, DR1, DR2, DR3, DR4, DR5, DR6, DR7];

/// Opmask registers.
pub const OPMASK: &[Register] = &[K0, K1, K2, K3, K4, K5, K6, K7];

/// MMX registers.
pub const MMX: &[Register] = &[MM0, MM1, MM2, MM3, MM4, MM5, MM6, MM7];

/// 128-bit vector registers.
pub const XMM: &[Register] = &[
    XMM0, XMM1, XMM2, XMM3, XMM4, XMM5, XMM6, XMM7, XMM8, XMM9, XMM10, XMM11, XMM12, XMM13,
    XMM14, XMM15, XMM16, XMM17, XMM18, XMM19, XMM20, XMM21, XMM22, XMM23, XMM24, XMM25, XMM26,
    XMM27, XMM28, XMM29, XMM30, XMM31,
];

/// 256-bit vector registers.
pub const YMM: &[Register] = &[
    YMM0, YMM1, YMM2, YMM3, YMM4, YMM5, YMM6, YMM7, YMM8, YMM9, YMM10, YMM11, YMM12, YMM13,
    YMM14, YMM15, YMM16, YMM17, YMM18, YMM19, YMM20, YMM21, YMM22, YMM23, YMM24, YMM25, YMM26,
    YMM27, YMM28, YMM29, YMM30, YMM31,
];

/// 512-bit vector registers.
pub const ZMM: &[Register] = &[
    ZMM0, ZMM1, ZMM2, ZMM3, ZMM4, ZMM5, ZMM6, ZMM7, ZMM8, ZMM9, ZMM10, ZMM11, ZMM12, ZMM13,
    ZMM14, ZMM15, ZMM16, ZMM17, ZMM18, ZMM19, ZMM20, ZMM21, ZMM22, ZMM23, ZMM24, ZMM25, ZMM26,
    ZMM27, ZMM28, ZMM29, ZMM30, ZMM31,
];
