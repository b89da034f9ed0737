//! Operand descriptors for x86 instruction forms.
//!
//! Every operand slot in an instruction listing (`r/m32`, `imm8`, `xmm1`,
//! `m512byte`, ...) maps to one [`Parameter`]: what kind of value it takes,
//! where in the machine code it lives, its width, and which registers it may
//! name. The table is fixed at compile time.

use core::fmt;
use core::str::FromStr;

use crate::encoding::named_enum;
use crate::error::DecodeError;
use crate::registers::*;

use ParameterEncoding as Enc;
use ParameterType as Kind;

/// What kind of value an operand accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// A signed integer literal.
    SignedImmediate,
    /// An unsigned integer literal.
    UnsignedImmediate,
    /// A register selection.
    Register,
    /// An x87 stack index.
    StackIndex,
    /// An address relative to the instruction pointer.
    RelativeAddress,
    /// A segment selector and offset pair.
    FarPointer,
    /// A memory address expression.
    Memory,
    /// A bare memory offset (`moffs`).
    MemoryOffset,
    /// The implicit destination of a string instruction.
    StringDestination,
    /// The implicit source of a string instruction.
    StringSource,
}

impl ParameterType {
    /// Every variant.
    pub const ALL: [ParameterType; 10] = [
        ParameterType::SignedImmediate,
        ParameterType::UnsignedImmediate,
        ParameterType::Register,
        ParameterType::StackIndex,
        ParameterType::RelativeAddress,
        ParameterType::FarPointer,
        ParameterType::Memory,
        ParameterType::MemoryOffset,
        ParameterType::StringDestination,
        ParameterType::StringSource,
    ];

    /// Human-readable name, also used in JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParameterType::SignedImmediate => "signed immediate",
            ParameterType::UnsignedImmediate => "unsigned immediate",
            ParameterType::Register => "register",
            ParameterType::StackIndex => "stack index",
            ParameterType::RelativeAddress => "relative address",
            ParameterType::FarPointer => "far pointer",
            ParameterType::Memory => "memory",
            ParameterType::MemoryOffset => "memory offset",
            ParameterType::StringDestination => "string destination",
            ParameterType::StringSource => "string source",
        }
    }

    /// Stable identifier used by generated tables.
    pub const fn uid(self) -> &'static str {
        match self {
            ParameterType::SignedImmediate => "TypeSignedImmediate",
            ParameterType::UnsignedImmediate => "TypeUnsignedImmediate",
            ParameterType::Register => "TypeRegister",
            ParameterType::StackIndex => "TypeStackIndex",
            ParameterType::RelativeAddress => "TypeRelativeAddress",
            ParameterType::FarPointer => "TypeFarPointer",
            ParameterType::Memory => "TypeMemory",
            ParameterType::MemoryOffset => "TypeMemoryOffset",
            ParameterType::StringDestination => "TypeStringDst",
            ParameterType::StringSource => "TypeStringSrc",
        }
    }

    /// Inverse of [`ParameterType::uid`].
    pub fn from_uid(uid: &str) -> Option<ParameterType> {
        Self::ALL.into_iter().find(|t| t.uid() == uid)
    }

    /// Whether the operand is an integer literal.
    pub fn is_immediate(self) -> bool {
        matches!(
            self,
            ParameterType::SignedImmediate | ParameterType::UnsignedImmediate
        )
    }
}

/// Where an operand is placed in the machine code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterEncoding {
    /// Written in assembly but implied by the opcode.
    None,
    /// VEX.vvvv (or EVEX.V'vvvv).
    VexVvvv,
    /// Added to the last opcode byte (`+rb`, `+rw`, ...).
    RegisterModifier,
    /// Added to the last opcode byte as an x87 stack index (`+i`).
    StackIndex,
    /// A code offset after the opcode.
    CodeOffset,
    /// ModR/M.reg.
    ModRmReg,
    /// ModR/M.r/m.
    ModRmRm,
    /// The SIB byte.
    Sib,
    /// The displacement field.
    Displacement,
    /// The immediate field.
    Immediate,
    /// The high nibble of a trailing `/is4` byte.
    VexIs4,
}

impl ParameterEncoding {
    /// Every variant.
    pub const ALL: [ParameterEncoding; 11] = [
        ParameterEncoding::None,
        ParameterEncoding::VexVvvv,
        ParameterEncoding::RegisterModifier,
        ParameterEncoding::StackIndex,
        ParameterEncoding::CodeOffset,
        ParameterEncoding::ModRmReg,
        ParameterEncoding::ModRmRm,
        ParameterEncoding::Sib,
        ParameterEncoding::Displacement,
        ParameterEncoding::Immediate,
        ParameterEncoding::VexIs4,
    ];

    /// Human-readable name, also used in JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParameterEncoding::None => "none",
            ParameterEncoding::VexVvvv => "VEX.vvvv",
            ParameterEncoding::RegisterModifier => "register modifier",
            ParameterEncoding::StackIndex => "stack index",
            ParameterEncoding::CodeOffset => "code offset",
            ParameterEncoding::ModRmReg => "ModR/M reg",
            ParameterEncoding::ModRmRm => "ModR/M r/m",
            ParameterEncoding::Sib => "SIB",
            ParameterEncoding::Displacement => "displacement",
            ParameterEncoding::Immediate => "immediate",
            ParameterEncoding::VexIs4 => "VEX /is4",
        }
    }

    /// Stable identifier used by generated tables.
    pub const fn uid(self) -> &'static str {
        match self {
            ParameterEncoding::None => "EncodingNone",
            ParameterEncoding::VexVvvv => "EncodingVEXvvvv",
            ParameterEncoding::RegisterModifier => "EncodingRegisterModifier",
            ParameterEncoding::StackIndex => "EncodingStackIndex",
            ParameterEncoding::CodeOffset => "EncodingCodeOffset",
            ParameterEncoding::ModRmReg => "EncodingModRMreg",
            ParameterEncoding::ModRmRm => "EncodingModRMrm",
            ParameterEncoding::Sib => "EncodingSIB",
            ParameterEncoding::Displacement => "EncodingDisplacement",
            ParameterEncoding::Immediate => "EncodingImmediate",
            ParameterEncoding::VexIs4 => "EncodingVEXis4",
        }
    }

    /// Inverse of [`ParameterEncoding::uid`].
    pub fn from_uid(uid: &str) -> Option<ParameterEncoding> {
        Self::ALL.into_iter().find(|e| e.uid() == uid)
    }
}

named_enum! {
    ParameterType => "parameter type",
    ParameterEncoding => "parameter encoding",
}

// ─── Parameter ──────────────────────────────────────────────────────────

/// One operand form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// What the operand accepts.
    pub kind: ParameterType,
    /// Where the operand is encoded.
    pub encoding: ParameterEncoding,
    /// Unique identifier.
    pub uid: &'static str,
    /// Operand size in bits.
    pub bits: u16,
    /// Intel-syntax spelling, unique across the table.
    pub syntax: &'static str,
    /// Acceptable registers, if the operand names one.
    pub registers: &'static [Register],
}

impl Parameter {
    const fn new(
        kind: ParameterType,
        encoding: ParameterEncoding,
        uid: &'static str,
        bits: u16,
        syntax: &'static str,
        registers: &'static [Register],
    ) -> Self {
        Parameter {
            kind,
            encoding,
            uid,
            bits,
            syntax,
            registers,
        }
    }

    const fn register(
        encoding: ParameterEncoding,
        uid: &'static str,
        bits: u16,
        syntax: &'static str,
        registers: &'static [Register],
    ) -> Self {
        Self::new(ParameterType::Register, encoding, uid, bits, syntax, registers)
    }

    const fn memory(
        encoding: ParameterEncoding,
        uid: &'static str,
        bits: u16,
        syntax: &'static str,
    ) -> Self {
        Self::new(ParameterType::Memory, encoding, uid, bits, syntax, &[])
    }

    /// The unique identifier.
    pub fn uid(&self) -> &'static str {
        self.uid
    }

    /// Whether `reg` is one of the acceptable registers.
    pub fn accepts(&self, reg: &Register) -> bool {
        self.registers.contains(reg)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.syntax, self.encoding)
    }
}

// ─── Fixed operands (not encoded) ───────────────────────────────────────

pub static PARAM_AL: Parameter = Parameter::register(Enc::None, "AL", 8, "AL", &[AL]);
pub static PARAM_CL: Parameter = Parameter::register(Enc::None, "CL", 8, "CL", &[CL]);
pub static PARAM_AX: Parameter = Parameter::register(Enc::None, "AX", 16, "AX", &[AX]);
pub static PARAM_DX: Parameter = Parameter::register(Enc::None, "DX", 16, "DX", &[DX]);
pub static PARAM_EAX: Parameter = Parameter::register(Enc::None, "EAX", 32, "EAX", &[EAX]);
pub static PARAM_ECX: Parameter = Parameter::register(Enc::None, "ECX", 32, "ECX", &[ECX]);
pub static PARAM_RAX: Parameter = Parameter::register(Enc::None, "RAX", 64, "RAX", &[RAX]);
pub static PARAM_XMM0: Parameter = Parameter::register(Enc::None, "XMM0", 128, "XMM0", &[XMM0]);
pub static PARAM_ES: Parameter = Parameter::register(Enc::None, "ES", 16, "ES", &[ES]);
pub static PARAM_CS: Parameter = Parameter::register(Enc::None, "CS", 16, "CS", &[CS]);
pub static PARAM_SS: Parameter = Parameter::register(Enc::None, "SS", 16, "SS", &[SS]);
pub static PARAM_DS: Parameter = Parameter::register(Enc::None, "DS", 16, "DS", &[DS]);
pub static PARAM_FS: Parameter = Parameter::register(Enc::None, "FS", 16, "FS", &[FS]);
pub static PARAM_GS: Parameter = Parameter::register(Enc::None, "GS", 16, "GS", &[GS]);
pub static PARAM_CR8: Parameter = Parameter::register(Enc::None, "CR8", 64, "CR8", &[CR8]);
pub static PARAM_ST: Parameter = Parameter::new(
    Kind::StackIndex,
    Enc::None,
    "ST",
    80,
    "ST",
    &[ST0],
);
pub static PARAM_STR_DST8: Parameter = Parameter::new(
    Kind::StringDestination,
    Enc::None,
    "StrDst8",
    8,
    "[es:edi:8]",
    &[DI, EDI, RDI],
);
pub static PARAM_STR_DST16: Parameter = Parameter::new(
    Kind::StringDestination,
    Enc::None,
    "StrDst16",
    16,
    "[es:edi:16]",
    &[DI, EDI, RDI],
);
pub static PARAM_STR_DST32: Parameter = Parameter::new(
    Kind::StringDestination,
    Enc::None,
    "StrDst32",
    32,
    "[es:edi:32]",
    &[DI, EDI, RDI],
);
pub static PARAM_STR_DST64: Parameter = Parameter::new(
    Kind::StringDestination,
    Enc::None,
    "StrDst64",
    64,
    "[rdi:64]",
    &[RDI],
);
pub static PARAM_STR_SRC8: Parameter = Parameter::new(
    Kind::StringSource,
    Enc::None,
    "StrSrc8",
    8,
    "[ds:esi:8]",
    &[SI, ESI, RSI],
);
pub static PARAM_STR_SRC16: Parameter = Parameter::new(
    Kind::StringSource,
    Enc::None,
    "StrSrc16",
    16,
    "[ds:esi:16]",
    &[SI, ESI, RSI],
);
pub static PARAM_STR_SRC32: Parameter = Parameter::new(
    Kind::StringSource,
    Enc::None,
    "StrSrc32",
    32,
    "[ds:esi:32]",
    &[SI, ESI, RSI],
);
pub static PARAM_STR_SRC64: Parameter = Parameter::new(
    Kind::StringSource,
    Enc::None,
    "StrSrc64",
    64,
    "[rsi:64]",
    &[RSI],
);
pub static PARAM_0: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "0", 0, "0", &[]);
pub static PARAM_1: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "1", 0, "1", &[]);
pub static PARAM_2: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "2", 0, "2", &[]);
pub static PARAM_3: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "3", 0, "3", &[]);
pub static PARAM_4: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "4", 0, "4", &[]);
pub static PARAM_5: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "5", 0, "5", &[]);
pub static PARAM_6: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "6", 0, "6", &[]);
pub static PARAM_7: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "7", 0, "7", &[]);
pub static PARAM_8: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "8", 0, "8", &[]);
pub static PARAM_9: Parameter = Parameter::new(Kind::SignedImmediate, Enc::None, "9", 0, "9", &[]);

// ─── VEX.vvvv ───────────────────────────────────────────────────────────

pub static PARAM_R8V: Parameter = Parameter::register(
    Enc::VexVvvv,
    "R8V",
    8,
    "r8V",
    GENERAL_PURPOSE_8,
);
pub static PARAM_R16V: Parameter = Parameter::register(
    Enc::VexVvvv,
    "R16V",
    16,
    "r16V",
    GENERAL_PURPOSE_16,
);
pub static PARAM_R32V: Parameter = Parameter::register(
    Enc::VexVvvv,
    "R32V",
    32,
    "r32V",
    GENERAL_PURPOSE_32,
);
pub static PARAM_R64V: Parameter = Parameter::register(
    Enc::VexVvvv,
    "R64V",
    64,
    "r64V",
    GENERAL_PURPOSE_64,
);
pub static PARAM_KV: Parameter = Parameter::register(Enc::VexVvvv, "KV", 16, "kV", OPMASK);
pub static PARAM_XMMV: Parameter = Parameter::register(Enc::VexVvvv, "XMMV", 128, "xmmV", XMM);
pub static PARAM_YMMV: Parameter = Parameter::register(Enc::VexVvvv, "YMMV", 256, "ymmV", YMM);
pub static PARAM_ZMMV: Parameter = Parameter::register(Enc::VexVvvv, "ZMMV", 512, "zmmV", ZMM);

// ─── Opcode register modifier ───────────────────────────────────────────

pub static PARAM_R8OP: Parameter = Parameter::register(
    Enc::RegisterModifier,
    "R8op",
    8,
    "r8op",
    GENERAL_PURPOSE_8,
);
pub static PARAM_R16OP: Parameter = Parameter::register(
    Enc::RegisterModifier,
    "R16op",
    16,
    "r16op",
    GENERAL_PURPOSE_16,
);
pub static PARAM_R32OP: Parameter = Parameter::register(
    Enc::RegisterModifier,
    "R32op",
    32,
    "r32op",
    GENERAL_PURPOSE_32,
);
pub static PARAM_R64OP: Parameter = Parameter::register(
    Enc::RegisterModifier,
    "R64op",
    64,
    "r64op",
    GENERAL_PURPOSE_64,
);

// ─── x87 stack index ────────────────────────────────────────────────────

pub static PARAM_STI: Parameter = Parameter::new(
    Kind::StackIndex,
    Enc::StackIndex,
    "STi",
    80,
    "ST(i)",
    STACK_INDICES,
);

// ─── Code offsets ───────────────────────────────────────────────────────

pub static PARAM_REL8: Parameter = Parameter::new(
    Kind::RelativeAddress,
    Enc::CodeOffset,
    "Rel8",
    8,
    "rel8",
    &[],
);
pub static PARAM_REL16: Parameter = Parameter::new(
    Kind::RelativeAddress,
    Enc::CodeOffset,
    "Rel16",
    16,
    "rel16",
    &[],
);
pub static PARAM_REL32: Parameter = Parameter::new(
    Kind::RelativeAddress,
    Enc::CodeOffset,
    "Rel32",
    32,
    "rel32",
    &[],
);
pub static PARAM_PTR16V16: Parameter = Parameter::new(
    Kind::FarPointer,
    Enc::CodeOffset,
    "Ptr16v16",
    32,
    "ptr16:16",
    &[],
);
pub static PARAM_PTR16V32: Parameter = Parameter::new(
    Kind::FarPointer,
    Enc::CodeOffset,
    "Ptr16v32",
    48,
    "ptr16:32",
    &[],
);

// ─── ModR/M.reg ─────────────────────────────────────────────────────────

pub static PARAM_R8: Parameter = Parameter::register(
    Enc::ModRmReg,
    "R8",
    8,
    "r8",
    GENERAL_PURPOSE_8,
);
pub static PARAM_R16: Parameter = Parameter::register(
    Enc::ModRmReg,
    "R16",
    16,
    "r16",
    GENERAL_PURPOSE_16,
);
pub static PARAM_R32: Parameter = Parameter::register(
    Enc::ModRmReg,
    "R32",
    32,
    "r32",
    GENERAL_PURPOSE_32,
);
pub static PARAM_R64: Parameter = Parameter::register(
    Enc::ModRmReg,
    "R64",
    64,
    "r64",
    GENERAL_PURPOSE_64,
);
pub static PARAM_SREG: Parameter = Parameter::register(Enc::ModRmReg, "Sreg", 16, "Sreg", SEGMENT);
pub static PARAM_CR0_TO_CR7: Parameter = Parameter::register(
    Enc::ModRmReg,
    "CR0toCR7",
    64,
    "CR0-CR7",
    CONTROL,
);
pub static PARAM_DR0_TO_DR7: Parameter = Parameter::register(
    Enc::ModRmReg,
    "DR0toDR7",
    64,
    "DR0-DR7",
    DEBUG,
);
pub static PARAM_K1: Parameter = Parameter::register(Enc::ModRmReg, "K1", 16, "k1", OPMASK);
pub static PARAM_MM1: Parameter = Parameter::register(Enc::ModRmReg, "MM1", 64, "mm1", MMX);
pub static PARAM_XMM1: Parameter = Parameter::register(Enc::ModRmReg, "XMM1", 128, "xmm1", XMM);
pub static PARAM_YMM1: Parameter = Parameter::register(Enc::ModRmReg, "YMM1", 256, "ymm1", YMM);
pub static PARAM_ZMM1: Parameter = Parameter::register(Enc::ModRmReg, "ZMM1", 512, "zmm1", ZMM);

// ─── ModR/M.r/m ─────────────────────────────────────────────────────────

pub static PARAM_RMR8: Parameter = Parameter::register(
    Enc::ModRmRm,
    "Rmr8",
    8,
    "rmr8",
    GENERAL_PURPOSE_8,
);
pub static PARAM_RMR16: Parameter = Parameter::register(
    Enc::ModRmRm,
    "Rmr16",
    16,
    "rmr16",
    GENERAL_PURPOSE_16,
);
pub static PARAM_RMR32: Parameter = Parameter::register(
    Enc::ModRmRm,
    "Rmr32",
    32,
    "rmr32",
    GENERAL_PURPOSE_32,
);
pub static PARAM_RMR64: Parameter = Parameter::register(
    Enc::ModRmRm,
    "Rmr64",
    64,
    "rmr64",
    GENERAL_PURPOSE_64,
);
pub static PARAM_K2: Parameter = Parameter::register(Enc::ModRmRm, "K2", 16, "k2", OPMASK);
pub static PARAM_MM2: Parameter = Parameter::register(Enc::ModRmRm, "MM2", 64, "mm2", MMX);
pub static PARAM_XMM2: Parameter = Parameter::register(Enc::ModRmRm, "XMM2", 128, "xmm2", XMM);
pub static PARAM_YMM2: Parameter = Parameter::register(Enc::ModRmRm, "YMM2", 256, "ymm2", YMM);
pub static PARAM_ZMM2: Parameter = Parameter::register(Enc::ModRmRm, "ZMM2", 512, "zmm2", ZMM);
pub static PARAM_M: Parameter = Parameter::memory(Enc::ModRmRm, "M", 0, "m");
pub static PARAM_M8: Parameter = Parameter::memory(Enc::ModRmRm, "M8", 8, "m8");
pub static PARAM_M16: Parameter = Parameter::memory(Enc::ModRmRm, "M16", 16, "m16");
pub static PARAM_M16BCST: Parameter = Parameter::memory(Enc::ModRmRm, "M16bcst", 16, "m16bcst");
pub static PARAM_M32: Parameter = Parameter::memory(Enc::ModRmRm, "M32", 32, "m32");
pub static PARAM_M32BCST: Parameter = Parameter::memory(Enc::ModRmRm, "M32bcst", 32, "m32bcst");
pub static PARAM_M64: Parameter = Parameter::memory(Enc::ModRmRm, "M64", 64, "m64");
pub static PARAM_M64BCST: Parameter = Parameter::memory(Enc::ModRmRm, "M64bcst", 64, "m64bcst");
pub static PARAM_M80BCD: Parameter = Parameter::memory(Enc::ModRmRm, "M80bcd", 80, "m80bcd");
pub static PARAM_M80DEC: Parameter = Parameter::memory(Enc::ModRmRm, "M80dec", 80, "m80dec");
pub static PARAM_M128: Parameter = Parameter::memory(Enc::ModRmRm, "M128", 128, "m128");
pub static PARAM_M256: Parameter = Parameter::memory(Enc::ModRmRm, "M256", 256, "m256");
pub static PARAM_M384: Parameter = Parameter::memory(Enc::ModRmRm, "M384", 384, "m384");
pub static PARAM_M512: Parameter = Parameter::memory(Enc::ModRmRm, "M512", 512, "m512");
pub static PARAM_M512BYTE: Parameter = Parameter::memory(
    Enc::ModRmRm,
    "M512byte",
    4096,
    "m512byte",
);
pub static PARAM_M32FP: Parameter = Parameter::memory(Enc::ModRmRm, "M32fp", 32, "m32fp");
pub static PARAM_M64FP: Parameter = Parameter::memory(Enc::ModRmRm, "M64fp", 64, "m64fp");
pub static PARAM_M80FP: Parameter = Parameter::memory(Enc::ModRmRm, "M80fp", 80, "m80fp");
pub static PARAM_M16INT: Parameter = Parameter::memory(Enc::ModRmRm, "M16int", 16, "m16int");
pub static PARAM_M32INT: Parameter = Parameter::memory(Enc::ModRmRm, "M32int", 32, "m32int");
pub static PARAM_M64INT: Parameter = Parameter::memory(Enc::ModRmRm, "M64int", 64, "m64int");
pub static PARAM_M16V16: Parameter = Parameter::memory(Enc::ModRmRm, "M16v16", 32, "m16:16");
pub static PARAM_M16V32: Parameter = Parameter::memory(Enc::ModRmRm, "M16v32", 48, "m16:32");
pub static PARAM_M16V64: Parameter = Parameter::memory(Enc::ModRmRm, "M16v64", 80, "m16:64");
pub static PARAM_M16X16: Parameter = Parameter::memory(Enc::ModRmRm, "M16x16", 32, "m16&16");
pub static PARAM_M16X32: Parameter = Parameter::memory(Enc::ModRmRm, "M16x32", 48, "m16&32");
pub static PARAM_M16X64: Parameter = Parameter::memory(Enc::ModRmRm, "M16x64", 80, "m16&64");
pub static PARAM_M32X32: Parameter = Parameter::memory(Enc::ModRmRm, "M32x32", 64, "m32&32");
pub static PARAM_M2BYTE: Parameter = Parameter::memory(Enc::ModRmRm, "M2byte", 16, "m2byte");
pub static PARAM_M14L28BYTE: Parameter = Parameter::memory(
    Enc::ModRmRm,
    "M14l28byte",
    224,
    "m14/28byte",
);
pub static PARAM_M94L108BYTE: Parameter = Parameter::memory(
    Enc::ModRmRm,
    "M94l108byte",
    864,
    "m94/108byte",
);
pub static PARAM_VM32X: Parameter = Parameter::memory(Enc::Sib, "Vm32x", 32, "vm32x");
pub static PARAM_VM32Y: Parameter = Parameter::memory(Enc::Sib, "Vm32y", 32, "vm32y");
pub static PARAM_VM32Z: Parameter = Parameter::memory(Enc::Sib, "Vm32z", 32, "vm32z");
pub static PARAM_VM64X: Parameter = Parameter::memory(Enc::Sib, "Vm64x", 64, "vm64x");
pub static PARAM_VM64Y: Parameter = Parameter::memory(Enc::Sib, "Vm64y", 64, "vm64y");
pub static PARAM_VM64Z: Parameter = Parameter::memory(Enc::Sib, "Vm64z", 64, "vm64z");

// ─── Memory offsets (displacement only) ─────────────────────────────────

pub static PARAM_MOFFS8: Parameter = Parameter::new(
    Kind::MemoryOffset,
    Enc::Displacement,
    "Moffs8",
    8,
    "moffs8",
    &[],
);
pub static PARAM_MOFFS16: Parameter = Parameter::new(
    Kind::MemoryOffset,
    Enc::Displacement,
    "Moffs16",
    16,
    "moffs16",
    &[],
);
pub static PARAM_MOFFS32: Parameter = Parameter::new(
    Kind::MemoryOffset,
    Enc::Displacement,
    "Moffs32",
    32,
    "moffs32",
    &[],
);
pub static PARAM_MOFFS64: Parameter = Parameter::new(
    Kind::MemoryOffset,
    Enc::Displacement,
    "Moffs64",
    64,
    "moffs64",
    &[],
);

// ─── Immediates ─────────────────────────────────────────────────────────

pub static PARAM_IMM8: Parameter = Parameter::new(
    Kind::SignedImmediate,
    Enc::Immediate,
    "Imm8",
    8,
    "imm8",
    &[],
);
pub static PARAM_IMM16: Parameter = Parameter::new(
    Kind::SignedImmediate,
    Enc::Immediate,
    "Imm16",
    16,
    "imm16",
    &[],
);
pub static PARAM_IMM32: Parameter = Parameter::new(
    Kind::SignedImmediate,
    Enc::Immediate,
    "Imm32",
    32,
    "imm32",
    &[],
);
pub static PARAM_IMM64: Parameter = Parameter::new(
    Kind::SignedImmediate,
    Enc::Immediate,
    "Imm64",
    64,
    "imm64",
    &[],
);
pub static PARAM_IMM5U: Parameter = Parameter::new(
    Kind::UnsignedImmediate,
    Enc::Immediate,
    "Imm5u",
    5,
    "imm5u",
    &[],
);
pub static PARAM_IMM8U: Parameter = Parameter::new(
    Kind::UnsignedImmediate,
    Enc::Immediate,
    "Imm8u",
    8,
    "imm8u",
    &[],
);
pub static PARAM_IMM16U: Parameter = Parameter::new(
    Kind::UnsignedImmediate,
    Enc::Immediate,
    "Imm16u",
    16,
    "imm16u",
    &[],
);
pub static PARAM_IMM32U: Parameter = Parameter::new(
    Kind::UnsignedImmediate,
    Enc::Immediate,
    "Imm32u",
    32,
    "imm32u",
    &[],
);
pub static PARAM_IMM64U: Parameter = Parameter::new(
    Kind::UnsignedImmediate,
    Enc::Immediate,
    "Imm64u",
    64,
    "imm64u",
    &[],
);

// ─── VEX /is4 ───────────────────────────────────────────────────────────

pub static PARAM_XMMIH: Parameter = Parameter::register(Enc::VexIs4, "XMMIH", 128, "xmmIH", XMM);
pub static PARAM_YMMIH: Parameter = Parameter::register(Enc::VexIs4, "YMMIH", 256, "ymmIH", YMM);
pub static PARAM_ZMMIH: Parameter = Parameter::register(Enc::VexIs4, "ZMMIH", 512, "zmmIH", ZMM);

// ─── Lookup ─────────────────────────────────────────────────────────────

/// Every parameter, in table order.
pub static PARAMETERS: &[&Parameter] = &[
    &PARAM_AL, &PARAM_CL, &PARAM_AX, &PARAM_DX, &PARAM_EAX, &PARAM_ECX, &PARAM_RAX,
    &PARAM_XMM0, &PARAM_ES, &PARAM_CS, &PARAM_SS, &PARAM_DS, &PARAM_FS, &PARAM_GS, &PARAM_CR8,
    &PARAM_ST, &PARAM_STR_DST8, &PARAM_STR_DST16, &PARAM_STR_DST32, &PARAM_STR_DST64,
    &PARAM_STR_SRC8, &PARAM_STR_SRC16, &PARAM_STR_SRC32, &PARAM_STR_SRC64, &PARAM_0, &PARAM_1,
    &PARAM_2, &PARAM_3, &PARAM_4, &PARAM_5, &PARAM_6, &PARAM_7, &PARAM_8, &PARAM_9, &PARAM_R8V,
    &PARAM_R16V, &PARAM_R32V, &PARAM_R64V, &PARAM_KV, &PARAM_XMMV, &PARAM_YMMV, &PARAM_ZMMV,
    &PARAM_R8OP, &PARAM_R16OP, &PARAM_R32OP, &PARAM_R64OP, &PARAM_STI, &PARAM_REL8,
    &PARAM_REL16, &PARAM_REL32, &PARAM_PTR16V16, &PARAM_PTR16V32, &PARAM_R8, &PARAM_R16,
    &PARAM_R32, &PARAM_R64, &PARAM_SREG, &PARAM_CR0_TO_CR7, &PARAM_DR0_TO_DR7, &PARAM_K1,
    &PARAM_MM1, &PARAM_XMM1, &PARAM_YMM1, &PARAM_ZMM1, &PARAM_RMR8, &PARAM_RMR16, &PARAM_RMR32,
    &PARAM_RMR64, &PARAM_K2, &PARAM_MM2, &PARAM_XMM2, &PARAM_YMM2, &PARAM_ZMM2, &PARAM_M,
    &PARAM_M8, &PARAM_M16, &PARAM_M16BCST, &PARAM_M32, &PARAM_M32BCST, &PARAM_M64,
    &PARAM_M64BCST, &PARAM_M80BCD, &PARAM_M80DEC, &PARAM_M128, &PARAM_M256, &PARAM_M384,
    &PARAM_M512, &PARAM_M512BYTE, &PARAM_M32FP, &PARAM_M64FP, &PARAM_M80FP, &PARAM_M16INT,
    &PARAM_M32INT, &PARAM_M64INT, &PARAM_M16V16, &PARAM_M16V32, &PARAM_M16V64, &PARAM_M16X16,
    &PARAM_M16X32, &PARAM_M16X64, &PARAM_M32X32, &PARAM_M2BYTE, &PARAM_M14L28BYTE,
    &PARAM_M94L108BYTE, &PARAM_VM32X, &PARAM_VM32Y, &PARAM_VM32Z, &PARAM_VM64X, &PARAM_VM64Y,
    &PARAM_VM64Z, &PARAM_MOFFS8, &PARAM_MOFFS16, &PARAM_MOFFS32, &PARAM_MOFFS64, &PARAM_IMM8,
    &PARAM_IMM16, &PARAM_IMM32, &PARAM_IMM64, &PARAM_IMM5U, &PARAM_IMM8U, &PARAM_IMM16U,
    &PARAM_IMM32U, &PARAM_IMM64U, &PARAM_XMMIH, &PARAM_YMMIH, &PARAM_ZMMIH,
];

/// Looks a parameter up by its Intel-syntax spelling.
pub fn parameter(syntax: &str) -> Option<&'static Parameter> {
    PARAMETERS.iter().copied().find(|p| p.syntax == syntax)
}

/// Looks a parameter up by its unique identifier.
pub fn parameter_by_uid(uid: &str) -> Option<&'static Parameter> {
    PARAMETERS.iter().copied().find(|p| p.uid == uid)
}
