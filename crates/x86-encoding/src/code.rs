//! Machine-code assembly for a single instruction.
//!
//! [`Code`] holds each part of an instruction (prefixes, opcode, ModR/M,
//! operands) separately so callers can fill them in any order, then lays
//! them out in architectural order with [`Code::encode_to`] or
//! [`Code::to_bytes`].

use alloc::vec::Vec;
use core::fmt;

use crate::encoding::{Encoding, ModRmField, VectorKind, VectorLength, VectorWidth};
use crate::error::CodeError;
use crate::modrm::{ModRm, Sib};
use crate::prefix::{Evex, Prefix, Rex, Vex};

// ─── InstrBytes: stack-allocated instruction buffer ────────────────────

/// Fixed-capacity byte buffer for one instruction, kept on the stack.
#[derive(Clone, Copy)]
pub struct InstrBytes {
    data: [u8; InstrBytes::CAPACITY],
    len: u8,
}

impl InstrBytes {
    /// Room for the longest [`Code`] that can be built.
    pub const CAPACITY: usize = 48;

    /// Create an empty buffer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: [0; Self::CAPACITY],
            len: 0,
        }
    }

    /// Create a buffer pre-filled from a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `src` is longer than [`InstrBytes::CAPACITY`].
    #[inline]
    pub fn from_slice(src: &[u8]) -> Self {
        let mut buf = Self::new();
        buf.extend_from_slice(src);
        buf
    }

    /// Append a single byte.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is already full.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        assert!(
            self.len() < Self::CAPACITY,
            "InstrBytes overflow: cannot push beyond {} bytes",
            Self::CAPACITY
        );
        self.data[self.len as usize] = byte;
        self.len += 1;
    }

    /// Append a slice of bytes.
    ///
    /// # Panics
    ///
    /// Panics if appending would exceed the capacity.
    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        let start = self.len as usize;
        let end = start + bytes.len();
        assert!(
            end <= Self::CAPACITY,
            "InstrBytes overflow: {} + {} exceeds {}-byte capacity",
            start,
            bytes.len(),
            Self::CAPACITY
        );
        self.data[start..end].copy_from_slice(bytes);
        self.len = end as u8;
    }

    /// Number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes that can still be appended.
    #[inline]
    pub fn remaining(&self) -> usize {
        Self::CAPACITY - self.len()
    }

    /// Drop every byte.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Convert to a heap-allocated `Vec<u8>`.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_ref().to_vec()
    }
}

impl Default for InstrBytes {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::ops::Deref for InstrBytes {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }
}

impl AsRef<[u8]> for InstrBytes {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl fmt::Debug for InstrBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for InstrBytes {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for InstrBytes {}

impl PartialEq<[u8]> for InstrBytes {
    fn eq(&self, other: &[u8]) -> bool {
        **self == *other
    }
}

impl PartialEq<Vec<u8>> for InstrBytes {
    fn eq(&self, other: &Vec<u8>) -> bool {
        **self == **other
    }
}

// ─── Byte runs ──────────────────────────────────────────────────────────

/// A short run of bytes with a fixed upper bound.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Run<const N: usize> {
    data: [u8; N],
    len: u8,
}

impl<const N: usize> Run<N> {
    const fn new() -> Self {
        Run {
            data: [0; N],
            len: 0,
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    fn set(&mut self, field: &'static str, bytes: &[u8]) -> Result<(), CodeError> {
        if bytes.len() > N {
            return Err(CodeError::FieldTooLong {
                field,
                len: bytes.len(),
                max: N,
            });
        }
        *self = Self::new();
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len() as u8;
        Ok(())
    }

    fn push(&mut self, field: &'static str, byte: u8) -> Result<(), CodeError> {
        let len = self.len as usize;
        if len == N {
            return Err(CodeError::FieldTooLong {
                field,
                len: N + 1,
                max: N,
            });
        }
        self.data[len] = byte;
        self.len += 1;
        Ok(())
    }
}

impl<const N: usize> Default for Run<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Run<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// ─── Code ───────────────────────────────────────────────────────────────

/// The parts of one instruction's machine code.
///
/// Empty parts are omitted from the output. A REX, VEX or EVEX prefix is
/// emitted only when switched on (see [`Rex::is_on`], [`Vex::is_on`] and
/// [`Evex::is_on`]), and a VEX prefix uses the 2-byte form whenever it can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Code {
    prefix_opcodes: Run<4>,
    prefixes: Run<4>,
    /// REX prefix.
    pub rex: Rex,
    /// VEX prefix.
    pub vex: Vex,
    /// EVEX prefix.
    pub evex: Evex,
    opcode: Run<3>,
    code_offset: Run<8>,
    /// ModR/M byte, if present.
    pub modrm: Option<ModRm>,
    /// SIB byte, if present.
    pub sib: Option<Sib>,
    displacement: Run<8>,
    immediate: Run<8>,
}

impl Code {
    /// An empty instruction.
    pub fn new() -> Code {
        Code::default()
    }

    /// The skeleton machine code of `enc`: every fixed part filled in and
    /// every operand zeroed, picking the simplest addressing form that
    /// satisfies the ModR/M constraints.
    pub fn for_encoding(enc: &Encoding) -> Result<Code, CodeError> {
        let mut code = Code::new();
        code.prefix_opcodes.set("prefix opcodes", &enc.prefix_opcodes)?;
        for &prefix in &enc.mandatory_prefixes {
            code.add_prefix(prefix)?;
        }

        if enc.rex {
            code.rex.set_on();
        }
        if enc.rex_r {
            code.rex.set_r(true);
        }
        if enc.rex_w {
            code.rex.set_w(true);
        }

        let map = enc.opcode_map.map_or(0, |m| m.value());
        let w = enc.vector_width == VectorWidth::W1;
        match enc.vector {
            VectorKind::None => {}
            VectorKind::Vex => {
                code.vex = Vex::new(map);
                code.vex.set_w(w);
                code.vex.set_l(enc.vector_length == VectorLength::L256);
                code.vex.set_pp(enc.implied_prefix.bits());
            }
            VectorKind::Evex => {
                code.evex = Evex::new(map);
                code.evex.set_w(w);
                code.evex.set_ll(enc.vector_length.bits().unwrap_or(0));
                code.evex.set_pp(enc.implied_prefix.bits());
            }
        }

        code.set_opcode(&enc.opcode)?;
        if enc.code_offset {
            code.set_code_offset(&[0; 4])?;
        }

        if enc.needs_modrm() {
            let md = match enc.modrm_mod {
                ModRmField::Equals(md) => md,
                ModRmField::NotEquals(0b00) => 0b01,
                ModRmField::NotEquals(_) => 0b00,
                ModRmField::Any if enc.vsib => 0b00,
                ModRmField::Any => ModRm::MOD_REGISTER,
            };
            let reg = pick(enc.modrm_reg);
            let rm = match enc.modrm_rm {
                ModRmField::Any if enc.vsib => ModRm::RM_SIB,
                field => pick(field),
            };
            let modrm = ModRm::new(md, reg, rm);
            code.modrm = Some(modrm);
            if modrm.has_sib() {
                code.sib = Some(Sib::new(0, Sib::INDEX_NONE, 0));
            }
            let disp = modrm.displacement_len(code.sib);
            code.set_displacement(&[0; 4][..disp])?;
        }

        code.set_immediate(&enc.implied_immediate)?;
        Ok(code)
    }

    /// Append an opcode that precedes the legacy prefixes (such as FWAIT).
    pub fn add_prefix_opcode(&mut self, byte: u8) -> Result<(), CodeError> {
        self.prefix_opcodes.push("prefix opcodes", byte)
    }

    /// Append a legacy prefix.
    pub fn add_prefix(&mut self, prefix: Prefix) -> Result<(), CodeError> {
        self.prefixes.push("prefixes", prefix.byte())
    }

    /// Replace the opcode bytes (at most 3).
    pub fn set_opcode(&mut self, bytes: &[u8]) -> Result<(), CodeError> {
        self.opcode.set("opcode", bytes)
    }

    /// Replace the code offset (at most 8 bytes).
    pub fn set_code_offset(&mut self, bytes: &[u8]) -> Result<(), CodeError> {
        self.code_offset.set("code offset", bytes)
    }

    /// Replace the displacement (at most 8 bytes).
    pub fn set_displacement(&mut self, bytes: &[u8]) -> Result<(), CodeError> {
        self.displacement.set("displacement", bytes)
    }

    /// Replace the immediate (at most 8 bytes).
    pub fn set_immediate(&mut self, bytes: &[u8]) -> Result<(), CodeError> {
        self.immediate.set("immediate", bytes)
    }

    /// Prefix opcodes.
    pub fn prefix_opcodes(&self) -> &[u8] {
        self.prefix_opcodes.as_slice()
    }

    /// Legacy prefixes, in emission order.
    pub fn prefixes(&self) -> impl Iterator<Item = Prefix> + '_ {
        self.prefixes.as_slice().iter().filter_map(|&b| Prefix::from_byte(b))
    }

    /// Opcode bytes.
    pub fn opcode(&self) -> &[u8] {
        self.opcode.as_slice()
    }

    /// Code offset bytes.
    pub fn code_offset(&self) -> &[u8] {
        self.code_offset.as_slice()
    }

    /// Displacement bytes.
    pub fn displacement(&self) -> &[u8] {
        self.displacement.as_slice()
    }

    /// Immediate bytes.
    pub fn immediate(&self) -> &[u8] {
        self.immediate.as_slice()
    }

    // The helpers below write the same logical bit into whichever prefix is
    // in use. VEX and EVEX store R, X and B inverted.

    /// Set the ModR/M.reg extension bit.
    pub fn set_r(&mut self, set: bool) {
        self.rex.set_r(set);
        self.vex.set_r(!set);
        self.evex.set_r(!set);
    }

    /// Set the SIB.index extension bit.
    pub fn set_x(&mut self, set: bool) {
        self.rex.set_x(set);
        self.vex.set_x(!set);
        self.evex.set_x(!set);
    }

    /// Set the ModR/M.rm or SIB.base extension bit.
    pub fn set_b(&mut self, set: bool) {
        self.rex.set_b(set);
        self.vex.set_b(!set);
        self.evex.set_b(!set);
    }

    /// Set VEX.L and EVEX.L.
    pub fn set_l(&mut self, set: bool) {
        self.vex.set_l(set);
        self.evex.set_ll((self.evex.ll() & 0b10) | u8::from(set));
    }

    /// Set the implied prefix field.
    pub fn set_pp(&mut self, pp: u8) {
        self.vex.set_pp(pp);
        self.evex.set_pp(pp);
    }

    /// Set the opcode map field.
    pub fn set_map(&mut self, map: u8) {
        self.vex.set_map(map);
        self.evex.set_map(map);
    }

    /// Set VEX.W and EVEX.W.
    pub fn set_w(&mut self, set: bool) {
        self.vex.set_w(set);
        self.evex.set_w(set);
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        let mut n = 0;
        self.emit(|bytes| n += bytes.len());
        n
    }

    /// Whether nothing would be emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the machine code to `buf`.
    pub fn encode_to(&self, buf: &mut InstrBytes) -> Result<(), CodeError> {
        let needed = self.len();
        if needed > buf.remaining() {
            return Err(CodeError::BufferFull {
                needed,
                available: buf.remaining(),
            });
        }
        self.emit(|bytes| buf.extend_from_slice(bytes));
        Ok(())
    }

    /// The machine code as a fresh vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        self.emit(|bytes| out.extend_from_slice(bytes));
        out
    }

    fn emit(&self, mut put: impl FnMut(&[u8])) {
        put(self.prefix_opcodes.as_slice());
        put(self.prefixes.as_slice());
        if self.rex.is_on() {
            put(&[self.rex.0]);
        }
        if self.vex.is_on() {
            if self.vex.can_use_two_bytes() {
                put(&self.vex.encode_two_byte());
            } else {
                put(&self.vex.encode_three_byte());
            }
        }
        if self.evex.is_on() {
            put(&self.evex.encode());
        }
        put(self.opcode.as_slice());
        put(self.code_offset.as_slice());
        if let Some(modrm) = self.modrm {
            put(&[modrm.0]);
        }
        if let Some(sib) = self.sib {
            put(&[sib.0]);
        }
        put(self.displacement.as_slice());
        put(self.immediate.as_slice());
    }
}

/// A value satisfying a reg or r/m constraint.
fn pick(field: ModRmField) -> u8 {
    match field {
        ModRmField::Any => 0,
        ModRmField::Equals(v) => v,
        ModRmField::NotEquals(v) => (v + 1) & 0b111,
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("[")?;
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:02x}", b)?;
    }
    f.write_str("]")
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        let mut field = |f: &mut fmt::Formatter<'_>, name: &str| {
            let out = write!(f, "{}{}: ", sep, name);
            sep = ", ";
            out
        };

        f.write_str("{")?;
        if !self.prefix_opcodes.as_slice().is_empty() {
            field(f, "PrefixOpcodes")?;
            write_hex(f, self.prefix_opcodes.as_slice())?;
        }
        if !self.prefixes.as_slice().is_empty() {
            field(f, "Prefixes")?;
            write_hex(f, self.prefixes.as_slice())?;
        }
        if self.rex.is_on() {
            field(f, "REX")?;
            write!(f, "{}", self.rex)?;
        }
        if self.vex.is_on() {
            field(f, "VEX")?;
            write!(f, "{}", self.vex)?;
        }
        if self.evex.is_on() {
            field(f, "EVEX")?;
            write!(f, "{}", self.evex)?;
        }
        if !self.opcode.as_slice().is_empty() {
            field(f, "Opcode")?;
            write_hex(f, self.opcode.as_slice())?;
        }
        if !self.code_offset.as_slice().is_empty() {
            field(f, "CodeOffset")?;
            write_hex(f, self.code_offset.as_slice())?;
        }
        if let Some(modrm) = self.modrm {
            field(f, "ModR/M")?;
            write!(f, "{}", modrm)?;
        }
        if let Some(sib) = self.sib {
            field(f, "SIB")?;
            write!(f, "{}", sib)?;
        }
        if !self.displacement.as_slice().is_empty() {
            field(f, "Displacement")?;
            write_hex(f, self.displacement.as_slice())?;
        }
        if !self.immediate.as_slice().is_empty() {
            field(f, "Immediate")?;
            write_hex(f, self.immediate.as_slice())?;
        }
        f.write_str("}")
    }
}
