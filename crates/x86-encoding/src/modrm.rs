//! ModR/M and SIB byte views.

use core::fmt;

/// A ModR/M byte.
///
/// ```text
///   | 7  6 | 5  4  3 | 2  1  0 |
///   | mod  |   reg   |   r/m   |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModRm(pub u8);

impl ModRm {
    /// `mod = 11`: the r/m field names a register.
    pub const MOD_REGISTER: u8 = 0b11;
    /// `r/m = 100` with a memory `mod`: a SIB byte follows.
    pub const RM_SIB: u8 = 0b100;
    /// `r/m = 101` with `mod = 00`: RIP-relative (32-bit displacement only).
    pub const RM_DISP32: u8 = 0b101;

    /// Assemble a ModR/M byte from its three fields.
    pub fn new(md: u8, reg: u8, rm: u8) -> ModRm {
        ModRm(((md & 0b11) << 6) | ((reg & 0b111) << 3) | (rm & 0b111))
    }

    /// The mod field.
    pub fn md(self) -> u8 {
        self.0 >> 6
    }
    /// The reg field.
    pub fn reg(self) -> u8 {
        (self.0 >> 3) & 0b111
    }
    /// The r/m field.
    pub fn rm(self) -> u8 {
        self.0 & 0b111
    }

    /// Set the mod field.
    pub fn set_md(&mut self, md: u8) {
        self.0 = (self.0 & 0b0011_1111) | ((md & 0b11) << 6);
    }
    /// Set the reg field.
    pub fn set_reg(&mut self, reg: u8) {
        self.0 = (self.0 & 0b1100_0111) | ((reg & 0b111) << 3);
    }
    /// Set the r/m field.
    pub fn set_rm(&mut self, rm: u8) {
        self.0 = (self.0 & 0b1111_1000) | (rm & 0b111);
    }

    /// Whether the operand is in memory (any `mod` but `11`).
    pub fn is_memory(self) -> bool {
        self.md() != Self::MOD_REGISTER
    }

    /// Whether a SIB byte follows this byte.
    pub fn has_sib(self) -> bool {
        self.is_memory() && self.rm() == Self::RM_SIB
    }

    /// Number of displacement bytes following the ModR/M (and SIB) bytes in
    /// 32/64-bit addressing. `sib` is consulted only when [`ModRm::has_sib`]
    /// holds, for the `base = 101` special case.
    pub fn displacement_len(self, sib: Option<Sib>) -> usize {
        match self.md() {
            0b01 => 1,
            0b10 => 4,
            0b00 if self.rm() == Self::RM_DISP32 => 4,
            0b00 if self.rm() == Self::RM_SIB => match sib {
                Some(sib) if sib.base() == Sib::BASE_NONE => 4,
                _ => 0,
            },
            _ => 0,
        }
    }
}

impl fmt::Display for ModRm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Mod: {:02b}, Reg: {:03b}, R/M: {:03b}}}",
            self.md(),
            self.reg(),
            self.rm()
        )
    }
}

/// A SIB byte.
///
/// ```text
///   | 7  6  | 5  4  3 | 2  1  0 |
///   | scale |  index  |  base   |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Sib(pub u8);

impl Sib {
    /// `index = 100`: no index register.
    pub const INDEX_NONE: u8 = 0b100;
    /// `base = 101` with `mod = 00`: no base register, disp32 follows.
    pub const BASE_NONE: u8 = 0b101;

    /// Assemble a SIB byte from its three fields.
    pub fn new(scale: u8, index: u8, base: u8) -> Sib {
        Sib(((scale & 0b11) << 6) | ((index & 0b111) << 3) | (base & 0b111))
    }

    /// The scale field (log2 of the multiplier).
    pub fn scale(self) -> u8 {
        self.0 >> 6
    }
    /// The index field.
    pub fn index(self) -> u8 {
        (self.0 >> 3) & 0b111
    }
    /// The base field.
    pub fn base(self) -> u8 {
        self.0 & 0b111
    }

    /// Set the scale field.
    pub fn set_scale(&mut self, scale: u8) {
        self.0 = (self.0 & 0b0011_1111) | ((scale & 0b11) << 6);
    }
    /// Set the index field.
    pub fn set_index(&mut self, index: u8) {
        self.0 = (self.0 & 0b1100_0111) | ((index & 0b111) << 3);
    }
    /// Set the base field.
    pub fn set_base(&mut self, base: u8) {
        self.0 = (self.0 & 0b1111_1000) | (base & 0b111);
    }
}

impl fmt::Display for Sib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Scale: {:02b}, Index: {:03b}, Base: {:03b}}}",
            self.scale(),
            self.index(),
            self.base()
        )
    }
}
