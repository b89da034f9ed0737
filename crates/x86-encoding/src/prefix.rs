//! Typed views of legacy, REX, VEX and EVEX prefixes.
//!
//! Every view is a thin wrapper over the raw bytes, so a value read from
//! machine code can be inspected and re-emitted without loss.

use core::fmt;

use crate::error::DecodeError;

#[inline]
fn bit(byte: u8, n: u8) -> bool {
    (byte >> n) & 1 == 1
}

#[inline]
fn with_bit(byte: u8, n: u8, set: bool) -> u8 {
    (byte & !(1 << n)) | (u8::from(set) << n)
}

// ─── Legacy prefixes ────────────────────────────────────────────────────

/// A legacy x86 prefix byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Prefix {
    /// `LOCK`.
    Lock = 0xf0,
    /// `REPNE`/`REPNZ`, also `BND`.
    RepeatNot = 0xf2,
    /// `REP`/`REPE`/`REPZ`.
    Repeat = 0xf3,
    /// CS segment override, also the "not taken" branch hint.
    Cs = 0x2e,
    /// SS segment override.
    Ss = 0x36,
    /// DS segment override, also the "taken" branch hint.
    Ds = 0x3e,
    /// ES segment override.
    Es = 0x26,
    /// FS segment override.
    Fs = 0x64,
    /// GS segment override.
    Gs = 0x65,
    /// Operand-size override.
    OperandSize = 0x66,
    /// Address-size override.
    AddressSize = 0x67,
}

impl Prefix {
    /// Every legacy prefix.
    pub const ALL: [Prefix; 11] = [
        Prefix::Lock,
        Prefix::RepeatNot,
        Prefix::Repeat,
        Prefix::Cs,
        Prefix::Ss,
        Prefix::Ds,
        Prefix::Es,
        Prefix::Fs,
        Prefix::Gs,
        Prefix::OperandSize,
        Prefix::AddressSize,
    ];

    /// Classify a byte as a legacy prefix.
    pub const fn from_byte(byte: u8) -> Option<Prefix> {
        Some(match byte {
            0xf0 => Prefix::Lock,
            0xf2 => Prefix::RepeatNot,
            0xf3 => Prefix::Repeat,
            0x2e => Prefix::Cs,
            0x36 => Prefix::Ss,
            0x3e => Prefix::Ds,
            0x26 => Prefix::Es,
            0x64 => Prefix::Fs,
            0x65 => Prefix::Gs,
            0x66 => Prefix::OperandSize,
            0x67 => Prefix::AddressSize,
            _ => return None,
        })
    }

    /// The prefix byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// One of the prefixes that double as SSE opcode selectors: 66, F2, F3.
    #[inline]
    pub const fn is_simd_selector(self) -> bool {
        matches!(
            self,
            Prefix::OperandSize | Prefix::RepeatNot | Prefix::Repeat
        )
    }

    /// F2 or F3.
    #[inline]
    pub const fn is_repeat(self) -> bool {
        matches!(self, Prefix::RepeatNot | Prefix::Repeat)
    }

    /// Assembler spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Lock => "lock",
            Prefix::RepeatNot => "repnz/repne",
            Prefix::Repeat => "rep/repe/repz",
            Prefix::Cs => "cs/unlikely",
            Prefix::Ss => "ss",
            Prefix::Ds => "ds/likely",
            Prefix::Es => "es",
            Prefix::Fs => "fs",
            Prefix::Gs => "gs",
            Prefix::OperandSize => "data16/data32",
            Prefix::AddressSize => "addr16/addr32",
        }
    }

    /// Bit used to record this prefix in a set of seen prefixes.
    #[inline]
    pub(crate) fn mask(self) -> u16 {
        let idx = Prefix::ALL.iter().position(|p| *p == self).unwrap_or(0);
        1 << idx
    }
}

impl TryFrom<u8> for Prefix {
    type Error = DecodeError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Prefix::from_byte(byte).ok_or(DecodeError::BadPrefix { byte })
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── REX ────────────────────────────────────────────────────────────────
//
//   | 7  6  5  4   3  2  1  0 |
//   | 0  1  0  0   W  R  X  B |

/// A REX prefix byte. Zero means "no REX prefix".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rex(pub u8);

impl Rex {
    /// Interpret `byte` as a REX prefix if it lies in `0x40..=0x4F`.
    pub const fn from_byte(byte: u8) -> Option<Rex> {
        if byte >> 4 == 0b0100 {
            Some(Rex(byte))
        } else {
            None
        }
    }

    /// Whether the prefix will be emitted.
    pub fn is_on(self) -> bool {
        bit(self.0, 6)
    }
    /// REX.W.
    pub fn w(self) -> bool {
        bit(self.0, 3)
    }
    /// REX.R.
    pub fn r(self) -> bool {
        bit(self.0, 2)
    }
    /// REX.X.
    pub fn x(self) -> bool {
        bit(self.0, 1)
    }
    /// REX.B.
    pub fn b(self) -> bool {
        bit(self.0, 0)
    }

    /// Force the prefix on, even with no bits set.
    pub fn set_on(&mut self) {
        self.0 |= 0x40;
    }
    /// Set REX.W, turning the prefix on.
    pub fn set_w(&mut self, set: bool) {
        self.0 = with_bit(self.0, 3, set);
        self.mark();
    }
    /// Set REX.R, turning the prefix on.
    pub fn set_r(&mut self, set: bool) {
        self.0 = with_bit(self.0, 2, set);
        self.mark();
    }
    /// Set REX.X, turning the prefix on.
    pub fn set_x(&mut self, set: bool) {
        self.0 = with_bit(self.0, 1, set);
        self.mark();
    }
    /// Set REX.B, turning the prefix on.
    pub fn set_b(&mut self, set: bool) {
        self.0 = with_bit(self.0, 0, set);
        self.mark();
    }

    fn mark(&mut self) {
        if self.0 & 0x0f != 0 {
            self.set_on();
        }
    }
}

impl fmt::Display for Rex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0100")?;
        for (n, c) in [(3, 'W'), (2, 'R'), (1, 'X'), (0, 'B')] {
            let out = if bit(self.0, n) { c } else { '0' };
            write!(f, "{}", out)?;
        }
        Ok(())
    }
}

// ─── VEX ────────────────────────────────────────────────────────────────
//
// 3-byte form:             2-byte form:
//   C4                       C5
//   R X B m m m m m          R v v v v L p p
//   W v v v v L p p
//
// The prefix is held in 3-byte form and exported as 2 bytes when possible.

/// A VEX prefix, held in its 3-byte form. R, X, B and vvvv are stored
/// inverted, exactly as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Vex(pub [u8; 2]);

impl Vex {
    /// A prefix with R, X, B and vvvv in their "unused" state and the given
    /// opcode map. A zero map leaves the prefix off.
    pub fn new(map: u8) -> Vex {
        let mut vex = Vex([0b1110_0000, 0b0111_1000]);
        vex.set_map(map);
        vex
    }

    /// Decode the payload of a `C4` prefix.
    pub fn from_three_byte(p0: u8, p1: u8) -> Vex {
        Vex([p0, p1])
    }

    /// Decode the payload of a `C5` prefix.
    pub fn from_two_byte(p0: u8) -> Vex {
        Vex([(p0 & 0x80) | 0b0110_0001, p0 & 0x7f])
    }

    /// Whether the prefix will be emitted. Map 0 is reserved.
    pub fn is_on(self) -> bool {
        self.map() != 0
    }

    /// Inverted VEX.R.
    pub fn r(self) -> bool {
        bit(self.0[0], 7)
    }
    /// Inverted VEX.X.
    pub fn x(self) -> bool {
        bit(self.0[0], 6)
    }
    /// Inverted VEX.B.
    pub fn b(self) -> bool {
        bit(self.0[0], 5)
    }
    /// VEX.m-mmmm.
    pub fn map(self) -> u8 {
        self.0[0] & 0b1_1111
    }
    /// VEX.W.
    pub fn w(self) -> bool {
        bit(self.0[1], 7)
    }
    /// Inverted VEX.vvvv.
    pub fn vvvv(self) -> u8 {
        (self.0[1] >> 3) & 0b1111
    }
    /// VEX.L.
    pub fn l(self) -> bool {
        bit(self.0[1], 2)
    }
    /// VEX.pp.
    pub fn pp(self) -> u8 {
        self.0[1] & 0b11
    }

    /// Set the inverted VEX.R bit.
    pub fn set_r(&mut self, set: bool) {
        self.0[0] = with_bit(self.0[0], 7, set);
    }
    /// Set the inverted VEX.X bit.
    pub fn set_x(&mut self, set: bool) {
        self.0[0] = with_bit(self.0[0], 6, set);
    }
    /// Set the inverted VEX.B bit.
    pub fn set_b(&mut self, set: bool) {
        self.0[0] = with_bit(self.0[0], 5, set);
    }
    /// Set VEX.m-mmmm.
    pub fn set_map(&mut self, map: u8) {
        self.0[0] = (self.0[0] & 0b1110_0000) | (map & 0b1_1111);
    }
    /// Set VEX.W.
    pub fn set_w(&mut self, set: bool) {
        self.0[1] = with_bit(self.0[1], 7, set);
    }
    /// Set the (already inverted) VEX.vvvv field.
    pub fn set_vvvv(&mut self, vvvv: u8) {
        self.0[1] = (self.0[1] & 0b1000_0111) | ((vvvv & 0b1111) << 3);
    }
    /// Set VEX.L.
    pub fn set_l(&mut self, set: bool) {
        self.0[1] = with_bit(self.0[1], 2, set);
    }
    /// Set VEX.pp.
    pub fn set_pp(&mut self, pp: u8) {
        self.0[1] = (self.0[1] & 0b1111_1100) | (pp & 0b11);
    }

    /// The 2-byte form can carry this prefix: X and B unused, W clear and
    /// map 0F.
    pub fn can_use_two_bytes(self) -> bool {
        self.x() && self.b() && !self.w() && self.map() == 0b0_0001
    }

    /// `C5` form. Only meaningful when [`Vex::can_use_two_bytes`] holds.
    pub fn encode_two_byte(self) -> [u8; 2] {
        [0xc5, (self.0[0] & 0x80) | (self.0[1] & 0x7f)]
    }

    /// `C4` form.
    pub fn encode_three_byte(self) -> [u8; 3] {
        [0xc4, self.0[0], self.0[1]]
    }
}

impl fmt::Display for Vex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{R: {}, X: {}, B: {}, m-mmmm: {:05b}, W: {}, vvvv: {:04b}, L: {}, pp: {:02b}}}",
            u8::from(self.r()),
            u8::from(self.x()),
            u8::from(self.b()),
            self.map(),
            u8::from(self.w()),
            self.vvvv(),
            u8::from(self.l()),
            self.pp()
        )
    }
}

// ─── EVEX ───────────────────────────────────────────────────────────────
//
//   62
//   R  X  B  R'  0  m  m  m    P0
//   W  v  v  v   v  1  p  p    P1
//   z  L' L  b   V' a  a  a    P2

/// The three payload bytes of an EVEX prefix. R, X, B, R', vvvv and V' are
/// stored inverted, as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Evex(pub [u8; 3]);

impl Evex {
    /// A prefix with every inverted field in its "unused" state, the fixed
    /// bit set and the given opcode map.
    pub fn new(map: u8) -> Evex {
        let mut evex = Evex([0b1111_0000, 0b0111_1100, 0b0000_1000]);
        evex.set_map(map);
        evex
    }

    /// Whether the prefix will be emitted.
    pub fn is_on(self) -> bool {
        bit(self.0[1], 2)
    }

    /// P0 bit 3 is clear and P1 bit 2 is set.
    pub fn has_valid_fixed_bits(self) -> bool {
        !bit(self.0[0], 3) && bit(self.0[1], 2)
    }

    /// Inverted EVEX.R.
    pub fn r(self) -> bool {
        bit(self.0[0], 7)
    }
    /// Inverted EVEX.X.
    pub fn x(self) -> bool {
        bit(self.0[0], 6)
    }
    /// Inverted EVEX.B.
    pub fn b(self) -> bool {
        bit(self.0[0], 5)
    }
    /// Inverted EVEX.R'.
    pub fn r_prime(self) -> bool {
        bit(self.0[0], 4)
    }
    /// EVEX.mmm.
    pub fn map(self) -> u8 {
        self.0[0] & 0b111
    }
    /// EVEX.W.
    pub fn w(self) -> bool {
        bit(self.0[1], 7)
    }
    /// Inverted EVEX.vvvv.
    pub fn vvvv(self) -> u8 {
        (self.0[1] >> 3) & 0b1111
    }
    /// EVEX.pp.
    pub fn pp(self) -> u8 {
        self.0[1] & 0b11
    }
    /// EVEX.z.
    pub fn z(self) -> bool {
        bit(self.0[2], 7)
    }
    /// EVEX.L'L as a 2-bit value.
    pub fn ll(self) -> u8 {
        (self.0[2] >> 5) & 0b11
    }
    /// EVEX.b.
    pub fn broadcast(self) -> bool {
        bit(self.0[2], 4)
    }
    /// Inverted EVEX.V'.
    pub fn v_prime(self) -> bool {
        bit(self.0[2], 3)
    }
    /// EVEX.aaa.
    pub fn aaa(self) -> u8 {
        self.0[2] & 0b111
    }

    /// Set the inverted EVEX.R bit.
    pub fn set_r(&mut self, set: bool) {
        self.0[0] = with_bit(self.0[0], 7, set);
    }
    /// Set the inverted EVEX.X bit.
    pub fn set_x(&mut self, set: bool) {
        self.0[0] = with_bit(self.0[0], 6, set);
    }
    /// Set the inverted EVEX.B bit.
    pub fn set_b(&mut self, set: bool) {
        self.0[0] = with_bit(self.0[0], 5, set);
    }
    /// Set the inverted EVEX.R' bit.
    pub fn set_r_prime(&mut self, set: bool) {
        self.0[0] = with_bit(self.0[0], 4, set);
    }
    /// Set EVEX.mmm.
    pub fn set_map(&mut self, map: u8) {
        self.0[0] = (self.0[0] & 0b1111_1000) | (map & 0b111);
    }
    /// Set EVEX.W.
    pub fn set_w(&mut self, set: bool) {
        self.0[1] = with_bit(self.0[1], 7, set);
    }
    /// Set the (already inverted) EVEX.vvvv field.
    pub fn set_vvvv(&mut self, vvvv: u8) {
        self.0[1] = (self.0[1] & 0b1000_0111) | ((vvvv & 0b1111) << 3);
    }
    /// Set EVEX.pp.
    pub fn set_pp(&mut self, pp: u8) {
        self.0[1] = (self.0[1] & 0b1111_1100) | (pp & 0b11);
    }
    /// Set EVEX.z.
    pub fn set_z(&mut self, set: bool) {
        self.0[2] = with_bit(self.0[2], 7, set);
    }
    /// Set EVEX.L'L.
    pub fn set_ll(&mut self, ll: u8) {
        self.0[2] = (self.0[2] & 0b1001_1111) | ((ll & 0b11) << 5);
    }
    /// Set EVEX.b.
    pub fn set_broadcast(&mut self, set: bool) {
        self.0[2] = with_bit(self.0[2], 4, set);
    }
    /// Set the inverted EVEX.V' bit.
    pub fn set_v_prime(&mut self, set: bool) {
        self.0[2] = with_bit(self.0[2], 3, set);
    }
    /// Set EVEX.aaa.
    pub fn set_aaa(&mut self, aaa: u8) {
        self.0[2] = (self.0[2] & 0b1111_1000) | (aaa & 0b111);
    }

    /// `62` followed by the payload.
    pub fn encode(self) -> [u8; 4] {
        [0x62, self.0[0], self.0[1], self.0[2]]
    }
}

impl fmt::Display for Evex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{R: {}, X: {}, B: {}, R': {}, mmm: {:03b}, W: {}, vvvv: {:04b}, pp: {:02b}, \
             z: {}, L'L: {:02b}, b: {}, V': {}, aaa: {:03b}}}",
            u8::from(self.r()),
            u8::from(self.x()),
            u8::from(self.b()),
            u8::from(self.r_prime()),
            self.map(),
            u8::from(self.w()),
            self.vvvv(),
            self.pp(),
            u8::from(self.z()),
            self.ll(),
            u8::from(self.broadcast()),
            u8::from(self.v_prime()),
            self.aaa()
        )
    }
}
