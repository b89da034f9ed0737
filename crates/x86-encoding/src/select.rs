//! Choosing among several encodings that accept the same machine code.
//!
//! Encoding tables overlap: `90` (NOP) also matches `90+rd` (XCHG), and
//! `F3 0F B8 /r` (POPCNT) also matches `0F B8 /r` after a stray F3. The
//! matcher answers yes or no per encoding, so callers holding several
//! candidates rank the matches by how much of the machine code each one
//! pins down.

use tracing::trace;

use crate::encoding::{Encoding, ModRmField, VectorKind, VectorLength, VectorWidth};

/// How much of the machine code an encoding fixes. Higher is more specific.
pub fn specificity(enc: &Encoding) -> u32 {
    let mut score = 0;

    score += 2 * enc.prefix_opcodes.len() as u32;
    score += 2 * enc.mandatory_prefixes.len() as u32;
    score += u32::from(enc.no_vex_prefixes) + u32::from(enc.no_rep_prefixes);

    score += u32::from(enc.rex) + u32::from(enc.rex_r) + 2 * u32::from(enc.rex_w);
    if enc.vector != VectorKind::None {
        score += 2;
        score += u32::from(enc.vector_width != VectorWidth::Ignored);
        score += u32::from(enc.vector_length != VectorLength::Ignored);
    }

    // A register-modified byte only fixes its upper five bits.
    score += 2 * enc.opcode.len() as u32;
    if enc.modified_opcode().is_some() {
        score -= 1;
    }

    for field in [enc.modrm_mod, enc.modrm_reg, enc.modrm_rm] {
        score += match field {
            ModRmField::Any => 0,
            ModRmField::Equals(_) => 2,
            ModRmField::NotEquals(_) => 1,
        };
    }
    score += 2 * enc.implied_immediate.len() as u32;
    score
}

/// The most specific candidate that matches `code`.
///
/// Among equally specific matches the earliest candidate wins, so callers
/// control tie-breaking through ordering.
pub fn select_encoding<'a, I>(candidates: I, code: &[u8]) -> Option<&'a Encoding>
where
    I: IntoIterator<Item = &'a Encoding>,
{
    let mut best: Option<(&'a Encoding, u32)> = None;
    for enc in candidates {
        if !enc.matches_machine_code(code).is_match() {
            continue;
        }
        let score = specificity(enc);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((enc, score));
        }
    }

    if let Some((enc, score)) = best {
        trace!(syntax = %enc.syntax, score, "selected encoding");
    }
    best.map(|(enc, _)| enc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_encoding;
    use alloc::vec::Vec;

    fn parse_all(syntaxes: &[&str]) -> Vec<Encoding> {
        syntaxes.iter().map(|s| parse_encoding(s).unwrap()).collect()
    }

    #[test]
    fn fixed_opcode_beats_register_modifier() {
        let encs = parse_all(&["90+rd", "90"]);
        let chosen = select_encoding(&encs, &[0x90]).unwrap();
        assert_eq!(chosen.syntax, "90");
        let chosen = select_encoding(&encs, &[0x91]).unwrap();
        assert_eq!(chosen.syntax, "90+rd");
    }

    #[test]
    fn mandatory_prefix_wins() {
        let encs = parse_all(&["0F B8 /r", "F3 0F B8 /r"]);
        let chosen = select_encoding(&encs, &[0xf3, 0x0f, 0xb8, 0xc1]).unwrap();
        assert_eq!(chosen.syntax, "F3 0F B8 /r");
    }

    #[test]
    fn fixed_modrm_fields_win() {
        let encs = parse_all(&["0F 01 /r", "0F 01 D0"]);
        let chosen = select_encoding(&encs, &[0x0f, 0x01, 0xd0]).unwrap();
        assert_eq!(chosen.syntax, "0F 01 D0");

        let encs = parse_all(&["0F AE /7", "0F AE 11:111:bbb"]);
        let chosen = select_encoding(&encs, &[0x0f, 0xae, 0xf8]).unwrap();
        assert_eq!(chosen.syntax, "0F AE 11:111:bbb");
    }

    #[test]
    fn ties_keep_caller_order() {
        let encs = parse_all(&["D8 /0", "D8 /0"]);
        let chosen = select_encoding(&encs, &[0xd8, 0xc0]).unwrap();
        assert!(core::ptr::eq(chosen, &encs[0]));
    }

    #[test]
    fn nothing_matches() {
        let encs = parse_all(&["37", "3F"]);
        assert!(select_encoding(&encs, &[0x90]).is_none());
        assert!(select_encoding(&encs, &[]).is_none());
    }

    #[test]
    fn rex_w_is_more_specific() {
        let plain = parse_encoding("8B /r").unwrap();
        let wide = parse_encoding("REX.W 8B /r").unwrap();
        assert!(specificity(&wide) > specificity(&plain));
    }
}
