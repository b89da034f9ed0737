//! Matcher tests through the public API.
//!
//! Each case pairs an opcode-column string with a byte sequence and the
//! outcome the matcher must report for it.

use x86_encoding::{parse_encoding, select_encoding, Encoding, MachineCodeMatch};

use MachineCodeMatch::*;

fn enc(syntax: &str) -> Encoding {
    parse_encoding(syntax).unwrap_or_else(|e| panic!("`{syntax}`: {e}"))
}

fn check(syntax: &str, code: &[u8], expected: MachineCodeMatch) {
    let got = enc(syntax).matches_machine_code(code);
    assert_eq!(got, expected, "`{syntax}` against {:02X?}", code);
}

// ─── Basic forms ──────────────────────────────────────────────────────────────

#[test]
fn single_byte_opcode() {
    check("37", &[0x37], Match);
    check("37", &[0x3f], WrongOpcode);
    check("37", &[], NoMachineCode);
}

#[test]
fn register_modified_opcode_in_rex_row() {
    // INC r16 in 32-bit mode lives in the 0x4_ row; 49 is `inc cx`, not REX.
    check("48+rw", &[0x49], Match);
    check("48+rw", &[0x4f], Match);
    check("48+rw", &[0x50], WrongModifiedOpcode);
    check("48+rw", &[0x47], WrongModifiedOpcode);
}

#[test]
fn trailing_bytes_are_ignored() {
    check("37", &[0x37, 0xff, 0xff], Match);
    check("9B 66 37", &[0x9b, 0x66, 0x67, 0x37, 0x12], Match);
}

// ─── Prefixes ─────────────────────────────────────────────────────────────────

#[test]
fn missing_mandatory_prefix() {
    check("66 37", &[0x37, 0x12], MissingMandatoryPrefix);
    check("66 37", &[0x66, 0x37], Match);
}

#[test]
fn prefix_opcode_must_lead() {
    check("9B 66 37", &[0x66, 0x9b, 0x37], MissingPrefixOpcode);
    check("9B 66 37", &[0x9b, 0x66], NoOpcode);
}

#[test]
fn prefixes_in_any_order() {
    let syntax = "F2 66 0F 38 F1 /r";
    check(syntax, &[0xf2, 0x66, 0x0f, 0x38, 0xf1, 0xc1], Match);
    check(syntax, &[0x66, 0xf2, 0x0f, 0x38, 0xf1, 0xc1], Match);
    // Segment overrides may be mixed in.
    check(syntax, &[0x66, 0x2e, 0xf2, 0x0f, 0x38, 0xf1, 0x01], Match);
    check(syntax, &[0xf2, 0x0f, 0x38, 0xf1, 0xc1], MissingMandatoryPrefix);
}

#[test]
fn prefixes_alone_are_a_truncation() {
    check("F2 66 0F 38 F1 /r", &[0xf2], NoOpcode);
    check("F2 66 0F 38 F1 /r", &[0x66, 0xf2], NoOpcode);
    check("9B 66 37", &[0x9b], NoOpcode);
    // Once an opcode byte is present the missing prefix is reported.
    check("9B 66 37", &[0x9b, 0x37], MissingMandatoryPrefix);
}

#[test]
fn prefix_restrictions() {
    check("NFx 66 0F AE /7", &[0x66, 0x0f, 0xae, 0x38], Match);
    check("NFx 66 0F AE /7", &[0xf3, 0x66, 0x0f, 0xae, 0x38], ForbiddenRepPrefix);
    check("NP 0F 58 /r", &[0x0f, 0x58, 0xc1], Match);
    check("NP 0F 58 /r", &[0x66, 0x0f, 0x58, 0xc1], ForbiddenVexPrefix);
    check("NP 0F 58 /r", &[0xf2, 0x0f, 0x58, 0xc1], ForbiddenVexPrefix);
    // Unrestricted encodings tolerate the same prefixes.
    check("0F AE /7", &[0xf3, 0x0f, 0xae, 0x38], Match);
}

#[test]
fn required_rex() {
    check("REX.W + C7 /0 id", &[0x48, 0xc7, 0xc0, 1, 0, 0, 0], Match);
    check("REX.W + C7 /0 id", &[0x4c, 0xc7, 0xc0, 1, 0, 0, 0], Match);
    check("REX.W + C7 /0 id", &[0xc7, 0xc0, 1, 0, 0, 0], MissingRexPrefix);
    check("REX.W + C7 /0 id", &[0x40, 0xc7, 0xc0, 1, 0, 0, 0], MissingRexW);
    check("REX.R + 0F 20 /r", &[0x44, 0x0f, 0x20, 0xc0], Match);
    check("REX.R + 0F 20 /r", &[0x41, 0x0f, 0x20, 0xc0], MissingRexR);
}

#[test]
fn optional_rex_is_skipped() {
    check("8B /r", &[0x8b, 0xc1], Match);
    check("8B /r", &[0x41, 0x8b, 0xc1], Match);
    check("8B /r", &[0x66, 0x48, 0x8b, 0xc1], Match);
}

// ─── Vector prefixes ──────────────────────────────────────────────────────────

#[test]
fn vex_three_byte() {
    // vaddps xmm0, xmm1, xmm2
    let code = [0xc4, 0xe1, 0x70, 0x58, 0xc2];
    check("VEX.128.0F.WIG 58 /r", &code, Match);
    check("VEX.256.0F.WIG 58 /r", &code, WrongVexL);
    check("VEX.128.66.0F.WIG 58 /r", &code, WrongVexPp);
    check("VEX.128.0F38.WIG 58 /r", &code, WrongVexMap);
    check("VEX.128.0F.W1 58 /r", &code, WrongVexW);
    check("VEX.128.0F.WIG 59 /r", &code, WrongOpcode);
    check("VEX.128.0F.WIG 58 /r", &code[..2], TruncatedVexPrefix);
}

#[test]
fn vex_two_byte() {
    let code = [0xc5, 0xf0, 0x58, 0xc2];
    check("VEX.128.0F.WIG 58 /r", &code, Match);
    check("VEX.128.0F.W0 58 /r", &code, Match);
    // Only map 0F with W0 has a 2-byte form.
    check("VEX.128.0F.W1 58 /r", &code, Unexpected2ByteVexPrefix);
    check("VEX.128.0F38.W0 58 /r", &code, Unexpected2ByteVexPrefix);
    check("VEX.128.0F.WIG 58 /r", &[0x0f, 0x58, 0xc2], MissingVexPrefix);
    check("VEX.128.0F.WIG 58 /r", &[0x66, 0xc5, 0xf0, 0x58, 0xc2], ForbiddenVexPrefix);
}

#[test]
fn evex() {
    let syntax = "EVEX.256.66.0F.W1 58 /r";
    let code = [0x62, 0x11, 0xe5, 0x28, 0x58, 0xf7];
    check(syntax, &code, Match);
    check("EVEX.512.66.0F.W1 58 /r", &code, WrongVexL);
    check("EVEX.LLIG.66.0F.W1 58 /r", &code, Match);
    check(syntax, &code[..4], TruncatedEvexPrefix);
    // P0 bit 3 must be clear.
    check(syntax, &[0x62, 0x19, 0xe5, 0x28, 0x58, 0xf7], MalformedEvexPrefix);
    // P1 bit 2 must be set.
    check(syntax, &[0x62, 0x11, 0xe1, 0x28, 0x58, 0xf7], MalformedEvexPrefix);
    check(syntax, &[0xc4, 0xe1, 0xe5, 0x58, 0xf7], MissingEvexPrefix);
}

#[test]
fn evex_embedded_rounding() {
    // VADDPD zmm0, zmm1, zmm2, {rn-sae}: EVEX.b set, L'L = 00.
    let register_form = [0x62, 0xf1, 0xf5, 0x18, 0x58, 0xc2];
    // Same prefix with a memory operand: EVEX.b is a broadcast.
    let memory_form = [0x62, 0xf1, 0xf5, 0x18, 0x58, 0x02];

    let mut vaddpd = enc("EVEX.512.66.0F.W1 58 /r");
    assert_eq!(vaddpd.matches_machine_code(&register_form), WrongVexL);

    vaddpd.rounding = true;
    assert_eq!(vaddpd.matches_machine_code(&register_form), Match);
    assert_eq!(vaddpd.matches_machine_code(&memory_form), WrongVexL);
    // Without EVEX.b the length is checked as usual.
    assert_eq!(vaddpd.matches_machine_code(&[0x62, 0xf1, 0xf5, 0x08, 0x58, 0xc2]), WrongVexL);
    assert_eq!(vaddpd.matches_machine_code(&register_form[..5]), MissingModRm);

    let mut vcmppd = enc("EVEX.512.66.0F.W1 C2 /r ib");
    vcmppd.suppress = true;
    assert_eq!(vcmppd.matches_machine_code(&[0x62, 0xf1, 0xf5, 0x18, 0xc2, 0xc2, 0x00]), Match);
}

// ─── ModR/M and implied immediates ────────────────────────────────────────────

#[test]
fn fixed_reg_with_immediate() {
    check("80 /2 ib", &[0x80, 0xd1, 0x80], Match);
    check("80 /2 ib", &[0x80, 0x51, 0x10, 0x80], Match);
    check("80 /2 ib", &[0x80, 0xc1, 0x80], WrongModRmReg);
    check("80 /2 ib", &[0x80], MissingModRm);
}

#[test]
fn modrm_bit_patterns() {
    // CMPXCHG16B needs a memory operand.
    check("REX.W + 0F C7 /1", &[0x48, 0x0f, 0xc7, 0x0e], Match);
    check("REX.W 0F C7 !(11):001:bbb", &[0x48, 0x0f, 0xc7, 0x0e], Match);
    check("REX.W 0F C7 !(11):001:bbb", &[0x48, 0x0f, 0xc7, 0xce], WrongModRmMod);
    check("0F 01 D0", &[0x0f, 0x01, 0xd0], Match);
    check("0F AE 11:111:bbb", &[0x0f, 0xae, 0xf8], Match);
    check("0F AE 11:111:bbb", &[0x0f, 0xae, 0xe8], WrongModRmReg);
    check("0F 01 /7 11:111:000", &[0x0f, 0x01, 0xf9], WrongModRmRm);
}

#[test]
fn implied_immediate_after_memory_operand() {
    // pfmul mm0, [rsp+8]: ModR/M, SIB, disp8, then the 3DNow! suffix.
    let syntax = "0F 0F /r B4";
    check(syntax, &[0x0f, 0x0f, 0xc1, 0xb4], Match);
    check(syntax, &[0x0f, 0x0f, 0x44, 0x24, 0x08, 0xb4], Match);
    check(syntax, &[0x0f, 0x0f, 0x44, 0x24, 0x08, 0xb0], WrongImpliedImmediate);
    check(syntax, &[0x0f, 0x0f, 0x44, 0x24, 0x08], MissingImpliedImmediate);
    check(syntax, &[0x0f, 0x0f, 0x44], MissingImpliedImmediate);
}

// ─── Truncation ───────────────────────────────────────────────────────────────

#[test]
fn every_prefix_of_a_match_is_a_truncation() {
    let cases: &[(&str, &[u8])] = &[
        ("REX.W + 0F C7 /1", &[0x48, 0x0f, 0xc7, 0x0e]),
        ("VEX.128.0F.WIG 58 /r", &[0xc4, 0xe1, 0x70, 0x58, 0xc2]),
        ("EVEX.256.66.0F.W1 58 /r", &[0x62, 0x11, 0xe5, 0x28, 0x58, 0xf7]),
        ("0F 0F /r B4", &[0x0f, 0x0f, 0x44, 0x24, 0x08, 0xb4]),
        ("9B 66 37", &[0x9b, 0x66, 0x37]),
        ("F2 66 0F 38 F1 /r", &[0xf2, 0x66, 0x0f, 0x38, 0xf1, 0xc1]),
    ];
    for &(syntax, code) in cases {
        let enc = enc(syntax);
        assert_eq!(enc.matches_machine_code(code), Match, "`{syntax}`");
        for end in 0..code.len() {
            let outcome = enc.matches_machine_code(&code[..end]);
            assert!(
                outcome.is_truncation(),
                "`{syntax}` against {:02X?}: {outcome}",
                &code[..end]
            );
        }
    }
}

// ─── Selection ────────────────────────────────────────────────────────────────

#[test]
fn selection_among_overlapping_encodings() {
    let table: Vec<Encoding> = ["90+rd", "90", "0F B8 /r", "F3 0F B8 /r", "F3 90"]
        .into_iter()
        .map(enc)
        .collect();

    let pick = |code: &[u8]| select_encoding(&table, code).map(|e| e.syntax.as_str());
    assert_eq!(pick(&[0x90]), Some("90"));
    assert_eq!(pick(&[0x92]), Some("90+rd"));
    assert_eq!(pick(&[0xf3, 0x90]), Some("F3 90"));
    assert_eq!(pick(&[0xf3, 0x0f, 0xb8, 0xc1]), Some("F3 0F B8 /r"));
    assert_eq!(pick(&[0x0f, 0xb8, 0xc1]), Some("0F B8 /r"));
    assert_eq!(pick(&[0xcc]), None);
}
