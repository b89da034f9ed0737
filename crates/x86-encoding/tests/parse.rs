//! Parser tests through the public API: opcode-column strings taken from the
//! Intel manuals, and the diagnostics produced for broken ones.

use x86_encoding::{
    parse_encoding, Encoding, EncodingError, ImpliedPrefix, ModRmField, OpcodeMap, Prefix, Span,
    VectorKind, VectorLength, VectorWidth,
};

fn parse(syntax: &str) -> Encoding {
    parse_encoding(syntax).unwrap_or_else(|e| panic!("`{syntax}`: {e}"))
}

/// A sample of real opcode-column entries across every clause kind.
const MANUAL_SAMPLE: &[&str] = &[
    "37",
    "04 ib",
    "REX.W + 05 id",
    "80 /2 ib",
    "REX + 80 /2 ib",
    "66 0F 38 F6 /r",
    "F3 REX.W 0F 38 F6 /r",
    "NP 0F 58 /r",
    "NFx 66 0F AE /7",
    "9B DD /7",
    "DD /7",
    "D9 C8+i",
    "B0+rb ib",
    "REX.W + B8+rd io",
    "E8 cd",
    "EA cp",
    "0F 01 D0",
    "0F 01 /7 11:111:000",
    "REX.W 0F C7 !(11):001:bbb",
    "0F 0F /r B4",
    "VEX.128.0F.WIG 58 /r",
    "VEX.NDS.256.66.0F38.W0 18 /r",
    "VEX.L0.66.0F3A.W0 4B /r /is4",
    "VEX.LZ.0F38.W1 F2 /r",
    "VEX.128.66.0F38.W1 92 /vsib",
    "EVEX.512.66.0F.W1 58 /r",
    "EVEX.LLIG.F3.MAP5.W0 58 /r",
];

// ─── Round trips ──────────────────────────────────────────────────────────────

#[test]
fn manual_sample_parses() {
    for syntax in MANUAL_SAMPLE {
        let enc = parse(syntax);
        assert_eq!(enc.syntax, *syntax);
        assert_eq!(enc.to_string(), *syntax);
        assert!(!enc.opcode.is_empty(), "`{syntax}` has no opcode");
    }
}

#[test]
fn parsing_is_idempotent() {
    for syntax in MANUAL_SAMPLE {
        let first = parse(syntax);
        let second = parse(&first.syntax);
        assert_eq!(first, second, "`{syntax}`");
    }
}

#[test]
fn from_str_agrees_with_parse_encoding() {
    for syntax in MANUAL_SAMPLE {
        let via_trait: Encoding = syntax.parse().unwrap();
        assert_eq!(via_trait, parse(syntax));
    }
    assert_eq!("".parse::<Encoding>(), Err(EncodingError::Empty));
}

#[test]
fn modrm_required_when_any_field_is_constrained() {
    for syntax in MANUAL_SAMPLE {
        let enc = parse(syntax);
        let constrained = [enc.modrm_mod, enc.modrm_reg, enc.modrm_rm]
            .iter()
            .any(|field| !field.is_any());
        if constrained {
            assert!(enc.modrm, "`{syntax}` constrains ModR/M without requiring it");
        }
        assert_eq!(enc.needs_modrm(), enc.modrm, "`{syntax}`");
    }
}

// ─── Field extraction ─────────────────────────────────────────────────────────

#[test]
fn legacy_fields() {
    let enc = parse("F3 REX.W 0F 38 F6 /r");
    assert_eq!(enc.mandatory_prefixes, vec![Prefix::Repeat]);
    assert!(enc.rex && enc.rex_w && !enc.rex_r);
    assert_eq!(enc.opcode, vec![0x0f, 0x38, 0xf6]);
    assert_eq!(enc.vector, VectorKind::None);
    assert_eq!(enc.vector_size(), 0);

    let enc = parse("9B DD /7");
    assert_eq!(enc.prefix_opcodes, vec![0x9b]);
    assert_eq!(enc.opcode, vec![0xdd]);
    assert_eq!(enc.modrm_reg, ModRmField::Equals(7));

    let enc = parse("REX.W + B8+rd io");
    assert_eq!(enc.register_modifier, Some(0));
    assert!(!enc.modrm);
}

#[test]
fn vector_fields() {
    let enc = parse("VEX.NDS.256.66.0F38.W0 18 /r");
    assert_eq!(enc.vector, VectorKind::Vex);
    assert_eq!(enc.vector_length, VectorLength::L256);
    assert_eq!(enc.implied_prefix, ImpliedPrefix::P66);
    assert_eq!(enc.opcode_map, Some(OpcodeMap::Map0F38));
    assert_eq!(enc.vector_width, VectorWidth::W0);
    assert_eq!(enc.vector_size(), 256);
    assert!(!enc.rex);

    let enc = parse("EVEX.LLIG.F3.MAP5.W0 58 /r");
    assert_eq!(enc.vector, VectorKind::Evex);
    assert_eq!(enc.vector_length, VectorLength::Ignored);
    assert_eq!(enc.implied_prefix, ImpliedPrefix::PF3);
    assert_eq!(enc.opcode_map, Some(OpcodeMap::Map5));
    assert_eq!(enc.vector_size(), 128);

    let enc = parse("VEX.L0.66.0F3A.W0 4B /r /is4");
    assert!(enc.is4);
    assert_eq!(enc.vector_length, VectorLength::L128);
}

// ─── Diagnostics ──────────────────────────────────────────────────────────────

#[test]
fn errors_point_at_the_clause() {
    let syntax = "REX.W + 0F ZZ /r";
    let err = parse_encoding(syntax).unwrap_err();
    let span = err.span().unwrap();
    assert_eq!(span, Span::new(11, 2));
    assert_eq!(span.slice(syntax), Some("ZZ"));
    assert_eq!(err.to_string(), "column 12: unrecognized encoding clause 'ZZ'");

    let syntax = "VEX.128.0F.W2 58 /r";
    let err = parse_encoding(syntax).unwrap_err();
    assert_eq!(err.span().and_then(|s| s.slice(syntax)), Some("VEX.128.0F.W2"));
    assert_eq!(err.to_string(), "column 1: bad part 'W2' in 'VEX.128.0F.W2'");
}

#[test]
fn whole_string_errors_have_no_span() {
    assert_eq!(parse_encoding(""), Err(EncodingError::Empty));
    assert_eq!(parse_encoding("").unwrap_err().span(), None);

    let err = parse_encoding("NP REX.W").unwrap_err();
    assert_eq!(
        err,
        EncodingError::MissingOpcode {
            syntax: "NP REX.W".into()
        }
    );
    assert_eq!(err.span(), None);
    assert_eq!(err.to_string(), "encoding 'NP REX.W' has no opcode");
}

#[test]
fn garbage_is_rejected() {
    for syntax in ["hello", "0F 58 /9", "0F 58 /r /r", "/r", "VEX 58", "0F 58+rx", "66 66 /r"] {
        assert!(parse_encoding(syntax).is_err(), "`{syntax}` was accepted");
    }
}

#[test]
fn conflicting_descriptors() {
    assert!(matches!(
        parse_encoding("REX.W VEX.128.0F.W1 58 /r"),
        Err(EncodingError::ConflictingPrefix { .. })
    ));
    assert!(matches!(
        parse_encoding("0F 58 VEX.128.0F.W1 /r"),
        Err(EncodingError::MisplacedPrefix { .. })
    ));
    assert!(matches!(
        parse_encoding("0F AE /7 11:110:bbb"),
        Err(EncodingError::ConflictingModRm { .. })
    ));
}

#[test]
fn two_excluded_mod_values_conflict() {
    let syntax = "0F 01 !(11):rrr:bbb !(00):rrr:bbb";
    let err = parse_encoding(syntax).unwrap_err();
    assert!(matches!(err, EncodingError::ConflictingModRm { .. }), "{err}");
    assert_eq!(err.span().and_then(|s| s.slice(syntax)), Some("!(00):rrr:bbb"));

    let enc = parse("0F 01 !(11):rrr:bbb !(11):001:bbb");
    assert_eq!(enc.modrm_mod, ModRmField::NotEquals(0b11));
    assert_eq!(enc.modrm_reg, ModRmField::Equals(0b001));
}

#[test]
fn only_slash_r_starts_implied_immediates() {
    let enc = parse("0F 01 /7 F8");
    assert_eq!(enc.opcode, vec![0x0f, 0x01, 0xf8]);
    assert!(enc.implied_immediate.is_empty());

    let enc = parse("0F 0F /r B4");
    assert_eq!(enc.opcode, vec![0x0f, 0x0f]);
    assert_eq!(enc.implied_immediate, vec![0xb4]);
}

#[cfg(feature = "std")]
#[test]
fn errors_are_std_errors() {
    fn boxed(syntax: &str) -> Result<Encoding, Box<dyn std::error::Error>> {
        Ok(parse_encoding(syntax)?)
    }
    assert!(boxed("0F 58 /r").is_ok());
    assert!(boxed("0F 58 /9").is_err());
}
