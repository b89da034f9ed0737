//! Parameter and register catalog tests through the public API.

use std::collections::HashSet;

use x86_encoding::{
    parameter, parameter_by_uid, register, ParameterEncoding, ParameterType, RegisterType,
    PARAMETERS, REGISTERS,
};

// ─── Parameters ───────────────────────────────────────────────────────────────

#[test]
fn lookups_agree() {
    for p in PARAMETERS {
        assert_eq!(parameter(p.syntax), Some(*p), "{}", p.syntax);
        assert_eq!(parameter_by_uid(p.uid()), Some(*p), "{}", p.uid());
    }
    assert_eq!(parameter("r128"), None);
    assert_eq!(parameter_by_uid("NoSuchParameter"), None);
}

#[test]
fn uids_and_syntaxes_are_unique() {
    let mut uids = HashSet::new();
    let mut syntaxes = HashSet::new();
    for p in PARAMETERS {
        assert!(uids.insert(p.uid), "duplicate uid {}", p.uid);
        assert!(syntaxes.insert(p.syntax), "duplicate syntax {}", p.syntax);
    }
}

#[test]
fn register_parameters_name_one_class() {
    for p in PARAMETERS.iter().filter(|p| p.kind == ParameterType::Register) {
        assert!(!p.registers.is_empty(), "{} accepts no registers", p.uid);
        let class = p.registers[0].kind;
        for r in p.registers {
            assert_eq!(r.kind, class, "{} mixes {} and {}", p.uid, class, r.kind);
            assert!(p.accepts(r));
        }
    }
}

#[test]
fn encodings_fit_types() {
    for p in PARAMETERS {
        match p.kind {
            ParameterType::Memory => {
                assert_ne!(p.encoding, ParameterEncoding::VexVvvv, "{}", p.uid)
            }
            ParameterType::SignedImmediate | ParameterType::UnsignedImmediate => assert!(
                matches!(p.encoding, ParameterEncoding::Immediate | ParameterEncoding::None),
                "{} is an immediate encoded in {}",
                p.uid,
                p.encoding
            ),
            ParameterType::RelativeAddress | ParameterType::FarPointer => {
                assert_eq!(p.encoding, ParameterEncoding::CodeOffset, "{}", p.uid)
            }
            _ => {}
        }
    }
}

#[test]
fn familiar_operands() {
    let r32 = parameter("r32").unwrap();
    assert_eq!(r32.kind, ParameterType::Register);
    assert_eq!(r32.encoding, ParameterEncoding::ModRmReg);
    assert_eq!(r32.bits, 32);
    assert!(r32.accepts(register("r9d").unwrap()));
    assert!(!r32.accepts(register("r9").unwrap()));
    assert_eq!(r32.to_string(), "register r32 (ModR/M reg)");

    let imm8 = parameter_by_uid("Imm8").unwrap();
    assert_eq!(imm8.kind, ParameterType::SignedImmediate);
    assert_eq!(imm8.encoding, ParameterEncoding::Immediate);
    assert!(imm8.kind.is_immediate());

    let rel32 = parameter("rel32").unwrap();
    assert_eq!(rel32.kind, ParameterType::RelativeAddress);
    assert_eq!(rel32.encoding, ParameterEncoding::CodeOffset);

    let xmm1 = parameter("xmm1").unwrap();
    assert_eq!(xmm1.registers.len(), 32);
    assert!(xmm1.accepts(register("xmm31").unwrap()));
}

#[test]
fn enum_names_round_trip() {
    for kind in ParameterType::ALL {
        assert_eq!(kind.to_string().parse::<ParameterType>(), Ok(kind));
        assert_eq!(ParameterType::from_uid(kind.uid()), Some(kind));
    }
    for encoding in ParameterEncoding::ALL {
        assert_eq!(encoding.to_string().parse::<ParameterEncoding>(), Ok(encoding));
        assert_eq!(ParameterEncoding::from_uid(encoding.uid()), Some(encoding));
    }
    assert!("register file".parse::<ParameterType>().is_err());
}

// ─── Registers ────────────────────────────────────────────────────────────────

#[test]
fn register_names_are_unique() {
    let mut names = HashSet::new();
    for r in REGISTERS {
        assert!(names.insert(r.name), "duplicate register {}", r.name);
        for alias in r.aliases {
            assert!(names.insert(*alias), "alias {} collides", alias);
        }
    }
}

#[test]
fn register_lookup() {
    let r9b = register("r9b").unwrap();
    assert_eq!(r9b.name, "r9l");
    assert_eq!(r9b.kind, RegisterType::GeneralPurpose);
    assert_eq!(r9b.bits, 8);
    assert_eq!(register("XMM7").map(|r| r.name), Some("xmm7"));
    assert_eq!(register("zmm31").map(|r| r.bits), Some(512));
    assert!(register("xmm32").is_none());
    assert!(register("").is_none());
}

#[test]
fn register_field_encodings() {
    let r12 = register("r12").unwrap();
    let field = r12.modrm();
    assert!(field.rex && field.extended && !field.high);
    assert_eq!(field.bits, 0b100);

    let sil = register("sil").unwrap();
    assert!(sil.is_rex_byte_register());
    assert!(sil.modrm().rex);

    let ah = register("ah").unwrap();
    assert!(ah.is_high_byte());
    assert!(!ah.modrm().rex);

    let xmm17 = register("xmm17").unwrap();
    assert!(xmm17.evex);
    assert!(xmm17.modrm().high);
    assert_eq!(xmm17.vex_vvvv(), (false, 0b1110));
    assert_eq!(register("xmm3").unwrap().vex_is4(), 0x30);
}

#[test]
fn register_types_round_trip() {
    for kind in RegisterType::ALL {
        assert_eq!(kind.to_string().parse::<RegisterType>(), Ok(kind));
    }
}
