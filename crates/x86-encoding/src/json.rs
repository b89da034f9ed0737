//! JSON projection of encodings and catalog entries.
//!
//! Encodings serialize to one camelCase key per field, with false, empty and
//! unconstrained fields left out. Enumerations use their display strings,
//! registers their names, and parameters a full object that is checked
//! against the catalog when read back.

use alloc::string::String;
use alloc::vec::Vec;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::encoding::{
    Encoding, ImpliedPrefix, ModRmField, OpcodeMap, VectorKind, VectorLength, VectorWidth,
};
use crate::error::DecodeError;
use crate::matcher::MachineCodeMatch;
use crate::parameters::{parameter_by_uid, Parameter, ParameterEncoding, ParameterType};
use crate::prefix::Prefix;
use crate::registers::{register, Register, RegisterType};

// ─── Enumerations ───────────────────────────────────────────────────────

macro_rules! serde_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                    s.serialize_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                    let text = String::deserialize(d)?;
                    text.parse().map_err(de::Error::custom)
                }
            }
        )*
    };
}

serde_as_str! {
    VectorKind,
    VectorLength,
    ImpliedPrefix,
    OpcodeMap,
    VectorWidth,
    ParameterType,
    ParameterEncoding,
    RegisterType,
    MachineCodeMatch,
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.byte())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Prefix::try_from(u8::deserialize(d)?).map_err(de::Error::custom)
    }
}

// ─── Registers and parameters ───────────────────────────────────────────

impl Serialize for Register {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Register {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = String::deserialize(d)?;
        match register(&name) {
            Some(reg) => Ok(*reg),
            None => Err(de::Error::custom(DecodeError::UnknownName {
                what: "register",
                name,
            })),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct JsonParameter {
    uid: String,
    #[serde(rename = "type")]
    kind: ParameterType,
    encoding: ParameterEncoding,
    bits: u16,
    syntax: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    registers: Vec<Register>,
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        JsonParameter {
            uid: self.uid.into(),
            kind: self.kind,
            encoding: self.encoding,
            bits: self.bits,
            syntax: self.syntax.into(),
            registers: self.registers.to_vec(),
        }
        .serialize(s)
    }
}

impl<'de> Deserialize<'de> for Parameter {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let json = JsonParameter::deserialize(d)?;
        let Some(known) = parameter_by_uid(&json.uid) else {
            return Err(de::Error::custom(DecodeError::UnknownName {
                what: "parameter",
                name: json.uid,
            }));
        };

        let mismatch = if json.kind != known.kind {
            Some("type")
        } else if json.encoding != known.encoding {
            Some("encoding")
        } else if json.bits != known.bits {
            Some("bits")
        } else if json.syntax != known.syntax {
            Some("syntax")
        } else if json.registers != known.registers {
            Some("registers")
        } else {
            None
        };
        match mismatch {
            Some(field) => Err(de::Error::custom(DecodeError::CatalogMismatch {
                uid: json.uid,
                field,
            })),
            None => Ok(*known),
        }
    }
}

// ─── Encoding ───────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsonEncoding {
    syntax: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    prefix_opcodes: Vec<u8>,
    #[serde(skip_serializing_if = "is_false")]
    no_vex_prefixes: bool,
    #[serde(skip_serializing_if = "is_false")]
    no_rep_prefixes: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    mandatory_prefixes: Vec<Prefix>,

    #[serde(skip_serializing_if = "is_false")]
    rex: bool,
    #[serde(skip_serializing_if = "is_false")]
    rex_r: bool,
    #[serde(skip_serializing_if = "is_false")]
    rex_w: bool,

    #[serde(skip_serializing_if = "is_default")]
    vector: VectorKind,
    #[serde(skip_serializing_if = "is_default")]
    vector_length: VectorLength,
    #[serde(skip_serializing_if = "is_default")]
    implied_prefix: ImpliedPrefix,
    #[serde(skip_serializing_if = "Option::is_none")]
    opcode_map: Option<OpcodeMap>,
    #[serde(skip_serializing_if = "is_default")]
    vector_width: VectorWidth,
    #[serde(skip_serializing_if = "is_false")]
    is4: bool,
    #[serde(skip_serializing_if = "is_false")]
    mask: bool,
    #[serde(skip_serializing_if = "is_false")]
    zero: bool,
    #[serde(skip_serializing_if = "is_false")]
    rounding: bool,
    #[serde(skip_serializing_if = "is_false")]
    suppress: bool,

    opcode: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    register_modifier: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack_index: Option<usize>,
    #[serde(skip_serializing_if = "is_false")]
    code_offset: bool,

    #[serde(skip_serializing_if = "is_false")]
    modrm: bool,
    #[serde(skip_serializing_if = "is_any", with = "mod_bits")]
    modrm_mod: ModRmField,
    #[serde(skip_serializing_if = "is_any", with = "field_bits")]
    modrm_reg: ModRmField,
    #[serde(skip_serializing_if = "is_any", with = "field_bits")]
    modrm_rm: ModRmField,

    #[serde(skip_serializing_if = "is_false")]
    vsib: bool,

    #[serde(skip_serializing_if = "Vec::is_empty", with = "hex")]
    implied_immediate: Vec<u8>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_any(field: &ModRmField) -> bool {
    field.is_any()
}

fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

impl Default for JsonEncoding {
    fn default() -> Self {
        Encoding::blank("").into()
    }
}

impl From<Encoding> for JsonEncoding {
    fn from(enc: Encoding) -> Self {
        // No `..`: a new Encoding field must be added here too.
        let Encoding {
            syntax,
            prefix_opcodes,
            no_vex_prefixes,
            no_rep_prefixes,
            mandatory_prefixes,
            rex,
            rex_r,
            rex_w,
            vector,
            vector_length,
            implied_prefix,
            opcode_map,
            vector_width,
            is4,
            mask,
            zero,
            rounding,
            suppress,
            opcode,
            register_modifier,
            stack_index,
            code_offset,
            modrm,
            modrm_mod,
            modrm_reg,
            modrm_rm,
            vsib,
            implied_immediate,
        } = enc;

        JsonEncoding {
            syntax,
            prefix_opcodes,
            no_vex_prefixes,
            no_rep_prefixes,
            mandatory_prefixes,
            rex,
            rex_r,
            rex_w,
            vector,
            vector_length,
            implied_prefix,
            opcode_map,
            vector_width,
            is4,
            mask,
            zero,
            rounding,
            suppress,
            opcode,
            register_modifier,
            stack_index,
            code_offset,
            modrm,
            modrm_mod,
            modrm_reg,
            modrm_rm,
            vsib,
            implied_immediate,
        }
    }
}

impl From<JsonEncoding> for Encoding {
    fn from(json: JsonEncoding) -> Self {
        let JsonEncoding {
            syntax,
            prefix_opcodes,
            no_vex_prefixes,
            no_rep_prefixes,
            mandatory_prefixes,
            rex,
            rex_r,
            rex_w,
            vector,
            vector_length,
            implied_prefix,
            opcode_map,
            vector_width,
            is4,
            mask,
            zero,
            rounding,
            suppress,
            opcode,
            register_modifier,
            stack_index,
            code_offset,
            modrm,
            modrm_mod,
            modrm_reg,
            modrm_rm,
            vsib,
            implied_immediate,
        } = json;

        Encoding {
            syntax,
            prefix_opcodes,
            no_vex_prefixes,
            no_rep_prefixes,
            mandatory_prefixes,
            rex,
            rex_r,
            rex_w,
            vector,
            vector_length,
            implied_prefix,
            opcode_map,
            vector_width,
            is4,
            mask,
            zero,
            rounding,
            suppress,
            opcode,
            register_modifier,
            stack_index,
            code_offset,
            modrm,
            modrm_mod,
            modrm_reg,
            modrm_rm,
            vsib,
            implied_immediate,
        }
    }
}

impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        JsonEncoding::from(self.clone()).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Encoding {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        JsonEncoding::deserialize(d).map(Encoding::from)
    }
}

// ─── Field codecs ───────────────────────────────────────────────────────

/// ModR/M constraints as bit strings: `"11"`, `"!11"`, `"101"`.
fn field_to_string(field: ModRmField, width: usize) -> String {
    match field {
        ModRmField::Any => String::new(),
        ModRmField::Equals(v) => alloc::format!("{:0w$b}", v, w = width),
        ModRmField::NotEquals(v) => alloc::format!("!{:0w$b}", v, w = width),
    }
}

fn field_from_str(text: &str, width: usize) -> Result<ModRmField, DecodeError> {
    let (negated, digits) = match text.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.len() != width || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(DecodeError::BadModRmField { text: text.into() });
    }
    let value = digits
        .bytes()
        .fold(0u8, |acc, b| (acc << 1) | (b - b'0'));
    Ok(if negated {
        ModRmField::NotEquals(value)
    } else {
        ModRmField::Equals(value)
    })
}

mod mod_bits {
    use super::*;

    pub(super) fn serialize<S: Serializer>(field: &ModRmField, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&field_to_string(*field, 2))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<ModRmField, D::Error> {
        let text = String::deserialize(d)?;
        field_from_str(&text, 2).map_err(de::Error::custom)
    }
}

mod field_bits {
    use super::*;

    pub(super) fn serialize<S: Serializer>(field: &ModRmField, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&field_to_string(*field, 3))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<ModRmField, D::Error> {
        let text = String::deserialize(d)?;
        field_from_str(&text, 3).map_err(de::Error::custom)
    }
}

/// Lowercase hex strings.
mod hex {
    use super::*;
    use core::fmt::Write;

    pub(super) fn encode(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2);
        for b in bytes {
            let _ = write!(out, "{:02x}", b);
        }
        out
    }

    pub(super) fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
        let bad = || DecodeError::BadHex { text: text.into() };
        if text.len() % 2 != 0 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        (0..text.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&text[i..i + 2], 16).map_err(|_| bad()))
            .collect()
    }

    pub(super) fn serialize<S: Serializer>(bytes: &Vec<u8>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&encode(bytes))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(d)?;
        decode(&text).map_err(de::Error::custom)
    }
}
