//! # x86-encoding: Intel encoding syntax and machine-code matching
//!
//! Instruction listings describe each form's machine code with a short
//! string such as `REX.W 0F C7 /1` or `EVEX.256.66.0F.W1 58 /r`.
//! `x86-encoding` parses these strings into a structured [`Encoding`], checks
//! whether a byte sequence is a valid instance of one, and carries the
//! operand and register catalogs that instruction tables are built from.
//!
//! ## Quick Start
//!
//! ```rust
//! use x86_encoding::{parse_encoding, MachineCodeMatch};
//!
//! let enc = parse_encoding("NFx 66 0F AE /7").unwrap();
//! assert_eq!(enc.matches_machine_code(&[0x66, 0x0f, 0xae, 0x38]), MachineCodeMatch::Match);
//! assert_eq!(
//!     enc.matches_machine_code(&[0x0f, 0xae, 0x38]),
//!     MachineCodeMatch::MissingMandatoryPrefix,
//! );
//! ```
//!
//! ## Features
//!
//! - **`no_std` + `alloc`**: disable the default `std` feature to embed the
//!   tables in firmware or a kernel.
//! - **Precise diagnostics**: grammar errors carry the clause and its column;
//!   mismatches name the first field that disagreed.
//! - **`serde`**: JSON projection of encodings, registers and parameters.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Pedantic lint policy ─────────────────────────────────────────────────
// Encodings are bit fields: narrowing casts between integer widths and
// dense binary/hex literals are the norm here.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal,
    clippy::match_same_arms,
    clippy::redundant_closure_for_method_calls,
    clippy::bool_to_int_with_if,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::needless_raw_string_hashes,
    clippy::semicolon_if_nothing_returned,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::doc_markdown,
    clippy::similar_names,
    clippy::fn_params_excessive_bools,
    clippy::too_many_lines,
    clippy::single_match_else,
    clippy::manual_let_else,
    clippy::unnecessary_wraps,
    clippy::unused_self,
    clippy::map_unwrap_or,
    clippy::many_single_char_names,
    clippy::redundant_else,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::needless_continue,
    clippy::struct_excessive_bools,
    clippy::len_without_is_empty
)]

extern crate alloc;

/// Machine-code builder and the stack-allocated `InstrBytes` buffer.
pub mod code;
/// The structured form of an encoding string.
pub mod encoding;
/// Error types and clause spans.
pub mod error;
/// JSON projection (serde).
#[cfg(feature = "serde")]
mod json;
/// Clause lexer with span tracking.
pub mod lexer;
/// Matching machine code against an encoding.
pub mod matcher;
/// ModR/M and SIB byte views.
pub mod modrm;
/// Operand descriptors.
pub mod parameters;
/// Encoding-string parser.
pub mod parser;
/// Legacy, REX, VEX and EVEX prefixes.
pub mod prefix;
/// The x86 register file.
pub mod registers;
/// Picking the most specific of several matching encodings.
pub mod select;

// Re-exports
pub use code::{Code, InstrBytes};
pub use encoding::{
    Encoding, ImpliedPrefix, ModRmField, OpcodeMap, VectorKind, VectorLength, VectorWidth,
};
pub use error::{CodeError, DecodeError, EncodingError, Span};
pub use matcher::MachineCodeMatch;
pub use modrm::{ModRm, Sib};
pub use parameters::{
    parameter, parameter_by_uid, Parameter, ParameterEncoding, ParameterType, PARAMETERS,
};
pub use parser::parse_encoding;
pub use prefix::{Evex, Prefix, Rex, Vex};
pub use registers::{register, FieldEncoding, Register, RegisterType, REGISTERS};
pub use select::{select_encoding, specificity};
