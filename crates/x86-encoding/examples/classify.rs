//! Classification example: parse a small encoding table, then report which
//! entries accept a few byte sequences and why the others reject them.
//!
//! Run with: `cargo run --example classify`

use x86_encoding::{parse_encoding, select_encoding, Code, Encoding};

const TABLE: &[&str] = &[
    "90",
    "90+rd",
    "F3 90",
    "0F B8 /r",
    "F3 0F B8 /r",
    "NP 0F AE /7",
    "NFx 66 0F AE /7",
    "VEX.128.0F.WIG 58 /r",
    "EVEX.256.66.0F.W1 58 /r",
];

fn main() {
    println!("=== x86_encoding classify example ===\n");

    let table: Vec<Encoding> = TABLE
        .iter()
        .map(|s| parse_encoding(s).unwrap_or_else(|e| panic!("{s}: {e}")))
        .collect();

    // --- Skeletons ---
    println!("1. Skeleton machine code:");
    for enc in &table {
        let code = Code::for_encoding(enc).unwrap();
        print!("   {:<26}", enc.syntax);
        print_hex("", &code.to_bytes());
    }

    // --- Classification ---
    println!("\n2. Classification:");
    let samples: &[&[u8]] = &[
        &[0x90],
        &[0x93],
        &[0xf3, 0x90],
        &[0xf3, 0x0f, 0xb8, 0xc1],
        &[0x66, 0x0f, 0xae, 0x38],
        &[0xc5, 0xf0, 0x58, 0xc2],
        &[0x62, 0x11, 0xe5, 0x28, 0x58, 0xf7],
    ];
    for code in samples {
        print!("   ");
        print_hex("", code);
        match select_encoding(&table, code) {
            Some(enc) => println!("     best match: {}", enc.syntax),
            None => println!("     no match"),
        }
        for enc in &table {
            let outcome = enc.matches_machine_code(code);
            if !outcome.is_match() {
                println!("       {:<26} {}", enc.syntax, outcome);
            }
        }
    }

    // --- Diagnostics ---
    println!("\n3. Diagnostics:");
    for syntax in ["0F ZZ /r", "VEX.128.0F.W2 58 /r", "0F AE /7 11:110:bbb"] {
        let err = parse_encoding(syntax).unwrap_err();
        println!("   {syntax}");
        if let Some(span) = err.span() {
            println!("   {}^", " ".repeat(span.offset));
        }
        println!("   {err}\n");
    }
}

fn print_hex(prefix: &str, bytes: &[u8]) {
    print!("{}", prefix);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && i % 16 == 0 {
            println!();
            print!("{}", prefix);
        }
        print!("{:02X} ", b);
    }
    println!();
}
