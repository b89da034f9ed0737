#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the split between syntax text and machine code.
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (syntax, code) = rest.split_at(usize::from(split).min(rest.len()));

    // The parser must never panic, only return Ok/Err.
    let Ok(syntax) = core::str::from_utf8(syntax) else {
        return;
    };
    let Ok(enc) = x86_encoding::parse_encoding(syntax) else {
        return;
    };

    // Matching arbitrary bytes and every prefix of them is total.
    for end in 0..=code.len() {
        let _ = enc.matches_machine_code(&code[..end]);
    }

    // Building the skeleton either fails cleanly or yields bytes.
    if let Ok(skeleton) = x86_encoding::Code::for_encoding(&enc) {
        let mut buf = x86_encoding::InstrBytes::new();
        let _ = skeleton.encode_to(&mut buf);
        let _ = enc.matches_machine_code(&buf);
    }
});
