#![no_main]

use cipher_tool::analyzer::analyze;
use cipher_tool::cipher::{transform, CipherScheme, Direction};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string, handling invalid UTF-8 gracefully
    let input = String::from_utf8_lossy(data);

    // Skip extremely long inputs to focus fuzzing efforts
    if input.len() > 100_000 {
        return;
    }

    let schemes = [
        CipherScheme::Shift { shift: 13 },
        CipherScheme::Keyword {
            key: "lemon".to_string(),
        },
        CipherScheme::Base64,
        CipherScheme::Hex,
    ];

    for scheme in &schemes {
        // Encode must succeed and round-trip exactly
        let encoded = transform(&input, scheme, Direction::Encode).unwrap();
        let decoded = transform(&encoded, scheme, Direction::Decode).unwrap();
        assert_eq!(decoded, input);

        // Decoding arbitrary input may error, but must never panic
        let _ = transform(&input, scheme, Direction::Decode);
    }

    let _ = analyze(&input);
});
