#![no_main]

use libfuzzer_sys::fuzz_target;
use magicchunk::{ByteHex, MatchMode, SignatureMatcher, SignatureRegistry};

fuzz_target!(|data: Vec<u8>| {
    let registry = SignatureRegistry::default();
    let hex = ByteHex::from_bytes(&data);
    assert_eq!(hex.byte_len(), data.len());

    for mode in [MatchMode::Contains, MatchMode::Prefix] {
        let matcher = SignatureMatcher::new(&registry, mode);

        // Verify: a text hit is always a byte-level hit
        for entry in registry.iter() {
            for pattern in entry.patterns() {
                let found = matcher.pattern_found(&hex, pattern);
                let bytes = pattern.as_bytes();
                let expected = match mode {
                    MatchMode::Contains => data.windows(bytes.len()).any(|w| w == bytes),
                    MatchMode::Prefix => data.starts_with(bytes),
                };
                assert_eq!(found, expected, "{pattern} in {mode:?}");
            }
        }

        // Verify: the detected type satisfies its own claim
        let result = matcher.match_hex(hex.clone(), "");
        assert!(!result.is_match);
        if let Some(tag) = result.detected_tag {
            assert!(matcher.match_hex(hex.clone(), &tag).is_match);
        }
    }
});
