#![no_main]

use babel_core::{decode, decode_to_entropy, encode, encode_entropy, strip_separators};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(mnemonic) = decode(text) {
        // Anything that decodes must re-encode to a valid mnemonic
        let babel = encode(&mnemonic).expect("decoded mnemonic must encode");

        // Re-encoding is canonical: lowercase, zero padding, no separators
        let entropy = decode_to_entropy(text).unwrap();
        assert_eq!(babel, encode_entropy(&entropy).unwrap());
        assert_eq!(babel.len(), strip_separators(text).chars().count());
    }
});
