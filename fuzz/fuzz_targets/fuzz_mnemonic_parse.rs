#![no_main]

use babel_core::{decode, encode, parse_mnemonic, Wordlist};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must never panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_mnemonic(text);
    }

    // Build a phrase from 11-bit indices so the wordlist path is exercised
    let words: Vec<&str> = data
        .chunks_exact(2)
        .map(|pair| {
            let index = u16::from_be_bytes([pair[0], pair[1]]) & 0x07ff;
            Wordlist::english().word(index).unwrap()
        })
        .collect();
    let phrase = words.join(" ");

    if let Ok(babel) = encode(&phrase) {
        assert_eq!(decode(&babel).unwrap(), phrase);
    }
});
