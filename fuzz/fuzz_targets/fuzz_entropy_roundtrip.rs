#![no_main]

use arbitrary::Arbitrary;
use babel_core::{
    decode_to_entropy, encode_entropy, entropy_to_mnemonic, format_babel, parse_mnemonic,
    BabelFormat, Entropy, Separator,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    length_selector: u8,
    bytes: [u8; 32],
    separator: u8,
    group_units: u8,
}

fuzz_target!(|input: Input| {
    let len = [16, 20, 24, 28, 32][(input.length_selector % 5) as usize];
    let entropy = Entropy::from_bytes(&input.bytes[..len]).unwrap();

    let mnemonic = entropy_to_mnemonic(&entropy).join(" ");
    assert_eq!(parse_mnemonic(&mnemonic).unwrap(), entropy);

    let babel = encode_entropy(&entropy).unwrap();
    assert_eq!(decode_to_entropy(&babel).unwrap(), entropy);

    let separator = match input.separator % 4 {
        0 => Separator::Hyphen,
        1 => Separator::Dot,
        2 => Separator::Space,
        _ => Separator::Underscore,
    };
    let format = BabelFormat {
        separator,
        group_units: (input.group_units % 16) as usize,
    };
    assert_eq!(
        decode_to_entropy(&format_babel(&babel, &format)).unwrap(),
        entropy
    );
});
