//! Babel Core - lossless BIP39 mnemonic <-> babel string transcoding
//!
//! A BIP39 mnemonic carries entropy plus a SHA-256 checksum in 11-bit word
//! indices. A babel string carries the same entropy as pronounceable
//! two-letter syllables of 6 bits each; the checksum is recomputed on decode
//! instead of being stored.
//!
//! ```
//! let phrase = "abandon abandon abandon abandon abandon abandon \
//!               abandon abandon abandon abandon abandon about";
//! let babel = babel_core::encode(phrase).unwrap();
//! assert_eq!(babel, "ba".repeat(22));
//! assert_eq!(babel_core::decode(&babel).unwrap(), phrase);
//! ```

pub mod babel;
pub mod bits;
pub mod codec;
pub mod error;
pub mod mnemonic;
pub mod syllable;
pub mod wordlist;

pub use babel::{
    babel_to_bits, bits_to_babel, format_babel, strip_separators, BabelFormat, Separator,
};
pub use bits::BitBuffer;
pub use codec::{decode, decode_to_entropy, encode, encode_entropy, encode_formatted, BabelCodec};
pub use error::{Error, Result};
pub use mnemonic::{
    bits_to_entropy_and_checksum, checksum_bits, entropy_to_mnemonic, mnemonic_to_bits,
    parse_mnemonic, validate_checksum, Entropy, WordCount,
};
pub use syllable::{Syllabary, SYLLABARY_VERSION, UNIT_BITS, UNIT_CHARS};
pub use wordlist::{Wordlist, WORDLIST_SIZE, WORD_BITS};
