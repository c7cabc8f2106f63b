//! Mnemonic <-> babel string conversion

use crate::babel::{babel_to_bits, bits_to_babel, format_babel, BabelFormat};
use crate::error::Result;
use crate::mnemonic::{entropy_to_mnemonic, parse_mnemonic, Entropy};
use crate::syllable::Syllabary;
use crate::wordlist::Wordlist;

/// Stateless codec over the two read-only lookup tables.
///
/// Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BabelCodec;

impl BabelCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn wordlist(&self) -> &'static Wordlist {
        Wordlist::english()
    }

    pub fn syllabary(&self) -> &'static Syllabary {
        Syllabary::standard()
    }

    /// Convert a mnemonic phrase to its babel string.
    ///
    /// Fails on a bad word count, an unknown word or a checksum mismatch.
    pub fn encode(&self, mnemonic: &str) -> Result<String> {
        let entropy = parse_mnemonic(mnemonic)?;
        self.encode_entropy(&entropy)
    }

    /// Like [`encode`](Self::encode), with separators inserted for reading
    pub fn encode_formatted(&self, mnemonic: &str, format: &BabelFormat) -> Result<String> {
        let babel = self.encode(mnemonic)?;
        Ok(format_babel(&babel, format))
    }

    pub fn encode_entropy(&self, entropy: &Entropy) -> Result<String> {
        let babel = bits_to_babel(&entropy.to_bits())?;
        tracing::debug!(
            entropy_bits = entropy.bit_len(),
            units = entropy.word_count().babel_units(),
            "encoded mnemonic"
        );
        Ok(babel)
    }

    /// Convert a babel string, formatted or not, back to its mnemonic
    pub fn decode(&self, babel: &str) -> Result<String> {
        let entropy = self.decode_to_entropy(babel)?;
        let words = entropy_to_mnemonic(&entropy);
        tracing::debug!(words = words.len(), "decoded babel string");
        Ok(words.join(" "))
    }

    pub fn decode_to_entropy(&self, babel: &str) -> Result<Entropy> {
        let bits = babel_to_bits(babel)?;
        Entropy::from_bits(&bits)
    }
}

/// Convert a mnemonic phrase to its babel string
pub fn encode(mnemonic: &str) -> Result<String> {
    BabelCodec::new().encode(mnemonic)
}

/// Convert a mnemonic phrase to a formatted babel string
pub fn encode_formatted(mnemonic: &str, format: &BabelFormat) -> Result<String> {
    BabelCodec::new().encode_formatted(mnemonic, format)
}

/// Convert raw entropy to its babel string
pub fn encode_entropy(entropy: &Entropy) -> Result<String> {
    BabelCodec::new().encode_entropy(entropy)
}

/// Convert a babel string back to its mnemonic phrase
pub fn decode(babel: &str) -> Result<String> {
    BabelCodec::new().decode(babel)
}

/// Convert a babel string back to raw entropy
pub fn decode_to_entropy(babel: &str) -> Result<Entropy> {
    BabelCodec::new().decode_to_entropy(babel)
}
