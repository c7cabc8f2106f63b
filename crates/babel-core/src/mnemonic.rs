//! BIP39 bitstream conversion
//!
//! Bridges the word-based mnemonic representation and raw bits: words map to
//! 11-bit indices, the concatenated indices split into entropy and checksum,
//! and the checksum is always recomputed from the entropy with SHA-256.

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bits::BitBuffer;
use crate::error::{Error, Result};
use crate::syllable::UNIT_BITS;
use crate::wordlist::{Wordlist, WORD_BITS};

/// Supported mnemonic lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::Twelve,
        WordCount::Fifteen,
        WordCount::Eighteen,
        WordCount::TwentyOne,
        WordCount::TwentyFour,
    ];

    pub fn from_words(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.words() == words)
    }

    /// Word count whose mnemonic bitstream (entropy + checksum) is `bits` long
    pub fn from_total_bits(bits: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.total_bits() == bits)
    }

    pub fn from_entropy_bits(bits: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.entropy_bits() == bits)
    }

    /// Word count whose entropy renders as exactly `units` babel units
    pub fn from_babel_units(units: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.babel_units() == units)
    }

    #[inline]
    pub const fn words(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn total_bits(self) -> usize {
        self.words() * WORD_BITS
    }

    /// ENT = L * 32 / 33
    #[inline]
    pub const fn entropy_bits(self) -> usize {
        self.total_bits() * 32 / 33
    }

    /// CS = ENT / 32
    #[inline]
    pub const fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// Babel units needed for the entropy, counting a zero-padded final unit
    #[inline]
    pub const fn babel_units(self) -> usize {
        self.entropy_bits().div_ceil(UNIT_BITS)
    }

    /// Zero bits appended to fill the final babel unit
    #[inline]
    pub const fn pad_bits(self) -> usize {
        self.babel_units() * UNIT_BITS - self.entropy_bits()
    }
}

/// Entropy block of 128, 160, 192, 224 or 256 bits
///
/// Wiped from memory on drop. `Debug` only reports the length.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
}

impl Entropy {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if WordCount::from_entropy_bits(bytes.len() * 8).is_none() {
            return Err(Error::InvalidEntropyLength(bytes.len()));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Pack a bit sequence whose length is one of the valid entropy lengths
    pub fn from_bits(bits: &BitBuffer) -> Result<Self> {
        if WordCount::from_entropy_bits(bits.len()).is_none() {
            return Err(Error::InvalidLength(bits.len()));
        }
        Ok(Self {
            bytes: bits.to_bytes(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bits(&self) -> BitBuffer {
        BitBuffer::from_bytes(&self.bytes)
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn word_count(&self) -> WordCount {
        // Constructors only admit valid lengths
        WordCount::from_entropy_bits(self.bit_len()).unwrap_or(WordCount::Twelve)
    }
}

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bit_len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Concatenate the 11-bit wordlist index of each word, in order.
///
/// Words are matched case-insensitively. The word count is checked before
/// any lookup.
pub fn mnemonic_to_bits(words: &[&str]) -> Result<BitBuffer> {
    let count = WordCount::from_words(words.len()).ok_or(Error::InvalidWordCount(words.len()))?;
    let wordlist = Wordlist::english();

    let mut bits = BitBuffer::with_capacity(count.total_bits());
    for (position, &word) in words.iter().enumerate() {
        let index = wordlist
            .index_of(&word.to_lowercase())
            .ok_or_else(|| Error::UnknownWord {
                word: word.to_string(),
                position,
            })?;
        bits.push_bits(index as u32, WORD_BITS);
    }

    tracing::trace!(words = words.len(), bits = bits.len(), "mnemonic packed");
    Ok(bits)
}

/// Split a mnemonic bitstream into its entropy and claimed checksum bits
pub fn bits_to_entropy_and_checksum(bits: &BitBuffer) -> Result<(Entropy, BitBuffer)> {
    let count = WordCount::from_total_bits(bits.len()).ok_or(Error::InvalidLength(bits.len()))?;
    let (entropy_bits, checksum) = bits.split_at(count.entropy_bits());
    let entropy = Entropy::from_bits(&entropy_bits)?;
    Ok((entropy, checksum))
}

/// Leading ENT/32 bits of SHA-256(entropy)
pub fn checksum_bits(entropy: &Entropy) -> BitBuffer {
    let digest = Sha256::digest(entropy.as_bytes());
    let mut checksum = BitBuffer::from_bytes(&digest[..1]);
    checksum.truncate(entropy.word_count().checksum_bits());
    checksum
}

/// True iff `claimed` equals the recomputed checksum bit-for-bit
pub fn validate_checksum(entropy: &Entropy, claimed: &BitBuffer) -> bool {
    checksum_bits(entropy) == *claimed
}

/// Render entropy as mnemonic words, appending its checksum
pub fn entropy_to_mnemonic(entropy: &Entropy) -> Vec<&'static str> {
    let count = entropy.word_count();
    let wordlist = Wordlist::english();

    let mut bits = entropy.to_bits();
    bits.extend(&checksum_bits(entropy));
    debug_assert_eq!(bits.len(), count.total_bits());

    bits.chunks(WORD_BITS)
        .filter_map(|index| wordlist.word(index as u16))
        .collect()
}

/// Parse a whitespace-separated phrase into its checksum-validated entropy
pub fn parse_mnemonic(phrase: &str) -> Result<Entropy> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let bits = mnemonic_to_bits(&words)?;
    let (entropy, claimed) = bits_to_entropy_and_checksum(&bits)?;

    let expected = checksum_bits(&entropy);
    if expected != claimed {
        tracing::debug!(words = words.len(), "mnemonic checksum mismatch");
        return Err(Error::ChecksumMismatch {
            expected: expected.to_string(),
            found: claimed.to_string(),
        });
    }
    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn words(phrase: &str) -> Vec<&str> {
        phrase.split_whitespace().collect()
    }

    #[test]
    fn test_word_count_table() {
        let table: Vec<(usize, usize, usize, usize)> = WordCount::ALL
            .iter()
            .map(|wc| (wc.words(), wc.entropy_bits(), wc.checksum_bits(), wc.babel_units()))
            .collect();
        assert_eq!(
            table,
            vec![
                (12, 128, 4, 22),
                (15, 160, 5, 27),
                (18, 192, 6, 32),
                (21, 224, 7, 38),
                (24, 256, 8, 43),
            ]
        );
        assert_eq!(WordCount::Twelve.pad_bits(), 4);
        assert_eq!(WordCount::Eighteen.pad_bits(), 0);
        assert_eq!(WordCount::TwentyFour.pad_bits(), 2);
    }

    #[test]
    fn test_mnemonic_to_bits_all_zero_vector() {
        let bits = mnemonic_to_bits(&words(TEST_MNEMONIC_12)).unwrap();
        assert_eq!(bits.len(), 132);
        // 128 zero bits then checksum 0011 ("about" = index 3)
        assert_eq!(bits.read_bits(0, 32), 0);
        assert_eq!(bits.read_bits(128, 4), 0b0011);
    }

    #[test]
    fn test_mnemonic_to_bits_invalid_word_count() {
        let mut thirteen = words(TEST_MNEMONIC_12);
        thirteen.push("abandon");
        assert_eq!(
            mnemonic_to_bits(&thirteen),
            Err(Error::InvalidWordCount(13))
        );
        assert_eq!(mnemonic_to_bits(&[]), Err(Error::InvalidWordCount(0)));
    }

    #[test]
    fn test_mnemonic_to_bits_unknown_word_position() {
        let mut list = words(TEST_MNEMONIC_12);
        list[0] = "zzzzz";
        assert_eq!(
            mnemonic_to_bits(&list),
            Err(Error::UnknownWord {
                word: "zzzzz".to_string(),
                position: 0,
            })
        );

        let mut list = words(TEST_MNEMONIC_12);
        list[7] = "bitcoinz";
        assert!(matches!(
            mnemonic_to_bits(&list),
            Err(Error::UnknownWord { position: 7, .. })
        ));
    }

    #[test]
    fn test_word_count_checked_before_lookup() {
        let list = vec!["zzzzz"; 13];
        assert_eq!(mnemonic_to_bits(&list), Err(Error::InvalidWordCount(13)));
    }

    #[test]
    fn test_bits_to_entropy_and_checksum_invalid_length() {
        let mut bits = BitBuffer::new();
        bits.push_bits(0, 11);
        assert_eq!(
            bits_to_entropy_and_checksum(&bits).unwrap_err(),
            Error::InvalidLength(11)
        );

        let bits = BitBuffer::from_bytes(&[0u8; 17]);
        assert_eq!(
            bits_to_entropy_and_checksum(&bits).unwrap_err(),
            Error::InvalidLength(136)
        );
    }

    #[test]
    fn test_checksum_bits_known_digests() {
        // SHA-256 of 16 zero bytes starts with 0x37, of 32 zero bytes with 0x66
        let e16 = Entropy::from_bytes(&[0u8; 16]).unwrap();
        assert_eq!(checksum_bits(&e16).to_string(), "0011");
        let e32 = Entropy::from_bytes(&[0u8; 32]).unwrap();
        assert_eq!(checksum_bits(&e32).to_string(), "01100110");
    }

    #[test]
    fn test_validate_checksum() {
        let bits = mnemonic_to_bits(&words(TEST_MNEMONIC_12)).unwrap();
        let (entropy, checksum) = bits_to_entropy_and_checksum(&bits).unwrap();
        assert!(validate_checksum(&entropy, &checksum));

        let mut wrong = BitBuffer::new();
        wrong.push_bits(0b0100, 4);
        assert!(!validate_checksum(&entropy, &wrong));

        let mut short = BitBuffer::new();
        short.push_bits(0b001, 3);
        assert!(!validate_checksum(&entropy, &short));
    }

    #[test]
    fn test_entropy_to_mnemonic_vectors() {
        let entropy = Entropy::from_bytes(&[0x7f; 16]).unwrap();
        assert_eq!(
            entropy_to_mnemonic(&entropy).join(" "),
            "legal winner thank year wave sausage worth useful legal winner thank yellow"
        );

        let entropy = Entropy::from_bytes(&[0xff; 32]).unwrap();
        let words = entropy_to_mnemonic(&entropy);
        assert_eq!(words.len(), 24);
        assert_eq!(words[23], "vote");
    }

    #[test]
    fn test_parse_mnemonic_checksum_mismatch() {
        let phrase = ["abandon"; 12].join(" ");
        assert_eq!(
            parse_mnemonic(&phrase),
            Err(Error::ChecksumMismatch {
                expected: "0011".to_string(),
                found: "0000".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_mnemonic_normalizes_input() {
        let messy = "  ABANDON abandon\tabandon abandon abandon abandon\nabandon abandon abandon abandon abandon About ";
        let entropy = parse_mnemonic(messy).unwrap();
        assert_eq!(entropy.as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_entropy_rejects_invalid_length() {
        assert_eq!(
            Entropy::from_bytes(&[0u8; 15]).unwrap_err(),
            Error::InvalidEntropyLength(15)
        );
        assert!(Entropy::from_bytes(&[0u8; 33]).is_err());
        assert!(Entropy::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_entropy_debug_is_redacted() {
        let entropy = Entropy::from_bytes(&[0xab; 16]).unwrap();
        let debug = format!("{:?}", entropy);
        assert!(debug.contains("REDACTED"));
        assert!(debug.contains("bits: 128"));
        assert!(!debug.contains("171"));
    }
}
