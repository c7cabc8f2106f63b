//! BIP39 English wordlist with reverse lookup

use std::collections::HashMap;
use std::sync::OnceLock;

use bip39::Language;

/// Number of entries in a BIP39 wordlist
pub const WORDLIST_SIZE: usize = 2048;

/// Bits carried by one mnemonic word
pub const WORD_BITS: usize = 11;

/// Read-only word <-> index table
pub struct Wordlist {
    words: &'static [&'static str; WORDLIST_SIZE],
    index: HashMap<&'static str, u16>,
}

impl Wordlist {
    /// The English wordlist, built once per process
    pub fn english() -> &'static Wordlist {
        static ENGLISH: OnceLock<Wordlist> = OnceLock::new();
        ENGLISH.get_or_init(|| Wordlist::new(Language::English.word_list()))
    }

    fn new(words: &'static [&'static str; WORDLIST_SIZE]) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word, i as u16))
            .collect();
        Self { words, index }
    }

    /// Word at `index`, or `None` when the index does not fit in 11 bits
    pub fn word(&self, index: u16) -> Option<&'static str> {
        self.words.get(index as usize).copied()
    }

    /// Index of `word`; lookup is exact, callers normalize case first
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl std::fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wordlist").field("len", &self.len()).finish()
    }
}
