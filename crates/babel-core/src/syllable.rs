//! The babel syllabary
//!
//! Every 6-bit value maps to one two-letter consonant-vowel syllable:
//! the high four bits pick the consonant and the low two bits the vowel.
//! The table is part of the wire format. Changing either letter set or its
//! order breaks every previously generated babel string, so any change must
//! bump [`SYLLABARY_VERSION`].

use std::collections::HashMap;
use std::sync::OnceLock;

/// Wire format version of the syllable table
pub const SYLLABARY_VERSION: u32 = 1;

/// Bits carried by one babel unit
pub const UNIT_BITS: usize = 6;

/// Rendered width of one babel unit in characters
pub const UNIT_CHARS: usize = 2;

/// Number of distinct units (2^UNIT_BITS)
pub const UNIT_COUNT: usize = 1 << UNIT_BITS;

pub const CONSONANTS: [char; 16] = [
    'b', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'z',
];

pub const VOWELS: [char; 4] = ['a', 'i', 'o', 'u'];

/// Read-only unit <-> value table
pub struct Syllabary {
    units: Vec<String>,
    values: HashMap<String, u8>,
}

impl Syllabary {
    /// The version 1 syllabary, built once per process
    pub fn standard() -> &'static Syllabary {
        static STANDARD: OnceLock<Syllabary> = OnceLock::new();
        STANDARD.get_or_init(Syllabary::build)
    }

    fn build() -> Self {
        let units: Vec<String> = (0..UNIT_COUNT)
            .map(|value| {
                let mut unit = String::with_capacity(UNIT_CHARS);
                unit.push(CONSONANTS[value >> 2]);
                unit.push(VOWELS[value & 0b11]);
                unit
            })
            .collect();
        let values = units
            .iter()
            .enumerate()
            .map(|(value, unit)| (unit.clone(), value as u8))
            .collect();
        Self { units, values }
    }

    /// Unit for a 6-bit value; `None` outside `[0, 63]`
    pub fn unit(&self, value: u8) -> Option<&str> {
        self.units.get(value as usize).map(String::as_str)
    }

    /// Unit for the low [`UNIT_BITS`] bits of `value`
    pub fn unit_of(&self, value: u8) -> &str {
        &self.units[value as usize & (UNIT_COUNT - 1)]
    }

    /// Value of a lowercase unit
    pub fn value(&self, unit: &str) -> Option<u8> {
        self.values.get(unit).copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl std::fmt::Debug for Syllabary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Syllabary")
            .field("version", &SYLLABARY_VERSION)
            .field("len", &self.len())
            .finish()
    }
}
