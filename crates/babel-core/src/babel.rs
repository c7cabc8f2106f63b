//! Babel string encoding
//!
//! Entropy bits are cut into 6-bit groups, most significant bit first, and
//! each group is rendered through the [`Syllabary`]. When the entropy length
//! is not a multiple of six the final group is filled with zero bits. Unit
//! boundaries are positional, so the unit count alone identifies the entropy
//! length and how many pad bits to drop on decode.

use serde::{Deserialize, Serialize};

use crate::bits::BitBuffer;
use crate::error::{Error, Result};
use crate::mnemonic::WordCount;
use crate::syllable::{Syllabary, UNIT_BITS, UNIT_CHARS, UNIT_COUNT};

/// Character inserted between unit groups for readability
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Hyphen,
    Dot,
    Space,
    Underscore,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Dot => '.',
            Separator::Space => ' ',
            Separator::Underscore => '_',
        }
    }
}

impl std::str::FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hyphen" | "-" => Ok(Separator::Hyphen),
            "dot" | "." => Ok(Separator::Dot),
            "space" | " " => Ok(Separator::Space),
            "underscore" | "_" => Ok(Separator::Underscore),
            other => Err(format!(
                "unknown separator '{}' (expected hyphen, dot, space or underscore)",
                other
            )),
        }
    }
}

/// Presentation settings for a formatted babel string
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BabelFormat {
    /// Separator character
    #[serde(default)]
    pub separator: Separator,

    /// Units per group; 0 disables grouping
    #[serde(default = "default_group_units")]
    pub group_units: usize,
}

fn default_group_units() -> usize {
    2
}

impl Default for BabelFormat {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            group_units: default_group_units(),
        }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '.' | '_') || c.is_whitespace()
}

/// Remove every formatting separator
pub fn strip_separators(babel: &str) -> String {
    babel.chars().filter(|&c| !is_separator(c)).collect()
}

/// Insert `format.separator` between groups of `format.group_units` units
pub fn format_babel(babel: &str, format: &BabelFormat) -> String {
    let chars: Vec<char> = strip_separators(babel).chars().collect();
    if format.group_units == 0 {
        return chars.into_iter().collect();
    }

    let separator = format.separator.as_char().to_string();
    chars
        .chunks(format.group_units.saturating_mul(UNIT_CHARS))
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Render entropy bits as an unformatted babel string
pub fn bits_to_babel(entropy_bits: &BitBuffer) -> Result<String> {
    let count = WordCount::from_entropy_bits(entropy_bits.len())
        .ok_or(Error::InvalidLength(entropy_bits.len()))?;
    let table = Syllabary::standard();

    let mut babel = String::with_capacity(count.babel_units() * UNIT_CHARS);
    for value in entropy_bits.chunks(UNIT_BITS) {
        debug_assert!((value as usize) < UNIT_COUNT);
        babel.push_str(table.unit_of(value as u8));
    }

    tracing::trace!(
        units = count.babel_units(),
        pad_bits = count.pad_bits(),
        "entropy rendered"
    );
    Ok(babel)
}

/// Parse a babel string, formatted or not, back into entropy bits
pub fn babel_to_bits(babel: &str) -> Result<BitBuffer> {
    let chars: Vec<char> = strip_separators(babel)
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let count = if chars.len() % UNIT_CHARS == 0 {
        WordCount::from_babel_units(chars.len() / UNIT_CHARS)
    } else {
        None
    }
    .ok_or(Error::InvalidBabelLength(chars.len()))?;

    let table = Syllabary::standard();
    let mut bits = BitBuffer::with_capacity(count.babel_units() * UNIT_BITS);
    for (position, unit) in chars.chunks(UNIT_CHARS).enumerate() {
        let unit: String = unit.iter().collect();
        match table.value(&unit) {
            Some(value) => bits.push_bits(value as u32, UNIT_BITS),
            None => return Err(Error::UnknownUnit { unit, position }),
        }
    }

    bits.truncate(count.entropy_bits());
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_128() {
        let bits = BitBuffer::from_bytes(&[0u8; 16]);
        assert_eq!(bits_to_babel(&bits).unwrap(), "ba".repeat(22));
    }

    #[test]
    fn test_padding_in_final_unit() {
        // 0x7f repeats every 24 bits as lu tu zi zu; the last byte leaves
        // 11 + 0000 in the final unit, which renders as "sa"
        let bits = BitBuffer::from_bytes(&[0x7f; 16]);
        let babel = bits_to_babel(&bits).unwrap();
        assert_eq!(babel, format!("{}lusa", "lutuzizu".repeat(5)));

        let decoded = babel_to_bits(&babel).unwrap();
        assert_eq!(decoded.len(), 128);
        assert_eq!(decoded, bits);
    }

    #[test]
    fn test_unit_counts_per_length() {
        for count in WordCount::ALL {
            let bits = BitBuffer::from_bytes(&vec![0xa5; count.entropy_bytes()]);
            let babel = bits_to_babel(&bits).unwrap();
            assert_eq!(babel.len(), count.babel_units() * UNIT_CHARS);
            assert_eq!(babel_to_bits(&babel).unwrap(), bits);
        }
    }

    #[test]
    fn test_bits_to_babel_invalid_length() {
        let bits = BitBuffer::from_bytes(&[0u8; 17]);
        assert_eq!(bits_to_babel(&bits), Err(Error::InvalidLength(136)));
    }

    #[test]
    fn test_babel_to_bits_invalid_length() {
        // 23 units would be 138 bits, which is no valid entropy length
        let babel = "ba".repeat(23);
        assert_eq!(babel_to_bits(&babel), Err(Error::InvalidBabelLength(46)));

        // half a unit dangling
        let babel = format!("{}b", "ba".repeat(22));
        assert_eq!(babel_to_bits(&babel), Err(Error::InvalidBabelLength(45)));

        assert_eq!(babel_to_bits(""), Err(Error::InvalidBabelLength(0)));
    }

    #[test]
    fn test_babel_to_bits_unknown_unit() {
        let mut babel = "ba".repeat(22);
        babel.replace_range(6..8, "ce");
        assert_eq!(
            babel_to_bits(&babel),
            Err(Error::UnknownUnit {
                unit: "ce".to_string(),
                position: 3,
            })
        );
    }

    #[test]
    fn test_babel_to_bits_non_ascii_unit() {
        let babel = format!("bä{}", "ba".repeat(21));
        assert!(matches!(
            babel_to_bits(&babel),
            Err(Error::UnknownUnit { position: 0, .. })
        ));
    }

    #[test]
    fn test_babel_to_bits_is_case_insensitive() {
        let lower = babel_to_bits(&"zu".repeat(43)).unwrap();
        let upper = babel_to_bits(&"ZU".repeat(43)).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_nonzero_pad_bits_are_ignored() {
        // "ba" ends a 128-bit string with pad 0000; "bu" sets the two low pad bits
        let canonical = "ba".repeat(22);
        let padded = format!("{}bu", "ba".repeat(21));
        assert_eq!(
            babel_to_bits(&canonical).unwrap(),
            babel_to_bits(&padded).unwrap()
        );
    }

    #[test]
    fn test_format_babel_default() {
        let babel = "lutuzizulutuzizulutuzizulutuzizulutuzizulusa";
        let formatted = format_babel(babel, &BabelFormat::default());
        assert_eq!(
            formatted,
            "lutu-zizu-lutu-zizu-lutu-zizu-lutu-zizu-lutu-zizu-lusa"
        );
        assert_eq!(strip_separators(&formatted), babel);
    }

    #[test]
    fn test_format_babel_custom_groups() {
        let babel = "ba".repeat(22);
        let format = BabelFormat {
            separator: Separator::Space,
            group_units: 11,
        };
        let formatted = format_babel(&babel, &format);
        assert_eq!(formatted, format!("{} {}", "ba".repeat(11), "ba".repeat(11)));

        let ungrouped = BabelFormat {
            group_units: 0,
            ..BabelFormat::default()
        };
        assert_eq!(format_babel(&formatted, &ungrouped), babel);
    }

    #[test]
    fn test_format_babel_oversized_group() {
        let babel = "ba".repeat(22);
        let format = BabelFormat {
            separator: Separator::Dot,
            group_units: usize::MAX,
        };
        assert_eq!(format_babel(&babel, &format), babel);

        let format = BabelFormat {
            group_units: 100,
            ..format
        };
        assert_eq!(format_babel(&babel, &format), babel);
    }

    #[test]
    fn test_formatted_decodes_like_plain() {
        let bits = BitBuffer::from_bytes(&[0x9e; 32]);
        let babel = bits_to_babel(&bits).unwrap();
        for separator in [
            Separator::Hyphen,
            Separator::Dot,
            Separator::Space,
            Separator::Underscore,
        ] {
            let format = BabelFormat {
                separator,
                group_units: 3,
            };
            let formatted = format_babel(&babel, &format);
            assert_eq!(babel_to_bits(&formatted).unwrap(), bits);
        }
    }

    #[test]
    fn test_separator_from_str() {
        assert_eq!("hyphen".parse::<Separator>(), Ok(Separator::Hyphen));
        assert_eq!(".".parse::<Separator>(), Ok(Separator::Dot));
        assert!("comma".parse::<Separator>().is_err());
    }

    #[test]
    fn test_format_serde() {
        let format: BabelFormat =
            serde_json::from_str(r#"{"separator":"dot","group_units":4}"#).unwrap();
        assert_eq!(format.separator, Separator::Dot);
        assert_eq!(format.group_units, 4);

        let defaults: BabelFormat = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, BabelFormat::default());
    }
}
