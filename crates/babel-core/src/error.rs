//! Error types for babel-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),

    #[error("Unknown word '{word}' at position {position}")]
    UnknownWord { word: String, position: usize },

    #[error("Invalid bitstream length: {0} bits")]
    InvalidLength(usize),

    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },

    #[error("Invalid babel length: {0} characters (expected 44, 54, 64, 76 or 86)")]
    InvalidBabelLength(usize),

    #[error("Unknown unit '{unit}' at position {position}")]
    UnknownUnit { unit: String, position: usize },

    #[error("Invalid entropy length: {0} bytes (expected 16, 20, 24, 28 or 32)")]
    InvalidEntropyLength(usize),
}
