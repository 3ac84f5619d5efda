//! Input tokenization.
//!
//! Converts raw player input into a stream of lowercase words.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Trims and lowercases the input
    /// - Splits on any run of whitespace
    ///
    /// Punctuation is kept: item and room ids may contain it.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .trim()
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
