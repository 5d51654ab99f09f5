/*
 * encoder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Plain text to [`TextToken`] conversion.

use crate::TextToken;

/// Encode plain text into text tokens.
///
/// Tabs and line breaks become their own tokens. A run of `k >= 2` spaces
/// becomes one literal space followed by `SpaceRun(k - 1)`; a single space
/// stays inside the surrounding literal.
///
/// ```rust
/// use odf_text::{TextToken, encode};
///
/// assert_eq!(
///     encode("   x"),
///     vec![
///         TextToken::literal(" "),
///         TextToken::SpaceRun(2),
///         TextToken::literal("x"),
///     ]
/// );
/// ```
pub fn encode(text: &str) -> Vec<TextToken> {
    let mut encoder = Encoder::new();
    encoder.push_str(text);
    encoder.finish()
}

/// Incremental encoder.
///
/// Text may be fed in any number of pieces; the result of [`finish`]
/// is the same as encoding the concatenated input in one call.
///
/// [`finish`]: Encoder::finish
#[derive(Debug, Default)]
pub struct Encoder {
    /// Tokens emitted so far.
    tokens: Vec<TextToken>,

    /// Pending literal text, including the spaces of an open run.
    buffer: String,

    /// Length of the space run at the end of `buffer`.
    open_spaces: usize,
}

impl Encoder {
    /// Create an encoder with no pending text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed every character of `text`.
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c);
        }
    }

    /// Feed a single character.
    pub fn push(&mut self, c: char) {
        match c {
            '\n' => {
                self.close_run();
                self.tokens.push(TextToken::LineBreak);
            }
            '\t' => {
                self.close_run();
                self.tokens.push(TextToken::Tab);
            }
            ' ' => {
                self.buffer.push(' ');
                self.open_spaces += 1;
            }
            _ => {
                if self.open_spaces > 1 {
                    self.close_run();
                } else {
                    self.open_spaces = 0;
                }
                self.buffer.push(c);
            }
        }
    }

    /// Flush pending text and return the token sequence.
    pub fn finish(mut self) -> Vec<TextToken> {
        self.close_run();
        tracing::trace!(tokens = self.tokens.len(), "encoded text");
        self.tokens
    }

    /// Emit the pending literal and, for runs of two or more spaces, the
    /// trailing `SpaceRun`.
    fn close_run(&mut self) {
        let extra = self.open_spaces.saturating_sub(1);
        self.open_spaces = 0;

        // The extra spaces are ASCII, one byte each.
        self.buffer.truncate(self.buffer.len() - extra);
        self.flush_literal();
        if extra > 0 {
            self.tokens.push(TextToken::SpaceRun(extra));
        }
    }

    fn flush_literal(&mut self) {
        if !self.buffer.is_empty() {
            self.tokens
                .push(TextToken::Literal(std::mem::take(&mut self.buffer)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> TextToken {
        TextToken::literal(text)
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(""), vec![]);
    }

    #[test]
    fn test_single_space() {
        assert_eq!(encode(" "), vec![lit(" ")]);
    }

    #[test]
    fn test_two_spaces() {
        assert_eq!(encode("  "), vec![lit(" "), TextToken::SpaceRun(1)]);
    }

    #[test]
    fn test_leading_run() {
        assert_eq!(
            encode("   x"),
            vec![lit(" "), TextToken::SpaceRun(2), lit("x")]
        );
    }

    #[test]
    fn test_interior_spaces() {
        assert_eq!(encode("a b"), vec![lit("a b")]);
        assert_eq!(
            encode("a  b"),
            vec![lit("a "), TextToken::SpaceRun(1), lit("b")]
        );
        assert_eq!(encode("a b c"), vec![lit("a b c")]);
    }

    #[test]
    fn test_adjacent_controls() {
        assert_eq!(encode("\t\n"), vec![TextToken::Tab, TextToken::LineBreak]);
    }

    #[test]
    fn test_controls_close_runs() {
        assert_eq!(
            encode("a   \tb \n"),
            vec![
                lit("a "),
                TextToken::SpaceRun(2),
                TextToken::Tab,
                lit("b "),
                TextToken::LineBreak,
            ]
        );
    }

    #[test]
    fn test_trailing_run() {
        assert_eq!(
            encode("end    "),
            vec![lit("end "), TextToken::SpaceRun(3)]
        );
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(
            encode("größe  ü"),
            vec![lit("größe "), TextToken::SpaceRun(1), lit("ü")]
        );
    }

    #[test]
    fn test_incremental_matches_whole() {
        let text = "one  two\t three   \nfour";
        let mut encoder = Encoder::new();
        for piece in ["one ", " two\t", " three ", "  \nfo", "ur"] {
            encoder.push_str(piece);
        }
        assert_eq!(encoder.finish(), encode(text));
    }
}
