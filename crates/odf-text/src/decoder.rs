/*
 * decoder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! [`TextToken`] to plain text conversion.

use crate::TextToken;

/// Fold a token sequence back into plain text.
pub fn decode(tokens: &[TextToken]) -> String {
    let mut out = String::with_capacity(decoded_len(tokens));
    for token in tokens {
        token.render_into(&mut out);
    }
    out
}

/// Number of characters `decode` produces for `tokens`.
pub fn decoded_len(tokens: &[TextToken]) -> usize {
    tokens.iter().map(TextToken::text_len).sum()
}
