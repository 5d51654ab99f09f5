/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Whitespace-preserving text tokens.
 *
 * Markup formats such as OpenDocument collapse repeated whitespace, so
 * tabs, line breaks and runs of two or more spaces have to be stored as
 * dedicated elements. This crate converts plain text into a sequence of
 * [`TextToken`]s that carry that information and folds such a sequence
 * back into the exact original text.
 */

//! # Example
//!
//! ```rust
//! use odf_text::{TextToken, decode, encode};
//!
//! let tokens = encode("a  b\tc");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         TextToken::literal("a "),
//!         TextToken::SpaceRun(1),
//!         TextToken::literal("b"),
//!         TextToken::Tab,
//!         TextToken::literal("c"),
//!     ]
//! );
//! assert_eq!(decode(&tokens), "a  b\tc");
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod token;

pub use decoder::{decode, decoded_len};
pub use encoder::{Encoder, encode};
pub use error::{Error, Result};
pub use token::{
    COUNT_ATTRIBUTE, LINE_BREAK_TAG, SPACE_TAG, TAB_TAG, TextToken, TokenKind, parse_space_count,
};
