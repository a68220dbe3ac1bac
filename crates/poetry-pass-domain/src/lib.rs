//! poetry-pass Domain Layer
//!
//! Value types and predicates shared by the corpus extractors. This crate has
//! no runtime dependencies; parsing, I/O and configuration live in
//! `poetry-pass-extractor`.
//!
//! ## Key Concepts
//!
//! - **Code point**: every length and range check counts Unicode scalar values,
//!   never bytes
//! - **Common ideograph**: a character in U+4E00..=U+9FFF
//! - **Length bounds**: inclusive code-point length range a fragment must fit
//! - **Level ceiling**: highest proficiency tier (`new-1` .. `new-N`) a
//!   vocabulary entry may be tagged with

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod charset;
pub mod length;
pub mod level;

// Re-exports for convenience
pub use charset::{contains_rare_chars, is_common_ideograph, COMMON_IDEOGRAPHS};
pub use length::{char_len, LengthBounds};
pub use level::{LevelCeiling, DEFAULT_LEVEL_PREFIX};
