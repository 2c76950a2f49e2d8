//! Kana-to-romaji conversion for typing targets.
//!
//! Produces one canonical spelling per reading; the matcher accepts the
//! alternate spellings on the fly.

mod romanize;
mod table;

pub use romanize::{is_romanizable, romanize, romanize_chars, RomajiPiece, RomajiTable};
pub use table::Production;
