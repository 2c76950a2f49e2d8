use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use super::table::{
    Production, GEMINATE_ROWS, HATSUON_DOUBLING_FOLLOWERS, KANA_TABLE, SOKUON_FALLBACK,
};
use crate::unicode::{is_small_vowel, is_small_y};

pub struct RomajiTable {
    productions: HashMap<char, Production>,
}

impl RomajiTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| RomajiTable {
            productions: KANA_TABLE.iter().copied().collect(),
        })
    }

    pub fn production(&self, kana: char) -> Option<Production> {
        self.productions.get(&kana).copied()
    }

    /// Romanize one mora given the mora that follows it (`None` at end of input).
    /// Returns `None` for characters outside the table.
    pub fn romanize_mora(&self, kana: char, next: Option<char>) -> Option<RomajiPiece> {
        let piece = match self.production(kana)? {
            Production::Fixed(s) => RomajiPiece::Str(s),
            Production::Contextual { default, variants } => RomajiPiece::Str(
                next.and_then(|n| variants.iter().find(|&&(k, _)| k == n))
                    .map_or(default, |&(_, s)| s),
            ),
            Production::Hatsuon => match next {
                Some(n) if HATSUON_DOUBLING_FOLLOWERS.contains(&n) => RomajiPiece::Str("nn"),
                _ => RomajiPiece::Str("n"),
            },
            Production::Sokuon => match next.and_then(geminate_consonant) {
                Some(c) => RomajiPiece::Char(c),
                None => RomajiPiece::Str(SOKUON_FALLBACK),
            },
        };
        Some(piece)
    }
}

/// Output of a single mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomajiPiece {
    Str(&'static str),
    Char(char),
}

impl RomajiPiece {
    fn push_to(self, out: &mut Vec<char>) {
        match self {
            RomajiPiece::Str(s) => out.extend(s.chars()),
            RomajiPiece::Char(c) => out.push(c),
        }
    }
}

fn geminate_consonant(next: char) -> Option<char> {
    GEMINATE_ROWS
        .iter()
        .find(|(row, _)| row.contains(next))
        .map(|&(_, c)| c)
}

/// Small kana are consumed through the lookahead of the mora before them.
fn is_lookahead_only(c: char) -> bool {
    is_small_vowel(c) || is_small_y(c)
}

/// Romanize a kana sequence into the canonical romaji the matcher expects.
///
/// Single left-to-right pass with one mora of lookahead. The following mora is
/// peeked, not consumed: small kana are visited in their own iteration and
/// produce nothing. Characters outside the table are dropped.
pub fn romanize_chars(kana: &[char]) -> Vec<char> {
    let _span = debug_span!("romanize", mora_count = kana.len()).entered();
    let table = RomajiTable::global();
    let mut roman = Vec::with_capacity(kana.len() * 2);

    for (i, &mora) in kana.iter().enumerate() {
        let next = kana.get(i + 1).copied();
        match table.romanize_mora(mora, next) {
            Some(piece) => piece.push_to(&mut roman),
            None if is_lookahead_only(mora) => {}
            None => debug!(?mora, "dropping unmapped character"),
        }
    }

    roman
}

/// String convenience over [`romanize_chars`].
pub fn romanize(kana: &str) -> String {
    let chars: Vec<char> = kana.chars().collect();
    romanize_chars(&chars).into_iter().collect()
}

/// True when every character is either in the table or a small kana consumed
/// through lookahead.
pub fn is_romanizable(kana: &str) -> bool {
    let table = RomajiTable::global();
    kana.chars()
        .all(|c| table.production(c).is_some() || is_lookahead_only(c))
}
