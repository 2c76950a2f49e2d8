//! Typing texts and difficulty selection.
//!
//! A bank is a TOML list of `[[texts]]` entries, each a display title and the
//! hiragana reading the player types. Every text is bucketed into a [`Level`]
//! by reading length when the bank is built.

use std::sync::OnceLock;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::romaji::{is_romanizable, romanize};
use crate::settings::{settings, LevelSettings};

pub const DEFAULT_BANK_TOML: &str = include_str!("default_bank.toml");

#[derive(Debug, thiserror::Error)]
pub enum TextBankError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("text bank is empty")]
    Empty,
    #[error("text {index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("text {index} ({title}) has an untypeable reading: {kana:?}")]
    InvalidKana {
        index: usize,
        title: String,
        kana: String,
    },
    #[error("unknown level: {0}")]
    InvalidLevel(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingText {
    /// Shown to the player, may contain kanji and katakana.
    pub title: String,
    /// Hiragana reading that is romanized into the typing target.
    pub kana: String,
}

impl TypingText {
    pub fn new(title: impl Into<String>, kana: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kana: kana.into(),
        }
    }

    pub fn kana_len(&self) -> usize {
        self.kana.chars().count()
    }

    /// Canonical romaji of the reading.
    pub fn romaji(&self) -> String {
        romanize(&self.kana)
    }
}

/// Difficulty bucket. Numeric values 0/1/2 are accepted through `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = TextBankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Beginner),
            1 => Ok(Level::Intermediate),
            2 => Ok(Level::Advanced),
            other => Err(TextBankError::InvalidLevel(other)),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" | "0" => Ok(Level::Beginner),
            "intermediate" | "1" => Ok(Level::Intermediate),
            "advanced" | "2" => Ok(Level::Advanced),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct BankFile {
    texts: Vec<TypingText>,
}

#[derive(Debug, Clone)]
pub struct TextBank {
    texts: Vec<TypingText>,
    levels: Vec<Level>,
}

impl TextBank {
    /// The embedded bank, bucketed with the global settings.
    pub fn builtin() -> &'static TextBank {
        static INSTANCE: OnceLock<TextBank> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            TextBank::parse(DEFAULT_BANK_TOML, &settings().levels)
                .expect("embedded text bank must be valid")
        })
    }

    pub fn parse(toml_str: &str, levels: &LevelSettings) -> Result<Self, TextBankError> {
        let file: BankFile =
            toml::from_str(toml_str).map_err(|e| TextBankError::Parse(e.to_string()))?;
        Self::from_texts(file.texts, levels)
    }

    pub fn from_texts(texts: Vec<TypingText>, levels: &LevelSettings) -> Result<Self, TextBankError> {
        if texts.is_empty() {
            return Err(TextBankError::Empty);
        }
        for (index, text) in texts.iter().enumerate() {
            if text.title.trim().is_empty() {
                return Err(TextBankError::EmptyTitle { index });
            }
            if text.kana.is_empty() || !is_romanizable(&text.kana) || text.romaji().is_empty() {
                return Err(TextBankError::InvalidKana {
                    index,
                    title: text.title.clone(),
                    kana: text.kana.clone(),
                });
            }
        }
        let buckets = texts.iter().map(|t| levels.classify(t.kana_len())).collect();
        Ok(Self {
            texts,
            levels: buckets,
        })
    }

    /// Serialize back to the `[[texts]]` TOML layout.
    pub fn to_toml(&self) -> Result<String, TextBankError> {
        let file = BankFile {
            texts: self.texts.clone(),
        };
        toml::to_string(&file).map_err(|e| TextBankError::Parse(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypingText, Level)> {
        self.texts.iter().zip(self.levels.iter().copied())
    }

    pub fn texts_for(&self, level: Level) -> impl Iterator<Item = &TypingText> {
        self.iter()
            .filter(move |&(_, l)| l == level)
            .map(|(text, _)| text)
    }

    /// Uniformly random text of `level`. Falls back to the whole bank when the
    /// bucket is empty; `None` only when the bank itself is empty.
    pub fn pick<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Option<&TypingText> {
        let bucket: Vec<&TypingText> = self.texts_for(level).collect();
        if bucket.is_empty() {
            debug!(level = level.as_str(), "empty level bucket, picking from whole bank");
            if self.texts.is_empty() {
                return None;
            }
            return self.texts.get(rng.random_range(0..self.texts.len()));
        }
        bucket.get(rng.random_range(0..bucket.len())).copied()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};

    fn levels() -> LevelSettings {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap().levels
    }

    fn small_bank() -> TextBank {
        let texts = vec![
            TypingText::new("計測", "けいそく"),
            TypingText::new("解析学", "かいせきがく"),
            TypingText::new("情報リテラシ", "じょうほうりてらし"),
        ];
        TextBank::from_texts(texts, &levels()).unwrap()
    }

    #[test]
    fn default_bank_parses() {
        let bank = TextBank::parse(DEFAULT_BANK_TOML, &levels()).unwrap();
        assert_eq!(bank.len(), 63);
        assert_eq!(bank.texts_for(Level::Beginner).count(), 22);
        assert_eq!(bank.texts_for(Level::Intermediate).count(), 33);
        assert_eq!(bank.texts_for(Level::Advanced).count(), 8);
        let (first, level) = bank.iter().next().unwrap();
        assert_eq!(first.title, "情報工学概論");
        assert_eq!(level, Level::Intermediate);
    }

    #[test]
    fn builtin_matches_embedded() {
        assert_eq!(TextBank::builtin().len(), 63);
    }

    #[test]
    fn every_builtin_reading_is_typeable() {
        for (text, _) in TextBank::builtin().iter() {
            assert!(is_romanizable(&text.kana), "{}", text.title);
            assert!(text.romaji().is_ascii(), "{}", text.title);
        }
    }

    #[test]
    fn level_from_u8() {
        assert_eq!(Level::try_from(0).unwrap(), Level::Beginner);
        assert_eq!(Level::try_from(2).unwrap(), Level::Advanced);
        assert!(matches!(Level::try_from(3), Err(TextBankError::InvalidLevel(3))));
        assert_eq!("Intermediate".parse::<Level>(), Ok(Level::Intermediate));
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn pick_respects_level() {
        let bank = small_bank();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let text = bank.pick(Level::Beginner, &mut rng).unwrap();
            assert!(text.kana_len() <= 8);
        }
        let text = bank.pick(Level::Intermediate, &mut rng).unwrap();
        assert_eq!(text.title, "情報リテラシ");
    }

    #[test]
    fn pick_is_reproducible_with_seed() {
        let bank = TextBank::builtin();
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| bank.pick(Level::Intermediate, &mut rng).unwrap().clone()).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| bank.pick(Level::Intermediate, &mut rng).unwrap().clone()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn pick_falls_back_to_whole_bank() {
        let bank = small_bank();
        assert_eq!(bank.texts_for(Level::Advanced).count(), 0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(bank.pick(Level::Advanced, &mut rng).is_some());
    }

    #[test]
    fn error_empty_bank() {
        assert!(matches!(
            TextBank::parse("texts = []", &levels()),
            Err(TextBankError::Empty)
        ));
        assert!(matches!(
            TextBank::parse("", &levels()),
            Err(TextBankError::Parse(_))
        ));
    }

    #[test]
    fn error_empty_title() {
        let toml = r#"
[[texts]]
title = "計測"
kana = "けいそく"

[[texts]]
title = "  "
kana = "かいせきがく"
"#;
        let err = TextBank::parse(toml, &levels()).unwrap_err();
        assert!(matches!(err, TextBankError::EmptyTitle { index: 1 }));
    }

    #[test]
    fn error_invalid_kana() {
        let toml = r#"
[[texts]]
title = "コンパイラ"
kana = "コンパイラ"
"#;
        let err = TextBank::parse(toml, &levels()).unwrap_err();
        assert!(matches!(err, TextBankError::InvalidKana { index: 0, .. }));
        assert!(err.to_string().contains("コンパイラ"));
    }

    #[test]
    fn to_toml_round_trips_texts() {
        let bank = small_bank();
        let reparsed = TextBank::parse(&bank.to_toml().unwrap(), &levels()).unwrap();
        let a: Vec<_> = bank.iter().collect();
        let b: Vec<_> = reparsed.iter().collect();
        assert_eq!(a, b);
    }
}
