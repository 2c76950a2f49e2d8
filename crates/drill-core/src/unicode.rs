//! Character-level classification for typing-challenge readings.

/// Small vowel kana that modify the preceding mora (ぁぃぅぇぉ).
pub fn is_small_vowel(c: char) -> bool {
    matches!(c, 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ')
}

/// Small y-kana that form a yōon digraph with the preceding mora (ゃゅょ).
pub fn is_small_y(c: char) -> bool {
    matches!(c, 'ゃ' | 'ゅ' | 'ょ')
}
