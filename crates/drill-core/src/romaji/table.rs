//! Kana → romaji production table.
//!
//! Every entry is the literal string a player types against, so values must
//! not be "corrected" without a product decision (see the ひ row).

/// How a single mora is romanized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    /// Always the same output.
    Fixed(&'static str),
    /// Output depends on the following mora; `default` when no variant matches.
    Contextual {
        default: &'static str,
        variants: &'static [(char, &'static str)],
    },
    /// ん: doubled before a vowel, な-row, や-row or another ん.
    Hatsuon,
    /// っ: geminates the consonant of the following mora.
    Sokuon,
}

const Y_VARIANTS_K: &[(char, &str)] = &[('ゃ', "kya"), ('ゅ', "kyu"), ('ぇ', "kye"), ('ょ', "kyo")];
const Y_VARIANTS_S: &[(char, &str)] = &[('ゃ', "sya"), ('ゅ', "syu"), ('ぇ', "sye"), ('ょ', "syo")];
const Y_VARIANTS_T: &[(char, &str)] = &[('ゃ', "tya"), ('ゅ', "tyu"), ('ぇ', "tye"), ('ょ', "tyo")];
const Y_VARIANTS_N: &[(char, &str)] = &[('ゃ', "nya"), ('ゅ', "nyu"), ('ぇ', "nye"), ('ょ', "nyo")];
const Y_VARIANTS_M: &[(char, &str)] = &[('ゃ', "mya"), ('ゅ', "myu"), ('ぇ', "mye"), ('ょ', "myo")];
const Y_VARIANTS_R: &[(char, &str)] = &[('ゃ', "rya"), ('ゅ', "ryu"), ('ぇ', "rye"), ('ょ', "ryo")];
const Y_VARIANTS_G: &[(char, &str)] = &[('ゃ', "gya"), ('ゅ', "gyu"), ('ぇ', "gye"), ('ょ', "gyo")];
const Y_VARIANTS_Z: &[(char, &str)] = &[('ゃ', "zya"), ('ゅ', "zyu"), ('ぇ', "zye"), ('ょ', "zyo")];
const Y_VARIANTS_D: &[(char, &str)] = &[('ゃ', "dya"), ('ゅ', "dyu"), ('ぇ', "dye"), ('ょ', "dyo")];
const Y_VARIANTS_B: &[(char, &str)] = &[('ゃ', "bya"), ('ゅ', "byu"), ('ぇ', "bye"), ('ょ', "byo")];
const Y_VARIANTS_P: &[(char, &str)] = &[('ゃ', "pya"), ('ゅ', "pyu"), ('ぇ', "pye"), ('ょ', "pyo")];

const Y_VARIANTS_H: &[(char, &str)] = &[('ゃ', "hya"), ('ゅ', "hyu"), ('ぇ', "hye"), ('ょ', "hyo")];
/// Known anomaly: plain ひ emits "ni", not "hi". The digraphs are regular.
/// Changing it changes what players must type.
const HI_DEFAULT: &str = "ni";

pub(super) const KANA_TABLE: &[(char, Production)] = &[
    ('あ', Production::Fixed("a")),
    ('い', Production::Fixed("i")),
    (
        'う',
        Production::Contextual {
            default: "u",
            variants: &[('ぁ', "wha"), ('ぃ', "whi"), ('ぇ', "whe"), ('ぉ', "who")],
        },
    ),
    ('え', Production::Fixed("e")),
    ('お', Production::Fixed("o")),
    // k
    ('か', Production::Fixed("ka")),
    ('き', Production::Contextual { default: "ki", variants: Y_VARIANTS_K }),
    ('く', Production::Fixed("ku")),
    ('け', Production::Fixed("ke")),
    ('こ', Production::Fixed("ko")),
    // s
    ('さ', Production::Fixed("sa")),
    ('し', Production::Contextual { default: "si", variants: Y_VARIANTS_S }),
    ('す', Production::Fixed("su")),
    ('せ', Production::Fixed("se")),
    ('そ', Production::Fixed("so")),
    // t
    ('た', Production::Fixed("ta")),
    ('ち', Production::Contextual { default: "ti", variants: Y_VARIANTS_T }),
    (
        'つ',
        Production::Contextual {
            default: "tu",
            variants: &[('ぁ', "tsa"), ('ぃ', "tsi"), ('ぇ', "tse"), ('ぉ', "tso")],
        },
    ),
    (
        'て',
        Production::Contextual {
            default: "te",
            variants: &[('ゃ', "tha"), ('ぃ', "thi"), ('ゅ', "thu"), ('ぇ', "the"), ('ょ', "tho")],
        },
    ),
    (
        'と',
        Production::Contextual {
            default: "to",
            variants: &[('ぁ', "twa"), ('ぃ', "twi"), ('ぅ', "twu"), ('ぇ', "twe"), ('ぉ', "two")],
        },
    ),
    // n
    ('な', Production::Fixed("na")),
    ('に', Production::Contextual { default: "ni", variants: Y_VARIANTS_N }),
    ('ぬ', Production::Fixed("nu")),
    ('ね', Production::Fixed("ne")),
    ('の', Production::Fixed("no")),
    // h
    ('は', Production::Fixed("ha")),
    ('ひ', Production::Contextual { default: HI_DEFAULT, variants: Y_VARIANTS_H }),
    (
        'ふ',
        Production::Contextual {
            default: "hu",
            variants: &[('ぁ', "fa"), ('ぃ', "fi"), ('ぇ', "fe"), ('ぉ', "fo")],
        },
    ),
    ('へ', Production::Fixed("he")),
    ('ほ', Production::Fixed("ho")),
    // m
    ('ま', Production::Fixed("ma")),
    ('み', Production::Contextual { default: "mi", variants: Y_VARIANTS_M }),
    ('む', Production::Fixed("mu")),
    ('め', Production::Fixed("me")),
    ('も', Production::Fixed("mo")),
    // y
    ('や', Production::Fixed("ya")),
    ('ゆ', Production::Fixed("yu")),
    ('よ', Production::Fixed("yo")),
    // r
    ('ら', Production::Fixed("ra")),
    ('り', Production::Contextual { default: "ri", variants: Y_VARIANTS_R }),
    ('る', Production::Fixed("ru")),
    ('れ', Production::Fixed("re")),
    ('ろ', Production::Fixed("ro")),
    // w
    ('わ', Production::Fixed("wa")),
    ('を', Production::Fixed("wo")),
    ('ん', Production::Hatsuon),
    // g
    ('が', Production::Fixed("ga")),
    ('ぎ', Production::Contextual { default: "gi", variants: Y_VARIANTS_G }),
    ('ぐ', Production::Fixed("gu")),
    ('げ', Production::Fixed("ge")),
    ('ご', Production::Fixed("go")),
    // z
    ('ざ', Production::Fixed("za")),
    ('じ', Production::Contextual { default: "zi", variants: Y_VARIANTS_Z }),
    ('ず', Production::Fixed("zu")),
    ('ぜ', Production::Fixed("ze")),
    ('ぞ', Production::Fixed("zo")),
    // d
    ('だ', Production::Fixed("da")),
    ('ぢ', Production::Contextual { default: "di", variants: Y_VARIANTS_D }),
    ('づ', Production::Fixed("du")),
    (
        'で',
        Production::Contextual {
            default: "de",
            variants: &[('ゃ', "dha"), ('ぃ', "dhi"), ('ゅ', "dhu"), ('ぇ', "dhe"), ('ょ', "dho")],
        },
    ),
    (
        'ど',
        Production::Contextual {
            default: "do",
            variants: &[('ぁ', "dwa"), ('ぃ', "dwi"), ('ぅ', "dwu"), ('ぇ', "dwe"), ('ぉ', "dwo")],
        },
    ),
    // b
    ('ば', Production::Fixed("ba")),
    ('び', Production::Contextual { default: "bi", variants: Y_VARIANTS_B }),
    ('ぶ', Production::Fixed("bu")),
    ('べ', Production::Fixed("be")),
    ('ぼ', Production::Fixed("bo")),
    // p
    ('ぱ', Production::Fixed("pa")),
    ('ぴ', Production::Contextual { default: "pi", variants: Y_VARIANTS_P }),
    ('ぷ', Production::Fixed("pu")),
    ('ぺ', Production::Fixed("pe")),
    ('ぽ', Production::Fixed("po")),
    ('っ', Production::Sokuon),
    // symbols
    ('ー', Production::Fixed("-")),
    ('、', Production::Fixed(",")),
    ('。', Production::Fixed(".")),
];

/// Moras after which ん is written "nn".
pub(super) const HATSUON_DOUBLING_FOLLOWERS: &[char] = &[
    'あ', 'い', 'う', 'え', 'お', 'な', 'に', 'ぬ', 'ね', 'の', 'や', 'ゆ', 'よ', 'ん',
];

/// Row → geminated consonant for っ.
pub(super) const GEMINATE_ROWS: &[(&str, char)] = &[
    ("かきくけこ", 'k'),
    ("さしすせそ", 's'),
    ("たちつてと", 't'),
    ("はひふへほ", 'h'),
    ("まみむめも", 'm'),
    ("やゆよ", 'y'),
    ("がぎぐげご", 'g'),
    ("ざじずぜぞ", 'z'),
    ("だぢづでど", 'd'),
    ("ばびぶべぼ", 'b'),
    ("ぱぴぷぺぽ", 'p'),
];

/// Written for っ when the next mora has no consonant to double.
pub(super) const SOKUON_FALLBACK: &str = "xtu";
