//! Alternate-spelling rules, checked in priority order when a keystroke does
//! not match the expected character verbatim. The first matching rule wins;
//! several triggers overlap, so the order below is part of the behaviour.

use super::buffer::ExpectedBuffer;
use super::os::OperatingSystem;

/// The fixed context window a rule may inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub input: char,
    pub os: OperatingSystem,
    pub prev3: Option<char>,
    pub prev2: Option<char>,
    pub prev: Option<char>,
    pub current: char,
    pub next: Option<char>,
    pub next2: Option<char>,
}

impl RuleContext {
    /// Window around the cursor. `None` when the buffer is already complete.
    pub fn from_buffer(buffer: &ExpectedBuffer, input: char, os: OperatingSystem) -> Option<Self> {
        Some(Self {
            input,
            os,
            prev3: buffer.peek(-3),
            prev2: buffer.peek(-2),
            prev: buffer.peek(-1),
            current: buffer.current()?,
            next: buffer.peek(1),
            next2: buffer.peek(2),
        })
    }
}

/// Platforms a rule is active on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsGate {
    Any,
    Windows,
    Mac,
}

impl OsGate {
    fn allows(self, os: OperatingSystem) -> bool {
        match self {
            OsGate::Any => true,
            OsGate::Windows => os == OperatingSystem::Windows,
            OsGate::Mac => os == OperatingSystem::Mac,
        }
    }
}

pub struct AlternateRule {
    pub name: &'static str,
    pub gate: OsGate,
    predicate: fn(&RuleContext) -> bool,
    edit: fn(&RuleContext, &mut ExpectedBuffer),
}

impl AlternateRule {
    pub fn matches(&self, ctx: &RuleContext) -> bool {
        self.gate.allows(ctx.os) && (self.predicate)(ctx)
    }

    /// Rewrite the buffer so the character under the cursor equals `ctx.input`.
    /// The caller advances the cursor afterwards.
    pub(crate) fn apply(&self, ctx: &RuleContext, buffer: &mut ExpectedBuffer) {
        (self.edit)(ctx, buffer);
    }
}

impl std::fmt::Debug for AlternateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlternateRule")
            .field("name", &self.name)
            .field("gate", &self.gate)
            .finish()
    }
}

fn is(c: Option<char>, set: &str) -> bool {
    c.is_some_and(|c| set.contains(c))
}

fn is_vowel_or_start(c: Option<char>) -> bool {
    c.map_or(true, |c| "aiueo".contains(c))
}

const AIEO: &str = "aieo";
const AUEO: &str = "aueo";
const NOT_AFTER_N: &str = "aiueoy";
const YOUON_CONSONANTS: &str = "kstnhmrgzdbp";
const GEMINATES: &str = "kstgzjdbp";

pub static ALTERNATE_RULES: &[AlternateRule] = &[
    // い as "yi"
    AlternateRule {
        name: "yi_for_i",
        gate: OsGate::Windows,
        predicate: |c| c.input == 'y' && c.current == 'i' && is_vowel_or_start(c.prev),
        edit: |_, b| b.insert_at(0, 'y'),
    },
    // う as "wu"
    AlternateRule {
        name: "wu_for_u",
        gate: OsGate::Any,
        predicate: |c| c.input == 'w' && c.current == 'u' && is_vowel_or_start(c.prev),
        edit: |_, b| b.insert_at(0, 'w'),
    },
    AlternateRule {
        name: "wu_after_nn",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'w'
                && c.current == 'u'
                && c.prev == Some('n')
                && c.prev2 == Some('n')
                && c.prev3 != Some('n')
        },
        edit: |_, b| b.insert_at(0, 'w'),
    },
    AlternateRule {
        name: "wu_after_xn",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'w' && c.current == 'u' && c.prev == Some('n') && c.prev2 == Some('x')
        },
        edit: |_, b| b.insert_at(0, 'w'),
    },
    AlternateRule {
        name: "whu_for_wu",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'h'
                && c.current == 'u'
                && c.prev2 != Some('t')
                && c.prev2 != Some('d')
                && c.prev == Some('w')
        },
        edit: |_, b| b.insert_at(0, 'h'),
    },
    // か く こ as "ca cu co"
    AlternateRule {
        name: "c_for_k",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'c' && c.prev != Some('k') && c.current == 'k' && is(c.next, "auo")
        },
        edit: |_, b| b.replace_at(0, 'c'),
    },
    // く as "qu"
    AlternateRule {
        name: "q_for_ku",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'q' && c.prev != Some('k') && c.current == 'k' && c.next == Some('u')
        },
        edit: |_, b| b.replace_at(0, 'q'),
    },
    // し as "shi"
    AlternateRule {
        name: "shi_for_si",
        gate: OsGate::Any,
        predicate: |c| c.input == 'h' && c.prev == Some('s') && c.current == 'i',
        edit: |_, b| b.insert_at(0, 'h'),
    },
    // じ as "ji"
    AlternateRule {
        name: "ji_for_zi",
        gate: OsGate::Any,
        predicate: |c| c.input == 'j' && c.current == 'z' && c.next == Some('i'),
        edit: |_, b| b.replace_at(0, 'j'),
    },
    // しゃ行 as "sha"
    AlternateRule {
        name: "sha_for_sya",
        gate: OsGate::Any,
        predicate: |c| c.input == 'h' && c.prev == Some('s') && c.current == 'y',
        edit: |_, b| b.replace_at(0, 'h'),
    },
    // じゃ行 as "ja"
    AlternateRule {
        name: "ja_for_zya",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'j'
                && c.prev != Some('z')
                && c.current == 'z'
                && c.next == Some('y')
                && is(c.next2, AUEO)
        },
        edit: |_, b| {
            b.replace_at(0, 'j');
            b.remove_at(1);
        },
    },
    AlternateRule {
        name: "jya_for_ja",
        gate: OsGate::Any,
        predicate: |c| c.input == 'y' && c.prev == Some('j') && AUEO.contains(c.current),
        edit: |_, b| b.insert_at(0, 'y'),
    },
    // し せ as "ci ce"
    AlternateRule {
        name: "c_for_s",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'c' && c.prev != Some('s') && c.current == 's' && is(c.next, "ie")
        },
        edit: |_, b| b.replace_at(0, 'c'),
    },
    // ち as "chi"
    AlternateRule {
        name: "chi_for_ti",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'c' && c.prev != Some('t') && c.current == 't' && c.next == Some('i')
        },
        edit: |_, b| {
            b.replace_at(0, 'c');
            b.insert_at(1, 'h');
        },
    },
    // ちゃ行 as "cya"
    AlternateRule {
        name: "cya_for_tya",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'c' && c.prev != Some('t') && c.current == 't' && c.next == Some('y')
        },
        edit: |_, b| b.replace_at(0, 'c'),
    },
    // "cya" as "cha"
    AlternateRule {
        name: "cha_for_cya",
        gate: OsGate::Any,
        predicate: |c| c.input == 'h' && c.prev == Some('c') && c.current == 'y',
        edit: |_, b| b.replace_at(0, 'h'),
    },
    // つ as "tsu"
    AlternateRule {
        name: "tsu_for_tu",
        gate: OsGate::Any,
        predicate: |c| c.input == 's' && c.prev == Some('t') && c.current == 'u',
        edit: |_, b| b.insert_at(0, 's'),
    },
    // つぁ行 split as "tuxa" / "tsuxa"
    AlternateRule {
        name: "tuxa_for_tsa",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'u' && c.prev == Some('t') && c.current == 's' && is(c.next, AIEO)
        },
        edit: |_, b| {
            b.replace_at(0, 'u');
            b.insert_at(1, 'x');
        },
    },
    AlternateRule {
        name: "tsuxa_for_tsa",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'u'
                && c.prev2 == Some('t')
                && c.prev == Some('s')
                && AIEO.contains(c.current)
        },
        edit: |_, b| {
            b.insert_at(0, 'u');
            b.insert_at(1, 'x');
        },
    },
    // てぃ as "texi"
    AlternateRule {
        name: "texi_for_thi",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'e' && c.prev == Some('t') && c.current == 'h' && c.next == Some('i')
        },
        edit: |_, b| {
            b.replace_at(0, 'e');
            b.insert_at(1, 'x');
        },
    },
    // でぃ as "dexi"
    AlternateRule {
        name: "dexi_for_dhi",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'e' && c.prev == Some('d') && c.current == 'h' && c.next == Some('i')
        },
        edit: |_, b| {
            b.replace_at(0, 'e');
            b.insert_at(1, 'x');
        },
    },
    // でゅ as "dexyu"
    AlternateRule {
        name: "dexyu_for_dhu",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'e' && c.prev == Some('d') && c.current == 'h' && c.next == Some('u')
        },
        edit: |_, b| {
            b.replace_at(0, 'e');
            b.insert_at(1, 'x');
            b.insert_at(2, 'y');
        },
    },
    // とぅ as "toxu"
    AlternateRule {
        name: "toxu_for_twu",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'o' && c.prev == Some('t') && c.current == 'w' && c.next == Some('u')
        },
        edit: |_, b| {
            b.replace_at(0, 'o');
            b.insert_at(1, 'x');
        },
    },
    // どぅ as "doxu"
    AlternateRule {
        name: "doxu_for_dwu",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'o' && c.prev == Some('d') && c.current == 'w' && c.next == Some('u')
        },
        edit: |_, b| {
            b.replace_at(0, 'o');
            b.insert_at(1, 'x');
        },
    },
    // ふ as "fu"
    AlternateRule {
        name: "fu_for_hu",
        gate: OsGate::Any,
        predicate: |c| c.input == 'f' && c.current == 'h' && c.next == Some('u'),
        edit: |_, b| b.replace_at(0, 'f'),
    },
    // ふぁ行: "fwa", "fyi", "hwa" (Mac) / "huxa", "fuxa"
    AlternateRule {
        name: "fwa_for_fa",
        gate: OsGate::Any,
        predicate: |c| c.input == 'w' && c.prev == Some('f') && AIEO.contains(c.current),
        edit: |_, b| b.insert_at(0, 'w'),
    },
    AlternateRule {
        name: "fyi_for_fi",
        gate: OsGate::Any,
        predicate: |c| c.input == 'y' && c.prev == Some('f') && "ie".contains(c.current),
        edit: |_, b| b.insert_at(0, 'y'),
    },
    AlternateRule {
        name: "h_for_fa",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'h' && c.prev != Some('f') && c.current == 'f' && is(c.next, AIEO)
        },
        edit: |c, b| {
            b.replace_at(0, 'h');
            if c.os == OperatingSystem::Mac {
                b.insert_at(1, 'w');
            } else {
                b.insert_at(1, 'u');
                b.insert_at(2, 'x');
            }
        },
    },
    AlternateRule {
        name: "fuxa_for_fa",
        gate: OsGate::Any,
        predicate: |c| c.input == 'u' && c.prev == Some('f') && AIEO.contains(c.current),
        edit: |_, b| {
            b.insert_at(0, 'u');
            b.insert_at(1, 'x');
        },
    },
    AlternateRule {
        name: "huxa_for_hwa",
        gate: OsGate::Mac,
        predicate: |c| {
            c.input == 'u'
                && c.prev == Some('h')
                && c.current == 'w'
                && is(c.next, AIEO)
        },
        edit: |_, b| {
            b.replace_at(0, 'u');
            b.insert_at(1, 'x');
        },
    },
    // ん as "nn" before a consonant ("n'" is not supported)
    AlternateRule {
        name: "nn_for_n",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'n'
                && c.prev2 != Some('n')
                && c.prev == Some('n')
                && !NOT_AFTER_N.contains(c.current)
        },
        edit: |_, b| b.insert_at(0, 'n'),
    },
    // ん as "xn"
    AlternateRule {
        name: "xn_for_n",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'x' && c.prev != Some('n') && c.current == 'n' && !is(c.next, NOT_AFTER_N)
        },
        edit: |c, b| {
            if c.next == Some('n') {
                b.replace_at(0, 'x');
            } else {
                b.insert_at(0, 'x');
            }
        },
    },
    // うぃ うぇ うぉ split as "uxi"
    AlternateRule {
        name: "uxa_for_wha",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'u' && c.current == 'w' && c.next == Some('h') && is(c.next2, AIEO)
        },
        edit: |_, b| {
            b.replace_at(0, 'u');
            b.replace_at(1, 'x');
        },
    },
    // きゃ にゃ ... split as "kixya"
    AlternateRule {
        name: "ixya_for_ya",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'i'
                && c.current == 'y'
                && is(c.prev, YOUON_CONSONANTS)
                && is(c.next, AUEO)
        },
        edit: |c, b| {
            if c.next == Some('e') {
                b.replace_at(0, 'i');
                b.insert_at(1, 'x');
            } else {
                b.insert_at(0, 'i');
                b.insert_at(1, 'x');
            }
        },
    },
    // しゃ ちゃ ... split as "shixya"
    AlternateRule {
        name: "ixya_after_h",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'i' && AUEO.contains(c.current) && is(c.prev2, "sc") && c.prev == Some('h')
        },
        edit: |c, b| {
            b.insert_at(0, 'i');
            b.insert_at(1, 'x');
            if c.next != Some('e') {
                b.insert_at(2, 'y');
            }
        },
    },
    // しゃ split with "c"
    AlternateRule {
        name: "cixya_for_sya",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'c'
                && c.current == 's'
                && c.prev != Some('s')
                && c.next == Some('y')
                && is(c.next2, AUEO)
        },
        edit: |c, b| {
            b.replace_at(0, 'c');
            if c.next2 == Some('e') {
                b.replace_at(1, 'i');
                b.insert_at(1, 'x');
            } else {
                b.insert_at(1, 'i');
                b.insert_at(2, 'x');
            }
        },
    },
    // っ as "xtu" / "ltu"
    AlternateRule {
        name: "xtu_for_sokuon",
        gate: OsGate::Any,
        predicate: |c| {
            (c.input == 'x' || c.input == 'l')
                && GEMINATES.contains(c.current)
                && c.next == Some(c.current)
        },
        edit: |c, b| {
            b.replace_at(0, c.input);
            b.insert_at(1, 't');
            b.insert_at(2, 'u');
        },
    },
    // っか っく っこ as "cc"
    AlternateRule {
        name: "cc_for_kk",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'c' && c.current == 'k' && c.next == Some('k') && is(c.next2, "auo")
        },
        edit: |_, b| {
            b.replace_at(0, 'c');
            b.replace_at(1, 'c');
        },
    },
    // っく as "qq"
    AlternateRule {
        name: "qq_for_kk",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'q' && c.current == 'k' && c.next == Some('k') && c.next2 == Some('u')
        },
        edit: |_, b| {
            b.replace_at(0, 'q');
            b.replace_at(1, 'q');
        },
    },
    // っし っせ as "cc"
    AlternateRule {
        name: "cc_for_ss",
        gate: OsGate::Windows,
        predicate: |c| {
            c.input == 'c' && c.current == 's' && c.next == Some('s') && is(c.next2, "ie")
        },
        edit: |_, b| {
            b.replace_at(0, 'c');
            b.replace_at(1, 'c');
        },
    },
    // っちゃ行 as "ccya"
    AlternateRule {
        name: "cc_for_tty",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'c' && c.current == 't' && c.next == Some('t') && c.next2 == Some('y')
        },
        edit: |_, b| {
            b.replace_at(0, 'c');
            b.replace_at(1, 'c');
        },
    },
    // っち as "cchi"
    AlternateRule {
        name: "cchi_for_tti",
        gate: OsGate::Any,
        predicate: |c| {
            c.input == 'c' && c.current == 't' && c.next == Some('t') && c.next2 == Some('i')
        },
        edit: |_, b| {
            b.replace_at(0, 'c');
            b.replace_at(1, 'c');
            b.insert_at(2, 'h');
        },
    },
    // "l" and "x" are interchangeable small-kana markers
    AlternateRule {
        name: "x_for_l",
        gate: OsGate::Any,
        predicate: |c| c.input == 'x' && c.current == 'l',
        edit: |_, b| b.replace_at(0, 'x'),
    },
    AlternateRule {
        name: "l_for_x",
        gate: OsGate::Any,
        predicate: |c| c.input == 'l' && c.current == 'x',
        edit: |_, b| b.replace_at(0, 'l'),
    },
];

/// The highest-priority rule accepting `ctx.input`, if any.
pub fn first_match(ctx: &RuleContext) -> Option<&'static AlternateRule> {
    ALTERNATE_RULES.iter().find(|rule| rule.matches(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(buffer: &str, cursor: usize, input: char, os: OperatingSystem) -> RuleContext {
        let buf = ExpectedBuffer::with_cursor(buffer, cursor);
        RuleContext::from_buffer(&buf, input, os).expect("cursor inside buffer")
    }

    fn rule_name(buffer: &str, cursor: usize, input: char, os: OperatingSystem) -> Option<&'static str> {
        first_match(&ctx(buffer, cursor, input, os)).map(|r| r.name)
    }

    fn applied(buffer: &str, cursor: usize, input: char, os: OperatingSystem) -> String {
        let context = ctx(buffer, cursor, input, os);
        let rule = first_match(&context).expect("a rule should match");
        let mut buf = ExpectedBuffer::with_cursor(buffer, cursor);
        rule.apply(&context, &mut buf);
        assert_eq!(buf.current(), Some(input), "rule {} must place the input under the cursor", rule.name);
        buf.chars().iter().collect()
    }

    const ANY: OperatingSystem = OperatingSystem::None;
    const WIN: OperatingSystem = OperatingSystem::Windows;
    const MAC: OperatingSystem = OperatingSystem::Mac;

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<&str> = ALTERNATE_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn window_is_none_outside_buffer() {
        let c = ctx("ka", 0, 'c', ANY);
        assert_eq!(c.prev, None);
        assert_eq!(c.prev3, None);
        assert_eq!(c.next, Some('a'));
        assert_eq!(c.next2, None);

        let done = ExpectedBuffer::with_cursor("ka", 2);
        assert!(RuleContext::from_buffer(&done, 'a', ANY).is_none());
    }

    #[test]
    fn yi_is_windows_only() {
        assert_eq!(rule_name("i", 0, 'y', WIN), Some("yi_for_i"));
        assert_eq!(rule_name("i", 0, 'y', ANY), None);
        assert_eq!(rule_name("i", 0, 'y', MAC), None);
        // not after a consonant
        assert_eq!(rule_name("ki", 1, 'y', WIN), None);
        assert_eq!(applied("ai", 1, 'y', WIN), "ayi");
    }

    #[test]
    fn wu_variants() {
        assert_eq!(applied("u", 0, 'w', ANY), "wu");
        assert_eq!(rule_name("ku", 1, 'w', ANY), None);
        assert_eq!(rule_name("nnu", 2, 'w', ANY), Some("wu_after_nn"));
        assert_eq!(rule_name("nnnu", 3, 'w', ANY), None);
        assert_eq!(rule_name("xnu", 2, 'w', ANY), Some("wu_after_xn"));
        assert_eq!(applied("wu", 1, 'h', WIN), "whu");
        assert_eq!(rule_name("wu", 1, 'h', ANY), None);
        assert_eq!(rule_name("twu", 2, 'h', WIN), None);
    }

    #[test]
    fn k_row_variants_windows_only() {
        assert_eq!(applied("ka", 0, 'c', WIN), "ca");
        assert_eq!(rule_name("ka", 0, 'c', ANY), None);
        assert_eq!(rule_name("ki", 0, 'c', WIN), None);
        assert_eq!(applied("ku", 0, 'q', WIN), "qu");
        assert_eq!(rule_name("ko", 0, 'q', WIN), None);
    }

    #[test]
    fn s_and_z_rows() {
        assert_eq!(applied("si", 1, 'h', ANY), "shi");
        assert_eq!(applied("zi", 0, 'j', ANY), "ji");
        assert_eq!(applied("sya", 1, 'h', ANY), "sha");
        assert_eq!(applied("zya", 0, 'j', ANY), "ja");
        assert_eq!(applied("ja", 1, 'y', ANY), "jya");
        assert_eq!(applied("si", 0, 'c', WIN), "ci");
        assert_eq!(applied("se", 0, 'c', WIN), "ce");
        assert_eq!(rule_name("sa", 0, 'c', WIN), None);
    }

    #[test]
    fn t_row() {
        assert_eq!(applied("ti", 0, 'c', ANY), "chi");
        assert_eq!(applied("tya", 0, 'c', ANY), "cya");
        assert_eq!(applied("cya", 1, 'h', ANY), "cha");
        assert_eq!(applied("tu", 1, 's', ANY), "tsu");
        assert_eq!(applied("tsa", 1, 'u', ANY), "tuxa");
        assert_eq!(applied("tsa", 2, 'u', ANY), "tsuxa");
        assert_eq!(applied("thi", 1, 'e', ANY), "texi");
        assert_eq!(applied("dhi", 1, 'e', ANY), "dexi");
        assert_eq!(applied("dhu", 1, 'e', ANY), "dexyu");
        assert_eq!(applied("twu", 1, 'o', ANY), "toxu");
        assert_eq!(applied("dwu", 1, 'o', ANY), "doxu");
    }

    #[test]
    fn f_row_mac_differs() {
        assert_eq!(applied("hu", 0, 'f', ANY), "fu");
        assert_eq!(applied("fa", 1, 'w', ANY), "fwa");
        assert_eq!(applied("fi", 1, 'y', ANY), "fyi");
        assert_eq!(rule_name("fa", 1, 'y', ANY), None);
        assert_eq!(applied("fa", 0, 'h', ANY), "huxa");
        assert_eq!(applied("fa", 0, 'h', WIN), "huxa");
        assert_eq!(applied("fa", 0, 'h', MAC), "hwa");
        assert_eq!(applied("fo", 1, 'u', ANY), "fuxo");
        assert_eq!(applied("hwa", 1, 'u', MAC), "huxa");
        assert_eq!(rule_name("hwa", 1, 'u', WIN), None);
    }

    #[test]
    fn hatsuon_disambiguation() {
        assert_eq!(applied("nka", 1, 'n', ANY), "nnka");
        assert_eq!(rule_name("na", 1, 'n', ANY), None);
        assert_eq!(rule_name("nnka", 2, 'n', ANY), None);
        assert_eq!(applied("nka", 0, 'x', ANY), "xnka");
        assert_eq!(applied("nnna", 0, 'x', ANY), "xnna");
        assert_eq!(rule_name("na", 0, 'x', ANY), None);
        assert_eq!(applied("n", 0, 'x', ANY), "xn");
    }

    #[test]
    fn youon_decomposition() {
        assert_eq!(applied("kya", 1, 'i', ANY), "kixya");
        assert_eq!(applied("kye", 1, 'i', ANY), "kixe");
        assert_eq!(rule_name("wya", 1, 'i', ANY), None);
        assert_eq!(applied("sha", 2, 'i', ANY), "shixya");
        assert_eq!(applied("cho", 2, 'i', ANY), "chixyo");
        assert_eq!(applied("whi", 0, 'u', ANY), "uxi");
        assert_eq!(applied("sya", 0, 'c', WIN), "cixya");
        assert_eq!(applied("sye", 0, 'c', WIN), "cxie");
    }

    #[test]
    fn sokuon_variants() {
        assert_eq!(applied("kka", 0, 'x', ANY), "xtuka");
        assert_eq!(applied("tta", 0, 'l', ANY), "ltuta");
        assert_eq!(rule_name("mma", 0, 'x', ANY), None);
        assert_eq!(applied("kka", 0, 'c', WIN), "cca");
        assert_eq!(rule_name("kka", 0, 'c', ANY), None);
        assert_eq!(applied("kku", 0, 'q', WIN), "qqu");
        assert_eq!(applied("ssi", 0, 'c', WIN), "cci");
        assert_eq!(applied("ttya", 0, 'c', ANY), "ccya");
        assert_eq!(applied("tti", 0, 'c', ANY), "cchi");
    }

    #[test]
    fn l_x_interchangeable() {
        assert_eq!(applied("xtu", 0, 'l', ANY), "ltu");
        assert_eq!(applied("ltu", 0, 'x', ANY), "xtu");
    }

    #[test]
    fn unrelated_input_matches_nothing() {
        assert_eq!(rule_name("ka", 0, 'z', WIN), None);
        assert_eq!(rule_name("ka", 0, 'z', MAC), None);
        assert_eq!(rule_name("a", 0, 'q', WIN), None);
    }
}
