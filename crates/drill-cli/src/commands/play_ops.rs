use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use driller_engine::matcher::{OperatingSystem, TypeResult};
use driller_engine::textbank::{Level, TextBank};
use driller_engine::{ChallengeOutcome, ChallengeStats, KeyEvent, TypingSession};

use super::bank_ops::load_bank;
use crate::CliError;

pub struct PlayOptions {
    pub level: Level,
    pub os: OperatingSystem,
    pub seed: Option<u64>,
    pub rounds: usize,
    pub max_mistakes: Option<u32>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub completed: usize,
    pub failed: usize,
    pub cancelled: usize,
    pub keystrokes: u32,
    pub mistakes: u32,
}

impl PlaySummary {
    fn record(&mut self, outcome: &ChallengeOutcome, stats: Option<ChallengeStats>) {
        match outcome {
            ChallengeOutcome::Completed(_) => self.completed += 1,
            ChallengeOutcome::Failed(_) => self.failed += 1,
            ChallengeOutcome::Cancelled => self.cancelled += 1,
        }
        if let Some(stats) = outcome.stats().copied().or(stats) {
            self.keystrokes += stats.keystrokes;
            self.mistakes += stats.mistakes;
        }
    }

    pub fn rounds(&self) -> usize {
        self.completed + self.failed + self.cancelled
    }

    pub fn accuracy(&self) -> f64 {
        ChallengeStats {
            keystrokes: self.keystrokes,
            mistakes: self.mistakes,
            romaji_len: 0,
        }
        .accuracy()
    }
}

/// Feed one input line as keystrokes. Returns the outcome if the line ended
/// the challenge, plus how many keys were rejected.
fn feed_line(session: &mut TypingSession, line: &str) -> (Option<ChallengeOutcome>, usize) {
    let mut misses = 0;
    for event in KeyEvent::text(line) {
        let resp = session.handle_key(event);
        if resp.result == Some(TypeResult::Incorrect) {
            misses += 1;
        }
        if resp.outcome.is_some() {
            return (resp.outcome, misses);
        }
    }
    (None, misses)
}

fn cancel(session: &mut TypingSession) -> (ChallengeOutcome, Option<ChallengeStats>) {
    let stats = session.stats();
    let outcome = session
        .handle_key(KeyEvent::Cancel)
        .outcome
        .unwrap_or(ChallengeOutcome::Cancelled);
    (outcome, stats)
}

fn write_outcome<W: Write>(out: &mut W, outcome: &ChallengeOutcome) -> io::Result<()> {
    match outcome {
        ChallengeOutcome::Completed(stats) => writeln!(
            out,
            "  clear! {} keys, {} mistakes, accuracy {:.1}%",
            stats.keystrokes,
            stats.mistakes,
            stats.accuracy() * 100.0
        ),
        ChallengeOutcome::Failed(stats) => {
            writeln!(out, "  failed after {} mistakes", stats.mistakes)
        }
        ChallengeOutcome::Cancelled => writeln!(out, "  skipped"),
    }
}

/// Line-oriented game loop. Each input line is typed key by key; an empty
/// line skips the current text. Stops after `rounds` texts or at end of input.
pub fn run_play<R: BufRead, W: Write>(
    bank: &TextBank,
    opts: &PlayOptions,
    input: R,
    out: &mut W,
) -> Result<PlaySummary, CliError> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = TypingSession::new(opts.os);
    session.set_max_mistakes(opts.max_mistakes);

    let mut summary = PlaySummary::default();
    let mut lines = input.lines();

    for round in 1..=opts.rounds {
        let Some(display) = session.start_random(bank, opts.level, &mut rng) else {
            break;
        };
        writeln!(out, "[{round}/{}] {}", opts.rounds, display.title)?;
        writeln!(out, "  {}", display.remaining)?;

        let (outcome, stats) = loop {
            let Some(line) = lines.next() else {
                let (outcome, stats) = cancel(&mut session);
                write_outcome(out, &outcome)?;
                summary.record(&outcome, stats);
                return Ok(summary);
            };
            let line = line?;
            let keys = line.trim();
            if keys.is_empty() {
                break cancel(&mut session);
            }
            let (ended, misses) = feed_line(&mut session, keys);
            if let Some(outcome) = ended {
                break (outcome, None);
            }
            if let Some(d) = session.display() {
                let marks = "x".repeat(misses);
                writeln!(out, "  {}|{} {}", d.typed, d.remaining, marks)?;
            }
        };
        write_outcome(out, &outcome)?;
        summary.record(&outcome, stats);
    }

    Ok(summary)
}

pub fn play_cmd(bank_file: Option<&str>, opts: &PlayOptions) {
    let bank = die!(load_bank(bank_file), "Error: {}");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let summary = die!(run_play(&bank, opts, stdin.lock(), &mut stdout), "Error: {}");
    println!(
        "{} of {} cleared, accuracy {:.1}%",
        summary.completed,
        summary.rounds(),
        summary.accuracy() * 100.0
    );
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use driller_engine::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
    use driller_engine::textbank::TypingText;

    use super::*;

    fn one_text_bank() -> TextBank {
        let levels = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap().levels;
        TextBank::from_texts(vec![TypingText::new("計測", "けいそく")], &levels).unwrap()
    }

    fn opts(rounds: usize) -> PlayOptions {
        PlayOptions {
            level: Level::Beginner,
            os: OperatingSystem::None,
            seed: Some(1),
            rounds,
            max_mistakes: None,
        }
    }

    fn play(input: &str, opts: &PlayOptions) -> (PlaySummary, String) {
        let mut out = Vec::new();
        let summary = run_play(&one_text_bank(), opts, Cursor::new(input), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn clear_across_lines() {
        let (summary, out) = play("kei\nsoku\n", &opts(1));
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.keystrokes, 7);
        assert!(out.contains("[1/1] 計測"));
        assert!(out.contains("  keisoku\n"));
        assert!(out.contains("  kei|soku"));
        assert!(out.contains("clear! 7 keys, 0 mistakes"));
    }

    #[test]
    fn mistakes_are_marked() {
        let (summary, out) = play("kqei\nsoku\n", &opts(1));
        assert_eq!(summary.mistakes, 1);
        assert!(out.contains("  kei|soku x"));
        assert!(out.contains("accuracy 87.5%"));
    }

    #[test]
    fn windows_spelling_clears() {
        let mut o = opts(1);
        o.os = OperatingSystem::Windows;
        let (summary, _) = play("keisocu\n", &o);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.mistakes, 0);
    }

    #[test]
    fn empty_line_skips() {
        let (summary, out) = play("ke\n\nkeisoku\n", &opts(2));
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.keystrokes, 9);
        assert!(out.contains("skipped"));
        assert!(out.contains("[2/2]"));
    }

    #[test]
    fn end_of_input_stops() {
        let (summary, out) = play("kei\n", &opts(3));
        assert_eq!(summary.rounds(), 1);
        assert_eq!(summary.cancelled, 1);
        assert!(!out.contains("[2/3]"));
    }

    #[test]
    fn mistake_limit_fails_round() {
        let mut o = opts(1);
        o.max_mistakes = Some(2);
        let (summary, out) = play("kzz\n", &o);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.mistakes, 2);
        assert!(out.contains("failed after 2 mistakes"));
    }
}
