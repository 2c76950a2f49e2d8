use serde::Serialize;

use driller_engine::matcher::{OperatingSystem, TypeResult, TypingMatcher};
use driller_engine::romaji::{is_romanizable, romanize};

use crate::CliError;

#[derive(Debug, Serialize)]
pub struct RomanizeReport {
    pub kana: String,
    pub romaji: String,
    pub len: usize,
    /// Characters the romanizer skipped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<char>,
}

pub fn romanize_report(kana: &str) -> RomanizeReport {
    let romaji = romanize(kana);
    let dropped = kana
        .chars()
        .filter(|&c| !is_romanizable(c.encode_utf8(&mut [0; 4])))
        .collect();
    RomanizeReport {
        kana: kana.to_string(),
        len: romaji.chars().count(),
        romaji,
        dropped,
    }
}

pub fn romanize_cmd(kana: &str, json: bool) {
    let report = romanize_report(kana);
    if json {
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
        return;
    }
    println!("{}", report.romaji);
    if !report.dropped.is_empty() {
        let dropped: String = report.dropped.iter().collect();
        eprintln!("dropped: {dropped}");
    }
}

#[derive(Debug, Serialize)]
pub struct KeyTrace {
    pub key: char,
    pub result: &'static str,
    pub typed: String,
    pub remaining: String,
}

fn result_name(result: TypeResult) -> &'static str {
    match result {
        TypeResult::Correct => "correct",
        TypeResult::Incorrect => "incorrect",
        TypeResult::Finished => "finished",
    }
}

/// Feed every key to a fresh matcher and record the buffer after each one.
/// Mistakes do not stop the trace.
pub fn trace_keys(kana: &str, keys: &str, os: OperatingSystem) -> Result<Vec<KeyTrace>, CliError> {
    let mut matcher = TypingMatcher::from_kana(kana, os);
    if matcher.buffer().is_empty() {
        return Err(CliError::EmptyReading(kana.to_string()));
    }
    Ok(keys
        .chars()
        .map(|key| {
            let result = matcher.type_char(key);
            KeyTrace {
                key,
                result: result_name(result),
                typed: matcher.buffer().typed_string(),
                remaining: matcher.buffer().remaining_string(),
            }
        })
        .collect())
}

pub fn type_cmd(kana: &str, keys: &str, os: OperatingSystem, json: bool) {
    let trace = die!(trace_keys(kana, keys, os), "Error: {}");
    if json {
        let out = die!(serde_json::to_string_pretty(&trace), "Error: {}");
        println!("{out}");
        return;
    }
    println!("{} ({})", romanize(kana), os.as_str());
    for step in &trace {
        println!(
            "{} {:<9} {}|{}",
            step.key, step.result, step.typed, step.remaining
        );
    }
}
