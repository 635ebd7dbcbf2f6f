//! Turns an extracted English name into the single keyword sent to the
//! certificate search.

use serde::Deserialize;

use crate::utils::prompt_line;

/// How the keyword is chosen from a multi-word English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordPolicy {
    /// Offer every leading-word prefix and let the operator pick one.
    Interactive,
    /// Use the first word, no questions asked.
    FirstToken,
}

/// Picks one of the presented candidates by its 1-based index.
///
/// `None` means the answer could not be read as a number; the resolver treats
/// it the same as an out-of-range index.
pub trait CandidateSelector {
    fn select(&mut self, candidates: &[String]) -> Option<i64>;
}

/// Answers every prompt with the same index.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub i64);

impl CandidateSelector for FixedSelector {
    fn select(&mut self, _candidates: &[String]) -> Option<i64> {
        Some(self.0)
    }
}

/// Prints the numbered candidates and reads one line from stdin.
#[derive(Debug, Default)]
pub struct ConsoleSelector;

impl CandidateSelector for ConsoleSelector {
    fn select(&mut self, candidates: &[String]) -> Option<i64> {
        println!("[?] Choose a keyword:");
        for (i, c) in candidates.iter().enumerate() {
            println!("    {}: {}", i + 1, c);
        }
        let answer = match prompt_line("Keyword number") {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!("failed to read keyword selection: {}", e);
                return None;
            }
        };
        answer.trim().parse().ok()
    }
}

/// Leading-word prefixes of `english_name`, shortest first.
///
/// `"Alpha Beta Gamma"` gives `["Alpha", "Alpha Beta", "Alpha Beta Gamma"]`.
pub fn candidates(english_name: &str) -> Vec<String> {
    let parts: Vec<&str> = english_name.split_whitespace().collect();
    (1..=parts.len()).map(|i| parts[..i].join(" ")).collect()
}

/// Candidate at 1-based `selection`, or the first candidate when the
/// selection is missing or out of range. `candidates` must not be empty.
pub fn pick_candidate(candidates: &[String], selection: Option<i64>) -> String {
    let chosen = selection
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i >= 1 && i <= candidates.len())
        .map(|i| candidates[i - 1].clone());
    match chosen {
        Some(c) => c,
        None => {
            tracing::warn!(?selection, max = candidates.len(), "invalid keyword selection, using default");
            println!("[!] Invalid selection, using default keyword: {}", candidates[0]);
            candidates[0].clone()
        }
    }
}

/// Resolve the search keyword. Returns `None` only when the name has no words.
pub fn resolve_keyword(
    english_name: &str,
    policy: KeywordPolicy,
    selector: &mut dyn CandidateSelector,
) -> Option<String> {
    match policy {
        KeywordPolicy::FirstToken => english_name.split_whitespace().next().map(str::to_string),
        KeywordPolicy::Interactive => {
            let options = candidates(english_name);
            if options.is_empty() {
                return None;
            }
            let selection = selector.select(&options);
            Some(pick_candidate(&options, selection))
        }
    }
}
