//! "Did you mean" suggestions for input nothing else understood.
//!
//! Scoring is a cheap positional heuristic, not an edit distance: a leading
//! extra word shifts every character and tanks the score.

/// Phrases offered as suggestions alongside the user's alias names.
pub const KNOWN_COMMANDS: &[&str] = &[
    "show files",
    "show date",
    "show time",
    "what time is it",
    "what is my ip",
    "how much memory",
    "show weather",
    "list processes",
    "check connection",
    "current directory",
];

/// Candidates must score strictly above this.
pub const THRESHOLD: usize = 3;

/// Similarity of `input` and `candidate`, both compared lowercased.
///
/// One point per position where the characters agree, plus two points per
/// positional word pair where both words are longer than two characters and
/// share their first two.
pub fn score(input: &str, candidate: &str) -> usize {
    let input = input.to_lowercase();
    let candidate = candidate.to_lowercase();

    let chars = input
        .chars()
        .zip(candidate.chars())
        .filter(|(a, b)| a == b)
        .count();

    let words = input
        .split_whitespace()
        .zip(candidate.split_whitespace())
        .filter(|(a, b)| same_prefix(a, b))
        .count();

    chars + 2 * words
}

fn same_prefix(a: &str, b: &str) -> bool {
    if a.chars().count() <= 2 || b.chars().count() <= 2 {
        return false;
    }
    a.chars().take(2).eq(b.chars().take(2))
}

/// Best-scoring candidate above [`THRESHOLD`].
///
/// Commands are scanned before aliases and ties keep the first candidate
/// seen, so the result is deterministic.
pub fn suggest<'a, C, A>(input: &str, known_commands: C, alias_names: A) -> Option<String>
where
    C: IntoIterator<Item = &'a str>,
    A: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, usize)> = None;
    for candidate in known_commands.into_iter().chain(alias_names) {
        let s = score(input, candidate);
        if s <= THRESHOLD {
            continue;
        }
        if best.is_none_or(|(_, top)| s > top) {
            best = Some((candidate, s));
        }
    }
    if let Some((candidate, s)) = best {
        tracing::debug!(input, candidate, score = s, "suggestion found");
    }
    best.map(|(candidate, _)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> impl Iterator<Item = &'static str> {
        KNOWN_COMMANDS.iter().copied()
    }

    #[test]
    fn score_counts_positions_and_word_prefixes() {
        // positions: s h _ _ ' ' f i l _ = 6; "sh" and "fi" prefixes add 2 each
        assert_eq!(score("shwo fils", "show files"), 6 + 4);
    }

    #[test]
    fn short_words_do_not_earn_prefix_bonus() {
        assert_eq!(score("ab", "ab"), 2);
    }

    #[test]
    fn score_ignores_case() {
        assert_eq!(score("SHOW FILES", "show files"), score("show files", "show files"));
    }

    #[test]
    fn typo_gets_suggested() {
        assert_eq!(
            suggest("shwo fils", known(), std::iter::empty()),
            Some("show files".to_string())
        );
    }

    #[test]
    fn unrelated_input_gets_nothing() {
        assert_eq!(suggest("xyz", known(), std::iter::empty()), None);
        assert_eq!(suggest("", known(), std::iter::empty()), None);
    }

    #[test]
    fn score_must_exceed_threshold() {
        // three matching positions, words too short for a bonus
        assert_eq!(score("a c", "a c"), 3);
        assert_eq!(suggest("a c", ["a c"], std::iter::empty()), None);
        assert_eq!(score("a cd", "a cd"), 4);
        assert_eq!(
            suggest("a cd", ["a cd"], std::iter::empty()),
            Some("a cd".to_string())
        );
    }

    #[test]
    fn ties_prefer_commands_over_aliases() {
        assert_eq!(
            suggest("deploy", ["deploy"], ["deploy"]).as_deref(),
            Some("deploy")
        );
        let first = suggest("showx", ["show1", "show2"], std::iter::empty());
        assert_eq!(first.as_deref(), Some("show1"));
    }

    #[test]
    fn alias_names_are_candidates() {
        assert_eq!(
            suggest("deplyo-prod", known(), ["deploy-prod"]),
            Some("deploy-prod".to_string())
        );
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let first = suggest("what tme is it", known(), std::iter::empty());
        for _ in 0..10 {
            assert_eq!(suggest("what tme is it", known(), std::iter::empty()), first);
        }
        assert!(first.is_some());
    }
}
