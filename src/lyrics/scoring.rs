use crate::lyrics::lrc::LyricLine;

/// Minimum score required before any points are awarded.
const POINTS_THRESHOLD: u32 = 80;

/// Pairwise judgement of one expected token against one attempted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResult {
    /// Token extracted from the hidden lyric line.
    pub expected: String,
    /// Token supplied by the player at the same position.
    pub attempted: String,
    /// Whether the pair matched after trimming and lowercasing.
    pub correct: bool,
}

/// Full result of scoring one attempt against a song's hidden lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    /// True when every expected token was matched (and there was at least one).
    pub correct: bool,
    /// Texts of the in-range hidden lines, for display.
    pub expected_lines: Vec<String>,
    /// Positional comparison results, one per compared pair.
    pub token_results: Vec<TokenResult>,
    /// Percentage of expected tokens matched, floored (0 when none expected).
    pub score: u32,
}

/// Extract word tokens from a lyric line: maximal runs of alphanumeric or
/// underscore characters, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score a player's ordered word guesses against the hidden lines of a song.
///
/// Expected tokens come from the hidden line indices, in line order; indices
/// outside the parsed sequence contribute nothing. Tokens are compared
/// position by position up to the shorter of the two streams; a missing word
/// shifts every later comparison out of alignment on purpose. No hidden
/// indices means an immediate "not correct" with empty results.
pub fn score_attempt(lines: &[LyricLine], hidden_indices: &[usize], attempt: &[String]) -> AttemptOutcome {
    let mut expected = Vec::new();
    let mut expected_lines = Vec::new();
    for &index in hidden_indices {
        if let Some(line) = lines.get(index) {
            expected.extend(tokenize(&line.text));
            expected_lines.push(line.text.clone());
        }
    }

    let token_results: Vec<TokenResult> = expected
        .iter()
        .zip(attempt.iter())
        .map(|(expected, attempted)| TokenResult {
            expected: expected.clone(),
            attempted: attempted.clone(),
            correct: expected.trim().to_lowercase() == attempted.trim().to_lowercase(),
        })
        .collect();

    let matched = token_results.iter().filter(|result| result.correct).count();
    let total = expected.len();
    let score = if total > 0 {
        (100 * matched / total) as u32
    } else {
        0
    };

    AttemptOutcome {
        correct: total > 0 && matched == total,
        expected_lines,
        token_results,
        score,
    }
}

/// Points granted for a score: a tenth of the score, but only from 80 up.
pub fn points_for(score: u32) -> i32 {
    if score >= POINTS_THRESHOLD {
        (score / 10) as i32
    } else {
        0
    }
}
