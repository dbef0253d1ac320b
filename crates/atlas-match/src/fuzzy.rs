//! Fuzzy string scoring and best-candidate extraction.
//!
//! Scores are in 0..=100. A score is the better of the plain ratio and a
//! token-sort ratio (whitespace tokens sorted before comparing), both
//! case-insensitive, so "Informatique BUT" still lines up with
//! "BUT Informatique".

/// A scored candidate returned by [`extract_one`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub value: &'a str,
    pub score: f64,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn token_sort(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity between two labels, in 0..=100.
pub fn score(query: &str, candidate: &str) -> f64 {
    let q = normalize(query);
    let c = normalize(candidate);

    let plain = strsim::normalized_levenshtein(&q, &c);
    let sorted = strsim::normalized_levenshtein(&token_sort(&q), &token_sort(&c));

    plain.max(sorted) * 100.0
}

/// Return the best-scoring candidate for `query`, or None when the
/// candidate list is empty.
///
/// Ties keep the earliest candidate, so the result is deterministic for a
/// given candidate ordering.
pub fn extract_one<'a, I>(query: &str, candidates: I) -> Option<Match<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<Match<'a>> = None;

    for candidate in candidates {
        let s = score(query, candidate);
        match &best {
            Some(current) if s <= current.score => {}
            _ => {
                best = Some(Match {
                    value: candidate,
                    score: s,
                })
            }
        }
    }

    best
}
