// SPDX-License-Identifier: MIT

//! Fuzzy matching for the "Similar to" operator

use super::broadcast::normalize;

/// Separator between candidate strings in a similarity target
pub const CANDIDATE_SEPARATOR: char = '|';

/// Edit distance between two strings, counted in chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity in [0, 1]: one minus the edit distance over the longer length
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Highest similarity between `input` and any `|`-separated candidate.
///
/// Both sides are normalized first; blank candidates are ignored. Returns
/// `None` when there is no candidate to compare against.
pub fn best_similarity<'a, I>(input: &str, targets: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = normalize(input);

    targets
        .into_iter()
        .flat_map(|target| target.split(CANDIDATE_SEPARATOR))
        .map(normalize)
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| {
            let score = similarity(&input, &candidate);
            log::trace!("similarity('{}', '{}') = {:.3}", input, candidate, score);
            score
        })
        .fold(None, |best: Option<f64>, score| {
            Some(best.map_or(score, |b| b.max(score)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("héllo", "hello"), 1);
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert!((similarity("hello", "hallo") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_best_similarity_picks_max() {
        let best = best_similarity("Hello", ["Hi|Hello|Hey"]).unwrap();
        assert_eq!(best, 1.0);

        let best = best_similarity("Xyz", ["Hi|Hello|Hey"]).unwrap();
        assert!(best < 0.5);
    }

    #[test]
    fn test_best_similarity_normalizes() {
        let best = best_similarity("  HELLO ", ["hello"]).unwrap();
        assert_eq!(best, 1.0);
    }

    #[test]
    fn test_best_similarity_no_candidates() {
        assert_eq!(best_similarity("hello", ["| |"]), None);
        assert_eq!(best_similarity("hello", Vec::<&str>::new()), None);
    }

    #[test]
    fn test_best_similarity_across_targets() {
        let best = best_similarity("blue", ["red|green", "blue"]).unwrap();
        assert_eq!(best, 1.0);
    }
}
