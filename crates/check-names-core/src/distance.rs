//! Levenshtein distance between a name token and a dictionary word.
//!
//! Case folding is one-sided: characters of the token are lowercased before
//! comparison, characters of the dictionary word are used as they are.
//! Dictionaries are expected to hold lowercase words, so
//! `edit_distance("Count", "count") == 0` while
//! `edit_distance("count", "Count") == 1`.

/// Computes the edit distance between `token` and `word`.
///
/// Insertion, deletion and substitution each cost 1.
#[must_use]
pub fn edit_distance(token: &str, word: &str) -> usize {
    let token: Vec<char> = token.chars().map(|c| c.to_ascii_lowercase()).collect();
    let word: Vec<char> = word.chars().collect();

    let mut prev: Vec<usize> = (0..=word.len()).collect();
    let mut curr = vec![0; word.len() + 1];

    for (i, &t) in token.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &w) in word.iter().enumerate() {
            let substitution = prev[j] + usize::from(t != w);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[word.len()]
}

/// Computes the edit distance if it is strictly below `limit`.
///
/// Returns `None` as soon as every cell of a table row reaches `limit`,
/// since the final distance can only grow from there.
#[must_use]
pub fn edit_distance_within(token: &str, word: &str, limit: usize) -> Option<usize> {
    let token: Vec<char> = token.chars().map(|c| c.to_ascii_lowercase()).collect();
    let word: Vec<char> = word.chars().collect();

    if token.len().abs_diff(word.len()) >= limit {
        return None;
    }

    let mut prev: Vec<usize> = (0..=word.len()).collect();
    let mut curr = vec![0; word.len() + 1];

    for (i, &t) in token.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &w) in word.iter().enumerate() {
            let substitution = prev[j] + usize::from(t != w);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min >= limit {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[word.len()];
    (distance < limit).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_tokens_have_zero_distance() {
        for token in ["", "a", "count", "retry"] {
            assert_eq!(edit_distance(token, token), 0);
        }
    }

    #[test]
    fn classic_examples() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("teh", "the"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("cnt", "count"), 2);
    }

    #[test]
    fn case_folding_applies_to_token_only() {
        assert_eq!(edit_distance("Count", "count"), 0);
        assert_eq!(edit_distance("count", "Count"), 1);
        assert_ne!(
            edit_distance("Retry", "retry"),
            edit_distance("retry", "Retry")
        );
    }

    #[test]
    fn bounded_agrees_below_limit() {
        let pairs = [
            ("kitten", "sitting"),
            ("respnse", "response"),
            ("Count", "count"),
            ("abc", "xyz"),
        ];
        for (a, b) in pairs {
            let full = edit_distance(a, b);
            assert_eq!(edit_distance_within(a, b, 4), (full < 4).then_some(full));
        }
    }

    #[test]
    fn bounded_rejects_at_limit() {
        assert_eq!(edit_distance_within("abcd", "wxyz", 4), None);
        assert_eq!(edit_distance_within("a", "abcdefg", 4), None);
        assert_eq!(edit_distance_within("same", "same", 1), Some(0));
        assert_eq!(edit_distance_within("same", "same", 0), None);
    }
}
