//! Knuth-Morris-Pratt substring search.
//!
//! Matching is case-sensitive here; callers that want case-insensitive
//! search lower-case both sides first (see [`super::search_reviews`]).
//! Offsets are in characters, not bytes, so they can be used to slice a
//! `Vec<char>` of the text directly.

/// Build the KMP failure table for a pattern.
///
/// `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it. Linear time.
pub fn failure_table(pattern: &[char]) -> Vec<usize> {
    let mut table = vec![0usize; pattern.len()];
    let mut prefix_len = 0;

    for i in 1..pattern.len() {
        while prefix_len > 0 && pattern[i] != pattern[prefix_len] {
            prefix_len = table[prefix_len - 1];
        }
        if pattern[i] == pattern[prefix_len] {
            prefix_len += 1;
        }
        table[i] = prefix_len;
    }

    table
}

/// Find every start offset (in chars) at which `pattern` occurs in `text`.
///
/// After a match the scan resumes through the failure table rather than
/// restarting, so overlapping occurrences are reported: "aa" in "aaa"
/// yields `[0, 1]`. An empty pattern or empty text yields no matches.
pub fn find_occurrences(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    if text.is_empty() || pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    let table = failure_table(&pattern);
    let mut matches = Vec::new();
    let mut matched = 0;

    for (i, &c) in text.iter().enumerate() {
        while matched > 0 && c != pattern[matched] {
            matched = table[matched - 1];
        }
        if c == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            matches.push(i + 1 - pattern.len());
            matched = table[matched - 1];
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn failure_table_values() {
        assert_eq!(failure_table(&chars("abcab")), vec![0, 0, 0, 1, 2]);
        assert_eq!(failure_table(&chars("aaaa")), vec![0, 1, 2, 3]);
        assert_eq!(failure_table(&chars("ababab")), vec![0, 0, 1, 2, 3, 4]);
        assert_eq!(failure_table(&chars("abcd")), vec![0, 0, 0, 0]);
        assert_eq!(failure_table(&chars("a")), vec![0]);
        assert!(failure_table(&[]).is_empty());
    }

    #[test]
    fn simple_matches() {
        assert_eq!(find_occurrences("the train was late", "train"), vec![4]);
        assert_eq!(find_occurrences("abcabcabc", "abc"), vec![0, 3, 6]);
        assert_eq!(find_occurrences("abc", "abc"), vec![0]);
    }

    #[test]
    fn overlapping_matches_are_reported() {
        assert_eq!(find_occurrences("aaa", "aa"), vec![0, 1]);
        assert_eq!(find_occurrences("abababa", "aba"), vec![0, 2, 4]);
    }

    #[test]
    fn no_match() {
        assert!(find_occurrences("the train was late", "plane").is_empty());
        assert!(find_occurrences("ab", "abc").is_empty());
    }

    #[test]
    fn empty_inputs_yield_no_matches() {
        assert!(find_occurrences("", "abc").is_empty());
        assert!(find_occurrences("abc", "").is_empty());
        assert!(find_occurrences("", "").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(find_occurrences("Train", "train").is_empty());
        assert_eq!(find_occurrences("Train", "Train"), vec![0]);
    }

    #[test]
    fn offsets_are_in_chars_not_bytes() {
        // Multi-byte chars before the match must not skew the offset
        assert_eq!(find_occurrences("délhi métro", "métro"), vec![6]);
    }
}
