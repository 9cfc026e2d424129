use std::cmp::Ordering;

/// Display order for found words: longer words first, equal lengths alphabetically.
///
/// This is a total order; two words compare equal only if they are identical.
#[inline]
pub fn compare_ranked(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// Deduplicates `words` and sorts them with [`compare_ranked`].
///
/// ```
/// use boggle_trie::search::rank;
///
/// let ranked = rank(["at", "cat", "ta", "cats", "cat"].map(String::from));
/// assert_eq!(ranked, ["cats", "cat", "at", "ta"]);
/// ```
pub fn rank(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort_unstable_by(|a, b| compare_ranked(a, b));
    // Equal words are adjacent under a total order.
    words.dedup();
    words
}

/// True if `words` is in ranked order with no duplicates.
pub fn is_ranked<S: AsRef<str>>(words: &[S]) -> bool {
    words
        .windows(2)
        .all(|pair| compare_ranked(pair[0].as_ref(), pair[1].as_ref()) == Ordering::Less)
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn longer_words_first() {
        assert_eq!(compare_ranked("cats", "cat"), Ordering::Less);
        assert_eq!(compare_ranked("at", "zebra"), Ordering::Greater);
    }

    #[test]
    fn equal_length_alphabetical() {
        assert_eq!(compare_ranked("bat", "cat"), Ordering::Less);
        assert_eq!(compare_ranked("cat", "bat"), Ordering::Greater);
        assert_eq!(compare_ranked("cat", "cat"), Ordering::Equal);
    }

    #[test]
    fn rank_dedups_and_orders() {
        let ranked = rank(strings(&["ta", "at", "cats", "at", "cat", "ta", "cats"]));
        assert_eq!(ranked, strings(&["cats", "cat", "at", "ta"]));
        assert!(is_ranked(&ranked));
    }

    #[test]
    fn rank_empty() {
        assert!(rank(Vec::new()).is_empty());
        assert!(is_ranked::<&str>(&[]));
    }

    #[test]
    fn is_ranked_rejects_duplicates_and_disorder() {
        assert!(!is_ranked(&["cat", "cat"]));
        assert!(!is_ranked(&["at", "cat"]));
        assert!(!is_ranked(&["ta", "at"]));
        assert!(is_ranked(&["cats", "cat", "at", "ta"]));
    }
}
