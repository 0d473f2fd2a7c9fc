/// Stop words skipped by `--skip-noise`. Kept sorted for the binary search.
pub const NOISE_WORDS: [&str; 16] = [
    "a", "an", "and", "are", "for", "in", "is", "it", "of", "on", "or", "that", "the", "this",
    "to", "was",
];

/// Whether a normalized key is too common to be worth indexing.
///
/// Keys of at most one character always count as noise.
pub fn is_noise(key: &str) -> bool {
    key.chars().nth(1).is_none() || NOISE_WORDS.binary_search(&key).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{NOISE_WORDS, is_noise};

    #[test]
    fn table_is_sorted() {
        assert!(NOISE_WORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stop_words() {
        for w in NOISE_WORDS {
            assert!(is_noise(w), "{w}");
        }
        assert!(!is_noise("cat"));
        assert!(!is_noise("then"));
    }

    #[test]
    fn short_keys() {
        assert!(is_noise(""));
        assert!(is_noise("x"));
        assert!(is_noise("é"));
        assert!(!is_noise("ox"));
    }
}
