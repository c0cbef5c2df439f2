use tracing::debug;

use crate::language::Language;

/// Generate a random `String` over the characters in `charset`.
/// The length of the `String` is drawn uniformly from the range `min_len..=max_len`.
/// An empty `charset` always yields the empty string.
pub fn random_string(charset: &[char], min_len: usize, max_len: usize) -> String {
    if charset.is_empty() {
        return String::new();
    }
    assert!(min_len <= max_len);

    let length = fastrand::usize(min_len..=max_len);
    (0..length)
        .map(|_| charset[fastrand::usize(..charset.len())])
        .collect()
}

/// Generate `number` random `String`s over `charset`, duplicates are possible.
/// The length for each sampled string is drawn uniformly from the range `min_len..=max_len`.
pub fn random_strings(
    charset: &[char],
    min_len: usize,
    max_len: usize,
    number: usize,
) -> Vec<String> {
    (0..number)
        .map(|_| random_string(charset, min_len, max_len))
        .collect()
}

/// Samples random strings as [`random_string`] does until `number` of them satisfy `filter`,
/// and collects those into a [`Language`]. As a language contains no duplicates, it may end
/// up with fewer than `number` strings.
///
/// Does not terminate if `filter` rejects every string that can be generated.
pub fn random_language<F>(
    charset: &[char],
    min_len: usize,
    max_len: usize,
    number: usize,
    filter: F,
) -> Language
where
    F: Fn(&str) -> bool,
{
    let mut language = Language::default();
    let mut accepted = 0;
    let mut attempts = 0usize;
    while accepted < number {
        attempts += 1;
        let word = random_string(charset, min_len, max_len);
        if filter(&word) {
            language.expressions_mut().add(word);
            accepted += 1;
        }
    }
    debug!(
        "sampled a language of {} strings in {attempts} attempts",
        language.len()
    );
    language
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_stay_in_range() {
        for word in random_strings(&['a', 'b', '∀'], 3, 7, 100) {
            let length = word.chars().count();
            assert!((3..=7).contains(&length), "{word:?} has length {length}");
            assert!(word.chars().all(|c| ['a', 'b', '∀'].contains(&c)));
        }
        assert_eq!(random_string(&['x'], 4, 4), "xxxx");
        assert_eq!(random_strings(&['x'], 0, 2, 13).len(), 13);
    }

    #[test]
    fn empty_charset_gives_empty_strings() {
        assert_eq!(random_string(&[], 2, 10), "");
    }

    #[test]
    fn language_respects_filter() {
        let language = random_language(&['0', '1'], 0, 10, 50, |w| w.starts_with('1'));
        assert!(!language.is_empty());
        assert!(language.len() <= 50);
        assert!(language.iter().all(|w| w.starts_with('1')));
    }
}
