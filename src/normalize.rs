use crate::letters::LetterSet;

/// Letter set of `word` and whether any letter occurs more than once.
///
/// Panics on bytes outside `a..=z`; the word list is validated before it
/// reaches this point.
pub fn word_mask(word: &str) -> (LetterSet, bool) {
    let mut mask = LetterSet::EMPTY;
    let mut duplicate_letter = false;
    for c in word.bytes() {
        let letter = LetterSet::letter(c);
        duplicate_letter |= mask.contains_any(letter);
        mask = mask | letter;
    }
    (mask, duplicate_letter)
}

/// Keeps only the words without a repeated letter, in input order.
pub fn normalize<I, S>(words: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter(|w| !word_mask(w.as_ref()).1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_of_clean_word() {
        let (mask, dup) = word_mask("cat");
        assert!(!dup);
        assert_eq!(mask.to_string(), "act");
    }

    #[test]
    fn mask_flags_repeats() {
        assert!(word_mask("book").1);
        assert!(word_mask("aa").1);
        assert!(!word_mask("a").1);
    }

    #[test]
    fn drops_repeated_letter_words() {
        assert_eq!(normalize(["book", "cat"]), vec!["cat"]);
    }

    #[test]
    fn keeps_input_order() {
        let words = vec!["zebra", "apple", "act", "letter", "fish"];
        assert_eq!(normalize(words), vec!["zebra", "act", "fish"]);
    }

    #[test]
    fn idempotent() {
        let once = normalize(["moon", "sun", "star", "comet", "ab"]);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }
}
