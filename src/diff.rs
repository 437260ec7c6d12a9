/// Verdict for one character of the reference text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum CharacterClassification {
    Correct,
    Incorrect,
    Pending,
}

/// Result of comparing typed text against a reference
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// One entry per character of the reference text
    pub chars: Vec<CharacterClassification>,
    pub mistake_count: usize,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn count(&self, kind: CharacterClassification) -> usize {
        self.chars.iter().filter(|c| **c == kind).count()
    }
}

/// Classify every reference character against the typed text.
///
/// Always a full rescan. Typed characters past the end of the reference are ignored.
pub fn classify(reference: &str, typed: &str) -> Classification {
    let mut typed_chars = typed.chars();
    let mut mistake_count = 0;

    let chars = reference
        .chars()
        .map(|expected| match typed_chars.next() {
            Some(actual) if actual == expected => CharacterClassification::Correct,
            Some(_) => {
                mistake_count += 1;
                CharacterClassification::Incorrect
            }
            None => CharacterClassification::Pending,
        })
        .collect();

    Classification {
        chars,
        mistake_count,
    }
}

#[cfg(test)]
mod tests {
    use super::CharacterClassification::*;
    use super::*;

    #[test]
    fn test_all_correct() {
        let result = classify("cat", "cat");
        assert_eq!(result.chars, vec![Correct, Correct, Correct]);
        assert_eq!(result.mistake_count, 0);
    }

    #[test]
    fn test_single_mistake() {
        let result = classify("cat", "cot");
        assert_eq!(result.chars, vec![Correct, Incorrect, Correct]);
        assert_eq!(result.mistake_count, 1);
    }

    #[test]
    fn test_nothing_typed() {
        let result = classify("abc", "");
        assert_eq!(result.chars, vec![Pending, Pending, Pending]);
        assert_eq!(result.mistake_count, 0);
    }

    #[test]
    fn test_partial_input() {
        let result = classify("hello", "hx");
        assert_eq!(result.chars, vec![Correct, Incorrect, Pending, Pending, Pending]);
        assert_eq!(result.count(Pending), 3);
        assert_eq!(result.mistake_count, result.count(Incorrect));
    }

    #[test]
    fn test_overlong_input_is_truncated() {
        let result = classify("ab", "axzzzz");
        assert_eq!(result.chars, vec![Correct, Incorrect]);
        assert_eq!(result.mistake_count, 1);
    }

    #[test]
    fn test_empty_reference() {
        let result = classify("", "anything");
        assert!(result.is_empty());
        assert_eq!(result.mistake_count, 0);
    }

    #[test]
    fn test_case_and_whitespace_are_significant() {
        let result = classify("A b", "a  ");
        assert_eq!(result.chars, vec![Incorrect, Correct, Incorrect]);
        assert_eq!(result.mistake_count, 2);
    }

    #[test]
    fn test_indices_are_code_points() {
        let result = classify("héllo", "héllo");
        assert_eq!(result.len(), 5);
        assert_eq!(result.count(Correct), 5);

        let result = classify("naïve", "naive");
        assert_eq!(result.chars, vec![Correct, Correct, Incorrect, Correct, Correct]);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let reference = "The five boxing wizards jump quickly.";
        let typed = "The fivr boxing";
        assert_eq!(classify(reference, typed), classify(reference, typed));
    }

    #[test]
    fn test_counts_for_every_prefix() {
        let reference = "Pack my box with five dozen liquor jugs.";
        let typed_full = "Pack my bix with fove dozen liquor jugs!";
        let reference_len = reference.chars().count();

        for n in 0..=typed_full.chars().count() {
            let typed: String = typed_full.chars().take(n).collect();
            let result = classify(reference, &typed);

            assert_eq!(result.len(), reference_len);
            assert_eq!(result.count(Correct) + result.count(Incorrect), n);
            assert_eq!(result.count(Pending), reference_len - n);
            assert_eq!(result.mistake_count, result.count(Incorrect));
        }
    }
}
