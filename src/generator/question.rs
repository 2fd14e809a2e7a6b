// Generated phrase-pair questions

use serde::{Deserialize, Serialize};

/// One phrase-pair question shown on the slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    /// `q1`, `q2`, ... unique within one assessment
    pub id: String,
    pub left_phrase: String,
    pub right_phrase: String,
    /// Index of the left phrase in the flattened phrase pool
    pub left_phrase_index: usize,
    pub right_phrase_index: usize,
    /// Derived from the sorted index pair; identical whichever side each phrase lands on
    pub pair_label: String,
    /// 1-based dimension phase for dimension-focused assessments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<usize>,
}

/// A phrase together with its pool index
#[derive(Debug, Clone, Copy)]
pub(crate) struct PoolPhrase<'a> {
    pub text: &'a str,
    pub index: usize,
}

impl GeneratedQuestion {
    /// Build a question, putting `first` on the left when `first_on_left` is set
    pub(crate) fn place(
        number: usize,
        first: PoolPhrase<'_>,
        second: PoolPhrase<'_>,
        first_on_left: bool,
        phase: Option<usize>,
    ) -> Self {
        let (left, right) = if first_on_left {
            (first, second)
        } else {
            (second, first)
        };

        Self {
            id: format!("q{}", number),
            left_phrase: left.text.to_string(),
            right_phrase: right.text.to_string(),
            left_phrase_index: left.index,
            right_phrase_index: right.index,
            pair_label: pair_label(first.index, second.index),
            phase,
        }
    }
}

/// Order-independent label for a pair of phrase indices
pub fn pair_label(a: usize, b: usize) -> String {
    format!("{}-vs-{}", a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_label_is_symmetric() {
        assert_eq!(pair_label(3, 11), "3-vs-11");
        assert_eq!(pair_label(11, 3), "3-vs-11");
    }

    #[test]
    fn test_place_swaps_sides_but_not_label() {
        let a = PoolPhrase { text: "alpha", index: 7 };
        let b = PoolPhrase { text: "beta", index: 2 };

        let kept = GeneratedQuestion::place(1, a, b, true, None);
        let swapped = GeneratedQuestion::place(1, a, b, false, None);

        assert_eq!(kept.left_phrase, "alpha");
        assert_eq!(kept.right_phrase_index, 2);
        assert_eq!(swapped.left_phrase, "beta");
        assert_eq!(swapped.right_phrase_index, 7);
        assert_eq!(kept.pair_label, swapped.pair_label);
        assert_eq!(kept.id, "q1");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let q = GeneratedQuestion::place(
            4,
            PoolPhrase { text: "x", index: 0 },
            PoolPhrase { text: "y", index: 1 },
            true,
            Some(2),
        );
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["leftPhraseIndex"], 0);
        assert_eq!(json["pairLabel"], "0-vs-1");
        assert_eq!(json["phase"], 2);
    }
}
