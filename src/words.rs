//! Word-relation record model and syllable grouping helpers.

use serde::{Deserialize, Serialize};

use crate::group::{Grouped, group_by};
use crate::types::{GroupHeading, Word};

/// One row returned by a word-relation lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedWord {
    /// The related word itself.
    pub word: Word,
    /// Relevance score assigned by the endpoint (0 when not reported).
    #[serde(default)]
    pub score: u64,
    /// Syllable count (0 when the endpoint does not report one).
    #[serde(rename = "numSyllables", default)]
    pub num_syllables: usize,
    /// Free-form tags attached by the endpoint (e.g. part-of-speech codes).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl RelatedWord {
    /// Build a word with only the fields rhyme browsing needs.
    pub fn new(word: impl Into<Word>, num_syllables: usize) -> Self {
        Self {
            word: word.into(),
            score: 0,
            num_syllables,
            tags: Vec::new(),
        }
    }

    /// Attach a relevance score.
    pub fn with_score(mut self, score: u64) -> Self {
        self.score = score;
        self
    }
}

/// Group rhyme results by syllable count.
///
/// Groups come out in ascending syllable order; within a group the endpoint's
/// ranking order is preserved.
pub fn syllable_groups(
    words: impl IntoIterator<Item = RelatedWord>,
) -> Grouped<usize, RelatedWord> {
    group_by(words, |word| word.num_syllables)
}

/// Heading text for a syllable group, e.g. `1 syllable` / `3 syllables`.
pub fn syllable_heading(count: usize) -> GroupHeading {
    if count == 1 {
        "1 syllable".to_string()
    } else {
        format!("{count} syllables")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_datamuse_style_rows() {
        let body = r#"[
            {"word": "rest", "score": 3793, "numSyllables": 1},
            {"word": "arrest", "score": 1024, "numSyllables": 2, "tags": ["n", "v"]},
            {"word": "guessed"}
        ]"#;
        let words: Vec<RelatedWord> = serde_json::from_str(body).unwrap();
        assert_eq!(words[0], RelatedWord::new("rest", 1).with_score(3793));
        assert_eq!(words[1].tags, ["n", "v"]);
        assert_eq!(words[2].score, 0);
        assert_eq!(words[2].num_syllables, 0);
    }

    #[test]
    fn syllable_groups_sort_counts_and_keep_rank_order() {
        let words = vec![
            RelatedWord::new("arrest", 2),
            RelatedWord::new("rest", 1),
            RelatedWord::new("best", 1),
            RelatedWord::new("professed", 2),
        ];
        let groups = syllable_groups(words);
        let counts: Vec<usize> = groups.keys().copied().collect();
        assert_eq!(counts, [1, 2]);

        let one: Vec<&str> = groups[&1].iter().map(|w| w.word.as_str()).collect();
        assert_eq!(one, ["rest", "best"]);
        let two: Vec<&str> = groups[&2].iter().map(|w| w.word.as_str()).collect();
        assert_eq!(two, ["arrest", "professed"]);
    }

    #[test]
    fn headings_pluralize_above_one_syllable() {
        assert_eq!(syllable_heading(1), "1 syllable");
        assert_eq!(syllable_heading(2), "2 syllables");
        assert_eq!(syllable_heading(0), "0 syllables");
    }
}
