use crate::error::{QuizError, Result};
use crate::score::{percentage, Grade};
use crate::words::WordPair;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub shuffle: bool,
    pub pronunciation_hint: bool,
    pub show_hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            pronunciation_hint: false,
            show_hints: true,
        }
    }
}

/// One run through an ordered list of word pairs.
#[derive(Debug, Clone)]
pub struct Session {
    items: Vec<WordPair>,
    wrong: Vec<WordPair>,
    answered: usize,
}

impl Session {
    /// Refuses an empty list so the score ratio is always defined.
    pub fn new(items: Vec<WordPair>, origin: &Path) -> Result<Self> {
        if items.is_empty() {
            return Err(QuizError::EmptyWordList {
                path: origin.to_path_buf(),
            });
        }
        Ok(Self {
            items,
            wrong: Vec::new(),
            answered: 0,
        })
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }

    pub fn items(&self) -> &[WordPair] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Wrong pairs in the order they were missed.
    pub fn wrong_answers(&self) -> &[WordPair] {
        &self.wrong
    }

    pub fn correct_count(&self) -> usize {
        self.answered - self.wrong.len()
    }

    /// Record the outcome for the next unanswered item.
    pub fn record(&mut self, pair: &WordPair, correct: bool) {
        if !correct {
            self.wrong.push(pair.clone());
        }
        self.answered += 1;
    }

    /// Score reached if every remaining item is answered correctly.
    pub fn max_score(&self) -> f64 {
        self.ratio(self.total() - self.wrong.len())
    }

    /// Score reached if every remaining item is answered wrong.
    pub fn current_score(&self) -> f64 {
        self.ratio(self.correct_count())
    }

    /// Final score. Items not yet answered count as wrong.
    pub fn score(&self) -> f64 {
        self.current_score()
    }

    pub fn grade(&self) -> Grade {
        if self.correct_count() == self.total() {
            Grade::Perfect
        } else {
            Grade::from_score(self.score())
        }
    }

    pub fn is_finished(&self) -> bool {
        self.answered == self.total()
    }

    fn ratio(&self, correct: usize) -> f64 {
        percentage(correct, self.total()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn pairs(n: usize) -> Vec<WordPair> {
        (0..n)
            .map(|i| WordPair::new(format!("prompt{i}"), format!("answer{i}")))
            .collect()
    }

    fn multiset(items: &[WordPair]) -> HashMap<&WordPair, usize> {
        let mut counts = HashMap::new();
        for item in items {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn empty_session_is_rejected() {
        let err = Session::new(Vec::new(), Path::new("empty.csv")).unwrap_err();
        assert_matches!(err, QuizError::EmptyWordList { .. });
    }

    #[test]
    fn score_follows_wrong_count() {
        for total in 1..=12 {
            for wrong in 0..=total {
                let items = pairs(total);
                let mut session = Session::new(items.clone(), Path::new("w")).unwrap();
                for (i, pair) in items.iter().enumerate() {
                    session.record(pair, i >= wrong);
                }
                let expected = 100.0 * (total - wrong) as f64 / total as f64;
                assert!((session.score() - expected).abs() < 1e-9);
                assert_eq!(session.wrong_answers().len(), wrong);
            }
        }
    }

    #[test]
    fn single_item_scores_zero_or_hundred() {
        let items = pairs(1);

        let mut right = Session::new(items.clone(), Path::new("w")).unwrap();
        right.record(&items[0], true);
        assert_eq!(right.score(), 100.0);
        assert_eq!(right.grade(), Grade::Perfect);

        let mut wrong = Session::new(items.clone(), Path::new("w")).unwrap();
        wrong.record(&items[0], false);
        assert_eq!(wrong.score(), 0.0);
        assert_eq!(wrong.grade(), Grade::Fail);
    }

    #[test]
    fn running_bounds_narrow_as_answers_arrive() {
        let items = pairs(4);
        let mut session = Session::new(items.clone(), Path::new("w")).unwrap();
        assert_eq!(session.max_score(), 100.0);
        assert_eq!(session.current_score(), 0.0);

        session.record(&items[0], true);
        session.record(&items[1], false);
        assert_eq!(session.max_score(), 75.0);
        assert_eq!(session.current_score(), 25.0);
        assert!(!session.is_finished());

        session.record(&items[2], true);
        session.record(&items[3], true);
        assert!(session.is_finished());
        assert_eq!(session.score(), 75.0);
        assert_eq!(session.grade(), Grade::Fail);
    }

    #[test]
    fn wrong_answers_keep_encounter_order() {
        let items = pairs(5);
        let mut session = Session::new(items.clone(), Path::new("w")).unwrap();
        for pair in items.iter().rev() {
            session.record(pair, false);
        }
        let expected: Vec<WordPair> = items.iter().rev().cloned().collect();
        assert_eq!(session.wrong_answers(), expected.as_slice());
    }

    #[test]
    fn unshuffled_order_is_file_order() {
        let items = pairs(10);
        for _ in 0..3 {
            let session = Session::new(items.clone(), Path::new("w")).unwrap();
            assert_eq!(session.items(), items.as_slice());
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items = pairs(20);
        items.push(WordPair::new("prompt0", "answer0"));

        for seed in 0..5 {
            let mut session = Session::new(items.clone(), Path::new("w")).unwrap();
            session.shuffle(&mut StdRng::seed_from_u64(seed));
            assert_eq!(session.total(), items.len());
            assert_eq!(multiset(session.items()), multiset(&items));
        }
    }

    #[test]
    fn pass_grade_at_eighty_percent() {
        let items = pairs(5);
        let mut session = Session::new(items.clone(), Path::new("w")).unwrap();
        for (i, pair) in items.iter().enumerate() {
            session.record(pair, i != 0);
        }
        assert_eq!(session.score(), 80.0);
        assert_eq!(session.grade(), Grade::Pass);
    }
}
