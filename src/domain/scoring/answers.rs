//! AnswerSet - the learner's in-progress or final selections.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::domain::catalog::QuestionId;

/// Selections per question: a set of option indices.
///
/// Insertion order is irrelevant and indices are unique per question. The
/// single/multiple discipline (at most one index for single-select) is
/// enforced by using `replace` for single-select questions and `toggle` for
/// multi-select ones; the flow controller dispatches on the question's mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: HashMap<QuestionId, BTreeSet<usize>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection for a single-select question to exactly one index,
    /// replacing any prior choice.
    pub fn replace(&mut self, question: QuestionId, index: usize) {
        let set = self.selections.entry(question).or_default();
        set.clear();
        set.insert(index);
    }

    /// Toggles an index on a multi-select question. Returns whether the
    /// index is selected after the call.
    ///
    /// Questions whose last selection is toggled off drop out of the set
    /// entirely, so they no longer count as answered.
    pub fn toggle(&mut self, question: QuestionId, index: usize) -> bool {
        let set = self.selections.entry(question).or_default();
        let now_selected = if set.contains(&index) {
            set.remove(&index);
            false
        } else {
            set.insert(index);
            true
        };
        if set.is_empty() {
            self.selections.remove(&question);
        }
        now_selected
    }

    /// Returns the selected indices for a question, if any.
    pub fn selected(&self, question: QuestionId) -> Option<&BTreeSet<usize>> {
        self.selections.get(&question)
    }

    /// True when the question has at least one selection.
    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.selections
            .get(&question)
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// Number of questions with at least one selection.
    pub fn answered_count(&self) -> usize {
        self.selections.values().filter(|s| !s.is_empty()).count()
    }

    /// Iterates over all answered question ids.
    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.selections.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Discards every selection.
    pub fn clear(&mut self) {
        self.selections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: u32) -> QuestionId {
        QuestionId::new(id)
    }

    #[test]
    fn replace_keeps_exactly_one_selection() {
        let mut answers = AnswerSet::new();
        answers.replace(q(1), 0);
        answers.replace(q(1), 2);

        let selected = answers.selected(q(1)).unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected.contains(&2));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut answers = AnswerSet::new();
        assert!(answers.toggle(q(21), 1));
        assert!(answers.toggle(q(21), 3));
        assert_eq!(answers.selected(q(21)).unwrap().len(), 2);

        assert!(!answers.toggle(q(21), 1));
        let selected = answers.selected(q(21)).unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected.contains(&3));
    }

    #[test]
    fn toggling_twice_restores_prior_state() {
        let mut answers = AnswerSet::new();
        answers.toggle(q(21), 0);
        let before = answers.clone();

        answers.toggle(q(21), 4);
        answers.toggle(q(21), 4);

        assert_eq!(answers, before);
    }

    #[test]
    fn toggling_off_last_selection_unanswers_the_question() {
        let mut answers = AnswerSet::new();
        answers.toggle(q(21), 2);
        assert!(answers.is_answered(q(21)));
        assert_eq!(answers.answered_count(), 1);

        answers.toggle(q(21), 2);
        assert!(!answers.is_answered(q(21)));
        assert_eq!(answers.answered_count(), 0);
        assert!(answers.is_empty());
    }

    #[test]
    fn answered_count_spans_questions() {
        let mut answers = AnswerSet::new();
        answers.replace(q(1), 0);
        answers.replace(q(2), 1);
        answers.toggle(q(21), 0);

        assert_eq!(answers.answered_count(), 3);
    }

    #[test]
    fn clear_discards_everything() {
        let mut answers = AnswerSet::new();
        answers.replace(q(1), 0);
        answers.clear();

        assert!(answers.is_empty());
        assert_eq!(answers.answered_count(), 0);
    }
}
