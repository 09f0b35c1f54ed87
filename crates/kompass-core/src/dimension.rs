//! The four typology dimensions and their tallies.
//!
//! Each of the twelve questions belongs to exactly one dimension, three per
//! dimension. During scoring every dimension collects a pair of counts (A
//! answers, B answers) and resolves to one of its two letters.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::answer::Choice;

/// One of the four typology axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    /// Extraversion / Introversion.
    Ei,
    /// Sensing / Intuition.
    Sn,
    /// Thinking / Feeling.
    Tf,
    /// Judging / Perceiving.
    Jp,
}

/// Question-to-dimension assignment: `DIMENSION_MAP[question - 1]`.
const DIMENSION_MAP: [Dimension; 12] = [
    Dimension::Ei, // q1
    Dimension::Sn, // q2
    Dimension::Tf, // q3
    Dimension::Jp, // q4
    Dimension::Ei, // q5
    Dimension::Sn, // q6
    Dimension::Tf, // q7
    Dimension::Jp, // q8
    Dimension::Ei, // q9
    Dimension::Sn, // q10
    Dimension::Tf, // q11
    Dimension::Jp, // q12
];

impl Dimension {
    /// The dimension a question belongs to, or `None` for ids outside 1..=12.
    pub fn of_question(question: u8) -> Option<Self> {
        if (1..=12).contains(&question) {
            Some(DIMENSION_MAP[usize::from(question) - 1])
        } else {
            None
        }
    }

    /// All four dimensions in code order.
    pub fn all() -> &'static [Self] {
        &[Self::Ei, Self::Sn, Self::Tf, Self::Jp]
    }

    /// The letter pair for this axis: (majority-A letter, majority-B letter).
    pub fn letters(self) -> (char, char) {
        match self {
            Self::Ei => ('E', 'I'),
            Self::Sn => ('S', 'N'),
            Self::Tf => ('T', 'F'),
            Self::Jp => ('J', 'P'),
        }
    }

    /// The letter an exact tie resolves to.
    ///
    /// EI and SN fall to their second letter, TF and JP to their first. The
    /// asymmetry is inherited behavior and kept as-is.
    pub fn tie_letter(self) -> char {
        match self {
            Self::Ei => 'I',
            Self::Sn => 'N',
            Self::Tf => 'T',
            Self::Jp => 'J',
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Ei => 0,
            Self::Sn => 1,
            Self::Tf => 2,
            Self::Jp => 3,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ei => write!(f, "EI"),
            Self::Sn => write!(f, "SN"),
            Self::Tf => write!(f, "TF"),
            Self::Jp => write!(f, "JP"),
        }
    }
}

/// How many A and B answers one dimension has collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Count of A answers.
    pub a: u8,
    /// Count of B answers.
    pub b: u8,
}

impl Tally {
    /// Count one answer.
    pub fn bump(&mut self, choice: Choice) {
        match choice {
            Choice::A => self.a += 1,
            Choice::B => self.b += 1,
        }
    }

    /// Total answers counted.
    pub fn total(self) -> u8 {
        self.a + self.b
    }
}

/// Per-dimension tallies for one scoring pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyBoard {
    tallies: [Tally; 4],
}

impl TallyBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an answer toward its question's dimension.
    ///
    /// Answers for unknown question ids are silently ignored.
    pub fn count(&mut self, question: u8, choice: Choice) {
        if let Some(dimension) = Dimension::of_question(question) {
            self.tallies[dimension.index()].bump(choice);
        }
    }

    /// The tally collected by one dimension.
    pub fn tally(&self, dimension: Dimension) -> Tally {
        self.tallies[dimension.index()]
    }

    /// Resolve one dimension to its letter.
    ///
    /// More A answers give the first letter, more B the second, an exact tie
    /// the dimension's fixed tie letter.
    pub fn resolve(&self, dimension: Dimension) -> char {
        let Tally { a, b } = self.tally(dimension);
        let (first, second) = dimension.letters();
        match a.cmp(&b) {
            Ordering::Greater => first,
            Ordering::Less => second,
            Ordering::Equal => dimension.tie_letter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_questions_per_dimension() {
        for dimension in Dimension::all() {
            let count = (1..=12)
                .filter(|&q| Dimension::of_question(q) == Some(*dimension))
                .count();
            assert_eq!(count, 3, "{dimension}");
        }
    }

    #[test]
    fn question_map_matches_layout() {
        assert_eq!(Dimension::of_question(1), Some(Dimension::Ei));
        assert_eq!(Dimension::of_question(5), Some(Dimension::Ei));
        assert_eq!(Dimension::of_question(9), Some(Dimension::Ei));
        assert_eq!(Dimension::of_question(10), Some(Dimension::Sn));
        assert_eq!(Dimension::of_question(7), Some(Dimension::Tf));
        assert_eq!(Dimension::of_question(12), Some(Dimension::Jp));
    }

    #[test]
    fn unknown_questions_have_no_dimension() {
        assert_eq!(Dimension::of_question(0), None);
        assert_eq!(Dimension::of_question(13), None);
        assert_eq!(Dimension::of_question(255), None);
    }

    #[test]
    fn letter_pairs() {
        assert_eq!(Dimension::Ei.letters(), ('E', 'I'));
        assert_eq!(Dimension::Sn.letters(), ('S', 'N'));
        assert_eq!(Dimension::Tf.letters(), ('T', 'F'));
        assert_eq!(Dimension::Jp.letters(), ('J', 'P'));
    }

    #[test]
    fn tie_letters_keep_the_asymmetry() {
        assert_eq!(Dimension::Ei.tie_letter(), 'I');
        assert_eq!(Dimension::Sn.tie_letter(), 'N');
        assert_eq!(Dimension::Tf.tie_letter(), 'T');
        assert_eq!(Dimension::Jp.tie_letter(), 'J');
    }

    #[test]
    fn tally_bump_and_total() {
        let mut tally = Tally::default();
        tally.bump(Choice::A);
        tally.bump(Choice::A);
        tally.bump(Choice::B);
        assert_eq!(tally, Tally { a: 2, b: 1 });
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn board_counts_toward_owning_dimension() {
        let mut board = TallyBoard::new();
        board.count(1, Choice::A);
        board.count(5, Choice::B);
        board.count(2, Choice::B);

        assert_eq!(board.tally(Dimension::Ei), Tally { a: 1, b: 1 });
        assert_eq!(board.tally(Dimension::Sn), Tally { a: 0, b: 1 });
        assert_eq!(board.tally(Dimension::Tf), Tally { a: 0, b: 0 });
    }

    #[test]
    fn board_ignores_unknown_questions() {
        let mut board = TallyBoard::new();
        board.count(0, Choice::A);
        board.count(13, Choice::B);
        board.count(99, Choice::A);

        for dimension in Dimension::all() {
            assert_eq!(board.tally(*dimension).total(), 0);
        }
    }

    #[test]
    fn resolve_majorities() {
        let mut board = TallyBoard::new();
        board.count(1, Choice::A);
        board.count(5, Choice::A);
        board.count(9, Choice::B);
        assert_eq!(board.resolve(Dimension::Ei), 'E');

        board.count(2, Choice::B);
        assert_eq!(board.resolve(Dimension::Sn), 'N');
    }

    #[test]
    fn resolve_ties() {
        let mut board = TallyBoard::new();
        for question in [1, 2, 3, 4] {
            board.count(question, Choice::A);
        }
        for question in [5, 6, 7, 8] {
            board.count(question, Choice::B);
        }

        // every dimension is at (1, 1)
        assert_eq!(board.resolve(Dimension::Ei), 'I');
        assert_eq!(board.resolve(Dimension::Sn), 'N');
        assert_eq!(board.resolve(Dimension::Tf), 'T');
        assert_eq!(board.resolve(Dimension::Jp), 'J');
    }

    #[test]
    fn resolve_empty_board_is_all_ties() {
        let board = TallyBoard::new();
        let letters: String = Dimension::all().iter().map(|d| board.resolve(*d)).collect();
        assert_eq!(letters, "INTJ");
    }

    #[test]
    fn dimension_display() {
        assert_eq!(Dimension::Ei.to_string(), "EI");
        assert_eq!(Dimension::Jp.to_string(), "JP");
    }
}
