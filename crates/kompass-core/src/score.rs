//! Scoring: tally pass, adaptive points, and the score report.
//!
//! Scoring reads whatever the sheet holds. Unknown question ids are ignored
//! and a partial sheet scores with only the answers present — completeness is
//! the front-end's concern.

use serde::{Deserialize, Serialize};

use crate::answer::{AnswerSheet, Choice};
use crate::dimension::{Dimension, TallyBoard};
use crate::page::Page;
use crate::typology::{Stability, Typology};

/// Marker answers that earn an adaptive point: `(question, choice)`.
const ADAPTIVE_MARKERS: [(u8, Choice); 3] = [
    (5, Choice::A),
    (7, Choice::B),
    (10, Choice::B),
];

/// Everything one scoring pass produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Per-dimension tallies.
    pub tallies: TallyBoard,
    /// Adaptive points collected (0..=3).
    pub adaptive_points: u8,
    /// The resolved typology code.
    pub typology: Typology,
    /// The resolved stability label.
    pub stability: Stability,
}

impl ScoreReport {
    /// The result page this report routes to.
    pub fn destination(&self) -> Page {
        Page::result(self.typology, self.stability)
    }
}

/// Score a sheet: tally the dimensions, count adaptive points, resolve the
/// letters and the stability label.
pub fn score(sheet: &AnswerSheet) -> ScoreReport {
    let mut tallies = TallyBoard::new();
    let mut adaptive_points = 0;

    for (question, choice) in sheet.iter() {
        tallies.count(question, choice);
        if ADAPTIVE_MARKERS.contains(&(question, choice)) {
            adaptive_points += 1;
        }
    }

    let letters = [
        tallies.resolve(Dimension::Ei),
        tallies.resolve(Dimension::Sn),
        tallies.resolve(Dimension::Tf),
        tallies.resolve(Dimension::Jp),
    ];

    ScoreReport {
        tallies,
        adaptive_points,
        typology: Typology::new(letters),
        stability: Stability::from_points(adaptive_points),
    }
}
