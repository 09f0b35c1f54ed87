//! Navigation destinations handed to the presentation layer.
//!
//! The engine never navigates. Each operation returns a [`Page`] and the
//! front-end decides how to get there.

use serde::{Deserialize, Serialize};

use crate::typology::{Stability, Typology};

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// The start/landing page.
    Start,
    /// One of the twelve question pages.
    Question(u8),
    /// The scoring trigger page.
    Scoring,
    /// A result page.
    Result {
        /// The typology the page presents.
        typology: Typology,
        /// The stability label, present only for split-set codes.
        stability: Option<Stability>,
    },
}

impl Page {
    /// The result page for a scored typology.
    ///
    /// Split-set codes carry the stability label in the page name; every
    /// other code routes on the typology alone.
    pub fn result(typology: Typology, stability: Stability) -> Self {
        Self::Result {
            typology,
            stability: typology.is_split().then_some(stability),
        }
    }

    /// The canonical page name: `index`, `q1`..`q12`, `scoring`,
    /// `result_<TYPOLOGY>` or `result_<TYPOLOGY>_<STABILITY>`.
    pub fn name(&self) -> String {
        match self {
            Self::Start => "index".to_string(),
            Self::Question(n) => format!("q{n}"),
            Self::Scoring => "scoring".to_string(),
            Self::Result {
                typology,
                stability: None,
            } => format!("result_{typology}"),
            Self::Result {
                typology,
                stability: Some(stability),
            } => format!("result_{typology}_{stability}"),
        }
    }

    /// The complete fixed result surface: twelve plain pages plus two per
    /// split-set code, twenty in total.
    pub fn result_surface() -> Vec<Self> {
        let mut pages = Vec::with_capacity(20);
        for typology in Typology::all() {
            if typology.is_split() {
                for stability in [Stability::Adaptive, Stability::Robust] {
                    pages.push(Self::Result {
                        typology,
                        stability: Some(stability),
                    });
                }
            } else {
                pages.push(Self::Result {
                    typology,
                    stability: None,
                });
            }
        }
        pages
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
