//! Typology codes and the stability label.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Adaptive points at or above which a result counts as adaptive.
pub const ADAPTIVE_THRESHOLD: u8 = 2;

/// The four codes whose result page is further split by stability.
const SPLIT_SET: [[char; 4]; 4] = [
    ['I', 'N', 'F', 'J'],
    ['E', 'S', 'T', 'P'],
    ['I', 'N', 'T', 'J'],
    ['E', 'S', 'F', 'J'],
];

/// A resolved four-letter typology code, one letter per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typology {
    letters: [char; 4],
}

impl Typology {
    /// Build a code from the four resolved letters, in EI, SN, TF, JP order.
    pub fn new(letters: [char; 4]) -> Self {
        Self { letters }
    }

    /// The resolved letters in dimension order.
    pub fn letters(&self) -> [char; 4] {
        self.letters
    }

    /// Whether this code's result page is split by stability.
    pub fn is_split(&self) -> bool {
        SPLIT_SET.contains(&self.letters)
    }

    /// All sixteen codes, E block before I block and so on down the axes.
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(16);
        for bits in 0..16u32 {
            let mut letters = [' '; 4];
            for (i, dimension) in Dimension::all().iter().enumerate() {
                let (first, second) = dimension.letters();
                letters[i] = if bits & (1u32 << (3 - i)) == 0 {
                    first
                } else {
                    second
                };
            }
            codes.push(Self::new(letters));
        }
        codes
    }
}

impl std::fmt::Display for Typology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// The secondary stability trait derived from adaptive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    /// At least [`ADAPTIVE_THRESHOLD`] adaptive points.
    Adaptive,
    /// Fewer than [`ADAPTIVE_THRESHOLD`] adaptive points.
    Robust,
}

impl Stability {
    /// Classify an adaptive-point count.
    pub fn from_points(points: u8) -> Self {
        if points >= ADAPTIVE_THRESHOLD {
            Self::Adaptive
        } else {
            Self::Robust
        }
    }
}

impl std::fmt::Display for Stability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adaptive => write!(f, "Adaptive"),
            Self::Robust => write!(f, "Robust"),
        }
    }
}
