use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Confidence score clamped to [0.0, 1.0].
///
/// Every construction and arithmetic operation re-clamps, so a
/// `Confidence` can never leave the unit interval no matter what sequence
/// of adjustments it receives.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Promotion threshold — an active hypothesis at or above this (with
    /// enough validations) becomes validated.
    pub const VALIDATED: f64 = 0.9;
    /// Archival threshold — an active hypothesis below this is archived.
    pub const ARCHIVAL: f64 = 0.3;
    /// Neutral midpoint used when a cycle produces no insights.
    pub const NEUTRAL: f64 = 0.5;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if this confidence qualifies for promotion.
    pub fn is_validated(self) -> bool {
        self.0 >= Self::VALIDATED
    }

    /// Check if this confidence qualifies for archival.
    pub fn is_archival(self) -> bool {
        self.0 < Self::ARCHIVAL
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add<f64> for Confidence {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl Sub<f64> for Confidence {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}

impl Mul<f64> for Confidence {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
