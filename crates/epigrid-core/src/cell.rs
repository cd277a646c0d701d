//! The [`SirCell`] value type: one grid point's local epidemic state.

use std::fmt;

/// One of the three SIR compartments.
///
/// Used by [`StepError::NonFiniteCell`](crate::StepError::NonFiniteCell)
/// to name the compartment that failed the sentinel check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compartment {
    /// The susceptible population share.
    Susceptible,
    /// The infected population share.
    Infected,
    /// The recovered population share.
    Recovered,
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Susceptible => write!(f, "S"),
            Self::Infected => write!(f, "I"),
            Self::Recovered => write!(f, "R"),
        }
    }
}

/// Local SIR state for a single grid point.
///
/// Holds the susceptible, infected, and recovered quantities as `f64`
/// population fractions (or counts; the grid machinery is agnostic).
/// Conservation of `S + I + R` is the integrating model's contract;
/// neither the cell nor the grid enforces it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SirCell {
    s: f64,
    i: f64,
    r: f64,
}

impl SirCell {
    /// Create a cell from its three compartment values.
    pub fn new(s: f64, i: f64, r: f64) -> Self {
        Self { s, i, r }
    }

    /// A fully susceptible cell: `(1, 0, 0)`.
    pub fn susceptible_unit() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The susceptible compartment.
    pub fn susceptible(&self) -> f64 {
        self.s
    }

    /// The infected compartment.
    pub fn infected(&self) -> f64 {
        self.i
    }

    /// The recovered compartment.
    pub fn recovered(&self) -> f64 {
        self.r
    }

    /// Overwrite the susceptible compartment.
    pub fn set_susceptible(&mut self, v: f64) {
        self.s = v;
    }

    /// Overwrite the infected compartment.
    pub fn set_infected(&mut self, v: f64) {
        self.i = v;
    }

    /// Overwrite the recovered compartment.
    pub fn set_recovered(&mut self, v: f64) {
        self.r = v;
    }

    /// Sum of all three compartments.
    pub fn total(&self) -> f64 {
        self.s + self.i + self.r
    }

    /// The first compartment holding a NaN or infinity, if any.
    ///
    /// Checked in compartment order S, I, R. Used by the update pass as a
    /// sentinel on model output.
    pub fn first_non_finite(&self) -> Option<Compartment> {
        if !self.s.is_finite() {
            Some(Compartment::Susceptible)
        } else if !self.i.is_finite() {
            Some(Compartment::Infected)
        } else if !self.r.is_finite() {
            Some(Compartment::Recovered)
        } else {
            None
        }
    }

    /// `true` when every compartment is finite.
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }
}

impl fmt::Display for SirCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(S={}, I={}, R={})", self.s, self.i, self.r)
    }
}
