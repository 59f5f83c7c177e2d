//! Two-mode photon state.

use num_complex::Complex;

use crate::matrix::{apply, Matrix2x2, Vector2};

/// Single-photon amplitudes over the two interferometer arms.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ModeState {
    pub amplitudes: Vector2,
}

impl ModeState {
    pub fn new(mode0: Complex<f64>, mode1: Complex<f64>) -> Self {
        Self {
            amplitudes: [mode0, mode1],
        }
    }

    /// The photon enters fully in mode 0: (1, 0).
    pub fn input() -> Self {
        Self::new(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0))
    }

    /// Apply an operator, returning the transformed state.
    pub fn evolve(&self, operator: &Matrix2x2) -> Self {
        Self {
            amplitudes: apply(operator, &self.amplitudes),
        }
    }

    /// Detection probabilities (|a₀|², |a₁|²).
    pub fn probabilities(&self) -> (f64, f64) {
        (self.amplitudes[0].norm_sqr(), self.amplitudes[1].norm_sqr())
    }

    /// Total probability |a₀|² + |a₁|².
    pub fn norm_sqr(&self) -> f64 {
        let (p0, p1) = self.probabilities();
        p0 + p1
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::input()
    }
}
