//! Optical elements and their 2x2 transfer operators.

use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::matrix::Matrix2x2;

/// Symmetric 50/50 beam splitter: (1/√2) · [[1, i], [i, 1]].
///
/// Reflection picks up a quarter-turn phase (the `i` on the cross terms).
pub fn beam_splitter() -> Matrix2x2 {
    let t = Complex::new(FRAC_1_SQRT_2, 0.0);
    let r = Complex::new(0.0, FRAC_1_SQRT_2);
    [t, r, r, t]
}

/// Phase delay on mode 0: [[e^(iφ), 0], [0, 1]].
pub fn phase_shifter(phase: f64) -> Matrix2x2 {
    let zero = Complex::new(0.0, 0.0);
    let one = Complex::new(1.0, 0.0);
    [Complex::from_polar(1.0, phase), zero, zero, one]
}

/// Mode swap: [[0, 1], [1, 0]].
pub fn mirror() -> Matrix2x2 {
    let zero = Complex::new(0.0, 0.0);
    let one = Complex::new(1.0, 0.0);
    [zero, one, one, zero]
}

/// An element placed in the beam path.
#[derive(Clone, Debug, Copy, PartialEq)]
pub enum OpticalElement {
    BeamSplitter,
    PhaseShifter { phase: f64 },
    Mirror,
}

impl OpticalElement {
    /// Build this element's operator. Rebuilt on every call.
    pub fn matrix(&self) -> Matrix2x2 {
        match *self {
            OpticalElement::BeamSplitter => beam_splitter(),
            OpticalElement::PhaseShifter { phase } => phase_shifter(phase),
            OpticalElement::Mirror => mirror(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OpticalElement::BeamSplitter => "beam splitter",
            OpticalElement::PhaseShifter { .. } => "phase shifter",
            OpticalElement::Mirror => "mirror",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{apply, is_unitary, mat_mul, max_distance};
    use std::f64::consts::PI;

    #[test]
    fn all_elements_are_unitary() {
        assert!(is_unitary(&beam_splitter(), 1e-12));
        assert!(is_unitary(&mirror(), 1e-12));
        for k in 0..16 {
            let phase = k as f64 * PI / 8.0;
            assert!(
                is_unitary(&phase_shifter(phase), 1e-12),
                "phase shifter at {} should be unitary",
                phase
            );
        }
    }

    #[test]
    fn beam_splitter_splits_evenly() {
        let input = [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)];
        let out = apply(&beam_splitter(), &input);
        assert!((out[0].norm_sqr() - 0.5).abs() < 1e-12);
        assert!((out[1].norm_sqr() - 0.5).abs() < 1e-12);
        // Reflected arm carries +i
        assert!((out[1] - Complex::new(0.0, FRAC_1_SQRT_2)).norm() < 1e-12);
    }

    #[test]
    fn mirror_swaps_modes() {
        let v = [Complex::new(0.3, 0.1), Complex::new(-0.2, 0.9)];
        let out = apply(&mirror(), &v);
        assert_eq!(out, [v[1], v[0]]);
        assert!(max_distance(&mat_mul(&mirror(), &mirror()), &crate::matrix::identity()) < 1e-15);
    }

    #[test]
    fn phase_shifter_touches_mode_zero_only() {
        let m = phase_shifter(PI / 2.0);
        assert!((m[0] - Complex::new(0.0, 1.0)).norm() < 1e-12);
        assert_eq!(m[3], Complex::new(1.0, 0.0));
        assert_eq!(m[1], Complex::new(0.0, 0.0));
        assert_eq!(m[2], Complex::new(0.0, 0.0));
    }

    #[test]
    fn zero_phase_shifter_is_identity() {
        assert!(max_distance(&phase_shifter(0.0), &crate::matrix::identity()) < 1e-15);
    }

    #[test]
    fn element_matrix_dispatch() {
        assert_eq!(OpticalElement::BeamSplitter.matrix(), beam_splitter());
        assert_eq!(OpticalElement::Mirror.matrix(), mirror());
        assert_eq!(
            OpticalElement::PhaseShifter { phase: 1.25 }.matrix(),
            phase_shifter(1.25)
        );
        assert_eq!(OpticalElement::Mirror.name(), "mirror");
    }
}
