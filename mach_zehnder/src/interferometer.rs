//! The Mach-Zehnder interferometer.
//!
//! Propagation order through the device:
//! 1. Beam splitter (input port 0 → both arms)
//! 2. Phase shifter on arm 0
//! 3. Mirror (swap arms)
//! 4. Beam splitter (recombine)
//!
//! Operators compose right-to-left, so the transfer matrix is
//! `BS · M · P(φ) · BS`. The order matters: the device is not symmetric
//! under reordering of its elements.
//!
//! With input (1, 0) the output probabilities are
//! `p₀ = cos²(φ/2)` and `p₁ = sin²(φ/2)`.

use log::{debug, warn};

use crate::error::{InterferometerError, Result};
use crate::matrix::{identity, mat_mul, Matrix2x2};
use crate::optics::OpticalElement;
use crate::state::ModeState;

/// Relative tolerance for `port0 + port1 == photon_count`.
pub const DRIFT_TOLERANCE: f64 = 1e-9;

/// Expected detection counts at the two output ports.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct DetectionCounts {
    pub port0: f64,
    pub port1: f64,
}

impl DetectionCounts {
    pub fn total(&self) -> f64 {
        self.port0 + self.port1
    }
}

impl From<DetectionCounts> for (f64, f64) {
    fn from(c: DetectionCounts) -> Self {
        (c.port0, c.port1)
    }
}

/// An interferometer at a fixed phase setting.
#[derive(Clone, Debug, PartialEq)]
pub struct Interferometer {
    elements: Vec<OpticalElement>,
}

impl Interferometer {
    /// Standard layout: BS, P(φ), M, BS in propagation order.
    pub fn new(phase: f64) -> Self {
        Self::from_elements(vec![
            OpticalElement::BeamSplitter,
            OpticalElement::PhaseShifter { phase },
            OpticalElement::Mirror,
            OpticalElement::BeamSplitter,
        ])
    }

    /// Arbitrary element chain, first element is hit first.
    pub fn from_elements(elements: Vec<OpticalElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[OpticalElement] {
        &self.elements
    }

    /// Product of all element operators, last element leftmost.
    pub fn transfer_matrix(&self) -> Matrix2x2 {
        self.elements
            .iter()
            .fold(identity(), |acc, element| mat_mul(&element.matrix(), &acc))
    }

    /// Push a state through the whole chain.
    pub fn propagate(&self, state: &ModeState) -> ModeState {
        state.evolve(&self.transfer_matrix())
    }

    /// Detection counts for the standard input (1, 0), scaled by `photon_count`.
    pub fn detect(&self, photon_count: f64) -> DetectionCounts {
        let (p0, p1) = self.propagate(&ModeState::input()).probabilities();
        DetectionCounts {
            port0: p0 * photon_count,
            port1: p1 * photon_count,
        }
    }
}

/// Reject non-finite phases and non-positive photon counts.
pub fn validate_inputs(phase: f64, photon_count: f64) -> Result<()> {
    if !phase.is_finite() {
        return Err(InterferometerError::NonFinitePhase(phase));
    }
    if !photon_count.is_finite() || photon_count <= 0.0 {
        return Err(InterferometerError::InvalidPhotonCount(photon_count));
    }
    Ok(())
}

/// Check that the counts still sum to `photon_count`, relative to the count.
pub fn check_conservation(counts: &DetectionCounts, photon_count: f64) -> Result<()> {
    let actual = counts.total();
    if (actual - photon_count).abs() > DRIFT_TOLERANCE * photon_count.abs() {
        return Err(InterferometerError::NumericDrift {
            expected: photon_count,
            actual,
        });
    }
    Ok(())
}

/// Expected detection counts at both ports for a given phase and photon count.
///
/// Pure and deterministic; safe to call from any number of threads.
pub fn compute(phase: f64, photon_count: f64) -> Result<DetectionCounts> {
    validate_inputs(phase, photon_count)?;

    let counts = Interferometer::new(phase).detect(photon_count);
    if let Err(drift) = check_conservation(&counts, photon_count) {
        warn!("phase {:.6}: {}", phase, drift);
    }

    debug!(
        "phase {:.6}, photons {}: port0 {:.6}, port1 {:.6}",
        phase, photon_count, counts.port0, counts.port1
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{is_unitary, max_distance};
    use crate::optics::{beam_splitter, mirror, phase_shifter};
    use std::f64::consts::PI;

    #[test]
    fn zero_phase_sends_everything_to_port_zero() {
        // BS·(1,0) = (1, i)/√2 → M → (i, 1)/√2 → BS → (i, 0)
        let counts = compute(0.0, 1.0).unwrap();
        assert!((counts.port0 - 1.0).abs() < 1e-9);
        assert!(counts.port1.abs() < 1e-9);
    }

    #[test]
    fn pi_phase_sends_everything_to_port_one() {
        let counts = compute(PI, 1.0).unwrap();
        assert!(counts.port0.abs() < 1e-9);
        assert!((counts.port1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn matches_closed_form() {
        for k in 0..50 {
            let phase = -3.0 + k as f64 * 0.37;
            let counts = compute(phase, 1.0).unwrap();
            let expected0 = (phase / 2.0).cos().powi(2);
            let expected1 = (phase / 2.0).sin().powi(2);
            assert!((counts.port0 - expected0).abs() < 1e-9, "phase {}", phase);
            assert!((counts.port1 - expected1).abs() < 1e-9, "phase {}", phase);
        }
    }

    #[test]
    fn transfer_matrix_is_right_to_left_product() {
        let phase = 0.7;
        let explicit = mat_mul(
            &beam_splitter(),
            &mat_mul(&mirror(), &mat_mul(&phase_shifter(phase), &beam_splitter())),
        );
        let chain = Interferometer::new(phase).transfer_matrix();
        assert!(max_distance(&chain, &explicit) < 1e-12);
        assert!(is_unitary(&chain, 1e-12));
    }

    #[test]
    fn element_order_matters() {
        let phase = PI / 3.0;
        let standard = Interferometer::new(phase).detect(1.0);
        // Delay applied before the first splitter is only a global phase
        let swapped = Interferometer::from_elements(vec![
            OpticalElement::PhaseShifter { phase },
            OpticalElement::BeamSplitter,
            OpticalElement::Mirror,
            OpticalElement::BeamSplitter,
        ])
        .detect(1.0);
        assert!(
            (standard.port0 - swapped.port0).abs() > 0.2,
            "reordered chain should change the outcome: {:?} vs {:?}",
            standard,
            swapped
        );
    }

    #[test]
    fn empty_chain_is_identity() {
        let counts = Interferometer::from_elements(vec![]).detect(3.0);
        assert_eq!(counts, DetectionCounts { port0: 3.0, port1: 0.0 });
    }

    #[test]
    fn rejects_non_finite_phase() {
        assert_eq!(
            compute(f64::INFINITY, 1.0),
            Err(InterferometerError::NonFinitePhase(f64::INFINITY))
        );
        assert!(matches!(
            compute(f64::NAN, 1.0),
            Err(InterferometerError::NonFinitePhase(p)) if p.is_nan()
        ));
    }

    #[test]
    fn rejects_bad_photon_counts() {
        for bad in [0.0, -1.0, f64::NEG_INFINITY, f64::INFINITY] {
            assert_eq!(
                compute(1.0, bad),
                Err(InterferometerError::InvalidPhotonCount(bad))
            );
        }
        assert!(compute(1.0, f64::NAN).is_err());
    }

    #[test]
    fn fractional_photon_counts_are_scaling_factors() {
        let counts = compute(PI / 2.0, 0.5).unwrap();
        assert!((counts.port0 - 0.25).abs() < 1e-12);
        assert!((counts.port1 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn conservation_check_flags_drift() {
        let good = DetectionCounts { port0: 4.0, port1: 6.0 };
        assert!(check_conservation(&good, 10.0).is_ok());

        let bad = DetectionCounts { port0: 4.0, port1: 6.1 };
        match check_conservation(&bad, 10.0) {
            Err(InterferometerError::NumericDrift { expected, actual }) => {
                assert_eq!(expected, 10.0);
                assert!((actual - 10.1).abs() < 1e-12);
            }
            other => panic!("expected drift, got {:?}", other),
        }
    }

    #[test]
    fn drift_tolerance_scales_with_small_counts() {
        // 1e-6 relative drift on a count of 1e-3
        let drifted = DetectionCounts { port0: 4e-4, port1: 6e-4 + 1e-9 };
        assert!(matches!(
            check_conservation(&drifted, 1e-3),
            Err(InterferometerError::NumericDrift { .. })
        ));

        let counts = compute(1.1, 1e-3).unwrap();
        assert!(check_conservation(&counts, 1e-3).is_ok());
    }

    #[test]
    fn counts_convert_to_tuple() {
        let (a, b): (f64, f64) = DetectionCounts { port0: 1.5, port1: 2.5 }.into();
        assert_eq!((a, b), (1.5, 2.5));
    }
}

// ─── Kani formal verification harnesses ─────────────────────────────────────
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove input validation never panics for any pair of f64 values.
    #[kani::proof]
    fn validate_inputs_no_panic() {
        let phase: f64 = kani::any();
        let count: f64 = kani::any();
        let _ = validate_inputs(phase, count);
    }

    /// Prove accepted inputs are finite with a positive count.
    #[kani::proof]
    fn accepted_inputs_are_well_formed() {
        let phase: f64 = kani::any();
        let count: f64 = kani::any();
        if validate_inputs(phase, count).is_ok() {
            assert!(phase.is_finite());
            assert!(count.is_finite() && count > 0.0);
        }
    }
}
