//! Phase sweep driver.
//!
//! Evaluates the interferometer over an evenly spaced grid of phases.
//! Each evaluation is independent, so with the `parallel` feature the
//! grid is mapped with rayon; results always come back in grid order.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::f64::consts::TAU;

use mach_zehnder::{compute, DetectionCounts};

use crate::error::{Result, SimError};

/// Configuration for a phase sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// First phase (radians).
    pub start: f64,
    /// Last phase (radians), included in the grid.
    pub end: f64,
    /// Number of grid points.
    pub samples: usize,
    /// Photon count used to scale every reading.
    pub photon_count: f64,
}

impl SweepConfig {
    /// One full turn [0, 2π] with the given resolution and photon count.
    pub fn full_turn(samples: usize, photon_count: f64) -> Self {
        Self {
            start: 0.0,
            end: TAU,
            samples,
            photon_count,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(SimError::InvalidSweep("samples must be at least 1".into()));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(SimError::InvalidSweep(format!(
                "bounds must be finite, got [{}, {}]",
                self.start, self.end
            )));
        }
        if !(self.end - self.start).is_finite() {
            return Err(SimError::InvalidSweep(format!(
                "span of [{}, {}] overflows",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::full_turn(100, 10.0)
    }
}

/// Ordered sweep output: `port0[i]` and `port1[i]` belong to `phases[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub photon_count: f64,
    pub phases: Vec<f64>,
    pub port0: Vec<f64>,
    pub port1: Vec<f64>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Rows of (phase, port0, port1) in sweep order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.phases
            .iter()
            .zip(self.port0.iter().zip(self.port1.iter()))
            .map(|(&phase, (&p0, &p1))| (phase, p0, p1))
    }

    /// Fringe visibility of both ports.
    pub fn visibility(&self) -> (f64, f64) {
        (fringe_visibility(&self.port0), fringe_visibility(&self.port1))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `n` evenly spaced points from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Fringe visibility (max - min) / (max + min). Zero for an empty or dark signal.
pub fn fringe_visibility(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    if values.is_empty() || max + min <= 0.0 {
        return 0.0;
    }
    (max - min) / (max + min)
}

/// Evaluate every phase in order, one thread.
pub fn evaluate_sequential(phases: &[f64], photon_count: f64) -> Result<Vec<DetectionCounts>> {
    Ok(phases
        .iter()
        .map(|&phase| compute(phase, photon_count))
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Evaluate every phase across the rayon pool, keeping grid order.
#[cfg(feature = "parallel")]
pub fn evaluate(phases: &[f64], photon_count: f64) -> Result<Vec<DetectionCounts>> {
    Ok(phases
        .par_iter()
        .map(|&phase| compute(phase, photon_count))
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

#[cfg(not(feature = "parallel"))]
pub fn evaluate(phases: &[f64], photon_count: f64) -> Result<Vec<DetectionCounts>> {
    evaluate_sequential(phases, photon_count)
}

/// Run a full sweep.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResult> {
    config.validate()?;

    let phases = linspace(config.start, config.end, config.samples);
    let counts = evaluate(&phases, config.photon_count)?;
    debug!(
        "swept {} phases over [{:.4}, {:.4}] with {} photons",
        phases.len(),
        config.start,
        config.end,
        config.photon_count
    );

    let (port0, port1): (Vec<f64>, Vec<f64>) = counts.iter().map(|c| (c.port0, c.port1)).unzip();
    Ok(SweepResult {
        photon_count: config.photon_count,
        phases,
        port0,
        port1,
    })
}
