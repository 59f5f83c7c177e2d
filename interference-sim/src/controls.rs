//! Parameter controls with change notification.
//!
//! A `Controls` panel owns the current phase and photon count. Every
//! accepted change snaps the value onto its slider grid, re-evaluates the
//! interferometer and hands the new `Reading` to each registered listener
//! in registration order. Rendering is the listener's business.

use log::debug;
use serde::Serialize;
use std::f64::consts::TAU;

use mach_zehnder::{compute, InterferometerError};

use crate::error::{Result, SimError};

/// One evaluation of the interferometer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub phase: f64,
    pub photon_count: f64,
    pub port0: f64,
    pub port1: f64,
}

impl Reading {
    /// Evaluate at the given settings.
    pub fn evaluate(phase: f64, photon_count: f64) -> Result<Self> {
        let counts = compute(phase, photon_count)?;
        Ok(Self {
            phase,
            photon_count,
            port0: counts.port0,
            port1: counts.port1,
        })
    }
}

/// Slider limits for the two parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlRanges {
    pub phase_min: f64,
    pub phase_max: f64,
    pub phase_step: f64,
    pub photons_min: u32,
    pub photons_max: u32,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            phase_min: 0.0,
            phase_max: TAU,
            phase_step: 0.1,
            photons_min: 1,
            photons_max: 100,
        }
    }
}

impl ControlRanges {
    /// Reject ranges the sliders cannot represent.
    pub fn validate(&self) -> Result<()> {
        if !self.phase_min.is_finite() || !self.phase_max.is_finite() {
            return Err(SimError::InvalidControls(format!(
                "phase bounds must be finite, got [{}, {}]",
                self.phase_min, self.phase_max
            )));
        }
        if self.phase_min > self.phase_max {
            return Err(SimError::InvalidControls(format!(
                "phase range [{}, {}] is inverted",
                self.phase_min, self.phase_max
            )));
        }
        if !self.phase_step.is_finite() || self.phase_step <= 0.0 {
            return Err(SimError::InvalidControls(format!(
                "phase step must be positive, got {}",
                self.phase_step
            )));
        }
        if self.photons_min == 0 || self.photons_min > self.photons_max {
            return Err(SimError::InvalidControls(format!(
                "photon range {}..={} must be non-empty and start at 1 or more",
                self.photons_min, self.photons_max
            )));
        }
        Ok(())
    }

    /// Snap to the nearest step from `phase_min`, then clamp into range.
    pub fn snap_phase(&self, phase: f64) -> f64 {
        let steps = ((phase - self.phase_min) / self.phase_step).round();
        (self.phase_min + steps * self.phase_step)
            .max(self.phase_min)
            .min(self.phase_max)
    }

    pub fn clamp_photons(&self, photons: u32) -> u32 {
        photons.max(self.photons_min).min(self.photons_max)
    }
}

/// Handle returned by [`Controls::on_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&Reading) + Send>;

/// Phase and photon-count controls driving the interferometer.
pub struct Controls {
    ranges: ControlRanges,
    phase: f64,
    photons: u32,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: usize,
}

impl Controls {
    pub fn new(ranges: ControlRanges) -> Result<Self> {
        ranges.validate()?;
        let phase = ranges.phase_min;
        let photons = ranges.photons_min;
        Ok(Self {
            ranges,
            phase,
            photons,
            listeners: Vec::new(),
            next_id: 0,
        })
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn photon_count(&self) -> u32 {
        self.photons
    }

    pub fn ranges(&self) -> &ControlRanges {
        &self.ranges
    }

    /// Register a listener called with every new reading.
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Reading) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Reading at the current settings, without notifying anyone.
    pub fn reading(&self) -> Result<Reading> {
        Reading::evaluate(self.phase, self.photons as f64)
    }

    /// Move the phase slider. Rejected values leave the controls untouched.
    pub fn set_phase(&mut self, phase: f64) -> Result<Reading> {
        self.apply(phase, self.photons)
    }

    /// Move the photon-count slider.
    pub fn set_photon_count(&mut self, photons: u32) -> Result<Reading> {
        let phase = self.phase;
        self.apply(phase, photons)
    }

    /// Move both sliders, notifying once.
    pub fn set(&mut self, phase: f64, photons: u32) -> Result<Reading> {
        self.apply(phase, photons)
    }

    fn apply(&mut self, phase: f64, photons: u32) -> Result<Reading> {
        if !phase.is_finite() {
            return Err(InterferometerError::NonFinitePhase(phase).into());
        }
        let phase = self.ranges.snap_phase(phase);
        let photons = self.ranges.clamp_photons(photons);
        let reading = Reading::evaluate(phase, photons as f64)?;

        self.phase = phase;
        self.photons = photons;
        debug!(
            "controls changed: phase {:.2}, photons {} → notifying {} listener(s)",
            reading.phase,
            photons,
            self.listeners.len()
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&reading);
        }
        Ok(reading)
    }
}

impl Default for Controls {
    fn default() -> Self {
        let ranges = ControlRanges::default();
        Self {
            phase: ranges.phase_min,
            photons: ranges.photons_min,
            ranges,
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}
