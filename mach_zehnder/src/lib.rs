//! # mach_zehnder
//!
//! Photon detection model for a Mach-Zehnder interferometer built from
//! 2x2 complex operators.
//!
//! A photon enters in mode 0, passes a 50/50 beam splitter, a phase
//! shifter on mode 0, a mirror that swaps the arms, and a second beam
//! splitter. The detection probabilities at the two output ports follow
//! `cos²(φ/2)` and `sin²(φ/2)`.
//!
//! ```text
//!            ┌──── P(φ) ────┐
//!  |1,0⟩ ── BS              M ── BS ──▶ port 0 / port 1
//!            └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use mach_zehnder::prelude::*;
//!
//! let counts = compute(std::f64::consts::PI, 10.0).unwrap();
//! assert!(counts.port0 < 1e-9);
//! assert!((counts.port1 - 10.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod interferometer;
pub mod matrix;
pub mod optics;
pub mod state;

pub use error::InterferometerError;
pub use interferometer::{compute, DetectionCounts, Interferometer};
pub use optics::OpticalElement;
pub use state::ModeState;

pub mod prelude {
    pub use crate::error::InterferometerError;
    pub use crate::interferometer::*;
    pub use crate::matrix::*;
    pub use crate::optics::*;
    pub use crate::state::*;
}
