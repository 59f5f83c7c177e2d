//! # interference-sim
//!
//! Drivers around the `mach_zehnder` model: ordered phase sweeps
//! (parallel with the default `parallel` feature), a parameter-controls
//! panel that re-evaluates and notifies listeners on every change, and a
//! background worker that serves both over channels.
//!
//! ## Usage
//!
//! ```
//! use interference_sim::prelude::*;
//!
//! let result = run_sweep(&SweepConfig::default()).unwrap();
//! assert_eq!(result.len(), 100);
//! ```

pub mod controls;
pub mod error;
pub mod sweep;
pub mod worker;

pub use error::SimError;

pub mod prelude {
    pub use crate::controls::*;
    pub use crate::error::SimError;
    pub use crate::sweep::*;
    pub use crate::worker::*;
}
