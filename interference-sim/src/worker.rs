//! Background simulation worker thread.
//!
//! Runs sweeps off the caller's thread so an interactive front end never
//! blocks. Requests and responses travel over unbounded channels; the
//! worker exits once every request sender is dropped.

use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};
use std::thread;

use crate::controls::Reading;
use crate::error::{Result, SimError};
use crate::sweep::{run_sweep, SweepConfig, SweepResult};

/// Request sent to the worker.
#[derive(Debug, Clone)]
pub enum SimRequest {
    /// Evaluate a single phase setting.
    Evaluate { phase: f64, photon_count: f64 },
    /// Run a full phase sweep.
    Sweep { config: SweepConfig },
}

/// Response sent back by the worker, one per request, in request order.
#[derive(Debug, Clone)]
pub enum SimResponse {
    Reading(Reading),
    Sweep(SweepResult),
    /// The request was rejected; carries the error message.
    Failed(String),
}

/// Handle to communicate with the background worker.
pub struct SimWorker {
    pub tx: Sender<SimRequest>,
    pub rx: Receiver<SimResponse>,
}

impl SimWorker {
    /// Spawn the background worker thread.
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = crossbeam_channel::unbounded::<SimRequest>();
        let (resp_tx, resp_rx) = crossbeam_channel::unbounded::<SimResponse>();

        thread::spawn(move || {
            info!("simulation worker started");
            while let Ok(req) = req_rx.recv() {
                let response = match req {
                    SimRequest::Evaluate {
                        phase,
                        photon_count,
                    } => Reading::evaluate(phase, photon_count).map(SimResponse::Reading),
                    SimRequest::Sweep { config } => run_sweep(&config).map(SimResponse::Sweep),
                };
                let response = response.unwrap_or_else(|e| {
                    warn!("request rejected: {}", e);
                    SimResponse::Failed(e.to_string())
                });
                if resp_tx.send(response).is_err() {
                    break;
                }
            }
            info!("simulation worker stopped");
        });

        SimWorker {
            tx: req_tx,
            rx: resp_rx,
        }
    }

    /// Send a request (non-blocking).
    pub fn send(&self, req: SimRequest) -> Result<()> {
        self.tx.send(req).map_err(|_| SimError::WorkerDisconnected)
    }

    /// Try to receive a response (non-blocking).
    pub fn try_recv(&self) -> Option<SimResponse> {
        self.rx.try_recv().ok()
    }

    /// Block until the next response arrives.
    pub fn recv(&self) -> Result<SimResponse> {
        self.rx.recv().map_err(|_| SimError::WorkerDisconnected)
    }
}
