//! The worker layer of the simulation: the dispatcher loops, the movement
//! and service steps they fan out to, per-airport request ingestion and the
//! lifecycle controller that starts and stops all of it.

mod controller;
mod flight_dispatcher;
mod ingestion;
mod movement;
mod service;
mod service_dispatcher;
pub(crate) mod requests;

pub use controller::SimController;
pub use flight_dispatcher::FlightDispatcher;
pub use ingestion::RequestIngestion;
pub use movement::MovementSim;
pub use service::ServicePipeline;
pub use service_dispatcher::ServiceDispatcher;

use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Shared cancellation and task-tracking state of one start/stop cycle.
///
/// A fresh context is created per [`SimController::start`]; every loop and
/// every dynamically spawned flight task observes the same token.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub token: CancellationToken,
    /// Tracks the short-lived per-flight tasks so shutdown can wait on them.
    pub tracker: TaskTracker,
    /// Bounds concurrent flight tasks to the fleet size; submission stays
    /// fire-and-forget for the dispatcher.
    pub flight_slots: Arc<Semaphore>,
}

impl RunContext {
    pub fn new(fleet_size: usize) -> Self {
        Self {
            token: CancellationToken::new(),
            tracker: TaskTracker::new(),
            flight_slots: Arc::new(Semaphore::new(fleet_size)),
        }
    }
}
