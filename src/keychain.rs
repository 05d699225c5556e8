use crate::collaborators::{
    DestinationGenerator, PlaneServicer, RenderCommand, RenderHandle, StatusFeed, StatusSink,
};
use crate::config::SimConfig;
use crate::fleet::{FleetRegistry, SimStats};
use crate::sim::requests::{FlightRequest, ServiceRequest};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Struct representing the key components of the simulation, providing access
/// to the entity registry, the statistics aggregator, the request queues and
/// the collaborator boundaries.
///
/// Every worker loop holds one `Arc<Keychain>`; queue receivers are parked
/// behind locks so the dispatchers can re-acquire them across start/stop
/// cycles.
#[derive(Clone)]
pub struct Keychain {
    /// Runtime configuration of this simulation instance.
    cfg: SimConfig,
    /// The canonical airport/plane roster and allocation lock.
    registry: Arc<FleetRegistry>,
    /// The concurrently updated simulation counters.
    stats: Arc<SimStats>,
    /// Producer side of the flight-request queue.
    flight_tx: UnboundedSender<FlightRequest>,
    /// Consumer side of the flight-request queue, parked between runs.
    flight_rx: Arc<Mutex<UnboundedReceiver<FlightRequest>>>,
    /// Producer side of the service-request queue.
    service_tx: UnboundedSender<ServiceRequest>,
    /// Consumer side of the service-request queue, parked between runs.
    service_rx: Arc<Mutex<UnboundedReceiver<ServiceRequest>>>,
    /// Fire-and-forget boundary to the external renderer.
    render: RenderHandle,
    /// Best-effort boundary to the external status display.
    status: StatusSink,
    /// Per-airport destination-request collaborator.
    generator: Arc<dyn DestinationGenerator>,
    /// Post-landing service collaborator.
    servicer: Arc<dyn PlaneServicer>,
}

impl Keychain {
    /// Creates a new `Keychain` plus the receiving ends of the two outward
    /// boundaries (renderer commands, status feed), which the caller hands to
    /// the external consumers.
    pub fn new(
        cfg: SimConfig,
        registry: Arc<FleetRegistry>,
        generator: Arc<dyn DestinationGenerator>,
        servicer: Arc<dyn PlaneServicer>,
    ) -> (Self, UnboundedReceiver<RenderCommand>, StatusFeed) {
        let (flight_tx, flight_rx) = mpsc::unbounded_channel();
        let (service_tx, service_rx) = mpsc::unbounded_channel();
        let (render, render_rx) = RenderHandle::channel();
        let (status, status_feed) = StatusSink::channel();
        (
            Self {
                cfg,
                registry,
                stats: Arc::new(SimStats::new()),
                flight_tx,
                flight_rx: Arc::new(Mutex::new(flight_rx)),
                service_tx,
                service_rx: Arc::new(Mutex::new(service_rx)),
                render,
                status,
                generator,
                servicer,
            },
            render_rx,
            status_feed,
        )
    }

    pub fn cfg(&self) -> &SimConfig { &self.cfg }

    /// Provides a cloned reference to the entity registry.
    pub fn registry(&self) -> Arc<FleetRegistry> { Arc::clone(&self.registry) }

    /// Provides a cloned reference to the statistics aggregator.
    pub fn stats(&self) -> Arc<SimStats> { Arc::clone(&self.stats) }

    /// Producer handle of the flight-request queue.
    pub fn flight_queue(&self) -> UnboundedSender<FlightRequest> { self.flight_tx.clone() }

    /// Consumer handle of the flight-request queue.
    pub fn flight_queue_rx(&self) -> Arc<Mutex<UnboundedReceiver<FlightRequest>>> {
        Arc::clone(&self.flight_rx)
    }

    /// Producer handle of the service-request queue.
    pub fn service_queue(&self) -> UnboundedSender<ServiceRequest> { self.service_tx.clone() }

    /// Consumer handle of the service-request queue.
    pub fn service_queue_rx(&self) -> Arc<Mutex<UnboundedReceiver<ServiceRequest>>> {
        Arc::clone(&self.service_rx)
    }

    pub fn render(&self) -> &RenderHandle { &self.render }

    pub fn status(&self) -> &StatusSink { &self.status }

    /// Provides a cloned reference to the destination generator collaborator.
    pub fn generator(&self) -> Arc<dyn DestinationGenerator> { Arc::clone(&self.generator) }

    /// Provides a cloned reference to the plane service collaborator.
    pub fn servicer(&self) -> Arc<dyn PlaneServicer> { Arc::clone(&self.servicer) }

    /// Pushes the current counter snapshot to the status observer.
    pub fn push_stats(&self) { self.status.publish_stats(self.stats.snapshot()); }
}
