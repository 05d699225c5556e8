use crate::fleet::{Airport, Plane};
use std::sync::Arc;

/// Demand signal to move an available plane from an origin airport to a
/// destination. Produced by request ingestion, consumed by the flight
/// dispatcher, discarded after dispatch whether it succeeded or not.
///
/// The destination is carried as a raw id; resolution against the registry
/// happens at dispatch time and unresolvable ids drop the request.
#[derive(Debug, Clone, Copy)]
pub struct FlightRequest {
    pub origin: Airport,
    pub destination_id: u32,
}

/// Demand signal to run the post-landing service step for a plane at its
/// landing airport. Produced on touchdown, consumed one at a time by the
/// service dispatcher.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    pub airport: Airport,
    pub plane: Arc<Plane>,
}
