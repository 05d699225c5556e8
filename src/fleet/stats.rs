use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU32, Ordering};

/// Concurrently updated simulation counters.
///
/// Each transition performs exactly one increment and, later, exactly one
/// decrement; completed trips only ever increment. All updates are atomic and
/// readers never need a lock. No cross-counter consistency is guaranteed
/// beyond each counter's own add/subtract discipline.
#[derive(Debug, Default)]
pub struct SimStats {
    in_flight: AtomicU32,
    in_service: AtomicU32,
    completed_trips: AtomicU32,
}

impl SimStats {
    pub fn new() -> Self { Self::default() }

    pub fn inc_in_flight(&self) { self.in_flight.fetch_add(1, Ordering::SeqCst); }

    pub fn dec_in_flight(&self) { self.in_flight.fetch_sub(1, Ordering::SeqCst); }

    pub fn inc_in_service(&self) { self.in_service.fetch_add(1, Ordering::SeqCst); }

    pub fn dec_in_service(&self) { self.in_service.fetch_sub(1, Ordering::SeqCst); }

    pub fn inc_completed_trips(&self) { self.completed_trips.fetch_add(1, Ordering::SeqCst); }

    /// Lock-free snapshot of all three counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            in_flight: self.in_flight.load(Ordering::SeqCst),
            in_service: self.in_service.load(Ordering::SeqCst),
            completed_trips: self.completed_trips.load(Ordering::SeqCst),
        }
    }
}

/// Point-in-time view of the counters, pushed to the status observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub in_flight: u32,
    pub in_service: u32,
    pub completed_trips: u32,
}

impl Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In-Flight: {} | Service: {} | Completed Trips: {}",
            self.in_flight, self.in_service, self.completed_trips
        )
    }
}
