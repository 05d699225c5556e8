use super::airport::Airport;
use super::common::Vec2D;
use super::plane::Plane;
use crate::config::SimConfig;
use rand::Rng;
use std::sync::{Arc, Mutex, MutexGuard};

/// Canonical roster of airports and planes plus the allocation mutex.
///
/// The plane list is guarded by a single exclusive lock shared by all
/// dispatchers. The lock is held only for the scan-and-mark in
/// [`find_available_plane`](Self::find_available_plane), never across I/O or
/// sleeps, so a flight's duration never serializes the rest of the fleet.
/// The raw collection is not exposed for ad-hoc iteration.
#[derive(Debug)]
pub struct FleetRegistry {
    /// Immutable after construction.
    airports: Vec<Airport>,
    /// The allocation lock and the roster it guards.
    planes: Mutex<Vec<Arc<Plane>>>,
}

impl FleetRegistry {
    pub fn new(airports: Vec<Airport>, planes: Vec<Arc<Plane>>) -> Self {
        Self {
            airports,
            planes: Mutex::new(planes),
        }
    }

    /// Creates the roster for a fresh run: `num_airports` airports on random
    /// grid cells, `planes_per_airport` planes parked at each. Ids are
    /// 1-based; plane ids are contiguous across airports.
    pub fn populate(cfg: &SimConfig) -> Self {
        let mut rng = rand::rng();
        let mut airports = Vec::with_capacity(cfg.num_airports);
        let mut planes = Vec::with_capacity(cfg.fleet_size());

        for i in 0..cfg.num_airports {
            let pos = Vec2D::new(
                rng.random_range(0..cfg.grid_width),
                rng.random_range(0..cfg.grid_height),
            );
            let airport = Airport::new(i as u32 + 1, pos);

            for j in 0..cfg.planes_per_airport {
                let plane_id = (i * cfg.planes_per_airport + j + 1) as u32;
                planes.push(Arc::new(Plane::new(plane_id, airport.id(), pos.cast())));
            }
            airports.push(airport);
        }
        Self::new(airports, planes)
    }

    fn lock_planes(&self) -> MutexGuard<Vec<Arc<Plane>>> {
        self.planes.lock().expect("[FATAL] Mutex poisoned: Failed to acquire lock")
    }

    /// Scans the planes homed at `origin` under the allocation lock and
    /// atomically marks the first idle one as in flight.
    ///
    /// This is the only place plane allocation happens, which guarantees
    /// at-most-one concurrent allocation of a given plane. Returns `None`
    /// without side effects when every plane at the airport is busy.
    pub fn find_available_plane(&self, origin: u32) -> Option<Arc<Plane>> {
        let planes = self.lock_planes();
        for plane in planes.iter() {
            if plane.home() == origin && plane.is_available() {
                plane.mark_in_flight();
                return Some(Arc::clone(plane));
            }
        }
        None
    }

    /// Clears the in-flight flag, making the plane eligible for future
    /// allocation scans. When this runs is decided by the configured
    /// [`ReleasePolicy`](crate::config::ReleasePolicy).
    pub fn release(&self, plane: &Plane) { plane.clear_in_flight(); }

    /// Resolves an airport id by linear scan.
    pub fn find_airport(&self, id: u32) -> Option<Airport> {
        self.airports.iter().find(|a| a.id() == id).copied()
    }

    pub fn airports(&self) -> &[Airport] { &self.airports }

    /// Snapshot of the roster handles, used for icon setup and tests. Flag
    /// and position discipline still go through the registry operations.
    pub fn planes(&self) -> Vec<Arc<Plane>> { self.lock_planes().clone() }
}
