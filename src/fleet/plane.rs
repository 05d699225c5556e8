use super::common::Vec2D;
use crate::collaborators::renderer::IconId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

/// A mobile entity bound to a home airport.
///
/// The availability flag is only ever flipped through the
/// [`FleetRegistry`](super::registry::FleetRegistry): set on allocation,
/// cleared on release. The position is mutated exclusively by the movement
/// simulator while the plane is in flight.
#[derive(Debug)]
pub struct Plane {
    /// Unique id, assigned at creation (1-based).
    id: u32,
    /// Id of the owning airport. Planes never change their home airport.
    home: u32,
    /// Current continuous position on the grid.
    pos: Mutex<Vec2D<f64>>,
    /// True for the whole interval between allocation and release.
    in_flight: AtomicBool,
    /// Handle to the renderer-owned on-screen icon, set once at setup.
    icon: OnceLock<IconId>,
}

impl Plane {
    pub fn new(id: u32, home: u32, pos: Vec2D<f64>) -> Self {
        Self {
            id,
            home,
            pos: Mutex::new(pos),
            in_flight: AtomicBool::new(false),
            icon: OnceLock::new(),
        }
    }

    pub const fn id(&self) -> u32 { self.id }

    pub const fn home(&self) -> u32 { self.home }

    pub fn is_available(&self) -> bool { !self.in_flight.load(Ordering::SeqCst) }

    /// Returns a copy of the current position.
    pub fn position(&self) -> Vec2D<f64> {
        *self.pos.lock().expect("[FATAL] Mutex poisoned: Failed to acquire lock")
    }

    /// Overwrites the current position. Only the movement simulator calls
    /// this, and only while the plane is allocated to it.
    pub(crate) fn set_position(&self, pos: Vec2D<f64>) {
        *self.pos.lock().expect("[FATAL] Mutex poisoned: Failed to acquire lock") = pos;
    }

    /// Attaches the on-screen icon handle. Later calls are ignored.
    pub fn set_icon(&self, icon: IconId) { let _ = self.icon.set(icon); }

    pub fn icon(&self) -> Option<IconId> { self.icon.get().copied() }

    pub(super) fn mark_in_flight(&self) { self.in_flight.store(true, Ordering::SeqCst); }

    pub(super) fn clear_in_flight(&self) { self.in_flight.store(false, Ordering::SeqCst); }
}
