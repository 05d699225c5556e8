use super::common::Vec2D;

/// A fixed-location node on the simulation grid.
///
/// Airports are created once at setup and never change or disappear during a
/// run. Each owns the planes homed at it and is a possible flight destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    /// Unique id, assigned at creation (1-based).
    id: u32,
    /// Grid cell of the airport.
    pos: Vec2D<i32>,
}

impl Airport {
    pub const fn new(id: u32, pos: Vec2D<i32>) -> Self { Self { id, pos } }

    pub const fn id(&self) -> u32 { self.id }

    pub const fn pos(&self) -> Vec2D<i32> { self.pos }
}
