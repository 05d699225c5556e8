mod airport;
mod plane;
mod registry;
mod stats;
pub(crate) mod common;
#[cfg(test)]
mod tests;

pub use airport::Airport;
pub use plane::Plane;
pub use registry::FleetRegistry;
pub use stats::{SimStats, StatsSnapshot};
