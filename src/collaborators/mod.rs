//! Seams to the external collaborators of the simulation core: the
//! destination-request generator and plane-service processes, the renderer
//! surface, and the status observer. The core only ever talks to these
//! through the traits and channel handles defined here.

pub(crate) mod generator;
pub(crate) mod renderer;
pub(crate) mod servicer;
pub(crate) mod status;

pub use generator::{DestinationGenerator, DestinationStream, ProcessDestinationGenerator};
pub use renderer::{RenderCommand, RenderHandle};
pub use servicer::{PlaneServicer, ProcessPlaneServicer};
pub use status::{StatusFeed, StatusSink};

use strum_macros::Display;

/// Failures at a collaborator boundary. Never retried: the owning task
/// reports the failure and terminates (ingestion) or marks the step failed
/// and runs its cleanup (service).
#[derive(Debug, Display)]
pub enum CollabError {
    #[strum(to_string = "failed to spawn collaborator process: {0}")]
    Spawn(std::io::Error),
    #[strum(to_string = "collaborator I/O failed: {0}")]
    Io(std::io::Error),
    #[strum(to_string = "collaborator closed its stream without output")]
    ClosedEarly,
}

impl std::error::Error for CollabError {}
