use crate::event;
use crate::fleet::{FleetRegistry, common::Vec2D};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

/// Handle to an icon owned by the external renderer.
pub type IconId = usize;

/// Immutable drawing instruction posted to the renderer.
///
/// The boundary is fire-and-forget: the core never waits for the renderer
/// and assumes nothing beyond last-write-wins per icon.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    CreateIcon {
        id: IconId,
        pos: Vec2D<f64>,
        rotation: f64,
        scale: f64,
        image: String,
        caption: String,
    },
    MoveIcon {
        id: IconId,
        pos: Vec2D<f64>,
    },
}

/// Sending side of the renderer boundary.
///
/// All updates end up on the single consumer owned by the renderer; the core
/// never draws directly. Send failures (renderer gone) are ignored.
#[derive(Debug, Clone)]
pub struct RenderHandle {
    tx: UnboundedSender<RenderCommand>,
    next_id: Arc<AtomicUsize>,
}

impl RenderHandle {
    pub fn channel() -> (Self, UnboundedReceiver<RenderCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                next_id: Arc::new(AtomicUsize::new(0)),
            },
            rx,
        )
    }

    /// Registers a new icon and returns its handle.
    pub fn create_icon(
        &self,
        pos: Vec2D<f64>,
        rotation: f64,
        scale: f64,
        image: &str,
        caption: String,
    ) -> IconId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let _ = self.tx.send(RenderCommand::CreateIcon {
            id,
            pos,
            rotation,
            scale,
            image: image.to_string(),
            caption,
        });
        id
    }

    /// Publishes a new icon position, fire-and-forget.
    pub fn move_icon(&self, id: Option<IconId>, pos: Vec2D<f64>) {
        if let Some(id) = id {
            let _ = self.tx.send(RenderCommand::MoveIcon { id, pos });
        }
    }
}

/// Creates the initial icons for every airport and plane in the roster.
/// Planes start parked at their home airport, rotated 45 degrees.
pub fn create_fleet_icons(registry: &FleetRegistry, render: &RenderHandle) {
    for airport in registry.airports() {
        render.create_icon(
            airport.pos().cast(),
            0.0,
            1.0,
            "airport.png",
            format!("Airport {}", airport.id()),
        );
    }
    for plane in registry.planes() {
        let icon = render.create_icon(
            plane.position(),
            45.0,
            1.0,
            "plane.png",
            format!("Plane {}", plane.id()),
        );
        plane.set_icon(icon);
    }
}

/// Drains render commands without a graphical surface attached.
///
/// Stands in for the real renderer process in headless runs; commands are
/// only surfaced through the event log.
pub async fn run_headless_sink(mut rx: UnboundedReceiver<RenderCommand>, token: CancellationToken) {
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            cmd = rx.recv() => match cmd {
                Some(RenderCommand::CreateIcon { id, pos, caption, .. }) => {
                    event!("Renderer: icon {id} '{caption}' created at {pos}");
                }
                Some(RenderCommand::MoveIcon { id, pos }) => {
                    event!("Renderer: icon {id} moved to {pos}");
                }
                None => break,
            },
        }
    }
}
