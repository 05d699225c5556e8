#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod collaborators;
mod config;
mod fleet;
mod keychain;
mod logger;
mod sim;

use crate::collaborators::renderer::{self, create_fleet_icons};
use crate::collaborators::{ProcessDestinationGenerator, ProcessPlaneServicer, StatusFeed};
use crate::config::SimConfig;
use crate::fleet::FleetRegistry;
use crate::keychain::Keychain;
use crate::sim::SimController;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let cfg = SimConfig::from_env();
    let registry = Arc::new(FleetRegistry::populate(&cfg));
    info!(
        "Placed {} airports with {} planes each on a {}x{} grid",
        cfg.num_airports, cfg.planes_per_airport, cfg.grid_width, cfg.grid_height
    );

    let generator = Arc::new(ProcessDestinationGenerator::new(cfg.generator_cmd.clone()));
    let servicer = Arc::new(ProcessPlaneServicer::new(cfg.servicer_cmd.clone()));
    let (keys, render_rx, status_feed) = Keychain::new(cfg, registry, generator, servicer);
    let keys = Arc::new(keys);

    create_fleet_icons(&keys.registry(), keys.render());

    // Headless stand-ins for the renderer and status display collaborators.
    let observers = CancellationToken::new();
    tokio::spawn(renderer::run_headless_sink(render_rx, observers.clone()));
    tokio::spawn(run_status_display(status_feed, observers.clone()));

    let controller = SimController::new(Arc::clone(&keys));
    controller.start().await;
    info!("Press Ctrl-C to stop the simulation");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {e}");
    }
    controller.stop().await;
    observers.cancel();
    info!("Final counters: {}", keys.stats().snapshot());
}

/// Stand-in for the external status display: surfaces progress messages and
/// the latest counter snapshot through the log.
async fn run_status_display(feed: StatusFeed, token: CancellationToken) {
    let StatusFeed {
        mut stats_rx,
        mut msg_rx,
    } = feed;

    let msg_token = token.clone();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                () = msg_token.cancelled() => break,
                msg = msg_rx.recv() => match msg {
                    Some(msg) => log!("{msg}"),
                    None => break,
                },
            }
        }
    });

    loop {
        tokio::select! {
            () = token.cancelled() => break,
            changed = stats_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *stats_rx.borrow_and_update();
                info!("{snapshot}");
            }
        }
    }
}
