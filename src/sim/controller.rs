use super::RunContext;
use super::flight_dispatcher::FlightDispatcher;
use super::ingestion::RequestIngestion;
use super::service_dispatcher::ServiceDispatcher;
use crate::keychain::Keychain;
use crate::{info, warn};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::{interval, timeout};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Owns the worker pool and drives the STOPPED -> RUNNING -> STOPPED
/// lifecycle. Re-entrant: a stopped simulation can be started again; the
/// request queues survive across cycles.
pub struct SimController {
    keys: Arc<Keychain>,
    run: tokio::sync::Mutex<Option<RunHandles>>,
}

/// Live handles of one cycle, dropped on stop.
struct RunHandles {
    token: CancellationToken,
    tracker: TaskTracker,
    workers: JoinSet<()>,
}

impl SimController {
    pub fn new(keys: Arc<Keychain>) -> Self {
        Self {
            keys,
            run: tokio::sync::Mutex::new(None),
        }
    }

    pub async fn is_running(&self) -> bool { self.run.lock().await.is_some() }

    /// Spins up the worker pool: one flight dispatcher, one service
    /// dispatcher, one ingestion worker per airport and the periodic reaper.
    /// No-op while already running.
    pub async fn start(&self) {
        let mut run = self.run.lock().await;
        if run.is_some() {
            info!("Simulation already running");
            return;
        }

        let ctx = RunContext::new(self.keys.cfg().fleet_size());
        let mut workers = JoinSet::new();

        workers.spawn(FlightDispatcher::run(Arc::clone(&self.keys), ctx.clone()));
        workers.spawn(ServiceDispatcher::run(Arc::clone(&self.keys), ctx.token.clone()));
        let airports: Vec<_> = self.keys.registry().airports().to_vec();
        for airport in &airports {
            workers.spawn(RequestIngestion::run(
                Arc::clone(&self.keys),
                *airport,
                ctx.token.clone(),
            ));
        }
        workers.spawn(Self::run_reaper(Arc::clone(&self.keys), ctx.token.clone()));

        info!("Simulation started: {} ingestion workers, 2 dispatchers", airports.len());
        *run = Some(RunHandles {
            token: ctx.token,
            tracker: ctx.tracker,
            workers,
        });
    }

    /// Stops the run with a two-phase shutdown: cancel the token and wait a
    /// bounded interval for the pool to drain; if that expires, forcefully
    /// abort the workers and wait once more. A pool still outstanding after
    /// both attempts is reported, not escalated. No-op while stopped.
    ///
    /// Workers do not roll back partially completed allocations: a flight
    /// interrupted mid-air keeps its plane marked in-flight.
    pub async fn stop(&self) {
        let mut run = self.run.lock().await;
        let Some(RunHandles {
            token,
            tracker,
            mut workers,
        }) = run.take()
        else {
            info!("Simulation already stopped");
            return;
        };

        token.cancel();
        tracker.close();
        let wait = self.keys.cfg().shutdown_wait;

        let first = timeout(wait, async {
            while workers.join_next().await.is_some() {}
            tracker.wait().await;
        })
        .await;

        if first.is_err() {
            warn!("Worker pool did not terminate, aborting outstanding tasks");
            workers.abort_all();
            let second = timeout(wait, async {
                while workers.join_next().await.is_some() {}
                tracker.wait().await;
            })
            .await;
            if second.is_err() {
                warn!("Worker pool failed to terminate");
            }
        }

        self.keys.push_stats();
        info!("Simulation stopped");
    }

    /// Periodic poll of the running state: publishes a counter snapshot every
    /// interval and tears itself down once the run is cancelled.
    async fn run_reaper(keys: Arc<Keychain>, token: CancellationToken) {
        let mut ticker = interval(keys.cfg().reaper_interval);
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                _ = ticker.tick() => keys.push_stats(),
            }
        }
    }
}
