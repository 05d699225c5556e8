use super::RunContext;
use super::movement::MovementSim;
use super::requests::FlightRequest;
use crate::event;
use crate::keychain::Keychain;
use std::sync::Arc;
use tokio::time::sleep;

/// Looping worker that converts queued flight requests into allocated
/// flights.
pub struct FlightDispatcher;

impl FlightDispatcher {
    /// Runs until cancelled: drains up to the configured batch size from the
    /// flight-request queue (non-blocking), fans each request out to its own
    /// tracked task and sleeps the dispatch interval between drains.
    ///
    /// The batching amortizes wake-ups and groups the report stream; requests
    /// within one batch run concurrently with no ordering guarantee.
    pub async fn run(keys: Arc<Keychain>, ctx: RunContext) {
        let rx_lock = keys.flight_queue_rx();
        let mut rx = rx_lock.lock().await;

        loop {
            let mut batch = Vec::with_capacity(keys.cfg().batch_size);
            while batch.len() < keys.cfg().batch_size {
                match rx.try_recv() {
                    Ok(request) => batch.push(request),
                    Err(_) => break,
                }
            }

            if !batch.is_empty() {
                let size = batch.len();
                for request in batch {
                    Self::spawn_flight(Arc::clone(&keys), &ctx, request);
                }
                keys.status().report(format!("Executed a batch of {size} flight requests."));
            }

            tokio::select! {
                () = ctx.token.cancelled() => break,
                () = sleep(keys.cfg().dispatch_interval) => {}
            }
        }
    }

    /// Fans one request out to its own task: resolve the destination, try to
    /// allocate a plane at the origin, then fly.
    ///
    /// Both failure modes drop the request silently: excess demand and
    /// unresolvable destinations are simply lost, there is no retry and no
    /// backpressure signal to the producer.
    fn spawn_flight(keys: Arc<Keychain>, ctx: &RunContext, request: FlightRequest) {
        let token = ctx.token.clone();
        let slots = Arc::clone(&ctx.flight_slots);
        ctx.tracker.spawn(async move {
            let _permit = tokio::select! {
                () = token.cancelled() => return,
                permit = slots.acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => return,
                },
            };

            let Some(destination) = keys.registry().find_airport(request.destination_id) else {
                event!(
                    "Dropping request from airport {}: unknown destination {}",
                    request.origin.id(),
                    request.destination_id
                );
                return;
            };
            let Some(plane) = keys.registry().find_available_plane(request.origin.id()) else {
                event!("No plane available at airport {}, request dropped", request.origin.id());
                return;
            };

            keys.status().report(format!(
                "Plane {} is flying from {} to {}",
                plane.id(),
                request.origin.id(),
                destination.id()
            ));
            MovementSim::fly(&keys, &plane, destination, &token).await;
        });
    }
}
