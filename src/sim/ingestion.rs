use super::requests::FlightRequest;
use crate::fleet::Airport;
use crate::keychain::Keychain;
use crate::{event, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Long-lived per-airport worker feeding the flight-request queue.
pub struct RequestIngestion;

impl RequestIngestion {
    /// Opens the destination-generator collaborator for this airport and
    /// enqueues one flight request per received destination id.
    ///
    /// Exits when the run is cancelled, the collaborator closes its stream,
    /// or its I/O fails. Failures are reported once; there is no reconnect.
    pub async fn run(keys: Arc<Keychain>, airport: Airport, token: CancellationToken) {
        let airport_count = keys.registry().airports().len();
        let airport_index = (airport.id() - 1) as usize;

        let mut stream = match keys.generator().open(airport_count, airport_index).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Destination generator for airport {} failed to start: {e}", airport.id());
                keys.status().report(format!("Error running flight request generator: {e}"));
                return;
            }
        };

        loop {
            let next = tokio::select! {
                () = token.cancelled() => break,
                next = stream.next_line() => next,
            };
            match next {
                Ok(Some(line)) => {
                    let Ok(destination_id) = line.trim().parse::<u32>() else {
                        warn!("Airport {}: ignoring malformed destination id {line:?}", airport.id());
                        continue;
                    };
                    keys.status().report(format!(
                        "Flight request from Airport {} to Airport {destination_id}",
                        airport.id()
                    ));
                    let request = FlightRequest {
                        origin: airport,
                        destination_id,
                    };
                    if keys.flight_queue().send(request).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    event!("Destination stream for airport {} ended", airport.id());
                    break;
                }
                Err(e) => {
                    warn!("Destination stream for airport {} failed: {e}", airport.id());
                    keys.status().report(format!("Error running flight request generator: {e}"));
                    break;
                }
            }
        }
    }
}
