use super::service::ServicePipeline;
use crate::keychain::Keychain;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Looping worker that feeds landed planes through the service pipeline.
pub struct ServiceDispatcher;

impl ServiceDispatcher {
    /// Runs until cancelled: blocks on the service-request queue and handles
    /// one request at a time, in strict FIFO order.
    ///
    /// No batching on this lower-throughput channel.
    pub async fn run(keys: Arc<Keychain>, token: CancellationToken) {
        let rx_lock = keys.service_queue_rx();
        let mut rx = rx_lock.lock().await;

        loop {
            tokio::select! {
                () = token.cancelled() => break,
                request = rx.recv() => {
                    let Some(request) = request else { break };
                    keys.status().report(format!(
                        "Servicing plane {} at Airport {}",
                        request.plane.id(),
                        request.airport.id()
                    ));
                    ServicePipeline::run(&keys, request).await;
                }
            }
        }
    }
}
