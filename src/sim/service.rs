use super::requests::ServiceRequest;
use crate::config::ReleasePolicy;
use crate::keychain::Keychain;
use crate::warn;

/// Drives the post-landing service call and its counters.
pub struct ServicePipeline;

impl ServicePipeline {
    /// Invokes the service collaborator for the request's (airport, plane)
    /// pair.
    ///
    /// The in-service counter is incremented before the call and decremented
    /// unconditionally afterwards, success or failure. Failures are reported
    /// and never retried or re-queued.
    pub async fn run(keys: &Keychain, request: ServiceRequest) {
        let ServiceRequest { airport, plane } = request;

        keys.stats().inc_in_service();
        keys.push_stats();

        match keys.servicer().service(airport.id(), plane.id()).await {
            Ok(confirmation) => {
                keys.status().report(format!("Service Completed: {confirmation}"));
            }
            Err(e) => {
                warn!("Service for plane {} at airport {} failed: {e}", plane.id(), airport.id());
                keys.status().report(format!("Error running plane service: {e}"));
            }
        }

        keys.stats().dec_in_service();
        keys.push_stats();

        if keys.cfg().release_policy == ReleasePolicy::AfterService {
            keys.registry().release(&plane);
        }
    }
}
