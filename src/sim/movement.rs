use super::requests::ServiceRequest;
use crate::config::ReleasePolicy;
use crate::error;
use crate::fleet::{Airport, Plane, common::Vec2D};
use crate::keychain::Keychain;
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Advances one plane along an interpolated straight-line path in discrete
/// time steps.
pub struct MovementSim;

impl MovementSim {
    /// Flies `plane` to the destination airport and hands it over to the
    /// service pipeline on arrival.
    ///
    /// The straight-line distance divided by the configured speed-per-step,
    /// truncated, gives the step count; each step advances the position by
    /// one increment, publishes it to the renderer and sleeps the configured
    /// interval. A target closer than one step width lands immediately with
    /// no position updates.
    ///
    /// Cancellation mid-flight exits at the next step boundary without
    /// releasing the plane or decrementing the in-flight counter. An
    /// interrupted flight keeps its plane allocated; that is a deliberate
    /// property of the shutdown protocol.
    pub async fn fly(
        keys: &Keychain,
        plane: &Arc<Plane>,
        destination: Airport,
        token: &CancellationToken,
    ) {
        let target: Vec2D<f64> = destination.pos().cast();
        let start = plane.position();
        let delta = start.to(&target);
        let distance = start.euclid_distance(&target);
        let steps = (distance / keys.cfg().plane_speed) as u64;

        keys.stats().inc_in_flight();
        keys.push_stats();

        for i in 1..=steps {
            if token.is_cancelled() {
                return;
            }
            let new_pos = if i == steps {
                // Snap the final step to the exact target to absorb rounding.
                target
            } else {
                plane.position() + delta / steps as f64
            };
            plane.set_position(new_pos);
            keys.render().move_icon(plane.icon(), new_pos);

            tokio::select! {
                () = token.cancelled() => return,
                () = sleep(keys.cfg().step_interval) => {}
            }
        }

        keys.stats().dec_in_flight();
        keys.stats().inc_completed_trips();
        keys.push_stats();

        if keys.cfg().release_policy == ReleasePolicy::OnLanding {
            keys.registry().release(plane);
        }
        keys.status().report(format!("Plane {} landed.", plane.id()));

        let request = ServiceRequest {
            airport: destination,
            plane: Arc::clone(plane),
        };
        if keys.service_queue().send(request).is_err() {
            error!("Service queue closed, dropping request for plane {}", plane.id());
        }
    }
}
