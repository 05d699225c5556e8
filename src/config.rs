use std::env;
use std::time::Duration;
use strum_macros::Display;

/// Policy deciding when an allocated plane becomes available again.
///
/// The observed reference behavior frees a plane the moment it touches down,
/// while it is still being serviced. The alternatives keep it allocated until
/// servicing finished, or forever (a plane flies exactly once).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ReleasePolicy {
    OnLanding,
    AfterService,
    SingleUse,
}

impl From<&str> for ReleasePolicy {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "after-service" | "afterservice" => ReleasePolicy::AfterService,
            "single-use" | "singleuse" => ReleasePolicy::SingleUse,
            _ => ReleasePolicy::OnLanding,
        }
    }
}

/// Runtime configuration of the simulation.
///
/// Every field has a compile-time default matching the reference setup and
/// can be overridden through a `SKYSIM_*` environment variable in
/// [`SimConfig::from_env`]. Tests construct it directly and shrink the
/// timing fields.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of airports placed on the grid.
    pub num_airports: usize,
    /// Number of planes homed at each airport.
    pub planes_per_airport: usize,
    /// Grid width in cells.
    pub grid_width: i32,
    /// Grid height in cells.
    pub grid_height: i32,
    /// Distance a plane covers per movement step, in grid cells.
    pub plane_speed: f64,
    /// Wall-clock pause between two movement steps.
    pub step_interval: Duration,
    /// Maximum number of flight requests drained per dispatch cycle.
    pub batch_size: usize,
    /// Pause between two drain attempts of the flight dispatcher.
    pub dispatch_interval: Duration,
    /// Period of the reaper task publishing status snapshots.
    pub reaper_interval: Duration,
    /// Bounded wait per shutdown phase.
    pub shutdown_wait: Duration,
    /// When a plane returns to the available pool.
    pub release_policy: ReleasePolicy,
    /// Command spawned per airport to generate destination ids.
    pub generator_cmd: String,
    /// Command spawned per landing to service a plane.
    pub servicer_cmd: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_airports: 5,
            planes_per_airport: 3,
            grid_width: 10,
            grid_height: 10,
            plane_speed: 0.1,
            step_interval: Duration::from_millis(100),
            batch_size: 5,
            dispatch_interval: Duration::from_secs(2),
            reaper_interval: Duration::from_secs(5),
            shutdown_wait: Duration::from_secs(5),
            release_policy: ReleasePolicy::OnLanding,
            generator_cmd: "flight_requests".to_string(),
            servicer_cmd: "plane_service".to_string(),
        }
    }
}

impl SimConfig {
    /// Builds the configuration from defaults plus `SKYSIM_*` env overrides.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.num_airports = env_usize("SKYSIM_AIRPORTS", cfg.num_airports);
        cfg.planes_per_airport = env_usize("SKYSIM_PLANES_PER_AIRPORT", cfg.planes_per_airport);
        cfg.batch_size = env_usize("SKYSIM_BATCH_SIZE", cfg.batch_size);
        if let Ok(p) = env::var("SKYSIM_RELEASE_POLICY") {
            cfg.release_policy = ReleasePolicy::from(p.as_str());
        }
        if let Ok(c) = env::var("SKYSIM_FLIGHTGEN_CMD") {
            cfg.generator_cmd = c;
        }
        if let Ok(c) = env::var("SKYSIM_SERVICE_CMD") {
            cfg.servicer_cmd = c;
        }
        cfg
    }

    /// Total fleet size, used to bound concurrent flight tasks.
    pub fn fleet_size(&self) -> usize { self.num_airports * self.planes_per_airport }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
