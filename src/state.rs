use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::config::Config;
use crate::planner::PlanLimits;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            config: Arc::new(config),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    pub fn plan_limits(&self) -> PlanLimits {
        self.config.plan_limits
    }
}
