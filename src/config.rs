use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::planner::PlanLimits;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub healthcheck_endpoint: String,
    pub plan_limits: PlanLimits,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env_parse("PORT").unwrap_or(3000);

        let host = env_parse("HOST").unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let healthcheck_endpoint =
            std::env::var("HEALTHCHECK_ENDPOINT").unwrap_or_else(|_| "/health".to_string());

        let defaults = PlanLimits::default();
        let plan_limits = PlanLimits {
            max_plan_days: env_parse::<u32>("PLAN_MAX_DAYS")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_plan_days),
            max_total_words: env_parse::<u64>("PLAN_MAX_TOTAL_WORDS")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_total_words),
        };

        Self {
            host,
            port,
            log_level,
            healthcheck_endpoint,
            plan_limits,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            log_level: "info".to_string(),
            healthcheck_endpoint: "/health".to_string(),
            plan_limits: PlanLimits::default(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
}
