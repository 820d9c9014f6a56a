use super::latency_config::LatencyConfig;

pub struct AppConfig {
    pub latency: LatencyConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            latency: LatencyConfig::from_env(),
        }
    }
}
