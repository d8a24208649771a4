use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub tick_interval_ms: u64,
    /// Ticks to simulate before shutting down, `None` runs forever.
    pub ticks: Option<u64>,
    pub dimension: u32,
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            ticks: None,
            dimension: 0,
        }
    }
}
