use crate::config::Config;
use sarthi::repository::Repository;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Config,
    pub repository: RwLock<Repository>,
}

impl AppState {
    pub fn new(config: Config, repository: Repository) -> Self {
        Self {
            config,
            repository: RwLock::new(repository),
        }
    }

    /// Waits out the configured fake backend latency.
    pub async fn simulate_latency(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }
}
