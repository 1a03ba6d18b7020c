pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod present;
pub mod prompt;
pub mod rate_limit;
pub mod telemetry;

use std::sync::Arc;

use tokio::sync::Mutex;

use config::Config;
use llm::BedrockClient;
use rate_limit::RateLimiter;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<BedrockClient>,
    pub limiter: Arc<Mutex<RateLimiter>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let llm = BedrockClient::new(&config);
        let limiter = RateLimiter::new(config.max_requests, config.time_window_seconds);
        Self {
            config: Arc::new(config),
            llm: Arc::new(llm),
            limiter: Arc::new(Mutex::new(limiter)),
        }
    }
}
