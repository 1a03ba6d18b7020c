use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::prompt::PromptStyle;

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub bedrock_api_key: String,
    pub aws_region: String,
    pub bedrock_endpoint: String,
    pub model_id: String,
    pub max_requests: usize,
    pub time_window_seconds: u64,
    pub prompt_style: PromptStyle,
}

impl Config {
    /// Reads configuration once at startup. Values come from the
    /// environment (and a .env file when present); there is no hot reload.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let bedrock_api_key = env::var("BEDROCK_API_KEY")?;

        let aws_region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let bedrock_endpoint = env::var("BEDROCK_ENDPOINT")
            .unwrap_or_else(|_| format!("https://bedrock-runtime.{aws_region}.amazonaws.com"));
        let model_id =
            env::var("MODEL_ID").unwrap_or_else(|_| "amazon.nova-lite-v1:0".to_string());

        // Rate-limit knobs fall back to their defaults on missing or
        // unparseable values, like the secrets-store lookups they replace.
        let max_requests = env::var("RATE_LIMIT_MAX_REQUESTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6);
        let time_window_seconds = env::var("RATE_LIMIT_TIME_WINDOW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let prompt_style = match env::var("PROMPT_STYLE") {
            Ok(name) => name.parse()?,
            Err(_) => PromptStyle::Tagline,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;
        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            bedrock_api_key,
            aws_region,
            bedrock_endpoint,
            model_id,
            max_requests,
            time_window_seconds,
            prompt_style,
        })
    }
}
