use std::time::Duration;

use backoff::{future::retry, Error as BackoffError, ExponentialBackoff};
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::error::{AppError, Result};

#[derive(Serialize)]
struct ContentBlock {
    text: String,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: Vec<ContentBlock>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InferenceConfig {
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InvokeRequest {
    messages: Vec<Message>,
    inference_config: InferenceConfig,
}

/// Client for the Bedrock runtime invoke endpoint.
pub struct BedrockClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model_id: String,
}

impl BedrockClient {
    pub fn new(config: &Config) -> Self {
        // No request timeout here: the model call takes as long as the
        // endpoint needs. Only page fetches carry a deadline.
        Self {
            client: Client::new(),
            endpoint: config.bedrock_endpoint.clone(),
            api_key: config.bedrock_api_key.clone(),
            model_id: config.model_id.clone(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Invokes the model with a single user message and returns the raw
    /// response body. Transport errors retry under exponential backoff;
    /// HTTP error statuses do not.
    pub async fn invoke(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String> {
        let payload = InvokeRequest {
            messages: vec![Message {
                role: "user".into(),
                content: vec![ContentBlock { text: prompt.into() }],
            }],
            inference_config: InferenceConfig { max_tokens, temperature },
        };
        let url = format!("{}/model/{}/invoke", self.endpoint, self.model_id);

        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(15)),
            ..ExponentialBackoff::default()
        };

        retry(backoff, || async {
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .json(&payload)
                .send()
                .await
                .map_err(|e| BackoffError::transient(AppError::LlmError(e.to_string())))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| BackoffError::transient(AppError::LlmError(e.to_string())))?;

            if !status.is_success() {
                return Err(BackoffError::permanent(AppError::LlmError(format!(
                    "model endpoint returned {status}: {body}"
                ))));
            }
            Ok(body)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_matches_the_invoke_wire_format() {
        let payload = InvokeRequest {
            messages: vec![Message {
                role: "user".into(),
                content: vec![ContentBlock { text: "hello".into() }],
            }],
            inference_config: InferenceConfig {
                max_tokens: 60,
                temperature: 0.8,
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["text"], "hello");
        assert_eq!(json["inferenceConfig"]["maxTokens"], 60);
        let temperature = json["inferenceConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.8).abs() < 1e-6);
    }
}
