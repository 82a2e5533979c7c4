// ABOUTME: Local Ollama chat-completion backend for AI plan generation
// ABOUTME: Posts to localhost over plain HTTP with a bounded timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Ollama Backend
//!
//! Local chat-completion backend reachable at a fixed localhost endpoint.
//! Any non-success status, timeout or malformed response body becomes one
//! uniform backend error wrapping the underlying cause.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, error};

use super::{ChatMessage, PlanBackend};
use crate::errors::{AppError, AppResult};

/// Environment variable overriding the default model
pub const OLLAMA_MODEL_ENV: &str = "OLLAMA_MODEL";

/// Default model for local inference
const DEFAULT_MODEL: &str = "llama3.2";

/// Fixed local chat endpoint
const API_URL: &str = "http://localhost:11434/api/chat";

/// Bounded timeout for local inference
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

/// Local Ollama plan-generation backend
pub struct OllamaProvider {
    client: Client,
    model: String,
}

impl OllamaProvider {
    /// Create a provider from environment variables
    ///
    /// Reads `OLLAMA_MODEL` (optional); an explicit `model` argument takes
    /// precedence. No credential is required for the local server.
    #[must_use]
    pub fn from_env(model: Option<String>) -> Self {
        let model = model
            .or_else(|| env::var(OLLAMA_MODEL_ENV).ok().filter(|m| !m.is_empty()))
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        Self {
            client: Client::new(),
            model,
        }
    }
}

#[async_trait]
impl PlanBackend for OllamaProvider {
    fn display_name(&self) -> &'static str {
        "Ollama"
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = OllamaChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
        };

        debug!("sending chat request to Ollama, model: {}", self.model);

        let response = self
            .client
            .post(API_URL)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Ollama request failed: {e}");
                let detail = if e.is_connect() {
                    format!("cannot connect to {API_URL}. Is Ollama running?")
                } else if e.is_timeout() {
                    format!("request timed out after {REQUEST_TIMEOUT_SECS}s")
                } else {
                    format!("request failed: {e}")
                };
                AppError::external_service(self.display_name(), detail).with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                self.display_name(),
                format!("API error ({status}): {body}"),
            ));
        }

        let parsed: OllamaChatResponse = response.json().await.map_err(|e| {
            AppError::external_service(
                self.display_name(),
                format!("failed to parse response: {e}"),
            )
        })?;

        Ok(parsed.message.content.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_model_defaults_and_overrides() {
        env::remove_var(OLLAMA_MODEL_ENV);
        assert_eq!(OllamaProvider::from_env(None).model, DEFAULT_MODEL);

        env::set_var(OLLAMA_MODEL_ENV, "mistral");
        assert_eq!(OllamaProvider::from_env(None).model, "mistral");
        assert_eq!(
            OllamaProvider::from_env(Some("phi3".into())).model,
            "phi3"
        );
        env::remove_var(OLLAMA_MODEL_ENV);
    }
}
