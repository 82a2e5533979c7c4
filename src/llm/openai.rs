// ABOUTME: Remote OpenAI chat-completion backend for AI plan generation
// ABOUTME: Requires OPENAI_API_KEY and posts to the hosted chat completions API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # `OpenAI` Backend
//!
//! Hosted chat-completion backend. Requires a configured credential; without
//! one, provider construction fails with a configuration error. Transport and
//! service failures propagate to the caller with no retry.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, error};

use super::{ChatMessage, PlanBackend};
use crate::errors::{AppError, AppResult};

/// Environment variable holding the API credential
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the default model
pub const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";

/// Default model for hosted inference
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Hosted chat completions endpoint
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Client-side request timeout for the hosted service
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Remote `OpenAI` plan-generation backend
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a provider from environment variables
    ///
    /// Reads `OPENAI_API_KEY` (required) and `OPENAI_MODEL` (optional); an
    /// explicit `model` argument takes precedence over both.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `OPENAI_API_KEY` is not set, or an
    /// internal error if the HTTP client cannot be created.
    pub fn from_env(model: Option<String>) -> AppResult<Self> {
        let api_key = env::var(OPENAI_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::config_missing(OPENAI_API_KEY_ENV))?;

        let model = model
            .or_else(|| env::var(OPENAI_MODEL_ENV).ok().filter(|m| !m.is_empty()))
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl PlanBackend for OpenAiProvider {
    fn display_name(&self) -> &'static str {
        "OpenAI"
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!("sending chat completion request to OpenAI, model: {}", self.model);

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI request failed: {e}");
                AppError::external_service(self.display_name(), format!("request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(self.display_name(), format!("failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(AppError::external_service(
                self.display_name(),
                format!("API error ({status}): {body}"),
            ));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(
                self.display_name(),
                format!("failed to parse response: {e}"),
            )
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::external_service(self.display_name(), "API returned no completion text")
            })?;

        Ok(content.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_missing_api_key_is_config_error() {
        let saved = env::var(OPENAI_API_KEY_ENV).ok();
        env::remove_var(OPENAI_API_KEY_ENV);

        let result = OpenAiProvider::from_env(None);
        let error = result.err().unwrap();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert!(error.message.contains(OPENAI_API_KEY_ENV));

        if let Some(key) = saved {
            env::set_var(OPENAI_API_KEY_ENV, key);
        }
    }

    #[test]
    #[serial]
    fn test_explicit_model_overrides_env() {
        env::set_var(OPENAI_API_KEY_ENV, "test-key");
        env::set_var(OPENAI_MODEL_ENV, "gpt-4.1");

        let provider = OpenAiProvider::from_env(Some("gpt-4o".into())).unwrap();
        assert_eq!(provider.model, "gpt-4o");

        let provider = OpenAiProvider::from_env(None).unwrap();
        assert_eq!(provider.model, "gpt-4.1");

        env::remove_var(OPENAI_MODEL_ENV);
        env::remove_var(OPENAI_API_KEY_ENV);
    }
}
