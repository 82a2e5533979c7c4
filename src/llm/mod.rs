// ABOUTME: AI plan generation layer with pluggable chat-completion backends
// ABOUTME: Dispatches between the remote OpenAI and local Ollama providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # AI Plan Generator
//!
//! Delegates free-form workout plan text generation to one of two
//! interchangeable backends, selected per call from the `AI_PROVIDER`
//! environment variable:
//!
//! - `openai` (default): hosted chat-completion service, requires
//!   `OPENAI_API_KEY`
//! - `ollama`: locally reachable chat-completion service over plain HTTP
//!
//! Both backends receive the same prompt built from goal and mood. There is
//! no caching, no retry and no fallback between backends: failures surface
//! to the caller wrapped with a provider-identifying message.

mod ollama;
mod openai;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use crate::config::AiProviderType;
use crate::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single message in a chat-completion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (`system`, `user` or `assistant`)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }
}

/// Contract a plan-generation backend must implement
#[async_trait]
pub trait PlanBackend {
    /// Human-readable provider name used in error messages and logs
    fn display_name(&self) -> &'static str;

    /// Produce free-form plan text for the given prompt
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Build the natural-language instruction shared by all backends
#[must_use]
pub fn build_plan_prompt(goal: &str, mood: &str) -> String {
    format!(
        "Create a workout plan for someone whose goal is \"{goal}\" and who is \
         currently feeling \"{mood}\". Keep the plan concise, specific, safe \
         and motivating."
    )
}

/// Unified plan provider wrapping the configured backend
///
/// A closed two-variant choice rather than an open plugin hierarchy: backend
/// selection is a one-shot configuration decision per call.
pub enum AiPlanProvider {
    /// Hosted `OpenAI` backend
    OpenAi(OpenAiProvider),
    /// Local Ollama backend
    Ollama(OllamaProvider),
}

impl AiPlanProvider {
    /// Create a provider from the `AI_PROVIDER` environment variable
    ///
    /// An optional model identifier overrides the backend's default.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the selected backend is missing a
    /// required credential.
    pub fn from_env(model: Option<String>) -> AppResult<Self> {
        let provider_type = AiProviderType::from_env();
        debug!("selected ai provider: {provider_type}");

        match provider_type {
            AiProviderType::OpenAi => Ok(Self::OpenAi(OpenAiProvider::from_env(model)?)),
            AiProviderType::Ollama => Ok(Self::Ollama(OllamaProvider::from_env(model))),
        }
    }

    /// Generate plan text for the given goal and mood
    ///
    /// # Errors
    ///
    /// Propagates the backend's error verbatim, wrapped with a
    /// provider-identifying message. Nothing is retried.
    pub async fn generate_ai_plan(&self, goal: &str, mood: &str) -> AppResult<String> {
        let prompt = build_plan_prompt(goal, mood);
        match self {
            Self::OpenAi(provider) => provider.generate(&prompt).await,
            Self::Ollama(provider) => provider.generate(&prompt).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_goal_and_mood() {
        let prompt = build_plan_prompt("build abs", "tired");
        assert!(prompt.contains("build abs"));
        assert!(prompt.contains("tired"));
    }

    #[test]
    fn test_chat_message_roles() {
        assert_eq!(ChatMessage::user("hi").role, "user");
        assert_eq!(ChatMessage::system("hi").role, "system");
    }
}
