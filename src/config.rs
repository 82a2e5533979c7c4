// ABOUTME: Environment-driven configuration for the Stride Fitness API
// ABOUTME: Defines ServerConfig and the AI provider selection enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Server Configuration
//!
//! Environment-only configuration: every setting is read from environment
//! variables, with sensible defaults for local development. No configuration
//! files are consulted.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// AI provider selection for plan generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    /// Hosted `OpenAI` chat-completion backend (default)
    #[default]
    OpenAi,
    /// Local Ollama backend reachable over plain HTTP
    Ollama,
}

impl AiProviderType {
    /// Environment variable name for AI provider selection
    pub const ENV_VAR: &'static str = "AI_PROVIDER";

    /// Parse from string with fallback to the default provider
    ///
    /// Any unrecognized or absent value selects the remote backend.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ollama" => Self::Ollama,
            _ => Self::OpenAi,
        }
    }

    /// Load from the environment variable
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }
}

impl Display for AiProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Ollama => write!(f, "ollama"),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Default AI provider (handlers re-read the environment per call)
    pub ai_provider: AiProviderType,
}

impl ServerConfig {
    /// Environment variable for the bind address
    pub const HOST_ENV_VAR: &'static str = "HOST";
    /// Environment variable for the HTTP port
    pub const PORT_ENV_VAR: &'static str = "HTTP_PORT";

    /// Default bind address
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_PORT: u16 = 8080;

    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let host =
            env::var(Self::HOST_ENV_VAR).unwrap_or_else(|_| Self::DEFAULT_HOST.to_owned());
        let http_port = env::var(Self::PORT_ENV_VAR)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);

        Self {
            host,
            http_port,
            ai_provider: AiProviderType::from_env(),
        }
    }

    /// One-line startup summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "listening on {}:{}, ai provider: {}",
            self.host, self.http_port, self.ai_provider
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!(
            AiProviderType::from_str_or_default("ollama"),
            AiProviderType::Ollama
        );
        assert_eq!(
            AiProviderType::from_str_or_default("OLLAMA"),
            AiProviderType::Ollama
        );
        assert_eq!(
            AiProviderType::from_str_or_default("openai"),
            AiProviderType::OpenAi
        );
        // Unrecognized values fall back to the remote backend
        assert_eq!(
            AiProviderType::from_str_or_default("anthropic"),
            AiProviderType::OpenAi
        );
        assert_eq!(
            AiProviderType::from_str_or_default(""),
            AiProviderType::OpenAi
        );
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(AiProviderType::OpenAi.to_string(), "openai");
        assert_eq!(AiProviderType::Ollama.to_string(), "ollama");
    }
}
