// ABOUTME: Shared server resources injected into HTTP request handlers
// ABOUTME: Owns the configuration and the in-memory check-in store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Shared state for the HTTP server, passed to handlers as `Arc<ServerResources>`.

use crate::checkin::CheckinStore;
use crate::config::ServerConfig;

/// Dependencies shared by all request handlers
///
/// Owned explicitly and injected into the router instead of living in global
/// statics, so the core stays testable without a live server.
pub struct ServerResources {
    /// Server configuration loaded at startup
    pub config: ServerConfig,
    /// Process-lifetime check-in store
    pub checkins: CheckinStore,
}

impl ServerResources {
    /// Create resources with an empty check-in store
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            checkins: CheckinStore::new(),
        }
    }
}
