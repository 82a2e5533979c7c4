// ABOUTME: Route module organization for the Stride Fitness API HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Route modules for the Stride Fitness API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the core components.

/// Daily habit check-in and streak summary routes
pub mod checkin;
/// Health check and system status routes
pub mod health;
/// Workout plan selection and AI plan generation routes
pub mod plan;

pub use checkin::CheckinRoutes;
pub use health::HealthRoutes;
pub use plan::PlanRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Compose the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(PlanRoutes::routes())
        .merge(CheckinRoutes::routes())
        .merge(HealthRoutes::routes())
        .with_state(resources)
}
