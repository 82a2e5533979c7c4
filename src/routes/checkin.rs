// ABOUTME: Check-in route handlers for habit submission and streak summaries
// ABOUTME: Provides the POST /checkin and GET /summary endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Check-in routes
//!
//! Thin handlers over [`crate::checkin::CheckinStore`]. Any caller may read
//! or write any user's data by supplying that user's identifier; multi-tenant
//! authorization is out of scope by design.

use crate::errors::AppError;
use crate::models::{CheckinRecord, StreakSummary};
use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Body for `POST /checkin`
#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    /// Caller-supplied user identifier
    pub user_id: String,
    /// The day's habit record
    pub checkin: CheckinRecord,
}

/// Query parameters for `GET /summary`
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Caller-supplied user identifier
    pub user_id: Option<String>,
}

/// Check-in routes implementation
pub struct CheckinRoutes;

impl CheckinRoutes {
    /// Create the check-in routes
    #[must_use]
    pub fn routes() -> Router<Arc<ServerResources>> {
        Router::new()
            .route("/checkin", post(Self::submit_checkin))
            .route("/summary", get(Self::get_summary))
    }

    /// Insert or overwrite a day's record and return the updated summary
    async fn submit_checkin(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CheckinRequest>,
    ) -> Result<Json<StreakSummary>, AppError> {
        debug!(
            "checkin submitted, user: {}, date: {}",
            request.user_id, request.checkin.date
        );
        let summary = resources.checkins.submit(&request.user_id, request.checkin);
        Ok(Json(summary))
    }

    /// Compute the current summary for a user without mutating state
    async fn get_summary(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SummaryQuery>,
    ) -> Result<Json<StreakSummary>, AppError> {
        let user_id = query
            .user_id
            .ok_or_else(|| AppError::missing_field("user_id"))?;
        Ok(Json(resources.checkins.summary_for(&user_id)))
    }
}
