// ABOUTME: Workout plan route handlers for static and AI-generated plans
// ABOUTME: Provides the /plan catalog endpoint and the /ai-plan LLM endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Plan routes
//!
//! `/plan` is total: any (goal, mood) pair yields a 200 with either a catalog
//! plan or the default plan. `/ai-plan` delegates to the configured LLM
//! backend and surfaces backend failures as 500-class errors.

use crate::errors::AppError;
use crate::llm::AiPlanProvider;
use crate::models::WorkoutPlan;
use crate::plans::generate_plan;
use crate::resources::ServerResources;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Query parameters for `/plan` and `/ai-plan`
///
/// Both parameters are extracted as options so that a miss produces the
/// documented 422 validation error rather than the extractor's default.
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    /// Fitness goal, free text
    pub goal: Option<String>,
    /// Self-reported mood, free text
    pub mood: Option<String>,
    /// Optional model override for the AI backend
    pub model: Option<String>,
}

impl PlanQuery {
    fn require(self) -> Result<(String, String, Option<String>), AppError> {
        let goal = self.goal.ok_or_else(|| AppError::missing_field("goal"))?;
        let mood = self.mood.ok_or_else(|| AppError::missing_field("mood"))?;
        Ok((goal, mood, self.model))
    }
}

/// Response for `/ai-plan`
#[derive(Debug, Serialize, Deserialize)]
pub struct AiPlanResponse {
    /// Echoed goal
    pub goal: String,
    /// Echoed mood
    pub mood: String,
    /// Free-form plan text from the backend
    pub ai_plan: String,
}

/// Plan routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan routes
    #[must_use]
    pub fn routes() -> Router<Arc<ServerResources>> {
        Router::new()
            .route("/plan", get(Self::get_plan))
            .route("/ai-plan", get(Self::get_ai_plan))
    }

    /// Select a plan from the static catalog
    async fn get_plan(Query(query): Query<PlanQuery>) -> Result<Json<WorkoutPlan>, AppError> {
        let (goal, mood, _) = query.require()?;
        Ok(Json(generate_plan(&goal, &mood)))
    }

    /// Generate a plan with the configured AI backend
    ///
    /// Provider selection is a one-shot configuration decision per call;
    /// there is no fallback between backends.
    async fn get_ai_plan(Query(query): Query<PlanQuery>) -> Result<Response, AppError> {
        let (goal, mood, model) = query.require()?;

        let provider = AiPlanProvider::from_env(model)?;
        let ai_plan = provider.generate_ai_plan(&goal, &mood).await?;
        info!("generated ai plan for goal '{goal}', mood '{mood}'");

        let response = AiPlanResponse {
            goal,
            mood,
            ai_plan,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
