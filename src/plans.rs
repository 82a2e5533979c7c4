// ABOUTME: Static workout plan catalog and plan selection logic
// ABOUTME: Maps normalized (goal, mood) pairs to predefined plans with a total fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Plan Selector
//!
//! Pure mapping from a (goal, mood) pair to a [`WorkoutPlan`]. Lookups are
//! case-insensitive and whitespace-trimmed; unknown combinations resolve to a
//! fixed default plan, never an error.

use crate::models::WorkoutPlan;
use std::collections::HashMap;
use std::sync::LazyLock;

fn key(goal: &str, mood: &str) -> (String, String) {
    (goal.to_owned(), mood.to_owned())
}

/// Predefined workout plans keyed by normalized (goal, mood)
static PLAN_CATALOG: LazyLock<HashMap<(String, String), WorkoutPlan>> = LazyLock::new(|| {
    HashMap::from([
        (
            key("build abs", "tired"),
            WorkoutPlan::new(
                vec!["10 slow crunches", "15-minute walk"],
                "20 minutes",
                "light",
                Some("Focus on form and breathing"),
            ),
        ),
        (
            key("build abs", "energised"),
            WorkoutPlan::new(
                vec!["30 crunches", "20 leg raises", "2-minute plank"],
                "30 minutes",
                "moderate",
                Some("Push yourself but maintain good form"),
            ),
        ),
        (
            key("build glutes", "tired"),
            WorkoutPlan::new(
                vec!["10 glute bridges", "stretching"],
                "15 minutes",
                "light",
                Some("Focus on mind-muscle connection"),
            ),
        ),
        (
            key("build glutes", "energised"),
            WorkoutPlan::new(
                vec!["20 squats", "15 lunges", "10 hip thrusts"],
                "45 minutes",
                "high",
                Some("Complete 3 rounds with 1-minute rest between"),
            ),
        ),
    ])
});

/// The fallback plan returned for any unknown (goal, mood) combination
#[must_use]
pub fn default_plan() -> WorkoutPlan {
    WorkoutPlan::new(
        vec!["gentle stretching", "light walk"],
        "20 minutes",
        "light",
        Some("Listen to your body and adjust intensity as needed"),
    )
}

/// Select a workout plan for the given goal and mood
///
/// Total over all string inputs: both keys are lowercased and trimmed before
/// lookup, and a miss yields [`default_plan`] rather than an error. The
/// catalog is immutable, so the same input always produces the same plan.
#[must_use]
pub fn generate_plan(goal: &str, mood: &str) -> WorkoutPlan {
    let goal = goal.trim().to_lowercase();
    let mood = mood.trim().to_lowercase();

    PLAN_CATALOG
        .get(&(goal, mood))
        .cloned()
        .unwrap_or_else(default_plan)
}
