// ABOUTME: Core data models for the Stride Fitness API
// ABOUTME: Defines WorkoutPlan, CheckinRecord and StreakSummary value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Core value objects shared by the plan and check-in components.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A structured workout plan
///
/// Immutable value object: compared and consumed by value, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Ordered exercise descriptions
    pub exercises: Vec<String>,
    /// Duration label, e.g. "20 minutes"
    pub duration: String,
    /// Intensity label: light, moderate or high
    pub intensity: String,
    /// Optional free-text note
    pub notes: Option<String>,
}

impl WorkoutPlan {
    /// Create a new workout plan
    #[must_use]
    pub fn new(
        exercises: Vec<&str>,
        duration: &str,
        intensity: &str,
        notes: Option<&str>,
    ) -> Self {
        Self {
            exercises: exercises.into_iter().map(str::to_owned).collect(),
            duration: duration.to_owned(),
            intensity: intensity.to_owned(),
            notes: notes.map(str::to_owned),
        }
    }
}

/// One user's habit completion for one calendar day
///
/// Identity is (user id, date); resubmitting a record for an existing date
/// overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRecord {
    /// Calendar day the record applies to
    pub date: NaiveDate,
    /// First workout slot completed
    pub workout1: bool,
    /// Second workout slot completed
    pub workout2: bool,
    /// Water intake goal met
    pub water: bool,
    /// Reading habit completed
    pub reading: bool,
    /// Diet adhered to
    pub diet: bool,
    /// Progress photo taken
    pub photo: bool,
    /// Optional free-text note
    #[serde(default)]
    pub notes: Option<String>,
}

impl CheckinRecord {
    /// A day is complete iff all six habit flags are true
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.workout1 && self.workout2 && self.water && self.reading && self.diet && self.photo
    }
}

/// Derived streak statistics for one user
///
/// Computed on demand from the user's check-in calendar; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Count of all complete days ever recorded, regardless of contiguity
    pub days_completed: usize,
    /// Consecutive complete days ending at the most recent record
    pub current_streak: usize,
    /// Most recent date with any record, complete or not
    pub last_checkin: Option<NaiveDate>,
    /// Encouragement message keyed on whether the streak is active
    pub encouragement: String,
}
