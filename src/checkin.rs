// ABOUTME: In-memory daily habit check-in store and streak computation
// ABOUTME: Tracks per-user CheckinRecords and derives StreakSummary on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Check-in Tracker
//!
//! Process-wide in-memory store of daily habit check-ins, keyed by
//! (user id, calendar date), with on-demand streak computation. State lives
//! for the lifetime of the process only; there is no durability guarantee.
//!
//! The store is an owned object injected into request handlers rather than a
//! global. [`DashMap`] gives per-user entry locking: concurrent submissions
//! for the same user and date are last-write-wins with an unspecified winner.

use crate::models::{CheckinRecord, StreakSummary};
use chrono::NaiveDate;
use dashmap::DashMap;
use std::collections::BTreeMap;

/// Encouragement shown while a streak is active
fn streak_message(streak: usize) -> String {
    format!("Amazing! You're on a {streak}-day streak. Keep it up!")
}

/// Encouragement shown when there is no active streak
///
/// Also covers the never-checked-in case: one re-engagement message for both.
const NO_STREAK_MESSAGE: &str = "No active streak yet. Today is a perfect day to get started!";

/// In-memory store of check-in records, user id -> date -> record
#[derive(Debug, Default)]
pub struct CheckinStore {
    records: DashMap<String, BTreeMap<NaiveDate, CheckinRecord>>,
}

impl CheckinStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Insert or overwrite the record at (`user_id`, `record.date`) and
    /// return the recomputed summary for that user
    ///
    /// The returned `last_checkin` is always the user's true maximum recorded
    /// date, even when the submitted record is backdated behind an existing
    /// later one.
    pub fn submit(&self, user_id: &str, record: CheckinRecord) -> StreakSummary {
        let mut calendar = self.records.entry(user_id.to_owned()).or_default();
        calendar.insert(record.date, record);
        Self::compute_summary(&calendar)
    }

    /// Compute the summary for a user without mutating state
    ///
    /// A user with no records gets the zero summary: no streak, no completed
    /// days, no last check-in date.
    #[must_use]
    pub fn summary_for(&self, user_id: &str) -> StreakSummary {
        self.records
            .get(user_id)
            .map_or_else(Self::empty_summary, |calendar| {
                Self::compute_summary(&calendar)
            })
    }

    fn empty_summary() -> StreakSummary {
        StreakSummary {
            days_completed: 0,
            current_streak: 0,
            last_checkin: None,
            encouragement: NO_STREAK_MESSAGE.to_owned(),
        }
    }

    /// Derive the streak summary from one user's calendar
    ///
    /// Scans dates most-recent-first. The scan stops at the first incomplete
    /// record or at the first gap wider than one calendar day between two
    /// complete days; the streak never bridges gaps. The completed-day total
    /// is independent of contiguity.
    fn compute_summary(calendar: &BTreeMap<NaiveDate, CheckinRecord>) -> StreakSummary {
        let days_completed = calendar.values().filter(|r| r.is_complete()).count();
        let last_checkin = calendar.keys().next_back().copied();

        let mut current_streak = 0;
        let mut last_counted: Option<NaiveDate> = None;
        for (date, record) in calendar.iter().rev() {
            if !record.is_complete() {
                break;
            }
            match last_counted {
                None => {
                    current_streak = 1;
                    last_counted = Some(*date);
                }
                Some(prev) if prev.pred_opt() == Some(*date) => {
                    current_streak += 1;
                    last_counted = Some(*date);
                }
                Some(_) => break,
            }
        }

        let encouragement = if current_streak > 0 {
            streak_message(current_streak)
        } else {
            NO_STREAK_MESSAGE.to_owned()
        };

        StreakSummary {
            days_completed,
            current_streak,
            last_checkin,
            encouragement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(date: &str) -> CheckinRecord {
        CheckinRecord {
            date: date.parse().unwrap(),
            workout1: true,
            workout2: true,
            water: true,
            reading: true,
            diet: true,
            photo: true,
            notes: None,
        }
    }

    fn incomplete(date: &str) -> CheckinRecord {
        CheckinRecord {
            photo: false,
            ..complete(date)
        }
    }

    #[test]
    fn test_empty_user_gets_zero_summary() {
        let store = CheckinStore::new();
        let summary = store.summary_for("nobody");
        assert_eq!(summary.days_completed, 0);
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.last_checkin, None);
        assert_eq!(summary.encouragement, NO_STREAK_MESSAGE);
    }

    #[test]
    fn test_consecutive_complete_days_accumulate() {
        let store = CheckinStore::new();
        store.submit("ana", complete("2025-06-01"));
        store.submit("ana", complete("2025-06-02"));
        let summary = store.submit("ana", complete("2025-06-03"));
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.days_completed, 3);
        assert_eq!(summary.last_checkin, Some("2025-06-03".parse().unwrap()));
        assert!(summary.encouragement.contains("3-day streak"));
    }

    #[test]
    fn test_incomplete_day_breaks_streak_scan() {
        let store = CheckinStore::new();
        store.submit("ana", complete("2025-06-01"));
        store.submit("ana", incomplete("2025-06-02"));
        let summary = store.summary_for("ana");
        // Most recent record is incomplete, so no streak at all
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.days_completed, 1);
        assert_eq!(summary.last_checkin, Some("2025-06-02".parse().unwrap()));
        assert_eq!(summary.encouragement, NO_STREAK_MESSAGE);
    }

    #[test]
    fn test_streak_does_not_bridge_gaps() {
        let store = CheckinStore::new();
        store.submit("ana", complete("2025-06-01"));
        let summary = store.submit("ana", complete("2025-06-03"));
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.days_completed, 2);
    }

    #[test]
    fn test_total_days_ignores_contiguity() {
        let store = CheckinStore::new();
        store.submit("ana", complete("2025-06-01"));
        store.submit("ana", complete("2025-06-06"));
        let summary = store.submit("ana", complete("2025-06-11"));
        assert_eq!(summary.days_completed, 3);
        assert_eq!(summary.current_streak, 1);
    }

    #[test]
    fn test_resubmission_overwrites_record() {
        let store = CheckinStore::new();
        store.submit("ana", complete("2025-06-01"));
        let summary = store.submit("ana", incomplete("2025-06-01"));
        assert_eq!(summary.days_completed, 0);
        assert_eq!(summary.current_streak, 0);
    }

    #[test]
    fn test_backdated_submission_reports_true_maximum_date() {
        let store = CheckinStore::new();
        store.submit("ana", complete("2025-06-05"));
        // Backdated submission: the response still reports the later date
        let summary = store.submit("ana", complete("2025-06-02"));
        assert_eq!(summary.last_checkin, Some("2025-06-05".parse().unwrap()));
    }

    #[test]
    fn test_users_are_isolated() {
        let store = CheckinStore::new();
        store.submit("ana", complete("2025-06-01"));
        let summary = store.summary_for("ben");
        assert_eq!(summary.days_completed, 0);
        assert_eq!(summary.last_checkin, None);
    }
}
