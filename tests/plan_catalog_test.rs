// ABOUTME: Tests for the static workout plan catalog and selection logic
// ABOUTME: Validates catalog hits, normalization and the total fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use stride_server::plans::{default_plan, generate_plan};

#[test]
fn test_generate_plan_build_abs_tired() {
    let plan = generate_plan("build abs", "tired");
    assert_eq!(plan.exercises, vec!["10 slow crunches", "15-minute walk"]);
    assert_eq!(plan.duration, "20 minutes");
    assert_eq!(plan.intensity, "light");
    assert!(plan
        .notes
        .as_deref()
        .unwrap()
        .to_lowercase()
        .contains("form and breathing"));
}

#[test]
fn test_generate_plan_build_abs_energised() {
    let plan = generate_plan("build abs", "energised");
    assert!(plan.exercises.contains(&"30 crunches".to_owned()));
    assert!(plan.exercises.contains(&"20 leg raises".to_owned()));
    assert!(plan.exercises.contains(&"2-minute plank".to_owned()));
    assert_eq!(plan.duration, "30 minutes");
    assert_eq!(plan.intensity, "moderate");
}

#[test]
fn test_generate_plan_build_glutes_tired() {
    let plan = generate_plan("build glutes", "tired");
    assert!(plan.exercises.contains(&"10 glute bridges".to_owned()));
    assert!(plan.exercises.contains(&"stretching".to_owned()));
    assert_eq!(plan.duration, "15 minutes");
    assert_eq!(plan.intensity, "light");
}

#[test]
fn test_generate_plan_build_glutes_energised() {
    let plan = generate_plan("build glutes", "energised");
    assert!(plan.exercises.contains(&"20 squats".to_owned()));
    assert!(plan.exercises.contains(&"15 lunges".to_owned()));
    assert!(plan.exercises.contains(&"10 hip thrusts".to_owned()));
    assert_eq!(plan.duration, "45 minutes");
    assert_eq!(plan.intensity, "high");
}

#[test]
fn test_generate_plan_unknown_combination() {
    let plan = generate_plan("unknown goal", "unknown mood");
    assert!(plan.exercises.contains(&"gentle stretching".to_owned()));
    assert!(plan.exercises.contains(&"light walk".to_owned()));
    assert_eq!(plan.duration, "20 minutes");
    assert_eq!(plan.intensity, "light");
    assert!(plan
        .notes
        .as_deref()
        .unwrap()
        .to_lowercase()
        .contains("listen to your body"));
}

#[test]
fn test_generate_plan_known_goal_unknown_mood() {
    // Mood miss under a known goal still falls back to the default plan
    assert_eq!(generate_plan("build abs", "furious"), default_plan());
}

#[test]
fn test_generate_plan_is_case_and_whitespace_insensitive() {
    assert_eq!(
        generate_plan("  BUILD ABS ", "\tTired\n"),
        generate_plan("build abs", "tired")
    );
}

#[test]
fn test_generate_plan_is_total() {
    // No input string raises an error, including the empty string
    assert_eq!(generate_plan("", ""), default_plan());
    assert_eq!(generate_plan("💪", "😴"), default_plan());
}

#[test]
fn test_generate_plan_is_deterministic() {
    assert_eq!(
        generate_plan("build abs", "tired"),
        generate_plan("build abs", "tired")
    );
}
