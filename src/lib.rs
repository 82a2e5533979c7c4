// ABOUTME: Main library entry point for the Stride Fitness API
// ABOUTME: Exposes workout plan selection, AI plan generation and habit tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Stride Fitness API
//!
//! A small HTTP service with two independent components:
//!
//! - **Plan Selector** ([`plans`]): pure mapping from a (goal, mood) pair to
//!   a predefined workout plan, with a total fallback.
//! - **AI Plan Generator** ([`llm`]): free-form plan text from a remote or
//!   local chat-completion backend, selected by environment configuration.
//! - **Check-in Tracker** ([`checkin`]): per-user sparse calendar of daily
//!   habit records with on-demand streak computation.
//!
//! State is in-memory only and lives for the lifetime of the process.

/// Daily habit check-in store and streak computation
pub mod checkin;
/// Environment-driven server configuration
pub mod config;
/// Unified error handling
pub mod errors;
/// AI plan generation backends
pub mod llm;
/// Logging configuration
pub mod logging;
/// Core data models
pub mod models;
/// Static workout plan catalog and selection
pub mod plans;
/// Shared server resources for request handlers
pub mod resources;
/// HTTP route definitions
pub mod routes;
