//! # jot-core
//!
//! Core types, rollover planning, views and timers for Jotter.
//!
//! This crate holds everything that does not touch storage or the terminal:
//! - Entity structs (`Item`, `Subtask`) and their field-level mutations
//! - Enums for recurrence, status, category and view selection
//! - ID prefix constants and client-side ID generation
//! - The daily rollover planner (keep / expire / respawn / defer)
//! - Presentation partitioning (active, blocked, snoozed, completed, focus)
//! - The in-memory board and countdown timer state machines
//! - Ritual presets, the motivation booster catalog and CLI response types

pub mod board;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod motivation;
pub mod presets;
pub mod responses;
pub mod rollover;
pub mod timer;
pub mod views;
