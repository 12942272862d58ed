//! # Align Four
//!
//! A Connect Four engine with a tiered computer opponent, played from a
//! terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, run detection, move validation, turn controller
//! - [`ai`] — Difficulty levels and the layered column heuristic
//! - [`ui`] — Terminal UI: game view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
