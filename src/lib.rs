//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Matches run on the classic 7x6 grid with a ten second countdown on every
//! turn. The engine is an ordinary library the UI drives by feeding it key
//! presses and the current time; it pushes state changes back out through
//! subscriber callbacks.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, rules, turn clock, engine
//! - [`ui`] — Terminal UI: event loop and board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
