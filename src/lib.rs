//! Command-line client for a hosted employee directory.
//!
//! The add-employee form lives in [`state`]: a closed set of fields, each
//! tracking its value, whether it has been touched, and its current
//! validation error. The [`directory`] client lists, fetches and creates
//! employees over the hosted REST API.

pub mod app;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
