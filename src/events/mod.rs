//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: employee directory API interactions

pub mod network;
