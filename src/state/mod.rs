//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds loaded employees and the active form
//! - Navigation types (View, LoadStatus)
//! - Add-employee form types (FieldName, FieldState, FormState)
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{
    validate, FieldName, FieldState, FieldValidationError, FormState, SubmissionDefaults,
};
pub use navigation::{LoadStatus, View};
pub use state_impl::State;
