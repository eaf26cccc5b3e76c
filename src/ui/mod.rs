//! User interface module.
//!
//! This module renders application state as plain text, one view per
//! command:
//! - Employee list (name, department, identifier)
//! - Employee details (key/value rows)
//! - Add-employee form (values and validation errors)

mod render;

pub use render::render;

/// Message shown when the directory could not be reached.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch data. Please try again later.";

/// Message shown when a page holds no employees.
pub const EMPTY_LIST_MESSAGE: &str = "No employees found";

/// Message shown when the requested employee does not exist.
pub fn not_found_message(id: &str) -> String {
    format!("No employee found with id '{}'", id)
}
