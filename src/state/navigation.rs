//! Navigation-related state types.
//!
//! This module contains the views the directory can present and the status of
//! the most recent load.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    EmployeeList,
    EmployeeDetails,
    AddEmployee,
}

/// Specifying the progress of the most recent directory request.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
    /// The requested employee does not exist.
    NotFound(String),
}
