use crate::directory::{Directory, DirectoryError};
use crate::error::AppResult;
use crate::state::{State, StateError, View};
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ListEmployees { page: usize },
    GetEmployee { id: String },
    CreateEmployee,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    directory: &'a Directory,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, directory: &'a Directory) -> Self {
        Handler { state, directory }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> AppResult<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::ListEmployees { page } => self.list_employees(page).await?,
            Event::GetEmployee { id } => self.get_employee(id).await?,
            Event::CreateEmployee => self.create_employee().await?,
        }
        Ok(())
    }

    /// Update state with one page of employees.
    ///
    async fn list_employees(&mut self, page: usize) -> AppResult<()> {
        let (offset, limit) = {
            let mut state = self.state.lock().await;
            state.set_view(View::EmployeeList).set_page(page).set_loading();
            (state.get_offset(), state.get_page_size())
        };
        info!("Fetching employees (page {}, {} per page)...", page, limit);
        match self.directory.employees(offset, limit).await {
            Ok(employee_page) => {
                info!("Received {} employees.", employee_page.data.len());
                let total = employee_page.total();
                let mut state = self.state.lock().await;
                state.set_employees(employee_page.data).set_total(total);
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch employees: {}", e);
                let mut state = self.state.lock().await;
                state.set_load_failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Update state with the details of one employee.
    ///
    async fn get_employee(&mut self, id: String) -> AppResult<()> {
        {
            let mut state = self.state.lock().await;
            state.set_view(View::EmployeeDetails).set_loading();
        }
        info!("Fetching employee {}...", id);
        match self.directory.employee(&id).await {
            Ok(employee) => {
                let mut state = self.state.lock().await;
                state.set_selected_employee(employee);
                Ok(())
            }
            Err(e @ DirectoryError::EmployeeNotFound { .. }) => {
                warn!("{}", e);
                let mut state = self.state.lock().await;
                state.set_not_found(id);
                Err(e.into())
            }
            Err(e) => {
                error!("Failed to fetch employee {}: {}", id, e);
                let mut state = self.state.lock().await;
                state.set_load_failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Validate the add-employee form and submit it if every field passes.
    /// The form is closed only after the directory accepts the employee.
    ///
    async fn create_employee(&mut self) -> AppResult<()> {
        let employee;
        {
            let mut state = self.state.lock().await;
            if !state.get_form_mut().validate_all() {
                let errors = state.get_form().errors();
                warn!("Add employee form has {} invalid field(s).", errors.len());
                return Err(StateError::InvalidForm { errors }.into());
            }
            employee = state
                .get_form()
                .build_submission_payload_with(state.get_submission_defaults());
        }
        info!("Submitting employee '{}'...", employee.full_name());
        let response = self.directory.create_employee(&employee).await?;
        info!("Employee created: {}", response);
        let mut state = self.state.lock().await;
        state.finish_submission();
        Ok(())
    }
}
