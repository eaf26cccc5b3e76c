use crate::directory::Employee;
use log::*;

use super::form::{FormState, SubmissionDefaults};
use super::navigation::{LoadStatus, View};

/// Houses data representative of application state.
///
pub struct State {
    current_view: View,
    employees: Vec<Employee>,
    selected_employee: Option<Employee>,
    load_status: LoadStatus,
    page: usize, // 1-based
    page_size: usize,
    total: Option<usize>,
    form: FormState,
    submission_defaults: SubmissionDefaults,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            current_view: View::EmployeeList,
            employees: vec![],
            selected_employee: None,
            load_status: LoadStatus::Idle,
            page: 1,
            page_size: 10,
            total: None,
            form: FormState::new(),
            submission_defaults: SubmissionDefaults::default(),
        }
    }
}

impl State {
    /// Return a new instance with the given page size and submission
    /// placeholders.
    ///
    pub fn new(page_size: usize, submission_defaults: SubmissionDefaults) -> Self {
        State {
            page_size,
            submission_defaults,
            ..State::default()
        }
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Switch to the given view. Opening the add-employee view starts a new
    /// form session.
    ///
    pub fn set_view(&mut self, view: View) -> &mut Self {
        debug!("Switching view from {:?} to {:?}", self.current_view, view);
        if view == View::AddEmployee && self.current_view != View::AddEmployee {
            self.form.reset();
        }
        self.current_view = view;
        self
    }

    /// Return the loaded employees.
    ///
    pub fn get_employees(&self) -> &Vec<Employee> {
        &self.employees
    }

    /// Set the loaded employees and mark the load as complete.
    ///
    pub fn set_employees(&mut self, employees: Vec<Employee>) -> &mut Self {
        self.employees = employees;
        self.load_status = LoadStatus::Loaded;
        self
    }

    /// Return the employee shown in the details view, if any.
    ///
    pub fn get_selected_employee(&self) -> Option<&Employee> {
        self.selected_employee.as_ref()
    }

    /// Set the employee shown in the details view.
    ///
    pub fn set_selected_employee(&mut self, employee: Employee) -> &mut Self {
        self.selected_employee = Some(employee);
        self.load_status = LoadStatus::Loaded;
        self
    }

    /// Return the status of the most recent load.
    ///
    pub fn get_load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Mark a request as in flight.
    ///
    pub fn set_loading(&mut self) -> &mut Self {
        self.load_status = LoadStatus::Loading;
        self
    }

    /// Record a failed load, dropping any stale list data.
    ///
    pub fn set_load_failed(&mut self, message: String) -> &mut Self {
        self.load_status = LoadStatus::Failed(message);
        self.employees.clear();
        self.total = None;
        self
    }

    /// Record that the requested employee does not exist.
    ///
    pub fn set_not_found(&mut self, id: String) -> &mut Self {
        self.load_status = LoadStatus::NotFound(id);
        self.selected_employee = None;
        self
    }

    /// Set the size of the whole directory as reported by the server.
    ///
    pub fn set_total(&mut self, total: Option<usize>) -> &mut Self {
        self.total = total;
        self
    }

    /// Return the number of pages, if the server reported a total.
    ///
    pub fn get_page_count(&self) -> Option<usize> {
        self.total.map(|total| {
            let full = total / self.page_size;
            if total % self.page_size == 0 {
                full
            } else {
                full + 1
            }
        })
    }

    /// Return the current 1-based page.
    ///
    pub fn get_page(&self) -> usize {
        self.page
    }

    /// Set the current page; zero is clamped to the first page.
    ///
    pub fn set_page(&mut self, page: usize) -> &mut Self {
        self.page = page.max(1);
        self
    }

    /// Return the number of employees requested per page.
    ///
    pub fn get_page_size(&self) -> usize {
        self.page_size
    }

    /// Return the request offset of the current page.
    ///
    /// Pages past the addressable range saturate and fetch an empty page.
    ///
    pub fn get_offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Return the add-employee form.
    ///
    pub fn get_form(&self) -> &FormState {
        &self.form
    }

    /// Return the add-employee form for editing.
    ///
    pub fn get_form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Return the placeholders used for attributes the form does not collect.
    ///
    pub fn get_submission_defaults(&self) -> &SubmissionDefaults {
        &self.submission_defaults
    }

    /// Close the add-employee view after a successful submission.
    ///
    pub fn finish_submission(&mut self) -> &mut Self {
        self.form.reset();
        self.current_view = View::EmployeeList;
        self
    }
}
