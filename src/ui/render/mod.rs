mod add_employee;
mod employee_details;
mod employee_list;

use crate::state::{State, View};
use add_employee::add_employee;
use employee_details::employee_details;
use employee_list::employee_list;
use std::io::{self, Write};

/// Render the current view of the state.
///
pub fn render(out: &mut dyn Write, state: &State) -> io::Result<()> {
    match state.current_view() {
        View::EmployeeList => employee_list(out, state),
        View::EmployeeDetails => employee_details(out, state),
        View::AddEmployee => add_employee(out, state),
    }
}
