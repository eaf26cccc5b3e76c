use crate::state::{LoadStatus, State};
use crate::ui::{not_found_message, FETCH_FAILED_MESSAGE};
use std::io::{self, Write};

const KEY_WIDTH: usize = 16;

/// Render the details of the selected employee.
///
pub fn employee_details(out: &mut dyn Write, state: &State) -> io::Result<()> {
    match state.get_load_status() {
        LoadStatus::Failed(_) => return writeln!(out, "{}", FETCH_FAILED_MESSAGE),
        LoadStatus::NotFound(id) => return writeln!(out, "{}", not_found_message(id)),
        _ => {}
    }
    let employee = match state.get_selected_employee() {
        Some(employee) => employee,
        None => return Ok(()),
    };

    writeln!(out, "{}", employee.full_name())?;
    if let Some(since) = employee.employee_since() {
        writeln!(out, "{}", since)?;
    }
    writeln!(out)?;
    for (key, value) in employee.detail_rows() {
        writeln!(out, "{:<width$} {}", key, value, width = KEY_WIDTH)?;
    }
    Ok(())
}
