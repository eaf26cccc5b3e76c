use crate::state::{LoadStatus, State};
use crate::ui::{EMPTY_LIST_MESSAGE, FETCH_FAILED_MESSAGE};
use std::io::{self, Write};

const NAME_WIDTH: usize = 28;
const DEPARTMENT_WIDTH: usize = 20;

/// Render one page of the employee directory.
///
pub fn employee_list(out: &mut dyn Write, state: &State) -> io::Result<()> {
    match state.get_load_status() {
        LoadStatus::Failed(_) => return writeln!(out, "{}", FETCH_FAILED_MESSAGE),
        LoadStatus::Idle | LoadStatus::Loading | LoadStatus::NotFound(_) => return Ok(()),
        LoadStatus::Loaded => {}
    }

    let employees = state.get_employees();
    if employees.is_empty() {
        return writeln!(out, "{}", EMPTY_LIST_MESSAGE);
    }

    match state.get_page_count() {
        Some(count) => writeln!(
            out,
            "Employee Directory (page {} of {})",
            state.get_page(),
            count
        )?,
        None => writeln!(out, "Employee Directory (page {})", state.get_page())?,
    }
    writeln!(
        out,
        "{:<name$} {:<dept$} {}",
        "NAME",
        "DEPARTMENT",
        "ID",
        name = NAME_WIDTH,
        dept = DEPARTMENT_WIDTH
    )?;
    for employee in employees {
        writeln!(
            out,
            "{:<name$} {:<dept$} {}",
            employee.full_name(),
            employee.department,
            employee.id.as_deref().unwrap_or("-"),
            name = NAME_WIDTH,
            dept = DEPARTMENT_WIDTH
        )?;
    }
    Ok(())
}
