use crate::state::{FieldName, State};
use std::io::{self, Write};

/// Render the add-employee form, marking each field as mandatory and
/// showing its error below it.
///
pub fn add_employee(out: &mut dyn Write, state: &State) -> io::Result<()> {
    let form = state.get_form();
    writeln!(out, "Add Employee")?;
    for name in FieldName::ALL {
        let field = form.field(name);
        writeln!(out, "  {} *: {}", name.label(), field.value)?;
        if field.has_error() {
            writeln!(out, "    {}", field.error)?;
        }
    }
    Ok(())
}
