use chrono::{Datelike, NaiveDate};
use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Date format used by the directory for joining dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Defines postal address data structure.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub state: String,
}

/// Defines contact method data structure.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMethods {
    pub email: String,
    pub phone: String,
}

/// Defines employee data structure, both as listed by the directory and as
/// submitted when adding an employee.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "emp_id", skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub date_of_joining: String, // DD-MM-YYYY
    pub address: Address,
    pub contact_methods: ContactMethods,
}

impl Employee {
    /// Return first and last name separated by a space.
    ///
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Return the address as a single line, skipping empty parts.
    ///
    pub fn formatted_address(&self) -> String {
        [
            self.address.line1.as_str(),
            self.address.city.as_str(),
            self.address.state.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Return the parsed joining date, if it is well formed.
    ///
    pub fn joined_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_of_joining.trim(), DATE_FORMAT).ok()
    }

    /// Return a tenure line such as "Employee since 12th Jan, 2021".
    ///
    pub fn employee_since(&self) -> Option<String> {
        let date = self.joined_on()?;
        let day = date.day();
        let suffix = match (day % 10, day % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        Some(format!(
            "Employee since {}{} {}",
            day,
            suffix,
            date.format("%b, %Y")
        ))
    }

    /// Return the key/value rows of the details view in display order.
    ///
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.full_name()),
            ("Address", self.formatted_address()),
            ("Department", self.department.clone()),
            ("Date of Joining", self.date_of_joining.clone()),
            ("Email", self.contact_methods.email.clone()),
            ("Phone", self.contact_methods.phone.clone()),
        ]
    }
}

/// Defines pagination metadata returned with a list of employees. Only the
/// directory size is kept; the echoed offset and limit are ignored.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub total: Option<usize>,
}

/// Defines the list response of the employee collection.
///
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployeePage {
    pub data: Vec<Employee>,
    pub page: Option<PageInfo>,
}

impl EmployeePage {
    /// Return the number of employees in the whole directory, if reported.
    ///
    pub fn total(&self) -> Option<usize> {
        self.page.as_ref().and_then(|page| page.total)
    }
}
