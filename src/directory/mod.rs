mod client;
mod error;
mod resource;

pub use error::DirectoryError;
pub use resource::*;

use crate::config::Config;
use client::Client;
use log::*;

/// Collection holding the employee records.
const COLLECTION: &str = "employee_dir";

/// Responsible for asynchronous interaction with the directory API including
/// transformation of response data into explicitly-defined types.
///
pub struct Directory {
    client: Client,
}

impl Directory {
    /// Returns a new instance for the API described by the configuration.
    ///
    pub fn new(config: &Config) -> Directory {
        debug!(
            "Initializing directory client for {} (project {}, environment {})...",
            config.base_url, config.project_id, config.environment_id
        );
        Directory {
            client: Client::new(&config.base_url, &config.project_id, &config.environment_id),
        }
    }

    /// Returns one page of employees starting at the given offset.
    ///
    pub async fn employees(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<EmployeePage, DirectoryError> {
        debug!(
            "Requesting employees (offset {}, limit {})...",
            offset, limit
        );
        let page: EmployeePage = self
            .client
            .get(
                &[COLLECTION],
                Some(vec![("offset", offset.to_string()), ("limit", limit.to_string())]),
            )
            .await?;
        debug!(
            "Retrieved {} employees (directory total {:?})",
            page.data.len(),
            page.total()
        );
        Ok(page)
    }

    /// Returns the employee with the given identifier.
    ///
    pub async fn employee(&self, id: &str) -> Result<Employee, DirectoryError> {
        debug!("Requesting employee {}...", id);
        match self.client.get::<Employee>(&[COLLECTION, id], None).await {
            Err(DirectoryError::ApiError { status: 404, .. }) => {
                Err(DirectoryError::EmployeeNotFound { id: id.to_owned() })
            }
            result => result,
        }
    }

    /// Submit a new employee and return the raw response body.
    ///
    pub async fn create_employee(
        &self,
        employee: &Employee,
    ) -> Result<serde_json::Value, DirectoryError> {
        debug!("Creating employee '{}'...", employee.full_name());
        let body = serde_json::to_value(employee)?;
        self.client.post(&[COLLECTION], body).await
    }
}
