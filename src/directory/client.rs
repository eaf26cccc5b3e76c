//! HTTP client for employee directory API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the hosted directory API, handling the tenant headers, status checks,
//! and response parsing.

use super::DirectoryError;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;

/// Makes requests to the directory and tries to conform response data to the
/// requested type.
///
pub struct Client {
    base_url: String,
    project_id: String,
    environment_id: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and tenant identifiers.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str, project_id: &str, environment_id: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            project_id: project_id.to_owned(),
            environment_id: environment_id.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Return the decoded body of a GET request. Each path segment is
    /// percent-encoded, so identifiers cannot address another endpoint.
    ///
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: Option<Vec<(&str, String)>>,
    ) -> Result<T, DirectoryError> {
        let response = self.call(Method::GET, segments, params, None).await?;
        Self::decode(response).await
    }

    /// Send a JSON body with a POST request and return the decoded response.
    ///
    pub async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: serde_json::Value,
    ) -> Result<T, DirectoryError> {
        let response = self.call(Method::POST, segments, None, Some(body)).await?;
        Self::decode(response).await
    }

    /// Make request with optional query parameters and body, and return the
    /// response if its status is successful.
    ///
    async fn call(
        &self,
        method: Method,
        segments: &[&str],
        params: Option<Vec<(&str, String)>>,
        body: Option<serde_json::Value>,
    ) -> Result<Response, DirectoryError> {
        let request_url = self.url(segments)?;
        log::trace!("{} {}", method, request_url);

        let mut request = self
            .http_client
            .request(method, request_url)
            .headers(self.tenant_headers());

        if let Some(params) = params {
            request = request.query(&params);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("API request failed with status {}: {}", status, message);
            return Err(DirectoryError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Append the segments to the base URL.
    ///
    fn url(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DirectoryError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| DirectoryError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Headers identifying the project and environment of the directory.
    ///
    fn tenant_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        match HeaderValue::from_str(&self.project_id) {
            Ok(value) => {
                headers.insert("projectid", value);
            }
            Err(e) => log::warn!("Skipping invalid projectId header: {}", e),
        }
        match HeaderValue::from_str(&self.environment_id) {
            Ok(value) => {
                headers.insert("environmentid", value);
            }
            Err(e) => log::warn!("Skipping invalid environmentId header: {}", e),
        }
        headers
    }

    /// Deserialize the response body, logging it if it does not conform.
    ///
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DirectoryError> {
        let response_bytes = response.bytes().await?;
        serde_json::from_slice::<T>(&response_bytes).map_err(|e| {
            log::error!(
                "Failed to deserialize API response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            DirectoryError::Deserialization(e)
        })
    }
}
