//! Generic HTTP client tools
//!
//! Request execution, logging and URL handling shared by the HTTP
//! [`AccountApi`](crate::AccountApi) implementation.
//!
//! # design principles
//! - **Every response is returned** - status interpretation belongs to the caller
//! - **Only transport failures become errors** - connection refused, timeouts, unreadable bodies
//! - **No automatic retries** - account creation is not idempotent

use reqwest::RequestBuilder;
use reqwest::multipart::Form;
use url::Url;

use crate::error::{ApiError, Result};
use crate::types::{Endpoint, Payload};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "POST", used for logs)
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - the server answered, any status
    /// * `Err(ApiError::Timeout | ApiError::NetworkError)` - no answer
    /// * `Err(ApiError::BodyReadError)` - the body could not be read
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[api] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[api] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::BodyReadError {
                detail: e.to_string(),
            })?;

        log::debug!("[api] Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Resolve an endpoint against the API base URL.
    ///
    /// The endpoint path is appended to the base path, so a base such as
    /// `https://host/api` keeps its `/api` prefix.
    pub fn endpoint_url(base_url: &Url, endpoint: Endpoint) -> Result<Url> {
        let joined = format!(
            "{}{}",
            base_url.as_str().trim_end_matches('/'),
            endpoint.path()
        );
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl {
            url: joined.clone(),
            detail: e.to_string(),
        })
    }

    /// Encode a payload as `multipart/form-data`, one text part per field.
    pub fn multipart_form(payload: &Payload) -> Form {
        payload.iter().fold(Form::new(), |form, (name, value)| {
            form.text(name.to_string(), value.to_string())
        })
    }
}

/// Parse a base URL from configuration.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    Url::parse(base_url.trim()).map_err(|e| ApiError::InvalidUrl {
        url: base_url.to_string(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_without_trailing_slash() {
        let base = parse_base_url("http://127.0.0.1:8000").unwrap();
        let url = HttpUtils::endpoint_url(&base, Endpoint::StudentRegister).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/accounts/student-register/"
        );
    }

    #[test]
    fn endpoint_url_keeps_base_path() {
        let base = parse_base_url("https://tpm.example.edu/api/").unwrap();
        let url = HttpUtils::endpoint_url(&base, Endpoint::StudentRegister).unwrap();
        assert_eq!(
            url.as_str(),
            "https://tpm.example.edu/api/accounts/student-register/"
        );
    }

    #[test]
    fn parse_base_url_rejects_garbage() {
        let result = parse_base_url("not a url");
        assert!(
            matches!(&result, Err(ApiError::InvalidUrl { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_base_url_trims_whitespace() {
        let url = parse_base_url("  http://localhost:8000  ").unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
    }
}
