//! HTTP implementation of [`AccountApi`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{ApiError, Result};
use crate::http_client::{HttpUtils, parse_base_url};
use crate::traits::AccountApi;
use crate::types::{ApiResponse, Endpoint, Payload};
use crate::utils::log_sanitizer::describe_payload;

/// Registration API over HTTP.
///
/// Payloads are posted as `multipart/form-data`, the encoding the TPM
/// REST service expects for account creation.
#[derive(Debug)]
pub struct HttpAccountApi {
    client: Client,
    base_url: Url,
}

impl HttpAccountApi {
    /// Create a client for `base_url`.
    ///
    /// `timeout` bounds the whole request; `None` waits until the server
    /// settles.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::NetworkError {
            detail: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl AccountApi for HttpAccountApi {
    async fn submit_account(&self, endpoint: Endpoint, payload: &Payload) -> Result<ApiResponse> {
        let url = HttpUtils::endpoint_url(&self.base_url, endpoint)?;
        log::debug!("[api] {endpoint} payload: {}", describe_payload(payload));

        let request = self
            .client
            .post(url.clone())
            .multipart(HttpUtils::multipart_form(payload));

        let (status, text) = HttpUtils::execute_request(request, "POST", url.as_str()).await?;
        Ok(ApiResponse::from_text(status, &text))
    }
}

/// Creates an [`AccountApi`] backed by HTTP, shared behind an `Arc`.
///
/// # Examples
///
/// ```rust,no_run
/// use tpm_api::create_client;
///
/// let api = create_client("http://127.0.0.1:8000", None).unwrap();
/// ```
pub fn create_client(base_url: &str, timeout: Option<Duration>) -> Result<Arc<dyn AccountApi>> {
    Ok(Arc::new(HttpAccountApi::new(base_url, timeout)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_base_url() {
        let result = HttpAccountApi::new("::nope::", None);
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }

    #[test]
    fn new_keeps_base_url() {
        let api = HttpAccountApi::new("http://localhost:8000", Some(Duration::from_secs(5)))
            .unwrap();
        assert_eq!(api.base_url().port(), Some(8000));
    }
}
