//! Wire types shared by every [`AccountApi`](crate::AccountApi) implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP status codes the registration flow distinguishes.
pub mod status_code {
    /// Account created.
    pub const HTTP_201_CREATED: u16 = 201;
    /// Request rejected by server-side validation.
    pub const HTTP_400_BAD_REQUEST: u16 = 400;
}

/// Remote endpoints known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    /// Student self-registration.
    StudentRegister,
}

impl Endpoint {
    /// Stable identifier used in logs and configuration.
    pub fn key(self) -> &'static str {
        match self {
            Self::StudentRegister => "student-register",
        }
    }

    /// Path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::StudentRegister => "/accounts/student-register/",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Form fields ready for transmission.
///
/// Keys are field names; order is not significant, a `BTreeMap` keeps
/// logs and comparisons deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A response that made it back from the server, whatever its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Parsed JSON body; `None` when the body was empty or not JSON.
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Build a response from raw body text, keeping the JSON only if it parses.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(text).ok()
        };
        Self { status, body }
    }

    pub fn is_created(&self) -> bool {
        self.status == status_code::HTTP_201_CREATED
    }

    pub fn is_bad_request(&self) -> bool {
        self.status == status_code::HTTP_400_BAD_REQUEST
    }

    /// The server's `detail` message, if the body carries one.
    ///
    /// Accepts a plain string or a list of strings (joined with a space).
    pub fn detail(&self) -> Option<String> {
        match self.body.as_ref()?.get("detail")? {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(" "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_key_and_path() {
        assert_eq!(Endpoint::StudentRegister.key(), "student-register");
        assert_eq!(
            Endpoint::StudentRegister.path(),
            "/accounts/student-register/"
        );
        assert_eq!(Endpoint::StudentRegister.to_string(), "student-register");
    }

    #[test]
    fn payload_collects_and_looks_up() {
        let payload: Payload = [("email", "a@x.com"), ("password", " p ")]
            .into_iter()
            .collect();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("password"), Some(" p "));
        assert!(!payload.contains("confirm"));
    }

    #[test]
    fn from_text_keeps_json() {
        let resp = ApiResponse::from_text(400, r#"{"detail":"Email đã tồn tại"}"#);
        assert!(resp.is_bad_request());
        assert_eq!(resp.detail().as_deref(), Some("Email đã tồn tại"));
    }

    #[test]
    fn from_text_drops_non_json() {
        let resp = ApiResponse::from_text(500, "<html>oops</html>");
        assert_eq!(resp.body, None);
        assert_eq!(resp.detail(), None);
    }

    #[test]
    fn from_text_empty_body() {
        let resp = ApiResponse::from_text(201, "");
        assert!(resp.is_created());
        assert_eq!(resp.body, None);
    }

    #[test]
    fn detail_list_is_joined() {
        let resp = ApiResponse::new(400, Some(json!({"detail": ["a", "b"]})));
        assert_eq!(resp.detail().as_deref(), Some("a b"));
    }

    #[test]
    fn detail_of_wrong_type_is_none() {
        let resp = ApiResponse::new(400, Some(json!({"detail": 3})));
        assert_eq!(resp.detail(), None);
        let resp = ApiResponse::new(400, Some(json!({"message": "x"})));
        assert_eq!(resp.detail(), None);
    }
}
