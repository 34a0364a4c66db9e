//! 账户草稿（用户正在填写、尚未提交的注册信息）

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// In-progress registration input, keyed by field name.
///
/// Lives only as long as the sign-up screen that owns it; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDraft {
    values: BTreeMap<String, String>,
}

impl AccountDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole value of a field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Current value, `None` if the user never touched the field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Whether the field holds a non-empty value.
    ///
    /// Whitespace counts as content; trimming happens when the payload is built.
    pub fn is_filled(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// Append one typed character.
    pub fn push_char(&mut self, field: &str, ch: char) {
        self.values.entry(field.to_string()).or_default().push(ch);
    }

    /// Remove the last character (Backspace).
    pub fn pop_char(&mut self, field: &str) {
        if let Some(value) = self.values.get_mut(field) {
            value.pop();
        }
    }

    /// Empty a single field.
    pub fn clear_field(&mut self, field: &str) {
        self.values.remove(field);
    }

    /// Discard everything.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AccountDraft {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut draft = Self::new();
        for (k, v) in iter {
            draft.set(k, v);
        }
        draft
    }
}
