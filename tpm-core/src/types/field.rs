//! 注册表单字段定义

use serde::{Deserialize, Serialize};

/// A required input of the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Key in the draft and in the payload
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: String,
    /// Placeholder shown while the field is empty
    #[serde(default)]
    pub placeholder: String,
    /// Message shown when the field is left empty
    pub error_message: String,
    /// Whether the value is masked on screen
    #[serde(default)]
    pub secret: bool,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            placeholder: String::new(),
            error_message: error_message.into(),
            secret: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Equality constraint between the confirmation field and the field it repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRule {
    /// Confirmation-only field, never transmitted
    pub field: String,
    /// Field it must equal; its value is transmitted untrimmed
    pub matches: String,
    /// Message shown when the two differ
    pub message: String,
}

impl ConfirmationRule {
    pub fn new(
        field: impl Into<String>,
        matches: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            matches: matches.into(),
            message: message.into(),
        }
    }
}

/// Ordered field definitions plus the confirmation relationship.
///
/// Validation walks `fields` in order; the first empty one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    fields: Vec<FieldDefinition>,
    confirmation: ConfirmationRule,
}

impl FieldSet {
    pub fn new(fields: Vec<FieldDefinition>, confirmation: ConfirmationRule) -> Self {
        Self {
            fields,
            confirmation,
        }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn confirmation(&self) -> &ConfirmationRule {
        &self.confirmation
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FieldDefinition> {
        self.fields.get(index)
    }

    /// Index of a field by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Whether `name` is the confirmation-only field.
    pub fn is_confirmation(&self, name: &str) -> bool {
        self.confirmation.field == name
    }

    /// Whether `name` is the password field (sent byte-identical).
    pub fn is_password(&self, name: &str) -> bool {
        self.confirmation.matches == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_set() -> FieldSet {
        FieldSet::new(
            vec![
                FieldDefinition::new("email", "Email is required"),
                FieldDefinition::new("password", "Password is required").secret(),
                FieldDefinition::new("confirm", "Please confirm").secret(),
            ],
            ConfirmationRule::new("confirm", "password", "Passwords do not match"),
        )
    }

    #[test]
    fn lookup_by_name() {
        let set = field_set();
        assert_eq!(set.position("password"), Some(1));
        assert_eq!(set.position("nope"), None);
        assert!(set.is_confirmation("confirm"));
        assert!(set.is_password("password"));
        assert!(!set.is_password("confirm"));
    }

    #[test]
    fn deserializes_from_config_json() {
        let json = r#"{
            "fields": [
                {"name": "email", "label": "Email", "errorMessage": "Vui lòng nhập email"},
                {"name": "password", "errorMessage": "Vui lòng nhập mật khẩu", "secret": true}
            ],
            "confirmation": {"field": "confirm", "matches": "password", "message": "Mật khẩu không khớp"}
        }"#;
        let set: FieldSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.fields()[0].error_message, "Vui lòng nhập email");
        assert!(set.fields()[1].secret);
        assert_eq!(set.fields()[1].label, "");
        assert_eq!(set.confirmation().message, "Mật khẩu không khớp");
    }
}
