//! 字段校验

use crate::types::{AccountDraft, FieldSet, ValidationFailure};

/// Find the first reason the draft cannot be submitted.
///
/// Required fields are checked in definition order and the first empty one
/// wins. The confirmation rule is only consulted once every field is present.
pub fn first_failure(draft: &AccountDraft, fields: &FieldSet) -> Option<ValidationFailure> {
    if let Some(missing) = fields.fields().iter().find(|f| !draft.is_filled(&f.name)) {
        return Some(ValidationFailure::MissingField {
            field: missing.name.clone(),
            message: missing.error_message.clone(),
        });
    }

    let rule = fields.confirmation();
    let expected = draft.get(&rule.matches).unwrap_or_default();
    let repeated = draft.get(&rule.field).unwrap_or_default();
    // exact comparison, no trimming
    if expected != repeated {
        return Some(ValidationFailure::ConfirmationMismatch {
            field: rule.field.clone(),
            message: rule.message.clone(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{complete_draft, student_fields};

    #[test]
    fn complete_draft_passes() {
        assert_eq!(first_failure(&complete_draft(), &student_fields()), None);
    }

    #[test]
    fn each_missing_field_reports_its_own_message() {
        let fields = student_fields();
        for def in fields.fields() {
            let mut draft = complete_draft();
            draft.set(def.name.clone(), "");
            let failure = first_failure(&draft, &fields).unwrap();
            assert_eq!(
                failure,
                ValidationFailure::MissingField {
                    field: def.name.clone(),
                    message: def.error_message.clone(),
                }
            );
        }
    }

    #[test]
    fn absent_field_counts_as_missing() {
        let mut draft = complete_draft();
        draft.clear_field("email");
        let failure = first_failure(&draft, &student_fields()).unwrap();
        assert_eq!(failure.field(), "email");
    }

    #[test]
    fn first_missing_field_wins() {
        let fields = student_fields();
        let draft: AccountDraft = [("password", "x"), ("confirm", "y")].into_iter().collect();
        let failure = first_failure(&draft, &fields).unwrap();
        assert_eq!(failure.field(), fields.fields()[0].name);
    }

    #[test]
    fn missing_field_takes_precedence_over_mismatch() {
        let mut draft = complete_draft();
        draft.set("confirm", "different");
        draft.set("email", "");
        let failure = first_failure(&draft, &student_fields()).unwrap();
        assert!(matches!(failure, ValidationFailure::MissingField { .. }));
    }

    #[test]
    fn mismatch_reports_fixed_message() {
        let mut draft = complete_draft();
        draft.set("password", "abc");
        draft.set("confirm", "abd");
        let failure = first_failure(&draft, &student_fields()).unwrap();
        assert_eq!(
            failure,
            ValidationFailure::ConfirmationMismatch {
                field: "confirm".into(),
                message: "Mật khẩu không khớp".into(),
            }
        );
    }

    #[test]
    fn whitespace_difference_is_a_mismatch() {
        let mut draft = complete_draft();
        draft.set("password", "abc ");
        draft.set("confirm", "abc");
        assert!(matches!(
            first_failure(&draft, &student_fields()),
            Some(ValidationFailure::ConfirmationMismatch { .. })
        ));
    }
}
