//! 提交载荷构建

use crate::types::{AccountDraft, FieldSet, Payload};

/// Build the transmitted payload from a validated draft.
///
/// The confirmation-only field is dropped. Every other value is trimmed of
/// surrounding whitespace, except the password which is sent byte-identical.
/// The draft is left untouched.
pub fn build_payload(draft: &AccountDraft, fields: &FieldSet) -> Payload {
    draft
        .iter()
        .filter(|(name, _)| !fields.is_confirmation(name))
        .map(|(name, value)| {
            if fields.is_password(name) {
                (name, value)
            } else {
                (name, value.trim())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{complete_draft, student_fields};

    #[test]
    fn drops_confirmation_and_trims_others() {
        let draft: AccountDraft = [
            ("key", " 2051052001 "),
            ("email", "  a@ou.edu.vn\t"),
            ("password", " p@ss "),
            ("confirm", " p@ss "),
        ]
        .into_iter()
        .collect();

        let payload = build_payload(&draft, &student_fields());

        assert_eq!(payload.len(), 3);
        assert!(!payload.contains("confirm"));
        assert_eq!(payload.get("key"), Some("2051052001"));
        assert_eq!(payload.get("email"), Some("a@ou.edu.vn"));
        assert_eq!(payload.get("password"), Some(" p@ss "));
    }

    #[test]
    fn does_not_mutate_and_is_idempotent() {
        let draft = complete_draft();
        let before = draft.clone();
        let fields = student_fields();

        let first = build_payload(&draft, &fields);
        let second = build_payload(&draft, &fields);

        assert_eq!(first, second);
        assert_eq!(draft, before);
    }

    #[test]
    fn extra_draft_entries_are_carried() {
        let mut draft = complete_draft();
        draft.set("nickname", "  tí  ");
        let payload = build_payload(&draft, &student_fields());
        assert_eq!(payload.get("nickname"), Some("tí"));
    }
}
