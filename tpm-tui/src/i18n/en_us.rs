//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, FieldTexts, HelpTexts, HintTexts, KeyNames, ModalTexts,
    SignInTexts, SignUpSuccessTexts, SignUpTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "TPM - Student Training Points",
        loading: "Working...",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
        },
        actions: ActionTexts {
            next_field: "Next field",
            submit: "Sign up",
            show_secrets: "Show password",
            sign_in: "Sign in",
            sign_up: "Sign up",
            language: "Language",
            theme: "Theme",
            help: "Help",
            quit: "Quit",
            choose: "Choose",
            confirm: "Confirm",
            close: "Close",
        },
    },

    // ========================================================================
    // 页面
    // ========================================================================
    sign_up: SignUpTexts {
        title: "Sign up",
        subtitle: "Create an account for the student training-point system",
        submit: "Sign up",
        footer_prompt: "Already have an account?",
        footer_link: "Sign in",
    },

    fields: FieldTexts {
        student_id: "Student ID",
        student_id_hint: "Enter your student ID",
        student_id_required: "Please enter your student ID",
        email: "Email",
        email_hint: "Enter your student email",
        email_required: "Please enter your email",
        password: "Password",
        password_hint: "Enter a password",
        password_required: "Please enter a password",
        confirm: "Confirm password",
        confirm_hint: "Repeat the password",
        confirm_required: "Please confirm your password",
        password_mismatch: "Passwords do not match",
    },

    sign_in: SignInTexts {
        title: "Sign in",
        subtitle: "Sign in to the student training-point system",
        footer_prompt: "No account yet?",
        footer_link: "Sign up",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        sign_up_success: SignUpSuccessTexts {
            title: "Registration successful",
            message: "Go to sign in?",
            go_to_sign_in: "Sign in",
            cancel: "Cancel",
        },
        help: HelpTexts {
            title: "Shortcuts",
            shortcuts: &[
                ("Tab / ↓", "Next field"),
                ("Shift+Tab / ↑", "Previous field"),
                ("Enter", "Next field / Sign up"),
                ("Alt+S", "Sign up"),
                ("Alt+V", "Show / hide password"),
                ("Alt+L", "Sign in"),
                ("Alt+G", "Switch language"),
                ("Alt+T", "Switch theme"),
                ("Alt+Q / Ctrl+C", "Quit"),
            ],
        },
    },

    status_bar: StatusBarTexts {
        submitting: "Submitting registration...",
        try_again: "Registration is unavailable right now, please try again later",
        language_changed: "Language switched",
        theme_changed: "Theme switched",
    },
};
