//! 越南语翻译 (vi-VN)

use super::keys::{
    ActionTexts, CommonTexts, FieldTexts, HelpTexts, HintTexts, KeyNames, ModalTexts,
    SignInTexts, SignUpSuccessTexts, SignUpTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "TPM - Điểm rèn luyện sinh viên",
        loading: "Đang xử lý...",
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
            next_field: "Chuyển ô",
            submit: "Đăng ký",
            show_secrets: "Hiện mật khẩu",
            sign_in: "Đăng nhập",
            sign_up: "Đăng ký",
            language: "Ngôn ngữ",
            theme: "Giao diện",
            help: "Trợ giúp",
            quit: "Thoát",
            choose: "Chọn",
            confirm: "Xác nhận",
            close: "Đóng",
        },
    },

    // ========================================================================
    // 页面
    // ========================================================================
    sign_up: SignUpTexts {
        title: "Đăng ký",
        subtitle: "Đăng ký để sử dụng hệ thống điểm rèn luyện sinh viên",
        submit: "Đăng ký",
        footer_prompt: "Đã có tài khoản?",
        footer_link: "Đăng nhập",
    },

    fields: FieldTexts {
        student_id: "Mã số sinh viên",
        student_id_hint: "Nhập mã số sinh viên",
        student_id_required: "Vui lòng nhập mã số sinh viên",
        email: "Email",
        email_hint: "Nhập email sinh viên",
        email_required: "Vui lòng nhập email",
        password: "Mật khẩu",
        password_hint: "Nhập mật khẩu",
        password_required: "Vui lòng nhập mật khẩu",
        confirm: "Xác nhận mật khẩu",
        confirm_hint: "Nhập lại mật khẩu",
        confirm_required: "Vui lòng xác nhận mật khẩu",
        password_mismatch: "Mật khẩu không khớp",
    },

    sign_in: SignInTexts {
        title: "Đăng nhập",
        subtitle: "Đăng nhập để sử dụng hệ thống điểm rèn luyện sinh viên",
        footer_prompt: "Chưa có tài khoản?",
        footer_link: "Đăng ký",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        sign_up_success: SignUpSuccessTexts {
            title: "Đăng ký thành công",
            message: "Chuyển sang đăng nhập?",
            go_to_sign_in: "Đăng nhập",
            cancel: "Hủy",
        },
        help: HelpTexts {
            title: "Phím tắt",
            shortcuts: &[
                ("Tab / ↓", "Ô tiếp theo"),
                ("Shift+Tab / ↑", "Ô trước"),
                ("Enter", "Ô tiếp theo / Đăng ký"),
                ("Alt+S", "Đăng ký"),
                ("Alt+V", "Hiện / ẩn mật khẩu"),
                ("Alt+L", "Đăng nhập"),
                ("Alt+G", "Đổi ngôn ngữ"),
                ("Alt+T", "Đổi giao diện"),
                ("Alt+Q / Ctrl+C", "Thoát"),
            ],
        },
    },

    status_bar: StatusBarTexts {
        submitting: "Đang gửi đăng ký...",
        try_again: "Không thể đăng ký lúc này, vui lòng thử lại sau",
        language_changed: "Đã đổi ngôn ngữ",
        theme_changed: "Đã đổi giao diện",
    },
};
