//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 默认语言为越南语，与 TPM 服务端返回的错误信息保持一致。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod vi_vn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 越南语
    #[default]
    ViVn,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::ViVn, Language::EnUs]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::ViVn => "Tiếng Việt",
            Language::EnUs => "English",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::ViVn => "vi-VN",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "vi-VN" | "vi" => Some(Language::ViVn),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// 该语言的翻译表
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::ViVn => &vi_vn::TRANSLATIONS,
            Language::EnUs => &en_us::TRANSLATIONS,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::ViVn => 0,
            Language::EnUs => 1,
        }
    }

    fn from_index(index: usize) -> Language {
        match index {
            1 => Language::EnUs,
            _ => Language::ViVn,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = ViVn

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    current_language().translations()
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    Language::from_index(CURRENT_LANGUAGE.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("vi"), Some(Language::ViVn));
        assert_eq!(Language::from_code("zh-CN"), None);
    }

    #[test]
    fn next_cycles_through_all() {
        let start = Language::default();
        let mut lang = start;
        for _ in Language::all() {
            lang = lang.next();
        }
        assert_eq!(lang, start);
    }

    #[test]
    fn vietnamese_matches_server_wording() {
        let vi = Language::ViVn.translations();
        assert_eq!(vi.fields.password_mismatch, "Mật khẩu không khớp");
        assert_eq!(vi.modal.sign_up_success.title, "Đăng ký thành công");
        assert_eq!(vi.modal.sign_up_success.message, "Chuyển sang đăng nhập?");
    }

    #[test]
    fn tables_have_same_shortcut_count() {
        assert_eq!(
            Language::ViVn.translations().modal.help.shortcuts.len(),
            Language::EnUs.translations().modal.help.shortcuts.len()
        );
    }
}
