//! 文本宽度工具

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 保留末尾能放进 `width` 列的部分
///
/// 输入框里光标总在末尾，超长时显示最后输入的内容。
pub fn tail_fit(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
