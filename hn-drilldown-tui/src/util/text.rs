//! 文本处理
//!
//! 条目正文是 HTML 片段（`<p>`、`<a>`、`<i>`、`<pre><code>` 与实体）。
//! 终端中只显示纯文本：段落变为换行，标签去掉，实体解码。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 将 HTML 片段转换为纯文本
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('>') else {
            // 未闭合的 `<` 按原文保留
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let tag = &rest[start + 1..start + len];
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if matches!(name.as_str(), "p" | "br") && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);

    html_escape::decode_html_entities(&out).into_owned()
}

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// 按显示宽度折行，至多 `max_rows` 行
///
/// 空行被跳过；超出行数时最后一行以 `…` 结尾。过长的单词按字符切开。
pub fn wrap_to_width(text: &str, max_width: usize, max_rows: usize) -> Vec<String> {
    if max_width == 0 || max_rows == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for paragraph in text.lines() {
        let mut row = String::new();
        let mut width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!row.is_empty());
            if width + sep + word_width <= max_width {
                if sep == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                width += sep + word_width;
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if width + ch_width > max_width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    width = 0;
                }
                row.push(ch);
                width += ch_width;
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    if rows.len() > max_rows {
        rows.truncate(max_rows);
        if let Some(last) = rows.pop() {
            let mut last = truncate_to_width(&last, max_width - 1);
            if !last.ends_with('…') {
                last.push('…');
            }
            rows.push(last);
        }
    }
    rows
}
