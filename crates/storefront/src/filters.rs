//! Custom Askama template filters.

use std::fmt::Display;

use unicode_width::UnicodeWidthStr;

/// Terminal column at which long chat replies and FAQ answers are wrapped.
pub const WRAP_WIDTH: usize = 72;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Local::now().year())
}

/// Word-wraps the value at [`WRAP_WIDTH`] columns.
///
/// Usage in templates: `{{ entry.answer|wrap }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn wrap(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(wrap_text(&value.to_string(), WRAP_WIDTH))
}

/// Indents every line of the value by four spaces.
///
/// Usage in templates: `{{ message.text|wrap|pad_lines }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn pad_lines(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(pad_text(&value.to_string(), "    "))
}

/// Wraps on display width, so wide glyphs count as two columns.
fn wrap_text(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut column = 0;
        for word in line.split_whitespace() {
            let len = UnicodeWidthStr::width(word);
            if column > 0 && column + 1 + len > width {
                out.push('\n');
                column = 0;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            }
            out.push_str(word);
            column += len;
        }
    }
    out
}

fn pad_text(text: &str, pad: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_words() {
        let wrapped = wrap_text("один два три четыре", 9);
        assert_eq!(wrapped, "один два\nтри\nчетыре");
    }

    #[test]
    fn test_wrap_keeps_existing_breaks() {
        let wrapped = wrap_text("Привет!\nКак дела?", WRAP_WIDTH);
        assert_eq!(wrapped, "Привет!\nКак дела?");
    }

    #[test]
    fn test_wrap_measures_display_width() {
        let text = ["商品"; 30].join(" ");
        let wrapped = wrap_text(&text, WRAP_WIDTH);
        for line in wrapped.lines() {
            assert!(UnicodeWidthStr::width(line) <= WRAP_WIDTH, "{line:?}");
        }
        assert_eq!(wrapped.lines().next().unwrap().split(' ').count(), 14);
        assert_eq!(wrapped.lines().count(), 3);
    }

    #[test]
    fn test_wrap_long_word_not_split() {
        let wrapped = wrap_text("support@levelup-market.ru", 5);
        assert_eq!(wrapped, "support@levelup-market.ru");
    }

    #[test]
    fn test_pad_skips_blank_lines() {
        assert_eq!(pad_text("a\n\nb", "  "), "  a\n\n  b");
    }
}
