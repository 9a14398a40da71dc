//! # Styled Select
//!
//! 네이티브 `<select>` 마크업과 옵션 하이라이트 스타일시트를 제공합니다.
//!
//! 색상은 요소 자체의 CSS 커스텀 프로퍼티로 지정되고, 하이라이트 규칙은
//! 정적 스타일시트 [`SELECT_STYLESHEET`] 하나에만 존재합니다. 스타일시트는
//! `GET /ui/select.css`로 제공되므로 렌더링 횟수와 무관하게 규칙이 중복되지 않습니다.
//!
//! ```rust,ignore
//! use crate::ui::select::{render_select, SelectOption, SelectProps};
//!
//! let html = render_select(&SelectProps {
//!     name: "language".to_string(),
//!     options: vec![SelectOption::new("rust", "Rust"), SelectOption::new("go", "Go")],
//!     selected: Some("rust".to_string()),
//!     ..SelectProps::default()
//! });
//! ```

use std::fmt::Write as _;

/// 알 수 없는 색상 토큰의 대체 색상
pub const FALLBACK_COLOR: &str = "#ffffff";

/// 셀렉트 컴포넌트의 루트 클래스
pub const SELECT_CLASS: &str = "styled-select";

/// 옵션 하이라이트 규칙
pub const SELECT_STYLESHEET: &str = r#".styled-select {
  background-color: var(--select-option-bg);
  color: var(--select-option-text);
}
.styled-select option {
  background-color: var(--select-option-bg);
  color: var(--select-option-text);
}
.styled-select option:checked,
.styled-select option:hover {
  background-color: var(--select-active-bg);
  color: var(--select-active-text);
}
"#;

/// 색상 토큰을 실제 색상 값으로 변환합니다.
///
/// | 토큰 | 색상 |
/// |------|------|
/// | `primary` | `#2563eb` |
/// | `secondary` | `#64748b` |
/// | `dark` | `#1f2937` |
/// | `light` | `#f9fafb` |
/// | 그 외 | [`FALLBACK_COLOR`] |
pub fn resolve_color(token: &str) -> &'static str {
    match token.trim().to_ascii_lowercase().as_str() {
        "primary" => "#2563eb",
        "secondary" => "#64748b",
        "dark" => "#1f2937",
        "light" => "#f9fafb",
        _ => FALLBACK_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// 셀렉트 렌더링 속성
///
/// 색상 필드는 토큰 이름이며 [`resolve_color`]로 변환됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectProps {
    pub name: String,
    pub options: Vec<SelectOption>,
    pub selected: Option<String>,
    pub disabled: bool,
    pub option_bg: String,
    pub option_text: String,
    pub active_bg: String,
    pub active_text: String,
}

impl Default for SelectProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            options: Vec::new(),
            selected: None,
            disabled: false,
            option_bg: "light".to_string(),
            option_text: "dark".to_string(),
            active_bg: "primary".to_string(),
            active_text: "light".to_string(),
        }
    }
}

/// `<select>` 마크업을 생성합니다.
pub fn render_select(props: &SelectProps) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<select class="{}" name="{}" style="--select-option-bg: {}; --select-option-text: {}; --select-active-bg: {}; --select-active-text: {};""#,
        SELECT_CLASS,
        escape_html(&props.name),
        resolve_color(&props.option_bg),
        resolve_color(&props.option_text),
        resolve_color(&props.active_bg),
        resolve_color(&props.active_text),
    );
    if props.disabled {
        html.push_str(" disabled");
    }
    html.push('>');

    for option in &props.options {
        let selected = props.selected.as_deref() == Some(option.value.as_str());
        let _ = write!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            escape_html(&option.value),
            if selected { " selected" } else { "" },
            escape_html(&option.label),
        );
    }

    html.push_str("</select>");
    html
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens_resolve() {
        assert_eq!(resolve_color("primary"), "#2563eb");
        assert_eq!(resolve_color("secondary"), "#64748b");
        assert_eq!(resolve_color("dark"), "#1f2937");
        assert_eq!(resolve_color("light"), "#f9fafb");
        assert_eq!(resolve_color("  Primary "), "#2563eb");
    }

    #[test]
    fn test_unknown_token_falls_back() {
        assert_eq!(resolve_color("chartreuse"), FALLBACK_COLOR);
        assert_eq!(resolve_color(""), FALLBACK_COLOR);
    }

    #[test]
    fn test_render_marks_selected_option() {
        let html = render_select(&SelectProps {
            name: "lang".to_string(),
            options: vec![SelectOption::new("rust", "Rust"), SelectOption::new("go", "Go")],
            selected: Some("go".to_string()),
            ..SelectProps::default()
        });

        assert!(html.starts_with(r#"<select class="styled-select" name="lang""#));
        assert!(html.contains(r#"<option value="rust">Rust</option>"#));
        assert!(html.contains(r#"<option value="go" selected>Go</option>"#));
        assert!(html.ends_with("</select>"));
    }

    #[test]
    fn test_render_binds_resolved_colors() {
        let html = render_select(&SelectProps {
            active_bg: "dark".to_string(),
            option_bg: "mystery".to_string(),
            ..SelectProps::default()
        });

        assert!(html.contains("--select-active-bg: #1f2937;"));
        assert!(html.contains("--select-option-bg: #ffffff;"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let html = render_select(&SelectProps {
            name: "x\"><script>".to_string(),
            options: vec![SelectOption::new("a&b", "<b>bold</b>")],
            ..SelectProps::default()
        });

        assert!(!html.contains("<script>"));
        assert!(html.contains("x&quot;&gt;&lt;script&gt;"));
        assert!(html.contains(r#"<option value="a&amp;b">&lt;b&gt;bold&lt;/b&gt;</option>"#));
    }

    #[test]
    fn test_render_does_not_embed_style_rules() {
        let first = render_select(&SelectProps::default());
        let second = render_select(&SelectProps::default());

        assert_eq!(first, second);
        assert!(!first.contains("<style"));
    }

    #[test]
    fn test_disabled_attribute() {
        let html = render_select(&SelectProps {
            disabled: true,
            ..SelectProps::default()
        });
        assert!(html.contains(" disabled>"));
    }
}
