use std::borrow::Cow;

use crate::value::Value;

pub const BG: &str = "#ebedf3";
pub const FG: &str = "#3f4e5c";
pub const WHITE: &str = "#f8f8f8";
pub const GRAY: &str = "#95a5a6";
pub const BLACK: &str = "#222222";
pub const RED: &str = "#e74c3c";
pub const GREEN: &str = "#27ae60";
pub const BLUE: &str = "#3498db";
pub const YELLOW: &str = "#f1c40f";
pub const ORANGE: &str = "#e67e22";
pub const PURPLE: &str = "#9b59b6";
pub const CYAN: &str = "#16a085";

pub const THEME_NAME: &str = "Flat Light";

/// Appends an alpha channel to a 6-digit hex color, turning `percent` of
/// full opacity into two lowercase hex digits.
///
/// The scaled value is truncated toward zero, so `dilute(c, 10)` yields
/// `..19` (25.5 -> 25), not `..1a`. Percentages outside 0..=100 are not
/// guarded and produce an out-of-range alpha byte.
pub fn dilute(color: &str, percent: u32) -> String {
    let scaled = (255.0 * (f64::from(percent) / 100.0)) as u32;
    format!("{color}{scaled:02x}")
}

/// One visual style: what a scope's tokens are painted with.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub foreground: String,
    pub background: Option<String>,
    pub font_style: Option<String>,
}

/// Builds a foreground-only [`Style`]. The keywords ("bold", "italic") are
/// joined with a single space; an empty list still sets an empty `fontStyle`
/// rather than leaving the field out.
pub fn style(color: &str, font_style: &[&str]) -> Style {
    Style {
        foreground: color.to_owned(),
        background: None,
        font_style: Some(font_style.join(" ")),
    }
}

impl From<&Style> for Value {
    fn from(style: &Style) -> Self {
        let mut entries: Vec<(Cow<'static, str>, Value)> = Vec::with_capacity(3);
        entries.push(("foreground".into(), style.foreground.clone().into()));
        if let Some(background) = &style.background {
            entries.push(("background".into(), background.clone().into()));
        }
        if let Some(font_style) = &style.font_style {
            entries.push(("fontStyle".into(), font_style.clone().into()));
        }
        Value::Dict(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dilute_endpoints() {
        assert_eq!(dilute(GRAY, 0), "#95a5a600");
        assert_eq!(dilute(GRAY, 100), "#95a5a6ff");
    }

    #[test]
    fn dilute_truncates_toward_zero() {
        assert_eq!(dilute(BLACK, 10), "#22222219");
        assert_eq!(dilute(BLACK, 25), "#2222223f");
        assert_eq!(dilute(GREEN, 6), "#27ae600f");
        assert_eq!(dilute(GRAY, 50), "#95a5a67f");
        assert_eq!(dilute(RED, 80), "#e74c3ccc");
    }

    #[test]
    fn style_joins_keywords() {
        assert_eq!(
            style(RED, &["italic"]),
            Style {
                foreground: RED.to_owned(),
                background: None,
                font_style: Some("italic".to_owned()),
            }
        );
        assert_eq!(
            style(BLACK, &["bold", "italic"]).font_style.as_deref(),
            Some("bold italic")
        );
    }

    #[test]
    fn style_without_keywords_keeps_empty_font_style() {
        assert_eq!(style(BLACK, &[]).font_style.as_deref(), Some(""));
    }

    #[test]
    fn style_value_key_order() {
        let full = Style {
            foreground: WHITE.to_owned(),
            background: Some(dilute(RED, 80)),
            font_style: Some("bold".to_owned()),
        };
        let Value::Dict(entries) = Value::from(&full) else {
            panic!("style did not convert to a dict");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_ref()).collect();
        assert_eq!(keys, ["foreground", "background", "fontStyle"]);

        let bare = style(BLUE, &[]);
        let Value::Dict(entries) = Value::from(&bare) else {
            panic!("style did not convert to a dict");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_ref()).collect();
        assert_eq!(keys, ["foreground", "fontStyle"]);
    }
}
