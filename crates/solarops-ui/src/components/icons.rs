//! Glyph Icons
//!
//! Inline, decorative glyphs. Screen readers skip them.

use dioxus::prelude::*;
use solarops_core::Glyph;

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    /// Glyph to draw
    pub glyph: Glyph,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Inline glyph icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { glyph: Glyph::Mail }
/// }
/// ```
#[component]
pub fn Icon(props: IconProps) -> Element {
    let class = icon_class(props.class.as_deref());
    let symbol = props.glyph.symbol();

    rsx! {
        span {
            class: "{class}",
            "aria-hidden": "true",
            "{symbol}"
        }
    }
}

fn icon_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("icon {}", extra),
        _ => "icon".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_class_appends_extra() {
        assert_eq!(icon_class(None), "icon");
        assert_eq!(icon_class(Some("")), "icon");
        assert_eq!(icon_class(Some("dyn-chevron")), "icon dyn-chevron");
    }

    #[test]
    fn glyph_symbols_are_single_graphemes() {
        assert_eq!(Glyph::AlertCircle.symbol(), "\u{26A0}");
        assert_eq!(Glyph::Plus.symbol(), "+");
    }
}
