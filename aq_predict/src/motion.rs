// Scroll affordances: in-page anchor navigation and fade-in on first view.

pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Selector for the section an in-page link points at.
///
/// A bare `#` (or anything that is not a fragment) has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }
    Some(href)
}

/// Stylesheet that hides `selector` until it gets `animate-in`.
pub fn fade_in_stylesheet(selector: &str) -> String {
    format!(
        "{selector} {{\n    opacity: 0;\n    transform: translateY(30px);\n    \
         transition: opacity 0.6s ease, transform 0.6s ease;\n}}\n\n\
         .{ANIMATE_IN_CLASS} {{\n    opacity: 1;\n    transform: translateY(0);\n}}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#predict"), Some("#predict"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#two words"), None);
        assert_eq!(anchor_target("/about"), None);
    }

    #[test]
    fn test_fade_in_stylesheet() {
        let css = fade_in_stylesheet(".card, .feature-item, .metric-circle");
        assert!(css.starts_with(".card, .feature-item, .metric-circle {"));
        assert!(css.contains("transform: translateY(30px);"));
        assert!(css.contains("transition: opacity 0.6s ease, transform 0.6s ease;"));
        assert!(css.contains(".animate-in {\n    opacity: 1;"));
    }
}
