//! Minification utilities for HTML and CSS.
//!
//! Provides a unified `minify` function that handles both content
//! types, with automatic enable/disable based on `SiteConfig`.

use crate::config::SiteConfig;
use std::borrow::Cow;

// ============================================================================
// Types
// ============================================================================

/// Content type for minification.
pub enum MinifyType<'a> {
    /// HTML content
    Html(&'a [u8]),
    /// CSS content
    Css(&'a [u8]),
}

// ============================================================================
// Unified Minify Function
// ============================================================================

/// Minify content based on type and config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        match content {
            MinifyType::Html(html) => Cow::Borrowed(html),
            MinifyType::Css(css) => Cow::Borrowed(css),
        }
    } else {
        match content {
            MinifyType::Html(html) => Cow::Owned(minify_html_inner(html)),
            MinifyType::Css(css) => Cow::Owned(minify_css_inner(css)),
        }
    }
}

// ============================================================================
// Internal Implementation
// ============================================================================

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}

/// Minify CSS by stripping indentation and blank lines.
///
/// Declarations stay one-per-line inside the emitted stylesheet, so
/// whitespace removal is all the generated CSS needs.
fn minify_css_inner(css: &[u8]) -> Vec<u8> {
    let css_str = std::str::from_utf8(css).unwrap_or("");
    css_str
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
        .into_bytes()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    // HTML minification tests

    #[test]
    fn test_minify_html_basic() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let config = config_with_minify(true);
        let result = minify(MinifyType::Html(html), &config);
        let result_str = String::from_utf8_lossy(&result);

        // Should remove unnecessary whitespace
        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_minify_html_preserves_content() {
        let html = b"<p>Hello World</p>";
        let config = config_with_minify(true);
        let result = minify(MinifyType::Html(html), &config);
        let result_str = String::from_utf8_lossy(&result);

        assert!(result_str.contains("Hello World"));
    }

    #[test]
    fn test_minify_html_disabled() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";
        let result = minify(MinifyType::Html(html), &config_with_minify(false));

        assert_eq!(&*result, html);
    }

    // CSS minification tests

    #[test]
    fn test_minify_css_basic() {
        let css = b":root {\n  --color-abyss-black: #000000;\n}\n";
        let result = minify(MinifyType::Css(css), &config_with_minify(true));

        assert_eq!(&*result, b":root {--color-abyss-black: #000000;}");
    }

    #[test]
    fn test_minify_css_removes_blank_lines() {
        let css = b".a {}\n\n.b {}\n";
        let result = minify(MinifyType::Css(css), &config_with_minify(true));

        assert_eq!(&*result, b".a {}.b {}");
    }

    #[test]
    fn test_minify_css_disabled() {
        let css = b".a {\n  opacity: 1;\n}\n";
        let result = minify(MinifyType::Css(css), &config_with_minify(false));

        assert_eq!(&*result, css.as_slice());
    }
}
