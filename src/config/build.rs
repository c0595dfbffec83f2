//! `[build]` section configuration.
//!
//! Contains build paths and output processing options.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in abyss.toml - build paths and options.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// output = "public"
/// assets = "assets"
/// minify = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from CLI, not usually in the file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory holding the page fragment wrapped by the document shell.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Output directory for the rendered document and stylesheet.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory, copied verbatim into the output.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// File name of the page fragment inside the content directory.
    #[serde(default = "defaults::build::fragment")]
    #[educe(Default = defaults::build::fragment())]
    pub fragment: PathBuf,

    /// Minify the rendered HTML document.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Clear the output directory completely before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_full() {
        let config = r#"
            [build]
            content = "pages"
            output = "dist"
            assets = "static"
            fragment = "body.html"
            minify = true
            clean = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("pages"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.assets, PathBuf::from("static"));
        assert_eq!(config.build.fragment, PathBuf::from("body.html"));
        assert!(config.build.minify);
        assert!(config.build.clean);
    }

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert_eq!(config.build.fragment, PathBuf::from("index.html"));
        assert!(!config.build.minify);
        assert!(!config.build.clean);
        assert!(config.build.root.is_none());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build]
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_build_config_partial_override() {
        let config = r#"
            [build]
            minify = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.build.minify);
        // Everything else keeps defaults
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.clean);
    }
}
