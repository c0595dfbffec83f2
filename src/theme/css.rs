//! Stylesheet emission: resolve the token table into utility classes.
//!
//! This is the build-time half of the styling contract: the token
//! table is scanned once per build and emitted as a content-hashed
//! stylesheet (`.abyss-<hash>.css`) containing custom properties,
//! `@keyframes` blocks and the generated utility classes
//! (`bg-abyss-black`, `text-light-bone`, `animate-float`,
//! `bg-gradient-radial`, ...). The document shell links this file.
//!
//! Hashed names keep unchanged stylesheets cacheable forever; stale
//! hashes are swept on every build.

use super::tokens::{ANIMATIONS, BACKGROUND_IMAGES, KEYFRAMES, all_shades};
use crate::config::SiteConfig;
use crate::utils::minify::{MinifyType, minify};
use anyhow::Result;
use std::{
    fmt::Write as _,
    fs,
    io::Write as _,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// File name prefix for emitted stylesheets (hidden file with hash).
const STYLESHEET_PREFIX: &str = ".abyss-";

/// The rendered stylesheet, built once from the static token table.
static STYLESHEET: LazyLock<String> = LazyLock::new(render_stylesheet);

/// Get the emitted stylesheet file name.
///
/// Returns a name like `.abyss-a1b2c3d4.css`.
pub fn stylesheet_filename() -> String {
    let hash = crate::utils::hash::fingerprint(&STYLESHEET);
    format!("{STYLESHEET_PREFIX}{hash}.css")
}

/// Absolute URL path of the stylesheet, for the document head.
pub fn stylesheet_href() -> String {
    format!("/{}", stylesheet_filename())
}

/// Render the complete stylesheet from the token table.
fn render_stylesheet() -> String {
    let mut css = String::new();

    // Custom properties
    css.push_str(":root {\n");
    for (family, shade) in all_shades() {
        let _ = writeln!(
            css,
            "  --color-{}-{}: {};",
            family.name, shade.name, shade.value
        );
    }
    css.push_str("}\n\n");

    // Keyframe definitions
    for keyframe in &KEYFRAMES {
        let _ = writeln!(css, "@keyframes {} {{", keyframe.name);
        for step in keyframe.steps {
            let _ = writeln!(css, "  {} {{", step.selector);
            for (property, value) in step.props {
                let _ = writeln!(css, "    {property}: {value};");
            }
            css.push_str("  }\n");
        }
        css.push_str("}\n\n");
    }

    // Base utilities used by the document body
    css.push_str(
        ".antialiased {\n  -webkit-font-smoothing: antialiased;\n  -moz-osx-font-smoothing: grayscale;\n}\n\n",
    );

    // Color utilities
    for (family, shade) in all_shades() {
        let _ = writeln!(
            css,
            ".bg-{0}-{1} {{\n  background-color: var(--color-{0}-{1});\n}}",
            family.name, shade.name
        );
        let _ = writeln!(
            css,
            ".text-{0}-{1} {{\n  color: var(--color-{0}-{1});\n}}",
            family.name, shade.name
        );
    }
    css.push('\n');

    // Animation utilities
    for animation in &ANIMATIONS {
        let _ = writeln!(
            css,
            ".animate-{} {{\n  animation: {};\n}}",
            animation.name, animation.shorthand
        );
    }
    css.push('\n');

    // Background-image utilities
    for (name, gradient) in &BACKGROUND_IMAGES {
        let _ = writeln!(css, ".bg-{name} {{\n  background-image: {gradient};\n}}");
    }

    css
}

/// Write the stylesheet to the output directory.
///
/// Returns the relative path to the generated file.
pub fn write_stylesheet(output_dir: &Path, config: &SiteConfig) -> Result<PathBuf> {
    let filename = stylesheet_filename();
    let path = output_dir.join(&filename);
    let content = minify(MinifyType::Css(STYLESHEET.as_bytes()), config);

    let mut file = fs::File::create(&path)?;
    file.write_all(&content)?;

    Ok(PathBuf::from(filename))
}

/// Clean up old stylesheets (files matching `.abyss-*.css` pattern).
///
/// Keeps only the current version based on hash.
pub fn cleanup_old_stylesheets(output_dir: &Path) -> Result<()> {
    let current_filename = stylesheet_filename();

    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        // Match pattern: .abyss-{hash}.css but not current file
        if name_str.starts_with(STYLESHEET_PREFIX)
            && name_str.ends_with(".css")
            && name_str != current_filename
        {
            fs::remove_file(entry.path())?;
        }
    }

    Ok(())
}
