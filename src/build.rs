//! Build orchestration.
//!
//! Coordinates document rendering and asset processing.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── theme::validate() ──► abort on token table defects
//!     │
//!     ├── rayon::join
//!     │       ├── render_page() ──► content fragment wrapped in the
//!     │       │                     document shell → output/index.html
//!     │       └── copy_assets() ──► asset tree copied verbatim
//!     │
//!     ├── theme::css ──► hashed stylesheet, stale hashes swept
//!     └── meta.json ──► serialized metadata/viewport exports
//! ```

use crate::{
    config::SiteConfig,
    log,
    meta::{PAGE_METADATA, VIEWPORT},
    shell::render_document,
    theme,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};
use walkdir::WalkDir;

/// Build the site: validate the theme, render the document shell and
/// copy assets in parallel, then emit the stylesheet and metadata
/// export.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    theme::validate().map_err(|err| anyhow!(err)).context("theme token table is invalid")?;

    prepare_output(output, config.build.clean)?;

    let (document_result, assets_result) =
        rayon::join(|| render_page(config), || copy_assets(config));

    document_result?;
    let copied = assets_result?;

    // Stylesheet: sweep stale hashes, then write the current one
    theme::css::cleanup_old_stylesheets(output)?;
    let stylesheet = theme::css::write_stylesheet(output, config)?;

    write_meta_export(output)?;

    log!("build"; "done ({copied} assets, {})", stylesheet.display());
    Ok(())
}

/// Ensure the output directory exists.
///
/// When `clean` is true, removes all existing content first.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}

/// Render the content fragment into the document shell and write
/// `index.html`.
fn render_page(config: &SiteConfig) -> Result<()> {
    let fragment_path = config.fragment_path();
    let children = fs::read_to_string(&fragment_path)
        .with_context(|| format!("page fragment not found: {}", fragment_path.display()))?;

    let document = render_document(&children, &PAGE_METADATA, &VIEWPORT)?;
    let document = minify(MinifyType::Html(&document), config);

    let dest = config.build.output.join("index.html");
    fs::write(&dest, &*document)
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    log!("shell"; "index.html");
    Ok(())
}

/// Copy the assets tree verbatim into the output directory.
///
/// Returns the number of files copied. A missing assets directory is
/// not an error.
fn copy_assets(config: &SiteConfig) -> Result<usize> {
    let assets = &config.build.assets;
    if !assets.is_dir() {
        return Ok(0);
    }

    let files: Vec<_> = WalkDir::new(assets)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    let copied = AtomicUsize::new(0);
    files.par_iter().try_for_each(|path| -> Result<()> {
        let relative = path
            .strip_prefix(assets)
            .map_err(|_| anyhow!("File is not in assets directory: {}", path.display()))?;
        let dest = config.build.output.join(relative);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)
            .with_context(|| format!("Failed to copy {}", path.display()))?;
        copied.fetch_add(1, Ordering::Relaxed);
        Ok(())
    })?;

    Ok(copied.load(Ordering::Relaxed))
}

/// Write the serialized metadata/viewport exports for external tools.
fn write_meta_export(output: &Path) -> Result<()> {
    let export = serde_json::json!({
        "metadata": PAGE_METADATA,
        "viewport": VIEWPORT,
    });
    let content = serde_json::to_vec_pretty(&export)?;
    fs::write(output.join("meta.json"), content)?;
    Ok(())
}
