//! File system watcher for auto-rebuild.
//!
//! Monitors the content directory, assets directory and config file
//! for changes and triggers full rebuilds with debouncing. Editor
//! temp/backup files are ignored.

use crate::{build::build_site, config::SiteConfig, log, logger::WatchStatus};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::mpsc,
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

// =============================================================================
// Path Utilities
// =============================================================================

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Format path as relative to the project root for log display.
fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Paths worth rebuilding for: inside the watched trees, not editor
/// noise, not our own output.
fn is_relevant(path: &Path, config: &SiteConfig) -> bool {
    !is_temp_file(path) && !path.starts_with(&config.build.output)
}

// =============================================================================
// Event Loop
// =============================================================================

/// Watch for file changes and rebuild, blocking the calling thread.
///
/// Rapid events are batched within a debounce window; a cooldown after
/// each rebuild swallows the notifications the rebuild itself caused.
pub fn watch_for_changes_blocking(config: &'static SiteConfig) -> Result<()> {
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();

    let mut watcher = notify::recommended_watcher(move |res| {
        tx.send(res).ok();
    })
    .context("Failed to create file watcher")?;

    watcher
        .watch(&config.build.content, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", config.build.content.display()))?;
    if config.build.assets.is_dir() {
        watcher.watch(&config.build.assets, RecursiveMode::Recursive)?;
    }
    if config.config_path.is_file() {
        watcher.watch(&config.config_path, RecursiveMode::NonRecursive)?;
    }

    log!("watch"; "watching for changes...");

    let mut status = WatchStatus::new();
    let mut last_rebuild: Option<Instant> = None;

    while let Ok(result) = rx.recv() {
        let mut pending = collect_paths(result, config);

        // Debounce: merge events arriving shortly after the first one
        let deadline = Instant::now() + Duration::from_millis(DEBOUNCE_MS);
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            match rx.recv_timeout(remaining) {
                Ok(result) => pending.extend(collect_paths(result, config)),
                Err(_) => break,
            }
        }

        if pending.is_empty() {
            continue;
        }

        // Cooldown swallows our own rebuild artifacts
        if last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
        {
            continue;
        }

        let trigger = pending
            .iter()
            .next()
            .map(|p| rel_path(p, config.get_root()))
            .unwrap_or_default();

        match build_site(config) {
            Ok(()) => status.success(&format!("rebuilt: {trigger}")),
            Err(err) => status.error(&format!("build failed ({trigger})"), &format!("{err:#}")),
        }
        last_rebuild = Some(Instant::now());
    }

    Ok(())
}

/// Extract relevant changed paths from a watcher notification.
fn collect_paths(result: notify::Result<Event>, config: &SiteConfig) -> HashSet<PathBuf> {
    let Ok(event) = result else {
        return HashSet::new();
    };

    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return HashSet::new();
    }

    event
        .paths
        .into_iter()
        .filter(|path| is_relevant(path, config))
        .collect()
}
