//! `check` command: validate the theme token table and metadata
//! exports without building anything.

use crate::{
    log,
    meta::PAGE_METADATA,
    theme::{
        self,
        tokens::{ANIMATIONS, COLOR_FAMILIES},
    },
};
use anyhow::{Result, anyhow, bail};

/// Run all integrity checks and report the results.
pub fn check_site() -> Result<()> {
    theme::validate().map_err(|err| anyhow!(err))?;
    log!("check"; "theme: {} color families, {} animations", COLOR_FAMILIES.len(), ANIMATIONS.len());

    if PAGE_METADATA.title.is_empty() || PAGE_METADATA.description.is_empty() {
        bail!("metadata export has empty title or description");
    }
    log!("check"; "metadata: \"{}\"", PAGE_METADATA.title);

    log!("check"; "ok");
    Ok(())
}
