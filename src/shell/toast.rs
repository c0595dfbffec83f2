//! Toast notification renderer mount.
//!
//! The toast renderer itself is a front-end library; this module owns
//! the markup contract that mounts it: one mount node per document,
//! carrying the renderer's options serialized as JSON in a data
//! attribute. The options are static configuration - the renderer's
//! queue of active toasts is its own business.

use anyhow::Result;
use serde::Serialize;

/// Element id of the toast renderer mount node.
pub const TOAST_MOUNT_ID: &str = "toast-root";

/// Data attribute carrying the serialized options.
pub const TOAST_OPTIONS_ATTR: &str = "data-toaster";

/// Options handed to the toast renderer at mount time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToasterOptions {
    /// Screen corner the toasts stack in.
    pub position: &'static str,
    /// How long a toast stays visible, in milliseconds.
    pub duration_ms: u32,
    pub theme: &'static str,
    /// Older toasts beyond this count are collapsed.
    pub max_visible: u8,
}

/// The options every rendered document mounts the toaster with.
pub const TOASTER_OPTIONS: ToasterOptions = ToasterOptions {
    position: "bottom-right",
    duration_ms: 4000,
    theme: "dark",
    max_visible: 3,
};

impl ToasterOptions {
    /// Serialize for the mount node's data attribute.
    pub fn to_attribute(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        assert_eq!(TOASTER_OPTIONS.position, "bottom-right");
        assert_eq!(TOASTER_OPTIONS.duration_ms, 4000);
        assert_eq!(TOASTER_OPTIONS.theme, "dark");
    }

    #[test]
    fn test_attribute_is_camel_case_json() {
        let attr = TOASTER_OPTIONS.to_attribute().unwrap();
        let json: serde_json::Value = serde_json::from_str(&attr).unwrap();

        assert_eq!(
            json.get("durationMs").and_then(|v| v.as_u64()),
            Some(4000)
        );
        assert_eq!(
            json.get("maxVisible").and_then(|v| v.as_u64()),
            Some(3)
        );
    }
}
