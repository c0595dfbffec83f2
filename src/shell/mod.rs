//! The document shell: root HTML template and the mounts it reserves.

pub mod document;
pub mod toast;

pub use document::{CONTENT_MOUNT_ID, MODAL_MOUNT_ID, render_document};
