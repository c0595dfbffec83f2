//! Page metadata and viewport exports.
//!
//! These are the immutable records the head writer injects into every
//! rendered document. Field names and nesting are part of the external
//! contract: social-preview crawlers read the serialized form, so the
//! `openGraph`/`twitter` shapes must survive serde round-trips exactly.
//!
//! The Open Graph and Twitter fields currently carry the same literal
//! text as the top-level title/description, but they are independent
//! fields and may diverge.

use serde::Serialize;

/// Site title shown in the browser tab and social cards.
pub const SITE_TITLE: &str = "The Abyss - Shadow Self Journey";

/// Site description for SEO meta tags and social cards.
pub const SITE_DESCRIPTION: &str = "Descend into the depths of your psyche. \
    A guided journey of shadow work and radical self-reflection.";

/// A page author entry.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub name: &'static str,
}

/// Open Graph card fields (`og:*` property metas).
#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locale: &'static str,
}

/// Twitter card fields (`twitter:*` name metas).
#[derive(Debug, Clone, Serialize)]
pub struct Twitter {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Head metadata for the document shell.
///
/// Created once, never mutated. The head writer reads it per render;
/// `build` also serializes it to `meta.json` for external tools.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub authors: &'static [Author],
    pub robots: &'static str,
    #[serde(rename = "openGraph")]
    pub open_graph: OpenGraph,
    pub twitter: Twitter,
}

/// Viewport configuration for the document shell.
///
/// `theme_color` is the browser UI chrome color and must stay a valid
/// hex string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: &'static str,
    pub initial_scale: f64,
    pub theme_color: &'static str,
}

/// The canonical metadata record for every rendered document.
pub const PAGE_METADATA: PageMetadata = PageMetadata {
    title: SITE_TITLE,
    description: SITE_DESCRIPTION,
    keywords: "shadow work, self-reflection, depth psychology, jungian, inner journey, personal growth",
    authors: &[Author { name: "The Abyss" }],
    robots: "index, follow",
    open_graph: OpenGraph {
        title: SITE_TITLE,
        description: SITE_DESCRIPTION,
        kind: "website",
        locale: "en_US",
    },
    twitter: Twitter {
        card: "summary_large_image",
        title: SITE_TITLE,
        description: SITE_DESCRIPTION,
    },
};

/// The canonical viewport record.
pub const VIEWPORT: Viewport = Viewport {
    width: "device-width",
    initial_scale: 1.0,
    theme_color: "#000000",
};

impl Viewport {
    /// Render the `content` attribute of the viewport meta tag.
    ///
    /// A whole-number scale is printed without a decimal point
    /// (`initial-scale=1`, not `initial-scale=1.0`).
    pub fn content(&self) -> String {
        let scale = if self.initial_scale.fract() == 0.0 {
            format!("{}", self.initial_scale as i64)
        } else {
            format!("{}", self.initial_scale)
        };
        format!("width={}, initial-scale={scale}", self.width)
    }
}

impl PageMetadata {
    /// All author names joined for the `author` meta tag.
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
