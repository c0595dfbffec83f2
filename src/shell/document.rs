//! Document shell rendering.
//!
//! Produces the single root HTML document wrapping all page content:
//! language and theme attributes, head metadata, font preconnect
//! hints, and a body holding the content mount, the modal mount and
//! the toast renderer mount - in that order, one of each.
//!
//! This is a pure structural template: one synchronous pass per
//! document, no state, no transitions. Children are trusted,
//! already-rendered markup; validating them is the caller's job.

use super::toast::{TOAST_MOUNT_ID, TOAST_OPTIONS_ATTR, TOASTER_OPTIONS};
use crate::meta::{PageMetadata, Viewport};
use crate::theme::css::stylesheet_href;
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

/// Element id of the content mount hosting the page children.
pub const CONTENT_MOUNT_ID: &str = "abyss-root";

/// Element id of the modal mount for out-of-flow overlay content.
pub const MODAL_MOUNT_ID: &str = "modal-root";

/// Fixed document language. Not user-toggleable.
pub const DOCUMENT_LANG: &str = "en";

/// Fixed theme class on the root element. Not user-toggleable.
pub const THEME_CLASS: &str = "dark";

/// Base styling of the document body: dark background, light
/// foreground. The classes resolve through the emitted stylesheet.
const BODY_CLASS: &str = "bg-abyss-black text-light-bone antialiased";

/// Font-serving origins to preconnect to, with cross-origin mode.
/// The font files themselves are fetched in anonymous mode.
const FONT_ORIGINS: [(&str, bool); 2] = [
    ("https://fonts.googleapis.com", false),
    ("https://fonts.gstatic.com", true),
];

type DocWriter = Writer<Cursor<Vec<u8>>>;

/// Render the complete root document around already-rendered children.
pub fn render_document(
    children: &str,
    meta: &PageMetadata,
    viewport: &Viewport,
) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;

    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", DOCUMENT_LANG));
    html.push_attribute(("class", THEME_CLASS));
    writer.write_event(Event::Start(html))?;

    write_head(&mut writer, meta, viewport)?;
    write_body(&mut writer, children)?;

    writer.write_event(Event::End(BytesEnd::new("html")))?;

    Ok(writer.into_inner().into_inner())
}

// ============================================================================
// Head
// ============================================================================

/// Write the head: charset, viewport, metadata, social cards,
/// preconnect hints and the theme stylesheet link.
fn write_head(writer: &mut DocWriter, meta: &PageMetadata, viewport: &Viewport) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("head")))?;

    let mut charset = BytesStart::new("meta");
    charset.push_attribute(("charset", "utf-8"));
    writer.write_event(Event::Empty(charset))?;

    write_meta_tag(writer, "viewport", &viewport.content())?;
    write_meta_tag(writer, "theme-color", viewport.theme_color)?;

    write_text_element(writer, "title", meta.title)?;
    write_meta_tag(writer, "description", meta.description)?;
    write_meta_tag(writer, "keywords", meta.keywords)?;
    write_meta_tag(writer, "author", &meta.author_names())?;
    write_meta_tag(writer, "robots", meta.robots)?;

    // Open Graph card (property metas)
    write_property_meta(writer, "og:title", meta.open_graph.title)?;
    write_property_meta(writer, "og:description", meta.open_graph.description)?;
    write_property_meta(writer, "og:type", meta.open_graph.kind)?;
    write_property_meta(writer, "og:locale", meta.open_graph.locale)?;

    // Twitter card (name metas)
    write_meta_tag(writer, "twitter:card", meta.twitter.card)?;
    write_meta_tag(writer, "twitter:title", meta.twitter.title)?;
    write_meta_tag(writer, "twitter:description", meta.twitter.description)?;

    for (origin, anonymous) in FONT_ORIGINS {
        write_preconnect_link(writer, origin, anonymous)?;
    }

    write_stylesheet_link(writer, &stylesheet_href())?;

    writer.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(())
}

// ============================================================================
// Body
// ============================================================================

/// Write the body: content mount with children, empty modal mount,
/// toast renderer mount.
fn write_body(writer: &mut DocWriter, children: &str) -> Result<()> {
    let mut body = BytesStart::new("body");
    body.push_attribute(("class", BODY_CLASS));
    writer.write_event(Event::Start(body))?;

    // Content mount hosting the children (trusted raw input)
    let mut main = BytesStart::new("main");
    main.push_attribute(("id", CONTENT_MOUNT_ID));
    writer.write_event(Event::Start(main))?;
    writer.get_mut().write_all(children.as_bytes())?;
    writer.write_event(Event::End(BytesEnd::new("main")))?;

    // Modal mount, empty by contract
    let mut modal = BytesStart::new("div");
    modal.push_attribute(("id", MODAL_MOUNT_ID));
    writer.write_event(Event::Start(modal))?;
    writer.write_event(Event::End(BytesEnd::new("div")))?;

    // Toast renderer mount, one per document
    let mut toast = BytesStart::new("div");
    toast.push_attribute(("id", TOAST_MOUNT_ID));
    toast.push_attribute((TOAST_OPTIONS_ATTR, TOASTER_OPTIONS.to_attribute()?.as_str()));
    writer.write_event(Event::Start(toast))?;
    writer.write_event(Event::End(BytesEnd::new("div")))?;

    writer.write_event(Event::End(BytesEnd::new("body")))?;
    Ok(())
}

// ============================================================================
// Element Writers
// ============================================================================

/// Write a simple text element (e.g., <title>text</title>)
#[inline]
fn write_text_element(writer: &mut DocWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write a meta tag with a `name` attribute
#[inline]
fn write_meta_tag(writer: &mut DocWriter, name: &str, content: &str) -> Result<()> {
    let mut elem = BytesStart::new("meta");
    elem.push_attribute(("name", name));
    elem.push_attribute(("content", content));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write a meta tag with a `property` attribute (Open Graph)
#[inline]
fn write_property_meta(writer: &mut DocWriter, property: &str, content: &str) -> Result<()> {
    let mut elem = BytesStart::new("meta");
    elem.push_attribute(("property", property));
    elem.push_attribute(("content", content));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write a preconnect link element
#[inline]
fn write_preconnect_link(writer: &mut DocWriter, origin: &str, anonymous: bool) -> Result<()> {
    let mut elem = BytesStart::new("link");
    elem.push_attribute(("rel", "preconnect"));
    elem.push_attribute(("href", origin));
    if anonymous {
        elem.push_attribute(("crossorigin", "anonymous"));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write a stylesheet link element
#[inline]
fn write_stylesheet_link(writer: &mut DocWriter, href: &str) -> Result<()> {
    let mut elem = BytesStart::new("link");
    elem.push_attribute(("rel", "stylesheet"));
    elem.push_attribute(("href", href));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}
