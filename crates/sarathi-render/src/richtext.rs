//! Rich text to HTML rendering.
//!
//! Turns a block sequence into HTML. h2/h3 headings carry their CMS
//! block key as an `id` attribute so the table of contents and anchor
//! links stay stable across edits that reorder content.

use sarathi_content::ImageUrlBuilder;
use sarathi_core::richtext::{ContentBlock, ListKind, Span, TextBlock};
use sarathi_ui::TocEntry;

/// Display width requested for inline images.
const INLINE_IMAGE_WIDTH: u32 = 800;

/// Render a block sequence to HTML. Unknown blocks render as nothing.
#[must_use]
pub fn render_blocks(blocks: &[ContentBlock], images: &ImageUrlBuilder) -> String {
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        match block {
            ContentBlock::Text(text) => {
                if text.list_item != open_list {
                    close_list(&mut html, open_list);
                    if let Some(kind) = text.list_item {
                        html.push_str(match kind {
                            ListKind::Bullet => "<ul>",
                            ListKind::Number => "<ol>",
                        });
                    }
                    open_list = text.list_item;
                }

                if text.list_item.is_some() {
                    html.push_str("<li>");
                    html.push_str(&render_spans(&text.children));
                    html.push_str("</li>");
                } else {
                    html.push_str(&render_text_block(text));
                }
            }
            ContentBlock::Image(image) => {
                close_list(&mut html, open_list);
                open_list = None;

                let Some(url) = images.url_for(&image.asset.reference, Some(INLINE_IMAGE_WIDTH))
                else {
                    continue;
                };
                html.push_str("<figure>");
                html.push_str(&format!(
                    r#"<img src="{}" alt="{}" loading="lazy">"#,
                    escape_html(&url),
                    escape_html(&image.alt)
                ));
                if let Some(caption) = &image.caption {
                    html.push_str(&format!(
                        "<figcaption>{}</figcaption>",
                        escape_html(caption)
                    ));
                }
                html.push_str("</figure>");
            }
            ContentBlock::Unknown => {}
        }
    }

    close_list(&mut html, open_list);
    html
}

/// Extract the h2/h3 outline of a block sequence, anchored by block keys.
#[must_use]
pub fn heading_outline(blocks: &[ContentBlock]) -> Vec<TocEntry> {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) => match text.heading_level() {
                Some(level @ (2 | 3)) => {
                    Some(TocEntry::new(level, text.plain_text(), text.key.clone()))
                }
                _ => None,
            },
            _ => None,
        })
        .collect()
}

fn render_text_block(text: &TextBlock) -> String {
    let inner = render_spans(&text.children);
    match text.style.as_str() {
        "h2" => format!(r#"<h2 id="{}">{inner}</h2>"#, escape_html(&text.key)),
        "h3" => format!(r#"<h3 id="{}">{inner}</h3>"#, escape_html(&text.key)),
        "h4" => format!("<h4>{inner}</h4>"),
        "blockquote" => format!("<blockquote>{inner}</blockquote>"),
        _ => format!("<p>{inner}</p>"),
    }
}

fn render_spans(spans: &[Span]) -> String {
    let mut html = String::new();
    for span in spans {
        let mut text = escape_html(&span.text);
        for mark in &span.marks {
            text = match mark.as_str() {
                "strong" => format!("<strong>{text}</strong>"),
                "em" => format!("<em>{text}</em>"),
                "code" => format!("<code>{text}</code>"),
                "underline" => format!("<u>{text}</u>"),
                // Annotation marks (links) arrive as opaque keys; render
                // the text unwrapped.
                _ => text,
            };
        }
        html.push_str(&text);
    }
    html
}

fn close_list(html: &mut String, open: Option<ListKind>) {
    match open {
        Some(ListKind::Bullet) => html.push_str("</ul>"),
        Some(ListKind::Number) => html.push_str("</ol>"),
        None => {}
    }
}

/// Escape special HTML characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
