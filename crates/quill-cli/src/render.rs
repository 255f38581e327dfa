//! Markdown-to-HTML rendering.

#![deny(clippy::all, clippy::pedantic)]

use comrak::Options;

/// Render markdown to sanitized HTML. Pure: string in, string out.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.tasklist = true;

    let html = comrak::markdown_to_html(markdown, &options);
    ammonia::clean(&html)
}
