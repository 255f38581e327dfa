//! Block-to-markdown rendering.
//!
//! Flat rendering of the block kinds a blog post actually uses; unknown
//! kinds are skipped. Numbered list ordinals reset whenever the list is
//! interrupted by a non-list block.

use super::types::{Annotations, BlockObject, RichText};

/// Render a block list to a markdown string.
pub fn render_blocks(blocks: &[BlockObject]) -> String {
    let mut out = String::new();
    let mut ordinal = 0u32;

    for block in blocks {
        match block {
            BlockObject::NumberedListItem { numbered_list_item } => {
                ordinal += 1;
                out.push_str(&format!(
                    "{ordinal}. {}\n",
                    render_rich(&numbered_list_item.rich_text)
                ));
                continue;
            }
            BlockObject::BulletedListItem { bulleted_list_item } => {
                out.push_str(&format!("- {}\n", render_rich(&bulleted_list_item.rich_text)));
            }
            BlockObject::Paragraph { paragraph } => {
                out.push_str(&render_rich(&paragraph.rich_text));
                out.push_str("\n\n");
            }
            BlockObject::Heading1 { heading_1 } => {
                out.push_str(&format!("# {}\n\n", render_rich(&heading_1.rich_text)));
            }
            BlockObject::Heading2 { heading_2 } => {
                out.push_str(&format!("## {}\n\n", render_rich(&heading_2.rich_text)));
            }
            BlockObject::Heading3 { heading_3 } => {
                out.push_str(&format!("### {}\n\n", render_rich(&heading_3.rich_text)));
            }
            BlockObject::ToDo { to_do } => {
                let mark = if to_do.checked { "x" } else { " " };
                out.push_str(&format!("- [{mark}] {}\n", render_rich(&to_do.rich_text)));
            }
            BlockObject::Quote { quote } => {
                out.push_str(&format!("> {}\n\n", render_rich(&quote.rich_text)));
            }
            BlockObject::Code { code } => {
                out.push_str(&format!(
                    "```{}\n{}\n```\n\n",
                    code.language,
                    plain(&code.rich_text)
                ));
            }
            BlockObject::Divider {} => {
                out.push_str("---\n\n");
            }
            BlockObject::Image { image } => {
                let url = image
                    .external
                    .as_ref()
                    .or(image.file.as_ref())
                    .map(|file| file.url.as_str())
                    .unwrap_or_default();
                if !url.is_empty() {
                    out.push_str(&format!("![{}]({url})\n\n", plain(&image.caption)));
                }
            }
            BlockObject::Unsupported => {}
        }
        ordinal = 0;
    }

    out.trim_end().to_string()
}

fn render_rich(spans: &[RichText]) -> String {
    spans.iter().map(decorate).collect()
}

fn plain(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.plain_text.as_str()).collect()
}

fn decorate(span: &RichText) -> String {
    let Annotations {
        bold,
        italic,
        strikethrough,
        code,
    } = span.annotations;

    let mut text = span.plain_text.clone();
    if code {
        text = format!("`{text}`");
    }
    if bold {
        text = format!("**{text}**");
    }
    if italic {
        text = format!("*{text}*");
    }
    if strikethrough {
        text = format!("~~{text}~~");
    }
    if let Some(href) = span.href.as_ref() {
        text = format!("[{text}]({href})");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(json: serde_json::Value) -> Vec<BlockObject> {
        serde_json::from_value(json).expect("blocks deserialize")
    }

    #[test]
    fn renders_headings_paragraphs_and_code() {
        let rendered = render_blocks(&blocks(serde_json::json!([
            {"type": "heading_1", "heading_1": {"rich_text": [{"plain_text": "Intro"}]}},
            {"type": "paragraph", "paragraph": {"rich_text": [{"plain_text": "Some text."}]}},
            {"type": "code", "code": {"rich_text": [{"plain_text": "let x = 1;"}], "language": "rust"}}
        ])));

        assert_eq!(rendered, "# Intro\n\nSome text.\n\n```rust\nlet x = 1;\n```");
    }

    #[test]
    fn numbered_ordinals_reset_between_lists() {
        let rendered = render_blocks(&blocks(serde_json::json!([
            {"type": "numbered_list_item", "numbered_list_item": {"rich_text": [{"plain_text": "a"}]}},
            {"type": "numbered_list_item", "numbered_list_item": {"rich_text": [{"plain_text": "b"}]}},
            {"type": "paragraph", "paragraph": {"rich_text": [{"plain_text": "break"}]}},
            {"type": "numbered_list_item", "numbered_list_item": {"rich_text": [{"plain_text": "c"}]}}
        ])));

        assert_eq!(rendered, "1. a\n2. b\nbreak\n\n1. c");
    }

    #[test]
    fn annotations_and_links_decorate_text() {
        let rendered = render_blocks(&blocks(serde_json::json!([
            {"type": "paragraph", "paragraph": {"rich_text": [
                {"plain_text": "bold", "annotations": {"bold": true}},
                {"plain_text": " and "},
                {"plain_text": "a link", "href": "https://example.com"}
            ]}}
        ])));

        assert_eq!(rendered, "**bold** and [a link](https://example.com)");
    }

    #[test]
    fn unsupported_blocks_render_as_nothing() {
        let rendered = render_blocks(&blocks(serde_json::json!([
            {"type": "synced_block", "synced_block": {}},
            {"type": "paragraph", "paragraph": {"rich_text": [{"plain_text": "kept"}]}}
        ])));

        assert_eq!(rendered, "kept");
    }
}
