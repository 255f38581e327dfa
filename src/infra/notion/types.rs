//! Serde models for the upstream property-bag responses.
//!
//! Only the fields the gateway reads are modeled; everything else in the
//! upstream payload is ignored. Every field is defaulted so schema drift
//! degrades to empty values instead of deserialization failures — the
//! named fallbacks live in `parse`.

use std::collections::HashMap;

use serde::Deserialize;

/// Paginated envelope shared by database queries and block listings.
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageObject {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// One property from the page property bag.
///
/// The upstream tags each property with a `type` and nests the payload
/// under a matching key; modeling every payload as optional lets a single
/// struct cover all the property kinds the gateway cares about.
#[derive(Debug, Default, Deserialize)]
pub struct PropertyValue {
    #[serde(default)]
    pub title: Option<Vec<RichText>>,
    #[serde(default)]
    pub rich_text: Option<Vec<RichText>>,
    #[serde(default)]
    pub select: Option<SelectOption>,
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default)]
    pub number: Option<f64>,
    #[serde(default)]
    pub checkbox: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub code: bool,
}

/// A content block, tagged by `type`.
///
/// Unknown block kinds deserialize to `Unsupported` and render as nothing.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BlockObject {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextBlock },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextBlock },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextBlock },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextBlock },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: RichTextBlock },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: RichTextBlock },
    #[serde(rename = "to_do")]
    ToDo { to_do: TodoBlock },
    #[serde(rename = "quote")]
    Quote { quote: RichTextBlock },
    #[serde(rename = "code")]
    Code { code: CodeBlock },
    #[serde(rename = "divider")]
    Divider {},
    #[serde(rename = "image")]
    Image { image: ImageBlock },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Default, Deserialize)]
pub struct RichTextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageBlock {
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(default)]
    pub file: Option<FileRef>,
    #[serde(default)]
    pub external: Option<FileRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub url: String,
}
