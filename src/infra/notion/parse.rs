//! The single translation boundary from upstream property bags to `Post`.
//!
//! Every optional field has a named default here, so upstream schema drift
//! is a single-point fix. Property names mirror the source database
//! columns (`Title`, `Title (Chinese)`, `Excerpt`, …).

use quill_api_types::{Localized, Post};
use time::{Date, macros::format_description};

use super::types::{PageObject, PropertyValue, RichText};

pub const DEFAULT_CATEGORY: &str = "uncategorized";
pub const DEFAULT_READ_TIME: u32 = 5;

const PROP_TITLE: &str = "Title";
const PROP_TITLE_ZH: &str = "Title (Chinese)";
const PROP_EXCERPT: &str = "Excerpt";
const PROP_EXCERPT_ZH: &str = "Excerpt (Chinese)";
const PROP_CONTENT_ZH: &str = "Content (Chinese)";
const PROP_CATEGORY: &str = "Category";
const PROP_DATE: &str = "Date";
const PROP_READ_TIME: &str = "Read Time";
const PROP_FEATURED: &str = "Featured";

/// Build a metadata-only `Post` from a page's property bag.
///
/// The English body stays empty and `content_loaded` false; hydration
/// fills them later. The Chinese body is itself a property, so it comes
/// for free on the fast path.
pub fn post_from_page(page: &PageObject) -> Post {
    let prop = |name: &str| page.properties.get(name);

    let date = prop(PROP_DATE)
        .and_then(|value| value.date.as_ref())
        .and_then(|value| parse_start_date(&value.start));
    let read_time = prop(PROP_READ_TIME)
        .and_then(|value| value.number)
        .map_or(DEFAULT_READ_TIME, |number| number.max(0.0) as u32);

    Post {
        id: page.id.clone(),
        title: Localized::new(title_text(prop(PROP_TITLE)), rich_text(prop(PROP_TITLE_ZH))),
        excerpt: Localized::new(
            rich_text(prop(PROP_EXCERPT)),
            rich_text(prop(PROP_EXCERPT_ZH)),
        ),
        content: Localized::new(String::new(), rich_text(prop(PROP_CONTENT_ZH))),
        meta: meta_strings(date, read_time),
        category: prop(PROP_CATEGORY)
            .and_then(|value| value.select.as_ref())
            .map_or_else(|| DEFAULT_CATEGORY.to_string(), |select| select.name.clone()),
        date,
        read_time,
        featured: prop(PROP_FEATURED)
            .and_then(|value| value.checkbox)
            .unwrap_or(false),
        content_loaded: false,
    }
}

/// The display strings shown under a post title, in both languages.
pub fn meta_strings(date: Option<Date>, read_time: u32) -> Localized {
    match date {
        Some(date) => Localized::new(
            format!("{} {} — {} min read", date.month(), date.day(), read_time),
            format!(
                "{}月{}日 — {}分钟阅读",
                date.month() as u8,
                date.day(),
                read_time
            ),
        ),
        None => Localized::new(
            format!("{read_time} min read"),
            format!("{read_time}分钟阅读"),
        ),
    }
}

/// Parse the leading `YYYY-MM-DD` of an upstream date start value, which
/// may carry a time suffix.
fn parse_start_date(start: &str) -> Option<Date> {
    let prefix = start.get(..10)?;
    Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok()
}

fn title_text(value: Option<&PropertyValue>) -> String {
    value
        .and_then(|value| value.title.as_ref())
        .map(|spans| plain_text(spans))
        .unwrap_or_default()
}

fn rich_text(value: Option<&PropertyValue>) -> String {
    value
        .and_then(|value| value.rich_text.as_ref())
        .map(|spans| plain_text(spans))
        .unwrap_or_default()
}

fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.plain_text.as_str()).collect()
}
