//! Dictionary-based fallback translation.
//!
//! Posts normally arrive with both languages filled by the gateway. When a
//! Chinese field is empty, the English text is run through a static
//! substitution table so the page still reads mostly localized. This is a
//! string table, not a translation engine.

#![deny(clippy::all, clippy::pedantic)]

use once_cell::sync::Lazy;
use quill_api_types::Post;
use regex::Regex;

/// Longer phrases first so they win over their substrings.
static DICTIONARY: &[(&str, &str)] = &[
    ("minutes read", "分钟阅读"),
    ("minute read", "分钟阅读"),
    ("min read", "分钟阅读"),
    ("best practices", "最佳实践"),
    ("artificial intelligence", "人工智能"),
    ("user experience", "用户体验"),
    ("product management", "产品管理"),
    ("Expression", "表达"),
    ("Experiment", "实验"),
    ("Experience", "体验"),
    ("technology", "技术"),
    ("development", "开发"),
    ("innovation", "创新"),
    ("engineering", "工程"),
    ("methodology", "方法论"),
    ("creativity", "创意"),
    ("interaction", "交互"),
    ("interface", "界面"),
    ("framework", "框架"),
    ("platform", "平台"),
    ("solution", "解决方案"),
    ("strategy", "策略"),
    ("process", "流程"),
    ("design", "设计"),
    ("digital", "数字化"),
    ("system", "系统"),
];

static PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    DICTIONARY
        .iter()
        .map(|(english, chinese)| {
            let pattern = format!("(?i){}", regex::escape(english));
            (
                Regex::new(&pattern).expect("dictionary pattern compiles"),
                *chinese,
            )
        })
        .collect()
});

pub fn translate_text(text: &str) -> String {
    let mut translated = text.to_string();
    for (pattern, chinese) in PATTERNS.iter() {
        translated = pattern.replace_all(&translated, *chinese).into_owned();
    }
    translated
}

/// Fill any empty Chinese field of a post from its English counterpart.
pub fn localize_post(post: &mut Post) {
    for field in [
        &mut post.title,
        &mut post.excerpt,
        &mut post.content,
        &mut post.meta,
    ] {
        if field.zh.is_empty() && !field.en.is_empty() {
            field.zh = translate_text(&field.en);
        }
    }
}

pub fn localize_posts(posts: &mut [Post]) {
    for post in posts {
        localize_post(post);
    }
}

#[cfg(test)]
mod tests {
    use quill_api_types::Localized;

    use super::*;

    #[test]
    fn substitution_is_case_insensitive_and_longest_first() {
        assert_eq!(translate_text("8 MIN READ"), "8 分钟阅读");
        assert_eq!(translate_text("User Experience matters"), "用户体验 matters");
    }

    #[test]
    fn existing_chinese_fields_are_untouched() {
        let mut post = Post {
            id: "p".to_string(),
            title: Localized::new("Design", "设计之道"),
            excerpt: Localized::new("On technology", ""),
            content: Localized::default(),
            meta: Localized::new("5 min read", ""),
            category: "expression".to_string(),
            date: None,
            read_time: 5,
            featured: false,
            content_loaded: false,
        };

        localize_post(&mut post);
        assert_eq!(post.title.zh, "设计之道");
        assert_eq!(post.excerpt.zh, "On 技术");
        assert_eq!(post.meta.zh, "5 分钟阅读");
        assert!(post.content.zh.is_empty());
    }
}
