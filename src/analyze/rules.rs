//! Heading role classification rules.
//!
//! An explicit ordered table of `(pattern, role, confidence)` entries,
//! evaluated in fixed order; the first matching rule wins. Heading text is
//! NFKC-normalized and whitespace-collapsed before matching so full-width
//! variants (摘　　要, 关键词：) classify the same as their plain forms.

use crate::model::SectionRole;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// One entry of the role rule table.
pub(crate) struct RoleRule {
    pattern: Regex,
    role: SectionRole,
    confidence: f32,
}

/// Compiled rule table plus auxiliary signal patterns.
pub(crate) struct RolePatterns {
    rules: Vec<RoleRule>,
    keywords_marker: Regex,
    api_heading: Regex,
}

impl RolePatterns {
    pub fn new() -> Self {
        let rule = |pattern: &str, role: SectionRole, confidence: f32| RoleRule {
            pattern: Regex::new(pattern).expect("role pattern compiles"),
            role,
            confidence,
        };

        Self {
            rules: vec![
                rule(r"^中文摘要|^摘\s*要", SectionRole::AbstractCn, 0.95),
                rule(r"(?i)^abstract\b", SectionRole::AbstractEn, 0.95),
                rule(r"^关\s*键\s*[词字]", SectionRole::KeywordsCn, 0.9),
                rule(r"(?i)^key\s*words?\b", SectionRole::KeywordsEn, 0.9),
                rule(r"^参\s*考\s*文\s*献", SectionRole::References, 0.95),
                rule(
                    r"(?i)^(references?|bibliography)\b",
                    SectionRole::References,
                    0.95,
                ),
                rule(r"^结\s*论|^总\s*结", SectionRole::Conclusion, 0.9),
                rule(r"(?i)^conclusions?\b", SectionRole::Conclusion, 0.9),
                rule(
                    r"^第\s*[一二三四五六七八九十百零〇0-9]+\s*章",
                    SectionRole::Chapter,
                    0.9,
                ),
                rule(r"(?i)^chapter\s+\d+\b", SectionRole::Chapter, 0.9),
                // bare numbered headings: 1. 引言 / 2 Background
                rule(r"^\d+(\.\d+)*[.、\s]", SectionRole::Chapter, 0.7),
            ],
            keywords_marker: Regex::new(r"^(关\s*键\s*[词字]|(?i:key\s*words?))\s*:")
                .expect("keywords pattern compiles"),
            api_heading: Regex::new(r"(?i)(^(get|post|put|delete|patch)\s+/)|(\bapi\b)")
                .expect("api pattern compiles"),
        }
    }

    /// Classify a heading against the rule table; first match wins.
    pub fn classify(&self, heading: &str) -> Option<(SectionRole, f32)> {
        let normalized = normalize_heading(heading);
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(&normalized))
            .map(|rule| (rule.role, rule.confidence))
    }

    /// Check for a 关键词:/Keywords: marker at the start of a block.
    pub fn is_keywords_marker(&self, text: &str) -> bool {
        self.keywords_marker.is_match(&normalize_heading(text))
    }

    /// Check for API-style heading text (HTTP-verb routes, `api` tokens).
    pub fn is_api_heading(&self, heading: &str) -> bool {
        self.api_heading.is_match(&normalize_heading(heading))
    }
}

/// NFKC-normalize and collapse whitespace runs to single spaces.
pub(crate) fn normalize_heading(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.nfkc() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Check whether the text contains CJK ideographs.
pub(crate) fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c as u32,
            0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<SectionRole> {
        RolePatterns::new().classify(text).map(|(role, _)| role)
    }

    #[test]
    fn test_abstract_rules() {
        assert_eq!(classify("摘要"), Some(SectionRole::AbstractCn));
        assert_eq!(classify("摘　　要"), Some(SectionRole::AbstractCn));
        assert_eq!(classify("中文摘要"), Some(SectionRole::AbstractCn));
        assert_eq!(classify("Abstract"), Some(SectionRole::AbstractEn));
        assert_eq!(classify("ABSTRACT"), Some(SectionRole::AbstractEn));
    }

    #[test]
    fn test_keywords_rules() {
        assert_eq!(classify("关键词"), Some(SectionRole::KeywordsCn));
        assert_eq!(classify("关键字：测试"), Some(SectionRole::KeywordsCn));
        assert_eq!(classify("Keywords"), Some(SectionRole::KeywordsEn));
        assert_eq!(classify("Key words: a, b"), Some(SectionRole::KeywordsEn));
    }

    #[test]
    fn test_chapter_rules() {
        assert_eq!(classify("第一章 引言"), Some(SectionRole::Chapter));
        assert_eq!(classify("第１２章 结果"), Some(SectionRole::Chapter));
        assert_eq!(classify("Chapter 3: Design"), Some(SectionRole::Chapter));
        assert_eq!(classify("1. Introduction"), Some(SectionRole::Chapter));
    }

    #[test]
    fn test_references_and_conclusion_rules() {
        assert_eq!(classify("参考文献"), Some(SectionRole::References));
        assert_eq!(classify("References"), Some(SectionRole::References));
        assert_eq!(classify("Bibliography"), Some(SectionRole::References));
        assert_eq!(classify("结论"), Some(SectionRole::Conclusion));
        assert_eq!(classify("总结与展望"), Some(SectionRole::Conclusion));
        assert_eq!(classify("Conclusion"), Some(SectionRole::Conclusion));
    }

    #[test]
    fn test_first_match_wins() {
        // 摘要 also starts a plausible title, but the abstract rule is earlier
        assert_eq!(classify("摘要 Abstract"), Some(SectionRole::AbstractCn));
    }

    #[test]
    fn test_unmatched_heading() {
        assert_eq!(classify("研究背景"), None);
        assert_eq!(classify("Some Random Heading"), None);
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading("  摘　　要  "), "摘 要");
        assert_eq!(normalize_heading("Key   words"), "Key words");
        // full-width colon folds to ASCII under NFKC
        assert_eq!(normalize_heading("关键词："), "关键词:");
    }

    #[test]
    fn test_keywords_marker() {
        let patterns = RolePatterns::new();
        assert!(patterns.is_keywords_marker("关键词：格式转换；论文"));
        assert!(patterns.is_keywords_marker("Keywords: markdown, styling"));
        assert!(!patterns.is_keywords_marker("正文中的关键词不算"));
    }

    #[test]
    fn test_api_heading() {
        let patterns = RolePatterns::new();
        assert!(patterns.is_api_heading("GET /users/{id}"));
        assert!(patterns.is_api_heading("REST API Reference"));
        assert!(!patterns.is_api_heading("第一章 引言"));
    }

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("基于Markdown的论文"));
        assert!(!contains_cjk("A Study of Markdown"));
    }
}
