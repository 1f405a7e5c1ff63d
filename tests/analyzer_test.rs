//! Integration tests for document structure analysis.

use mdstyler::{analyze_markdown, parse_blocks, DocumentType, ParseOptions, SectionRole};
use pretty_assertions::assert_eq;

const THESIS: &str = "\
# 摘要

本文针对学术论文的排版需求，提出了一种基于模板的格式转换方法。

关键词：格式转换；学术论文；模板

# Abstract

This thesis proposes a template-driven formatting approach for academic
documents.

Keywords: formatting, thesis, template

# 第一章 引言

随着电子排版的普及，论文格式规范化成为常见需求。

## 研究现状

已有工作多集中在字符级转换。

# 第二章 方法设计

本章给出结构识别与样式解析的整体设计。

# 结论

本文方法在真实论文上验证有效。

# 参考文献

[1] 某作者. 某论文[J]. 某期刊, 2023.
";

#[test]
fn test_academic_thesis_end_to_end() {
    let result = analyze_markdown(THESIS);

    assert_eq!(result.document_type, DocumentType::AcademicThesis);
    for role in [
        SectionRole::AbstractCn,
        SectionRole::AbstractEn,
        SectionRole::Chapter,
        SectionRole::References,
    ] {
        assert!(
            result.detected_components.contains(&role),
            "expected {role:?} to be detected"
        );
    }
    assert!(result.confidence_score >= 0.8);
    assert!(result.quality_score > 0.0 && result.quality_score <= 1.0);
}

#[test]
fn test_unstructured_document_end_to_end() {
    let result = analyze_markdown(
        "Just a paragraph of prose.\n\nAnother paragraph, still no headings.",
    );

    assert_eq!(result.document_type, DocumentType::Generic);
    assert_eq!(result.confidence_score, 0.0);
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].role, SectionRole::Unknown);
    assert_eq!(result.sections[0].block_count(), result.block_count());
}

#[test]
fn test_every_block_belongs_to_exactly_one_section() {
    let result = analyze_markdown(THESIS);

    for i in 0..result.block_count() {
        let owners = result.sections.iter().filter(|s| s.contains(i)).count();
        assert_eq!(owners, 1, "block {i} owned by {owners} sections");
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let first = analyze_markdown(THESIS);
    let second = analyze_markdown(THESIS);
    assert_eq!(first, second);

    // serialized form is byte-identical too
    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_adding_references_never_lowers_confidence() {
    let without = "\
# 摘要

中文摘要内容。

# Abstract

English abstract.

# 第一章 引言

正文。
";
    let with = format!("{without}\n# 参考文献\n\n[1] 文献条目。\n");

    let before = analyze_markdown(without);
    let after = analyze_markdown(&with);

    assert_eq!(before.document_type, DocumentType::AcademicThesis);
    assert!(after.confidence_score >= before.confidence_score);
}

#[test]
fn test_nested_headings_become_subsections() {
    let result = analyze_markdown(THESIS);
    let nested: Vec<_> = result
        .sections_with_role(SectionRole::Subsection)
        .collect();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].title, "研究现状");
    assert_eq!(nested[0].level, 2);
}

#[test]
fn test_duplicate_singleton_headings_merge() {
    let markdown = "\
# 摘要

第一份摘要。

# 摘要

第二份内容不能丢。
";
    let result = analyze_markdown(markdown);
    let abstracts: Vec<_> = result
        .sections_with_role(SectionRole::AbstractCn)
        .collect();
    assert_eq!(abstracts.len(), 1);
    // both headings and both paragraphs live in the canonical section
    assert_eq!(abstracts[0].block_count(), 4);
}

#[test]
fn test_code_heavy_markdown_is_technical() {
    let markdown = "\
# Client API

```rust
let client = Client::new();
```

## GET /documents

Returns all documents.
";
    let result = analyze_markdown(markdown);
    assert_eq!(result.document_type, DocumentType::TechnicalDoc);
}

#[test]
fn test_missing_components_query() {
    let result = analyze_markdown(THESIS);
    // conclusion is present, keywords sections are not headings here
    let missing = result.missing_components(&[
        SectionRole::Conclusion,
        SectionRole::KeywordsCn,
    ]);
    assert_eq!(missing, vec![SectionRole::KeywordsCn]);
}

#[test]
fn test_parse_adapter_block_shapes() {
    let blocks = parse_blocks(THESIS, &ParseOptions::default());

    // heading levels survive, indices are dense and ordered
    assert!(blocks[0].is_heading());
    assert_eq!(blocks[0].level, Some(1));
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.index, i);
    }
}
