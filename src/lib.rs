//! # mdstyler
//!
//! Document structure analysis and template-driven style resolution for
//! Markdown, with a focus on academic theses.
//!
//! mdstyler is the front half of a Markdown-to-styled-document converter:
//! it parses Markdown into a flat block model, detects the document's
//! structure (type, sections, academic components) with a confidence score,
//! and resolves every block against a named template's style rules into a
//! fully merged styling plan. Renderers consume the plan in order and emit
//! whatever output format they target; mdstyler itself never writes output
//! bytes.
//!
//! ## Quick Start
//!
//! ```
//! use mdstyler::{builtin, Pipeline};
//!
//! fn main() -> mdstyler::Result<()> {
//!     let pipeline = Pipeline::new();
//!     let planned = pipeline.plan(
//!         "# 摘要\n\n本文提出一种基于模板的格式转换方法。",
//!         builtin::GRADUATION_THESIS_TEMPLATE,
//!     )?;
//!
//!     for (block, style) in planned.plan.iter() {
//!         println!("{:?}: {} {}pt", block.kind, style.font.family, style.font.size_pt);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structure detection**: document type, section roles (abstract,
//!   keywords, chapters, references, …) and confidence/quality scores
//! - **Bilingual headings**: 摘要/Abstract, 关键词/Keywords, 第N章/Chapter N
//! - **Template-driven styling**: ordered style rules matched by
//!   specificity with field-wise inheritance down to a base default
//! - **Graceful degradation**: malformed input never fails, it just scores
//!   lower
//! - **Parallel batches**: plan many documents at once with per-document
//!   fault isolation

pub mod analyze;
pub mod error;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod style;

// Re-export commonly used types
pub use analyze::{DocumentAnalyzer, ScoringConfig};
pub use error::{Error, Result};
pub use model::{
    Block, BlockKind, DocumentAnalysisResult, DocumentType, Section, SectionRole,
};
pub use parse::{parse_blocks, ParseOptions};
pub use pipeline::{Pipeline, PlannedDocument};
pub use style::{
    builtin, resolve, Alignment, FontConfig, FontFamily, ParagraphConfig, ResolvedFont,
    ResolvedParagraph, ResolvedStyle, StyleConfig, StyleSelector, StylingPlan,
    TemplateConfig, TemplateRegistry,
};

/// Analyze Markdown text with default parse options and scoring.
///
/// # Example
///
/// ```
/// let result = mdstyler::analyze_markdown("# 摘要\n\n内容。\n\n# Abstract\n\nContent.");
/// assert!(result.detected_components.contains(&mdstyler::SectionRole::AbstractCn));
/// ```
pub fn analyze_markdown(text: &str) -> DocumentAnalysisResult {
    let blocks = parse_blocks(text, &ParseOptions::default());
    analyze::analyze(blocks)
}

/// Analyze Markdown text and resolve it against a template value.
///
/// For repeated use or named-template lookup, build a [`Pipeline`] instead.
pub fn plan_markdown(text: &str, template: &TemplateConfig) -> Result<StylingPlan> {
    let analysis = analyze_markdown(text);
    resolve(&analysis, template)
}
