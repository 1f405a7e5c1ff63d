//! Style resolution: match blocks against template rules and merge.
//!
//! Each block collects its matching rules ordered from most to least
//! specific, ties broken by declaration order (later wins). Fields then
//! merge first-set-wins down the list, terminating at the process-wide
//! default, so every resolved style is fully populated and the plan never
//! references the template it came from.

use super::template::{
    Alignment, FontConfig, FontFamily, ParagraphConfig, StyleConfig, TemplateConfig,
};
use crate::error::Result;
use crate::model::{Block, DocumentAnalysisResult, SectionRole};
use serde::{Deserialize, Serialize};

/// Fully resolved font: no unset fields remain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFont {
    /// Font family
    pub family: FontFamily,
    /// Size in points
    pub size_pt: f32,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Color as RGB
    pub color_rgb: (u8, u8, u8),
}

/// Fully resolved paragraph settings: no unset fields remain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParagraph {
    /// Text alignment
    pub alignment: Alignment,
    /// Line spacing multiplier
    pub line_spacing: f32,
    /// Space before in points
    pub space_before_pt: f32,
    /// Space after in points
    pub space_after_pt: f32,
    /// First line indent in centimeters
    pub first_line_indent_cm: f32,
    /// Force a page break before
    pub page_break_before: bool,
}

/// The merged, self-contained style for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Name of the most specific matched rule, or `"default"`
    pub source: String,
    /// Resolved font
    pub font: ResolvedFont,
    /// Resolved paragraph settings
    pub paragraph: ResolvedParagraph,
}

impl ResolvedStyle {
    /// The process-wide fallback: plain paragraph, base font.
    pub fn base() -> Self {
        Self {
            source: "default".to_string(),
            font: ResolvedFont {
                family: FontFamily::SimSun,
                size_pt: 12.0,
                bold: false,
                italic: false,
                color_rgb: (0, 0, 0),
            },
            paragraph: ResolvedParagraph {
                alignment: Alignment::Left,
                line_spacing: 1.0,
                space_before_pt: 0.0,
                space_after_pt: 0.0,
                first_line_indent_cm: 0.0,
                page_break_before: false,
            },
        }
    }
}

/// Ordered per-block style assignments, ready for a renderer.
///
/// Plan order is document order; renderers must preserve it.
#[derive(Debug, Clone)]
pub struct StylingPlan {
    template: String,
    entries: Vec<(Block, ResolvedStyle)>,
}

impl StylingPlan {
    /// Name of the template the plan was resolved against.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of styled blocks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `(Block, ResolvedStyle)` pairs in document order.
    pub fn entries(&self) -> &[(Block, ResolvedStyle)] {
        &self.entries
    }

    /// Iterate over the pairs in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Block, ResolvedStyle)> {
        self.entries.iter()
    }
}

impl IntoIterator for StylingPlan {
    type Item = (Block, ResolvedStyle);
    type IntoIter = std::vec::IntoIter<(Block, ResolvedStyle)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a StylingPlan {
    type Item = &'a (Block, ResolvedStyle);
    type IntoIter = std::slice::Iter<'a, (Block, ResolvedStyle)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Resolve an analysis result against a template into a styling plan.
///
/// Pure transform: neither input is mutated. Fails only on template-schema
/// violations, and then before any entry is produced — a partial plan is
/// never returned. Every block receives exactly one resolved style.
pub fn resolve(
    result: &DocumentAnalysisResult,
    template: &TemplateConfig,
) -> Result<StylingPlan> {
    template.validate()?;

    let mut roles = vec![SectionRole::Unknown; result.blocks.len()];
    for section in &result.sections {
        for &i in &section.blocks {
            if let Some(slot) = roles.get_mut(i) {
                *slot = section.role;
            }
        }
    }

    let entries = result
        .blocks
        .iter()
        .enumerate()
        .map(|(i, block)| (block.clone(), resolve_block(block, roles[i], template)))
        .collect();

    Ok(StylingPlan {
        template: template.name.clone(),
        entries,
    })
}

fn resolve_block(block: &Block, role: SectionRole, template: &TemplateConfig) -> ResolvedStyle {
    // (tier, declaration index), most specific first; within a tier the
    // later-declared rule wins
    let mut matched: Vec<(u8, usize)> = template
        .styles
        .iter()
        .enumerate()
        .filter(|(_, style)| style.selector.matches(block, role))
        .map(|(i, style)| (style.selector.specificity(), i))
        .collect();
    matched.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    warn_conflicts(&matched, template, block);

    let mut font = FontConfig::default();
    let mut paragraph = ParagraphConfig::default();
    for &(_, i) in &matched {
        let style = &template.styles[i];
        merge_font(&mut font, &style.font);
        merge_paragraph(&mut paragraph, &style.paragraph);
    }

    let base = ResolvedStyle::base();
    let source = matched
        .first()
        .map(|&(_, i)| template.styles[i].name.clone())
        .unwrap_or_else(|| base.source.clone());

    ResolvedStyle {
        source,
        font: ResolvedFont {
            family: font.family.unwrap_or(base.font.family),
            size_pt: font.size_pt.unwrap_or(base.font.size_pt),
            bold: font.bold.unwrap_or(base.font.bold),
            italic: font.italic.unwrap_or(base.font.italic),
            color_rgb: font.color_rgb.unwrap_or(base.font.color_rgb),
        },
        paragraph: ResolvedParagraph {
            alignment: paragraph.alignment.unwrap_or(base.paragraph.alignment),
            line_spacing: paragraph
                .line_spacing
                .unwrap_or(base.paragraph.line_spacing),
            space_before_pt: paragraph
                .space_before_pt
                .unwrap_or(base.paragraph.space_before_pt),
            space_after_pt: paragraph
                .space_after_pt
                .unwrap_or(base.paragraph.space_after_pt),
            first_line_indent_cm: paragraph
                .first_line_indent_cm
                .unwrap_or(base.paragraph.first_line_indent_cm),
            page_break_before: paragraph
                .page_break_before
                .unwrap_or(base.paragraph.page_break_before),
        },
    }
}

/// First-set-wins: the accumulator is always the more specific side.
fn merge_font(acc: &mut FontConfig, next: &FontConfig) {
    if acc.family.is_none() {
        acc.family = next.family;
    }
    if acc.size_pt.is_none() {
        acc.size_pt = next.size_pt;
    }
    if acc.bold.is_none() {
        acc.bold = next.bold;
    }
    if acc.italic.is_none() {
        acc.italic = next.italic;
    }
    if acc.color_rgb.is_none() {
        acc.color_rgb = next.color_rgb;
    }
}

fn merge_paragraph(acc: &mut ParagraphConfig, next: &ParagraphConfig) {
    if acc.alignment.is_none() {
        acc.alignment = next.alignment;
    }
    if acc.line_spacing.is_none() {
        acc.line_spacing = next.line_spacing;
    }
    if acc.space_before_pt.is_none() {
        acc.space_before_pt = next.space_before_pt;
    }
    if acc.space_after_pt.is_none() {
        acc.space_after_pt = next.space_after_pt;
    }
    if acc.first_line_indent_cm.is_none() {
        acc.first_line_indent_cm = next.first_line_indent_cm;
    }
    if acc.page_break_before.is_none() {
        acc.page_break_before = next.page_break_before;
    }
}

fn warn_conflicts(matched: &[(u8, usize)], template: &TemplateConfig, block: &Block) {
    for window in matched.windows(2) {
        let (tier_a, a) = window[0];
        let (tier_b, b) = window[1];
        if tier_a == tier_b && conflicting_fields(&template.styles[a], &template.styles[b]) {
            log::warn!(
                "styles '{}' and '{}' conflict at specificity {} for block {}; '{}' wins",
                template.styles[a].name,
                template.styles[b].name,
                tier_a,
                block.index,
                template.styles[a].name,
            );
        }
    }
}

fn conflicting_fields(a: &StyleConfig, b: &StyleConfig) -> bool {
    fn clash<T: PartialEq + Copy>(x: Option<T>, y: Option<T>) -> bool {
        matches!((x, y), (Some(p), Some(q)) if p != q)
    }

    clash(a.font.family, b.font.family)
        || clash(a.font.size_pt, b.font.size_pt)
        || clash(a.font.bold, b.font.bold)
        || clash(a.font.italic, b.font.italic)
        || clash(a.font.color_rgb, b.font.color_rgb)
        || clash(a.paragraph.alignment, b.paragraph.alignment)
        || clash(a.paragraph.line_spacing, b.paragraph.line_spacing)
        || clash(a.paragraph.space_before_pt, b.paragraph.space_before_pt)
        || clash(a.paragraph.space_after_pt, b.paragraph.space_after_pt)
        || clash(
            a.paragraph.first_line_indent_cm,
            b.paragraph.first_line_indent_cm,
        )
        || clash(a.paragraph.page_break_before, b.paragraph.page_break_before)
}
