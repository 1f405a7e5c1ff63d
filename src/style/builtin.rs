//! Built-in templates registered at startup.
//!
//! The graduation-thesis template follows the usual Chinese graduate-school
//! format rules: 黑体 chapter heads at 三号, 宋体 body at 小四 with 1.5 line
//! spacing and a two-character first-line indent, Times New Roman for the
//! English front matter.

use super::template::{
    Alignment, FontConfig, FontFamily, ParagraphConfig, StyleConfig, StyleSelector,
    TemplateConfig,
};
use crate::model::{BlockKind, SectionRole};

/// Name of the fallback template.
pub const DEFAULT_TEMPLATE: &str = "default";

/// Name of the graduation thesis template.
pub const GRADUATION_THESIS_TEMPLATE: &str = "graduation-thesis";

/// Name of the technical documentation template.
pub const TECHNICAL_DOC_TEMPLATE: &str = "technical-doc";

/// All built-in templates.
pub fn all() -> Vec<TemplateConfig> {
    vec![default_template(), graduation_thesis(), technical_doc()]
}

/// Plain template for general documents.
pub fn default_template() -> TemplateConfig {
    let heading = |level: u8, size: f32| {
        StyleConfig::new(
            format!("heading-{level}"),
            StyleSelector::for_kind_level(BlockKind::Heading, level),
        )
        .with_font(
            FontConfig::new()
                .with_family(FontFamily::MicrosoftYaHei)
                .with_size(size)
                .with_bold(true),
        )
        .with_paragraph(ParagraphConfig::new().with_space_before(12.0).with_space_after(6.0))
    };

    TemplateConfig::new(DEFAULT_TEMPLATE, "标准格式，适合一般文档")
        .with_author("mdstyler")
        .with_style(
            StyleConfig::new("body", StyleSelector::for_kind(BlockKind::Paragraph)).with_font(
                FontConfig::new()
                    .with_family(FontFamily::MicrosoftYaHei)
                    .with_size(11.0),
            ),
        )
        .with_style(heading(1, 18.0))
        .with_style(heading(2, 16.0))
        .with_style(heading(3, 14.0))
        .with_style(heading(4, 12.0))
        .with_style(
            StyleConfig::new("code", StyleSelector::for_kind(BlockKind::CodeBlock)).with_font(
                FontConfig::new()
                    .with_family(FontFamily::CourierNew)
                    .with_size(10.5),
            ),
        )
        .with_style(
            StyleConfig::new("quote", StyleSelector::for_kind(BlockKind::Quote))
                .with_font(FontConfig::new().with_italic(true))
                .with_paragraph(ParagraphConfig::new().with_first_line_indent(0.5)),
        )
}

/// Graduate thesis template.
pub fn graduation_thesis() -> TemplateConfig {
    let chapter_head_font = || {
        FontConfig::new()
            .with_family(FontFamily::SimHei)
            .with_size(16.0)
            .with_bold(true)
    };
    // front-matter headings and chapter heads share the same page geometry
    let chapter_head_paragraph = || {
        ParagraphConfig::new()
            .with_alignment(Alignment::Center)
            .with_space_before(48.0)
            .with_space_after(24.0)
            .with_line_spacing(1.5)
            .with_page_break_before(true)
    };

    TemplateConfig::new(GRADUATION_THESIS_TEMPLATE, "研究生学位论文格式规范")
        .with_author("mdstyler")
        .with_style(
            StyleConfig::new("body", StyleSelector::for_kind(BlockKind::Paragraph))
                .with_font(FontConfig::new().with_family(FontFamily::SimSun).with_size(12.0))
                .with_paragraph(
                    ParagraphConfig::new()
                        .with_alignment(Alignment::Justify)
                        .with_line_spacing(1.5)
                        .with_first_line_indent(0.74),
                ),
        )
        .with_style(
            StyleConfig::new("list", StyleSelector::for_kind(BlockKind::List))
                .with_font(FontConfig::new().with_family(FontFamily::SimSun).with_size(12.0))
                .with_paragraph(
                    ParagraphConfig::new()
                        .with_alignment(Alignment::Justify)
                        .with_line_spacing(1.5),
                ),
        )
        .with_style(
            StyleConfig::new("code", StyleSelector::for_kind(BlockKind::CodeBlock))
                .with_font(
                    FontConfig::new()
                        .with_family(FontFamily::CourierNew)
                        .with_size(10.5),
                )
                .with_paragraph(
                    ParagraphConfig::new()
                        .with_alignment(Alignment::Left)
                        .with_line_spacing(1.0),
                ),
        )
        .with_style(
            StyleConfig::new("table", StyleSelector::for_kind(BlockKind::Table))
                .with_font(FontConfig::new().with_family(FontFamily::SimSun).with_size(10.5))
                .with_paragraph(ParagraphConfig::new().with_alignment(Alignment::Center)),
        )
        .with_style(
            StyleConfig::new("quote", StyleSelector::for_kind(BlockKind::Quote))
                .with_font(FontConfig::new().with_family(FontFamily::KaiTi).with_size(12.0))
                .with_paragraph(
                    ParagraphConfig::new()
                        .with_alignment(Alignment::Justify)
                        .with_first_line_indent(0.74),
                ),
        )
        .with_style(
            StyleConfig::new(
                "heading-1",
                StyleSelector::for_kind_level(BlockKind::Heading, 1),
            )
            .with_font(chapter_head_font())
            .with_paragraph(chapter_head_paragraph()),
        )
        .with_style(
            StyleConfig::new(
                "heading-2",
                StyleSelector::for_kind_level(BlockKind::Heading, 2),
            )
            .with_font(
                FontConfig::new()
                    .with_family(FontFamily::SimHei)
                    .with_size(14.0)
                    .with_bold(true),
            )
            .with_paragraph(
                ParagraphConfig::new()
                    .with_alignment(Alignment::Justify)
                    .with_space_before(6.0)
                    .with_line_spacing(1.5),
            ),
        )
        .with_style(
            StyleConfig::new(
                "heading-3",
                StyleSelector::for_kind_level(BlockKind::Heading, 3),
            )
            .with_font(
                FontConfig::new()
                    .with_family(FontFamily::SimSun)
                    .with_size(12.0)
                    .with_bold(true),
            )
            .with_paragraph(
                ParagraphConfig::new()
                    .with_alignment(Alignment::Justify)
                    .with_space_before(6.0)
                    .with_line_spacing(1.5),
            ),
        )
        .with_style(
            StyleConfig::new(
                "title-cn",
                StyleSelector::for_role(SectionRole::TitleCn).with_kind(BlockKind::Heading),
            )
            .with_font(
                FontConfig::new()
                    .with_family(FontFamily::SimHei)
                    .with_size(18.0)
                    .with_bold(true),
            )
            .with_paragraph(
                ParagraphConfig::new()
                    .with_alignment(Alignment::Center)
                    .with_space_after(24.0),
            ),
        )
        .with_style(
            StyleConfig::new(
                "title-en",
                StyleSelector::for_role(SectionRole::TitleEn).with_kind(BlockKind::Heading),
            )
            .with_font(
                FontConfig::new()
                    .with_family(FontFamily::TimesNewRoman)
                    .with_size(18.0)
                    .with_bold(true),
            )
            .with_paragraph(
                ParagraphConfig::new()
                    .with_alignment(Alignment::Center)
                    .with_space_after(24.0),
            ),
        )
        .with_style(
            StyleConfig::new(
                "abstract-title-cn",
                StyleSelector::for_role(SectionRole::AbstractCn).with_kind(BlockKind::Heading),
            )
            .with_font(chapter_head_font())
            .with_paragraph(chapter_head_paragraph()),
        )
        .with_style(
            StyleConfig::new(
                "abstract-title-en",
                StyleSelector::for_role(SectionRole::AbstractEn).with_kind(BlockKind::Heading),
            )
            .with_font(
                FontConfig::new()
                    .with_family(FontFamily::TimesNewRoman)
                    .with_size(16.0)
                    .with_bold(true),
            )
            .with_paragraph(chapter_head_paragraph()),
        )
        .with_style(
            StyleConfig::new("keywords-cn", StyleSelector::for_role(SectionRole::KeywordsCn))
                .with_font(FontConfig::new().with_family(FontFamily::SimSun).with_size(12.0))
                .with_paragraph(
                    ParagraphConfig::new()
                        .with_alignment(Alignment::Justify)
                        .with_line_spacing(1.5)
                        .with_first_line_indent(0.74),
                ),
        )
        .with_style(
            StyleConfig::new("keywords-en", StyleSelector::for_role(SectionRole::KeywordsEn))
                .with_font(
                    FontConfig::new()
                        .with_family(FontFamily::TimesNewRoman)
                        .with_size(12.0),
                )
                .with_paragraph(
                    ParagraphConfig::new()
                        .with_alignment(Alignment::Justify)
                        .with_line_spacing(1.5)
                        .with_first_line_indent(0.74),
                ),
        )
        .with_style(
            StyleConfig::new(
                "conclusion-title",
                StyleSelector::for_role(SectionRole::Conclusion).with_kind(BlockKind::Heading),
            )
            .with_font(chapter_head_font())
            .with_paragraph(chapter_head_paragraph()),
        )
        .with_style(
            StyleConfig::new(
                "references-title",
                StyleSelector::for_role(SectionRole::References).with_kind(BlockKind::Heading),
            )
            .with_font(chapter_head_font())
            .with_paragraph(chapter_head_paragraph()),
        )
        .with_style(
            StyleConfig::new(
                "references-body",
                StyleSelector::for_role(SectionRole::References).with_kind(BlockKind::Paragraph),
            )
            .with_font(FontConfig::new().with_family(FontFamily::SimSun).with_size(10.5))
            .with_paragraph(
                ParagraphConfig::new()
                    .with_alignment(Alignment::Left)
                    .with_line_spacing(1.5)
                    .with_first_line_indent(0.0),
            ),
        )
}

/// Template for technical documentation.
pub fn technical_doc() -> TemplateConfig {
    let heading = |level: u8, size: f32, before: f32, after: f32| {
        StyleConfig::new(
            format!("heading-{level}"),
            StyleSelector::for_kind_level(BlockKind::Heading, level),
        )
        .with_font(
            FontConfig::new()
                .with_family(FontFamily::Arial)
                .with_size(size)
                .with_bold(true),
        )
        .with_paragraph(
            ParagraphConfig::new()
                .with_space_before(before)
                .with_space_after(after),
        )
    };

    TemplateConfig::new(TECHNICAL_DOC_TEMPLATE, "技术文档格式")
        .with_author("mdstyler")
        .with_style(
            StyleConfig::new("body", StyleSelector::for_kind(BlockKind::Paragraph))
                .with_font(
                    FontConfig::new()
                        .with_family(FontFamily::TimesNewRoman)
                        .with_size(11.0),
                )
                .with_paragraph(
                    ParagraphConfig::new()
                        .with_alignment(Alignment::Left)
                        .with_line_spacing(1.15),
                ),
        )
        .with_style(
            StyleConfig::new("heading", StyleSelector::for_kind(BlockKind::Heading)).with_font(
                FontConfig::new()
                    .with_family(FontFamily::Arial)
                    .with_size(12.0)
                    .with_bold(true),
            ),
        )
        .with_style(heading(1, 20.0, 0.0, 12.0))
        .with_style(heading(2, 16.0, 12.0, 6.0))
        .with_style(heading(3, 13.0, 6.0, 3.0))
        .with_style(
            StyleConfig::new("code", StyleSelector::for_kind(BlockKind::CodeBlock))
                .with_font(
                    FontConfig::new()
                        .with_family(FontFamily::CourierNew)
                        .with_size(10.0),
                )
                .with_paragraph(ParagraphConfig::new().with_alignment(Alignment::Left)),
        )
        .with_style(
            StyleConfig::new("table", StyleSelector::for_kind(BlockKind::Table)).with_font(
                FontConfig::new().with_family(FontFamily::Arial).with_size(10.0),
            ),
        )
        .with_style(
            StyleConfig::new("quote", StyleSelector::for_kind(BlockKind::Quote))
                .with_font(FontConfig::new().with_italic(true))
                .with_paragraph(ParagraphConfig::new().with_first_line_indent(0.5)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_validate() {
        for template in all() {
            template.validate().unwrap_or_else(|e| {
                panic!("builtin template '{}' is invalid: {e}", template.name)
            });
        }
    }

    #[test]
    fn test_builtin_names_are_distinct() {
        let names: Vec<_> = all().into_iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&DEFAULT_TEMPLATE.to_string()));
        assert!(names.contains(&GRADUATION_THESIS_TEMPLATE.to_string()));
        assert!(names.contains(&TECHNICAL_DOC_TEMPLATE.to_string()));
    }

    #[test]
    fn test_thesis_chapter_heads_break_pages() {
        let template = graduation_thesis();
        let h1 = template
            .styles
            .iter()
            .find(|s| s.name == "heading-1")
            .expect("heading-1 exists");
        assert_eq!(h1.paragraph.page_break_before, Some(true));
        assert_eq!(h1.font.family, Some(FontFamily::SimHei));
    }
}
