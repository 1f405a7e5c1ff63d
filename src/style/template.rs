//! Template configuration types.
//!
//! A template is a pure data value: a named, ordered catalog of style rules.
//! Every font/paragraph field is optional on the template side — `Some`
//! means "set", `None` means "inherit from the next lower-specificity
//! match" — so partial styles compose through the resolver's cascade.

use crate::error::{Error, Result};
use crate::model::{Block, BlockKind, SectionRole};
use serde::{Deserialize, Serialize};

/// Known font families.
///
/// A closed set: a style referencing anything else is a fatal
/// template-schema violation. Chinese aliases are accepted on input and
/// produced on output, matching what word-processor renderers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontFamily {
    /// 宋体 — default CJK serif body font
    SimSun,
    /// 黑体 — CJK sans used for headings
    SimHei,
    /// 楷体 — CJK script font used for quotes
    KaiTi,
    /// 仿宋 — CJK imitation-Song font
    FangSong,
    /// 微软雅黑 — CJK UI sans
    MicrosoftYaHei,
    /// Latin serif body font
    TimesNewRoman,
    /// Latin sans font
    Arial,
    /// Monospace font for code
    CourierNew,
}

impl FontFamily {
    /// Resolve a family from its English or Chinese name.
    pub fn from_name(name: &str) -> Result<Self> {
        let key = name.trim().to_lowercase();
        match key.as_str() {
            "宋体" | "simsun" => Ok(FontFamily::SimSun),
            "黑体" | "simhei" => Ok(FontFamily::SimHei),
            "楷体" | "kaiti" => Ok(FontFamily::KaiTi),
            "仿宋" | "fangsong" => Ok(FontFamily::FangSong),
            "微软雅黑" | "microsoft yahei" | "microsoftyahei" => Ok(FontFamily::MicrosoftYaHei),
            "times new roman" | "timesnewroman" | "times" => Ok(FontFamily::TimesNewRoman),
            "arial" => Ok(FontFamily::Arial),
            "courier new" | "couriernew" | "courier" => Ok(FontFamily::CourierNew),
            _ => Err(Error::UnknownFontFamily(name.to_string())),
        }
    }

    /// Name as a word-processor renderer expects it.
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::SimSun => "宋体",
            FontFamily::SimHei => "黑体",
            FontFamily::KaiTi => "楷体",
            FontFamily::FangSong => "仿宋",
            FontFamily::MicrosoftYaHei => "微软雅黑",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Arial => "Arial",
            FontFamily::CourierNew => "Courier New",
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for FontFamily {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        FontFamily::from_name(&value)
    }
}

impl From<FontFamily> for String {
    fn from(family: FontFamily) -> Self {
        family.name().to_string()
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Font settings of one style rule. Unset fields inherit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family
    pub family: Option<FontFamily>,

    /// Size in points
    pub size_pt: Option<f32>,

    /// Bold
    pub bold: Option<bool>,

    /// Italic
    pub italic: Option<bool>,

    /// Color as RGB
    pub color_rgb: Option<(u8, u8, u8)>,
}

impl FontConfig {
    /// Create a font config with every field inherited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the size in points.
    pub fn with_size(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    /// Set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set the color.
    pub fn with_color(mut self, rgb: (u8, u8, u8)) -> Self {
        self.color_rgb = Some(rgb);
        self
    }
}

/// Paragraph settings of one style rule. Unset fields inherit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphConfig {
    /// Text alignment
    pub alignment: Option<Alignment>,

    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: Option<f32>,

    /// Space before the paragraph in points
    pub space_before_pt: Option<f32>,

    /// Space after the paragraph in points
    pub space_after_pt: Option<f32>,

    /// First line indent in centimeters
    pub first_line_indent_cm: Option<f32>,

    /// Force a page break before the paragraph
    pub page_break_before: Option<bool>,
}

impl ParagraphConfig {
    /// Create a paragraph config with every field inherited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    /// Set space before in points.
    pub fn with_space_before(mut self, points: f32) -> Self {
        self.space_before_pt = Some(points);
        self
    }

    /// Set space after in points.
    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after_pt = Some(points);
        self
    }

    /// Set the first-line indent in centimeters.
    pub fn with_first_line_indent(mut self, cm: f32) -> Self {
        self.first_line_indent_cm = Some(cm);
        self
    }

    /// Set whether a page break precedes the paragraph.
    pub fn with_page_break_before(mut self, page_break: bool) -> Self {
        self.page_break_before = Some(page_break);
        self
    }
}

/// Selects which blocks a style rule applies to.
///
/// Every set field must match; the combination of set fields determines the
/// rule's specificity tier (see the resolver).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSelector {
    /// Section role the containing section must carry
    pub role: Option<SectionRole>,

    /// Block kind to match
    pub kind: Option<BlockKind>,

    /// Heading level to match
    pub level: Option<u8>,
}

impl StyleSelector {
    /// Match any block inside a section with the given role.
    pub fn for_role(role: SectionRole) -> Self {
        Self {
            role: Some(role),
            kind: None,
            level: None,
        }
    }

    /// Match blocks with the given role and heading level.
    pub fn for_role_level(role: SectionRole, level: u8) -> Self {
        Self {
            role: Some(role),
            kind: None,
            level: Some(level),
        }
    }

    /// Match any block of the given kind.
    pub fn for_kind(kind: BlockKind) -> Self {
        Self {
            role: None,
            kind: Some(kind),
            level: None,
        }
    }

    /// Match blocks of the given kind at the given heading level.
    pub fn for_kind_level(kind: BlockKind, level: u8) -> Self {
        Self {
            role: None,
            kind: Some(kind),
            level: Some(level),
        }
    }

    /// Restrict an existing selector to one block kind.
    pub fn with_kind(mut self, kind: BlockKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Check whether no criteria are set at all.
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.kind.is_none() && self.level.is_none()
    }

    /// Check whether every set criterion matches the block in its section.
    pub fn matches(&self, block: &Block, role: SectionRole) -> bool {
        if let Some(wanted) = self.role {
            if wanted != role {
                return false;
            }
        }
        if let Some(wanted) = self.kind {
            if wanted != block.kind {
                return false;
            }
        }
        if let Some(wanted) = self.level {
            if block.level != Some(wanted) {
                return false;
            }
        }
        true
    }

    /// Specificity tier of this selector, 1 (most specific) to 4.
    pub fn specificity(&self) -> u8 {
        match (self.role.is_some(), self.level.is_some()) {
            (true, true) => 1,
            (true, false) => 2,
            (false, true) => 3,
            (false, false) => 4,
        }
    }
}

/// One named style rule inside a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Style name, unique within the template by convention
    pub name: String,

    /// Which blocks the style applies to
    pub selector: StyleSelector,

    /// Font fields this style sets
    #[serde(default)]
    pub font: FontConfig,

    /// Paragraph fields this style sets
    #[serde(default)]
    pub paragraph: ParagraphConfig,
}

impl StyleConfig {
    /// Create a style with the given name and selector.
    pub fn new(name: impl Into<String>, selector: StyleSelector) -> Self {
        Self {
            name: name.into(),
            selector,
            font: FontConfig::default(),
            paragraph: ParagraphConfig::default(),
        }
    }

    /// Set the font fields.
    pub fn with_font(mut self, font: FontConfig) -> Self {
        self.font = font;
        self
    }

    /// Set the paragraph fields.
    pub fn with_paragraph(mut self, paragraph: ParagraphConfig) -> Self {
        self.paragraph = paragraph;
        self
    }
}

/// A named, ordered catalog of style rules.
///
/// Immutable once registered; "editing" a template means registering a new
/// value under the same name. Later-declared styles override earlier ones
/// when they match at the same specificity tier, which is what makes
/// derived templates work: append overrides, never merge by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Registry key
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Template author
    #[serde(default)]
    pub author: String,

    /// Ordered style rules
    #[serde(default)]
    pub styles: Vec<StyleConfig>,
}

impl TemplateConfig {
    /// Create an empty template.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            author: String::new(),
            styles: Vec::new(),
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Append a style rule.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.styles.push(style);
        self
    }

    /// Parse a template from an in-memory JSON string and validate it.
    ///
    /// Reading template files from disk is the persistence layer's job;
    /// this only covers the in-memory registration contract.
    pub fn from_json(json: &str) -> Result<Self> {
        let template: TemplateConfig = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    /// Serialize the template to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check schema constraints. Violations are fatal to registration and
    /// resolution.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidTemplate {
            template: if self.name.is_empty() {
                "<unnamed>".to_string()
            } else {
                self.name.clone()
            },
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("template name is empty".to_string()));
        }
        for (i, style) in self.styles.iter().enumerate() {
            if style.name.trim().is_empty() {
                return Err(invalid(format!("style at index {i} has an empty name")));
            }
            if style.selector.is_empty() {
                return Err(invalid(format!(
                    "style '{}' sets no selector criteria",
                    style.name
                )));
            }
            if let Some(level) = style.selector.level {
                if !(1..=6).contains(&level) {
                    return Err(invalid(format!(
                        "style '{}' selects invalid heading level {level}",
                        style.name
                    )));
                }
            }
            if let Some(size) = style.font.size_pt {
                if size <= 0.0 {
                    return Err(invalid(format!(
                        "style '{}' sets non-positive font size {size}",
                        style.name
                    )));
                }
            }
            if let Some(spacing) = style.paragraph.line_spacing {
                if spacing <= 0.0 {
                    return Err(invalid(format!(
                        "style '{}' sets non-positive line spacing {spacing}",
                        style.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_family_aliases() {
        assert_eq!(FontFamily::from_name("宋体").unwrap(), FontFamily::SimSun);
        assert_eq!(FontFamily::from_name("SimSun").unwrap(), FontFamily::SimSun);
        assert_eq!(
            FontFamily::from_name("Times New Roman").unwrap(),
            FontFamily::TimesNewRoman
        );
        assert!(matches!(
            FontFamily::from_name("Comic Sans"),
            Err(Error::UnknownFontFamily(_))
        ));
    }

    #[test]
    fn test_selector_specificity() {
        assert_eq!(
            StyleSelector::for_role_level(SectionRole::AbstractCn, 1).specificity(),
            1
        );
        assert_eq!(StyleSelector::for_role(SectionRole::Chapter).specificity(), 2);
        assert_eq!(
            StyleSelector::for_kind_level(BlockKind::Heading, 1).specificity(),
            3
        );
        assert_eq!(StyleSelector::for_kind(BlockKind::Paragraph).specificity(), 4);
    }

    #[test]
    fn test_selector_matching() {
        let heading = Block::heading(1, "摘要", 0);
        let selector = StyleSelector::for_role(SectionRole::AbstractCn);
        assert!(selector.matches(&heading, SectionRole::AbstractCn));
        assert!(!selector.matches(&heading, SectionRole::Chapter));

        let leveled = StyleSelector::for_kind_level(BlockKind::Heading, 2);
        assert!(!leveled.matches(&heading, SectionRole::AbstractCn));
    }

    #[test]
    fn test_validate_rejects_empty_selector() {
        let template = TemplateConfig::new("bad", "broken")
            .with_style(StyleConfig::new("body", StyleSelector::default()));
        assert!(matches!(
            template.validate(),
            Err(Error::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let template = TemplateConfig::new("bad", "broken").with_style(StyleConfig::new(
            "h7",
            StyleSelector::for_kind_level(BlockKind::Heading, 7),
        ));
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let template = TemplateConfig::new("custom", "A custom template")
            .with_author("tester")
            .with_style(
                StyleConfig::new("chapter", StyleSelector::for_role(SectionRole::Chapter))
                    .with_font(FontConfig::new().with_family(FontFamily::SimHei).with_size(16.0)),
            );

        let json = template.to_json().unwrap();
        let parsed = TemplateConfig::from_json(&json).unwrap();
        assert_eq!(parsed, template);
    }

    #[test]
    fn test_from_json_rejects_unknown_family() {
        let json = r#"{
            "name": "bad",
            "description": "broken",
            "styles": [{
                "name": "body",
                "selector": { "kind": "paragraph" },
                "font": { "family": "Wingdings" }
            }]
        }"#;
        assert!(TemplateConfig::from_json(json).is_err());
    }
}
