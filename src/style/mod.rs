//! Template catalog and style resolution.

pub mod builtin;
mod registry;
mod resolve;
mod template;

pub use registry::TemplateRegistry;
pub use resolve::{resolve, ResolvedFont, ResolvedParagraph, ResolvedStyle, StylingPlan};
pub use template::{
    Alignment, FontConfig, FontFamily, ParagraphConfig, StyleConfig, StyleSelector,
    TemplateConfig,
};
