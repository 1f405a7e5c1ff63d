//! Analysis result types.

use super::{Block, Section, SectionRole};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Detected document category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Academic thesis with bilingual front matter and numbered chapters
    AcademicThesis,
    /// Technical documentation (code blocks, API-style headings)
    TechnicalDoc,
    /// Anything else, including ambiguous input
    #[default]
    Generic,
}

/// Complete result of structural analysis.
///
/// Owned exclusively by the caller; the analyzer holds no state across
/// calls, so identical input always yields an identical result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysisResult {
    /// Detected document category
    pub document_type: DocumentType,

    /// The analyzed blocks, in source order
    pub blocks: Vec<Block>,

    /// Sections in document order; every block belongs to exactly one
    pub sections: Vec<Section>,

    /// Roles actually found in the document
    pub detected_components: BTreeSet<SectionRole>,

    /// Fraction of expected roles found for the detected type, in [0, 1]
    pub confidence_score: f32,

    /// Structural quality heuristic in [0, 1]
    pub quality_score: f32,
}

impl DocumentAnalysisResult {
    /// Create an empty result for input with no content.
    pub fn empty() -> Self {
        Self {
            document_type: DocumentType::Generic,
            blocks: Vec::new(),
            sections: Vec::new(),
            detected_components: BTreeSet::new(),
            confidence_score: 0.0,
            quality_score: 0.0,
        }
    }

    /// Check if the document was classified as an academic thesis.
    pub fn is_academic(&self) -> bool {
        self.document_type == DocumentType::AcademicThesis
    }

    /// Number of analyzed blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over sections carrying the given role.
    pub fn sections_with_role(&self, role: SectionRole) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.role == role)
    }

    /// Find the section that owns the block at `index`.
    pub fn section_for_block(&self, index: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(index))
    }

    /// Roles from `expected` that the document does not contain.
    pub fn missing_components(&self, expected: &[SectionRole]) -> Vec<SectionRole> {
        expected
            .iter()
            .copied()
            .filter(|role| !self.detected_components.contains(role))
            .collect()
    }
}
