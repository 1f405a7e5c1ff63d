//! Scoring configuration and score computation.
//!
//! The weights are heuristic and only their relative ordering carries
//! meaning, so they live in a config struct instead of hard constants.

use crate::model::{Block, DocumentType, Section, SectionRole};
use std::collections::BTreeSet;

/// Weights and expectations used by document-type voting and scoring.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Weight of a bilingual 摘要/Abstract pairing toward `AcademicThesis`
    pub abstract_pair_weight: f32,

    /// Weight of 关键词/Keywords markers toward `AcademicThesis`
    pub keywords_weight: f32,

    /// Weight of chaptered headings (第N章, Chapter N) toward `AcademicThesis`
    pub chapter_weight: f32,

    /// Weight of a references heading toward `AcademicThesis`
    pub references_weight: f32,

    /// Weight of code blocks toward `TechnicalDoc`
    pub code_block_weight: f32,

    /// Weight of API-style headings toward `TechnicalDoc`
    pub api_heading_weight: f32,

    /// Roles expected of an academic thesis; the confidence score is the
    /// fraction of these actually found
    pub thesis_expected: Vec<SectionRole>,

    /// Roles expected of technical documentation
    pub technical_expected: Vec<SectionRole>,

    /// Quality weight of canonical section ordering
    pub order_weight: f32,

    /// Quality weight of sections carrying non-empty body content
    pub content_weight: f32,

    /// Quality weight of CN/EN pairing (theses only)
    pub bilingual_weight: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            abstract_pair_weight: 2.0,
            keywords_weight: 1.0,
            chapter_weight: 2.0,
            references_weight: 1.0,
            code_block_weight: 2.0,
            api_heading_weight: 1.0,
            thesis_expected: vec![
                SectionRole::AbstractCn,
                SectionRole::AbstractEn,
                SectionRole::Chapter,
                SectionRole::References,
                SectionRole::Conclusion,
            ],
            technical_expected: vec![SectionRole::Chapter, SectionRole::References],
            order_weight: 0.4,
            content_weight: 0.4,
            bilingual_weight: 0.2,
        }
    }
}

impl ScoringConfig {
    /// Create the default scoring configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected roles for a document type; `Generic` expects nothing.
    pub fn expected_roles(&self, document_type: DocumentType) -> &[SectionRole] {
        match document_type {
            DocumentType::AcademicThesis => &self.thesis_expected,
            DocumentType::TechnicalDoc => &self.technical_expected,
            DocumentType::Generic => &[],
        }
    }

    /// Fraction of expected roles found, clamped to [0, 1].
    pub(crate) fn confidence(
        &self,
        document_type: DocumentType,
        detected: &BTreeSet<SectionRole>,
    ) -> f32 {
        let expected = self.expected_roles(document_type);
        if expected.is_empty() {
            return 0.0;
        }
        let found = expected.iter().filter(|role| detected.contains(role)).count();
        (found as f32 / expected.len() as f32).clamp(0.0, 1.0)
    }

    /// Structural quality heuristic, clamped to [0, 1].
    pub(crate) fn quality(
        &self,
        document_type: DocumentType,
        sections: &[Section],
        blocks: &[Block],
        detected: &BTreeSet<SectionRole>,
    ) -> f32 {
        if sections.is_empty() {
            return 0.0;
        }
        let mut score =
            self.order_weight * order_score(sections) + self.content_weight * content_score(sections, blocks);
        let mut total = self.order_weight + self.content_weight;
        if document_type == DocumentType::AcademicThesis {
            score += self.bilingual_weight * bilingual_score(detected);
            total += self.bilingual_weight;
        }
        if total <= f32::EPSILON {
            return 0.0;
        }
        (score / total).clamp(0.0, 1.0)
    }
}

/// Canonical front-to-back position of a role, if it has one.
fn canonical_rank(role: SectionRole) -> Option<u8> {
    match role {
        SectionRole::TitleCn => Some(0),
        SectionRole::TitleEn => Some(1),
        SectionRole::AbstractCn => Some(2),
        SectionRole::KeywordsCn => Some(3),
        SectionRole::AbstractEn => Some(4),
        SectionRole::KeywordsEn => Some(5),
        SectionRole::Chapter => Some(6),
        SectionRole::Conclusion => Some(7),
        SectionRole::References => Some(8),
        SectionRole::Subsection | SectionRole::Unknown => None,
    }
}

/// Fraction of adjacent first-occurrence pairs in canonical order.
fn order_score(sections: &[Section]) -> f32 {
    let mut seen = BTreeSet::new();
    let mut ranks = Vec::new();
    for section in sections {
        if let Some(rank) = canonical_rank(section.role) {
            if seen.insert(section.role) {
                ranks.push(rank);
            }
        }
    }
    if ranks.len() < 2 {
        return 1.0;
    }
    let ordered = ranks.windows(2).filter(|pair| pair[0] <= pair[1]).count();
    ordered as f32 / (ranks.len() - 1) as f32
}

/// Fraction of sections carrying non-empty body text beyond their heading.
fn content_score(sections: &[Section], blocks: &[Block]) -> f32 {
    let filled = sections
        .iter()
        .filter(|section| {
            section
                .blocks
                .iter()
                .filter_map(|&i| blocks.get(i))
                .any(|block| !block.is_heading() && !block.is_empty())
        })
        .count();
    filled as f32 / sections.len() as f32
}

fn bilingual_score(detected: &BTreeSet<SectionRole>) -> f32 {
    let abstracts = detected.contains(&SectionRole::AbstractCn)
        && detected.contains(&SectionRole::AbstractEn);
    let keywords = detected.contains(&SectionRole::KeywordsCn)
        && detected.contains(&SectionRole::KeywordsEn);
    match (abstracts, keywords) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn detected(roles: &[SectionRole]) -> BTreeSet<SectionRole> {
        roles.iter().copied().collect()
    }

    #[test]
    fn test_confidence_fraction() {
        let config = ScoringConfig::default();
        let found = detected(&[
            SectionRole::AbstractCn,
            SectionRole::AbstractEn,
            SectionRole::Chapter,
            SectionRole::References,
        ]);
        let score = config.confidence(DocumentType::AcademicThesis, &found);
        assert!((score - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_generic_confidence_is_zero() {
        let config = ScoringConfig::default();
        let found = detected(&[SectionRole::Chapter]);
        assert_eq!(config.confidence(DocumentType::Generic, &found), 0.0);
    }

    #[test]
    fn test_order_score_detects_swap() {
        let in_order = vec![
            Section::new(SectionRole::AbstractCn, "摘要", 1, 0.95),
            Section::new(SectionRole::Chapter, "第一章", 1, 0.9),
            Section::new(SectionRole::References, "参考文献", 1, 0.95),
        ];
        assert_eq!(order_score(&in_order), 1.0);

        let swapped = vec![
            Section::new(SectionRole::References, "参考文献", 1, 0.95),
            Section::new(SectionRole::AbstractCn, "摘要", 1, 0.95),
            Section::new(SectionRole::Chapter, "第一章", 1, 0.9),
        ];
        assert!(order_score(&swapped) < 1.0);
    }

    #[test]
    fn test_content_score() {
        let blocks = vec![
            Block::heading(1, "第一章", 0),
            Block::paragraph("正文内容", 1),
            Block::heading(1, "第二章", 2),
        ];
        let mut filled = Section::new(SectionRole::Chapter, "第一章", 1, 0.9);
        filled.blocks.extend([0, 1]);
        let mut hollow = Section::new(SectionRole::Chapter, "第二章", 1, 0.9);
        hollow.blocks.push(2);

        let sections = vec![filled, hollow];
        assert!((content_score(&sections, &blocks) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bilingual_score() {
        assert_eq!(
            bilingual_score(&detected(&[
                SectionRole::AbstractCn,
                SectionRole::AbstractEn,
                SectionRole::KeywordsCn,
                SectionRole::KeywordsEn,
            ])),
            1.0
        );
        assert_eq!(
            bilingual_score(&detected(&[SectionRole::AbstractCn, SectionRole::AbstractEn])),
            0.5
        );
        assert_eq!(bilingual_score(&detected(&[SectionRole::AbstractCn])), 0.0);
    }
}
