//! Document structure analysis.
//!
//! Classifies the document type by evidence-weighted voting, segments the
//! block sequence into role-tagged sections, and computes confidence and
//! quality scores. Analysis never fails: unrecognizable input degrades to
//! `Generic`/`Unknown` with zero confidence instead of returning an error.

mod rules;
mod scoring;

pub use scoring::ScoringConfig;

use crate::model::{
    Block, BlockKind, DocumentAnalysisResult, DocumentType, Section, SectionRole,
};
use rules::{contains_cjk, RolePatterns};
use std::collections::{BTreeMap, BTreeSet};

/// Analyzes block sequences into structural models.
///
/// Holds only compiled patterns and scoring weights; `analyze` is a pure
/// function of its input, so one analyzer can serve many documents from
/// parallel workers.
pub struct DocumentAnalyzer {
    patterns: RolePatterns,
    scoring: ScoringConfig,
}

impl DocumentAnalyzer {
    /// Create an analyzer with default scoring weights.
    pub fn new() -> Self {
        Self::with_scoring(ScoringConfig::default())
    }

    /// Create an analyzer with custom scoring weights.
    pub fn with_scoring(scoring: ScoringConfig) -> Self {
        Self {
            patterns: RolePatterns::new(),
            scoring,
        }
    }

    /// Analyze a block sequence into a structural model.
    ///
    /// Worst case for unrecognizable input: `Generic` type, every block in
    /// an `Unknown` section, both scores 0.
    pub fn analyze(&self, blocks: Vec<Block>) -> DocumentAnalysisResult {
        if blocks.is_empty() {
            return DocumentAnalysisResult::empty();
        }

        let classified = self.classify_headings(&blocks);
        let document_type = self.vote_document_type(&blocks, &classified);
        let sections = self.segment(&blocks, &classified);

        let detected_components: BTreeSet<SectionRole> = sections
            .iter()
            .map(|section| section.role)
            .filter(|role| role.is_recognized())
            .collect();
        let confidence_score = self.scoring.confidence(document_type, &detected_components);
        let quality_score =
            self.scoring
                .quality(document_type, &sections, &blocks, &detected_components);

        log::debug!(
            "analyzed {} blocks into {} sections: {:?}, confidence {:.2}, quality {:.2}",
            blocks.len(),
            sections.len(),
            document_type,
            confidence_score,
            quality_score
        );

        DocumentAnalysisResult {
            document_type,
            blocks,
            sections,
            detected_components,
            confidence_score,
            quality_score,
        }
    }

    /// Classify every heading once; positions align with `blocks`.
    fn classify_headings(&self, blocks: &[Block]) -> Vec<Option<(SectionRole, f32)>> {
        let mut first_heading = true;
        blocks
            .iter()
            .map(|block| {
                if !block.is_heading() {
                    return None;
                }
                let hit = match self.patterns.classify(&block.text) {
                    Some(hit) => Some(hit),
                    // an opening heading that fits no rule is the document title
                    None if first_heading => {
                        if contains_cjk(&block.text) {
                            Some((SectionRole::TitleCn, 0.6))
                        } else {
                            Some((SectionRole::TitleEn, 0.6))
                        }
                    }
                    None => None,
                };
                first_heading = false;
                hit
            })
            .collect()
    }

    /// Evidence-weighted vote between document types; ties are `Generic`.
    fn vote_document_type(
        &self,
        blocks: &[Block],
        classified: &[Option<(SectionRole, f32)>],
    ) -> DocumentType {
        let roles: BTreeSet<SectionRole> =
            classified.iter().flatten().map(|(role, _)| *role).collect();
        let weights = &self.scoring;

        let mut academic = 0.0f32;
        if roles.contains(&SectionRole::AbstractCn) && roles.contains(&SectionRole::AbstractEn) {
            academic += weights.abstract_pair_weight;
        }
        let has_keyword_marker = roles.contains(&SectionRole::KeywordsCn)
            || roles.contains(&SectionRole::KeywordsEn)
            || blocks
                .iter()
                .any(|b| !b.is_heading() && self.patterns.is_keywords_marker(&b.text));
        if has_keyword_marker {
            academic += weights.keywords_weight;
        }
        if roles.contains(&SectionRole::Chapter) {
            academic += weights.chapter_weight;
        }
        if roles.contains(&SectionRole::References) {
            academic += weights.references_weight;
        }

        let mut technical = 0.0f32;
        if blocks.iter().any(|b| b.kind == BlockKind::CodeBlock) {
            technical += weights.code_block_weight;
        }
        if blocks
            .iter()
            .any(|b| b.is_heading() && self.patterns.is_api_heading(&b.text))
        {
            technical += weights.api_heading_weight;
        }

        if academic > technical {
            DocumentType::AcademicThesis
        } else if technical > academic {
            DocumentType::TechnicalDoc
        } else {
            DocumentType::Generic
        }
    }

    /// Walk blocks in order, opening a section per heading.
    fn segment(
        &self,
        blocks: &[Block],
        classified: &[Option<(SectionRole, f32)>],
    ) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        let mut current: Option<usize> = None;
        let mut singletons: BTreeMap<SectionRole, usize> = BTreeMap::new();
        let mut open_chapter_level: Option<u8> = None;
        let mut prev_heading_level: Option<u8> = None;

        for (i, block) in blocks.iter().enumerate() {
            if !block.is_heading() {
                let idx = match current {
                    Some(idx) => idx,
                    None => {
                        // content before the first heading: implicit preamble
                        sections.push(Section::new(SectionRole::Unknown, "", 0, 0.0));
                        sections.len() - 1
                    }
                };
                sections[idx].blocks.push(i);
                current = Some(idx);
                continue;
            }

            let level = block.level.unwrap_or(1);
            if let Some(prev) = prev_heading_level {
                if level > prev + 1 {
                    log::warn!(
                        "inconsistent heading nesting at block {}: level {} after level {}",
                        i,
                        level,
                        prev
                    );
                }
            }
            prev_heading_level = Some(level);

            let (role, confidence) = match classified[i] {
                Some(hit) => hit,
                None => match open_chapter_level {
                    Some(chapter_level) if level > chapter_level => {
                        (SectionRole::Subsection, 0.6)
                    }
                    _ => (SectionRole::Unknown, 0.0),
                },
            };

            if role == SectionRole::Chapter {
                open_chapter_level = Some(level);
            }

            if role.is_singleton() {
                if let Some(&existing) = singletons.get(&role) {
                    // duplicate heading of a singleton role folds into the
                    // canonical section; content is never dropped
                    log::debug!("merging duplicate {:?} heading at block {}", role, i);
                    sections[existing].blocks.push(i);
                    current = Some(existing);
                    continue;
                }
            }

            let mut section = Section::new(role, block.text.clone(), level, confidence);
            section.blocks.push(i);
            sections.push(section);
            let idx = sections.len() - 1;
            if role.is_singleton() {
                singletons.insert(role, idx);
            }
            current = Some(idx);
        }

        sections
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze blocks with default patterns and scoring.
pub fn analyze(blocks: Vec<Block>) -> DocumentAnalysisResult {
    DocumentAnalyzer::new().analyze(blocks)
}
