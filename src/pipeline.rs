//! End-to-end orchestration: parse, analyze, resolve.
//!
//! The pipeline bundles a template registry, parse options, and an analyzer
//! so callers get one object to configure at startup and share across
//! worker threads. Batch planning fans out over Rayon and isolates each
//! document's failure so the rest of the batch still completes.

use crate::analyze::{DocumentAnalyzer, ScoringConfig};
use crate::error::Result;
use crate::model::DocumentAnalysisResult;
use crate::parse::{parse_blocks, ParseOptions};
use crate::style::{resolve, StylingPlan, TemplateRegistry};
use rayon::prelude::*;

/// A planned document: the structural analysis plus the styling plan
/// resolved from it.
#[derive(Debug)]
pub struct PlannedDocument {
    /// Structural analysis of the document
    pub analysis: DocumentAnalysisResult,

    /// Per-block style assignments
    pub plan: StylingPlan,
}

/// Reusable conversion front half: Markdown text in, styling plan out.
pub struct Pipeline {
    registry: TemplateRegistry,
    parse_options: ParseOptions,
    analyzer: DocumentAnalyzer,
}

impl Pipeline {
    /// Create a pipeline with built-in templates and default options.
    pub fn new() -> Self {
        Self::with_registry(TemplateRegistry::with_builtins())
    }

    /// Create a pipeline around an existing registry.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            parse_options: ParseOptions::default(),
            analyzer: DocumentAnalyzer::new(),
        }
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set the scoring weights.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.analyzer = DocumentAnalyzer::with_scoring(scoring);
        self
    }

    /// The template registry.
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for startup-phase registration.
    pub fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }

    /// Parse and analyze one document without resolving styles.
    pub fn analyze(&self, markdown: &str) -> DocumentAnalysisResult {
        let blocks = parse_blocks(markdown, &self.parse_options);
        self.analyzer.analyze(blocks)
    }

    /// Run the full front half for one document.
    ///
    /// Fails on an unregistered template name or a template-schema
    /// violation; malformed document text never fails.
    pub fn plan(&self, markdown: &str, template_name: &str) -> Result<PlannedDocument> {
        let template = self.registry.get(template_name)?;
        let analysis = self.analyze(markdown);
        let plan = resolve(&analysis, &template)?;
        Ok(PlannedDocument { analysis, plan })
    }

    /// Plan many documents in parallel against one template.
    ///
    /// Each document's fatal error is isolated to its own slot; results
    /// come back in input order.
    pub fn plan_batch(
        &self,
        documents: &[&str],
        template_name: &str,
    ) -> Vec<Result<PlannedDocument>> {
        documents
            .par_iter()
            .map(|markdown| self.plan(markdown, template_name))
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentType;
    use crate::style::builtin;

    const THESIS: &str = "# 摘要\n\n研究内容概述。\n\n# Abstract\n\nAn overview.\n\n# 第一章 引言\n\n背景介绍。\n\n# 参考文献\n\n[1] 文献。";

    #[test]
    fn test_plan_thesis() {
        let pipeline = Pipeline::new();
        let planned = pipeline
            .plan(THESIS, builtin::GRADUATION_THESIS_TEMPLATE)
            .unwrap();

        assert_eq!(planned.analysis.document_type, DocumentType::AcademicThesis);
        assert_eq!(planned.plan.len(), planned.analysis.block_count());
    }

    #[test]
    fn test_unknown_template_fails() {
        let pipeline = Pipeline::new();
        assert!(pipeline.plan(THESIS, "no-such-template").is_err());
    }

    #[test]
    fn test_batch_isolates_failures() {
        let pipeline = Pipeline::new();
        let results = pipeline.plan_batch(&[THESIS, "plain text"], "default");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));
    }
}
