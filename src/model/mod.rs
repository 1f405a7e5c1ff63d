//! Structural document model types.
//!
//! This module defines the intermediate representation that bridges
//! Markdown parsing and style resolution: flat block records produced by
//! the parse adapter, semantic sections produced by the analyzer, and the
//! analysis result consumed by the resolver.

mod analysis;
mod block;
mod section;

pub use analysis::{DocumentAnalysisResult, DocumentType};
pub use block::{Block, BlockKind};
pub use section::{Section, SectionRole};
