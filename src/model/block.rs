//! Block-level types produced by the parse adapter.

use serde::{Deserialize, Serialize};

/// One structural unit of parsed Markdown.
///
/// Blocks are immutable once produced by the adapter and ordered by source
/// position; `index` is the ordering key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// What kind of block this is
    pub kind: BlockKind,

    /// Heading level (1-6) for headings, `None` otherwise
    pub level: Option<u8>,

    /// Plain text content with inline markup stripped
    pub text: String,

    /// Position in source order, starting at 0
    pub index: usize,
}

impl Block {
    /// Create a new block.
    pub fn new(kind: BlockKind, text: impl Into<String>, index: usize) -> Self {
        Self {
            kind,
            level: None,
            text: text.into(),
            index,
        }
    }

    /// Create a heading block. The level is clamped to 1-6.
    pub fn heading(level: u8, text: impl Into<String>, index: usize) -> Self {
        Self {
            kind: BlockKind::Heading,
            level: Some(level.clamp(1, 6)),
            text: text.into(),
            index,
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>, index: usize) -> Self {
        Self::new(BlockKind::Paragraph, text, index)
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }

    /// Check if the block has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Kind of a structural block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A heading (`#` through `######`, or setext)
    Heading,
    /// A plain paragraph
    Paragraph,
    /// An ordered or unordered list
    List,
    /// A fenced or indented code block
    CodeBlock,
    /// A table
    Table,
    /// A block quote
    Quote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_clamped() {
        let h = Block::heading(9, "Overflow", 0);
        assert_eq!(h.level, Some(6));
        assert!(h.is_heading());

        let h = Block::heading(0, "Underflow", 1);
        assert_eq!(h.level, Some(1));
    }

    #[test]
    fn test_paragraph_has_no_level() {
        let p = Block::paragraph("Some body text.", 3);
        assert_eq!(p.level, None);
        assert!(!p.is_heading());
        assert!(!p.is_empty());
    }

    #[test]
    fn test_is_empty_ignores_whitespace() {
        let p = Block::paragraph("   \n  ", 0);
        assert!(p.is_empty());
    }
}
