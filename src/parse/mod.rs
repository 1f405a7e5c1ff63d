//! Block parse adapter over the external Markdown parser.
//!
//! Flattens the pulldown-cmark event stream into a uniform sequence of
//! top-level [`Block`] records consumable by the analyzer. Inline markup is
//! dropped; only block-level text survives. Container contents (list items,
//! quoted paragraphs, table cells) fold into their container's text, so the
//! analyzer only ever sees a flat, ordered block sequence.

mod options;

pub use options::ParseOptions;

use crate::model::{Block, BlockKind};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

/// Parse Markdown text into a flat sequence of blocks.
///
/// Never fails: unrecognized constructs (raw HTML blocks, horizontal rules,
/// metadata blocks) are skipped, and anything else degrades to text inside
/// the nearest open block.
///
/// # Example
///
/// ```
/// use mdstyler::{parse_blocks, BlockKind, ParseOptions};
///
/// let blocks = parse_blocks("# 摘要\n\n本文研究了……", &ParseOptions::default());
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].kind, BlockKind::Heading);
/// assert_eq!(blocks[0].level, Some(1));
/// assert_eq!(blocks[1].kind, BlockKind::Paragraph);
/// ```
pub fn parse_blocks(text: &str, options: &ParseOptions) -> Vec<Block> {
    let parser = Parser::new_ext(text, options.parser_options());

    let mut blocks: Vec<Block> = Vec::new();
    let mut open: Option<PendingBlock> = None;
    let mut depth = 0usize;

    for event in parser {
        match event {
            Event::Start(tag) => {
                match open.as_mut() {
                    None => {
                        if let Some((kind, level)) = top_level_kind(&tag) {
                            open = Some(PendingBlock {
                                kind,
                                level,
                                text: String::new(),
                                depth,
                            });
                        }
                    }
                    Some(pending) => match tag {
                        // nested structure boundaries become separators
                        Tag::Paragraph
                        | Tag::Item
                        | Tag::TableHead
                        | Tag::TableRow
                        | Tag::Heading { .. } => pending.break_line(),
                        Tag::TableCell => pending.break_word(),
                        _ => {}
                    },
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                let closed = matches!(&open, Some(pending) if depth == pending.depth);
                if closed {
                    if let Some(pending) = open.take() {
                        push_block(&mut blocks, pending, options);
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(pending) = open.as_mut() {
                    pending.text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(pending) = open.as_mut() {
                    pending.break_word();
                }
            }
            // raw HTML, rules, footnote refs, task markers carry no block text
            _ => {}
        }
    }

    if let Some(pending) = open.take() {
        push_block(&mut blocks, pending, options);
    }

    blocks
}

struct PendingBlock {
    kind: BlockKind,
    level: Option<u8>,
    text: String,
    depth: usize,
}

impl PendingBlock {
    fn break_line(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn break_word(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
    }
}

fn top_level_kind(tag: &Tag) -> Option<(BlockKind, Option<u8>)> {
    match tag {
        Tag::Heading { level, .. } => {
            Some((BlockKind::Heading, Some(heading_level_to_num(*level))))
        }
        Tag::Paragraph => Some((BlockKind::Paragraph, None)),
        Tag::List(_) => Some((BlockKind::List, None)),
        Tag::CodeBlock(_) => Some((BlockKind::CodeBlock, None)),
        Tag::Table(_) => Some((BlockKind::Table, None)),
        Tag::BlockQuote(_) => Some((BlockKind::Quote, None)),
        _ => None,
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn push_block(blocks: &mut Vec<Block>, pending: PendingBlock, options: &ParseOptions) {
    let text = pending.text.trim_end().to_string();
    if options.skip_empty && text.trim().is_empty() {
        return;
    }
    let index = blocks.len();
    blocks.push(Block {
        kind: pending.kind,
        level: pending.level,
        text,
        index,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let blocks = parse_blocks(
            "# 第一章 引言\n\n研究背景如下。\n\n## 1.1 动机\n\n动机说明。",
            &ParseOptions::default(),
        );
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].kind, BlockKind::Heading);
        assert_eq!(blocks[0].level, Some(1));
        assert_eq!(blocks[0].text, "第一章 引言");
        assert_eq!(blocks[2].level, Some(2));
        assert_eq!(blocks[3].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_indices_are_contiguous() {
        let blocks = parse_blocks(
            "# A\n\ntext\n\n- one\n- two\n\n> quoted",
            &ParseOptions::default(),
        );
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.index, i);
        }
    }

    #[test]
    fn test_list_folds_into_one_block() {
        let blocks = parse_blocks("- first\n- second\n- third", &ParseOptions::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::List);
        assert_eq!(blocks[0].text, "first\nsecond\nthird");
    }

    #[test]
    fn test_code_block_keeps_content() {
        let blocks = parse_blocks(
            "```rust\nfn main() {}\n```",
            &ParseOptions::default(),
        );
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::CodeBlock);
        assert_eq!(blocks[0].text, "fn main() {}");
    }

    #[test]
    fn test_quote_folds_nested_paragraphs() {
        let blocks = parse_blocks("> line one\n>\n> line two", &ParseOptions::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Quote);
        assert_eq!(blocks[0].text, "line one\nline two");
    }

    #[test]
    fn test_gfm_table_is_one_block() {
        let blocks = parse_blocks(
            "| a | b |\n|---|---|\n| 1 | 2 |",
            &ParseOptions::default(),
        );
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Table);
        assert!(blocks[0].text.contains('a'));
        assert!(blocks[0].text.contains('2'));
    }

    #[test]
    fn test_inline_markup_is_stripped() {
        let blocks = parse_blocks("some **bold** and `code` text", &ParseOptions::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "some bold and code text");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_blocks("", &ParseOptions::default()).is_empty());
        assert!(parse_blocks("   \n\n  ", &ParseOptions::default()).is_empty());
    }

    #[test]
    fn test_setext_heading() {
        let blocks = parse_blocks("Title\n=====\n\nbody", &ParseOptions::default());
        assert_eq!(blocks[0].kind, BlockKind::Heading);
        assert_eq!(blocks[0].level, Some(1));
    }
}
