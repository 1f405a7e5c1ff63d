//! Parsing options for the block adapter.

use pulldown_cmark::Options;

/// Options controlling how Markdown text is split into blocks.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown extensions (tables, strikethrough,
    /// task lists)
    pub gfm: bool,

    /// Enable footnote syntax
    pub footnotes: bool,

    /// Drop blocks whose text is empty after inline markup is stripped
    pub skip_empty: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable GFM extensions.
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable footnote syntax.
    pub fn with_footnotes(mut self, enabled: bool) -> Self {
        self.footnotes = enabled;
        self
    }

    /// Enable or disable dropping of empty blocks.
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    pub(crate) fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            footnotes: false,
            skip_empty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_gfm() {
        let options = ParseOptions::default();
        assert!(options.gfm);
        assert!(options.parser_options().contains(Options::ENABLE_TABLES));
    }

    #[test]
    fn test_plain_commonmark() {
        let options = ParseOptions::new().with_gfm(false);
        assert!(options.parser_options().is_empty());
    }
}
