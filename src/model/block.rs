//! Page layout input types.
//!
//! The upstream PDF layout reader hands the segmenter one [`PageContent`]
//! per page, each holding the page's text blocks in content-stream order.
//! Blocks carry their raw spans; derived text and font statistics are
//! computed here so the segmenter never touches span internals.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A run of text with a single font size, as reported by the layout reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Font size in points
    pub font_size: f32,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
        }
    }
}

/// A rectangular text region on one page, composed of spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageBlock {
    /// Spans in reading order
    pub spans: Vec<TextSpan>,
}

impl PageBlock {
    /// Create a block from its spans.
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// Create a single-span block.
    pub fn from_text(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            spans: vec![TextSpan::new(text, font_size)],
        }
    }

    /// Number of spans in the block.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Average span font size, or 0.0 for a block with no spans.
    pub fn average_font_size(&self) -> f32 {
        if self.spans.is_empty() {
            return 0.0;
        }
        let total: f32 = self.spans.iter().map(|s| s.font_size).sum();
        total / self.spans.len() as f32
    }

    /// Full block text: spans joined with single spaces, NFC-normalized,
    /// interior whitespace collapsed, trimmed.
    pub fn text(&self) -> String {
        let joined = self
            .spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let normalized: String = joined.nfc().collect();
        normalized.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Check if the block contains no text.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }
}

/// The ordered text blocks of a single page.
///
/// Page numbers are positional: the segmenter numbers pages 1-based by
/// their position in the input sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    /// Text blocks in content-stream order
    pub blocks: Vec<PageBlock>,
}

impl PageContent {
    /// Create an empty page.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a page from its blocks.
    pub fn with_blocks(blocks: Vec<PageBlock>) -> Self {
        Self { blocks }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: PageBlock) {
        self.blocks.push(block);
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over every span font size on the page.
    pub fn span_sizes(&self) -> impl Iterator<Item = f32> + '_ {
        self.blocks
            .iter()
            .flat_map(|b| b.spans.iter().map(|s| s.font_size))
    }
}
