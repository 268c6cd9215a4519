//! Layout-driven document segmentation.
//!
//! Converts per-page text blocks into titled sections. Headings are
//! inferred from layout alone: a block whose average span size clearly
//! exceeds the page's body size, with few words and no trailing period,
//! starts a new section. Everything else accumulates as body text under
//! the current title. This is best-effort layout inference; the
//! document's logical outline (bookmarks, tags) is ignored.

use std::collections::BTreeMap;

use crate::model::{PageBlock, PageContent, Section};

/// Options controlling the segmentation heuristic.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// How far (in points) a block's average span size must exceed the
    /// page's body size to qualify as a heading
    pub heading_size_delta: f32,

    /// Heading blocks must have strictly fewer words than this
    pub max_heading_words: usize,

    /// Body size assumed for a page with no spans
    pub default_body_size: f32,

    /// Title given to text appearing before the first detected heading
    pub default_title: String,
}

impl SegmentOptions {
    /// Create new segment options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading size delta.
    pub fn with_heading_size_delta(mut self, delta: f32) -> Self {
        self.heading_size_delta = delta;
        self
    }

    /// Set the maximum heading word count.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the fallback body size for span-less pages.
    pub fn with_default_body_size(mut self, size: f32) -> Self {
        self.default_body_size = size;
        self
    }

    /// Set the sentinel title for pre-heading text.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            heading_size_delta: 2.0,
            max_heading_words: 15,
            default_body_size: 10.0,
            default_title: "Introduction".to_string(),
        }
    }
}

/// Segments parsed page layout into titled sections.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with custom options.
    pub fn with_options(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment one parsed document into titled sections.
    ///
    /// Pages are numbered 1-based by position. Sections may span page
    /// boundaries: the accumulator is seeded once per document, and each
    /// emitted section records the page on which its first text appeared.
    /// Output preserves document reading order; sections with no body
    /// text are never emitted.
    pub fn segment(&self, pages: &[PageContent], document_id: &str) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut current = SectionAccumulator::new(self.options.default_title.clone());

        for (index, page) in pages.iter().enumerate() {
            let page_number = index as u32 + 1;
            if page.is_empty() {
                continue;
            }
            let body_size = self.body_font_size(page);

            for block in &page.blocks {
                let text = block.text();
                if text.is_empty() {
                    continue;
                }

                if self.is_heading(block, &text, body_size) {
                    if let Some(section) = current.flush(document_id) {
                        sections.push(section);
                    }
                    current.retitle(text, page_number);
                } else {
                    current.append(&text, page_number);
                }
            }
        }

        if let Some(section) = current.flush(document_id) {
            sections.push(section);
        }
        sections
    }

    /// Body font size for one page: the mode of the rounded span sizes.
    ///
    /// Per-page rather than global, since a cover page and body pages in
    /// the same document often use different base sizes. Ties resolve to
    /// the smaller size.
    fn body_font_size(&self, page: &PageContent) -> f32 {
        let mut histogram: BTreeMap<i32, usize> = BTreeMap::new();
        for size in page.span_sizes() {
            *histogram.entry(size.round() as i32).or_insert(0) += 1;
        }

        let mut best: Option<(i32, usize)> = None;
        for (size, count) in histogram {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((size, count)),
            }
        }
        best.map_or(self.options.default_body_size, |(size, _)| size as f32)
    }

    /// Heading test: larger font, fewer words, not ending with a period.
    fn is_heading(&self, block: &PageBlock, text: &str, body_size: f32) -> bool {
        block.average_font_size() > body_size + self.options.heading_size_delta
            && text.split_whitespace().count() < self.options.max_heading_words
            && !text.ends_with('.')
    }
}

/// Running accumulator for the section under construction.
///
/// Tracks the page at which the current title was set so every emitted
/// section records its start page, including the final flush after the
/// page loop ends.
#[derive(Debug)]
struct SectionAccumulator {
    title: String,
    text: String,
    page_number: u32,
}

impl SectionAccumulator {
    fn new(default_title: String) -> Self {
        Self {
            title: default_title,
            text: String::new(),
            // 0 = not yet anchored to a page
            page_number: 0,
        }
    }

    /// Append body text, anchoring the section to `page` if it has none yet.
    fn append(&mut self, text: &str, page: u32) {
        if self.page_number == 0 {
            self.page_number = page;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    /// Start a new section titled by a heading found on `page`.
    fn retitle(&mut self, title: String, page: u32) {
        self.title = title;
        self.text.clear();
        self.page_number = page;
    }

    /// Emit the accumulated section if it holds any text.
    fn flush(&mut self, document: &str) -> Option<Section> {
        if self.text.trim().is_empty() {
            self.text.clear();
            return None;
        }
        let text = std::mem::take(&mut self.text);
        Some(Section::new(
            document,
            self.title.clone(),
            text.trim().to_string(),
            self.page_number,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextSpan;
    use crate::testing::{block, page};

    fn body(text: &str) -> PageBlock {
        block(text, 10.0)
    }

    fn heading(text: &str) -> PageBlock {
        block(text, 18.0)
    }

    #[test]
    fn test_first_block_heading_suppresses_sentinel() {
        let pages = vec![page(vec![
            heading("Executive Summary"),
            body("The project succeeded in all metrics."),
        ])];

        let sections = Segmenter::new().segment(&pages, "report.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Executive Summary");
        assert_eq!(
            sections[0].section_text,
            "The project succeeded in all metrics."
        );
        assert_eq!(sections[0].page_number, 1);
    }

    #[test]
    fn test_text_before_first_heading_gets_sentinel_title() {
        let pages = vec![page(vec![
            body("Preamble text before any heading appears."),
            heading("Background"),
            body("Body of the background section."),
        ])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].section_title, "Introduction");
        assert_eq!(
            sections[0].section_text,
            "Preamble text before any heading appears."
        );
        assert_eq!(sections[1].section_title, "Background");
    }

    #[test]
    fn test_no_headings_yields_single_sentinel_section() {
        let pages = vec![
            page(vec![body("First page of plain prose.")]),
            page(vec![body("Second page of plain prose.")]),
        ];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Introduction");
        assert_eq!(
            sections[0].section_text,
            "First page of plain prose. Second page of plain prose."
        );
        assert_eq!(sections[0].page_number, 1);
    }

    #[test]
    fn test_section_spans_page_boundary_records_start_page() {
        let pages = vec![
            page(vec![heading("Methods"), body("Started on page one.")]),
            page(vec![body("Continued on page two.")]),
        ];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Methods");
        assert_eq!(
            sections[0].section_text,
            "Started on page one. Continued on page two."
        );
        // Start page, not the last page the text touched.
        assert_eq!(sections[0].page_number, 1);
    }

    #[test]
    fn test_heading_on_later_page_anchors_there() {
        let pages = vec![
            page(vec![body("Opening prose.")]),
            page(vec![heading("Results"), body("Findings here.")]),
        ];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].page_number, 1);
        assert_eq!(sections[1].section_title, "Results");
        assert_eq!(sections[1].page_number, 2);
    }

    #[test]
    fn test_empty_document_yields_no_sections() {
        let sections = Segmenter::new().segment(&[], "empty.pdf");
        assert!(sections.is_empty());

        let blank = vec![PageContent::new()];
        let sections = Segmenter::new().segment(&blank, "blank.pdf");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_heading_with_no_following_text_emits_nothing() {
        let pages = vec![page(vec![heading("Orphan Heading")])];
        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_consecutive_headings_keep_only_titled_bodies() {
        let pages = vec![page(vec![
            heading("First"),
            heading("Second"),
            body("Text under the second heading."),
        ])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Second");
    }

    #[test]
    fn test_long_large_block_is_not_a_heading() {
        let long_text = "This block is set in a large face but it runs on and \
                         on for far too many words to plausibly be a heading";
        let pages = vec![page(vec![block(long_text, 18.0), body("Body.")])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Introduction");
        assert!(sections[0].section_text.starts_with("This block"));
    }

    #[test]
    fn test_trailing_period_disqualifies_heading() {
        let pages = vec![page(vec![
            block("Large but a sentence.", 18.0),
            body("More prose follows here."),
        ])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Introduction");
    }

    #[test]
    fn test_body_size_is_per_page_mode() {
        // Page body set at 14pt: a 15pt block is not a heading there.
        let pages = vec![page(vec![
            block("Cover Title Line", 15.0),
            block("cover body", 14.0),
            block("cover body two", 14.0),
            block("cover body three", 14.0),
        ])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Introduction");
    }

    #[test]
    fn test_mode_tie_resolves_to_smaller_size() {
        // One 18pt span, one 10pt span: body resolves to 10, so the 18pt
        // block qualifies as a heading.
        let pages = vec![page(vec![
            heading("Executive Summary"),
            body("All metrics improved."),
        ])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections[0].section_title, "Executive Summary");
    }

    #[test]
    fn test_mixed_span_block_uses_average_size() {
        let mixed = PageBlock::new(vec![
            TextSpan::new("Half", 18.0),
            TextSpan::new("Heading", 10.0),
        ]);
        // Three 10pt spans anchor the body size at 10; the mixed block
        // averages 14, clearing the 12pt heading threshold.
        let pages = vec![page(vec![
            mixed,
            body("Body text one."),
            body("Body text two."),
        ])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Half Heading");
    }

    #[test]
    fn test_custom_options() {
        let options = SegmentOptions::new()
            .with_heading_size_delta(6.0)
            .with_default_title("Preamble");
        let segmenter = Segmenter::with_options(options);

        // 15pt over a 10pt body clears 2.0 but not 6.0.
        let pages = vec![page(vec![
            block("Not A Heading Anymore", 15.0),
            body("Body text one."),
            body("Body text two."),
        ])];

        let sections = segmenter.segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_title, "Preamble");
    }

    #[test]
    fn test_reading_order_preserved_across_sections() {
        let pages = vec![page(vec![
            heading("Alpha"),
            body("a1."),
            body("a2."),
            heading("Beta"),
            body("b1."),
        ])];

        let sections = Segmenter::new().segment(&pages, "doc.pdf");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].section_text, "a1. a2.");
        assert_eq!(sections[1].section_text, "b1.");
    }
}
