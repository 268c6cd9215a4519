//! # docrank
//!
//! Persona-driven document intelligence for Rust.
//!
//! docrank turns parsed PDF page layout into titled sections, ranks those
//! sections by semantic similarity to a persona/task relevance profile,
//! and extracts the most relevant sentences from the top sections.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use docrank::{
//!     analyze_documents, DocumentInput, PageContent, RelevanceProfile, SentenceEncoder,
//! };
//!
//! fn main() -> docrank::Result<()> {
//!     // The embedding model is injected; wrap whatever runtime hosts it.
//!     let encoder: Arc<dyn SentenceEncoder> = load_model()?;
//!
//!     // Page layout comes from the upstream PDF reader.
//!     let pages: Vec<PageContent> = read_layout("document.pdf")?;
//!
//!     let profile = RelevanceProfile::from_persona("Financial Analyst", "assess quarterly risk");
//!     let report = analyze_documents(
//!         vec![DocumentInput::new("document.pdf", pages)],
//!         &profile,
//!         encoder,
//!     )?;
//!     println!("{}", report.to_json(true)?);
//!     Ok(())
//! }
//! # fn load_model() -> docrank::Result<Arc<dyn SentenceEncoder>> { unimplemented!() }
//! # fn read_layout(_path: &str) -> docrank::Result<Vec<PageContent>> { unimplemented!() }
//! ```
//!
//! ## Pipeline
//!
//! - **Segmenter**: font-size-driven heading detection turns per-page
//!   text blocks into `(title, body, page)` sections
//! - **Relevance engine**: batch-encodes sections and the profile into a
//!   shared embedding space, ranks by cosine similarity, then selects
//!   the top sentences of the best sections in original reading order
//! - **Analyzer**: composes both over a batch of documents and produces
//!   a serializable report; one unreadable document never aborts the
//!   batch, while a missing embedding model always does

pub mod error;
pub mod model;
pub mod pipeline;
pub mod relevance;
pub mod segment;

#[doc(hidden)]
pub mod testing;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    AnalysisReport, PageBlock, PageContent, RankedSectionEntry, RelevanceProfile, ReportMetadata,
    Section, SubsectionResult, TextSpan,
};
pub use pipeline::{Analyzer, AnalyzerOptions, DocumentInput};
pub use relevance::{
    cosine_similarity, RelevanceEngine, SentenceEncoder, SentenceSplitter, SummarizeOptions,
};
pub use segment::{SegmentOptions, Segmenter};

use std::sync::Arc;

/// Segment one parsed document into titled sections.
///
/// Convenience wrapper over [`Segmenter`] with default options.
///
/// # Example
///
/// ```
/// use docrank::{segment_document, PageBlock, PageContent};
///
/// let page = PageContent::with_blocks(vec![
///     PageBlock::from_text("Overview", 18.0),
///     PageBlock::from_text("docrank extracts and ranks sections.", 10.0),
///     PageBlock::from_text("It favors layout over logical structure.", 10.0),
/// ]);
/// let sections = segment_document(&[page], "readme.pdf");
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].section_title, "Overview");
/// ```
pub fn segment_document(pages: &[PageContent], document_id: &str) -> Vec<Section> {
    Segmenter::new().segment(pages, document_id)
}

/// Run the full pipeline over a batch of documents with default options.
///
/// Segments every document, pools and ranks the sections against the
/// profile, summarizes the top sections, and returns the report. See
/// [`Analyzer`] for configurable variants.
pub fn analyze_documents(
    documents: Vec<DocumentInput>,
    profile: &RelevanceProfile,
    encoder: Arc<dyn SentenceEncoder>,
) -> Result<AnalysisReport> {
    Analyzer::new(encoder).analyze(documents, profile)
}
