//! End-to-end analysis pipeline.
//!
//! Composes the segmenter and relevance engine: segment every document,
//! pool the sections, rank the pool against the profile, summarize the
//! top sections, and assemble a serializable report. Document-level read
//! failures are absorbed per document; model-level failures abort the
//! whole analysis.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{
    AnalysisReport, PageContent, RankedSectionEntry, RelevanceProfile, ReportMetadata, Section,
};
use crate::relevance::{RelevanceEngine, SentenceEncoder, SummarizeOptions};
use crate::segment::{SegmentOptions, Segmenter};

/// Options for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Summarization budgets
    pub summarize: SummarizeOptions,

    /// Maximum ranked sections listed in the report
    pub max_report_entries: usize,

    /// Whether to segment documents in parallel
    pub parallel: bool,
}

impl AnalyzerOptions {
    /// Create new analyzer options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sections to summarize.
    pub fn with_top_sections(mut self, n: usize) -> Self {
        self.summarize.top_sections = n;
        self
    }

    /// Set the per-section sentence budget.
    pub fn with_top_sentences(mut self, k: usize) -> Self {
        self.summarize.top_sentences = k;
        self
    }

    /// Set the report's ranked-section cap.
    pub fn with_max_report_entries(mut self, n: usize) -> Self {
        self.max_report_entries = n;
        self
    }

    /// Disable parallel segmentation.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            summarize: SummarizeOptions::default(),
            max_report_entries: 10,
            parallel: true,
        }
    }
}

/// One document entering the pipeline.
///
/// Carries the layout reader's outcome rather than bare pages so that an
/// unreadable document flows through the batch as an explicit failure:
/// it contributes zero sections instead of aborting the other documents.
#[derive(Debug)]
pub struct DocumentInput {
    /// Identifier carried into every section (typically the file name)
    pub name: String,

    /// Parsed pages, or the reader's error for this document
    pub layout: Result<Vec<PageContent>>,
}

impl DocumentInput {
    /// A successfully parsed document.
    pub fn new(name: impl Into<String>, pages: Vec<PageContent>) -> Self {
        Self {
            name: name.into(),
            layout: Ok(pages),
        }
    }

    /// A document whose layout could not be read.
    pub fn unreadable(name: impl Into<String>, error: Error) -> Self {
        Self {
            name: name.into(),
            layout: Err(error),
        }
    }
}

/// The full analysis pipeline.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use docrank::{Analyzer, DocumentInput, PageContent, RelevanceProfile, SentenceEncoder};
///
/// fn run(encoder: Arc<dyn SentenceEncoder>, pages: Vec<PageContent>) -> docrank::Result<()> {
///     let analyzer = Analyzer::new(encoder);
///     let profile = RelevanceProfile::from_persona("Travel Planner", "plan a trip for students");
///     let report = analyzer.analyze(vec![DocumentInput::new("guide.pdf", pages)], &profile)?;
///     println!("{}", report.to_json(true)?);
///     Ok(())
/// }
/// ```
pub struct Analyzer {
    segmenter: Segmenter,
    engine: RelevanceEngine,
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Create an analyzer around an embedding model, with default options.
    pub fn new(encoder: Arc<dyn SentenceEncoder>) -> Self {
        Self {
            segmenter: Segmenter::new(),
            engine: RelevanceEngine::new(encoder),
            options: AnalyzerOptions::default(),
        }
    }

    /// Replace the segmentation options.
    pub fn with_segment_options(mut self, options: SegmentOptions) -> Self {
        self.segmenter = Segmenter::with_options(options);
        self
    }

    /// Replace the pipeline options.
    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    /// The segmenter used for every document.
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// The relevance engine.
    pub fn engine(&self) -> &RelevanceEngine {
        &self.engine
    }

    /// Segment one document, absorbing an upstream read failure.
    ///
    /// An unreadable document is logged and yields zero sections so a
    /// single corrupt file cannot abort a batch.
    pub fn segment_document(&self, input: DocumentInput) -> Vec<Section> {
        match input.layout {
            Ok(pages) => {
                let sections = self.segmenter.segment(&pages, &input.name);
                debug!("{}: {} sections", input.name, sections.len());
                sections
            }
            Err(err) => {
                warn!("skipping unreadable document '{}': {}", input.name, err);
                Vec::new()
            }
        }
    }

    /// Run the full pipeline over a batch of documents.
    ///
    /// Sections are pooled across documents in input order, ranked
    /// against the profile, and the top sections summarized. Returns
    /// [`Error::NoAnalyzableContent`] when no document yields a section,
    /// so callers can distinguish empty input from a model failure.
    pub fn analyze(
        &self,
        documents: Vec<DocumentInput>,
        profile: &RelevanceProfile,
    ) -> Result<AnalysisReport> {
        let input_documents: Vec<String> = documents.iter().map(|d| d.name.clone()).collect();

        let per_document: Vec<Vec<Section>> = if self.options.parallel {
            documents
                .into_par_iter()
                .map(|doc| self.segment_document(doc))
                .collect()
        } else {
            documents
                .into_iter()
                .map(|doc| self.segment_document(doc))
                .collect()
        };
        let pooled: Vec<Section> = per_document.into_iter().flatten().collect();

        if pooled.is_empty() {
            return Err(Error::NoAnalyzableContent);
        }
        let total_sections_extracted = pooled.len();
        debug!(
            "pooled {} sections from {} documents",
            total_sections_extracted,
            input_documents.len()
        );

        let ranked = self.engine.rank(pooled, profile)?;
        let subsection_analysis =
            self.engine
                .summarize(&ranked, profile, &self.options.summarize)?;

        let extracted_sections: Vec<RankedSectionEntry> = ranked
            .iter()
            .take(self.options.max_report_entries)
            .filter_map(RankedSectionEntry::from_section)
            .collect();

        Ok(AnalysisReport {
            metadata: ReportMetadata {
                input_documents,
                relevance_profile: profile.to_string(),
                processing_timestamp: Utc::now(),
                total_sections_extracted,
            },
            extracted_sections,
            subsection_analysis,
        })
    }
}
