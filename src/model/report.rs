//! Analysis report types.
//!
//! The report is the pipeline's serializable output: run metadata, the
//! top-ranked section listing, and the extractive subsection summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Section, SubsectionResult};
use crate::error::Result;

/// Complete output of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Run metadata
    pub metadata: ReportMetadata,

    /// Top-ranked sections, best first
    pub extracted_sections: Vec<RankedSectionEntry>,

    /// Extractive summaries of the most relevant sections
    pub subsection_analysis: Vec<SubsectionResult>,
}

impl AnalysisReport {
    /// Serialize the report to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Metadata describing one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Names of the documents that entered the pipeline
    pub input_documents: Vec<String>,

    /// The relevance profile the sections were ranked against
    pub relevance_profile: String,

    /// When the analysis ran
    pub processing_timestamp: DateTime<Utc>,

    /// Total sections pooled across all documents before ranking
    pub total_sections_extracted: usize,
}

/// One ranked section as listed in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSectionEntry {
    /// Identifier of the source file
    pub document: String,

    /// Inferred section heading
    pub section_title: String,

    /// 1-based rank, best first
    pub importance_rank: u32,

    /// Page on which the section starts
    pub page_number: u32,

    /// Relevance as a percentage rounded to one decimal place
    pub relevance_score: f32,
}

impl RankedSectionEntry {
    /// Project a ranked section into its report entry.
    ///
    /// Returns `None` for a section the relevance engine has not scored.
    pub fn from_section(section: &Section) -> Option<Self> {
        let score = section.relevance_score?;
        let rank = section.importance_rank?;
        Some(Self {
            document: section.document.clone(),
            section_title: section.section_title.clone(),
            importance_rank: rank,
            page_number: section.page_number,
            relevance_score: as_percentage(score),
        })
    }
}

/// Convert a raw cosine score to a percentage with one decimal place.
fn as_percentage(score: f32) -> f32 {
    (score * 1000.0).round() / 10.0
}
