//! Section and subsection result types.

use serde::{Deserialize, Serialize};

/// A contiguous run of body text attributed to one inferred heading.
///
/// Created by the segmenter with title, text, page, and document fields;
/// the relevance engine later enriches it in place with a score and rank.
/// A section belongs to exactly one document and is never merged across
/// documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Identifier of the source file
    pub document: String,

    /// Inferred heading, or the sentinel default for text before the
    /// first detected heading
    pub section_title: String,

    /// Accumulated body text, whitespace-normalized and non-empty
    pub section_text: String,

    /// 1-based page on which the section's first text was encountered
    pub page_number: u32,

    /// Cosine similarity to the relevance profile; absent until ranked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f32>,

    /// 1-based rank after sorting by score descending; absent until ranked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance_rank: Option<u32>,
}

impl Section {
    /// Create an unranked section.
    pub fn new(
        document: impl Into<String>,
        section_title: impl Into<String>,
        section_text: impl Into<String>,
        page_number: u32,
    ) -> Self {
        Self {
            document: document.into(),
            section_title: section_title.into(),
            section_text: section_text.into(),
            page_number,
            relevance_score: None,
            importance_rank: None,
        }
    }

    /// Check if the relevance engine has scored this section.
    pub fn is_ranked(&self) -> bool {
        self.relevance_score.is_some() && self.importance_rank.is_some()
    }
}

/// Extractive summary of one ranked section.
///
/// A value-copy projection of its source section: carries the document and
/// page provenance, not a reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsectionResult {
    /// Identifier of the source file
    pub document: String,

    /// Selected sentences joined in original order
    pub refined_text: String,

    /// Page number copied from the source section
    pub page_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_unranked_by_default() {
        let section = Section::new("doc.pdf", "Overview", "Some text.", 1);
        assert!(!section.is_ranked());
        assert_eq!(section.page_number, 1);
    }

    #[test]
    fn test_unranked_fields_omitted_from_json() {
        let section = Section::new("doc.pdf", "Overview", "Some text.", 1);
        let json = serde_json::to_string(&section).unwrap();
        assert!(!json.contains("relevance_score"));
        assert!(!json.contains("importance_rank"));
    }

    #[test]
    fn test_ranked_fields_serialized() {
        let mut section = Section::new("doc.pdf", "Overview", "Some text.", 1);
        section.relevance_score = Some(0.75);
        section.importance_rank = Some(1);
        assert!(section.is_ranked());

        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("relevance_score"));
        assert!(json.contains("importance_rank"));
    }
}
