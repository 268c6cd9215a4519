//! Section ranking and extractive summarization.

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;

use super::encoder::{cosine_similarity, SentenceEncoder};
use super::sentences::SentenceSplitter;
use crate::error::{Error, Result};
use crate::model::{RelevanceProfile, Section, SubsectionResult};

/// Options for extractive summarization.
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// How many of the top-ranked sections to summarize
    pub top_sections: usize,

    /// Maximum sentences kept per section
    pub top_sentences: usize,
}

impl SummarizeOptions {
    /// Create new summarize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sections to summarize.
    pub fn with_top_sections(mut self, n: usize) -> Self {
        self.top_sections = n;
        self
    }

    /// Set the per-section sentence budget.
    pub fn with_top_sentences(mut self, k: usize) -> Self {
        self.top_sentences = k;
        self
    }
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            top_sections: 5,
            top_sentences: 5,
        }
    }
}

/// Ranks sections and extracts their most relevant sentences.
///
/// Holds the injected embedding model; the engine itself is stateless
/// across calls and safe to share between in-flight requests.
pub struct RelevanceEngine {
    encoder: Arc<dyn SentenceEncoder>,
    splitter: SentenceSplitter,
}

impl RelevanceEngine {
    /// Create an engine around an embedding model.
    pub fn new(encoder: Arc<dyn SentenceEncoder>) -> Self {
        Self {
            encoder,
            splitter: SentenceSplitter::new(),
        }
    }

    /// Rank sections by semantic similarity to the profile.
    ///
    /// Returns the same sections enriched with `relevance_score` (raw
    /// cosine) and 1-based `importance_rank`, reordered best first.
    /// Equal scores keep their ingestion order, so repeated calls with
    /// identical inputs produce identical output. Empty input returns
    /// empty without invoking the model.
    pub fn rank(
        &self,
        mut sections: Vec<Section>,
        profile: &RelevanceProfile,
    ) -> Result<Vec<Section>> {
        if sections.is_empty() {
            return Ok(sections);
        }

        // One batch per ranking operation: profile first, then every
        // section text.
        let mut texts: Vec<&str> = Vec::with_capacity(sections.len() + 1);
        texts.push(profile.as_str());
        texts.extend(sections.iter().map(|s| s.section_text.as_str()));

        let embeddings = self.encode_batch(&texts)?;
        let (profile_embedding, section_embeddings) = embeddings
            .split_first()
            .ok_or_else(|| Error::Encode("encoder returned an empty batch".to_string()))?;

        for (section, embedding) in sections.iter_mut().zip(section_embeddings.iter()) {
            section.relevance_score = Some(cosine_similarity(profile_embedding, embedding));
        }

        // Stable sort: ties keep ingestion order.
        sections.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        for (i, section) in sections.iter_mut().enumerate() {
            section.importance_rank = Some(i as u32 + 1);
        }

        debug!("ranked {} sections", sections.len());
        Ok(sections)
    }

    /// Extractively summarize the top-ranked sections.
    ///
    /// Callers must rank before summarizing: only the first
    /// `options.top_sections` of the input are processed, on the
    /// assumption they arrive best first. Per section, the most relevant
    /// sentences are selected by score but joined in their original
    /// order, so the excerpt reads as prose rather than a ranking.
    /// Sections that yield no sentences are skipped.
    pub fn summarize(
        &self,
        ranked: &[Section],
        profile: &RelevanceProfile,
        options: &SummarizeOptions,
    ) -> Result<Vec<SubsectionResult>> {
        if ranked.is_empty() || options.top_sections == 0 || options.top_sentences == 0 {
            return Ok(Vec::new());
        }

        let profile_embedding = self
            .encode_batch(&[profile.as_str()])?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Encode("encoder returned an empty batch".to_string()))?;

        let mut results = Vec::new();
        for section in ranked.iter().take(options.top_sections) {
            let sentences = self.splitter.split(&section.section_text);
            if sentences.is_empty() {
                continue;
            }

            // One batch per section: all of its sentences.
            let texts: Vec<&str> = sentences.iter().map(String::as_str).collect();
            let embeddings = self.encode_batch(&texts)?;
            let scores: Vec<f32> = embeddings
                .iter()
                .map(|e| cosine_similarity(&profile_embedding, e))
                .collect();

            let mut indices: Vec<usize> = (0..sentences.len()).collect();
            // Stable by descending score, then clipped to the budget.
            indices.sort_by(|&i, &j| scores[j].partial_cmp(&scores[i]).unwrap_or(Ordering::Equal));
            indices.truncate(options.top_sentences.min(sentences.len()));
            // Restore original sentence order for a readable excerpt.
            indices.sort_unstable();

            let refined_text = indices
                .iter()
                .map(|&i| sentences[i].as_str())
                .collect::<Vec<_>>()
                .join(" ");

            results.push(SubsectionResult {
                document: section.document.clone(),
                refined_text,
                page_number: section.page_number,
            });
        }

        debug!(
            "summarized {} of {} ranked sections",
            results.len(),
            ranked.len()
        );
        Ok(results)
    }

    /// Encode a batch and verify the encoder honored its contract.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let embeddings = self.encoder.encode_batch(texts)?;
        if embeddings.len() != texts.len() {
            return Err(Error::Encode(format!(
                "encoder returned {} vectors for {} texts",
                embeddings.len(),
                texts.len()
            )));
        }
        Ok(embeddings)
    }
}
