//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid
//! duplication, including deterministic stand-ins for the embedding
//! model.

#![doc(hidden)]

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::model::{PageBlock, PageContent, Section};
use crate::relevance::SentenceEncoder;

/// Deterministic embedding stub: a hashed bag-of-words projected onto a
/// fixed-dimension unit sphere. Texts sharing vocabulary land close in
/// cosine space; disjoint texts score near zero. Useful wherever tests
/// need rankable similarity without a model runtime.
#[derive(Debug, Clone)]
pub struct HashingEncoder {
    dimension: usize,
}

impl HashingEncoder {
    /// Create an encoder producing vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        for word in text.split_whitespace() {
            let token: String = word
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if token.is_empty() {
                continue;
            }
            vector[(fnv1a(&token) % self.dimension as u64) as usize] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

impl SentenceEncoder for HashingEncoder {
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// FNV-1a hash, enough to spread tokens across dimensions.
fn fnv1a(token: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in token.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Encoder that always fails, for exercising model-failure paths.
#[derive(Debug, Default)]
pub struct FailingEncoder;

impl SentenceEncoder for FailingEncoder {
    fn encode_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Err(Error::ModelUnavailable("model not loaded".to_string()))
    }

    fn dimension(&self) -> usize {
        0
    }
}

/// Wrapper around [`HashingEncoder`] that counts encode calls, for
/// asserting that empty inputs never reach the model.
#[derive(Debug)]
pub struct CountingEncoder {
    inner: HashingEncoder,
    calls: AtomicUsize,
}

impl CountingEncoder {
    /// Create a counting encoder of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            inner: HashingEncoder::new(dimension),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `encode_batch` calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SentenceEncoder for CountingEncoder {
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.encode_batch(texts)
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }
}

/// Create a single-span block.
pub fn block(text: impl Into<String>, font_size: f32) -> PageBlock {
    PageBlock::from_text(text, font_size)
}

/// Create a page from its blocks.
pub fn page(blocks: Vec<PageBlock>) -> PageContent {
    PageContent::with_blocks(blocks)
}

/// Create an unranked section.
pub fn section(
    document: impl Into<String>,
    title: impl Into<String>,
    text: impl Into<String>,
    page_number: u32,
) -> Section {
    Section::new(document, title, text, page_number)
}
