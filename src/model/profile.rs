//! Relevance profile type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A free-text profile describing who needs what from the documents.
///
/// The engine treats the profile as one opaque string; it is encoded into
/// the same embedding space as section and sentence text and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelevanceProfile(String);

impl RelevanceProfile {
    /// Render the canonical profile sentence from a persona role and task.
    ///
    /// # Example
    ///
    /// ```
    /// use docrank::RelevanceProfile;
    ///
    /// let profile = RelevanceProfile::from_persona("Financial Analyst", "assess quarterly risk");
    /// assert_eq!(
    ///     profile.as_str(),
    ///     "As a Financial Analyst, I need to assess quarterly risk."
    /// );
    /// ```
    pub fn from_persona(role: &str, task: &str) -> Self {
        Self(format!("As a {}, I need to {}.", role.trim(), task.trim()))
    }

    /// Wrap an already-formed profile string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The profile text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelevanceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
