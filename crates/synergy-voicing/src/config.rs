//! Voicing configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// What to do with a DX algorithm whose routing row is all placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Write the placeholder row and report an advisory.
    #[default]
    Apply,
    /// Fail with [`Error::DegenerateAlgorithm`] and leave the voice untouched.
    Reject,
}

/// Configuration for the routing resolver and canonicalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicingConfig {
    pub degenerate_algorithms: DegeneratePolicy,
    /// Indent unit for canonical text output.
    pub text_indent: String,
}

impl Default for VoicingConfig {
    fn default() -> Self {
        Self {
            degenerate_algorithms: DegeneratePolicy::Apply,
            text_indent: "\t".to_string(),
        }
    }
}

impl VoicingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.text_indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::InvalidConfig(format!(
                "text_indent {:?} must contain only spaces or tabs",
                self.text_indent
            )));
        }
        Ok(())
    }
}
