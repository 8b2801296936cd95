use serde::{Deserialize, Serialize};

use crate::action::action_model::Action;
use crate::synthesis::error::SynthesisError;

// ============================================================================
// SynthesisPlan: per-pattern contributions, flattened in catalog order
// ============================================================================

/// Actions one matched pattern contributed, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternContribution {
    pub pattern: String,
    pub actions: Vec<Action>,
}

/// Result of one synthesis run for a page.
///
/// Contributions are kept as generated: overlapping actions from different
/// patterns are not merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub contributions: Vec<PatternContribution>,
}

impl SynthesisPlan {
    /// The flat action stream handed to the execution engine.
    pub fn actions(&self) -> Vec<Action> {
        self.contributions
            .iter()
            .flat_map(|c| c.actions.iter().cloned())
            .collect()
    }

    pub fn action_count(&self) -> usize {
        self.contributions.iter().map(|c| c.actions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.action_count() == 0
    }

    /// Names of patterns that matched, including ones that generated nothing.
    pub fn matched_patterns(&self) -> Vec<&str> {
        self.contributions.iter().map(|c| c.pattern.as_str()).collect()
    }

    pub fn contribution(&self, pattern: &str) -> Option<&PatternContribution> {
        self.contributions.iter().find(|c| c.pattern == pattern)
    }

    /// SHA-1 over the serialized flat action list.
    ///
    /// Equal for any two runs over the same context, across processes.
    pub fn fingerprint(&self) -> Result<String, SynthesisError> {
        use sha1::{Digest, Sha1};

        let bytes = serde_json::to_vec(&self.actions()).map_err(SynthesisError::JsonSerialize)?;
        let mut hasher = Sha1::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }

    pub fn to_json(&self) -> Result<String, SynthesisError> {
        serde_json::to_string_pretty(self).map_err(SynthesisError::JsonSerialize)
    }

    pub fn to_yaml(&self) -> Result<String, SynthesisError> {
        serde_yaml::to_string(self).map_err(SynthesisError::YamlSerialize)
    }
}
