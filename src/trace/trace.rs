use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::synthesis::plan::SynthesisPlan;

/// One JSONL record per synthesis run.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub url: Option<String>,

    pub elements: usize,
    pub unactionable: usize,

    pub patterns: Vec<String>,
    pub actions: usize,

    pub fingerprint: Option<String>,
}

impl TraceEvent {
    pub fn now(url: Option<&str>) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            url: url.map(str::to_string),
            elements: 0,
            unactionable: 0,
            patterns: vec![],
            actions: 0,
            fingerprint: None,
        }
    }

    pub fn with_elements(mut self, total: usize, unactionable: usize) -> Self {
        self.elements = total;
        self.unactionable = unactionable;
        self
    }

    pub fn with_plan(mut self, plan: &SynthesisPlan) -> Self {
        self.patterns = plan
            .matched_patterns()
            .into_iter()
            .map(str::to_string)
            .collect();
        self.actions = plan.action_count();
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl ToString) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }
}
