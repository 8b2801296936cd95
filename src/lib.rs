//! Synthesizes ordered, executable UI test actions from an extracted page
//! context.
//!
//! `PageContext -> PatternCatalog::match_context -> Pattern::generate ->
//! SynthesisPlan`. The core is a pure transform: no I/O, no shared mutable
//! state. The `cli`, `report` and `trace` modules wrap it for command-line use.

use std::sync::Arc;

use crate::{
    action::action_model::Action,
    context::page_context::PageContext,
    pattern::{catalog::PatternCatalog, pattern_model::SynthesisLimits},
    synthesis::coordinator::Synthesizer,
};

pub mod action;
pub mod cli;
pub mod context;
pub mod pattern;
pub mod recommend;
pub mod report;
pub mod synthesis;
pub mod trace;

/// Synthesize a page with the standard catalog and default limits.
pub fn synthesize(context: &PageContext) -> Vec<Action> {
    Synthesizer::default().synthesize_actions(context)
}

/// Recommendations for a page with the standard catalog and default limits.
pub fn recommend(context: &PageContext) -> Vec<String> {
    Synthesizer::default().recommend(context)
}

/// A synthesizer over the standard catalog built with `limits`.
pub fn standard_synthesizer(limits: &SynthesisLimits) -> Synthesizer {
    Synthesizer::new(Arc::new(PatternCatalog::standard(limits)))
}
