use std::sync::Arc;

use tracing::{debug, info};

use crate::action::action_model::Action;
use crate::context::page_context::PageContext;
use crate::pattern::catalog::PatternCatalog;
use crate::pattern::pattern_model::PatternMatch;
use crate::recommend::summarizer::summarize;
use crate::synthesis::plan::{PatternContribution, SynthesisPlan};

// ============================================================================
// Synthesizer: match, generate, concatenate
// ============================================================================

/// Runs a shared catalog against page contexts.
///
/// Cloning is cheap and clones share the same catalog, so one synthesizer
/// per worker thread needs no coordination.
#[derive(Clone)]
pub struct Synthesizer {
    catalog: Arc<PatternCatalog>,
}

impl Synthesizer {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Patterns that apply to `context`, in catalog order.
    pub fn match_context<'c, 'a>(&'c self, context: &'a PageContext) -> Vec<PatternMatch<'c, 'a>> {
        self.catalog.match_context(context)
    }

    /// Generate the full plan for one page.
    pub fn synthesize(&self, context: &PageContext) -> SynthesisPlan {
        let contributions: Vec<PatternContribution> = self
            .match_context(context)
            .into_iter()
            .map(|m| {
                let actions = m.pattern.generate(context, &m.elements);
                debug!(pattern = m.pattern.name(), actions = actions.len(), "pattern generated");
                PatternContribution {
                    pattern: m.pattern.name().to_string(),
                    actions,
                }
            })
            .collect();

        let plan = SynthesisPlan {
            url: context.url.clone(),
            contributions,
        };

        info!(
            url = context.url.as_deref().unwrap_or("unknown"),
            elements = context.elements.len(),
            patterns = plan.contributions.len(),
            actions = plan.action_count(),
            "synthesis complete"
        );

        plan
    }

    /// Flat action list for one page.
    pub fn synthesize_actions(&self, context: &PageContext) -> Vec<Action> {
        self.synthesize(context).actions()
    }

    /// Rationale strings for the patterns that apply to `context`.
    pub fn recommend(&self, context: &PageContext) -> Vec<String> {
        summarize(context, &self.match_context(context))
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(Arc::new(PatternCatalog::default()))
    }
}
