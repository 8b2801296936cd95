use tracing::debug;

use crate::context::page_context::PageContext;
use crate::pattern::checkbox::CheckboxTogglePattern;
use crate::pattern::dropdown::DropdownSelectPattern;
use crate::pattern::login::LoginFormPattern;
use crate::pattern::pattern_model::{Pattern, PatternMatch, SynthesisLimits};
use crate::pattern::radio::RadioGroupPattern;
use crate::pattern::required_form::RequiredFieldFormPattern;
use crate::pattern::search::SearchFormPattern;
use crate::pattern::validation::ComprehensiveValidationPattern;

// ============================================================================
// PatternCatalog: immutable ordered registry + matcher
// ============================================================================

/// Read-only, ordered list of patterns.
///
/// Built once and shared (typically behind an `Arc`); there is no way to
/// mutate a catalog after construction.
pub struct PatternCatalog {
    patterns: Vec<Box<dyn Pattern>>,
}

impl PatternCatalog {
    /// Catalog from an explicit pattern list. Order is merge order.
    pub fn new(patterns: Vec<Box<dyn Pattern>>) -> Self {
        Self { patterns }
    }

    /// The built-in strategies, in their canonical order. Limits above the
    /// hard caps are clamped.
    pub fn standard(limits: &SynthesisLimits) -> Self {
        let limits = limits.clamped();
        Self::new(vec![
            Box::new(CheckboxTogglePattern {
                max_elements: limits.max_checkboxes,
            }),
            Box::new(RadioGroupPattern {
                max_options: limits.max_radio_options,
            }),
            Box::new(DropdownSelectPattern {
                max_selects: limits.max_selects,
            }),
            Box::new(LoginFormPattern),
            Box::new(SearchFormPattern),
            Box::new(RequiredFieldFormPattern),
            Box::new(ComprehensiveValidationPattern),
        ])
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Pattern> {
        self.patterns
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// Every pattern whose predicate holds for `context`, in catalog order.
    pub fn match_context<'c, 'a>(&'c self, context: &'a PageContext) -> Vec<PatternMatch<'c, 'a>> {
        self.patterns
            .iter()
            .filter(|p| p.matches(context))
            .map(|p| {
                let elements = p.candidates(context);
                debug!(pattern = p.name(), elements = elements.len(), "pattern matched");
                PatternMatch {
                    pattern: p.as_ref(),
                    elements,
                }
            })
            .collect()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard(&SynthesisLimits::default())
    }
}
