use serde::{Deserialize, Serialize};

use crate::action::action_model::Action;
use crate::context::element_model::ElementDescriptor;
use crate::context::page_context::PageContext;

// ============================================================================
// Pattern trait: a detection predicate paired with an action generator
// ============================================================================

/// A named, independent testing strategy.
///
/// `matches` is a coarse filter over element types present. `generate` does
/// the precise work and returns an empty list when it cannot find what it
/// needs, never panicking.
pub trait Pattern: Send + Sync {
    /// Unique catalog key.
    fn name(&self) -> &'static str;

    fn matches(&self, context: &PageContext) -> bool;

    /// Elements this pattern will act on, in element order.
    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor>;

    fn generate(&self, context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action>;

    /// Rationale for reports. Never parsed back into actions.
    fn recommendation(&self, context: &PageContext, elements: &[&ElementDescriptor]) -> String;
}

/// A pattern that applies to a context, with the elements it matched.
pub struct PatternMatch<'c, 'a> {
    pub pattern: &'c dyn Pattern,
    pub elements: Vec<&'a ElementDescriptor>,
}

impl std::fmt::Debug for PatternMatch<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternMatch")
            .field("pattern", &self.pattern.name())
            .field("elements", &self.elements.len())
            .finish()
    }
}

/// Hard ceilings on per-pattern sampling. Settings may only lower them.
pub const CHECKBOX_CAP: usize = 3;
pub const RADIO_OPTION_CAP: usize = 3;
pub const SELECT_CAP: usize = 2;

/// Sampling caps that bound per-pattern exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisLimits {
    #[serde(default = "default_three")]
    pub max_checkboxes: usize,

    #[serde(default = "default_three")]
    pub max_radio_options: usize,

    #[serde(default = "default_two")]
    pub max_selects: usize,
}

impl Default for SynthesisLimits {
    fn default() -> Self {
        Self {
            max_checkboxes: CHECKBOX_CAP,
            max_radio_options: RADIO_OPTION_CAP,
            max_selects: SELECT_CAP,
        }
    }
}

impl SynthesisLimits {
    /// These limits with every setting held at or below its hard ceiling.
    pub fn clamped(self) -> Self {
        Self {
            max_checkboxes: self.max_checkboxes.min(CHECKBOX_CAP),
            max_radio_options: self.max_radio_options.min(RADIO_OPTION_CAP),
            max_selects: self.max_selects.min(SELECT_CAP),
        }
    }
}

fn default_three() -> usize { CHECKBOX_CAP }
fn default_two() -> usize { SELECT_CAP }
