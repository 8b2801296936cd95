use crate::action::action_model::Action;
use crate::context::element_model::ElementDescriptor;
use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::{Pattern, SELECT_CAP};

const SETTLE_MS: u64 = 500;

/// Switches the first few dropdowns to their second option and back.
///
/// No assertion is generated: what a selection changes is page-specific.
pub struct DropdownSelectPattern {
    /// Never more than `SELECT_CAP` dropdowns are exercised.
    pub max_selects: usize,
}

impl DropdownSelectPattern {
    fn limit(&self) -> usize {
        self.max_selects.min(SELECT_CAP)
    }
}

impl Pattern for DropdownSelectPattern {
    fn name(&self) -> &'static str {
        "dropdown-select"
    }

    fn matches(&self, context: &PageContext) -> bool {
        !context.selects().is_empty()
    }

    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor> {
        context.selects().into_iter().take(self.limit()).collect()
    }

    fn generate(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action> {
        let mut steps = Vec::new();

        for el in elements.iter().take(self.limit()) {
            let name = el.display_name();
            steps.extend(Action::select_index(
                el,
                1,
                format!("Select second option of '{}'", name),
                0.8,
            ));
            steps.push(Action::wait(
                SETTLE_MS,
                format!("Wait for UI dependent on '{}' to settle", name),
                0.9,
            ));
            steps.extend(Action::select_index(
                el,
                0,
                format!("Restore first option of '{}'", name),
                0.8,
            ));
        }

        steps
    }

    fn recommendation(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> String {
        format!(
            "Dropdowns detected ({}): change the selected option and watch dependent content",
            elements.len()
        )
    }
}
