use crate::action::action_model::{Action, AssertPredicate};
use crate::context::element_model::{ElementDescriptor, InputSubtype};
use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::{CHECKBOX_CAP, Pattern};

/// Check/uncheck round trip on the first few checkboxes.
pub struct CheckboxTogglePattern {
    /// Never more than `CHECKBOX_CAP` are sampled, whatever this says.
    pub max_elements: usize,
}

impl CheckboxTogglePattern {
    fn limit(&self) -> usize {
        self.max_elements.min(CHECKBOX_CAP)
    }
}

impl Pattern for CheckboxTogglePattern {
    fn name(&self) -> &'static str {
        "checkbox-toggle"
    }

    fn matches(&self, context: &PageContext) -> bool {
        context
            .actionable()
            .any(|e| e.is_subtype(&InputSubtype::Checkbox))
    }

    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor> {
        context
            .inputs_of(InputSubtype::Checkbox)
            .into_iter()
            .take(self.limit())
            .collect()
    }

    fn generate(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action> {
        let mut steps = Vec::new();

        for el in elements.iter().take(self.limit()) {
            let name = el.display_name();
            steps.extend(Action::check(el, format!("Check '{}'", name), 0.9));
            steps.extend(Action::assert(
                el,
                AssertPredicate::Checked,
                format!("Verify '{}' is checked", name),
                0.9,
            ));
            steps.extend(Action::uncheck(el, format!("Uncheck '{}'", name), 0.9));
            steps.extend(Action::assert(
                el,
                AssertPredicate::Unchecked,
                format!("Verify '{}' is unchecked", name),
                0.9,
            ));
        }

        steps
    }

    fn recommendation(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> String {
        format!(
            "Checkboxes detected ({}): use check/uncheck to test state changes",
            elements.len()
        )
    }
}
