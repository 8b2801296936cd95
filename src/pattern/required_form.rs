use crate::action::action_model::{Action, AssertPredicate};
use crate::context::element_model::{ElementDescriptor, InputSubtype};
use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::Pattern;

/// Blank submission and type-mismatch checks on required fields.
pub struct RequiredFieldFormPattern;

fn mismatch_value(subtype: &InputSubtype) -> Option<&'static str> {
    match subtype {
        InputSubtype::Email => Some("invalid-email"),
        InputSubtype::Number => Some("not-a-number"),
        _ => None,
    }
}

impl Pattern for RequiredFieldFormPattern {
    fn name(&self) -> &'static str {
        "required-field-form"
    }

    fn matches(&self, context: &PageContext) -> bool {
        context.non_hidden_inputs().count() >= 2 && context.has_submit_control()
    }

    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor> {
        context
            .actionable()
            .filter(|e| e.is_required() && e.subtype().is_some())
            .collect()
    }

    fn generate(&self, context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action> {
        let Some(submit) = context.primary_submit() else {
            return Vec::new();
        };

        let mut steps = Vec::new();

        if let Some(first) = elements.first() {
            steps.extend(Action::submit(submit, "Submit the form with every field blank", 0.9));
            steps.extend(Action::assert(
                first,
                AssertPredicate::Error,
                format!("Verify required field '{}' reports an error", first.display_name()),
                0.85,
            ));
        }

        for el in elements {
            let Some(value) = el.subtype().and_then(mismatch_value) else {
                continue;
            };
            let name = el.display_name();
            steps.extend(Action::type_text(
                el,
                value,
                format!("Enter a type-mismatched value into '{}'", name),
                0.85,
            ));
            steps.extend(Action::submit(submit, "Submit the form", 0.85));
            steps.extend(Action::assert(
                el,
                AssertPredicate::Error,
                format!("Verify '{}' rejects the mismatched value", name),
                0.8,
            ));
        }

        steps
    }

    fn recommendation(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> String {
        format!(
            "Form with {} required field(s) detected: verify blank and mistyped submissions are rejected",
            elements.len()
        )
    }
}
