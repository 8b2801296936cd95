use crate::action::action_model::{Action, AssertPredicate};
use crate::context::element_model::{ElementDescriptor, InputSubtype};
use crate::context::grouping::group_radios;
use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::{Pattern, RADIO_OPTION_CAP};

/// Selects each option of the first radio group.
///
/// Radios in one group are mutually exclusive, so one group is enough to
/// exercise the interaction; later groups contribute nothing.
pub struct RadioGroupPattern {
    /// Never more than `RADIO_OPTION_CAP` options are selected.
    pub max_options: usize,
}

impl RadioGroupPattern {
    fn limit(&self) -> usize {
        self.max_options.min(RADIO_OPTION_CAP)
    }
}

impl Pattern for RadioGroupPattern {
    fn name(&self) -> &'static str {
        "radio-group"
    }

    fn matches(&self, context: &PageContext) -> bool {
        context
            .actionable()
            .any(|e| e.is_subtype(&InputSubtype::Radio))
    }

    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor> {
        group_radios(context.actionable())
            .into_iter()
            .next()
            .map(|group| group.members.into_iter().take(self.limit()).collect())
            .unwrap_or_default()
    }

    fn generate(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action> {
        // Regroup so a caller passing several groups still only gets the first.
        let Some(group) = group_radios(elements.iter().copied()).into_iter().next() else {
            return Vec::new();
        };
        let group_name = group.name.clone().unwrap_or_else(|| "default".to_string());

        let mut steps = Vec::new();
        for el in group.members.iter().take(self.limit()) {
            let option = el.display_name();
            steps.extend(Action::check(
                el,
                format!("Select radio option '{}' in group '{}'", option, group_name),
                0.85,
            ));
            steps.extend(Action::assert(
                el,
                AssertPredicate::Checked,
                format!("Verify radio option '{}' is selected", option),
                0.85,
            ));
        }

        steps
    }

    fn recommendation(&self, context: &PageContext, _elements: &[&ElementDescriptor]) -> String {
        let groups = group_radios(context.actionable()).len();
        format!(
            "Radio groups detected ({}): select each option of one group to verify mutual exclusion",
            groups
        )
    }
}
