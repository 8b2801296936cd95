use crate::action::action_model::{Action, AssertPredicate};
use crate::context::element_model::{ElementDescriptor, ElementKind, InputSubtype};
use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::Pattern;
use crate::pattern::values::SEARCH_QUERY;

const RESULTS_SETTLE_MS: u64 = 1000;

/// Query with results, then an empty query.
pub struct SearchFormPattern;

fn is_search_input(el: &ElementDescriptor) -> bool {
    matches!(el.subtype(), Some(InputSubtype::Text | InputSubtype::Search))
        && el.label_text().contains("search")
}

fn search_field(context: &PageContext) -> Option<&ElementDescriptor> {
    context.actionable().find(|e| is_search_input(e))
}

fn search_button(context: &PageContext) -> Option<&ElementDescriptor> {
    context
        .actionable()
        .find(|e| e.kind == ElementKind::Button && e.label_text().contains("search"))
}

/// Run the search either through its button or by submitting the field.
fn trigger(
    field: &ElementDescriptor,
    button: Option<&ElementDescriptor>,
    description: &str,
) -> Option<Action> {
    match button {
        Some(button) => Action::click(button, description, 0.85),
        None => Action::submit(field, description, 0.75),
    }
}

impl Pattern for SearchFormPattern {
    fn name(&self) -> &'static str {
        "search-form"
    }

    fn matches(&self, context: &PageContext) -> bool {
        search_field(context).is_some()
    }

    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor> {
        [search_field(context), search_button(context)]
            .into_iter()
            .flatten()
            .collect()
    }

    fn generate(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action> {
        let Some(field) = elements.iter().copied().find(|e| is_search_input(e)) else {
            return Vec::new();
        };
        let button = elements
            .iter()
            .copied()
            .find(|e| e.kind == ElementKind::Button);
        let name = field.display_name();

        let mut steps = Vec::new();

        steps.extend(Action::type_text(
            field,
            SEARCH_QUERY,
            format!("Enter search query into '{}'", name),
            0.9,
        ));
        steps.extend(trigger(field, button, "Run search"));
        steps.push(Action::wait(RESULTS_SETTLE_MS, "Wait for search results", 0.9));
        steps.extend(Action::assert(
            field,
            AssertPredicate::ResultsOrEmpty,
            "Verify results or an empty-state message are shown",
            0.75,
        ));

        steps.extend(Action::type_text(
            field,
            "",
            format!("Clear '{}'", name),
            0.85,
        ));
        steps.extend(trigger(field, button, "Run search with an empty query"));
        steps.push(Action::wait(RESULTS_SETTLE_MS, "Wait for empty-query response", 0.9));
        steps.extend(Action::assert(
            field,
            AssertPredicate::ResultsOrEmpty,
            "Verify the empty query is handled gracefully",
            0.6,
        ));

        steps
    }

    fn recommendation(&self, _context: &PageContext, _elements: &[&ElementDescriptor]) -> String {
        "Search input detected: test a real query and the empty-query path".to_string()
    }
}
