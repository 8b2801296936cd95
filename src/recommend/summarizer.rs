use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::PatternMatch;

/// One rationale line per matched pattern, in catalog order, followed by a
/// note about descriptors that could not be targeted.
///
/// Purely advisory text for reports.
pub fn summarize(context: &PageContext, matches: &[PatternMatch<'_, '_>]) -> Vec<String> {
    let mut lines: Vec<String> = matches
        .iter()
        .map(|m| m.pattern.recommendation(context, &m.elements))
        .collect();

    let unactionable = context.unactionable().count();
    if unactionable > 0 && !lines.is_empty() {
        lines.push(format!(
            "{} element(s) have no selector and were left out of the plan",
            unactionable
        ));
    }

    lines
}
