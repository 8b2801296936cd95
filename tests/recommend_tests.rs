use action_synthesis::context::element_model::{ElementDescriptor, InputSubtype};
use action_synthesis::context::page_context::PageContext;
use action_synthesis::recommend;
use action_synthesis::synthesis::coordinator::Synthesizer;

use crate::common::{checkbox, kitchen_sink_context, login_context, select};

mod common;

// ============================================================================
// Recommendation summarizer
// ============================================================================

#[test]
fn empty_page_has_no_recommendations() {
    assert!(recommend(&PageContext::default()).is_empty());
}

#[test]
fn checkbox_recommendation_counts_sampled_elements() {
    let ctx = PageContext::new(vec![checkbox("#a"), checkbox("#b")]);
    let lines = recommend(&ctx);

    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        "Checkboxes detected (2): use check/uncheck to test state changes"
    );
}

#[test]
fn one_line_per_matched_pattern_in_catalog_order() {
    let ctx = login_context();
    let synthesizer = Synthesizer::default();
    let lines = synthesizer.recommend(&ctx);
    let plan = synthesizer.synthesize(&ctx);

    assert_eq!(lines.len(), plan.contributions.len());
    assert!(lines[0].starts_with("Login form detected"));
    assert!(lines[1].starts_with("Form with 1 required field(s)"));
    assert!(lines[2].starts_with("Validated inputs detected (1)"));
}

#[test]
fn unactionable_elements_are_noted_last() {
    let ctx = PageContext::new(vec![
        select("#s"),
        ElementDescriptor::input(InputSubtype::Email).with_name("ghost"),
    ]);
    let lines = recommend(&ctx);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Dropdowns detected (1)"));
    assert!(lines[1].contains("no selector"));
}

#[test]
fn unactionable_note_needs_a_matched_pattern() {
    let ctx = PageContext::new(vec![ElementDescriptor::input(InputSubtype::Checkbox)]);
    assert!(recommend(&ctx).is_empty());
}

#[test]
fn recommendations_do_not_alter_synthesis() {
    let ctx = kitchen_sink_context();
    let synthesizer = Synthesizer::default();
    let before = synthesizer.synthesize(&ctx);
    let _ = synthesizer.recommend(&ctx);
    assert_eq!(synthesizer.synthesize(&ctx), before);
}
