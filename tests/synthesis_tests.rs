use std::sync::Arc;
use std::thread;

use action_synthesis::action::action_model::{ActionKind, AssertPredicate};
use action_synthesis::context::element_model::InputSubtype;
use action_synthesis::context::page_context::PageContext;
use action_synthesis::pattern::catalog::PatternCatalog;
use action_synthesis::pattern::checkbox::CheckboxTogglePattern;
use action_synthesis::pattern::pattern_model::{Pattern, SynthesisLimits};
use action_synthesis::synthesis::coordinator::Synthesizer;
use action_synthesis::synthesis::plan::SynthesisPlan;
use action_synthesis::{recommend, synthesize};

use crate::common::{
    assert_selector_safety, button, checkbox, count_kind, distinct_targets, input,
    kitchen_sink_context, login_context, radio, select, submit_input, typed_values,
};

mod common;

// ============================================================================
// Scenario 1: required email + submit input
// ============================================================================

#[test]
fn scenario_required_email_with_submit() {
    let ctx = PageContext::new(vec![
        input(InputSubtype::Email, "#email", "email").required(),
        submit_input("#submit"),
    ]);
    let plan = Synthesizer::default().synthesize(&ctx);

    assert_eq!(
        plan.matched_patterns(),
        vec!["required-field-form", "comprehensive-validation"]
    );

    let generic = &plan.contribution("required-field-form").unwrap().actions;
    assert_eq!(generic[0].kind, ActionKind::Submit);
    assert_eq!(generic[1].target.as_deref(), Some("#email"));
    assert_eq!(generic[1].predicate(), Some(AssertPredicate::Error));
    assert_eq!(typed_values(generic, "#email"), vec!["invalid-email"]);

    let validation = &plan.contribution("comprehensive-validation").unwrap().actions;
    let typed = typed_values(validation, "#email");
    for value in ["invalidemail.com", "user@", "@example.com"] {
        assert!(typed.contains(&value), "missing email negative {}", value);
    }
    assert!(typed.iter().any(|v| v.contains("OR '1'='1'")));
    assert!(typed.iter().any(|v| v.contains("<script>")));
    assert_eq!(
        validation
            .iter()
            .filter(|a| a.predicate() == Some(AssertPredicate::Success))
            .count(),
        1
    );

    assert!(plan.action_count() > 15);
    assert_selector_safety(&ctx, &plan.actions());
}

#[test]
fn scenario_required_email_with_submit_button() {
    // A <button> is not an input: one non-hidden input is too few for the
    // required-field form, so only the validation pattern applies.
    let ctx = PageContext::new(vec![
        input(InputSubtype::Email, "#email", "email").required(),
        button("#submit", "Submit"),
    ]);
    let plan = Synthesizer::default().synthesize(&ctx);

    assert_eq!(plan.matched_patterns(), vec!["comprehensive-validation"]);
    let actions = plan.actions();
    let typed = typed_values(&actions, "#email");
    for value in ["invalidemail.com", "user@", "@example.com"] {
        assert!(typed.contains(&value), "missing email negative {}", value);
    }
    assert!(!typed.contains(&"invalid-email"));
    assert!(
        actions
            .iter()
            .filter(|a| a.kind == ActionKind::Submit)
            .all(|a| a.target.as_deref() == Some("#submit"))
    );
}

// ============================================================================
// Scenario 2: checkboxes only
// ============================================================================

#[test]
fn scenario_three_checkboxes() {
    let ctx = PageContext::new(vec![checkbox("#a"), checkbox("#b"), checkbox("#c")]);
    let actions = synthesize(&ctx);

    assert_eq!(actions.len(), 12);
    assert_eq!(count_kind(&actions, ActionKind::Submit), 0);
    assert_eq!(count_kind(&actions, ActionKind::Type), 0);
    assert_eq!(distinct_targets(&actions).len(), 3);
}

// ============================================================================
// Scenario 3: lone phone field, no submit
// ============================================================================

#[test]
fn scenario_phone_without_submit_is_empty() {
    let ctx = PageContext::new(vec![input(InputSubtype::Tel, "#phone", "phone")]);
    let plan = Synthesizer::default().synthesize(&ctx);

    assert!(plan.contributions.is_empty());
    assert!(plan.actions().is_empty());
}

// ============================================================================
// Scenario 4: two radio groups
// ============================================================================

#[test]
fn scenario_two_radio_groups_only_first_tested() {
    let ctx = PageContext::new(vec![
        radio("#plan-basic", Some("plan")),
        radio("#plan-pro", Some("plan")),
        radio("#plan-team", Some("plan")),
        radio("#billing-monthly", Some("billing")),
        radio("#billing-yearly", Some("billing")),
    ]);
    let actions = synthesize(&ctx);

    assert_eq!(actions.len(), 6);
    assert!(distinct_targets(&actions).iter().all(|t| t.starts_with("#plan-")));
}

// ============================================================================
// Scenario 5: optional date field
// ============================================================================

#[test]
fn scenario_optional_date_field() {
    let ctx = PageContext::new(vec![
        input(InputSubtype::Date, "#birthdate", "birthdate"),
        button("#submit", "Submit"),
    ]);
    let plan = Synthesizer::default().synthesize(&ctx);

    assert_eq!(plan.matched_patterns(), vec!["comprehensive-validation"]);
    let actions = plan.actions();
    let typed = typed_values(&actions, "#birthdate");
    assert_eq!(typed, vec!["2099-12-31", "1800-01-01"]);
    assert!(
        !typed.contains(&action_synthesis::pattern::values::VALID_DATE),
        "optional field is not auto-filled"
    );
}

// ============================================================================
// Scenario 6: overlapping login and required-field patterns
// ============================================================================

#[test]
fn scenario_overlapping_patterns_keep_duplicates() {
    let ctx = login_context();
    let synthesizer = Synthesizer::default();
    let plan = synthesizer.synthesize(&ctx);

    assert_eq!(
        plan.matched_patterns(),
        vec!["login-form", "required-field-form", "comprehensive-validation"]
    );

    let login = &plan.contribution("login-form").unwrap().actions;
    let generic = &plan.contribution("required-field-form").unwrap().actions;
    for contribution in [login, generic] {
        assert!(contribution
            .iter()
            .any(|a| a.target.as_deref() == Some("#email")));
        assert!(contribution
            .iter()
            .any(|a| a.predicate() == Some(AssertPredicate::Error)));
    }

    // Both patterns submit through the same control; nothing is merged away.
    let submits_on_signin = plan
        .actions()
        .iter()
        .filter(|a| a.kind == ActionKind::Submit && a.target.as_deref() == Some("#signin"))
        .count();
    let per_pattern: usize = plan
        .contributions
        .iter()
        .map(|c| {
            c.actions
                .iter()
                .filter(|a| a.kind == ActionKind::Submit && a.target.as_deref() == Some("#signin"))
                .count()
        })
        .sum();
    assert_eq!(submits_on_signin, per_pattern);
    assert!(submits_on_signin >= 4);

    assert_eq!(
        plan.action_count(),
        plan.contributions.iter().map(|c| c.actions.len()).sum::<usize>()
    );
    assert_eq!(synthesizer.synthesize(&ctx), plan, "duplication is stable");
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn synthesis_is_deterministic() {
    let ctx = kitchen_sink_context();
    let synthesizer = Synthesizer::default();

    let first = synthesizer.synthesize(&ctx);
    let second = synthesizer.synthesize(&ctx);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.actions()).unwrap(),
        serde_json::to_string(&second.actions()).unwrap()
    );
    assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
}

#[test]
fn fingerprint_differs_between_pages() {
    let a = Synthesizer::default().synthesize(&login_context());
    let b = Synthesizer::default().synthesize(&kitchen_sink_context());
    assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    assert_eq!(a.fingerprint().unwrap().len(), 40);
}

#[test]
fn every_target_is_a_context_selector() {
    let ctx = kitchen_sink_context();
    let actions = synthesize(&ctx);
    assert!(!actions.is_empty());
    assert_selector_safety(&ctx, &actions);
}

#[test]
fn kitchen_sink_respects_caps() {
    let ctx = kitchen_sink_context();
    let plan = Synthesizer::default().synthesize(&ctx);

    let checkbox_targets = distinct_targets(&plan.contribution("checkbox-toggle").unwrap().actions);
    assert_eq!(checkbox_targets, vec!["#c1", "#c2", "#c3"]);

    let select_targets = distinct_targets(&plan.contribution("dropdown-select").unwrap().actions);
    assert_eq!(select_targets, vec!["#country", "#state"]);

    let radio_targets = distinct_targets(&plan.contribution("radio-group").unwrap().actions);
    assert_eq!(radio_targets, vec!["#r-a", "#r-b"]);

    assert!(plan.actions().iter().all(|a| a.target.as_deref() != Some("#csrf")));
    assert!(plan.actions().iter().all(|a| a.target.as_deref() != Some("#cancel")));
}

#[test]
fn every_pattern_fires_on_kitchen_sink() {
    let plan = Synthesizer::default().synthesize(&kitchen_sink_context());
    assert_eq!(
        plan.matched_patterns(),
        PatternCatalog::default().names()
    );
    assert!(plan.contributions.iter().all(|c| !c.actions.is_empty()));
}

#[test]
fn empty_context_yields_nothing() {
    let ctx = PageContext::default();
    assert!(synthesize(&ctx).is_empty());
    assert!(recommend(&ctx).is_empty());
    assert!(Synthesizer::default().synthesize(&ctx).is_empty());
}

#[test]
fn confidence_stays_in_unit_interval() {
    let actions = synthesize(&kitchen_sink_context());
    assert!(actions.iter().all(|a| (0.0..=1.0).contains(&a.confidence)));
    assert!(actions.iter().all(|a| !a.description.is_empty()));
}

#[test]
fn synthesis_does_not_mutate_context() {
    let ctx = kitchen_sink_context();
    let before = ctx.clone();
    let _ = synthesize(&ctx);
    assert_eq!(ctx, before);
}

#[test]
fn limits_change_sampling() {
    let limits = SynthesisLimits {
        max_checkboxes: 1,
        max_radio_options: 1,
        max_selects: 1,
    };
    let plan = action_synthesis::standard_synthesizer(&limits).synthesize(&kitchen_sink_context());

    assert_eq!(plan.contribution("checkbox-toggle").unwrap().actions.len(), 4);
    assert_eq!(plan.contribution("radio-group").unwrap().actions.len(), 2);
    assert_eq!(
        distinct_targets(&plan.contribution("dropdown-select").unwrap().actions),
        vec!["#country"]
    );
}

#[test]
fn limits_above_caps_are_clamped() {
    let limits = SynthesisLimits {
        max_checkboxes: 10,
        max_radio_options: 10,
        max_selects: 10,
    };
    let mut elements: Vec<_> = (0..10).map(|i| checkbox(&format!("#cb{}", i))).collect();
    elements.extend((0..10).map(|i| radio(&format!("#opt{}", i), Some("plan"))));
    elements.extend((0..10).map(|i| select(&format!("#sel{}", i))));
    let ctx = PageContext::new(elements);

    let plan = action_synthesis::standard_synthesizer(&limits).synthesize(&ctx);

    let checkboxes = distinct_targets(&plan.contribution("checkbox-toggle").unwrap().actions);
    assert_eq!(checkboxes, vec!["#cb0", "#cb1", "#cb2"]);
    let options = distinct_targets(&plan.contribution("radio-group").unwrap().actions);
    assert_eq!(options, vec!["#opt0", "#opt1", "#opt2"]);
    let selects = distinct_targets(&plan.contribution("dropdown-select").unwrap().actions);
    assert_eq!(selects, vec!["#sel0", "#sel1"]);

    let direct = CheckboxTogglePattern { max_elements: 10 };
    assert_eq!(direct.candidates(&ctx).len(), 3);
}

// ============================================================================
// Concurrency: shared read-only catalog
// ============================================================================

#[test]
fn concurrent_runs_share_catalog() {
    let catalog = Arc::new(PatternCatalog::default());
    let expected = Synthesizer::new(Arc::clone(&catalog)).synthesize(&kitchen_sink_context());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let synthesizer = Synthesizer::new(Arc::clone(&catalog));
            thread::spawn(move || synthesizer.synthesize(&kitchen_sink_context()))
        })
        .collect();

    for handle in handles {
        let plan: SynthesisPlan = handle.join().unwrap();
        assert_eq!(plan, expected);
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn plan_json_roundtrip() {
    let plan = Synthesizer::default().synthesize(&login_context());
    let json = plan.to_json().unwrap();
    let parsed: SynthesisPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, plan);
    assert!(json.contains("\"kind\": \"assert\""));
}

#[test]
fn wait_actions_serialize_without_target() {
    let plan = Synthesizer::default().synthesize(&login_context());
    let yaml = plan.to_yaml().unwrap();
    let parsed: SynthesisPlan = serde_yaml::from_str(&yaml).unwrap();
    let wait = parsed
        .actions()
        .into_iter()
        .find(|a| a.kind == ActionKind::Wait)
        .unwrap();
    assert_eq!(wait.target, None);
    assert_eq!(wait.value.as_deref(), Some("1000"));
}
