#![allow(dead_code)]

use action_synthesis::action::action_model::{Action, ActionKind};
use action_synthesis::context::element_model::{ElementDescriptor, InputSubtype};
use action_synthesis::context::page_context::PageContext;

// ============================================================================
// Element builders
// ============================================================================

pub fn input(subtype: InputSubtype, selector: &str, name: &str) -> ElementDescriptor {
    ElementDescriptor::input(subtype)
        .with_selector(selector)
        .with_name(name)
}

pub fn checkbox(selector: &str) -> ElementDescriptor {
    ElementDescriptor::input(InputSubtype::Checkbox).with_selector(selector)
}

pub fn radio(selector: &str, name: Option<&str>) -> ElementDescriptor {
    let el = ElementDescriptor::input(InputSubtype::Radio).with_selector(selector);
    match name {
        Some(n) => el.with_name(n),
        None => el,
    }
}

pub fn select(selector: &str) -> ElementDescriptor {
    ElementDescriptor::select().with_selector(selector)
}

pub fn button(selector: &str, text: &str) -> ElementDescriptor {
    ElementDescriptor::button()
        .with_selector(selector)
        .with_text(text)
}

pub fn submit_input(selector: &str) -> ElementDescriptor {
    ElementDescriptor::input(InputSubtype::Submit)
        .with_selector(selector)
        .with_text("Submit")
}

// ============================================================================
// Page builders
// ============================================================================

/// Required email, optional password, "Sign In" button.
pub fn login_context() -> PageContext {
    PageContext::new(vec![
        input(InputSubtype::Email, "#email", "email").required(),
        input(InputSubtype::Password, "#password", "password"),
        button("#signin", "Sign In"),
    ])
    .with_url("https://example.com/login")
}

/// A page exercising every pattern at once.
pub fn kitchen_sink_context() -> PageContext {
    PageContext::new(vec![
        input(InputSubtype::Search, "#q", "q").with_aria_label("Search site"),
        button("#search-btn", "Search"),
        input(InputSubtype::Email, "#email", "email").required(),
        input(InputSubtype::Password, "#password", "password")
            .required()
            .with_min_length(8),
        input(InputSubtype::Text, "#full-name", "full_name")
            .required()
            .with_max_length(40),
        input(InputSubtype::Tel, "#phone", "phone"),
        input(InputSubtype::Url, "#site", "website"),
        input(InputSubtype::Number, "#age", "age"),
        input(InputSubtype::Date, "#dob", "birthdate"),
        input(InputSubtype::Hidden, "#csrf", "csrf"),
        checkbox("#c1"),
        checkbox("#c2"),
        checkbox("#c3"),
        checkbox("#c4"),
        radio("#r-a", Some("plan")),
        radio("#r-b", Some("plan")),
        radio("#r-c", Some("billing")),
        select("#country"),
        select("#state"),
        select("#city"),
        // no selector: counted, never targeted
        ElementDescriptor::input(InputSubtype::Email)
            .with_name("backup_email")
            .required(),
        button("#cancel", "Cancel"),
        button("#register", "Register"),
    ])
    .with_url("https://example.com/register")
}

// ============================================================================
// Assertions over action lists
// ============================================================================

pub fn targets_of<'a>(actions: &'a [Action]) -> Vec<&'a str> {
    actions.iter().filter_map(|a| a.target.as_deref()).collect()
}

pub fn distinct_targets(actions: &[Action]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for t in targets_of(actions) {
        if !seen.iter().any(|s| s == t) {
            seen.push(t.to_string());
        }
    }
    seen
}

pub fn count_kind(actions: &[Action], kind: ActionKind) -> usize {
    actions.iter().filter(|a| a.kind == kind).count()
}

pub fn typed_values<'a>(actions: &'a [Action], selector: &str) -> Vec<&'a str> {
    actions
        .iter()
        .filter(|a| a.kind == ActionKind::Type && a.target.as_deref() == Some(selector))
        .filter_map(|a| a.value.as_deref())
        .collect()
}

/// Every targeted action points at a selector of `context`.
pub fn assert_selector_safety(context: &PageContext, actions: &[Action]) {
    for action in actions {
        match (&action.kind, &action.target) {
            (ActionKind::Wait, None) => {}
            (_, Some(target)) => assert!(
                context.owns_selector(target),
                "action '{}' targets foreign selector '{}'",
                action.description,
                target
            ),
            (kind, None) => panic!("{} action without target: {}", kind, action.description),
        }
    }
}
