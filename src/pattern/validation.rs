use crate::action::action_model::{Action, AssertPredicate};
use crate::context::element_model::{ElementDescriptor, ElementKind, InputSubtype};
use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::Pattern;
use crate::pattern::values::{
    FILLER_CEILING, SQL_INJECTION_PAYLOAD, XSS_PAYLOAD, filler, is_name_like, is_phone_like,
    is_url_like, valid_value,
};

const SUBMIT_SETTLE_MS: u64 = 1000;

// ============================================================================
// Comprehensive validation: format, boundary and security probes
// ============================================================================

/// Negative probes for every validated field, then one valid submission.
pub struct ComprehensiveValidationPattern;

/// Expected outcome of a probe submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Error,
    /// Submit only; the page may legitimately accept the value.
    Observe,
}

/// One invalid value to inject into a field.
struct Probe {
    value: String,
    label: &'static str,
    confidence: f32,
    expect: Expect,
}

impl Probe {
    fn error(value: impl Into<String>, label: &'static str, confidence: f32) -> Self {
        Self {
            value: value.into(),
            label,
            confidence,
            expect: Expect::Error,
        }
    }

    fn observe(value: impl Into<String>, label: &'static str, confidence: f32) -> Self {
        Self {
            value: value.into(),
            label,
            confidence,
            expect: Expect::Observe,
        }
    }
}

/// Format, boundary and semantic probes for one field, in a fixed order.
fn field_probes(el: &ElementDescriptor) -> Vec<Probe> {
    let mut probes = Vec::new();
    let subtype = match el.subtype() {
        Some(s) if s.accepts_text() => s,
        _ => return probes,
    };

    if *subtype == InputSubtype::Email {
        probes.push(Probe::error("invalidemail.com", "email without @", 0.9));
        probes.push(Probe::error("user@", "email without domain", 0.9));
        probes.push(Probe::error("@example.com", "email without local part", 0.9));
    }

    if is_phone_like(el) {
        probes.push(Probe::error("123", "phone number that is too short", 0.8));
        probes.push(Probe::error("abcdefghij", "phone number with letters", 0.8));
    }

    if is_url_like(el) {
        probes.push(Probe::error("example.com", "URL without protocol", 0.75));
        probes.push(Probe::error("htp://example.com", "URL with malformed protocol", 0.75));
    }

    if is_name_like(el) {
        probes.push(Probe::error("John123!@#", "name with digits and symbols", 0.5));
    }

    if let Some(min) = el.constraints.min_length {
        probes.push(Probe::error(
            filler(min.saturating_sub(1)),
            "value shorter than minimum length",
            0.85,
        ));
    }

    // A truncated filler is still shorter than the minimum, so only the
    // maximum side needs a distinct probe above the ceiling.
    match el.constraints.max_length {
        Some(max) if max < FILLER_CEILING => probes.push(Probe::error(
            filler(max + 1),
            "value longer than maximum length",
            0.85,
        )),
        Some(_) => probes.push(Probe::observe(
            filler(FILLER_CEILING),
            "very long value",
            0.3,
        )),
        None => {}
    }

    match subtype {
        InputSubtype::Number => {
            probes.push(Probe::error("-1", "negative number", 0.7));
            probes.push(Probe::error("999999999", "very large number", 0.7));
            probes.push(Probe::observe("0", "zero", 0.4));
        }
        InputSubtype::Date => {
            probes.push(Probe::error("2099-12-31", "date far in the future", 0.65));
            probes.push(Probe::error("1800-01-01", "implausibly old date", 0.65));
        }
        _ => {}
    }

    probes
}

fn push_probe(
    steps: &mut Vec<Action>,
    field: &ElementDescriptor,
    submit: &ElementDescriptor,
    probe: &Probe,
) {
    let name = field.display_name();
    steps.extend(Action::type_text(
        field,
        probe.value.clone(),
        format!("Enter {} into '{}'", probe.label, name),
        probe.confidence,
    ));
    steps.extend(Action::submit(submit, "Submit the form", probe.confidence));
    if probe.expect == Expect::Error {
        steps.extend(Action::assert(
            field,
            AssertPredicate::Error,
            format!("Verify '{}' rejects {}", name, probe.label),
            probe.confidence,
        ));
    }
}

fn push_fill(steps: &mut Vec<Action>, el: &ElementDescriptor) {
    let name = el.display_name();
    match &el.kind {
        ElementKind::Input(InputSubtype::Checkbox) => {
            steps.extend(Action::check(el, format!("Check required '{}'", name), 0.85));
        }
        ElementKind::Input(InputSubtype::Radio) => {
            steps.extend(Action::check(el, format!("Select required option '{}'", name), 0.8));
        }
        ElementKind::Select => {
            steps.extend(Action::select_index(
                el,
                1,
                format!("Choose an option for required '{}'", name),
                0.8,
            ));
        }
        _ => {
            if let Some(value) = valid_value(el) {
                steps.extend(Action::type_text(
                    el,
                    value,
                    format!("Enter a valid value into '{}'", name),
                    0.9,
                ));
            }
        }
    }
}

impl Pattern for ComprehensiveValidationPattern {
    fn name(&self) -> &'static str {
        "comprehensive-validation"
    }

    fn matches(&self, context: &PageContext) -> bool {
        context.actionable().any(|e| e.has_validation_trait()) && context.has_submit_control()
    }

    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor> {
        context
            .actionable()
            .filter(|e| match &e.kind {
                ElementKind::Input(subtype) => {
                    *subtype != InputSubtype::Hidden && *subtype != InputSubtype::Submit
                }
                ElementKind::Select => e.is_required(),
                ElementKind::Button => false,
            })
            .collect()
    }

    fn generate(&self, context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action> {
        let Some(submit) = context.primary_submit() else {
            return Vec::new();
        };

        let mut steps = Vec::new();

        for el in elements {
            for probe in field_probes(el) {
                push_probe(&mut steps, el, submit, &probe);
            }
        }

        let security = [
            Probe::error(SQL_INJECTION_PAYLOAD, "SQL injection payload", 0.7),
            Probe::error(XSS_PAYLOAD, "script injection payload", 0.7),
        ];
        for el in elements
            .iter()
            .filter(|e| e.subtype().is_some_and(InputSubtype::is_text_like))
        {
            for probe in &security {
                push_probe(&mut steps, el, submit, probe);
            }
        }

        // Success path over required fields only
        let required: Vec<&ElementDescriptor> =
            elements.iter().copied().filter(|e| e.is_required()).collect();
        for el in &required {
            push_fill(&mut steps, el);
        }
        steps.extend(Action::submit(submit, "Submit the form with valid values", 0.9));
        steps.push(Action::wait(SUBMIT_SETTLE_MS, "Wait for submission to complete", 0.9));
        steps.extend(Action::assert(
            submit,
            AssertPredicate::Success,
            "Verify a success indicator is shown",
            0.7,
        ));
        if let Some(first) = required
            .first()
            .filter(|e| e.subtype().is_some_and(InputSubtype::accepts_text))
        {
            steps.extend(Action::assert(
                first,
                AssertPredicate::ValueEquals(String::new()),
                format!("Verify '{}' is cleared after submission", first.display_name()),
                0.5,
            ));
        }

        steps
    }

    fn recommendation(&self, _context: &PageContext, elements: &[&ElementDescriptor]) -> String {
        let validated = elements.iter().filter(|e| e.has_validation_trait()).count();
        format!(
            "Validated inputs detected ({}): probe format, boundary and injection handling before a valid submission",
            validated
        )
    }
}
