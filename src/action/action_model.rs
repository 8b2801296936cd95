use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::element_model::ElementDescriptor;

// ============================================================================
// Synthesized test steps handed to the execution engine
// ============================================================================

/// Browser primitive an action maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Click,
    Type,
    Select,
    Check,
    Uncheck,
    Submit,
    Wait,
    Assert,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Click => "click",
            ActionKind::Type => "type",
            ActionKind::Select => "select",
            ActionKind::Check => "check",
            ActionKind::Uncheck => "uncheck",
            ActionKind::Submit => "submit",
            ActionKind::Wait => "wait",
            ActionKind::Assert => "assert",
        };
        f.write_str(s)
    }
}

/// Predicate evaluated by an `assert` action against live DOM state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertPredicate {
    Checked,
    Unchecked,
    /// Target is gone from the page (e.g. a login form after sign-in).
    Detached,
    Error,
    Success,
    ResultsOrEmpty,
    TextContains(String),
    ValueEquals(String),
}

impl AssertPredicate {
    /// Wire encoding carried in `Action::value`.
    pub fn encode(&self) -> String {
        match self {
            AssertPredicate::Checked => "state:checked".into(),
            AssertPredicate::Unchecked => "state:unchecked".into(),
            AssertPredicate::Detached => "state:detached".into(),
            AssertPredicate::Error => "error".into(),
            AssertPredicate::Success => "success".into(),
            AssertPredicate::ResultsOrEmpty => "results-or-empty".into(),
            AssertPredicate::TextContains(s) => format!("text:{}", s),
            AssertPredicate::ValueEquals(s) => format!("value:{}", s),
        }
    }

    pub fn decode(value: &str) -> Option<Self> {
        match value {
            "state:checked" => Some(AssertPredicate::Checked),
            "state:unchecked" => Some(AssertPredicate::Unchecked),
            "state:detached" => Some(AssertPredicate::Detached),
            "error" => Some(AssertPredicate::Error),
            "success" => Some(AssertPredicate::Success),
            "results-or-empty" => Some(AssertPredicate::ResultsOrEmpty),
            _ => value
                .strip_prefix("text:")
                .map(|s| AssertPredicate::TextContains(s.to_string()))
                .or_else(|| {
                    value
                        .strip_prefix("value:")
                        .map(|s| AssertPredicate::ValueEquals(s.to_string()))
                }),
        }
    }
}

/// One step of a synthesized test script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub description: String,
    /// Synthesizer's own certainty that the step is meaningful, in `[0, 1]`.
    pub confidence: f32,
}

impl Action {
    /// Build an action against `el`. Returns `None` when `el` has no selector.
    fn on(
        kind: ActionKind,
        el: &ElementDescriptor,
        value: Option<String>,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        let target = el.selector.clone()?;
        Some(Self {
            kind,
            target: Some(target),
            value,
            description: description.into(),
            confidence: confidence.clamp(0.0, 1.0),
        })
    }

    pub fn click(
        el: &ElementDescriptor,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        Self::on(ActionKind::Click, el, None, description, confidence)
    }

    /// Replace the field's content with `text`.
    pub fn type_text(
        el: &ElementDescriptor,
        text: impl Into<String>,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        Self::on(ActionKind::Type, el, Some(text.into()), description, confidence)
    }

    pub fn select_index(
        el: &ElementDescriptor,
        index: usize,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        Self::on(
            ActionKind::Select,
            el,
            Some(format!("index:{}", index)),
            description,
            confidence,
        )
    }

    pub fn check(
        el: &ElementDescriptor,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        Self::on(ActionKind::Check, el, None, description, confidence)
    }

    pub fn uncheck(
        el: &ElementDescriptor,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        Self::on(ActionKind::Uncheck, el, None, description, confidence)
    }

    pub fn submit(
        el: &ElementDescriptor,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        Self::on(ActionKind::Submit, el, None, description, confidence)
    }

    pub fn assert(
        el: &ElementDescriptor,
        predicate: AssertPredicate,
        description: impl Into<String>,
        confidence: f32,
    ) -> Option<Self> {
        Self::on(
            ActionKind::Assert,
            el,
            Some(predicate.encode()),
            description,
            confidence,
        )
    }

    /// Untargeted pause for dependent UI to settle.
    pub fn wait(duration_ms: u64, description: impl Into<String>, confidence: f32) -> Self {
        Self {
            kind: ActionKind::Wait,
            target: None,
            value: Some(duration_ms.to_string()),
            description: description.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Decoded assertion predicate, for `assert` actions.
    pub fn predicate(&self) -> Option<AssertPredicate> {
        if self.kind != ActionKind::Assert {
            return None;
        }
        self.value.as_deref().and_then(AssertPredicate::decode)
    }
}
