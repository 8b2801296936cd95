use serde::{Deserialize, Serialize};

use crate::context::element_model::{ElementDescriptor, ElementKind, InputSubtype};
use crate::context::normalize::RawPageContext;
use crate::synthesis::error::SynthesisError;

/// Button labels that mark a control as something other than a submit.
const NON_SUBMIT_KEYWORDS: [&str; 4] = ["cancel", "reset", "back", "close"];

/// Labels that mark a submit-like control as the form's primary action.
const PRIMARY_SUBMIT_KEYWORDS: [&str; 9] = [
    "submit", "save", "sign", "login", "log in", "continue", "next", "register", "send",
];

// ============================================================================
// PageContext: ordered snapshot of one page's interactive elements
// ============================================================================

/// All detected interactive elements of a single page snapshot.
///
/// Element order is significant: pattern generation, radio grouping and
/// "first N" sampling all follow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub elements: Vec<ElementDescriptor>,
}

/// Aggregate counts over a context, including unactionable descriptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextStats {
    pub total: usize,
    pub inputs: usize,
    pub selects: usize,
    pub buttons: usize,
    pub required: usize,
    pub actionable: usize,
    pub unactionable: usize,
}

impl PageContext {
    pub fn new(elements: Vec<ElementDescriptor>) -> Self {
        Self { url: None, elements }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Parse the upstream extraction wire format.
    ///
    /// A `null`, non-object or otherwise malformed document is an error; this
    /// is the one input condition that is not coerced to an empty plan.
    pub fn from_json(json: &str) -> Result<Self, SynthesisError> {
        let raw: RawPageContext =
            serde_json::from_str(json).map_err(|source| SynthesisError::ContextParse {
                context: "page context".to_string(),
                source,
            })?;
        Ok(raw.into_context())
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements that carry a selector and may be targeted.
    pub fn actionable(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.elements.iter().filter(|e| e.is_actionable())
    }

    /// Descriptors flagged for missing a selector.
    pub fn unactionable(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.elements.iter().filter(|e| !e.is_actionable())
    }

    /// Actionable inputs of the given subtype, in element order.
    pub fn inputs_of(&self, subtype: InputSubtype) -> Vec<&ElementDescriptor> {
        self.actionable().filter(|e| e.is_subtype(&subtype)).collect()
    }

    pub fn selects(&self) -> Vec<&ElementDescriptor> {
        self.actionable()
            .filter(|e| e.kind == ElementKind::Select)
            .collect()
    }

    /// Inputs that are not `hidden`. Submit inputs are counted.
    pub fn non_hidden_inputs(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.elements.iter().filter(|e| {
            matches!(&e.kind, ElementKind::Input(subtype) if *subtype != InputSubtype::Hidden)
        })
    }

    /// Actionable submit-like controls in element order.
    pub fn submit_controls(&self) -> Vec<&ElementDescriptor> {
        self.actionable().filter(|e| is_submit_like(e)).collect()
    }

    pub fn has_submit_control(&self) -> bool {
        self.actionable().any(is_submit_like)
    }

    /// The control a form submission should go through.
    pub fn primary_submit(&self) -> Option<&ElementDescriptor> {
        let controls = self.submit_controls();
        controls
            .iter()
            .find(|c| {
                let label = c.label_text();
                PRIMARY_SUBMIT_KEYWORDS.iter().any(|k| label.contains(k))
            })
            .or(controls.first())
            .copied()
    }

    /// True when `selector` belongs to an element of this context.
    pub fn owns_selector(&self, selector: &str) -> bool {
        self.elements
            .iter()
            .any(|e| e.selector.as_deref() == Some(selector))
    }

    pub fn stats(&self) -> ContextStats {
        let mut stats = ContextStats {
            total: self.elements.len(),
            ..ContextStats::default()
        };

        for el in &self.elements {
            match &el.kind {
                ElementKind::Input(_) => stats.inputs += 1,
                ElementKind::Select => stats.selects += 1,
                ElementKind::Button => stats.buttons += 1,
            }
            if el.is_required() {
                stats.required += 1;
            }
            if el.is_actionable() {
                stats.actionable += 1;
            } else {
                stats.unactionable += 1;
            }
        }

        stats
    }
}

/// A control that submits its form: `input[type=submit]` or a button that is
/// not labelled as cancel/reset/back/close.
pub fn is_submit_like(el: &ElementDescriptor) -> bool {
    match &el.kind {
        ElementKind::Input(InputSubtype::Submit) => true,
        ElementKind::Button => {
            let label = el.label_text();
            !NON_SUBMIT_KEYWORDS.iter().any(|k| label.contains(k))
        }
        _ => false,
    }
}
