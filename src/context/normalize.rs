use serde::Deserialize;
use tracing::warn;

use crate::context::element_model::{Constraints, ElementDescriptor, ElementKind, InputSubtype};
use crate::context::page_context::PageContext;

// ============================================================================
// Upstream wire format (extraction output) and its normalization
// ============================================================================

/// Page snapshot as emitted by the element-extraction collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPageContext {
    #[serde(default)]
    pub url: Option<String>,
    pub elements: Vec<RawElement>,
}

/// One element as emitted upstream: a flat bag of optional fields.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    /// "input", "select", "button" (also accepts "textarea" and "a").
    pub r#type: String,
    #[serde(rename = "inputType", default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "ariaLabel", default)]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "minLength", default)]
    pub min_length: Option<u32>,
    #[serde(rename = "maxLength", default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub pattern: Option<String>,
}

impl RawPageContext {
    /// Normalize every element. Elements of unknown shape are dropped with a
    /// warning; elements without a selector are kept but flagged.
    pub fn into_context(self) -> PageContext {
        let elements: Vec<ElementDescriptor> = self
            .elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let normalized = normalize_element(raw);
                if normalized.is_none() {
                    warn!(index, "dropping element of unknown kind");
                }
                normalized
            })
            .collect();

        for (index, el) in elements.iter().enumerate() {
            if !el.is_actionable() {
                warn!(
                    index,
                    element = %el.display_name(),
                    "element has no selector; excluded from targeting"
                );
            }
        }

        PageContext {
            url: self.url,
            elements,
        }
    }
}

/// Convert one raw element into a typed descriptor.
pub fn normalize_element(raw: RawElement) -> Option<ElementDescriptor> {
    let kind = match raw.r#type.trim().to_lowercase().as_str() {
        "input" | "textarea" => {
            ElementKind::Input(InputSubtype::from_html(raw.input_type.as_deref()))
        }
        "select" => ElementKind::Select,
        "button" | "a" => ElementKind::Button,
        _ => return None,
    };

    Some(ElementDescriptor {
        kind,
        name: non_empty(raw.name),
        aria_label: non_empty(raw.aria_label),
        visible_text: non_empty(raw.text),
        selector: non_empty(raw.selector),
        constraints: Constraints {
            is_required: raw.required,
            min_length: raw.min_length,
            max_length: raw.max_length,
            validation_pattern: non_empty(raw.pattern),
        },
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
