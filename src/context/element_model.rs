use serde::{Deserialize, Serialize};

// ============================================================================
// Typed descriptor for one detected interactive control
// ============================================================================

/// Semantic subtype of an `<input>` control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSubtype {
    Text,
    Email,
    Password,
    Tel,
    Url,
    Number,
    Date,
    Checkbox,
    Radio,
    Hidden,
    Submit,
    Search,
    Other(String),
}

impl InputSubtype {
    /// Map an HTML `type` attribute to a subtype. A missing type is `Text`.
    pub fn from_html(input_type: Option<&str>) -> Self {
        let Some(t) = input_type else {
            return InputSubtype::Text;
        };

        match t.trim().to_lowercase().as_str() {
            "" | "text" => InputSubtype::Text,
            "email" => InputSubtype::Email,
            "password" => InputSubtype::Password,
            "tel" => InputSubtype::Tel,
            "url" => InputSubtype::Url,
            "number" => InputSubtype::Number,
            "date" => InputSubtype::Date,
            "checkbox" => InputSubtype::Checkbox,
            "radio" => InputSubtype::Radio,
            "hidden" => InputSubtype::Hidden,
            "submit" => InputSubtype::Submit,
            "search" => InputSubtype::Search,
            other => InputSubtype::Other(other.to_string()),
        }
    }

    /// Subtypes whose value format a browser validates natively.
    pub fn has_format_semantics(&self) -> bool {
        matches!(
            self,
            InputSubtype::Email
                | InputSubtype::Url
                | InputSubtype::Tel
                | InputSubtype::Number
                | InputSubtype::Date
        )
    }

    /// Free-text subtypes that accept arbitrary typed payloads.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            InputSubtype::Text | InputSubtype::Email | InputSubtype::Search
        )
    }

    /// Subtypes that receive a `type` action rather than check/click.
    pub fn accepts_text(&self) -> bool {
        !matches!(
            self,
            InputSubtype::Checkbox
                | InputSubtype::Radio
                | InputSubtype::Hidden
                | InputSubtype::Submit
        )
    }
}

/// Shape of a detected control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "subtype", rename_all = "snake_case")]
pub enum ElementKind {
    Input(InputSubtype),
    Select,
    Button,
}

/// Declared validation constraints of a control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_pattern: Option<String>,
}

impl Constraints {
    /// Whether any declared constraint invites a validation probe.
    pub fn is_validation_relevant(&self) -> bool {
        self.is_required
            || self.min_length.is_some()
            || self.max_length.is_some()
            || self.validation_pattern.is_some()
    }
}

/// One detected interactive element, normalized from the extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_text: Option<String>,
    /// Handle used by the execution engine. Elements without one are never targeted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(default)]
    pub constraints: Constraints,
}

impl ElementDescriptor {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            name: None,
            aria_label: None,
            visible_text: None,
            selector: None,
            constraints: Constraints::default(),
        }
    }

    pub fn input(subtype: InputSubtype) -> Self {
        Self::new(ElementKind::Input(subtype))
    }

    pub fn select() -> Self {
        Self::new(ElementKind::Select)
    }

    pub fn button() -> Self {
        Self::new(ElementKind::Button)
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        let selector = selector.into();
        self.selector = if selector.trim().is_empty() {
            None
        } else {
            Some(selector)
        };
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.visible_text = Some(text.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.constraints.is_required = true;
        self
    }

    pub fn with_min_length(mut self, n: u32) -> Self {
        self.constraints.min_length = Some(n);
        self
    }

    pub fn with_max_length(mut self, n: u32) -> Self {
        self.constraints.max_length = Some(n);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.constraints.validation_pattern = Some(pattern.into());
        self
    }

    /// Input subtype, or `None` for selects and buttons.
    pub fn subtype(&self) -> Option<&InputSubtype> {
        match &self.kind {
            ElementKind::Input(subtype) => Some(subtype),
            _ => None,
        }
    }

    pub fn is_subtype(&self, subtype: &InputSubtype) -> bool {
        self.subtype() == Some(subtype)
    }

    pub fn is_actionable(&self) -> bool {
        self.selector.is_some()
    }

    pub fn is_required(&self) -> bool {
        self.constraints.is_required
    }

    /// Lowercased name, aria label and visible text joined for keyword heuristics.
    pub fn label_text(&self) -> String {
        [&self.name, &self.aria_label, &self.visible_text]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn name_lower(&self) -> String {
        self.name.as_deref().unwrap_or("").to_lowercase()
    }

    /// Best human-facing name for descriptions.
    pub fn display_name(&self) -> String {
        self.aria_label
            .as_deref()
            .or(self.visible_text.as_deref())
            .or(self.name.as_deref())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| self.selector.clone())
            .unwrap_or_else(|| "unnamed element".to_string())
    }

    /// Whether this element carries a trait worth probing with invalid input.
    pub fn has_validation_trait(&self) -> bool {
        match &self.kind {
            ElementKind::Input(subtype) => {
                self.constraints.is_validation_relevant() || subtype.has_format_semantics()
            }
            _ => false,
        }
    }
}
