use crate::context::element_model::{ElementDescriptor, ElementKind, InputSubtype};

// ============================================================================
// Deterministic test values: valid fills and adversarial payloads
// ============================================================================

pub const SQL_INJECTION_PAYLOAD: &str = "' OR '1'='1' --";
pub const XSS_PAYLOAD: &str = "<script>alert('xss')</script>";

pub const VALID_EMAIL: &str = "test.user@example.com";
pub const VALID_PASSWORD: &str = "SecurePass123!";
pub const VALID_PHONE: &str = "+14155552671";
pub const VALID_URL: &str = "https://example.com";
pub const VALID_NUMBER: &str = "42";
pub const VALID_DATE: &str = "1990-06-15";
pub const VALID_NAME: &str = "John Doe";
pub const VALID_TEXT: &str = "Test input";

pub const LOGIN_USERNAME: &str = "testuser@example.com";
pub const LOGIN_PASSWORD: &str = "TestPass123!";
pub const INVALID_USERNAME: &str = "invalid@example.com";
pub const INVALID_PASSWORD: &str = "wrongpassword";

pub const SEARCH_QUERY: &str = "test query";

/// Whether the element's name or label suggests a phone number.
pub fn is_phone_like(el: &ElementDescriptor) -> bool {
    el.is_subtype(&InputSubtype::Tel) || el.name_lower().contains("phone")
}

/// Whether the element's name or label suggests a URL.
pub fn is_url_like(el: &ElementDescriptor) -> bool {
    if el.is_subtype(&InputSubtype::Url) {
        return true;
    }
    let name = el.name_lower();
    name.contains("website") || name.contains("url") || name.contains("homepage")
}

/// A person-name field. Usernames are excluded: they commonly allow digits.
pub fn is_name_like(el: &ElementDescriptor) -> bool {
    let name = el.name_lower();
    el.is_subtype(&InputSubtype::Text) && name.contains("name") && !name.contains("user")
}

/// Valid value for a field, chosen by subtype first and then name heuristics.
///
/// Returns `None` for controls that are not filled by typing.
pub fn valid_value(el: &ElementDescriptor) -> Option<String> {
    let subtype = match &el.kind {
        ElementKind::Input(subtype) if subtype.accepts_text() => subtype,
        _ => return None,
    };

    let value = match subtype {
        InputSubtype::Email => VALID_EMAIL,
        InputSubtype::Password => VALID_PASSWORD,
        InputSubtype::Tel => VALID_PHONE,
        InputSubtype::Url => VALID_URL,
        InputSubtype::Number => VALID_NUMBER,
        InputSubtype::Date => VALID_DATE,
        _ => {
            let label = el.label_text();
            if label.contains("email") {
                VALID_EMAIL
            } else if label.contains("phone") {
                VALID_PHONE
            } else if is_url_like(el) {
                VALID_URL
            } else if label.contains("name") {
                VALID_NAME
            } else {
                VALID_TEXT
            }
        }
    };

    Some(value.to_string())
}

/// Longest value a length-boundary probe will type.
pub const FILLER_CEILING: u32 = 4096;

/// A string of `len` filler characters, at most `FILLER_CEILING` long.
pub fn filler(len: u32) -> String {
    "a".repeat(len.min(FILLER_CEILING) as usize)
}
