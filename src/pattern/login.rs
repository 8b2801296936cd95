use crate::action::action_model::{Action, AssertPredicate};
use crate::context::element_model::{ElementDescriptor, InputSubtype};
use crate::context::page_context::PageContext;
use crate::pattern::pattern_model::Pattern;
use crate::pattern::values::{INVALID_PASSWORD, INVALID_USERNAME, LOGIN_PASSWORD, LOGIN_USERNAME};

const LOGIN_SETTLE_MS: u64 = 1000;

/// Valid sign-in followed by a rejected sign-in.
pub struct LoginFormPattern;

/// Email input, or a text input whose label mentions user/email/login.
fn is_username_like(el: &ElementDescriptor) -> bool {
    match el.subtype() {
        Some(InputSubtype::Email) => true,
        Some(InputSubtype::Text) => {
            let label = el.label_text();
            label.contains("user") || label.contains("email") || label.contains("login")
        }
        _ => false,
    }
}

fn username_field(context: &PageContext) -> Option<&ElementDescriptor> {
    context.actionable().find(|e| is_username_like(e))
}

fn password_field(context: &PageContext) -> Option<&ElementDescriptor> {
    context
        .actionable()
        .find(|e| e.is_subtype(&InputSubtype::Password))
}

impl Pattern for LoginFormPattern {
    fn name(&self) -> &'static str {
        "login-form"
    }

    fn matches(&self, context: &PageContext) -> bool {
        username_field(context).is_some()
            && password_field(context).is_some()
            && context.has_submit_control()
    }

    fn candidates<'a>(&self, context: &'a PageContext) -> Vec<&'a ElementDescriptor> {
        [
            username_field(context),
            password_field(context),
            context.primary_submit(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn generate(&self, context: &PageContext, elements: &[&ElementDescriptor]) -> Vec<Action> {
        let username = elements.iter().copied().find(|e| is_username_like(e));
        let password = elements
            .iter()
            .copied()
            .find(|e| e.is_subtype(&InputSubtype::Password));
        let submit = context.primary_submit();

        let (Some(username), Some(password), Some(submit)) = (username, password, submit) else {
            return Vec::new();
        };

        let mut steps = Vec::new();

        // Happy path
        steps.extend(Action::type_text(
            username,
            LOGIN_USERNAME,
            format!("Enter valid username into '{}'", username.display_name()),
            0.85,
        ));
        steps.extend(Action::type_text(
            password,
            LOGIN_PASSWORD,
            format!("Enter valid password into '{}'", password.display_name()),
            0.85,
        ));
        steps.extend(Action::submit(submit, "Submit login form with valid credentials", 0.85));
        steps.push(Action::wait(LOGIN_SETTLE_MS, "Wait for sign-in to complete", 0.9));
        steps.extend(Action::assert(
            submit,
            AssertPredicate::Detached,
            "Verify login form is dismissed and a logout control is shown",
            0.6,
        ));

        // Negative path
        steps.extend(Action::type_text(
            username,
            INVALID_USERNAME,
            format!("Enter unknown username into '{}'", username.display_name()),
            0.85,
        ));
        steps.extend(Action::type_text(
            password,
            INVALID_PASSWORD,
            format!("Enter wrong password into '{}'", password.display_name()),
            0.85,
        ));
        steps.extend(Action::submit(submit, "Submit login form with invalid credentials", 0.85));
        steps.push(Action::wait(LOGIN_SETTLE_MS, "Wait for sign-in rejection", 0.9));
        steps.extend(Action::assert(
            submit,
            AssertPredicate::Error,
            "Verify invalid credentials are rejected with an error",
            0.8,
        ));

        steps
    }

    fn recommendation(&self, _context: &PageContext, _elements: &[&ElementDescriptor]) -> String {
        "Login form detected: test valid sign-in and rejection of invalid credentials".to_string()
    }
}
