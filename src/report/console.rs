use crate::action::action_model::{Action, ActionKind};
use crate::context::page_context::ContextStats;
use crate::synthesis::plan::SynthesisPlan;

// ============================================================================
// Console reporter: formatted terminal summary of a synthesis plan
// ============================================================================

/// Format a plan for terminal output.
///
/// Produces output like:
/// ```text
/// === Synthesis Plan: https://example.com/login ===
/// Elements: 3 (3 actionable, 0 without selector, 1 required)
///
/// [login-form] 10 actions
///     1. type    #email = "testuser@example.com" (0.85)  Enter valid username into 'Email'
///     ...
///
/// === Total: 10 actions from 1 pattern(s) ===
/// ```
pub fn format_console_plan(plan: &SynthesisPlan, stats: &ContextStats) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Synthesis Plan: {} ===\n",
        plan.url.as_deref().unwrap_or("(no url)")
    ));
    out.push_str(&format!(
        "Elements: {} ({} actionable, {} without selector, {} required)\n\n",
        stats.total, stats.actionable, stats.unactionable, stats.required
    ));

    if plan.contributions.is_empty() {
        out.push_str("No applicable patterns.\n");
    }

    for contribution in &plan.contributions {
        out.push_str(&format!(
            "[{}] {} actions\n",
            contribution.pattern,
            contribution.actions.len()
        ));
        for (i, action) in contribution.actions.iter().enumerate() {
            out.push_str(&format!("    {:>2}. {}\n", i + 1, format_action(action)));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "=== Total: {} actions from {} pattern(s) ===\n",
        plan.action_count(),
        plan.contributions.len()
    ));

    out
}

/// One-line rendering of an action.
pub fn format_action(action: &Action) -> String {
    let target = action.target.as_deref().unwrap_or("-");
    let value = match (&action.kind, &action.value) {
        (ActionKind::Wait, Some(ms)) => format!(" {}ms", ms),
        (ActionKind::Assert, Some(predicate)) => format!(" [{}]", predicate),
        (_, Some(v)) => format!(" = {:?}", truncate(v, 40)),
        (_, None) => String::new(),
    };

    format!(
        "{:<7} {}{} ({:.2})  {}",
        action.kind.to_string(),
        target,
        value,
        action.confidence,
        action.description
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
