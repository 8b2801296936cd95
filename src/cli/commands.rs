use std::sync::Arc;

use tracing::info;

use crate::context::page_context::PageContext;
use crate::pattern::catalog::PatternCatalog;
use crate::pattern::pattern_model::SynthesisLimits;
use crate::report::console::format_console_plan;
use crate::synthesis::coordinator::Synthesizer;
use crate::synthesis::error::SynthesisError;
use crate::synthesis::plan::SynthesisPlan;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// synthesize subcommand
// ============================================================================

pub fn cmd_synthesize(
    context_path: &str,
    format: &str,
    output: Option<&str>,
    limits: &SynthesisLimits,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let context = load_context(context_path)?;
    let synthesizer = Synthesizer::new(Arc::new(PatternCatalog::standard(limits)));

    let plan = synthesizer.synthesize(&context);
    let fingerprint = plan.fingerprint()?;
    info!(fingerprint = %fingerprint, "plan fingerprint");

    let stats = context.stats();
    tracer.log(
        &TraceEvent::now(context.url.as_deref())
            .with_elements(stats.total, stats.unactionable)
            .with_plan(&plan)
            .with_fingerprint(&fingerprint),
    );

    let rendered = render_plan(&plan, &context, format)?;

    match output {
        Some(path) => std::fs::write(path, &rendered).map_err(|source| SynthesisError::Io {
            path: path.to_string(),
            source,
        })?,
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Render a plan in the requested format.
pub fn render_plan(
    plan: &SynthesisPlan,
    context: &PageContext,
    format: &str,
) -> Result<String, SynthesisError> {
    match format {
        "console" => Ok(format_console_plan(plan, &context.stats())),
        "json" => plan.to_json().map(|mut s| {
            s.push('\n');
            s
        }),
        "yaml" => plan.to_yaml(),
        other => Err(SynthesisError::UnknownFormat(other.to_string())),
    }
}

// ============================================================================
// recommend subcommand
// ============================================================================

pub fn cmd_recommend(
    context_path: &str,
    limits: &SynthesisLimits,
) -> Result<(), Box<dyn std::error::Error>> {
    let context = load_context(context_path)?;
    let synthesizer = Synthesizer::new(Arc::new(PatternCatalog::standard(limits)));

    let lines = synthesizer.recommend(&context);
    if lines.is_empty() {
        println!("No testing recommendations for this page.");
    }
    for line in lines {
        println!("- {}", line);
    }

    Ok(())
}

// ============================================================================
// patterns subcommand
// ============================================================================

pub fn cmd_patterns(limits: &SynthesisLimits) {
    let catalog = PatternCatalog::standard(limits);
    for (i, name) in catalog.names().iter().enumerate() {
        println!("{:>2}. {}", i + 1, name);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read and parse a page context JSON file.
pub fn load_context(path: &str) -> Result<PageContext, SynthesisError> {
    let content = std::fs::read_to_string(path).map_err(|source| SynthesisError::Io {
        path: path.to_string(),
        source,
    })?;
    PageContext::from_json(&content)
}
