use action_synthesis::cli::commands::{cmd_patterns, cmd_recommend, cmd_synthesize};
use action_synthesis::cli::config::{Cli, Commands, build_limits, load_config};
use action_synthesis::trace::logger::TraceLogger;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());
    let tracer = match cli.trace.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Synthesize {
            context,
            format,
            output,
            max_checkboxes,
            max_radio_options,
            max_selects,
        } => {
            // CLI > config > defaults
            let limits = build_limits(
                &config.limits,
                max_checkboxes,
                max_radio_options,
                max_selects,
            );
            let format = format.unwrap_or_else(|| config.output.format.clone());
            let output = output.or_else(|| config.output.path.clone());
            cmd_synthesize(&context, &format, output.as_deref(), &limits, &tracer)?;
        }
        Commands::Recommend { context } => {
            cmd_recommend(&context, &config.limits)?;
        }
        Commands::Patterns => cmd_patterns(&config.limits),
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` count picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
