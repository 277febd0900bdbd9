use std::env;
use std::error::Error;
use std::path::Path;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use fundamentals::config::{DemoConfig, OutputFormat};
use fundamentals::demo::{self, DemoReport};

// =============================================================================
// Logging
// =============================================================================

/// `RUST_LOG` wins over the configured level when both are present.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Output
// =============================================================================

fn print_text(report: &DemoReport) {
    for section in &report.sections {
        println!("\n{}", format!("== {} ==", section.structure).bold().cyan());
        for step in &section.steps {
            let outcome = if step.ok {
                step.outcome.green()
            } else {
                step.outcome.yellow()
            };
            println!("  {:<24} -> {}", step.operation, outcome);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    init_tracing(&config.log_level);

    let report = demo::run(&config);
    match config.output {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
