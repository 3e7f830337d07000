use std::io::Read;

use clap::{Parser, ValueEnum};
use tracing::{debug, error, trace};

use ralph_harness::responder::MockResponder;

/// Deterministic stand-in for the agent CLI the orchestrator spawns
#[derive(Parser)]
#[command(name = "mock-claude")]
#[command(about = "Mock agent CLI emitting canned orchestrator signals", long_about = None)]
struct Cli {
    /// Prompt text; read from stdin when omitted
    prompt: Option<String>,

    /// Accepted for vendor-CLI compatibility; output always goes to stdout
    #[arg(short = 'p', long)]
    print: bool,

    /// Accepted for vendor-CLI compatibility; the mock never asks permission
    #[arg(long)]
    dangerously_skip_permissions: bool,

    /// Accepted for vendor-CLI compatibility; the mock has no model to pick
    #[arg(long)]
    model: Option<String>,

    /// Response encoding on stdout
    #[arg(long, value_enum, default_value = "text")]
    output_format: OutputFormat,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Narrative plus signal as plain text
    Text,
    /// Single-line JSON result envelope
    Json,
    /// Vendor streaming mode; the mock emits the same terminal envelope
    StreamJson,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Diagnostics go to stderr so stdout stays parseable for the caller.
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("mock-claude started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    trace!(
        "compat flags: print={} skip_permissions={} model={:?}",
        cli.print,
        cli.dangerously_skip_permissions,
        cli.model
    );

    let prompt = match cli.prompt {
        Some(prompt) => prompt,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let response = MockResponder::respond(&prompt);
    match cli.output_format {
        OutputFormat::Text => println!("{}", response.render_text()?),
        OutputFormat::Json | OutputFormat::StreamJson => {
            println!("{}", serde_json::to_string(&response.render_envelope()?)?);
        }
    }
    Ok(())
}
