// ABOUTME: Entry point for the cutter CLI application.
// ABOUTME: Parses arguments, sets up logging and maps errors to exit codes.

mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use commands::PrepareRequest;
use cutter::error::{Error, Result};
use cutter::output::Output;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output_mode());
    let result = run(cli).await;

    if let Err(e) = result {
        report(&output, &e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let output = Output::new(cli.output_mode());
    let repo_root = match cli.repo {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    match cli.command {
        Some(Commands::Init {
            product,
            owner,
            force,
        }) => commands::init(
            &repo_root,
            product.as_deref(),
            owner.as_deref(),
            force,
            &output,
        ),
        None => {
            let args = cli.release;
            let request = PrepareRequest {
                channel: args.channel,
                mode: args.mode(),
                is_beta: !args.stable,
                branch: args.branch,
                automatic: args.automatic_release,
                repo_root,
                config_path: cli.config,
            };
            commands::prepare(request, output).await
        }
    }
}

fn report(output: &Output, error: &Error) {
    if error.is_expected() {
        output.aborted(&error.to_string());
    } else {
        output.error(&error.to_string());
    }

    if error.exit_code() == 2 {
        eprintln!("\n{}", Cli::command().render_usage());
    }
}
