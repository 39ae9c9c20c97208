use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use linkmap_cli::{DotOptions, LinksOptions, build_links, render_dot};
use linkmap_core::Result;

#[derive(Parser, Debug)]
#[command(
    name = "linkmap",
    about = "linkmap: see how the documentation links together",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract links from the docs page tree into a link table
    Links(LinksOptions),
    /// Render the link table as a DOT graph
    Dot(DotOptions),
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Links(opts) => {
            let catalog = build_links(&opts)?;
            if !catalog.collisions.is_empty() {
                eprintln!(
                    "warning: {} routes were claimed by more than one page",
                    catalog.collisions.len()
                );
            }
        }
        Command::Dot(opts) => {
            let output = render_dot(&opts)?;
            if let Some(ref path) = opts.output {
                std::fs::write(path, &output)?;
                tracing::info!(path = %path.display(), "output written");
            } else {
                print!("{output}");
            }
        }
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let status = match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    };

    tracing::info!(total_secs = total_start.elapsed().as_secs_f64(), "complete");
    status
}
