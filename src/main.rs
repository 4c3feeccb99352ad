// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tfsgit::cli::Cli;
use tfsgit::config::Config;
use tracing_subscriber::EnvFilter;

/// Default log directive for a verbosity level.
fn log_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "tfsgit=info",
        1 => "tfsgit=debug",
        _ => "tfsgit=trace",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Progress and diagnostics go to stdout; RUST_LOG directives still apply.
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(log_directive(config.verbosity).parse()?),
        )
        .init();
    log::debug!("Configuration resolved: {:?}", config);

    if !config.quiet {
        println!("Version {}", env!("CARGO_PKG_VERSION"));
        println!("Fetch {}", config.root_path);
        if let Some(pattern) = &config.match_pattern {
            println!("Match {}", pattern.as_str());
        }
    }

    match tfsgit::run(&config) {
        Ok(summary) => {
            if !config.quiet {
                log::info!(
                    "Done: {} directories created, {} files downloaded ({} bytes), {} entries skipped",
                    summary.directories_created,
                    summary.files_downloaded,
                    summary.bytes_downloaded,
                    summary.skipped
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
