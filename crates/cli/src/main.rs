//! Experiment CLI
//!
//! Runs the driver with the reference configuration and prints its report
//! to stdout. Diagnostics go to stderr, filtered by `RUST_LOG`.

use clap::Parser as ClapParser;
use experiment_core::{DemoConfig, run};
use std::io;
use std::process;
use tracing::info;

#[derive(ClapParser)]
#[command(name = "experiment")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Sum an array, compute Fibonacci(10), update a point and compare the results",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("experiment=warn".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&mut out, &DemoConfig::default()) {
        Ok(summary) => {
            info!(
                total = summary.total,
                fibonacci = summary.fibonacci,
                "Run complete"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
