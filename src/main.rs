mod analysis;
mod cli;
mod report;

use analysis::run_command;
use clap::Parser;
use cli::Cli;
use report::render_summary;
use std::error::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    // Install the log subscriber first. Logs go to stderr so the report on
    // stdout can be piped; `RUST_LOG` overrides the default level.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "aerotools=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse the command and its slice-file layout from the arguments.
    let cli = Cli::parse();

    // Integrate the pressure distributions. Each section is reduced to lift,
    // drag and moment coefficients with the trapezoidal rule, see
    // https://en.wikipedia.org/wiki/Pressure_coefficient and
    // https://en.wikipedia.org/wiki/Trapezoidal_rule.
    let summary = run_command(&cli.command)?;

    // Render the coefficients as a short text report on standard output.
    let report = render_summary(&summary);
    println!("{report}");

    Ok(())
}
