//! ScaleCalc-rs — Parallel scaling-law calculator and chart renderer.

use scalecalc_lib::{app, config, errors};

fn main() {
    // Parse CLI args first so --verbose can raise the log level
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code_for(&err));
    }
}
