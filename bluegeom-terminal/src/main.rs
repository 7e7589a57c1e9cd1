/// bluegeom terminal demo - a point travelling to its destination
///
/// Controls:
///   - WASD / Arrow Keys: Move the destination in x and y
///   - E/F: Move the destination in z
///   - Space: Pause
///   - R: Restart the trip
///   - Q/ESC: Quit
///
/// Diagnostics go to stderr; enable them with `RUST_LOG=debug`.
use bluegeom_core::DualMode;
use bluegeom_terminal::{DemoConfig, TerminalApp};
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> io::Result<()> {
    // Initialize logging, silent unless RUST_LOG is set
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let config = DemoConfig::parse();
    tracing::info!(
        source = %config.source,
        destination = %config.destination,
        step = config.step,
        "starting"
    );

    println!("Moving {} to {} (press Q to quit)...", config.source, config.destination);
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    let animation = app.animation();
    if animation.arrived() {
        println!("Arrived at {}", animation.position().to_frozen());
    } else {
        println!("Stopped at {}", animation.position().to_frozen());
    }
    Ok(())
}
