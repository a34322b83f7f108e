// Run `cargo run --example basic_usage -- --help` to see the logging flags
// Run `cargo run --example basic_usage -- --debug --quiet` to try a combination

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, trace, warn};
use tracing_cli_adapter::{LogFlags, Logger, LoggerGenerator};

/// Prints one record per level through a logger configured from the command line.
#[derive(Debug, Parser)]
#[command(name = "basic_usage")]
struct Cli {
    #[command(flatten)]
    logging: LogFlags,

    /// Message to log
    #[arg(default_value = "hello")]
    message: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Configure the logger from the parsed flags and install it
    let generator = LoggerGenerator::from_flags(Logger::new(), cli.logging);
    generator.logger().init()?;

    trace!("{} from trace", cli.message);
    debug!("{} from debug", cli.message);
    info!("{} from info", cli.message);
    warn!("{} from warn", cli.message);
    error!("{} from error", cli.message);

    Ok(())
}
