use std::env;

use anyhow::{bail, Context};
use tracing::info;

use munch_maze::app::App;
use munch_maze::config::SimConfig;
use munch_maze::logging;

/// Command-line overrides on top of the environment config.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    max_ticks: Option<u64>,
    fast: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ticks" | "-t" => {
                let value = args.next().context("--ticks needs a value")?;
                parsed.max_ticks = Some(value.parse().with_context(|| format!("invalid tick count {value:?}"))?);
            }
            "--fast" => parsed.fast = true,
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(parsed)
}

/// The main entry point of the simulation.
///
/// Loads the config, creates the game and runs the loop until the game ends
/// or the tick limit is reached.
pub fn main() -> anyhow::Result<()> {
    let args = parse_args(env::args().skip(1))?;
    logging::setup_logging().context("Could not initialize logging")?;

    let mut config = SimConfig::load().context("Could not load configuration")?;
    if args.max_ticks.is_some() {
        config.max_ticks = args.max_ticks;
    }
    if args.fast {
        config.realtime = false;
    }

    let mut app = App::new(&config).context("Could not create simulation")?;
    info!(loop_time = ?config.loop_time(), "Starting simulation loop");

    while app.run() {}
    app.report();
    Ok(())
}
