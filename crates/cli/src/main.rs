use clap::Parser;

use stockpulse_cli::{run, Cli};
use stockpulse_core::SystemClock;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stockpulse_observability::init_with(cli.log_format.into());

    let stdout = std::io::stdout();
    run(&cli, &SystemClock, &mut stdout.lock())
}
