use std::io::IsTerminal;

use clap::Parser;
use primaze::{
    app::App,
    config::{Args, Config},
    logging,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut stdout = std::io::stdout();
    let config = Config::from_args(args, stdout.is_terminal());

    // Held until exit so the file writer flushes
    let _log_guard = logging::init(&config)?;

    App::new(config).run(&mut stdout)?;
    Ok(())
}
