//! Terminal twenty-one game.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use twentyone::{Game, GameOptions, StdinPrompt};

#[derive(Debug, Parser)]
#[clap(about = "Player vs Dealer twenty-one, one card per turn")]
struct Cli {
    /// Seed for the shuffle, to replay a game.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let options = GameOptions { seed: cli.seed };

    let mut game = Game::new(&options);
    if let Err(err) = game.run(&mut StdinPrompt, &mut io::stdout()) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
