mod command;
mod config;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};

use config::Config;
use runner::ConsoleGame;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe as X against a minimax engine, or with a friend")]
struct Args {
    /// Path to the YAML config file (defaults to one next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write diagnostic logs to stderr
    #[arg(long)]
    verbose: bool,

    /// Search the full tree without alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,

    /// Prefer faster wins and slower losses
    #[arg(long)]
    depth_weighting: bool,

    #[arg(long)]
    show_evaluation: bool,

    /// Two people take turns at X and O without the engine
    #[arg(long)]
    two_players: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if self.no_pruning {
            config.search.pruning = false;
        }
        if self.depth_weighting {
            config.search.depth_weighting = true;
        }
        if self.show_evaluation {
            config.show_evaluation = true;
        }
        if self.two_players {
            config.two_players = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);
    let config_manager = config::get_config_manager(&config_path);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    log!("Config read from {}", config_path.display());
    args.apply_overrides(&mut config);
    log!(
        "Search settings: pruning={}, depth_weighting={}, two_players={}",
        config.search.pruning,
        config.search.depth_weighting,
        config.two_players
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = ConsoleGame::new(&config, stdin.lock(), stdout.lock()).run()?;

    log!(
        "Session finished: {} games, {} X wins, {} O wins, {} draws",
        summary.games(),
        summary.x_wins,
        summary.o_wins,
        summary.draws
    );

    Ok(())
}
