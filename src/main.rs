use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use darts501::config::Config;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with board, rules, practice and compete settings.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every scoring field and its aim point.
    Board(cmd::board::BoardArgs),
    /// Practice and compete against a judge on stdin/stdout.
    Play(cmd::play::PlayArgs),
    /// Practice and compete against a simulated thrower.
    Simulate(cmd::simulate::SimulateArgs),
}

fn resolve_config(path: Option<&str>, cli_config: &Config, sub_matches: &ArgMatches) -> Config {
    let Some(path) = path else {
        return cli_config.clone();
    };

    info!("📂 Loading config from: {}", path);
    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        error!("❌ Failed to load config '{}': {}", path, e);
        process::exit(1);
    });
    config.merge_from_cli(cli_config, sub_matches);
    config
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // stdout belongs to the judge protocol in `play`, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("No subcommand given");
        process::exit(2);
    };

    let cli_config = match &cli.command {
        Commands::Board(args) => &args.config,
        Commands::Play(args) => &args.config,
        Commands::Simulate(args) => &args.config,
    };
    let config = resolve_config(cli.config.as_deref(), cli_config, sub_matches);

    let result = match cli.command {
        Commands::Board(args) => cmd::board::run(args, config),
        Commands::Play(args) => cmd::play::run(args, config),
        Commands::Simulate(args) => cmd::simulate::run(args, config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
