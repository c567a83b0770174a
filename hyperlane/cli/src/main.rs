mod announce;
mod config;
mod replay;

use {
    crate::{
        announce::{DigestCmd, ReplayIdCmd, SignCmd, VerifyCmd},
        config::Config,
        replay::ReplayCmd,
    },
    clap::Parser,
    config_parser::parse_config_with_prefix,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

/// Prefix of environment variables overriding the config file, e.g.
/// `HYPERLANE_VA__DOMAIN=1`.
const ENV_PREFIX: &str = "HYPERLANE_VA";

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Path to the config file [default: ./hyperlane-va.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the hash a validator must sign to announce a storage location
    Digest(DigestCmd),

    /// Sign an announcement with a validator key
    Sign(SignCmd),

    /// Check an announcement's signature against the claimed validator
    Verify(VerifyCmd),

    /// Print the replay id of a validator and storage location
    ReplayId(ReplayIdCmd),

    /// Apply a file of signed announcements to an in-memory registry
    Replay(ReplayCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Parse the config file. A missing file leaves every setting at its default.
    let config_file = cli
        .config
        .unwrap_or_else(|| PathBuf::from("hyperlane-va.toml"));
    let cfg: Config = parse_config_with_prefix(&config_file, ENV_PREFIX)?;

    // Set up tracing. Logs go to stderr so stdout carries only results.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(config_file = %config_file.display(), ?cfg, "Loaded config");

    match cli.command {
        Command::Digest(cmd) => cmd.run(&cfg),
        Command::Sign(cmd) => cmd.run(&cfg),
        Command::Verify(cmd) => cmd.run(&cfg),
        Command::ReplayId(cmd) => cmd.run(),
        Command::Replay(cmd) => cmd.run(&cfg),
    }
}
