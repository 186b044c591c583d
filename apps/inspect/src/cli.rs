use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ida-inspect",
    version,
    about = "Check the verified_claims part of an Identity Assurance request and print its constraint tree"
)]
pub struct Cli {
    /// JSON file holding the request object, `-` for stdin.
    pub input: PathBuf,

    /// Member of the request object that holds verified_claims.
    #[arg(short, long)]
    pub key: Option<String>,

    /// Configuration file (TOML or JSON). Defaults to `inspect.*` in the working directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the constraint tree on a single line.
    #[arg(long)]
    pub compact: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
