use anyhow::Context;
use clap::Parser;
use ida::domain::config::InspectConfig;
use ida_inspect::{Cli, init_logger, load_config, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: InspectConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.log, cli.verbose)?;

    let rendered = run(&cli, &cfg)?;
    println!("{rendered}");

    Ok(())
}
