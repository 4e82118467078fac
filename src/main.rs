use clap::{CommandFactory, Parser};
use dsync::config::{Cli, SyncOptions};

fn main() -> anyhow::Result<()> {
    // Invoked bare: print help and exit cleanly, like any first run would want
    if std::env::args().len() == 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();

    // Convert CLI args to SyncOptions - this validates immediately
    let options = SyncOptions::try_from(cli)?;

    dsync::commands::sync::run(&options)?;

    Ok(())
}
