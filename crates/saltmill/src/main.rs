use std::io;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use saltmill::{run, usage_error, Cli, USAGE_EXIT_CODE};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SALTMILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("{}", usage_error(&err));
            process::exit(USAGE_EXIT_CODE);
        }
    };

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())?;
    Ok(())
}
