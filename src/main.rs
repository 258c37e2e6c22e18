use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use log::debug;

use most_active_cookie::{aggregator, parse_args, Config};

fn main() -> ExitCode {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    match run(&config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, output: &mut dyn Write) -> Result<()> {
    debug!(
        "searching {} for {} ({:?})",
        config.file.display(),
        config.date,
        config.scan_mode
    );
    aggregator::process_file(&config.file, config.date, config.scan_mode, output)?;
    Ok(())
}
