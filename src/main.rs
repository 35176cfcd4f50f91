use clap::Parser;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log::LevelFilter;
use std::error::Error;
use std::io::{self, Write};
use subnet_calculator::config::Config;
use subnet_calculator::shell::{run_batch, run_interactive, Cli};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?);
    if !config.color {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout().lock();
    let failures = if cli.inputs.is_empty() {
        run_interactive(io::stdin().lock(), &config, &mut stdout)?
    } else {
        run_batch(&cli.inputs, &config, &mut stdout)?
    };

    log::info!("#End main() failures={failures}");
    if failures > 0 && !cli.inputs.is_empty() {
        stdout.flush()?;
        std::process::exit(1);
    }
    Ok(())
}

/// Use log4rs.yml when present, else warnings to stderr.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
