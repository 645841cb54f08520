#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod args;
pub mod handlers;

use crate::args::{Cli, Command};

use anyhow::{Context, Result};
use clap::Parser;
use fmdash::domain::config::{ClientConfig, LoggingConfig};
use fmdash::kernel::config::load_config;
use fmdash_logger::{LevelFilter, Logger, parse_rotation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ClientConfig =
        load_config(cli.config.as_deref()).context("Configuration is malformed")?;
    let _logger = init_logging(&config.logging, cli.verbose)?;

    match cli.command {
        Command::Show => handlers::show(&config).await?,
        Command::Defaults => handlers::print_defaults(),
        Command::Visible { section } => handlers::visible(&config, &section).await?,
        Command::Check { section, item } => handlers::check(&config, &section, &item).await?,
        Command::Set { section, item, visible } => {
            handlers::set(&config, &section, &item, visible).await?;
        },
        Command::Reset => handlers::reset(&config).await?,
        Command::Export { output } => handlers::export(&config, output.as_deref()).await?,
        Command::Import { file, push } => handlers::import(&config, &file, push).await?,
        Command::Validate { file } => handlers::validate(&file)?,
    }

    Ok(())
}

/// Installs the subscriber described by `logging`; `None` when every output is off.
fn init_logging(logging: &LoggingConfig, verbose: bool) -> Result<Option<Logger>> {
    if !logging.console && logging.dir.is_none() {
        return Ok(None);
    }

    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        logging
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", logging.level))?
    };

    let mut builder = Logger::builder().name("fmdash").level(level).console(logging.console);
    if let Some(directives) = &logging.directives {
        builder = builder.directives(directives.as_str());
    }

    let logger = match &logging.dir {
        Some(dir) => {
            let mut builder = builder
                .path(dir)
                .rotation(parse_rotation(&logging.rotation)?)
                .max_files(logging.max_files);
            if logging.json {
                builder = builder.json();
            }
            builder.init()?
        },
        None => builder.init()?,
    };

    Ok(Some(logger))
}
