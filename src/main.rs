mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::cli::{Cli, RunOptions};
use crate::config::Config;
use anyhow::Context;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match Cli::from_env() {
        Ok(Cli::Run(opts)) => exit_code(run(opts)),
        Ok(Cli::Help) => {
            print!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            eprintln!("Run `wrapsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(opts: RunOptions) -> anyhow::Result<()> {
    let (config_path, allow_missing) = match opts.config {
        Some(path) => (path, false),
        None => (Config::default_path()?, true),
    };
    let config = Config::load(&config_path, allow_missing).with_context(|| {
        format!(
            "failed to load configuration from {}",
            config_path.display()
        )
    })?;
    if let Some(log_file) = opts.log_file.as_deref().or(config.log.file.as_deref()) {
        init_logging(log_file, config.log.level)?;
    }
    log::info!(
        "Starting {} {}; configuration path is {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config_path.display()
    );
    let terminal = ratatui::try_init()
        .inspect_err(|_| ratatui::restore())
        .context("failed to initialize terminal")?;
    let r = App::new(config.speed, rand::rng()).run(terminal);
    ratatui::restore();
    r.context("error while running game")
}

fn init_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = fs_err::File::create(path)?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logger")
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wrapsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
