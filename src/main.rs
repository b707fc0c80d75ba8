// src/main.rs
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgMatches, CommandFactory};
use log::debug;
use words::args::Args;
use words::config::{Config, Input};
use words::presentation;
use words_core::error::WordsError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Args::command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => {
            debug!("stdout closed early: {err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            presentation::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = Config::from_matches(matches)?;
    let mut out = BufWriter::new(io::stdout().lock());

    match &config.input {
        Input::Stdin { implicit: true } if io::stdin().is_terminal() => {
            let help = Args::command().render_help().to_string();
            presentation::print_usage(&help)?;
        }
        Input::Stdin { .. } => {
            let summary = words_core::run_with_config(&config.pipeline, config.segmenter, io::stdin().lock(), &mut out)?;
            debug!("stdin: {summary:?}");
        }
        Input::File(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            let summary = words_core::run_with_config(&config.pipeline, config.segmenter, file, &mut out)?;
            debug!("{}: {summary:?}", path.display());
        }
    }

    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<WordsError>() {
        Some(err) => err.is_broken_pipe(),
        None => err
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe),
    }
}
