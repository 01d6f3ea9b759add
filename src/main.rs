//! Entry point: wires CLI → rewriter → delegate.
//!
//! This is the thin orchestrator that connects the pipeline stages. It
//! installs error reporting and logging, picks the run mode, and turns the
//! outcome into the process exit code.

mod cli;
mod config;
mod converter;
mod delegate;
mod error;
mod pipe;
mod resolver;
mod rewriter;

use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::process;

use color_eyre::config::{HookBuilder, Theme};
use color_eyre::eyre::Report;
use log::debug;

use crate::cli::{Invocation, PROGRAM};
use crate::config::Config;
use crate::converter::Converter;
use crate::delegate::Delegate;
use crate::error::Error;
use crate::pipe::{PipeOutcome, RealStdin};
use crate::rewriter::Rewriter;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(report) => {
            report_error(&report);
            delegate::FAILURE_CODE
        }
    };

    // Everything `run` owned, including staged temp files, is dropped by now.
    process::exit(code);
}

/// Runs one invocation and returns the exit code to terminate with.
fn run() -> color_eyre::Result<i32> {
    install_error_hooks()?;

    let config = Config::from_env();
    init_logging(&config)?;

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    // Built once; every conversion in this run shares it.
    let converter = Converter::new();

    match Invocation::classify(&args) {
        Invocation::Version => {
            println!("{}", cli::version_line());
            return Ok(0);
        }
        Invocation::NoArgs => {
            let outcome = pipe::pipe(&RealStdin, &mut io::stdout().lock(), &converter)?;
            if outcome == PipeOutcome::Converted {
                return Ok(0);
            }
            debug!("stdin is not piped; forwarding an empty command line");
        }
        Invocation::Forward => {}
    }

    let mut rewritten = Rewriter::new(&converter)
        .temp_dir(&config.temp_dir)
        .rewrite(&args)?;
    if config.keep_temp {
        let kept = rewritten.keep_artifacts()?;
        debug!("keeping {} temp file(s)", kept.len());
    } else {
        let staged = rewritten.artifact_paths().count();
        debug!("{staged} temp file(s) will be removed once {} exits", config.delegate);
    }

    let delegate = Delegate::locate(&config.delegate)?;
    let status = delegate.run(&rewritten.args)?;
    debug!("{} exited with {status}", delegate.path().display());

    Ok(delegate::exit_code(status))
}

/// Panic reports without location or env sections; colors only when
/// stderr is a terminal.
fn install_error_hooks() -> color_eyre::Result<()> {
    let theme = if io::stderr().is_terminal() {
        Theme::dark()
    } else {
        Theme::new()
    };

    HookBuilder::default()
        .theme(theme)
        .display_env_section(false)
        .display_location_section(false)
        .install()
}

fn init_logging(config: &Config) -> color_eyre::Result<()> {
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .format_target(false)
        .try_init()?;
    Ok(())
}

/// One line per failure: the full cause chain after the prefix, then the
/// install hint when fizzy is missing. No backtrace or span trace sections.
fn report_error(report: &Report) {
    eprintln!("{PROGRAM} error: {report:#}");
    if let Some(Error::DelegateNotFound { install_hint, .. }) = report.downcast_ref::<Error>() {
        eprintln!("{install_hint}");
    }
}
