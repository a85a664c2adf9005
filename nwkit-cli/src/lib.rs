//! nwkit command line front end.
//!
//! # Usage
//!
//! ```text
//! create <path> <packageId> <projectName> [--runtime-dir <DIR>] [--template-dir <DIR>]
//! update <path> [--runtime-dir <DIR>]
//! ```
//!
//! Exit status follows sysexits: 0 ok, 64 usage or path conflict,
//! 66 project not found, 74 I/O failure, 78 bad settings file.
//! A successful run writes nothing to stderr.

pub mod commands;
pub mod logging;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use nwkit_core::ProjectError;
use nwkit_sync::lifecycle::{EX_IOERR, EX_USAGE};
use nwkit_sync::LifecycleError;

/// Configuration error (sysexits `EX_CONFIG`).
pub const EX_CONFIG: u8 = 78;

/// One binary's argument set and behaviour.
pub trait Invocation: Parser {
    /// `--help` was given somewhere on the command line.
    fn help_requested(&self) -> bool;

    fn run(self) -> anyhow::Result<()>;
}

/// Parse `argv`, run the command, and map the outcome to an exit status.
pub fn run<C: Invocation>(argv: impl IntoIterator<Item = OsString>) -> ExitCode {
    logging::init_tracing();

    let args = match C::try_parse_from(argv) {
        Ok(args) if !args.help_requested() => args,
        Ok(_) => return usage::<C>(None),
        Err(err) => return usage::<C>(Some(&err)),
    };

    match args.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Usage line, argument list, and the parse error if there was one.
fn usage<C: CommandFactory>(err: Option<&clap::Error>) -> ExitCode {
    let usage = C::command().render_usage();
    let mut args = C::command().help_template("{all-args}");
    eprintln!("{usage}\n\n{}", args.render_help());
    if let Some(err) = err {
        let rendered = err.to_string();
        if let Some(first) = rendered.lines().next() {
            eprintln!("\n{first}");
        }
    }
    ExitCode::from(EX_USAGE as u8)
}

fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(lifecycle) = err.downcast_ref::<LifecycleError>() {
        if matches!(
            lifecycle,
            LifecycleError::PathConflict { .. } | LifecycleError::NotFound { .. }
        ) {
            eprintln!("{lifecycle}");
        } else {
            eprintln!("error: {err:#}");
        }
        return ExitCode::from(u8::try_from(lifecycle.exit_code()).unwrap_or(1));
    }

    eprintln!("error: {err:#}");
    if err.downcast_ref::<ProjectError>().is_some() {
        return ExitCode::from(EX_CONFIG);
    }
    ExitCode::from(EX_IOERR as u8)
}
