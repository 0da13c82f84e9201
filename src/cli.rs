use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use crate::types::CharCount;

mod run_impl;
pub mod validate;

/// Every token on the command line is data, `--` included. [`run_from`]
/// places an escape ahead of the user's tokens so clap never consumes one as
/// an end-of-options marker. Arity is checked by [`validate::validate`], not
/// by clap.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "charcount",
    about = "Print the character count of a single argument",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Text to measure (exactly one is expected)
    #[arg(
        value_name = "INPUT_TEXT",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub inputs: Vec<OsString>,
}

/// How a run ended when no I/O error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Counted(CharCount),
    Usage,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Counted(_) => 0,
            Outcome::Usage => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Report diagnostics on stderr
    pub verbose: bool,
}

impl Settings {
    pub const DEBUG_ENV: &'static str = "CHARCOUNT_DEBUG";

    /// Reads `CHARCOUNT_DEBUG`. Flags are not an option here since they would
    /// change the argument count.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var_os(Self::DEBUG_ENV).as_deref())
    }

    fn from_value(value: Option<&OsStr>) -> Self {
        let verbose = value.and_then(OsStr::to_str).is_some_and(|v| {
            matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        });
        Settings { verbose }
    }
}

/// Runs the CLI against the real process arguments and stdout.
///
/// # Errors
/// Returns an error if argument parsing or writing to stdout fails.
pub fn run() -> Result<Outcome> {
    let settings = Settings::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_from(std::env::args_os(), &settings, &mut out)
}

/// Runs the CLI against an explicit argv (program name first) and writer.
///
/// # Errors
/// Returns an error if argument parsing or writing to `out` fails.
pub fn run_from<I, T, W>(argv: I, settings: &Settings, out: &mut W) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write + ?Sized,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = validate::program_name(argv.first().map(OsString::as_os_str));
    let args = Args::try_parse_from(escaped_argv(&argv))?;
    run_impl::run_with_args(args, &program, settings, out)
}

/// Program name, then `--`, then the user's tokens untouched. Once clap has
/// seen the escape, any later `--` is a plain value.
fn escaped_argv(argv: &[OsString]) -> Vec<OsString> {
    let (bin, rest) = match argv.split_first() {
        Some((bin, rest)) => (bin.clone(), rest),
        None => (OsString::from(validate::DEFAULT_PROGRAM), &[][..]),
    };
    let mut escaped = Vec::with_capacity(rest.len() + 2);
    escaped.push(bin);
    escaped.push(OsString::from("--"));
    escaped.extend_from_slice(rest);
    escaped
}
