use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

pub const DEFAULT_PROGRAM: &str = "charcount";

/// Wrong number of positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageError {
    pub received: usize,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected exactly 1 argument, got {}", self.received)
    }
}

impl std::error::Error for UsageError {}

/// Accepts exactly one input and hands it back by value.
///
/// # Errors
/// Returns [`UsageError`] when zero or more than one input was supplied.
pub fn validate(inputs: Vec<OsString>) -> Result<OsString, UsageError> {
    let received = inputs.len();
    match <[OsString; 1]>::try_from(inputs) {
        Ok([input]) => Ok(input),
        Err(_) => Err(UsageError { received }),
    }
}

/// File name of `argv[0]`, or the package name when it has none.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

pub fn usage_line(program: &str) -> String {
    format!("Usage: {program} '<input_text>'\n")
}
