use std::io::Write;

use anyhow::{Context, Result};

use crate::{counter, formatters};

use super::validate::{self, usage_line};
use super::{Args, Outcome, Settings};

pub fn run_with_args<W: Write + ?Sized>(
    args: Args,
    program: &str,
    settings: &Settings,
    out: &mut W,
) -> Result<Outcome> {
    if settings.verbose {
        eprintln!("Received {} argument(s)", args.inputs.len());
    }

    let input = match validate::validate(args.inputs) {
        Ok(input) => input,
        Err(err) => {
            if settings.verbose {
                eprintln!("Usage error: {err}");
            }
            out.write_all(usage_line(program).as_bytes())
                .context("write usage")?;
            out.flush().context("flush stdout")?;
            return Ok(Outcome::Usage);
        }
    };

    let counted = counter::measure(&input);
    if settings.verbose {
        eprintln!("Counted {counted} code unit(s)");
    }

    out.write_all(formatters::text::format(&counted).as_bytes())
        .context("write character count")?;
    out.flush().context("flush stdout")?;
    Ok(Outcome::Counted(counted))
}
