use contribs::error::{ContribsError, Result};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter GitHub username: ";

/// Trims a username given on the command line or typed at the prompt.
pub fn normalize_username(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ContribsError::EmptyInput);
    }
    Ok(name.to_string())
}

/// Asks for a username on `output` and reads one line from `input`.
///
/// End of input cancels the run; Ctrl-C is handled by the CLI's signal
/// handler with the same outcome.
pub fn prompt_username<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {
            writeln!(output)?;
            Err(ContribsError::Cancelled)
        }
        Ok(_) => normalize_username(&line),
        Err(e) => Err(e.into()),
    }
}
