//! Text payloads from arguments or stdin

use std::io::{self, IsTerminal, Read};
use txm_core::{Error, Result};

/// Get the text payload from an argument, falling back to piped stdin
pub fn read_text(argument: Option<String>) -> Result<String> {
    if argument.is_none() && io::stdin().is_terminal() {
        return Err(Error::InvalidInput(
            "No text given: pass TEXT as an argument or pipe it on stdin".to_string(),
        ));
    }
    read_text_from(argument, io::stdin().lock())
}

/// Same as [`read_text`] with an explicit reader.
///
/// One trailing line break is dropped from read input, since shells and
/// `echo` append one.
pub fn read_text_from<R: Read>(argument: Option<String>, mut reader: R) -> Result<String> {
    if let Some(text) = argument {
        return Ok(text);
    }

    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
