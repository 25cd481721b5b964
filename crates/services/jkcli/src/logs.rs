//! Console output rendering for the logs command.

use std::io::{self, Write};

/// Splits console output on the salt state separator and keeps the states
/// that report `Result: False`.
pub fn failed_salt_states(output: &str) -> Vec<&str> {
    output
        .split("----------")
        .filter(|state| state.contains("Result: False"))
        .collect()
}

/// Writes console output to `out`.
///
/// The console text is remote data and is written as data, never interpreted
/// as a format string. With `salt` set, only failed salt states are written,
/// one per line; otherwise the output is passed through byte for byte.
pub fn write_console<W: Write>(mut out: W, console: &str, salt: bool) -> io::Result<()> {
    if salt {
        for state in failed_salt_states(console) {
            writeln!(out, "{state}")?;
        }
    } else {
        out.write_all(console.as_bytes())?;
    }
    Ok(())
}
