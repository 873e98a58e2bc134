use std::io::Write;

use crate::conversion::ConversionResult;

/// Writes one line per result.
pub fn present<W: Write>(
    results: &[ConversionResult],
    out: &mut W,
    colorize: bool,
) -> std::io::Result<()> {
    for result in results {
        if colorize {
            writeln!(out, "{}", result.colored())?;
        } else {
            writeln!(out, "{}", result)?;
        }
    }
    out.flush()
}
