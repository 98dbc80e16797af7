use std::io::{Result, Write};

/// Append-only text output with ordered writes
///
/// One logical record per call. The waypoint, profile and airspace emitters
/// only ever append whole lines, so this is the entire I/O surface of the
/// crate. Any `io::Write` works as a sink, including `Vec<u8>` in tests.
pub trait LineSink {
    /// Append `line` followed by a newline
    fn append_line(&mut self, line: &str) -> Result<()>;
}

impl<W: Write> LineSink for W {
    fn append_line(&mut self, line: &str) -> Result<()> {
        writeln!(self, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_newline_terminated() {
        let mut buffer = Vec::new();
        buffer.append_line("AC P").unwrap();
        buffer.append_line("AN Penalty Zone 1").unwrap();
        assert_eq!(buffer, b"AC P\nAN Penalty Zone 1\n");
    }
}
