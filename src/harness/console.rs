/*!
 * Console I/O
 *
 * Menu, mode input and result output. Generic over reader and writer so the
 * binary uses stdin/stdout while tests use in-memory buffers.
 */

use super::runner::RunReport;
use crate::core::errors::{HarnessError, HarnessResult};
use crate::dispatch::Mode;
use std::io::{self, BufRead, Write};

/// Print the mode menu
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Choose mode:")?;
    for mode in Mode::ALL {
        writeln!(out, "{} = {}", mode.number(), mode.label())?;
    }
    out.flush()
}

/// Read the first whitespace-delimited token and parse it as a mode
///
/// Blank lines are skipped and only the token's leading integer is used.
/// End of input counts as an invalid mode.
pub fn read_mode<R: BufRead>(input: &mut R) -> HarnessResult<Mode> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(HarnessError::invalid_mode(""));
        }
        if let Some(token) = line.split_whitespace().next() {
            return token.parse();
        }
    }
}

/// Print final counter and elapsed time
pub fn write_report<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Final counter = {}", report.counter)?;
    writeln!(out, "Elapsed time = {} seconds", report.elapsed_secs())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn test_menu_text() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Choose mode:\n\
             1 = safe_mutex\n\
             2 = mutex_deadlock\n\
             3 = scoped_lock\n\
             4 = logic_deadlock (no mutex)\n"
        );
    }

    #[test]
    fn test_read_mode_skips_blank_lines() {
        let mut input = Cursor::new("\n   \n  3  extra\n");
        assert_eq!(read_mode(&mut input).unwrap(), Mode::ScopedLock);
    }

    #[test]
    fn test_read_mode_takes_leading_integer() {
        let mut input = Cursor::new("3abc\n");
        assert_eq!(read_mode(&mut input).unwrap(), Mode::ScopedLock);
    }

    #[test]
    fn test_read_mode_non_numeric_is_invalid() {
        let mut input = Cursor::new("abc\n");
        match read_mode(&mut input) {
            Err(HarnessError::InvalidMode { input }) => assert_eq!(input, "abc"),
            other => panic!("expected InvalidMode, got {:?}", other),
        }
    }

    #[test]
    fn test_read_mode_eof_is_invalid() {
        let mut input = Cursor::new("");
        assert!(matches!(
            read_mode(&mut input),
            Err(HarnessError::InvalidMode { .. })
        ));
    }

    #[test]
    fn test_read_mode_rejects_out_of_range() {
        let mut input = Cursor::new("9\n");
        assert!(matches!(
            read_mode(&mut input),
            Err(HarnessError::InvalidMode { .. })
        ));
    }

    #[test]
    fn test_report_text() {
        let report = RunReport {
            mode: Mode::SafeMutex,
            counter: 2_000_000,
            overlaps: 0,
            elapsed: Duration::from_millis(1500),
        };
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nFinal counter = 2000000\nElapsed time = 1.5 seconds\n"
        );
    }
}
