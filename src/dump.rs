// SPDX-License-Identifier: FSL-1.1
use crate::Error;
use std::{fmt::Display, io::Write};

/// Writes each item on its own line into the sink
pub(crate) fn write_lines<W, I>(w: &mut W, items: I) -> Result<(), Error>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(w, "{item}")?;
    }
    w.flush()?;
    Ok(())
}

/// Writes each item to stdout on its own line
pub(crate) fn print_lines<I>(items: I) -> Result<(), Error>
where
    I: IntoIterator,
    I::Item: Display,
{
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_lines(&mut lock, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_lines() {
        let mut buf = Vec::default();
        write_lines(&mut buf, [1, 2, 3]).unwrap();
        assert_eq!("1\n2\n3\n".as_bytes().to_vec(), buf);
    }

    #[test]
    fn test_write_lines_sink_error() {
        let err = write_lines(&mut Broken, ["a"]).unwrap_err();
        assert!(matches!(err, Error::Dump(ref s) if s.contains("sink closed")));
    }
}
