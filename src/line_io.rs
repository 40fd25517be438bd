use std::io::{BufRead, Write};

use anyhow::Context;

/// Reads lines with the terminator stripped and nothing else. A '\r' before a '\n' stays part of
/// the line, so lines read back from chunk files equal the lines that were sorted and written,
/// and CRLF files keep their line endings.
#[derive(Debug)]
pub(crate) struct LineReader<R: BufRead> {
    reader: R,
    endl: u8,
    buf: Vec<u8>,
    lines: usize,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(reader: R, endl: u8) -> LineReader<R> {
        LineReader {
            reader,
            endl,
            buf: Vec::new(),
            lines: 0,
        }
    }

    pub(crate) fn next_line(&mut self) -> Result<Option<String>, anyhow::Error> {
        self.buf.clear();
        let bytes = self.reader.read_until(self.endl, &mut self.buf)?;
        if bytes == 0 {
            return Ok(None);
        }
        self.lines += 1;

        if self.buf.last() == Some(&self.endl) {
            self.buf.pop();
        }
        let line = std::str::from_utf8(&self.buf)
            .with_context(|| format!("line {} is not valid UTF-8", self.lines))?;
        Ok(Some(line.to_string()))
    }
}

pub(crate) fn write_line<W: Write>(writer: &mut W, line: &str, endl: u8) -> Result<(), std::io::Error> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(&[endl])
}

#[cfg(test)]
mod tests {
    use crate::line_io::{write_line, LineReader};

    fn read_all(input: &[u8], endl: u8) -> Result<Vec<String>, anyhow::Error> {
        let mut reader = LineReader::new(input, endl);
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    #[test]
    fn test_empty_input() -> Result<(), anyhow::Error> {
        assert!(read_all(b"", b'\n')?.is_empty());
        Ok(())
    }

    #[test]
    fn test_last_line_without_terminator() -> Result<(), anyhow::Error> {
        assert_eq!(read_all(b"a\nb", b'\n')?, vec!["a", "b"]);
        assert_eq!(read_all(b"a\nb\n", b'\n')?, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_empty_lines() -> Result<(), anyhow::Error> {
        assert_eq!(read_all(b"a\n\nb\n", b'\n')?, vec!["a", "", "b"]);
        Ok(())
    }

    #[test]
    fn test_carriage_return_is_content() -> Result<(), anyhow::Error> {
        assert_eq!(read_all(b"t\r\nu\r\r\n\r\nv\r", b'\n')?, vec!["t\r", "u\r\r", "\r", "v\r"]);
        Ok(())
    }

    #[test]
    fn test_custom_endl() -> Result<(), anyhow::Error> {
        assert_eq!(read_all(b"a\r;b\n;c", b';')?, vec!["a\r", "b\n", "c"]);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(read_all(b"ok\n\xff\xfe\n", b'\n').is_err());
    }

    #[test]
    fn test_write_line() -> Result<(), anyhow::Error> {
        let mut out = Vec::new();
        write_line(&mut out, "a", b'\n')?;
        write_line(&mut out, "", b'\n')?;
        assert_eq!(out, b"a\n\n");
        Ok(())
    }
}
