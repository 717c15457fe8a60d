//! Result sinks.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::error::{Result, WaybackError};

/// Writes everything to a primary sink and, when present, duplicates it to a
/// secondary one.
#[derive(Debug)]
pub struct Tee<P, S> {
    primary: P,
    secondary: Option<S>,
}

impl<P: Write, S: Write> Tee<P, S> {
    pub fn new(primary: P, secondary: Option<S>) -> Self {
        Self { primary, secondary }
    }

    /// Returns the sinks.
    pub fn into_inner(self) -> (P, Option<S>) {
        (self.primary, self.secondary)
    }

    /// Writes `url` as one line and flushes it to every sink.
    ///
    /// # Errors
    ///
    /// Fails if writing to either sink fails.
    pub fn write_url(&mut self, url: &str) -> io::Result<()> {
        writeln!(self, "{}", url)?;
        self.flush()
    }
}

impl<P: Write, S: Write> Write for Tee<P, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        if let Some(secondary) = &mut self.secondary {
            secondary.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        if let Some(secondary) = &mut self.secondary {
            secondary.flush()?;
        }
        Ok(())
    }
}

/// Result sink of the CLI: stdout, plus the output file when one is given.
pub type ResultSink = Tee<io::Stdout, BufWriter<File>>;

/// Creates the CLI result sink, truncating `output_path` if it exists.
///
/// # Errors
///
/// Fails if the output file cannot be created.
pub fn result_sink(output_path: Option<&Path>) -> Result<ResultSink> {
    let file = output_path
        .map(|path| {
            File::create(path)
                .map(BufWriter::new)
                .map_err(|e| WaybackError::file(path, e))
        })
        .transpose()?;
    Ok(Tee::new(io::stdout(), file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tee_without_secondary_writes_primary_only() {
        let mut tee: Tee<Vec<u8>, Vec<u8>> = Tee::new(Vec::new(), None);
        tee.write_url("https://web.archive.org/web/20200101000000if_/http://ex.com/")
            .unwrap();
        assert_eq!(
            String::from_utf8(tee.primary).unwrap(),
            "https://web.archive.org/web/20200101000000if_/http://ex.com/\n"
        );
        assert!(tee.secondary.is_none());
    }

    #[test]
    fn test_tee_with_secondary_duplicates_every_line() {
        let mut tee = Tee::new(Vec::new(), Some(Vec::new()));
        tee.write_url("a").unwrap();
        tee.write_url("b").unwrap();
        assert_eq!(tee.primary, b"a\nb\n");
        assert_eq!(tee.secondary.unwrap(), b"a\nb\n");
    }

    #[test]
    fn test_result_sink_when_output_dir_missing_returns_file_error() {
        let result = result_sink(Some(Path::new("does/not/exist/out.txt")));
        assert!(matches!(result, Err(WaybackError::File { .. })));
    }
}
