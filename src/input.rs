//! Sources of target URLs.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use crate::error::{Result, WaybackError};

/// Where the target URLs of a run come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// A single URL given on the command line.
    Url(String),
    /// A file with one URL per line.
    List(PathBuf),
    /// Standard input, one URL per line.
    Stdin,
}

impl InputSource {
    /// Picks the input source for a run.
    ///
    /// A single URL takes priority over a list file, which takes priority over
    /// standard input. Standard input is only used when it is not a terminal.
    /// Returns `None` when there is nothing to read.
    #[must_use]
    pub fn resolve(
        url: Option<String>,
        list: Option<PathBuf>,
        stdin_is_terminal: bool,
    ) -> Option<Self> {
        url.map(Self::Url)
            .or_else(|| list.map(Self::List))
            .or_else(|| (!stdin_is_terminal).then(|| Self::Stdin))
    }

    /// Opens the source and returns an iterator over its target URLs.
    ///
    /// # Errors
    ///
    /// Fails if the list file cannot be opened.
    pub fn target_urls(&self) -> Result<Box<dyn Iterator<Item = io::Result<String>>>> {
        match self {
            Self::Url(url) => Ok(Box::new(std::iter::once(Ok(url.clone())))),
            Self::List(path) => {
                let file = File::open(path).map_err(|e| WaybackError::file(path, e))?;
                Ok(Box::new(read_target_urls(BufReader::new(file))))
            }
            Self::Stdin => Ok(Box::new(read_target_urls(io::stdin().lock()))),
        }
    }
}

/// Reads one target URL per line.
///
/// Only the line terminator is removed; the rest of the line is passed on
/// as-is. Lines with nothing but whitespace are skipped.
pub fn read_target_urls<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => (!line.trim().is_empty()).then(|| Ok(line)),
        Err(e) => Some(Err(e)),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_resolve_prefers_url_over_list_and_stdin() {
        let source = InputSource::resolve(
            Some("http://ex.com/".into()),
            Some(PathBuf::from("urls.txt")),
            false,
        );
        assert_eq!(source, Some(InputSource::Url("http://ex.com/".into())));
    }

    #[test]
    fn test_resolve_prefers_list_over_stdin() {
        let source = InputSource::resolve(None, Some(PathBuf::from("urls.txt")), false);
        assert_eq!(source, Some(InputSource::List(PathBuf::from("urls.txt"))));
    }

    #[test]
    fn test_resolve_uses_stdin_only_when_not_a_terminal() {
        assert_eq!(
            InputSource::resolve(None, None, false),
            Some(InputSource::Stdin)
        );
        assert_eq!(InputSource::resolve(None, None, true), None);
    }

    #[test]
    fn test_read_target_urls_strips_line_endings_and_skips_blank_lines() {
        let reader = Cursor::new("http://a.com/\r\n\n   \nhttp://b.com/x\nhttp://c.com/");
        let urls = read_target_urls(reader)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(urls, vec!["http://a.com/", "http://b.com/x", "http://c.com/"]);
    }

    #[test]
    fn test_read_target_urls_keeps_whitespace_inside_line() {
        let reader = Cursor::new("http://a.com/x y\r\n  http://b.com/ \n");
        let urls = read_target_urls(reader)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(urls, vec!["http://a.com/x y", "  http://b.com/ "]);
    }

    #[test]
    fn test_target_urls_for_single_url_yields_it_once() {
        let urls = InputSource::Url("http://ex.com/".into())
            .target_urls()
            .unwrap()
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(urls, vec!["http://ex.com/"]);
    }

    #[test]
    fn test_target_urls_when_list_file_missing_returns_file_error() {
        let source = InputSource::List(PathBuf::from("does/not/exist/urls.txt"));
        assert!(matches!(
            source.target_urls(),
            Err(WaybackError::File { .. })
        ));
    }
}
