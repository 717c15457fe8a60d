//! Human-readable status output.
//!
//! Everything here goes to stderr so that stdout only carries snapshot URLs.
//! Styles are dropped automatically when stderr is not a terminal.

use std::{fmt::Display, path::Path};

use console::style;

static NAME: &str = env!("CARGO_PKG_NAME");
static VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints banner and progress lines unless silenced.
#[derive(Clone, Copy, Debug)]
pub struct Ui {
    silent: bool,
}

impl Ui {
    #[must_use]
    pub fn new(silent: bool) -> Self {
        Self { silent }
    }

    fn print(&self, line: impl Display) {
        if !self.silent {
            eprintln!("{}", line);
        }
    }

    pub fn banner(&self) {
        self.print(style(NAME).for_stderr().cyan().bold());
        self.print(style(format!("v{}", VERSION)).for_stderr().yellow());
        self.print("");
    }

    pub fn fetching(&self, target_url: &str) {
        self.print(format_args!(
            "{} {}",
            style("Fetching snapshots for URL:").for_stderr().green(),
            target_url
        ));
    }

    pub fn no_snapshots(&self) {
        self.print(
            style("No snapshots found for the given URL.")
                .for_stderr()
                .red(),
        );
    }

    pub fn saved_to(&self, path: &Path) {
        self.print(format_args!(
            "\n{} {}",
            style("Results have been saved to:").for_stderr().green(),
            path.display()
        ));
    }

    pub fn missing_input(&self) {
        self.print(
            style("Please provide -u <URL> for a single URL, -l <file> for a list of URLs, or input via stdin")
                .for_stderr()
                .red(),
        );
    }

    /// Reports an error that ends the run.
    pub fn fatal(&self, error: &anyhow::Error) {
        self.print(format_args!(
            "{} {:#}",
            style("Error:").for_stderr().red(),
            error
        ));
    }
}
