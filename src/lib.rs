//! Lists the raw [Wayback Machine](https://web.archive.org) captures of URLs.

use std::io::{self, Write};

use crate::{
    cdx::SnapshotFetcher,
    config::FetchOptions,
    error::{Result, WaybackError},
    output::Tee,
    ui::Ui,
};

pub mod cdx;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod ui;

/// Counts for one run over a list of target URLs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: usize,
    pub failed: usize,
    pub snapshots: usize,
}

/// Writes the snapshot URLs of target URLs to a sink, one target at a time.
pub struct SnapshotLister<'a, P, S> {
    fetcher: &'a SnapshotFetcher<'a>,
    sink: &'a mut Tee<P, S>,
    options: FetchOptions,
    ui: Ui,
}

impl<'a, P: Write, S: Write> SnapshotLister<'a, P, S> {
    pub fn new(
        fetcher: &'a SnapshotFetcher<'a>,
        sink: &'a mut Tee<P, S>,
        options: FetchOptions,
        ui: Ui,
    ) -> Self {
        Self {
            fetcher,
            sink,
            options,
            ui,
        }
    }

    /// Lists the snapshots of every target URL, strictly in input order.
    ///
    /// A target URL that cannot be fetched is logged and skipped. An error
    /// reading `target_urls` is logged and ends the run early.
    ///
    /// # Errors
    ///
    /// Fails if a snapshot URL cannot be written to the sink.
    pub async fn list_all<I>(&mut self, target_urls: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut summary = RunSummary::default();
        for target_url in target_urls {
            let target_url = match target_url {
                Ok(target_url) => target_url,
                Err(e) => {
                    log::error!("Error reading input: {}", e);
                    break;
                }
            };

            summary.targets += 1;
            match self.list(&target_url).await {
                Ok(count) => summary.snapshots += count,
                Err(e @ WaybackError::Output(_)) => return Err(e),
                Err(e) => {
                    log::error!("{}: {}", target_url, e);
                    summary.failed += 1;
                }
            }
        }

        log::debug!(
            "Listed {} snapshot(s) for {} URL(s), {} failed",
            summary.snapshots,
            summary.targets,
            summary.failed
        );
        Ok(summary)
    }

    /// Lists the snapshots of one target URL and returns how many were
    /// written.
    ///
    /// # Errors
    ///
    /// Fails if the CDX query fails or the sink cannot be written.
    pub async fn list(&mut self, target_url: &str) -> Result<usize> {
        self.ui.fetching(target_url);
        let urls = self.fetcher.fetch(target_url, &self.options).await?;
        if urls.is_empty() {
            self.ui.no_snapshots();
        }
        for url in &urls {
            self.sink.write_url(url)?;
        }
        Ok(urls.len())
    }
}
