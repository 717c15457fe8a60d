//! A module for listing captures from the Wayback Machine
//! [CDX server](https://github.com/internetarchive/wayback/tree/master/wayback-cdx-server).

use std::collections::HashSet;

use serde::Deserialize;
use url::Url;

use crate::{
    config::{
        FetchOptions, CDX_API_URL, CDX_FIELDS, CDX_MATCH_TYPE, CDX_OUTPUT_FORMAT,
        RAW_CAPTURE_MODIFIER, SNAPSHOT_URL_PREFIX,
    },
    error::{Result, WaybackError},
};

/// One row of a CDX JSON response, cells in `fl` order.
pub type RawRow = Vec<String>;

/// The JSON output of the CDX server: a header row followed by data rows.
#[derive(Deserialize)]
struct CdxResponse(Vec<RawRow>);

/// A single capture of a URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Capture time as `YYYYMMDDHHMMSS`.
    pub timestamp: String,
    pub original: String,
    pub digest: String,
    pub length: String,
}

impl Snapshot {
    /// Returns the URL of the raw capture of `target_url` at this snapshot's
    /// timestamp.
    ///
    /// `target_url` is the URL that was queried, not [`Self::original`],
    /// which the CDX server may have normalized.
    #[must_use]
    pub fn archive_url(&self, target_url: &str) -> String {
        format!(
            "{}{}{}/{}",
            SNAPSHOT_URL_PREFIX, self.timestamp, RAW_CAPTURE_MODIFIER, target_url
        )
    }
}

impl TryFrom<RawRow> for Snapshot {
    type Error = WaybackError;

    fn try_from(row: RawRow) -> std::result::Result<Self, Self::Error> {
        let [timestamp, original, digest, length]: [String; 4] = row
            .try_into()
            .map_err(|row: RawRow| WaybackError::RowShape {
                len: row.len(),
                row,
            })?;
        Ok(Self {
            timestamp,
            original,
            digest,
            length,
        })
    }
}

/// Parses a CDX JSON response body into its rows, header row included.
///
/// # Errors
///
/// Fails if `body` is not a JSON array of arrays of strings.
pub fn parse_response(body: &str) -> Result<Vec<RawRow>> {
    let CdxResponse(rows) = serde_json::from_str(body)?;
    Ok(rows)
}

/// Converts the rows of one CDX response into snapshots, in response order.
///
/// The first row is the header and is skipped. Rows with the wrong number of
/// cells are logged and skipped. Digest deduplication only spans `rows`, so
/// each target URL starts with an empty set of seen digests.
pub fn snapshots(rows: Vec<RawRow>, options: &FetchOptions) -> Vec<Snapshot> {
    let mut seen_digests = HashSet::new();
    rows.into_iter()
        .skip(1)
        .filter_map(|row| match Snapshot::try_from(row) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("Skipping row: {}", e);
                None
            }
        })
        .filter(|snapshot| {
            !options.dedup_by_digest || seen_digests.insert(snapshot.digest.clone())
        })
        .collect()
}

/// Converts the rows of one CDX response into snapshot URLs for `target_url`.
pub fn snapshot_urls(target_url: &str, rows: Vec<RawRow>, options: &FetchOptions) -> Vec<String> {
    snapshots(rows, options)
        .iter()
        .map(|snapshot| snapshot.archive_url(target_url))
        .collect()
}

/// Client for a CDX server.
#[derive(Debug)]
pub struct SnapshotFetcher<'a> {
    endpoint: Url,
    client: &'a reqwest::Client,
}

impl<'a> SnapshotFetcher<'a> {
    /// Creates a fetcher for the public Wayback Machine CDX server.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in endpoint is not a valid URL.
    pub fn new(client: &'a reqwest::Client) -> Result<Self> {
        Ok(Self::with_endpoint(client, Url::parse(CDX_API_URL)?))
    }

    /// Creates a fetcher for a CDX-compatible server at `endpoint`.
    #[must_use]
    pub fn with_endpoint(client: &'a reqwest::Client, endpoint: Url) -> Self {
        Self { endpoint, client }
    }

    /// Returns the exact-match query URL for `target_url`.
    #[must_use]
    pub fn query_url(&self, target_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("url", target_url)
            .append_pair("matchType", CDX_MATCH_TYPE)
            .append_pair("output", CDX_OUTPUT_FORMAT)
            .append_pair("fl", &CDX_FIELDS.join(","));
        url
    }

    /// Lists the snapshot URLs of `target_url`, oldest first.
    ///
    /// An empty list means the URL has no captures.
    ///
    /// # Errors
    ///
    /// Fails if the request fails, the server answers with an error status,
    /// or the response is not CDX JSON.
    pub async fn fetch(&self, target_url: &str, options: &FetchOptions) -> Result<Vec<String>> {
        let url = self.query_url(target_url);
        log::debug!("Querying {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let rows = parse_response(&body)?;
        let urls = snapshot_urls(target_url, rows, options);
        log::debug!("Found {} snapshot(s) for {}", urls.len(), target_url);
        Ok(urls)
    }
}
