// CDX index constants
pub static CDX_API_URL: &str = "http://web.archive.org/cdx/search/cdx";
pub static CDX_MATCH_TYPE: &str = "exact";
pub static CDX_OUTPUT_FORMAT: &str = "json";
pub static CDX_FIELDS: [&str; 4] = ["timestamp", "original", "digest", "length"];

// Snapshot URL constants
pub static SNAPSHOT_URL_PREFIX: &str = "https://web.archive.org/web/";
/// Requests the raw capture without the Wayback Machine toolbar.
pub static RAW_CAPTURE_MODIFIER: &str = "if_";

/// Per-call fetch settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Drops captures whose content digest was already seen for the same
    /// target URL.
    pub dedup_by_digest: bool,
}
