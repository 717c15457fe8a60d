//! Prints the raw [Wayback Machine](https://web.archive.org) snapshot URLs of
//! URLs read from the command line, a file, or standard input.

#![warn(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

use std::{io::IsTerminal, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use url::Url;
use wayback_fetch::{
    cdx::SnapshotFetcher, config::FetchOptions, input::InputSource, output, ui::Ui,
    SnapshotLister,
};

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Prints the raw Wayback Machine snapshot URLs of one or more URLs."
)]
struct CliArgs {
    /// Fetches snapshots for a single URL.
    #[clap(short = 'u', long = "url", value_name = "URL")]
    url: Option<String>,
    /// File containing list of URLs to fetch snapshots for, one per line.
    #[clap(short = 'l', long = "list", value_name = "FILE")]
    list: Option<PathBuf>,
    /// Also writes the results to this file.
    #[clap(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
    /// Keeps only the first snapshot of each content digest.
    #[clap(short = 'd', long = "dedup")]
    dedup: bool,
    /// Only prints snapshot URLs.
    #[clap(long)]
    silent: bool,
    /// Shows trace messages, including HTTP connection data.
    #[clap(long)]
    trace: bool,
    /// Queries a different CDX server.
    #[clap(long, hide = true, value_name = "URL")]
    cdx_url: Option<Url>,
}

fn init_logging(args: &CliArgs) {
    let mut log_builder = if args.silent {
        // Silent mode does not read `RUST_LOG`, so nothing can re-enable
        // diagnostics.
        let mut log_builder = env_logger::Builder::new();
        log_builder.filter_level(log::LevelFilter::Off);
        log_builder
    } else {
        let default_log_level = if args.trace { "trace" } else { "info" };
        env_logger::Builder::from_env(Env::default().default_filter_or(default_log_level))
    };
    if args.trace && !args.silent {
        log_builder.filter_module("reqwest", log::LevelFilter::Trace);
    }
    log_builder.init();
}

async fn try_main(args: CliArgs, ui: Ui) -> Result<()> {
    let source = match InputSource::resolve(
        args.url.clone(),
        args.list.clone(),
        std::io::stdin().is_terminal(),
    ) {
        Some(source) => source,
        None => {
            ui.missing_input();
            return Ok(());
        }
    };

    let mut sink =
        output::result_sink(args.output.as_deref()).context("Error creating output file")?;
    let target_urls = source.target_urls().context("Error opening file")?;

    let http_client = reqwest::ClientBuilder::new()
        .connection_verbose(args.trace)
        .build()?;
    let fetcher = match args.cdx_url {
        Some(endpoint) => SnapshotFetcher::with_endpoint(&http_client, endpoint),
        None => SnapshotFetcher::new(&http_client)?,
    };
    let options = FetchOptions {
        dedup_by_digest: args.dedup,
    };

    SnapshotLister::new(&fetcher, &mut sink, options, ui)
        .list_all(target_urls)
        .await?;

    if let Some(path) = &args.output {
        ui.saved_to(path);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging(&args);

    let ui = Ui::new(args.silent);
    ui.banner();

    if let Err(e) = try_main(args, ui).await {
        ui.fatal(&e);
        std::process::exit(1);
    }
}
