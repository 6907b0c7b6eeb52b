use anyhow::Result;
use clap::Parser;
use std::{io, path::PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};
use tracklist::{export, pager, process};

#[derive(Parser, Debug)]
#[command(author, version, about = "Page through a CSV of song metadata")]
struct Args {
    /// CSV file to load
    #[arg(env = "TRACKLIST_CSV", default_value = "taylor_discography.csv")]
    path: PathBuf,

    /// Songs shown per page
    #[arg(
        short,
        long,
        env = "TRACKLIST_PAGE_SIZE",
        default_value_t = 24,
        value_parser = clap::value_parser!(u16).range(1..=10000)
    )]
    page_size: u16,

    /// Write the loaded songs to this JSON file instead of paging
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout belongs to the pager, so logs go to stderr and stay quiet by default
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "startup");

    // ─── 2) load ─────────────────────────────────────────────────────
    println!("Loading songs from: {}", args.path.display());
    let records = process::load_records(&args.path)?;
    println!("Loaded {} songs.", records.len());

    if let Some(first) = records.first() {
        println!("Detected fields: {}", pager::format_field_names(first.names()));
    }

    // ─── 3) export or page ───────────────────────────────────────────
    if let Some(out) = &args.export {
        export::write_json(&records, out)?;
        println!("Wrote {} songs to {}", records.len(), out.display());
        return Ok(());
    }

    let page_size = usize::from(args.page_size);
    println!(
        "\nShowing songs 1..{} (page size = {})",
        page_size.min(records.len()),
        page_size
    );
    let outcome = pager::show_paginated(&records, page_size, io::stdin().lock(), io::stdout().lock())?;
    info!(?outcome, "pagination finished");

    Ok(())
}
