use std::path::PathBuf;

use bidbook::{bid_book::BidTree, console};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Format;

#[derive(Parser, Debug)]
#[clap(name = "Bid book")]
struct Opts {
    /// Path to the monthly sales CSV file loaded by the "Load Bids" option
    #[clap(long, short, default_value = "eBid_Monthly_Sales_Dec_2016.csv")]
    csv_path: PathBuf,

    /// Bid id used by the "Find Bid" and "Remove Bid" options
    #[clap(long, short, default_value = "98129")]
    bid_key: String,

    /// Level of logging, options are trace, debug, info, warn, error
    #[clap(long, default_value = "info")]
    level: tracing::metadata::LevelFilter,

    /// Path to output file for logging
    #[clap(long, default_value = "output.log")]
    log_file_path: String,
}

fn main() -> eyre::Result<()> {
    let opts = Opts::parse();
    let _tracing_guard = initialize_tracing(&opts.log_file_path, opts.level)?;

    tracing::info!(
        "Starting bid book session for {}",
        opts.csv_path.display()
    );

    //One tree per session, owned here; every menu option operates on it
    let mut tree = BidTree::new();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run_menu(
        &mut tree,
        &opts.csv_path,
        &opts.bid_key,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    tracing::info!("Session ended with {} bids in the book", tree.len());

    Ok(())
}

fn initialize_tracing(
    file_path: &str,
    level: tracing::metadata::LevelFilter,
) -> eyre::Result<WorkerGuard> {
    //Log to a file rather than stdout, which belongs to the menu
    let file_appender = tracing_appender::rolling::never("log", file_path);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let format = Format::default()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_ansi(false)
        .with_level(true)
        .compact();

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .event_format(format)
        .with_writer(non_blocking)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}
