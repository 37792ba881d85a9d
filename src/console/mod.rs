pub mod error;

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use crate::bid_book::{Bid, BidTree};
use crate::ingest;

use self::error::ConsoleError;

const MENU: &str = "\
Menu:
  1. Load Bids
  2. Display All Bids
  3. Find Bid
  4. Remove Bid
  9. Exit";

/// Write the one-line console rendering of a bid.
pub fn display_bid(output: &mut impl Write, bid: &Bid) -> std::io::Result<()> {
    writeln!(output, "{bid}")
}

/// Drive the interactive menu session over the given input and output
/// handles until the user exits or input ends.
///
/// Option 1 loads `csv_path` into the tree; options 3 and 4 operate on
/// `bid_key`. A load failure is reported on the console and the session
/// continues.
pub fn run_menu(
    tree: &mut BidTree,
    csv_path: &Path,
    bid_key: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), ConsoleError> {
    loop {
        writeln!(output, "{MENU}")?;
        write!(output, "Enter choice: ")?;
        output.flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            break;
        }

        match choice.trim() {
            "1" => load_bids(tree, csv_path, output)?,
            "2" => display_all(tree, output)?,
            "3" => find_bid(tree, bid_key, output)?,
            "4" => {
                tracing::info!("Removing bid {bid_key}");
                tree.remove(bid_key);
            }
            "9" => break,
            other => writeln!(output, "{other} is not a valid option")?,
        }
    }

    writeln!(output, "Good bye.")?;
    Ok(())
}

fn load_bids(
    tree: &mut BidTree,
    csv_path: &Path,
    output: &mut impl Write,
) -> Result<(), ConsoleError> {
    let started = Instant::now();
    match ingest::load_bids(csv_path, tree) {
        Ok(count) => {
            writeln!(output, "{count} bids read")?;
            writeln!(
                output,
                "time: {:.6} seconds",
                started.elapsed().as_secs_f64()
            )?;
        }
        Err(err) => {
            tracing::error!("Failed to load bids from {}: {err}", csv_path.display());
            writeln!(output, "Failed to load bids: {err}")?;
        }
    }
    Ok(())
}

fn display_all(tree: &BidTree, output: &mut impl Write) -> Result<(), ConsoleError> {
    let mut write_result = Ok(());
    tree.in_order(|bid| {
        if write_result.is_ok() {
            write_result = display_bid(output, bid);
        }
    });
    Ok(write_result?)
}

fn find_bid(tree: &BidTree, bid_key: &str, output: &mut impl Write) -> Result<(), ConsoleError> {
    let started = Instant::now();
    let found = tree.search(bid_key);
    let elapsed = started.elapsed();

    match found {
        Some(bid) => display_bid(output, bid)?,
        None => writeln!(output, "Bid Id {bid_key} not found.")?,
    }
    writeln!(output, "time: {:.6} seconds", elapsed.as_secs_f64())?;
    Ok(())
}
