pub mod error;

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::bid_book::{Bid, BidTree};

use self::error::IngestError;

// Column layout of the eBid monthly sales export. Fields are addressed by
// position because the export's header row varies between districts.
const TITLE_COLUMN: usize = 0;
const BID_ID_COLUMN: usize = 1;
const AMOUNT_COLUMN: usize = 4;
const FUND_COLUMN: usize = 8;

/// Load bids from a monthly sales CSV file, inserting one bid per data row
/// into the tree. Returns the number of bids loaded.
///
/// Rows with a blank bid id are skipped with a warning; every other field is
/// taken as-is apart from the winning amount, which is cleaned with
/// [`parse_currency`].
pub fn load_bids(csv_path: &Path, tree: &mut BidTree) -> Result<usize, IngestError> {
    tracing::info!("Loading CSV file {}", csv_path.display());

    let file = File::open(csv_path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let header = reader.headers()?.clone();
    tracing::debug!(
        "CSV header: {}",
        header.iter().collect::<Vec<_>>().join(" | ")
    );

    let mut loaded = 0;
    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let bid_id = record.get(BID_ID_COLUMN).unwrap_or("").trim();
        if bid_id.is_empty() {
            // Row numbers are reported 1-indexed, counting the header.
            tracing::warn!("Skipping row {} with a blank bid id", row + 2);
            continue;
        }

        tree.insert(Bid::new(
            bid_id,
            record.get(TITLE_COLUMN).unwrap_or(""),
            record.get(FUND_COLUMN).unwrap_or(""),
            parse_currency(record.get(AMOUNT_COLUMN).unwrap_or("")),
        ));
        loaded += 1;
    }

    Ok(loaded)
}

/// Parse a winning-bid amount, stripping the currency symbol and thousands
/// separators the feed formats amounts with. Blank or unparsable amounts
/// come back as `0.0`.
pub fn parse_currency(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse() {
        Ok(amount) => amount,
        Err(_) => {
            tracing::warn!("Unparsable bid amount {raw:?}, defaulting to 0.0");
            0.0
        }
    }
}
