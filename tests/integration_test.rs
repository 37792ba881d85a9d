use std::io::Cursor;
use std::path::Path;

use bidbook::{
    bid_book::BidTree,
    console,
    ingest::{self, error::IngestError},
};

const SAMPLE_CSV: &str = "testdata/ebid_sample.csv";

fn in_order_ids(tree: &BidTree) -> Vec<String> {
    let mut ids = Vec::new();
    tree.in_order(|bid| ids.push(bid.bid_id.clone()));
    ids
}

#[test]
fn test_load_and_query_bids() {
    let mut tree = BidTree::new();

    let loaded = ingest::load_bids(Path::new(SAMPLE_CSV), &mut tree)
        .expect("could not load the sample CSV");

    // The sample holds seven data rows, one of which has a blank bid id and
    // is skipped.
    assert_eq!(loaded, 6);
    assert_eq!(tree.len(), 6);
    assert_eq!(
        in_order_ids(&tree),
        ["97990", "98002", "98109", "98129", "98223", "98356"]
    );

    let mower = tree.search("98223").expect("bid 98223 should be present");
    assert_eq!(mower.title, "Riding Lawn Mower");
    assert_eq!(mower.fund, "General Fund");
    assert_eq!(mower.amount, 1500.0);

    assert_eq!(tree.search("99999"), None);

    tree.remove("98129");
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.search("98129"), None);
    assert_eq!(
        in_order_ids(&tree),
        ["97990", "98002", "98109", "98223", "98356"]
    );

    // Removing the same id again is a no-op.
    tree.remove("98129");
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let mut tree = BidTree::new();

    let result = ingest::load_bids(Path::new("testdata/no_such_file.csv"), &mut tree);

    assert!(matches!(result, Err(IngestError::IoError(_))));
    assert!(tree.is_empty());
}

#[test]
fn test_full_menu_session_over_sample_csv() {
    let mut tree = BidTree::new();
    let mut input = Cursor::new(String::from("1\n2\n3\n4\n3\n9\n"));
    let mut output = Vec::new();

    console::run_menu(
        &mut tree,
        Path::new(SAMPLE_CSV),
        "98356",
        &mut input,
        &mut output,
    )
    .expect("menu session failed");

    let transcript = String::from_utf8(output).expect("menu output was not utf8");

    assert!(transcript.contains("6 bids read"));
    // Display-all streams in ascending id order.
    let first = transcript
        .find("97990: Vending Machine")
        .expect("missing first bid");
    let last = transcript.find("98356: Forklift").expect("missing last bid");
    assert!(first < last);
    // The find option hits, then misses after removal.
    assert!(transcript.contains("98356: Forklift | 4250 | Capital Fund"));
    assert!(transcript.contains("Bid Id 98356 not found."));
    assert!(transcript.contains("Good bye."));

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.search("98356"), None);
}
