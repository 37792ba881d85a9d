use quickcheck::{quickcheck, Arbitrary, Gen};

use crate::bid_book::{Bid, BidTree};

/// One random thing to do to a tree under test. Keys are drawn from a small
/// `u8` space so sequences hit duplicates and absent ids often.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(u8),
    Remove(u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(u8::arbitrary(g))
        } else {
            Op::Remove(u8::arbitrary(g))
        }
    }
}

fn key(n: u8) -> String {
    // Zero-padded so lexicographic id order matches numeric order.
    format!("{n:03}")
}

fn apply(ops: &[Op]) -> (BidTree, Vec<String>) {
    let mut tree = BidTree::new();
    // Reference model: a multiset of ids, since duplicate inserts are kept
    // and each remove excises one occurrence.
    let mut reference: Vec<String> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(n) => {
                tree.insert(Bid::new(&key(*n), "", "", 0.0));
                reference.push(key(*n));
            }
            Op::Remove(n) => {
                tree.remove(&key(*n));
                if let Some(position) = reference.iter().position(|id| *id == key(*n)) {
                    reference.remove(position);
                }
            }
        }
    }

    reference.sort();
    (tree, reference)
}

quickcheck! {
    fn in_order_stays_sorted(ops: Vec<Op>) -> bool {
        let (tree, _) = apply(&ops);

        let mut ids = Vec::new();
        tree.in_order(|bid| ids.push(bid.bid_id.clone()));
        ids.windows(2).all(|pair| pair[0] <= pair[1])
    }

    fn tree_matches_reference_multiset(ops: Vec<Op>) -> bool {
        let (tree, reference) = apply(&ops);

        let mut ids = Vec::new();
        tree.in_order(|bid| ids.push(bid.bid_id.clone()));
        ids == reference && tree.len() == reference.len()
    }

    fn search_agrees_with_reference(ops: Vec<Op>, probe: u8) -> bool {
        let (tree, reference) = apply(&ops);

        tree.search(&key(probe)).is_some() == reference.contains(&key(probe))
    }
}
