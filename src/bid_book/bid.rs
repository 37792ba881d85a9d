use std::fmt;

/// A single auction bid from the monthly sales feed.
///
/// `bid_id` is the ordering key for the bid book; the remaining fields are
/// payload and are never inspected by the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bid {
    pub bid_id: String,
    pub title: String,
    pub fund: String,
    pub amount: f64,
}

impl Bid {
    pub fn new(bid_id: &str, title: &str, fund: &str, amount: f64) -> Self {
        Bid {
            bid_id: bid_id.to_owned(),
            title: title.to_owned(),
            fund: fund.to_owned(),
            amount,
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.bid_id, self.title, self.amount, self.fund
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Bid;

    #[test]
    fn test_default_bid_amount_is_zero() {
        let bid = Bid::default();

        assert!(bid.bid_id.is_empty());
        assert_eq!(bid.amount, 0.0);
    }

    #[test]
    fn test_display_format() {
        let bid = Bid::new("98129", "Printer", "General Fund", 52.0);

        assert_eq!(bid.to_string(), "98129: Printer | 52 | General Fund");
    }
}
