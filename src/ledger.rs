//! Values derived from a fetched transaction list.
//!
//! Nothing here talks to the server: every function is a scan over the list
//! the views already hold, keyed by the signed-in user's id.

use crate::models::{Transaction, TransactionStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    All,
    Sent,
    Received,
}

impl Direction {
    pub const OPTIONS: [Direction; 3] = [Direction::All, Direction::Sent, Direction::Received];

    pub fn value(&self) -> &'static str {
        match self {
            Direction::All => "all",
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::All => "All Transactions",
            Direction::Sent => "Sent",
            Direction::Received => "Received",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "sent" => Direction::Sent,
            "received" => Direction::Received,
            _ => Direction::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(TransactionStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(TransactionStatus::Success),
        StatusFilter::Only(TransactionStatus::Failed),
        StatusFilter::Only(TransactionStatus::Refunded),
    ];

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(TransactionStatus::Success) => "success",
            StatusFilter::Only(TransactionStatus::Failed) => "failed",
            StatusFilter::Only(TransactionStatus::Refunded) => "refunded",
            StatusFilter::Only(TransactionStatus::Unknown) => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        value
            .parse::<TransactionStatus>()
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    fn matches(&self, status: TransactionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

pub fn is_sender(tx: &Transaction, user_id: Option<&str>) -> bool {
    user_id.is_some_and(|id| tx.sender_id == id)
}

pub fn is_receiver(tx: &Transaction, user_id: Option<&str>) -> bool {
    user_id.is_some_and(|id| tx.receiver_id == id)
}

/// Applies both history filters. Without a known user the direction filters
/// match nothing, since no row can be attributed to the viewer.
pub fn filter_transactions(
    transactions: &[Transaction],
    user_id: Option<&str>,
    direction: Direction,
    status: StatusFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| match direction {
            Direction::All => true,
            Direction::Sent => is_sender(tx, user_id),
            Direction::Received => is_receiver(tx, user_id),
        })
        .filter(|tx| status.matches(tx.status))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub sent: f64,
    pub received: f64,
}

/// Sums amounts the user sent and received. Rows between two other users
/// contribute to neither side.
pub fn totals(transactions: &[Transaction], user_id: Option<&str>) -> Totals {
    transactions.iter().fold(Totals::default(), |mut acc, tx| {
        if is_sender(tx, user_id) {
            acc.sent += tx.amount;
        }
        if is_receiver(tx, user_id) {
            acc.received += tx.amount;
        }
        acc
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_amount: f64,
    pub successful: usize,
    pub refunded: usize,
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    transactions.iter().fold(Summary::default(), |mut acc, tx| {
        acc.count += 1;
        acc.total_amount += tx.amount;
        match tx.status {
            TransactionStatus::Success => acc.successful += 1,
            TransactionStatus::Refunded => acc.refunded += 1,
            TransactionStatus::Failed | TransactionStatus::Unknown => {}
        }
        acc
    })
}

/// Only the sender of a successful payment may ask for it back.
pub fn can_refund(tx: &Transaction, user_id: Option<&str>) -> bool {
    tx.status == TransactionStatus::Success && is_sender(tx, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, sender: &str, receiver: &str, amount: f64, status: TransactionStatus) -> Transaction {
        Transaction {
            id: id.to_string(),
            sender_id: sender.to_string(),
            sender_name: Some(format!("name-{}", sender)),
            receiver_id: receiver.to_string(),
            receiver_name: Some(format!("name-{}", receiver)),
            amount,
            status,
            created_at: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("1", "u1", "u2", 500.0, TransactionStatus::Success),
            tx("2", "u2", "u1", 120.0, TransactionStatus::Success),
            tx("3", "u1", "u3", 40.0, TransactionStatus::Failed),
            tx("4", "u3", "u1", 75.5, TransactionStatus::Refunded),
            tx("5", "u2", "u3", 1000.0, TransactionStatus::Success),
        ]
    }

    fn ids(list: &[Transaction]) -> Vec<&str> {
        list.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn all_direction_returns_everything() {
        let list = sample();
        let out = filter_transactions(&list, Some("u1"), Direction::All, StatusFilter::All);
        assert_eq!(out, list);
    }

    #[test]
    fn sent_is_exactly_rows_where_user_is_sender() {
        let list = sample();
        let out = filter_transactions(&list, Some("u1"), Direction::Sent, StatusFilter::All);
        assert_eq!(ids(&out), vec!["1", "3"]);
        assert!(out.iter().all(|t| t.sender_id == "u1"));
    }

    #[test]
    fn received_is_exactly_rows_where_user_is_receiver() {
        let list = sample();
        let out = filter_transactions(&list, Some("u1"), Direction::Received, StatusFilter::All);
        assert_eq!(ids(&out), vec!["2", "4"]);
    }

    #[test]
    fn direction_without_user_matches_nothing() {
        let list = sample();
        assert!(filter_transactions(&list, None, Direction::Sent, StatusFilter::All).is_empty());
        assert!(filter_transactions(&list, None, Direction::Received, StatusFilter::All).is_empty());
        assert_eq!(
            filter_transactions(&list, None, Direction::All, StatusFilter::All).len(),
            list.len()
        );
    }

    #[test]
    fn status_filter_matches_selected_status() {
        let list = sample();
        let success = StatusFilter::from_value("success");
        let out = filter_transactions(&list, Some("u1"), Direction::All, success);
        assert_eq!(ids(&out), vec!["1", "2", "5"]);

        let refunded = StatusFilter::from_value("REFUNDED");
        let out = filter_transactions(&list, Some("u1"), Direction::All, refunded);
        assert_eq!(ids(&out), vec!["4"]);
    }

    #[test]
    fn unknown_status_only_shows_under_all() {
        let mut list = sample();
        list.push(tx("6", "u1", "u2", 9.0, TransactionStatus::Unknown));

        let all = filter_transactions(&list, Some("u1"), Direction::All, StatusFilter::All);
        assert!(ids(&all).contains(&"6"));
        for filter in StatusFilter::OPTIONS.into_iter().skip(1) {
            let out = filter_transactions(&list, Some("u1"), Direction::All, filter);
            assert!(!ids(&out).contains(&"6"));
        }
        assert!(!can_refund(&list[5], Some("u1")));
        assert_eq!(summarize(&list[5..]).successful, 0);
    }

    #[test]
    fn filters_combine() {
        let list = sample();
        let out = filter_transactions(
            &list,
            Some("u1"),
            Direction::Sent,
            StatusFilter::Only(TransactionStatus::Failed),
        );
        assert_eq!(ids(&out), vec!["3"]);
    }

    #[test]
    fn filter_values_round_trip_through_select() {
        for d in Direction::OPTIONS {
            assert_eq!(Direction::from_value(d.value()), d);
        }
        for s in StatusFilter::OPTIONS {
            assert_eq!(StatusFilter::from_value(s.value()), s);
        }
        assert_eq!(Direction::from_value("bogus"), Direction::All);
        assert_eq!(StatusFilter::from_value("bogus"), StatusFilter::All);
    }

    #[test]
    fn totals_ignore_third_party_rows() {
        let list = sample();
        let t = totals(&list, Some("u1"));
        assert_eq!(t.sent, 540.0);
        assert_eq!(t.received, 195.5);

        let all: f64 = list.iter().map(|t| t.amount).sum();
        assert!(t.sent + t.received < all);
    }

    #[test]
    fn totals_without_user_are_zero() {
        assert_eq!(totals(&sample(), None), Totals::default());
        assert_eq!(totals(&[], Some("u1")), Totals::default());
    }

    #[test]
    fn refund_only_for_senders_successful_rows() {
        let list = sample();
        assert!(can_refund(&list[0], Some("u1")));
        // receiver side
        assert!(!can_refund(&list[1], Some("u1")));
        // failed
        assert!(!can_refund(&list[2], Some("u1")));
        // refunded
        assert!(!can_refund(&list[3], Some("u1")));
        assert!(!can_refund(&list[0], None));
    }

    #[test]
    fn single_sent_payment_counts_toward_sent_and_is_refundable() {
        let payment = tx("t1", "u1", "u2", 500.0, TransactionStatus::Success);
        assert!(can_refund(&payment, Some("u1")));
        let t = totals(std::slice::from_ref(&payment), Some("u1"));
        assert_eq!(t.sent, 500.0);
        assert_eq!(t.received, 0.0);
    }

    #[test]
    fn summary_counts_statuses() {
        let s = summarize(&sample());
        assert_eq!(s.count, 5);
        assert_eq!(s.total_amount, 1735.5);
        assert_eq!(s.successful, 3);
        assert_eq!(s.refunded, 1);
        assert_eq!(summarize(&[]), Summary::default());
    }
}
