use crate::transfer::TransferRequest;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Result of applying a single transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferOutcome {
    Applied,
    #[serde(rename = "insufficient_funds")]
    RejectedInsufficientFunds,
    #[serde(rename = "invalid_account")]
    RejectedInvalidAccount,
    #[serde(rename = "negative_amount")]
    RejectedNegativeAmount,
    #[serde(rename = "overflow")]
    RejectedOverflow,
}

impl TransferOutcome {
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::RejectedInsufficientFunds => f.write_str("insufficient funds"),
            Self::RejectedInvalidAccount => f.write_str("invalid account"),
            Self::RejectedNegativeAmount => f.write_str("negative amount"),
            Self::RejectedOverflow => f.write_str("balance overflow"),
        }
    }
}

/// A processed transfer together with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub request: TransferRequest,
    pub outcome: TransferOutcome,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TransferRequest { from, to, amount } = &self.request;

        match self.outcome {
            TransferOutcome::Applied => {
                write!(f, "Transfer from {from} to {to} of amount {amount} applied")
            }
            reason => write!(
                f,
                "Transfer from {from} to {to} of amount {amount} failed due to {reason}"
            ),
        }
    }
}

/// Outcome report row written to CSV
#[derive(Debug, Serialize)]
pub struct ReportOutput<'a> {
    #[serde(rename = "FromAccount")]
    pub from: &'a str,
    #[serde(rename = "ToAccount")]
    pub to: &'a str,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Outcome")]
    pub outcome: TransferOutcome,
}

impl<'a> From<&'a ReportEntry> for ReportOutput<'a> {
    fn from(entry: &'a ReportEntry) -> Self {
        Self {
            from: &entry.request.from,
            to: &entry.request.to,
            amount: entry.request.amount,
            outcome: entry.outcome,
        }
    }
}

/// Outcome counts for a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub applied: usize,
    pub insufficient_funds: usize,
    pub invalid_account: usize,
    pub negative_amount: usize,
    pub overflow: usize,
}

impl Summary {
    pub const fn rejected(&self) -> usize {
        self.insufficient_funds + self.invalid_account + self.negative_amount + self.overflow
    }
}

/// Transfer outcomes in processing order
#[derive(Debug, Default, Clone)]
pub struct Reporter {
    entries: Vec<ReportEntry>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        request: TransferRequest,
        outcome: TransferOutcome,
    ) -> &ReportEntry {
        let index = self.entries.len();
        self.entries.push(ReportEntry { request, outcome });

        &self.entries[index]
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn applied(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| entry.outcome.is_applied())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| !entry.outcome.is_applied())
    }

    pub fn summary(&self) -> Summary {
        self.entries
            .iter()
            .fold(Summary::default(), |mut summary, entry| {
                match entry.outcome {
                    TransferOutcome::Applied => summary.applied += 1,
                    TransferOutcome::RejectedInsufficientFunds => summary.insufficient_funds += 1,
                    TransferOutcome::RejectedInvalidAccount => summary.invalid_account += 1,
                    TransferOutcome::RejectedNegativeAmount => summary.negative_amount += 1,
                    TransferOutcome::RejectedOverflow => summary.overflow += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: i64) -> TransferRequest {
        TransferRequest::new("A", "B", Decimal::new(amount, 2))
    }

    #[test]
    fn test_entries_keep_processing_order() {
        let mut reporter = Reporter::new();
        reporter.record(request(100), TransferOutcome::Applied);
        reporter.record(request(200), TransferOutcome::RejectedInsufficientFunds);
        reporter.record(request(300), TransferOutcome::Applied);

        let amounts: Vec<_> = reporter
            .entries()
            .iter()
            .map(|entry| entry.request.amount)
            .collect();
        assert_eq!(
            amounts,
            vec![Decimal::new(100, 2), Decimal::new(200, 2), Decimal::new(300, 2)]
        );
        assert_eq!(reporter.applied().count(), 2);
        assert_eq!(reporter.rejected().count(), 1);
    }

    #[test]
    fn test_summary() {
        let mut reporter = Reporter::new();
        reporter.record(request(100), TransferOutcome::Applied);
        reporter.record(request(100), TransferOutcome::RejectedInvalidAccount);
        reporter.record(request(100), TransferOutcome::RejectedInvalidAccount);
        reporter.record(request(-100), TransferOutcome::RejectedNegativeAmount);

        let summary = reporter.summary();
        assert_eq!(
            summary,
            Summary {
                applied: 1,
                insufficient_funds: 0,
                invalid_account: 2,
                negative_amount: 1,
                overflow: 0,
            }
        );
        assert_eq!(summary.rejected(), 3);
    }

    #[test]
    fn test_applied_message() {
        let mut reporter = Reporter::new();

        let entry = reporter.record(
            TransferRequest::new("A", "B", Decimal::new(20_000, 2)),
            TransferOutcome::Applied,
        );

        assert_eq!(
            entry.to_string(),
            "Transfer from A to B of amount 200.00 applied"
        );
    }

    #[test]
    fn test_rejection_message() {
        let entry = ReportEntry {
            request: TransferRequest::new("A", "Z", Decimal::new(5000, 2)),
            outcome: TransferOutcome::RejectedInvalidAccount,
        };

        assert_eq!(
            entry.to_string(),
            "Transfer from A to Z of amount 50.00 failed due to invalid account"
        );
    }
}
