use crate::{
    balance::BalanceStore,
    error::Result,
    report::{Reporter, TransferOutcome},
    transfer::TransferRequest,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Applies transfers against a [`BalanceStore`] one at a time, in order
#[derive(Debug, Default)]
pub struct TransferProcessor {
    store: BalanceStore,
}

impl TransferProcessor {
    pub const fn new(store: BalanceStore) -> Self {
        Self { store }
    }

    /// Validates and applies a single transfer. Rejections leave the store untouched.
    pub fn process(&mut self, request: &TransferRequest) -> TransferOutcome {
        let outcome = self.validate(request);

        if !outcome.is_applied() {
            return outcome;
        }

        match self.store.apply(&request.from, &request.to, request.amount) {
            Some(()) => TransferOutcome::Applied,
            None => TransferOutcome::RejectedOverflow,
        }
    }

    /// Processes transfers in input order until the stream ends.
    ///
    /// A malformed transfer aborts the run; transfers already applied are
    /// kept in the store, the caller decides whether to write anything.
    pub fn process_all<I>(&mut self, requests: I) -> Result<Reporter>
    where
        I: IntoIterator<Item = Result<TransferRequest>>,
    {
        let mut reporter = Reporter::new();

        for request in requests {
            let request = request?;
            let outcome = self.process(&request);
            let entry = reporter.record(request, outcome);

            if outcome.is_applied() {
                debug!("{entry}");
            } else {
                warn!("{entry}");
            }
        }

        Ok(reporter)
    }

    pub const fn store(&self) -> &BalanceStore {
        &self.store
    }

    pub fn into_store(self) -> BalanceStore {
        self.store
    }

    fn validate(&self, request: &TransferRequest) -> TransferOutcome {
        if request.amount < Decimal::ZERO {
            return TransferOutcome::RejectedNegativeAmount;
        }

        let (Some(available), true) = (
            self.store.get(&request.from),
            self.store.contains(&request.to),
        ) else {
            return TransferOutcome::RejectedInvalidAccount;
        };

        if available < request.amount {
            return TransferOutcome::RejectedInsufficientFunds;
        }

        TransferOutcome::Applied
    }
}
