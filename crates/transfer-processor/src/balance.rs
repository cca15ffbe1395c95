use crate::{error::Result, transfer::AccountId};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::debug;

/// Account balances keyed by account id.
///
/// Iteration follows the order in which accounts were first inserted.
/// The store does not enforce non-negative balances; sufficiency is
/// checked by [`crate::engine::TransferProcessor`] before mutation.
#[derive(Debug, Default, Clone)]
pub struct BalanceStore {
    balances: IndexMap<AccountId, Decimal>,
}

impl BalanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from parsed balance rows. The first malformed row fails the load.
    pub fn load<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(AccountId, Decimal)>>,
    {
        let mut store = Self::new();

        for record in records {
            let (account, balance) = record?;
            store.insert(account, balance);
        }

        Ok(store)
    }

    /// Last write wins; an overwritten account keeps its original position.
    pub fn insert(&mut self, account: impl Into<AccountId>, balance: Decimal) {
        let (index, previous) = self.balances.insert_full(account.into(), balance);

        if let (Some(previous), Some((account, _))) = (previous, self.balances.get_index(index)) {
            debug!("Duplicate account {account}: {previous} replaced by {balance}");
        }
    }

    pub fn get(&self, account: &str) -> Option<Decimal> {
        self.balances.get(account).copied()
    }

    pub fn contains(&self, account: &str) -> bool {
        self.balances.contains_key(account)
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.balances
            .iter()
            .map(|(account, balance)| (account.as_str(), *balance))
    }

    /// Sum of all balances, `None` if it does not fit in a [`Decimal`].
    pub fn total(&self) -> Option<Decimal> {
        self.balances
            .values()
            .try_fold(Decimal::ZERO, |total, balance| total.checked_add(*balance))
    }

    /// Debits `from`, then credits `to`. Callers validate beforehand.
    ///
    /// Both results are computed before either is written, so on overflow
    /// (`None`) the store is left untouched.
    pub(crate) fn apply(&mut self, from: &str, to: &str, amount: Decimal) -> Option<()> {
        let debited = self.get(from)?.checked_sub(amount)?;
        let credited = if from == to {
            debited
        } else {
            self.get(to)?
        }
        .checked_add(amount)?;

        *self.balances.get_mut(from)? = debited;
        *self.balances.get_mut(to)? = credited;

        Some(())
    }
}
