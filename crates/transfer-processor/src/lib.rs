pub mod balance;
pub mod engine;
pub mod error;
pub mod io;
pub mod report;
pub mod transfer;

use balance::BalanceStore;
use engine::TransferProcessor;
use error::Result;
use report::Reporter;
use transfer::TransferRequest;

/// Apply a batch of transfers in order and return the final balances with the outcome log
pub fn process_batch(
    store: BalanceStore,
    transfers: impl IntoIterator<Item = Result<TransferRequest>>,
) -> Result<(BalanceStore, Reporter)> {
    let mut processor = TransferProcessor::new(store);
    let reporter = processor.process_all(transfers)?;

    Ok((processor.into_store(), reporter))
}
