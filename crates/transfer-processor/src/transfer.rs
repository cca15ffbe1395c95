use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::str::FromStr;

/// Opaque account key, unique within a [`crate::balance::BalanceStore`]
pub type AccountId = String;

/// Instruction to move `amount` from one account to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(from: impl Into<AccountId>, to: impl Into<AccountId>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Raw CSV row that can be turned into a domain value
pub trait ParseRecord: DeserializeOwned {
    type Output;

    fn parse(self, line: u64) -> Result<Self::Output>;
}

/// Balance row from CSV
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceRecord {
    #[serde(rename = "Account")]
    pub account: Option<String>,
    #[serde(rename = "Balance")]
    pub balance: Option<String>,
}

impl ParseRecord for BalanceRecord {
    type Output = (AccountId, Decimal);

    fn parse(self, line: u64) -> Result<Self::Output> {
        let account = self
            .account
            .ok_or_else(|| LedgerError::missing_field(line, "Account"))?;
        let balance = parse_amount(line, "Balance", self.balance.as_deref())?;

        Ok((account, balance))
    }
}

/// Transfer row from CSV
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRecord {
    #[serde(rename = "FromAccount")]
    pub from: Option<String>,
    #[serde(rename = "ToAccount")]
    pub to: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<String>,
}

impl ParseRecord for TransferRecord {
    type Output = TransferRequest;

    fn parse(self, line: u64) -> Result<Self::Output> {
        let from = self
            .from
            .ok_or_else(|| LedgerError::missing_field(line, "FromAccount"))?;
        let to = self
            .to
            .ok_or_else(|| LedgerError::missing_field(line, "ToAccount"))?;
        let amount = parse_amount(line, "Amount", self.amount.as_deref())?;

        Ok(TransferRequest { from, to, amount })
    }
}

/// Balance row written to the output CSV
#[derive(Debug, Serialize)]
pub struct BalanceOutput<'a> {
    #[serde(rename = "Account")]
    pub account: &'a str,
    #[serde(rename = "Balance")]
    pub balance: Decimal,
}

fn parse_amount(line: u64, field: &'static str, value: Option<&str>) -> Result<Decimal> {
    let value = value
        .map(str::trim)
        .ok_or_else(|| LedgerError::missing_field(line, field))?;

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| LedgerError::invalid_number(line, field, value))
}
