use clap::Parser;
use std::path::{Path, PathBuf};

/// Trait for reading configuration parameters
pub trait Config {
    fn balances_path(&self) -> &Path;
    fn transfers_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn report_path(&self) -> Option<&Path>;
}

/// CLI configuration
#[derive(Parser, Debug)]
#[command(
    name = "balance-transfer",
    about = "Applies fund transfers from CSV to a set of account balances",
    version
)]
pub struct CliConfig {
    /// CSV file with `Account,Balance` rows
    #[arg(long, value_name = "FILE", default_value = "account_balances.csv")]
    balances: PathBuf,

    /// CSV file with `FromAccount,ToAccount,Amount` rows, applied in order
    #[arg(long, value_name = "FILE", default_value = "transfers.csv")]
    transfers: PathBuf,

    /// Where to write the updated balances
    #[arg(long, value_name = "FILE", default_value = "updated_account_balances.csv")]
    output: PathBuf,

    /// Optional CSV file receiving the outcome of every transfer
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

impl Config for CliConfig {
    fn balances_path(&self) -> &Path {
        &self.balances
    }

    fn transfers_path(&self) -> &Path {
        &self.transfers
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn report_path(&self) -> Option<&Path> {
        self.report.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = CliConfig::parse_from(["balance-transfer"]);

        assert_eq!(config.balances_path(), Path::new("account_balances.csv"));
        assert_eq!(config.transfers_path(), Path::new("transfers.csv"));
        assert_eq!(
            config.output_path(),
            Path::new("updated_account_balances.csv")
        );
        assert_eq!(config.report_path(), None);
    }

    #[test]
    fn test_explicit_paths() {
        let config = CliConfig::parse_from([
            "balance-transfer",
            "--balances",
            "in/balances.csv",
            "--transfers",
            "in/transfers.csv",
            "--output",
            "out/balances.csv",
            "--report",
            "out/report.csv",
        ]);

        assert_eq!(config.balances_path(), Path::new("in/balances.csv"));
        assert_eq!(config.transfers_path(), Path::new("in/transfers.csv"));
        assert_eq!(config.output_path(), Path::new("out/balances.csv"));
        assert_eq!(config.report_path(), Some(Path::new("out/report.csv")));
    }
}
