use splitpot_domain::ExpenseError;
use thiserror::Error;

/// Failures when assembling a settlement report from raw event data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("expense {index}: {source}")]
    InvalidExpense {
        index: usize,
        #[source]
        source: ExpenseError,
    },
}
