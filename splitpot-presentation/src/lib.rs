#![warn(clippy::uninlined_format_args)]

pub mod chart;
pub mod transaction_presenter;

pub use chart::BalanceChartSeries;
pub use transaction_presenter::TransactionPresenter;
