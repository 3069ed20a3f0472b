#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ports;
pub mod processor;

pub use error::ReportError;
pub use ports::{directory_from_people, PersonDirectory};
pub use processor::{ExpenseDraft, SettlementProcessor, SettlementReport};
