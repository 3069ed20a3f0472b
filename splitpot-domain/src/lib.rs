#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{Expense, ExpenseError, Money, Person, PersonBalance, PersonId, Transfer};
pub use services::{BalanceCalculator, SettlementPlanner};
