pub mod balance_calculator;
pub mod settlement_planner;

pub use balance_calculator::BalanceCalculator;
pub use settlement_planner::SettlementPlanner;
