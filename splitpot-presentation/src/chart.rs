use splitpot_domain::{Money, PersonBalance};

/// Per-participant balance series for the event bar chart: the positive
/// series carries creditors, the negative series debtors, and each side is
/// zero-filled where the other applies so both series line up with labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceChartSeries {
    pub labels: Vec<String>,
    pub positive: Vec<Money>,
    pub negative: Vec<Money>,
}

impl BalanceChartSeries {
    pub fn from_balances(balances: &[PersonBalance]) -> Self {
        let labels = balances.iter().map(|entry| entry.name.clone()).collect();
        let positive = balances
            .iter()
            .map(|entry| entry.balance.max(Money::ZERO))
            .collect();
        let negative = balances
            .iter()
            .map(|entry| entry.balance.min(Money::ZERO))
            .collect();

        Self {
            labels,
            positive,
            negative,
        }
    }
}
