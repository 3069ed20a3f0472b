use crate::error::ReportError;
use splitpot_domain::{
    BalanceCalculator, Expense, Person, PersonBalance, PersonId, SettlementPlanner, Transfer,
};

/// An expense as it arrives from the data-entry boundary, before the
/// domain invariants have been checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub payer: PersonId,
    pub cost: Option<i64>,
    pub participant_ids: Vec<PersonId>,
}

/// Balances and settlement plan for one view of an event's data.
///
/// Recomputed from scratch on every request; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementReport {
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<Transfer>,
}

/// Runs the balance calculator and the settlement planner in sequence.
pub struct SettlementProcessor {
    calculator: BalanceCalculator,
    planner: SettlementPlanner,
}

impl SettlementProcessor {
    pub fn new() -> Self {
        Self {
            calculator: BalanceCalculator,
            planner: SettlementPlanner,
        }
    }

    pub fn build_report(&self, people: &[Person], expenses: &[Expense]) -> SettlementReport {
        let balances = self.calculator.calculate(people, expenses);
        let transfers = self
            .planner
            .plan(balances.iter().map(|entry| (entry.id, entry.balance)));

        SettlementReport {
            balances,
            transfers,
        }
    }

    /// Validates raw expense drafts and builds the report. Invalid drafts
    /// are rejected with their position so the caller can point at the
    /// offending record.
    pub fn build_report_from_drafts(
        &self,
        people: &[Person],
        drafts: impl IntoIterator<Item = ExpenseDraft>,
    ) -> Result<SettlementReport, ReportError> {
        let mut expenses = Vec::new();
        for (index, draft) in drafts.into_iter().enumerate() {
            let expense = Expense::try_new(draft.payer, draft.cost, draft.participant_ids)
                .map_err(|source| ReportError::InvalidExpense { index, source })?;
            expenses.push(expense);
        }

        Ok(self.build_report(people, &expenses))
    }
}

impl Default for SettlementProcessor {
    fn default() -> Self {
        Self::new()
    }
}
