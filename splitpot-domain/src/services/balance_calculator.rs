use crate::model::{Expense, Money, Person, PersonBalance};

/// Derives each participant's net balance from the raw expense list.
///
/// Per person: everything they fronted minus their equal share of every
/// expense they took part in, rounded to 2 decimal places. Expenses that
/// reference ids not present in `people` contribute to no output row.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Returns one balance per input person, in input order. Pure; an empty
    /// people list yields an empty result.
    pub fn calculate(&self, people: &[Person], expenses: &[Expense]) -> Vec<PersonBalance> {
        people
            .iter()
            .map(|person| {
                let mut paid = Money::ZERO;
                let mut owed = Money::ZERO;

                for expense in expenses {
                    if expense.payer() == person.id {
                        paid += expense.cost_major();
                    }
                    if expense.includes(person.id) {
                        owed += expense.equal_share();
                    }
                }

                PersonBalance {
                    id: person.id,
                    name: person.name.clone(),
                    balance: (paid - owed).round2(),
                }
            })
            .collect()
    }
}
