use proptest::prelude::*;
use splitpot_domain::{
    BalanceCalculator, Expense, Money, Person, PersonId, SettlementPlanner, Transfer,
};

fn people(count: usize) -> Vec<Person> {
    (1..=count as i64)
        .map(|id| Person::new(PersonId(id), format!("P{id}")))
        .collect()
}

fn balanced_minor_units(balances: &[i64]) -> Vec<(PersonId, Money)> {
    // The last entry closes the books so the total is exactly zero.
    let sum: i64 = balances.iter().sum();
    let mut entries: Vec<(PersonId, Money)> = balances
        .iter()
        .enumerate()
        .map(|(idx, minor)| (PersonId(idx as i64 + 1), Money::from_minor_units(*minor)))
        .collect();
    entries.push((
        PersonId(balances.len() as i64 + 1),
        Money::from_minor_units(-sum),
    ));
    entries
}

fn apply_transfers(entries: &mut [(PersonId, Money)], transfers: &[Transfer]) {
    for transfer in transfers {
        for (id, balance) in entries.iter_mut() {
            if *id == transfer.from {
                *balance += transfer.amount;
            }
            if *id == transfer.to {
                *balance -= transfer.amount;
            }
        }
    }
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        person_count in 1usize..=6,
        costs in prop::collection::vec(0i64..=100_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..6, 0..=20),
        participant_masks in prop::collection::vec(1usize..64, 0..=20),
    ) {
        let people = people(person_count);
        let expense_count = costs.len().min(payer_indexes.len()).min(participant_masks.len());

        let mut expenses = Vec::with_capacity(expense_count);
        for idx in 0..expense_count {
            let payer = PersonId((payer_indexes[idx] % person_count) as i64 + 1);
            let participants = (0..person_count)
                .filter(|bit| participant_masks[idx] & (1 << bit) != 0)
                .map(|bit| PersonId(bit as i64 + 1));
            // The mask can select no one; try_new then still yields a
            // one-person expense because the payer is injected.
            let expense = match Expense::try_new(payer, Some(costs[idx]), participants) {
                Ok(expense) => expense,
                Err(_) => Expense::try_new(payer, Some(costs[idx]), [payer])
                    .expect("payer-only expense is valid"),
            };
            expenses.push(expense);
        }

        let balances = BalanceCalculator.calculate(&people, &expenses);
        let total = balances
            .iter()
            .fold(Money::ZERO, |sum, entry| sum + entry.balance);
        prop_assert!(total.abs() <= Money::from_minor_units(2));
    }

    #[test]
    fn transfers_settle_every_balance(
        balances in prop::collection::vec(-50_000i64..=50_000, 1..=7),
    ) {
        let entries = balanced_minor_units(&balances);
        let transfers = SettlementPlanner.plan(entries.clone());

        for transfer in &transfers {
            prop_assert!(transfer.amount > Money::ZERO);
            prop_assert_ne!(transfer.from, transfer.to);
        }

        let mut remaining = entries;
        apply_transfers(&mut remaining, &transfers);
        for (_, balance) in &remaining {
            prop_assert!(balance.is_settled());
        }
    }

    #[test]
    fn transfer_count_is_at_most_nonzero_balances_minus_one(
        balances in prop::collection::vec(-50_000i64..=50_000, 1..=7),
    ) {
        let entries = balanced_minor_units(&balances);
        let nonzero = entries
            .iter()
            .filter(|(_, balance)| !balance.is_zero())
            .count();

        let transfers = SettlementPlanner.plan(entries);
        prop_assert!(transfers.len() <= nonzero.saturating_sub(1));
    }

    #[test]
    fn calculator_output_feeds_planner_to_settlement(
        person_count in 2usize..=5,
        costs in prop::collection::vec(1i64..=50_000, 1..=10),
        payer_indexes in prop::collection::vec(0usize..5, 1..=10),
    ) {
        let people = people(person_count);
        let expense_count = costs.len().min(payer_indexes.len());

        let mut expenses = Vec::with_capacity(expense_count);
        for idx in 0..expense_count {
            let payer = PersonId((payer_indexes[idx] % person_count) as i64 + 1);
            let everyone = people.iter().map(|person| person.id);
            expenses.push(
                Expense::try_new(payer, Some(costs[idx]), everyone)
                    .expect("full-group expense is valid"),
            );
        }

        let balances = BalanceCalculator.calculate(&people, &expenses);
        let entries: Vec<(PersonId, Money)> = balances
            .iter()
            .map(|entry| (entry.id, entry.balance))
            .collect();
        let transfers = SettlementPlanner.plan(entries.clone());

        let mut remaining = entries;
        apply_transfers(&mut remaining, &transfers);
        for (_, balance) in &remaining {
            // Per-person rounding leaves at most a couple of cents of
            // residue, which the planner's epsilon absorbs.
            prop_assert!(balance.abs() <= Money::from_minor_units(2));
        }
    }
}
