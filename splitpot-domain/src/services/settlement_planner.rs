use crate::model::{Money, PersonId, Transfer};

/// Turns a set of net balances into a minimal list of settling payments.
///
/// Greedy two-pointer matching over the balances sorted ascending: the
/// biggest debtor pays the biggest creditor whatever the smaller side can
/// absorb, and a cursor moves on once its running balance is within one
/// cent of zero. For pure debtor/creditor matching this emits at most
/// N - 1 payments for N non-zero balances.
///
/// The caller is responsible for handing in balances that sum to ~0; any
/// leftover imbalance is silently dropped at whichever cursor finishes
/// last.
pub struct SettlementPlanner;

impl SettlementPlanner {
    pub fn plan(&self, balances: impl IntoIterator<Item = (PersonId, Money)>) -> Vec<Transfer> {
        let mut entries: Vec<(PersonId, Money)> = balances.into_iter().collect();
        if entries.len() < 2 {
            return Vec::new();
        }

        // Stable sort keeps equal balances in input order, so output is
        // deterministic without a secondary key.
        entries.sort_by_key(|(_, balance)| *balance);

        let mut transfers = Vec::new();
        let mut debtor = 0;
        let mut creditor = entries.len() - 1;

        while debtor < creditor {
            let amount_owed = -entries[debtor].1;
            let amount_receivable = entries[creditor].1;

            if amount_owed <= Money::ZERO {
                debtor += 1;
                continue;
            }
            if amount_receivable <= Money::ZERO {
                creditor -= 1;
                continue;
            }

            let transfer = amount_owed.min(amount_receivable);
            let rounded = transfer.round2();
            if rounded > Money::ZERO {
                transfers.push(Transfer {
                    from: entries[debtor].0,
                    to: entries[creditor].0,
                    amount: rounded,
                });
            }

            // The unrounded amount is applied to the running balances; the
            // one-cent epsilon below absorbs the difference.
            entries[debtor].1 += transfer;
            entries[creditor].1 -= transfer;

            if entries[debtor].1.is_settled() {
                debtor += 1;
            }
            if entries[creditor].1.is_settled() {
                creditor -= 1;
            }
        }

        transfers
    }
}
