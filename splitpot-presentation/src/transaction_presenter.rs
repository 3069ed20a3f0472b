use splitpot_application::{PersonDirectory, SettlementReport};
use splitpot_domain::{Money, PersonBalance, PersonId, Transfer};
use splitpot_i18n as i18n;
use std::borrow::Cow;

/// Renders settlement transfers and balances as display strings.
///
/// Amounts are always 2 decimal places with a `.` separator and a trailing
/// `€`, independent of locale.
pub struct TransactionPresenter;

impl TransactionPresenter {
    /// `"Alice owes Bob 50.00€"`
    pub fn format_transfer(transfer: &Transfer, directory: &dyn PersonDirectory) -> String {
        format!(
            "{} {} {} {}€",
            label(transfer.from, directory),
            i18n::OWES,
            label(transfer.to, directory),
            transfer.amount,
        )
    }

    /// `"Flo receives 306.75€"` — shown for creditors next to the plan.
    pub fn format_receipt_line(balance: &PersonBalance) -> String {
        format!("{} {} {}€", balance.name, i18n::RECEIVES, balance.balance)
    }

    /// Formats the whole settlement list with the single leading space the
    /// original consumers expect.
    pub fn split_payments(transfers: &[Transfer], directory: &dyn PersonDirectory) -> Vec<String> {
        transfers
            .iter()
            .map(|transfer| format!(" {}", Self::format_transfer(transfer, directory)))
            .collect()
    }

    /// Receipt lines for every participant who ends up being owed money.
    pub fn receipt_lines(report: &SettlementReport) -> Vec<String> {
        report
            .balances
            .iter()
            .filter(|entry| entry.balance > Money::ZERO)
            .map(Self::format_receipt_line)
            .collect()
    }
}

fn label<'a>(id: PersonId, directory: &'a dyn PersonDirectory) -> Cow<'a, str> {
    match directory.display_name(id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("person#{id}")),
    }
}
