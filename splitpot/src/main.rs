#![warn(clippy::uninlined_format_args)]

use std::{borrow::Cow, env, fs, process};

use serde::Deserialize;
use splitpot_application::{
    directory_from_people, ExpenseDraft, SettlementProcessor, SettlementReport,
};
use splitpot_domain::{Money, Person, PersonId};
use splitpot_i18n as i18n;
use splitpot_presentation::TransactionPresenter;

type CliResult<T> = Result<T, Cow<'static, str>>;

/// Event data as the web app's API serializes it.
#[derive(Debug, Deserialize)]
struct EventFile {
    people: Vec<PersonDto>,
    expenses: Vec<ExpenseDto>,
}

#[derive(Debug, Deserialize)]
struct PersonDto {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseDto {
    paymaster: i64,
    #[serde(default)]
    cost: Option<i64>,
    participant_ids: Vec<i64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let Some(path) = env::args().nth(1) else {
        return Err("Usage: splitpot <event.json>".into());
    };

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;
    let event: EventFile = serde_json::from_str(&source)
        .map_err(|err| format!("Failed to parse '{path}': {err}"))?;

    let (people, drafts) = into_domain(event);

    let processor = SettlementProcessor::new();
    let report = processor
        .build_report_from_drafts(&people, drafts)
        .map_err(|err| err.to_string())?;

    tracing::info!(
        "computed {} transfers for {} participants",
        report.transfers.len(),
        report.balances.len()
    );

    print!("{}", render_report(&report, &people));
    Ok(())
}

fn into_domain(event: EventFile) -> (Vec<Person>, Vec<ExpenseDraft>) {
    let people = event
        .people
        .into_iter()
        .map(|dto| Person::new(PersonId(dto.id), dto.name))
        .collect();

    let drafts = event
        .expenses
        .into_iter()
        .map(|dto| ExpenseDraft {
            payer: PersonId(dto.paymaster),
            cost: dto.cost,
            participant_ids: dto.participant_ids.into_iter().map(PersonId).collect(),
        })
        .collect();

    (people, drafts)
}

fn render_report(report: &SettlementReport, people: &[Person]) -> String {
    let directory = directory_from_people(people);
    let mut out = String::new();

    out.push_str(&format!("{}  {}\n", i18n::MEMBER, i18n::BALANCE));
    for entry in &report.balances {
        let sign = if entry.balance >= Money::ZERO { "+" } else { "" };
        out.push_str(&format!("  {}  {sign}{}€\n", entry.name, entry.balance));
    }

    out.push_str(&format!("{}\n", i18n::SETTLEMENT));
    if report.transfers.is_empty() {
        out.push_str(&format!("  {}\n", i18n::NOTHING_TO_SETTLE));
    } else {
        for line in TransactionPresenter::split_payments(&report.transfers, &directory) {
            out.push_str(&line);
            out.push('\n');
        }
        for line in TransactionPresenter::receipt_lines(report) {
            out.push_str(&format!(" {line}\n"));
        }
    }

    out
}
