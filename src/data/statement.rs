//! Semicolon-separated bank statements. Only rent income rows are kept.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use log::debug;
use rust_decimal::Decimal;

use super::DataError;
use crate::receipt::description::parse_amount;
use crate::receipt::{FormatError, StatementRow};

/// Rent rows are the ones whose transaction text starts with this, case included.
pub const RENT_KEYWORD: &str = "Loyer";

const DATE_FORMAT: &str = "%d/%m/%Y";

struct Columns {
    transaction: usize,
    date: usize,
    income: usize,
    expense: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Columns, FormatError> {
        let names: Vec<String> = headers.iter().map(|name| name.trim().to_lowercase()).collect();
        let find = |wanted: &str| names.iter().position(|name| name == wanted);
        let require = |wanted: &'static str| find(wanted).ok_or(FormatError::MissingColumn(wanted));

        if find("balancecc").is_some() {
            debug!("dropping column balancecc");
        }

        Ok(Columns {
            transaction: require("transaction")?,
            date: require("date")?,
            income: require("income")?,
            expense: find("expense"),
        })
    }

    fn field<'r>(&self, record: &'r StringRecord, idx: usize) -> &'r str {
        record.get(idx).map(str::trim).unwrap_or("")
    }
}

pub fn load_statement(path: impl AsRef<Path>) -> Result<Vec<StatementRow>, DataError> {
    let bytes = fs::read(path.as_ref())?;
    debug!("read {} bytes from {}", bytes.len(), path.as_ref().display());
    read_statement(&bytes)
}

pub fn read_statement(bytes: &[u8]) -> Result<Vec<StatementRow>, DataError> {
    parse_statement(&decode(bytes))
}

/// UTF-8 when valid, Latin-1 otherwise.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text.trim_start_matches('\u{feff}')),
        Err(err) => {
            debug!("statement is not valid utf-8 ({}), decoding as latin-1", err);
            Cow::Owned(bytes.iter().map(|&b| b as char).collect())
        },
    }
}

pub fn parse_statement(text: &str) -> Result<Vec<StatementRow>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::locate(csv_reader.headers()?)?;

    let mut rent_records = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if columns.field(&record, columns.transaction).starts_with(RENT_KEYWORD) {
            rent_records.push(record);
        }
    }

    // A rent row booked as an expense invalidates the whole statement.
    if let Some(expense) = columns.expense {
        if let Some(record) = rent_records.iter().find(|record| !columns.field(record, expense).is_empty()) {
            return Err(FormatError::IncomeExpenseConflict(columns.field(record, columns.transaction).to_string()).into());
        }
    }

    let rows = rent_records
        .iter()
        .map(|record| to_row(&columns, record))
        .collect::<Result<Vec<_>, FormatError>>()?;

    debug!("kept {} rent rows", rows.len());

    Ok(rows)
}

fn to_row(columns: &Columns, record: &StringRecord) -> Result<StatementRow, FormatError> {
    let description = columns.field(record, columns.transaction);

    let date = columns.field(record, columns.date);
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| FormatError::InvalidDate(date.to_string()))?;

    let income = columns.field(record, columns.income);
    if income.is_empty() {
        return Err(FormatError::MissingIncome(description.to_string()));
    }

    Ok(StatementRow {
        date,
        description: description.to_string(),
        amount: parse_amount("income", income)?,
    })
}

pub fn rent_income_total(rows: &[StatementRow]) -> Decimal {
    rows.iter().map(|row| row.amount).sum()
}
