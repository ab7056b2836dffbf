use chrono::{Datelike, NaiveDate};
use getset::{CopyGetters, Getters};
use log::warn;
use rust_decimal::Decimal;

use super::calendar::Locale;
use super::description::ParsedDescription;
use super::prorata::{AmountSplit, ProratedPeriod};
use super::{FormatError, Tenant};

/// One receipt, as handed to the renderer. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct ReceiptRecord {
    #[getset(get_copy = "pub")]
    year: i32,
    #[getset(get_copy = "pub")]
    month: u32,
    #[getset(get_copy = "pub")]
    payment_date: NaiveDate,
    #[getset(get_copy = "pub")]
    room_number: u32,
    #[getset(get = "pub")]
    tenant: Tenant,
    #[getset(get_copy = "pub")]
    total_amount: Decimal,
    #[getset(get_copy = "pub")]
    charge_amount: Decimal,
    #[getset(get = "pub")]
    prorated_period: Option<ProratedPeriod>,
}

/// A statement line kept after filtering: date, description and income.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

impl ReceiptRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        payment_date: NaiveDate,
        room_number: u32,
        tenant: Tenant,
        total_amount: Decimal,
        charge_amount: Decimal,
        prorated_period: Option<ProratedPeriod>,
    ) -> ReceiptRecord {
        ReceiptRecord {
            year,
            month,
            payment_date,
            room_number,
            tenant,
            total_amount,
            charge_amount,
            prorated_period,
        }
    }

    /// Combines a statement row with its parsed description. The year of the
    /// receipt is the year of the payment.
    pub fn from_statement(row: &StatementRow, parsed: ParsedDescription, locale: Locale) -> Result<ReceiptRecord, FormatError> {
        let year = row.date.year();
        let month = locale.parse_month(&parsed.month_name)?;

        let prorated_period = match &parsed.prorated_marker {
            Some(marker) => {
                let period = ProratedPeriod::resolve(marker, year, row.amount)?;
                if period.begin.month() != month {
                    warn!(
                        "prorata period {} does not fall in {} for `{}`",
                        period.begin, parsed.month_name, row.description
                    );
                }
                Some(period)
            },
            None => None,
        };

        Ok(ReceiptRecord::new(
            year,
            month,
            row.date,
            parsed.room_number,
            parsed.tenant,
            row.amount,
            parsed.charge_amount,
            prorated_period,
        ))
    }

    /// Amount actually paid for this receipt.
    pub fn paid_amount(&self) -> Decimal {
        self.prorated_period.map(|period| period.amount).unwrap_or(self.total_amount)
    }

    pub fn split(&self) -> Result<AmountSplit, FormatError> {
        match &self.prorated_period {
            Some(period) => period.split(self.charge_amount),
            None => Ok(AmountSplit::full_month(self.total_amount, self.charge_amount)),
        }
    }
}

impl StatementRow {
    pub fn to_receipt(&self, locale: Locale) -> Result<ReceiptRecord, FormatError> {
        let parsed: ParsedDescription = self.description.parse()?;
        ReceiptRecord::from_statement(self, parsed, locale)
    }
}
