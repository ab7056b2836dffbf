//! Partial-month occupancy: `--> DD/MM` (leaving mid-month) or `DD/MM -->`
//! (arriving mid-month).

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use super::calendar::{days_in_month, first_day_of_month, last_day_of_month, parse_day_month_year};
use super::description::{parse_amount, PRORATA_KEYWORD};
use super::FormatError;

pub const ARROW: &str = "-->";

const CENTS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProratedPeriod {
    pub begin: NaiveDate,
    pub end: NaiveDate,
    pub amount: Decimal,
}

/// Rent and charge shares of an amount. `rent + charge` is always the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountSplit {
    pub rent: Decimal,
    pub charge: Decimal,
}

impl AmountSplit {
    pub fn full_month(total: Decimal, charge: Decimal) -> AmountSplit {
        AmountSplit {
            rent: total - charge,
            charge,
        }
    }
}

impl ProratedPeriod {
    /// Resolves a marker such as `PRORATA --> 15/03` against `year`.
    pub fn resolve(marker: &str, year: i32, amount: Decimal) -> Result<ProratedPeriod, FormatError> {
        let shape_error = || FormatError::ProrataShape(marker.to_string());

        let mut tokens: Vec<&str> = marker.split_whitespace().collect();
        if tokens.first() == Some(&PRORATA_KEYWORD) {
            tokens.remove(0);
        }

        let (day_month, occupancy_ends) = match tokens.as_slice() {
            [arrow, day_month] if *arrow == ARROW && *day_month != ARROW => (*day_month, true),
            [day_month, arrow] if *arrow == ARROW && *day_month != ARROW => (*day_month, false),
            _ => return Err(shape_error()),
        };

        let (day, month) = day_month.split_once('/').ok_or_else(shape_error)?;
        let day: u32 = day.parse().map_err(|_| shape_error())?;
        let month: u32 = month.parse().map_err(|_| shape_error())?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(shape_error)?;

        let (begin, end) = if occupancy_ends {
            (first_day_of_month(year, month)?, date)
        } else {
            (date, last_day_of_month(year, month)?)
        };

        Ok(ProratedPeriod { begin, end, amount })
    }

    /// Parses an already-resolved period: `BEGIN END AMOUNT`.
    pub fn from_resolved(s: &str) -> Result<ProratedPeriod, FormatError> {
        let shape_error = || FormatError::ProrataShape(s.to_string());

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [begin, end, amount] = tokens[..] else {
            return Err(shape_error());
        };

        let begin = parse_day_month_year(begin)?;
        let end = parse_day_month_year(end)?;
        if end < begin || (begin.year(), begin.month()) != (end.year(), end.month()) {
            return Err(shape_error());
        }

        Ok(ProratedPeriod {
            begin,
            end,
            amount: parse_amount("prorata amount", amount)?,
        })
    }

    pub fn days(&self) -> u32 {
        self.end.day() - self.begin.day() + 1
    }

    /// Splits the period amount between rent and charge using the day ratio
    /// against the full month.
    pub fn split(&self, base_charge: Decimal) -> Result<AmountSplit, FormatError> {
        let month_days = Decimal::from(days_in_month(self.begin.year(), self.begin.month())?);
        let days = Decimal::from(self.days());

        let full_month = (month_days / days * self.amount).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if full_month.is_zero() {
            return Err(FormatError::ProrataAmount(format!("{} {} {}", self.begin, self.end, self.amount)));
        }

        let charge = (self.amount * base_charge / full_month).round_dp_with_strategy(CENTS, RoundingStrategy::MidpointAwayFromZero);

        Ok(AmountSplit {
            rent: self.amount - charge,
            charge,
        })
    }
}
