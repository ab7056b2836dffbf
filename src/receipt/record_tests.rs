use anyhow::{bail, Result};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use super::*;

fn row(description: &str, amount: rust_decimal::Decimal) -> StatementRow {
    StatementRow {
        date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        description: description.to_string(),
        amount,
    }
}

#[test]
fn test_full_month_record() -> Result<()> {
    let record = row("Loyer Mars Mr Jean Dupont Chambre 3 Charge 50", dec!(450)).to_receipt(Locale::French)?;

    assert_eq!(record.year(), 2024);
    assert_eq!(record.month(), 3);
    assert_eq!(record.payment_date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(record.room_number(), 3);
    assert_eq!(record.tenant().formal(), "Monsieur Jean Dupont");
    assert_eq!(record.total_amount(), dec!(450));
    assert_eq!(record.charge_amount(), dec!(50));
    assert_eq!(record.prorated_period(), &None);
    assert_eq!(record.paid_amount(), dec!(450));
    assert_eq!(record.split()?, AmountSplit { rent: dec!(400), charge: dec!(50) });

    Ok(())
}

#[test]
fn test_prorated_record() -> Result<()> {
    let record = row("Loyer Mars Mme Claire Martin Chambre 1 Charge 50 (PRORATA 15/03 -->)", dec!(300))
        .to_receipt(Locale::French)?;

    let period = match record.prorated_period() {
        Some(period) => *period,
        None => bail!("record should carry a prorated period"),
    };
    assert_eq!(period.begin, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    assert_eq!(record.paid_amount(), dec!(300));

    let split = record.split()?;
    assert_eq!(split.rent + split.charge, dec!(300));

    Ok(())
}

#[test]
fn test_unknown_month_in_description() {
    let result = row("Loyer Thermidor Mr Jean Dupont Chambre 3 Charge 50", dec!(450)).to_receipt(Locale::French);
    assert_eq!(result, Err(FormatError::UnknownMonth("Thermidor".to_string())));
}

#[test]
fn test_bad_prorata_marker_fails_the_record() {
    let result =
        row("Loyer Mars Mr Jean Dupont Chambre 3 Charge 50 (PRORATA 15/03)", dec!(200)).to_receipt(Locale::French);
    assert_eq!(result, Err(FormatError::ProrataShape("PRORATA 15/03".to_string())));
}
