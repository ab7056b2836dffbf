use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use enum_dispatch::enum_dispatch;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::receipt::calendar::{capitalize, first_day_of_month, last_day_of_month};
use crate::receipt::words::amount_to_words;
use crate::receipt::{FormatError, Locale, ReceiptRecord};

pub mod pdf;
pub mod template;


pub use pdf::{PdfRenderer, TexRenderer};
pub use template::Template;

const DATE_FORMAT: &str = "%d/%m/%Y";
const SIGNATURE_DAY: u32 = 15;
const PRORATA_SIGNATURE_DELAY: u64 = 2;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Format(#[from] FormatError),
    #[error("template uses unknown field `{0}`")]
    UnknownPlaceholder(String),
    #[error("template has an unclosed placeholder")]
    UnclosedPlaceholder,
    #[error("`{builder}` failed ({status}):\n{output}")]
    Builder { builder: String, status: String, output: String },
}

#[enum_dispatch]
pub trait RenderReceipt {
    /// Produces the document for `fields` at `target` and returns the path
    /// actually written.
    fn render(&self, fields: &RenderFields, target: &Path) -> Result<PathBuf, RenderError>;
}

#[enum_dispatch(RenderReceipt)]
pub enum Renderer {
    PdfRenderer,
    TexRenderer,
}

pub enum FieldValue<'a> {
    Text(&'a str),
    Path(&'a Path),
}

/// Everything the receipt template needs, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFields {
    pub month: String,
    pub tenant_header: String,
    pub tenant_text: String,
    pub signature_date: String,
    pub payment_date: String,
    pub rent_amount: String,
    pub charge_amount: String,
    pub total_amount: String,
    pub total_amount_words: String,
    pub period_start: String,
    pub period_end: String,
    pub signatures: [PathBuf; 2],
}

impl RenderFields {
    pub fn build(record: &ReceiptRecord, locale: Locale, signatures: &[PathBuf; 2]) -> Result<RenderFields, FormatError> {
        let month_name = locale
            .month_name(record.month())
            .ok_or_else(|| FormatError::UnknownMonth(record.month().to_string()))?;

        let split = record.split()?;
        let paid = record.paid_amount();

        let (period_start, period_end, signature_date) = match record.prorated_period() {
            Some(period) => (period.begin, period.end, after_payment(record.payment_date())?),
            None => (
                first_day_of_month(record.year(), record.month())?,
                last_day_of_month(record.year(), record.month())?,
                NaiveDate::from_ymd_opt(record.year(), record.month(), SIGNATURE_DAY)
                    .ok_or_else(|| FormatError::InvalidDate(format!("{}/{}", record.month(), record.year())))?,
            ),
        };

        Ok(RenderFields {
            month: locale.with_preposition(&capitalize(month_name)),
            tenant_header: record.tenant().to_string(),
            tenant_text: record.tenant().formal(),
            signature_date: signature_date.format(DATE_FORMAT).to_string(),
            payment_date: record.payment_date().format(DATE_FORMAT).to_string(),
            rent_amount: format_amount(split.rent),
            charge_amount: format_amount(split.charge),
            total_amount: format_amount(paid),
            total_amount_words: amount_to_words(paid),
            period_start: locale.long_date(period_start),
            period_end: locale.long_date(period_end),
            signatures: signatures.clone(),
        })
    }

    /// Looks a field up by its template name.
    pub fn get(&self, key: &str) -> Option<FieldValue<'_>> {
        let text = match key {
            "mois" => &self.month,
            "locataire_entete" => &self.tenant_header,
            "locataire_texte" => &self.tenant_text,
            "date_signature" => &self.signature_date,
            "date_paiement" => &self.payment_date,
            "montant_loyer" => &self.rent_amount,
            "montant_charge" => &self.charge_amount,
            "montant_total" => &self.total_amount,
            "montant_total_texte" => &self.total_amount_words,
            "debut_periode" => &self.period_start,
            "fin_periode" => &self.period_end,
            "signature_proprietaire1" => return Some(FieldValue::Path(&self.signatures[0])),
            "signature_proprietaire2" => return Some(FieldValue::Path(&self.signatures[1])),
            _ => return None,
        };

        Some(FieldValue::Text(text))
    }
}

fn after_payment(payment_date: NaiveDate) -> Result<NaiveDate, FormatError> {
    payment_date
        .checked_add_days(Days::new(PRORATA_SIGNATURE_DELAY))
        .ok_or_else(|| FormatError::InvalidDate(payment_date.to_string()))
}

/// Decimal-comma amount: "450", "272,58".
pub fn format_amount(amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if amount.fract().is_zero() {
        amount.trunc().to_string()
    } else {
        format!("{:.2}", amount).replace('.', ",")
    }
}

/// `{YYYY}_{MM}_loc{room}_{names}.pdf`
pub fn receipt_file_name(record: &ReceiptRecord) -> String {
    format!(
        "{}_{:02}_loc{}_{}.pdf",
        record.year(),
        record.month(),
        record.room_number(),
        record.tenant().names().join("_")
    )
}

/// Target path of a receipt. The directory is created when missing.
pub fn output_path(output_dir: &Path, record: &ReceiptRecord) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    Ok(output_dir.join(receipt_file_name(record)))
}
