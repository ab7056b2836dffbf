//! Per-room YAML descriptor, one receipt per listed month:
//!
//! ```yaml
//! mois: janvier février
//! date_paiement: 03/01/2024 02/02/2024
//! annee: 2024
//! loyer: 450
//! charge: 50
//! locataire: Mr Jean Dupont
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::DataError;
use crate::receipt::calendar::parse_day_month_year;
use crate::receipt::{FormatError, Locale, ProratedPeriod, ReceiptRecord, Tenant};

#[derive(Debug, Deserialize)]
pub struct Descriptor {
    #[serde(rename = "mois")]
    pub months: String,
    #[serde(rename = "date_paiement")]
    pub payment_dates: String,
    #[serde(rename = "annee")]
    pub year: i32,
    #[serde(rename = "loyer")]
    pub rent: Decimal,
    pub charge: Decimal,
    #[serde(rename = "locataire")]
    pub tenant: String,
    /// Resolved prorated period: `BEGIN END AMOUNT`.
    #[serde(default)]
    pub customized: Option<String>,
    #[serde(rename = "chambre", default)]
    pub room: Option<u32>,
}

impl Descriptor {
    pub fn from_yaml(yaml: &str) -> Result<Descriptor, DataError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads a descriptor file. The room number comes from `room`, then from
    /// the `chambre` key, then from the digits ending the file name.
    pub fn load(path: impl AsRef<Path>, room: Option<u32>, locale: Locale) -> Result<Vec<ReceiptRecord>, DataError> {
        let path = path.as_ref();
        let descriptor = Descriptor::from_yaml(&fs::read_to_string(path)?)?;
        debug!("loaded descriptor {}", path.display());

        let room = match room.or(descriptor.room) {
            Some(room) => room,
            None => room_from_path(path)?,
        };

        Ok(descriptor.to_records(room, locale)?)
    }

    pub fn to_records(&self, room: u32, locale: Locale) -> Result<Vec<ReceiptRecord>, FormatError> {
        let months: Vec<&str> = self.months.split_whitespace().collect();
        let payment_dates: Vec<&str> = self.payment_dates.split_whitespace().collect();
        if months.len() != payment_dates.len() {
            return Err(FormatError::MismatchedLengths {
                months: months.len(),
                dates: payment_dates.len(),
            });
        }

        let tenant: Tenant = self.tenant.parse()?;
        let prorated_period = self.customized.as_deref().map(ProratedPeriod::from_resolved).transpose()?;
        if prorated_period.is_some() && months.len() > 1 {
            warn!("customized period applies to all {} months of the descriptor", months.len());
        }

        months
            .iter()
            .zip(payment_dates)
            .map(|(month, payment_date)| -> Result<ReceiptRecord, FormatError> {
                Ok(ReceiptRecord::new(
                    self.year,
                    locale.parse_month(month)?,
                    parse_day_month_year(payment_date)?,
                    room,
                    tenant.clone(),
                    self.rent,
                    self.charge,
                    prorated_period,
                ))
            })
            .collect()
    }
}

/// `quittance_chambre1.yml` -> 1
pub fn room_from_path(path: &Path) -> Result<u32, FormatError> {
    let unknown = || FormatError::UnknownRoom(path.display().to_string());

    let stem = path.file_stem().and_then(|stem| stem.to_str()).ok_or_else(unknown)?;
    let digits_start = stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();

    stem[digits_start..].parse().map_err(|_| unknown())
}
