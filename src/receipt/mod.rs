use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod calendar;
pub mod description;
pub mod prorata;
pub mod record;
pub mod words;

#[cfg(test)]
mod description_tests;
#[cfg(test)]
mod record_tests;

pub use calendar::Locale;
pub use description::ParsedDescription;
pub use prorata::{AmountSplit, ProratedPeriod};
pub use record::{ReceiptRecord, StatementRow};

/// Malformed or unrecognized input shape. Never recovered: the run stops on
/// the first one.
#[derive(Debug, PartialEq, Error)]
pub enum FormatError {
    #[error("tenant civility cannot be identified in `{0}`")]
    UnknownCivility(String),
    #[error("tenant name is missing in `{0}`")]
    MissingTenantName(String),
    #[error("description is too short: `{0}`")]
    TruncatedDescription(String),
    #[error("`{marker}` is missing or has no value in `{description}`")]
    MissingField { marker: &'static str, description: String },
    #[error("invalid {field} `{value}`")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown month `{0}`")]
    UnknownMonth(String),
    #[error("invalid date `{0}`")]
    InvalidDate(String),
    #[error("prorata rent does not respect the expected format: `{0}`")]
    ProrataShape(String),
    #[error("prorata period `{0}` cannot be split")]
    ProrataAmount(String),
    #[error("one rent is not classified as income: `{0}`")]
    IncomeExpenseConflict(String),
    #[error("rent row has no income: `{0}`")]
    MissingIncome(String),
    #[error("missing column `{0}`")]
    MissingColumn(&'static str),
    #[error("{months} value(s) for `mois` but {dates} value(s) for `date_paiement`")]
    MismatchedLengths { months: usize, dates: usize },
    #[error("room number cannot be inferred from `{0}`")]
    UnknownRoom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Civility {
    Mr,
    Mme,
    Mlle,
}

impl Civility {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Civility::Mr => "Mr",
            Civility::Mme => "Mme",
            Civility::Mlle => "Mlle",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Civility::Mr => "Monsieur",
            Civility::Mme => "Madame",
            Civility::Mlle => "Mademoiselle",
        }
    }
}

impl FromStr for Civility {
    type Err = FormatError;

    /// Exact, case-sensitive match. `M.` and friends are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mr" => Ok(Civility::Mr),
            "Mme" => Ok(Civility::Mme),
            "Mlle" => Ok(Civility::Mlle),
            other => Err(FormatError::UnknownCivility(other.to_string())),
        }
    }
}

/// A tenant as written on the receipt header: civility followed by name tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    civility: Civility,
    names: Vec<String>,
}

impl Tenant {
    pub fn new<I, S>(civility: Civility, names: I) -> Result<Tenant, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(FormatError::MissingTenantName(civility.abbreviation().to_string()));
        }

        Ok(Tenant { civility, names })
    }

    pub fn civility(&self) -> Civility {
        self.civility
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// "Mr Jean Dupont" -> "Monsieur Jean Dupont"
    pub fn formal(&self) -> String {
        format!("{} {}", self.civility.title(), self.names.join(" "))
    }
}

impl FromStr for Tenant {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let civility = match tokens.next() {
            Some(token) => token.parse::<Civility>().map_err(|_| FormatError::UnknownCivility(s.to_string()))?,
            None => return Err(FormatError::UnknownCivility(s.to_string())),
        };

        Tenant::new(civility, tokens).map_err(|_| FormatError::MissingTenantName(s.to_string()))
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.civility.abbreviation(), self.names.join(" "))
    }
}

/// Expands the leading civility of a tenant line, keeping the name verbatim.
pub fn expand_civility(tenant: &str) -> Result<String, FormatError> {
    Ok(tenant.parse::<Tenant>()?.formal())
}
