//! Free-text statement descriptions such as
//! `Loyer Mars Mr Jean Dupont Chambre 3 Charge 50 (PRORATA 15/03 -->)`.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::calendar::normalize_month;
use super::{Civility, FormatError, Tenant};

pub const PRORATA_KEYWORD: &str = "PRORATA";

const MONTH_POSITION: usize = 1;
const CIVILITY_POSITION: usize = 2;

/// Keywords announcing a value in the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMarker {
    Room,
    Charge,
}

impl FieldMarker {
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldMarker::Room => "Chambre",
            FieldMarker::Charge => "Charge",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDescription {
    pub month_name: String,
    pub room_number: u32,
    pub tenant: Tenant,
    pub charge_amount: Decimal,
    pub prorated_marker: Option<String>,
}

struct Tokens<'a> {
    source: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str, text: &'a str) -> Tokens<'a> {
        Tokens {
            source,
            tokens: text.split_whitespace().collect(),
        }
    }

    fn at(&self, idx: usize) -> Result<&'a str, FormatError> {
        self.tokens
            .get(idx)
            .copied()
            .ok_or_else(|| FormatError::TruncatedDescription(self.source.to_string()))
    }

    fn position(&self, marker: FieldMarker) -> Result<usize, FormatError> {
        self.tokens
            .iter()
            .position(|token| *token == marker.keyword())
            .ok_or_else(|| self.missing(marker))
    }

    fn value_after(&self, marker: FieldMarker) -> Result<&'a str, FormatError> {
        let idx = self.position(marker)?;
        self.tokens.get(idx + 1).copied().ok_or_else(|| self.missing(marker))
    }

    fn missing(&self, marker: FieldMarker) -> FormatError {
        FormatError::MissingField {
            marker: marker.keyword(),
            description: self.source.to_string(),
        }
    }
}

/// Splits the parenthesised prorata marker out of a description. Returns the
/// remaining text and the marker, if any.
pub fn split_prorata_marker(description: &str) -> Result<(String, Option<String>), FormatError> {
    if !description.contains(PRORATA_KEYWORD) {
        return Ok((description.to_string(), None));
    }

    let open = description
        .find('(')
        .ok_or_else(|| FormatError::ProrataShape(description.to_string()))?;
    let close = description[open..]
        .find(')')
        .map(|offset| open + offset)
        .ok_or_else(|| FormatError::ProrataShape(description.to_string()))?;

    let marker = description[open + 1..close].trim().to_string();
    let rest = format!("{} {}", &description[..open], &description[close + 1..]);

    Ok((rest, Some(marker)))
}

/// Decimal-comma or decimal-point amount, spaces ignored.
pub fn parse_amount(field: &'static str, value: &str) -> Result<Decimal, FormatError> {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    Decimal::from_str(&cleaned).map_err(|_| FormatError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl FromStr for ParsedDescription {
    type Err = FormatError;

    fn from_str(description: &str) -> Result<Self, Self::Err> {
        let (text, prorated_marker) = split_prorata_marker(description)?;
        let tokens = Tokens::new(description, &text);

        let month_name = normalize_month(tokens.at(MONTH_POSITION)?);

        let civility = tokens
            .at(CIVILITY_POSITION)?
            .parse::<Civility>()
            .map_err(|_| FormatError::UnknownCivility(description.to_string()))?;

        let room_idx = tokens.position(FieldMarker::Room)?;
        let room = tokens.value_after(FieldMarker::Room)?;
        let room_number = room.parse::<u32>().map_err(|_| FormatError::InvalidNumber {
            field: "room number",
            value: room.to_string(),
        })?;

        let charge_amount = parse_amount("charge amount", tokens.value_after(FieldMarker::Charge)?)?;

        let names = tokens.tokens.get(CIVILITY_POSITION + 1..room_idx).unwrap_or_default();
        let tenant =
            Tenant::new(civility, names.iter().copied()).map_err(|_| FormatError::MissingTenantName(description.to_string()))?;

        Ok(ParsedDescription {
            month_name,
            room_number,
            tenant,
            charge_amount,
            prorated_marker,
        })
    }
}
