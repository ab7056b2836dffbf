//! Month names and date formatting. The language is always an explicit
//! [`Locale`] argument; nothing here reads process-wide locale state.

use chrono::{Datelike, Days, NaiveDate};

use super::FormatError;

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Legacy single-byte characters found in bank exports, mapped to the letters
/// they stand for.
const MISENCODED: [(char, char); 2] = [('\u{9e}', 'û'), ('\u{8e}', 'é')];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    French,
}

impl Locale {
    /// Lower-case month name, `month` in 1..=12.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        match self {
            Locale::French => FRENCH_MONTHS.get(month.checked_sub(1)? as usize).copied(),
        }
    }

    /// Month number of a month name, ignoring case and accents.
    pub fn parse_month(&self, name: &str) -> Result<u32, FormatError> {
        let wanted = fold(&normalize_month(name));
        match self {
            Locale::French => FRENCH_MONTHS
                .iter()
                .position(|month| fold(month) == wanted)
                .map(|idx| idx as u32 + 1)
                .ok_or_else(|| FormatError::UnknownMonth(name.to_string())),
        }
    }

    /// "de Janvier", "d'Août".
    pub fn with_preposition(&self, word: &str) -> String {
        match self {
            Locale::French => de_elision(word),
        }
    }

    /// "1er mars 2024", "15 mars 2024".
    pub fn long_date(&self, date: NaiveDate) -> String {
        let month = self.month_name(date.month()).unwrap_or_default();
        match self {
            Locale::French if date.day() == 1 => format!("1er {} {}", month, date.year()),
            Locale::French => format!("{} {} {}", date.day(), month, date.year()),
        }
    }
}

/// Replaces the known mis-encoded letters. Applying it twice changes nothing.
pub fn normalize_month(name: &str) -> String {
    MISENCODED
        .iter()
        .fold(name.to_string(), |acc, (bad, good)| acc.replace(*bad, &good.to_string()))
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Prepends "d'" before a vowel-initial word and "de " otherwise.
pub fn de_elision(word: &str) -> String {
    let vowel = word
        .chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'o' | 'u' | 'y'))
        .unwrap_or(false);

    if vowel {
        format!("d'{}", word)
    } else {
        format!("de {}", word)
    }
}

pub fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDate, FormatError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| FormatError::InvalidDate(format!("{:02}/{}", month, year)))
}

pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, FormatError> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    first_day_of_month(next_year, next_month)?
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| FormatError::InvalidDate(format!("{:02}/{}", month, year)))
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, FormatError> {
    Ok(last_day_of_month(year, month)?.day())
}

/// Parses `DD/MM/YYYY` or `DD/MM/YY`.
pub fn parse_day_month_year(s: &str) -> Result<NaiveDate, FormatError> {
    let s = s.trim();
    let year_len = s.rsplit('/').next().map(str::len).unwrap_or(0);
    let format = if year_len == 2 { "%d/%m/%y" } else { "%d/%m/%Y" };
    NaiveDate::parse_from_str(s, format).map_err(|_| FormatError::InvalidDate(s.to_string()))
}

fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'û' | 'ù' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
