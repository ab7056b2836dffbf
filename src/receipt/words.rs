//! French spelled-out amounts ("quatre cent cinquante virgule cinq").

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze", "douze", "treize",
    "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = ["", "dix", "vingt", "trente", "quarante", "cinquante", "soixante"];

const SCALES: [(u64, &str); 3] = [(1_000_000_000_000, "billion"), (1_000_000_000, "milliard"), (1_000_000, "million")];

/// Spells out a non-negative amount. The fractional part, if any, is read
/// after "virgule" with its leading zeros spelled one by one.
pub fn amount_to_words(amount: Decimal) -> String {
    let amount = amount.abs().normalize();
    let integer = amount.trunc().to_u64().unwrap_or(u64::MAX);
    let mut words = integer_to_words(integer);

    let fract = amount.fract();
    if !fract.is_zero() {
        let digits = fract.to_string();
        let digits = digits.trim_start_matches("0.");
        let significant = digits.trim_start_matches('0');

        words.push_str(" virgule");
        for _ in 0..digits.len() - significant.len() {
            words.push_str(" zéro");
        }
        if let Ok(value) = significant.parse::<u64>() {
            words.push(' ');
            words.push_str(&integer_to_words(value));
        }
    }

    words
}

pub fn integer_to_words(n: u64) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut parts = Vec::new();
    let mut rest = n;

    for (scale, name) in SCALES {
        let count = rest / scale;
        rest %= scale;
        if count == 0 {
            continue;
        }
        let plural = if count > 1 { "s" } else { "" };
        parts.push(format!("{} {}{}", integer_to_words(count), name, plural));
    }

    let thousands = rest / 1000;
    rest %= 1000;
    match thousands {
        0 => {},
        1 => parts.push("mille".to_string()),
        n => parts.push(format!("{} mille", below_thousand(n, false))),
    }

    if rest > 0 {
        parts.push(below_thousand(rest, true));
    }

    parts.join(" ")
}

/// `last` tells whether the group ends the number: "cents" and "vingts" only
/// take their plural there.
fn below_thousand(n: u64, last: bool) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut words = match hundreds {
        0 => String::new(),
        1 => "cent".to_string(),
        h if rest == 0 && last => format!("{} cents", UNITS[h as usize]),
        h => format!("{} cent", UNITS[h as usize]),
    };

    if rest > 0 {
        if !words.is_empty() {
            words.push(' ');
        }
        words.push_str(&below_hundred(rest, last));
    }

    words
}

fn below_hundred(n: u64, last: bool) -> String {
    match n {
        0..=16 => UNITS[n as usize].to_string(),
        17..=19 => format!("dix-{}", UNITS[(n - 10) as usize]),
        20..=69 => {
            let (tens, unit) = (n / 10, n % 10);
            match unit {
                0 => TENS[tens as usize].to_string(),
                1 => format!("{} et un", TENS[tens as usize]),
                u => format!("{}-{}", TENS[tens as usize], UNITS[u as usize]),
            }
        },
        70..=79 if n == 71 => "soixante et onze".to_string(),
        70..=79 => format!("soixante-{}", below_hundred(n - 60, last)),
        80 if last => "quatre-vingts".to_string(),
        80 => "quatre-vingt".to_string(),
        _ => format!("quatre-vingt-{}", below_hundred(n - 80, last)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_numbers() {
        assert_eq!(integer_to_words(0), "zéro");
        assert_eq!(integer_to_words(16), "seize");
        assert_eq!(integer_to_words(17), "dix-sept");
        assert_eq!(integer_to_words(21), "vingt et un");
        assert_eq!(integer_to_words(42), "quarante-deux");
        assert_eq!(integer_to_words(70), "soixante-dix");
        assert_eq!(integer_to_words(71), "soixante et onze");
        assert_eq!(integer_to_words(77), "soixante-dix-sept");
        assert_eq!(integer_to_words(80), "quatre-vingts");
        assert_eq!(integer_to_words(81), "quatre-vingt-un");
        assert_eq!(integer_to_words(91), "quatre-vingt-onze");
        assert_eq!(integer_to_words(99), "quatre-vingt-dix-neuf");
    }

    #[test]
    fn test_hundreds_and_thousands() {
        assert_eq!(integer_to_words(100), "cent");
        assert_eq!(integer_to_words(200), "deux cents");
        assert_eq!(integer_to_words(201), "deux cent un");
        assert_eq!(integer_to_words(280), "deux cent quatre-vingts");
        assert_eq!(integer_to_words(450), "quatre cent cinquante");
        assert_eq!(integer_to_words(1000), "mille");
        assert_eq!(integer_to_words(1080), "mille quatre-vingts");
        assert_eq!(integer_to_words(2300), "deux mille trois cents");
        assert_eq!(integer_to_words(80_000), "quatre-vingt mille");
        assert_eq!(integer_to_words(200_000), "deux cent mille");
        assert_eq!(integer_to_words(2_000_000), "deux millions");
        assert_eq!(integer_to_words(1_000_001), "un million un");
    }

    #[test]
    fn test_amount_with_decimals() {
        assert_eq!(amount_to_words(dec!(450)), "quatre cent cinquante");
        assert_eq!(amount_to_words(dec!(450.00)), "quatre cent cinquante");
        assert_eq!(amount_to_words(dec!(450.5)), "quatre cent cinquante virgule cinq");
        assert_eq!(amount_to_words(dec!(120.25)), "cent vingt virgule vingt-cinq");
        assert_eq!(amount_to_words(dec!(12.05)), "douze virgule zéro cinq");
    }
}
