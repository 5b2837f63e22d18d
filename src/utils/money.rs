//! Cost parsing and formatting helpers.
//! Costs are whole Uganda shillings: stored as numbers, displayed with
//! thousands separators, spelled out in words on the memo subject line.

use crate::errors::{AppError, AppResult};

/// Format an integer amount with thousands separators, e.g. 80000 -> "80,000".
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::new();

    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    let formatted: String = out.chars().rev().collect();
    if n < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Parse an amount that may carry thousands separators ("80,000" or "80000").
/// Returns None for blank input; Err for anything non-numeric.
pub fn parse_amount(s: &str) -> AppResult<Option<i64>> {
    let cleaned: String = s.chars().filter(|c| *c != ',' && *c != ' ').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }

    cleaned
        .parse::<f64>()
        .map(|v| Some(v.round() as i64))
        .map_err(|_| AppError::InvalidCost(s.to_string()))
}

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 5] = ["", " thousand", " million", " billion", " trillion"];

fn below_hundred(n: u64) -> String {
    if n < 20 {
        UNITS[n as usize].to_string()
    } else {
        let tens = TENS[(n / 10 - 2) as usize];
        if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{}-{}", tens, UNITS[(n % 10) as usize])
        }
    }
}

fn below_thousand(n: u64) -> String {
    if n < 100 {
        below_hundred(n)
    } else if n % 100 == 0 {
        format!("{} hundred", UNITS[(n / 100) as usize])
    } else {
        format!("{} hundred {}", UNITS[(n / 100) as usize], below_hundred(n % 100))
    }
}

/// Spell an amount in English words, e.g. 80000 -> "eighty thousand".
pub fn number_in_words(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    // Split into groups of three digits, least significant first
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    let mut parts = Vec::new();
    for (i, g) in groups.iter().enumerate().rev() {
        if *g == 0 {
            continue;
        }
        parts.push(format!("{}{}", below_thousand(*g), SCALES[i]));
    }

    parts.join(" ")
}
