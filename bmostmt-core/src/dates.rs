//! Date normalization: resolving `{{YEAR}} mmm d` tokens against the
//! statement's issuance date.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use crate::layout::YEAR_TOKEN;

/// Month number for a lowercase three-letter abbreviation.
pub fn month_number(abbr: &str) -> Option<u32> {
    match abbr {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Resolve one `{{YEAR}} mmm d` cell into a `YYYY-MM-D[D]` token.
///
/// Statements are issued on a cycle that can span a year boundary: a January
/// statement still carries late-December activity, so December rows inside a
/// January statement get `year - 1`. Everything else gets the statement's
/// own year.
pub fn fix_date(cell: &str, issued: NaiveDate) -> Result<String> {
    let token = YEAR_TOKEN.to_lowercase();
    let mut cell = cell.to_lowercase();

    if issued.month() == 1 && cell.contains("dec") {
        cell = cell.replace(&token, &(issued.year() - 1).to_string());
        cell = cell.replace("dec", "12");
    } else {
        cell = cell.replace(&token, &issued.year().to_string());
        let month = cell
            .split(' ')
            .nth(1)
            .with_context(|| format!("date cell missing month token: {cell:?}"))?
            .to_string();
        let number = month_number(&month)
            .with_context(|| format!("unknown month abbreviation: {month:?}"))?;
        cell = cell.replace(&month, &format!("{number:02}"));
    }

    Ok(cell.replace(' ', "-"))
}
