//! The statement pipeline: candidate-line selection, structural rewriting,
//! date normalization, and amount finishing.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::amounts::{collapse_spaces, parse_credit_amount, parse_currency};
use crate::dates::fix_date;
use crate::layout::{AmountRule, Layout};
use crate::types::TransactionRow;

/// Everything one parse run produces: the output rows, plus the candidate
/// lines the structural pattern could not parse. Rejected lines are
/// diagnostics for the caller to surface, never an error.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub rows: Vec<TransactionRow>,
    pub rejected: Vec<String>,
}

impl Layout {
    /// True iff this layout's identifying marker appears in the text.
    pub fn check(&self, text: &str) -> bool {
        self.identifier.is_match(text)
    }

    /// Run the full pipeline for this layout over extracted statement text.
    ///
    /// A document with no parseable transaction lines yields an empty
    /// report; a missing issuance date or malformed amount is fatal.
    pub fn parse(&self, text: &str) -> Result<ParseReport> {
        let issued = self.issuance_date(text)?;

        let mut rejected = Vec::new();
        let mut staged: Vec<Vec<String>> = Vec::new();

        for line in text.trim().lines().map(str::trim) {
            if !self.line_selector.is_match(line) {
                continue;
            }
            let Some(rewritten) = self.transform_line(line) else {
                rejected.push(line.to_string());
                continue;
            };
            if !self.format_filter.is_match(&rewritten) {
                continue;
            }

            let mut cells: Vec<String> = rewritten
                .split(self.column_separator)
                .map(|c| c.trim().to_string())
                .collect();
            if cells.len() != self.headers.len() {
                continue;
            }
            for &i in self.date_columns {
                cells[i] = fix_date(&cells[i], issued)?;
            }
            staged.push(cells);
        }

        let rows = self.finish_rows(staged)?;
        Ok(ParseReport { rows, rejected })
    }

    /// The statement's issuance date, extracted from the document itself.
    fn issuance_date(&self, text: &str) -> Result<NaiveDate> {
        let caps = self
            .statement_date
            .captures(text)
            .with_context(|| format!("no issuance date found ({})", self.source))?;
        let composed = format!("{} {} {}", &caps["year"], &caps["month"], &caps["day"]);
        NaiveDate::parse_from_str(&composed, self.statement_date_format)
            .with_context(|| format!("unparseable issuance date: {composed:?}"))
    }

    /// Rewrite one candidate line into delimited fields, or `None` when the
    /// structural pattern does not recognize it.
    fn transform_line(&self, line: &str) -> Option<String> {
        let caps = self.transform_from.captures(line)?;
        if let (Some(veto), Some(desc)) = (self.description_veto, caps.name("desc")) {
            if desc.as_str().ends_with(veto) {
                return None;
            }
        }
        let mut rewritten = String::new();
        caps.expand(self.transform_to, &mut rewritten);
        Some(rewritten)
    }

    fn finish_rows(&self, staged: Vec<Vec<String>>) -> Result<Vec<TransactionRow>> {
        match self.amount_rule {
            AmountRule::Direct => staged
                .iter()
                .map(|cells| {
                    let amount = parse_currency(&cells[cells.len() - 1])?;
                    Ok(self.build_row(cells, amount))
                })
                .collect(),

            AmountRule::RunningBalance => {
                let mut rows = Vec::new();
                let mut previous: Option<f64> = None;
                for cells in &staged {
                    let balance = parse_currency(&cells[cells.len() - 1])?;
                    // The first row is the opening baseline; it produces no
                    // output of its own.
                    if let Some(prev) = previous {
                        rows.push(self.build_row(cells, balance - prev));
                    }
                    previous = Some(balance);
                }
                Ok(rows)
            }

            AmountRule::CreditIndicator => staged
                .iter()
                .map(|cells| {
                    let amount = parse_credit_amount(&cells[cells.len() - 1])?;
                    let mut row = self.build_row(cells, amount);
                    row.description = collapse_spaces(&row.description);
                    Ok(row)
                })
                .collect(),
        }
    }

    fn build_row(&self, cells: &[String], amount: f64) -> TransactionRow {
        TransactionRow {
            trans_date: cells[0].clone(),
            post_date: cells[1].clone(),
            description: cells[2].clone(),
            amount,
            source: self.source.to_string(),
        }
    }
}
