//! Layout definitions for the supported BMO statement formats.
//!
//! Each layout is a plain configuration record: the patterns that identify
//! a statement, shortlist its transaction lines, rewrite them into `|`
//! delimited fields, and the rule that finishes the amount column. There is
//! no shared default behavior; every layout spells out its configuration.

use anyhow::Result;
use regex::Regex;

/// Placeholder written into rewritten rows where the statement year belongs.
/// Resolved by [`crate::dates::fix_date`].
pub const YEAR_TOKEN: &str = "{{YEAR}}";

/// Output column names, shared by every supported layout.
const HEADERS: &[&str] = &["TransactionDate", "PostingDate", "Description", "Amount"];

/// Cheap pre-filter: lines that begin with something resembling a
/// transaction date (a month abbreviation, optionally preceded by
/// digits/spaces). Not the authoritative structural check.
const LINE_SELECTOR: &str = r"^[ 0-9]*(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)";

/// Rewritten rows must begin with a year-prefixed date token.
const FORMAT_FILTER: &str = r"^\{\{YEAR\}\} [A-Za-z]{3,} [0-9]{1,2}";

/// How a layout's trailing amount column becomes a signed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRule {
    /// Strip the currency symbol and thousands separators, parse as-is.
    Direct,
    /// The trailing column is a running balance; the amount of row `i` is
    /// `balance[i] - balance[i-1]` and the first row is consumed as the
    /// opening baseline.
    RunningBalance,
    /// A trailing `CR` marker flips the sign (credit); repeated whitespace
    /// in the description is collapsed.
    CreditIndicator,
}

/// One supported statement format. Immutable after construction.
pub struct Layout {
    /// Label appended to every output row as `RecordSource`.
    pub source: &'static str,
    /// Identifies which statement format a document belongs to.
    pub identifier: Regex,
    /// Coarse candidate-line filter, anchored at line start.
    pub line_selector: Regex,
    /// Structural rewrite: match side, with named groups.
    pub transform_from: Regex,
    /// Structural rewrite: replacement template producing
    /// `{{YEAR}} mmm d|{{YEAR}} mmm d|description|amount`.
    pub transform_to: &'static str,
    /// Lines whose `desc` group ends with this text are not transactions
    /// (summary rows that would otherwise satisfy the structural pattern).
    pub description_veto: Option<&'static str>,
    /// Validates the rewritten line shape; failures are dropped silently.
    pub format_filter: Regex,
    pub column_separator: char,
    pub headers: &'static [&'static str],
    /// Column indices holding `{{YEAR}} mmm d` date tokens.
    pub date_columns: &'static [usize],
    /// Locates the statement's issuance date; named groups
    /// `month`, `day`, `year`.
    pub statement_date: Regex,
    /// chrono format for `"<year> <month> <day>"` as captured above.
    pub statement_date_format: &'static str,
    pub amount_rule: AmountRule,
}

/// All supported layouts, in matching priority order. The first layout whose
/// identifier matches a document consumes it.
pub fn builtin_layouts() -> Result<Vec<Layout>> {
    Ok(vec![
        account_layout(
            "Primary Chequing Account # [0-9]+[0-9 ]*",
            "BMO Chequing Account",
        )?,
        account_layout(
            "Savings Builder Account # [0-9]+[0-9 ]*",
            "BMO Savings Account",
        )?,
        account_layout("Smart Saver Account # [0-9]+[0-9 ]*", "BMO Savings Account")?,
        line_of_credit_layout()?,
        mastercard_layout()?,
    ])
}

/// Chequing and savings statements share one shape: `mmm d  description
/// amount  balance`, with an `Opening balance` first row and a
/// `Closing totals` summary row, and a running balance instead of signed
/// amounts.
fn account_layout(identifier: &str, source: &'static str) -> Result<Layout> {
    Ok(Layout {
        source,
        identifier: Regex::new(identifier)?,
        line_selector: Regex::new(LINE_SELECTOR)?,
        transform_from: Regex::new(concat!(
            r"^(?P<date>[A-Za-z]+ [0-9]+) *",
            r"(?:(?P<open>Opening balance)|(?P<desc>.*[^ ]) +[^ ]+)",
            r" {2,}(?P<bal>[0-9,.$-]+\.[0-9]{2})$"
        ))?,
        // Exactly one of `open`/`desc` is non-empty, so concatenating them
        // yields the description either way.
        transform_to: "{{YEAR}} ${date}|{{YEAR}} ${date}|${open}${desc}|${bal}",
        description_veto: Some("Closing totals"),
        format_filter: Regex::new(FORMAT_FILTER)?,
        column_separator: '|',
        headers: HEADERS,
        date_columns: &[0, 1],
        statement_date: Regex::new(
            r"For the period ending (?P<month>[A-Z][a-z]+) (?P<day>[0-9]+), (?P<year>[0-9]{4})",
        )?,
        statement_date_format: "%Y %B %d",
        amount_rule: AmountRule::RunningBalance,
    })
}

/// Personal Line of Credit: two `mmm d` dates, description, then the amount
/// with an attached `CR` marker for credits.
fn line_of_credit_layout() -> Result<Layout> {
    Ok(Layout {
        source: "BMO PLOC",
        identifier: Regex::new("YOUR PERSONAL LINE OF CREDIT")?,
        line_selector: Regex::new(LINE_SELECTOR)?,
        transform_from: Regex::new(concat!(
            r"^[ 0-9]*(?P<m1>[A-Za-z]+)\.? +(?P<d1>[0-9]+)",
            r" +(?P<m2>[A-Za-z]+)\.? +(?P<d2>[0-9]+)",
            r" +(?P<desc>.*[^ ]) {4,}(?P<amt>[0-9,.CR]+) *.*$"
        ))?,
        transform_to: "{{YEAR}} ${m1} ${d1}|{{YEAR}} ${m2} ${d2}|${desc}|${amt}",
        description_veto: None,
        format_filter: Regex::new(FORMAT_FILTER)?,
        column_separator: '|',
        headers: HEADERS,
        date_columns: &[0, 1],
        statement_date: Regex::new(
            r"Stmt\. date: (?P<month>[A-Z][a-z]{2})\.? (?P<day>[0-9]+), (?P<year>[0-9]{4})",
        )?,
        statement_date_format: "%Y %b %d",
        amount_rule: AmountRule::CreditIndicator,
    })
}

/// AIR MILES World / World Elite Mastercard: two dates, description, a
/// reference-number column (or a blank gap of column width), then the
/// amount with an optional `CR` suffix.
fn mastercard_layout() -> Result<Layout> {
    Ok(Layout {
        source: "BMO Mastercard",
        identifier: Regex::new(r"(?m)^ *BMO AIR MILES World (?:Elite)? *Master[Cc]ard")?,
        line_selector: Regex::new(LINE_SELECTOR)?,
        transform_from: Regex::new(concat!(
            r"(?P<m1>[A-Za-z]+)\.? +(?P<d1>[0-9]+)",
            r" +(?P<m2>[A-Za-z]+)\.? +(?P<d2>[0-9]+)",
            r" +(?P<desc>[^ ].*[^ ]) +",
            r"(?:(?:[0-9A-Z]{12}|[0-9]{5}[ -][0-9]{6}|[A-Z0-9][0-9]{6} [A-Z]{4}) +| {30} +) ",
            r"(?P<amt>[0-9,]+\.[0-9]{2} ?(?:CR)?)$"
        ))?,
        transform_to: "{{YEAR}} ${m1} ${d1}|{{YEAR}} ${m2} ${d2}|${desc}|${amt}",
        description_veto: None,
        format_filter: Regex::new(FORMAT_FILTER)?,
        column_separator: '|',
        headers: HEADERS,
        date_columns: &[0, 1],
        statement_date: Regex::new(
            r"New Balance, (?P<month>[A-Z][a-z]{2})\.? (?P<day>[0-9]+), (?P<year>[0-9]{4})",
        )?,
        statement_date_format: "%Y %b %d",
        amount_rule: AmountRule::CreditIndicator,
    })
}
