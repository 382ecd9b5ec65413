use serde::Serialize;

/// Normalized output of the statement pipeline (layout-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    /// Date the transaction occurred, as `YYYY-MM-D[D]`.
    pub trans_date: String,
    /// Date the transaction posted, as `YYYY-MM-D[D]`.
    pub post_date: String,
    pub description: String,
    /// Positive means charge/debit; negative means credit/refund.
    pub amount: f64,
    /// Label of the statement layout that produced this row.
    pub source: String,
}

impl TransactionRow {
    /// The row's fields in output column order, amounts with two decimals.
    pub fn csv_fields(&self) -> [String; 5] {
        [
            self.trans_date.clone(),
            self.post_date.clone(),
            self.description.clone(),
            format!("{:.2}", self.amount),
            self.source.clone(),
        ]
    }
}
