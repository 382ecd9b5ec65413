//! Stable, content-derived row identifiers.
//!
//! Identical rows hash to identical ids, which lets downstream consumers
//! deduplicate re-imported statements.

use sha2::{Digest, Sha256};

use crate::types::TransactionRow;

/// SHA-256 over the row's output fields, truncated to 32 hex digits and
/// grouped `8-4-4-4-12` like a UUID. Fields are separated by a 0x1f byte so
/// adjacent fields cannot alias into the same digest.
pub fn row_id(row: &TransactionRow) -> String {
    let mut hasher = Sha256::new();
    for field in row.csv_fields() {
        hasher.update(field.as_bytes());
        hasher.update([0x1f]);
    }
    let hex = hex::encode(hasher.finalize());
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransactionRow {
        TransactionRow {
            trans_date: "2026-01-2".to_string(),
            post_date: "2026-01-2".to_string(),
            description: "PAYMENT RECEIVED - THANK YOU".to_string(),
            amount: -1234.56,
            source: "BMO Mastercard".to_string(),
        }
    }

    #[test]
    fn test_id_is_uuid_shaped() {
        let id = row_id(&sample());
        let groups: Vec<&str> = id.split('-').collect();
        let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
        assert!(
            groups
                .iter()
                .all(|g| g.chars().all(|c| c.is_ascii_hexdigit()))
        );
    }

    #[test]
    fn test_id_is_stable() {
        assert_eq!(row_id(&sample()), row_id(&sample()));
    }

    #[test]
    fn test_id_changes_with_any_field() {
        let base = row_id(&sample());

        let mut changed = sample();
        changed.amount = -1234.57;
        assert_ne!(row_id(&changed), base);

        let mut changed = sample();
        changed.description.push('!');
        assert_ne!(row_id(&changed), base);

        let mut changed = sample();
        changed.source = "BMO PLOC".to_string();
        assert_ne!(row_id(&changed), base);
    }

    #[test]
    fn test_field_boundaries_do_not_alias() {
        let a = sample();
        let mut b = sample();
        // Move a character across a field boundary; the digest must differ.
        b.trans_date = "2026-01-".to_string();
        b.post_date = "22026-01-2".to_string();
        assert_ne!(row_id(&a), row_id(&b));
    }
}
