//! CSV emission.

use std::io::Write;

use anyhow::Result;

use bmostmt_core::{Layout, TransactionRow, row_id};

/// Write the header and one record per row. With `with_id`, each record is
/// prefixed by its content-hash identifier.
pub fn write_csv<W: Write>(
    writer: W,
    layout: &Layout,
    rows: &[TransactionRow],
    with_id: bool,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = Vec::new();
    if with_id {
        header.push("Id");
    }
    header.extend(layout.headers);
    header.push("RecordSource");
    wtr.write_record(&header)?;

    for row in rows {
        let mut record: Vec<String> = Vec::new();
        if with_id {
            record.push(row_id(row));
        }
        record.extend(row.csv_fields());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmostmt_core::builtin_layouts;

    fn sample_rows() -> Vec<TransactionRow> {
        vec![
            TransactionRow {
                trans_date: "2025-12-29".to_string(),
                post_date: "2025-12-29".to_string(),
                description: "INTERAC e-Transfer Received".to_string(),
                amount: 1200.0,
                source: "BMO Chequing Account".to_string(),
            },
            TransactionRow {
                trans_date: "2026-01-2".to_string(),
                post_date: "2026-01-2".to_string(),
                description: "Premium Plan fee".to_string(),
                amount: -8.0,
                source: "BMO Chequing Account".to_string(),
            },
        ]
    }

    fn chequing_layout() -> Layout {
        builtin_layouts()
            .unwrap()
            .into_iter()
            .find(|l| l.source == "BMO Chequing Account")
            .unwrap()
    }

    #[test]
    fn test_header_and_rows_without_ids() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &chequing_layout(), &sample_rows(), false).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "TransactionDate,PostingDate,Description,Amount,RecordSource"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2025-12-29,2025-12-29,INTERAC e-Transfer Received,1200.00,BMO Chequing Account"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2026-01-2,2026-01-2,Premium Plan fee,-8.00,BMO Chequing Account"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_id_column_is_prefixed_and_uuid_shaped() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &chequing_layout(), &sample_rows(), true).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("Id,TransactionDate"));

        let first = lines.next().unwrap();
        let id = first.split(',').next().unwrap();
        let lengths: Vec<usize> = id.split('-').map(|g| g.len()).collect();
        assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
    }

    #[test]
    fn test_output_is_byte_deterministic() {
        let layout = chequing_layout();
        let rows = sample_rows();

        let mut a = Vec::new();
        let mut b = Vec::new();
        write_csv(&mut a, &layout, &rows, true).unwrap();
        write_csv(&mut b, &layout, &rows, true).unwrap();
        assert_eq!(a, b);
    }
}
