use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use abr_model::{RawRecord, ReportTable, RowId};

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a Business Report CSV from disk into a [`ReportTable`].
///
/// The path doubles as the table's source id, which makes row ids stable for
/// repeated runs over the same file.
pub fn read_report(path: &Path) -> Result<ReportTable> {
    let file =
        File::open(path).with_context(|| format!("open report: {}", path.display()))?;
    read_report_from(file, &path.display().to_string())
}

/// Read a Business Report CSV from any reader.
///
/// The first non-blank row is the header; fully blank rows are skipped; short
/// rows are padded with empty cells and long rows truncated to the header
/// width. Fails only when the input itself is unreadable as CSV.
pub fn read_report_from<R: Read>(reader: R, source_id: &str) -> Result<ReportTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut table = ReportTable::new(source_id, Vec::new());
    let mut record_number = 0u64;

    for record in csv_reader.records() {
        let record = record.with_context(|| format!("read record: {source_id}"))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        let Some(headers) = headers.as_ref() else {
            table.headers = row.clone();
            headers = Some(row);
            continue;
        };
        record_number += 1;
        let mut cells = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(idx).cloned().unwrap_or_default();
            cells.insert(header.clone(), value);
        }
        table.push_record(RawRecord {
            id: RowId::derive(source_id, record_number),
            record_number,
            cells,
        });
    }

    debug!(
        source_id,
        columns = table.headers.len(),
        records = table.records.len(),
        "report loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_headers_and_records() {
        let data = "SKU,Sessions – Total,Ordered Product Sales\nAB-1,\"1,000\",£500.00\nCD-2,0,£0.00\n";
        let table = read_report_from(data.as_bytes(), "test.csv").expect("read report");
        assert_eq!(
            table.headers,
            vec!["SKU", "Sessions – Total", "Ordered Product Sales"]
        );
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].cell("SKU"), "AB-1");
        assert_eq!(table.records[0].cell("Sessions – Total"), "1,000");
        assert_eq!(table.records[1].cell("Ordered Product Sales"), "£0.00");
    }

    #[test]
    fn skips_blank_rows_and_pads_short_ones() {
        let data = "A,B\n\n1\n,,\n2,3\n";
        let table = read_report_from(data.as_bytes(), "test.csv").expect("read report");
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].cell("A"), "1");
        assert_eq!(table.records[0].cell("B"), "");
        assert_eq!(table.records[1].cell("B"), "3");
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = read_report_from("".as_bytes(), "empty.csv").expect("read report");
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn record_numbers_and_ids_are_stable() {
        let data = "SKU\nAB-1\nCD-2\n";
        let table = read_report_from(data.as_bytes(), "test.csv").expect("read report");
        let again = read_report_from(data.as_bytes(), "test.csv").expect("read report");
        assert_eq!(table.records[0].record_number, 1);
        assert_eq!(table.records[1].record_number, 2);
        assert_eq!(table.records[0].id, again.records[0].id);
        assert_ne!(table.records[0].id, table.records[1].id);
    }

    #[test]
    fn reads_from_a_file_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.csv");
        let mut file = File::create(&path).expect("create file");
        file.write_all(b"SKU,Units ordered\nAB-1,5\n")
            .expect("write file");

        let table = read_report(&path).expect("read report");
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].cell("Units ordered"), "5");
        assert_eq!(table.source_id, path.display().to_string());
    }

    #[test]
    fn missing_file_is_a_structural_error() {
        let err = read_report(Path::new("/nonexistent/report.csv")).unwrap_err();
        assert!(err.to_string().contains("open report"));
    }
}
