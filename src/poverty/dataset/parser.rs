use std::collections::BTreeMap;
use std::io::Read;

use super::super::domain::{IndicatorKind, LocationRecord};

/// Parse a regional dataset export into location records.
///
/// Columns are matched against indicator keys and aliases; unknown columns,
/// blank cells, and non-numeric cells are skipped so partially filled exports
/// still import. A `name`/`location` column feeds the record name.
pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<LocationRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<BTreeMap<String, String>>() {
        let row = row?;
        let mut record = LocationRecord::new();

        for (column, cell) in &row {
            if cell.is_empty() {
                continue;
            }
            if column.eq_ignore_ascii_case("name") || column.eq_ignore_ascii_case("location") {
                record.name = Some(cell.clone());
                continue;
            }
            let Some(kind) = IndicatorKind::from_key(column) else {
                continue;
            };
            if let Ok(value) = cell.parse::<f64>() {
                record.set(kind, value);
            }
        }

        records.push(record);
    }

    Ok(records)
}
