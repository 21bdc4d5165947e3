//! CSV export of a derived view.

use crate::entities::Record;
use crate::errors::Result;
use std::io::Write;

/// Writes `records` as CSV: the record type's export columns, then one row each.
pub fn write_csv<W: Write, R: Record>(writer: W, records: &[&R]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(R::EXPORT_COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.export_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}
