//! CSV export of an optimizer search path.

use std::io::Write;

use bonus_core::SearchPoint;

/// Writes `bonus_part,total_tax` rows, one per search point, with a header.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] if writing fails.
pub fn write_search_path<W: Write>(
    writer: W,
    path: &[SearchPoint],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in path {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}
