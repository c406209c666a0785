//! CSV output writer.

use std::fs::File;

use crate::chatlog::ChatLog;
use crate::error::Result;

/// Writes the log to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `User`, `Text`
/// - Encoding: UTF-8
pub fn write_csv(log: &ChatLog, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(log, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts the log to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing
/// to a file.
pub fn to_csv(log: &ChatLog) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(log, &mut writer)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(log: &ChatLog, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(["Date", "Time", "User", "Text"])?;
    for day in log {
        for msg in day.messages() {
            writer.write_record([day.date(), msg.time(), msg.user(), msg.text()])?;
        }
    }
    Ok(())
}
