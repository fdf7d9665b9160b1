//! Record parser: turns the rows of a time-tracking CSV export into
//! [`WorkLogEntry`] values.
//!
//! The export interleaves two kinds of rows:
//!
//! ```text
//! ,27/01/16            <- date marker: empty activity, DD/MM/YY in the time column
//! XXX-123 fix bug,30   <- work row: activity label and minutes
//! XXX-456 review,45
//! ```
//!
//! Every work row belongs to the last date marker above it. The current date
//! is threaded through an explicit [`ParserState`] fold, so each call to
//! [`parse_records`] starts from a clean state.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::contract::{RawRecord, WorkLogEntry};
use crate::error::ParseError;
use crate::issue::parse_issue;

/// Accumulator carried from row to row while parsing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParserState {
    pub current_date: Option<NaiveDate>,
}

/// Converts a `DD/MM/YY` marker such as `27/01/16` to `2016-01-27`.
///
/// The year is prefixed with `20`. Returns `None` when the marker does not
/// have three numeric parts, the year is not exactly two digits, or the
/// result is not a real calendar day.
pub fn convert_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    let day = day.trim().parse::<u32>().ok()?;
    let month = month.trim().parse::<u32>().ok()?;
    let year = year.trim();
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = format!("20{year}").parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// True when the row only carries a date for the rows that follow it.
pub fn is_date_marker(record: &RawRecord) -> bool {
    record.activity.is_empty() && record.time_in_minutes.contains('/')
}

fn parse_minutes(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(minutes) => minutes,
        Err(e) => {
            warn!(value = raw, error = %e, "Unreadable minute count, treating as 0");
            0
        }
    }
}

/// One step of the fold. Date markers update `state` and yield nothing;
/// work rows yield an entry stamped with the current date.
pub fn parse_record(state: &mut ParserState, record: &RawRecord) -> Option<WorkLogEntry> {
    if is_date_marker(record) {
        let date = convert_date(&record.time_in_minutes);
        if date.is_none() {
            warn!(marker = %record.time_in_minutes, "Date marker is not a valid DD/MM/YY date");
        }
        debug!(?date, "Date marker");
        state.current_date = date;
        return None;
    }

    let issue = parse_issue(&record.activity);
    Some(WorkLogEntry {
        date: state.current_date,
        issue_number: issue.number,
        description: issue.description,
        time_in_minutes: parse_minutes(&record.time_in_minutes),
    })
}

/// Parses all rows in file order.
pub fn parse_records<I>(records: I) -> Vec<WorkLogEntry>
where
    I: IntoIterator<Item = RawRecord>,
{
    let (_, entries) = records.into_iter().fold(
        (ParserState::default(), Vec::new()),
        |(mut state, mut entries), record| {
            if let Some(entry) = parse_record(&mut state, &record) {
                entries.push(entry);
            }
            (state, entries)
        },
    );
    entries
}

/// Validates a user supplied delimiter string.
pub fn delimiter_byte(delimiter: &str) -> Result<u8, ParseError> {
    match delimiter.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ParseError::Delimiter(delimiter.to_string())),
    }
}

/// Reads the two-column export. Lines starting with `#` are comments.
/// Surrounding whitespace is trimmed from every field.
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<RawRecord>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<RawRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = records.len(), "Read CSV rows");
    Ok(records)
}

/// Reads and parses the export at `path`.
pub fn read_worklog_file<P: AsRef<Path>>(
    path: P,
    delimiter: u8,
) -> Result<Vec<WorkLogEntry>, ParseError> {
    let path_ref = path.as_ref();
    info!(path = %path_ref.display(), "Reading worklog export");
    let file = File::open(path_ref)?;
    let entries = parse_records(read_records(file, delimiter)?);
    info!(entries = entries.len(), "Parsed worklog entries");
    Ok(entries)
}
