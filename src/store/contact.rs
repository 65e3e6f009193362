//! Contact fields and end date (`optionalData.txt`).

use super::{CONTACT_FILE, LEGACY_END_DATE_FILE, RecordStore, read_optional};
use crate::error::Result;
use crate::record::ContactFields;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

/// Canonical on-disk date format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only formats accepted on read, besides [`DATE_FORMAT`].
const LENIENT_DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%m/%d/%Y", "%Y/%m/%d"];

/// Date-time formats accepted on read; the time part is dropped.
const LENIENT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Parse a stored end date. Accepts the canonical `yyyy-MM-dd` form plus the
/// date and date-time shapes older files were written with.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    std::iter::once(DATE_FORMAT)
        .chain(LENIENT_DATE_FORMATS.iter().copied())
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            LENIENT_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

impl RecordStore {
    /// Load contact fields from `dir`.
    ///
    /// Lines are taken positionally; each missing line keeps its default
    /// (sentinel text, or `now + 7 days` for the date). An unreadable file is
    /// logged and treated as absent.
    pub fn load_contact_fields(&self, dir: &Path, now: NaiveDateTime) -> ContactFields {
        let fields = ContactFields::defaults(now);
        let path = dir.join(CONTACT_FILE);

        let content = match read_optional(&path) {
            Ok(Some(content)) => content,
            Ok(None) => return fields,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable contact file; using defaults");
                return fields;
            }
        };

        let lines: Vec<&str> = content.lines().collect();
        let text = |n: usize, default: String| lines.get(n).map_or(default, |l| l.to_string());

        ContactFields {
            first_name: text(0, fields.first_name),
            last_name: text(1, fields.last_name),
            address: text(2, fields.address),
            phone_number: text(3, fields.phone_number),
            end_date: lines
                .get(4)
                .and_then(|l| parse_date(l))
                .unwrap_or(fields.end_date),
        }
    }

    /// Overwrite `optionalData.txt` with exactly five lines.
    pub fn save_contact_fields(&self, dir: &Path, fields: &ContactFields) -> Result<()> {
        fields.validate()?;

        let content = format!(
            "{}\n{}\n{}\n{}\n{}\n",
            fields.first_name,
            fields.last_name,
            fields.address,
            fields.phone_number,
            fields.end_date.format(DATE_FORMAT)
        );
        self.write(&dir.join(CONTACT_FILE), &content)
    }

    /// Write the secondary `endDate.txt` copy (date at midnight).
    pub fn save_legacy_end_date(&self, dir: &Path, end_date: NaiveDate) -> Result<()> {
        let stamp = end_date.and_time(NaiveTime::MIN).format("%Y-%m-%d %H:%M:%S");
        self.write(&dir.join(LEGACY_END_DATE_FILE), &stamp.to_string())
    }
}
