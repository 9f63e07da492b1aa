//! CSV ingestion: uploaded bytes → [`EventTable`].
//!
//! The header row must carry every column in
//! [`REQUIRED_COLUMNS`](crate::core::table::REQUIRED_COLUMNS); anything else
//! is kept as-is and carried through to the export untouched. The timestamp
//! column is parsed against a fixed set of formats; the first cell that
//! matches none of them fails the whole upload (nothing downstream runs on a
//! half-parsed table).

use csv::ReaderBuilder;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use super::derive::time_features;
use super::error::IngestError;
use super::table::{EventRecord, EventTable, REQUIRED_COLUMNS};

/// Parse an uploaded CSV into an event table with derived columns attached.
pub fn parse_csv(bytes: &[u8]) -> Result<EventTable, IngestError> {
    let mut reader = ReaderBuilder::new().from_reader(strip_bom(bytes));
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut required = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| header == name)
            .ok_or(IngestError::MissingColumn(name))?;
    }
    let [ts_at, user_at, region_at, device_at, channel_at, product_at, converted_at] = required;

    // Input columns named like a derived column are shadowed: the derived
    // values replace them in the export, so the raw ones are dropped here.
    let shadowed: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.as_str() == "hour" || header.as_str() == "weekday")
        .map(|(index, _)| index)
        .collect();
    let kept_headers: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(index, _)| !shadowed.contains(index))
        .map(|(_, header)| header.clone())
        .collect();

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record?;
        let ts_raw = record.get(ts_at).unwrap_or("").trim();
        let timestamp = parse_timestamp(ts_raw).ok_or_else(|| IngestError::InvalidTimestamp {
            row: offset + 1,
            value: ts_raw.to_string(),
        })?;
        let (hour, weekday) = time_features(&timestamp);

        let raw: Vec<String> = record
            .iter()
            .enumerate()
            .filter(|(index, _)| !shadowed.contains(index))
            .map(|(_, cell)| cell.to_string())
            .collect();

        rows.push(EventRecord {
            raw,
            timestamp,
            user_id: cell(&record, user_at),
            region: cell(&record, region_at),
            device: cell(&record, device_at),
            channel: cell(&record, channel_at),
            product_clicked: cell(&record, product_at),
            converted: cell(&record, converted_at),
            hour,
            weekday,
        });
    }

    Ok(EventTable::new(kept_headers, rows))
}

fn cell(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

/// Spreadsheet exports routinely lead with a UTF-8 BOM; the csv reader would
/// otherwise fold it into the first header name.
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes)
}

/// Accepted timestamp shapes, most specific first. RFC 3339 keeps the clock
/// time of its own offset (no conversion); a bare date parses as midnight.
fn parse_timestamp(value: &str) -> Option<PrimitiveDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(PrimitiveDateTime::new(parsed.date(), parsed.time()));
    }

    for format in [
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]/[month]/[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ] {
        if let Ok(parsed) = PrimitiveDateTime::parse(value, format) {
            return Some(parsed);
        }
    }

    Date::parse(value, &format_description!("[year]-[month]-[day]"))
        .map(Date::midnight)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Weekday;

    const SAMPLE: &str = "\
timestamp,user_id,region,device,channel,product_clicked,converted,campaign
2024-07-01 09:15:00,u1,Seoul,mobile,organic,P100,Yes,summer
2024-07-01T22:05:00,u2,Busan,desktop,ads,,No,summer
2024-07-03,u3,Seoul,tablet,social,P300,Yes,
";

    #[test]
    fn parses_rows_and_derives_columns() {
        let table = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);

        let first = &table.rows()[0];
        assert_eq!(first.region, "Seoul");
        assert_eq!(first.channel, "organic");
        assert_eq!(first.hour, 9);
        assert_eq!(first.weekday, Weekday::Monday);

        // Date-only timestamps parse as midnight.
        let last = &table.rows()[2];
        assert_eq!(last.hour, 0);
        assert_eq!(last.weekday, Weekday::Wednesday);
    }

    #[test]
    fn derived_columns_stay_in_range() {
        let table = parse_csv(SAMPLE.as_bytes()).unwrap();
        for row in table.rows() {
            assert!(row.hour <= 23);
            assert!(!row.weekday_name().is_empty());
        }
    }

    #[test]
    fn extra_columns_are_preserved() {
        let table = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.headers().last().map(String::as_str), Some("campaign"));
        assert_eq!(table.rows()[0].raw.last().map(String::as_str), Some("summer"));
    }

    #[test]
    fn rfc3339_keeps_the_offsets_clock_time() {
        let csv = "\
timestamp,user_id,region,device,channel,product_clicked,converted
2024-07-01T09:15:00+09:00,u1,Seoul,mobile,organic,P100,Yes
";
        let table = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].hour, 9);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let csv = "timestamp,user_id,region,device,channel,converted\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn("product_clicked")
        ));
    }

    #[test]
    fn unparseable_timestamp_fails_with_row_and_value() {
        let csv = "\
timestamp,user_id,region,device,channel,product_clicked,converted
2024-07-01 09:15:00,u1,Seoul,mobile,organic,P100,Yes
not-a-date,u2,Busan,desktop,ads,P200,No
";
        match parse_csv(csv.as_bytes()).unwrap_err() {
            IngestError::InvalidTimestamp { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn headers_only_upload_yields_an_empty_table() {
        let csv = "timestamp,user_id,region,device,channel,product_clicked,converted\n";
        let table = parse_csv(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
        assert!(table.distinct_regions().is_empty());
    }

    #[test]
    fn utf8_bom_is_stripped_before_the_header() {
        let csv = format!("\u{feff}{SAMPLE}");
        let table = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.headers()[0], "timestamp");
    }

    #[test]
    fn hour_and_weekday_input_columns_are_shadowed() {
        let csv = "\
timestamp,user_id,region,device,channel,product_clicked,converted,hour
2024-07-01 09:15:00,u1,Seoul,mobile,organic,P100,Yes,99
";
        let table = parse_csv(csv.as_bytes()).unwrap();
        assert!(!table.headers().iter().any(|header| header == "hour"));
        assert_eq!(table.rows()[0].raw.len(), table.headers().len());
        assert_eq!(table.rows()[0].hour, 9);
    }
}
