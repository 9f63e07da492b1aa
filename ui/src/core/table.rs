//! The in-memory event table: one row per customer interaction.

use time::{PrimitiveDateTime, Weekday};

/// Header names the ingestion step requires, in the order downstream code
/// refers to them.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "timestamp",
    "user_id",
    "region",
    "device",
    "channel",
    "product_clicked",
    "converted",
];

/// The `converted` value that counts as a successful conversion.
pub const CONVERTED_YES: &str = "Yes";

/// One parsed event. Typed fields drive filtering and aggregation; `raw`
/// keeps every original cell (aligned with [`EventTable::headers`]) so the
/// export reproduces the upload byte-for-byte, extra columns included.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub raw: Vec<String>,
    pub timestamp: PrimitiveDateTime,
    pub user_id: String,
    pub region: String,
    pub device: String,
    pub channel: String,
    /// Empty when the upload left the cell blank (no product clicked).
    pub product_clicked: String,
    pub converted: String,
    /// Derived: hour-of-day, 0–23, in whatever offset the timestamp carried.
    pub hour: u8,
    /// Derived: day of week of the timestamp.
    pub weekday: Weekday,
}

impl EventRecord {
    pub fn is_converted(&self) -> bool {
        self.converted == CONVERTED_YES
    }

    /// Full English weekday name ("Monday" … "Sunday").
    pub fn weekday_name(&self) -> String {
        self.weekday.to_string()
    }
}

/// The uploaded table after parsing and derivation. `headers` is the
/// original header row (minus any column shadowed by a derived one);
/// the derived `hour`/`weekday` columns live on the records and are
/// appended by the export step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventTable {
    headers: Vec<String>,
    rows: Vec<EventRecord>,
}

impl EventTable {
    pub fn new(headers: Vec<String>, rows: Vec<EventRecord>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[EventRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct regions in first-seen row order (the order the filter
    /// controls list their options in).
    pub fn distinct_regions(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|row| row.region.as_str()))
    }

    /// Distinct devices in first-seen row order.
    pub fn distinct_devices(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|row| row.device.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::parse_csv;

    const SAMPLE: &str = "\
timestamp,user_id,region,device,channel,product_clicked,converted
2024-07-01 09:15:00,u1,Seoul,mobile,organic,P100,Yes
2024-07-01 10:30:00,u2,Busan,desktop,ads,P200,No
2024-07-02 09:45:00,u3,Seoul,mobile,organic,P100,No
";

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let table = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.distinct_regions(), vec!["Seoul", "Busan"]);
        assert_eq!(table.distinct_devices(), vec!["mobile", "desktop"]);
    }

    #[test]
    fn weekday_names_are_full_english() {
        let table = parse_csv(SAMPLE.as_bytes()).unwrap();
        // 2024-07-01 was a Monday.
        assert_eq!(table.rows()[0].weekday_name(), "Monday");
        assert_eq!(table.rows()[2].weekday_name(), "Tuesday");
    }
}
