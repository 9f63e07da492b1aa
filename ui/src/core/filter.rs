//! Region/device filtering over the event table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::table::{EventRecord, EventTable};

/// The multi-select state of the two filter controls. Sets, so selection
/// order and duplicates are irrelevant; an empty set on either dimension
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub regions: BTreeSet<String>,
    pub devices: BTreeSet<String>,
}

impl FilterSelection {
    /// The default selection after an upload: every distinct region and
    /// device of the *unfiltered* table.
    pub fn all_of(table: &EventTable) -> Self {
        Self {
            regions: table.distinct_regions().into_iter().collect(),
            devices: table.distinct_devices().into_iter().collect(),
        }
    }

    pub fn matches(&self, row: &EventRecord) -> bool {
        self.regions.contains(&row.region) && self.devices.contains(&row.device)
    }

    pub fn toggle_region(&mut self, region: &str) {
        toggle(&mut self.regions, region);
    }

    pub fn toggle_device(&mut self, device: &str) {
        toggle(&mut self.devices, device);
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Restrict `table` to rows matching the selection on both dimensions.
/// Produces a new table with the same headers; the input is untouched.
pub fn apply(table: &EventTable, selection: &FilterSelection) -> EventTable {
    let rows = table
        .rows()
        .iter()
        .filter(|row| selection.matches(row))
        .cloned()
        .collect();
    EventTable::new(table.headers().to_vec(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::parse_csv;

    const SAMPLE: &str = "\
timestamp,user_id,region,device,channel,product_clicked,converted
2024-07-01 09:00:00,u1,A,mobile,organic,P1,Yes
2024-07-01 10:00:00,u2,A,desktop,ads,P2,No
2024-07-01 11:00:00,u3,B,mobile,organic,P1,Yes
";

    fn sample() -> EventTable {
        parse_csv(SAMPLE.as_bytes()).unwrap()
    }

    fn selection(regions: &[&str], devices: &[&str]) -> FilterSelection {
        FilterSelection {
            regions: regions.iter().map(|s| s.to_string()).collect(),
            devices: devices.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn full_default_selection_is_identity() {
        let table = sample();
        let filtered = apply(&table, &FilterSelection::all_of(&table));
        assert_eq!(filtered, table);
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = sample();
        let selection = selection(&["A"], &["mobile", "desktop"]);
        let once = apply(&table, &selection);
        let twice = apply(&once, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn both_dimensions_must_match() {
        let table = sample();
        let filtered = apply(&table, &selection(&["A"], &["mobile"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows()[0].user_id, "u1");
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let table = sample();
        assert!(apply(&table, &selection(&[], &["mobile"])).is_empty());
        assert!(apply(&table, &selection(&["A", "B"], &[])).is_empty());
    }

    #[test]
    fn toggling_flips_membership() {
        let table = sample();
        let mut selection = FilterSelection::all_of(&table);
        selection.toggle_region("A");
        assert!(!selection.regions.contains("A"));
        selection.toggle_region("A");
        assert!(selection.regions.contains("A"));
    }
}
