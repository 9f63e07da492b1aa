//! Session-scoped dashboard state and its interaction handlers.
//!
//! One value of [`DashboardSession`] holds everything a session owns: the
//! uploaded table, the current filter selection, and the last ingestion
//! error. The two handlers mirror the two user interactions; the read
//! accessors recompute from scratch every time, so a render always sees the
//! full pipeline re-run against the current state.

use super::aggregate::DashboardAggregates;
use super::error::ExportError;
use super::export;
use super::filter::{self, FilterSelection};
use super::ingest;
use super::table::EventTable;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSession {
    table: Option<EventTable>,
    selection: FilterSelection,
    error: Option<String>,
    source: Option<String>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest an uploaded file. On success the filter selection resets to
    /// the full distinct sets of the fresh (unfiltered) table; on failure
    /// the previous table is discarded and the error kept for display, so
    /// no downstream stage sees stale data.
    pub fn on_upload(&mut self, name: &str, bytes: &[u8]) {
        self.source = Some(name.to_string());
        match ingest::parse_csv(bytes) {
            Ok(table) => {
                self.selection = FilterSelection::all_of(&table);
                self.table = Some(table);
                self.error = None;
            }
            Err(err) => {
                self.table = None;
                self.selection = FilterSelection::default();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Replace the filter selection. A no-op until a table is loaded.
    pub fn on_filter_change(&mut self, selection: FilterSelection) {
        if self.table.is_some() {
            self.selection = selection;
        }
    }

    pub fn table(&self) -> Option<&EventTable> {
        self.table.as_ref()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The table restricted to the current selection. Recomputed per call.
    pub fn filtered_table(&self) -> Option<EventTable> {
        self.table
            .as_ref()
            .map(|table| filter::apply(table, &self.selection))
    }

    /// All five aggregations over the filtered table.
    pub fn aggregates(&self) -> Option<DashboardAggregates> {
        self.filtered_table()
            .map(|table| DashboardAggregates::compute(&table))
    }

    /// The filtered table as downloadable CSV bytes.
    pub fn export_csv(&self) -> Option<Result<Vec<u8>, ExportError>> {
        self.filtered_table()
            .map(|table| export::to_csv_bytes(&table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
timestamp,user_id,region,device,channel,product_clicked,converted
2024-07-01 09:00:00,u1,A,mobile,organic,P1,Yes
2024-07-01 10:00:00,u2,A,desktop,ads,P2,No
2024-07-01 11:00:00,u3,B,mobile,organic,P1,Yes
";

    #[test]
    fn upload_loads_the_table_and_defaults_the_selection() {
        let mut session = DashboardSession::new();
        session.on_upload("events.csv", SAMPLE.as_bytes());

        let table = session.table().expect("table loaded");
        assert_eq!(table.len(), 3);
        assert_eq!(session.source(), Some("events.csv"));
        assert!(session.error().is_none());
        // Defaults equal the distinct sets of the unfiltered table.
        assert_eq!(session.selection(), &FilterSelection::all_of(table));
    }

    #[test]
    fn failed_upload_discards_the_previous_table() {
        let mut session = DashboardSession::new();
        session.on_upload("events.csv", SAMPLE.as_bytes());
        session.on_upload("broken.csv", b"not,a,useful\nheader,row,either\n");

        assert!(session.table().is_none());
        assert!(session.filtered_table().is_none());
        let message = session.error().expect("error surfaced");
        assert!(message.contains("timestamp"));
    }

    #[test]
    fn filter_change_narrows_the_filtered_view_only() {
        let mut session = DashboardSession::new();
        session.on_upload("events.csv", SAMPLE.as_bytes());

        let mut selection = session.selection().clone();
        selection.toggle_region("B");
        session.on_filter_change(selection);

        assert_eq!(session.table().unwrap().len(), 3);
        assert_eq!(session.filtered_table().unwrap().len(), 2);
        let aggregates = session.aggregates().unwrap();
        assert!((aggregates.conversion_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filter_change_without_a_table_is_ignored() {
        let mut session = DashboardSession::new();
        let mut selection = FilterSelection::default();
        selection.toggle_region("A");
        session.on_filter_change(selection);
        assert_eq!(session.selection(), &FilterSelection::default());
    }

    #[test]
    fn reupload_resets_the_selection() {
        let mut session = DashboardSession::new();
        session.on_upload("events.csv", SAMPLE.as_bytes());

        let mut selection = session.selection().clone();
        selection.toggle_region("A");
        session.on_filter_change(selection);

        session.on_upload("events.csv", SAMPLE.as_bytes());
        let table = session.table().unwrap();
        assert_eq!(session.selection(), &FilterSelection::all_of(table));
    }

    #[test]
    fn export_covers_the_filtered_rows() {
        let mut session = DashboardSession::new();
        session.on_upload("events.csv", SAMPLE.as_bytes());

        let mut selection = session.selection().clone();
        selection.toggle_device("desktop");
        session.on_filter_change(selection);

        let bytes = session.export_csv().unwrap().unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        // Header plus the two mobile rows.
        assert_eq!(text.trim_end().lines().count(), 3);
        assert!(!text.contains("desktop"));
    }
}
