//! The five dashboard aggregations, computed over the filtered table.
//!
//! All of them are read-only, deterministic, and independent of each other;
//! [`DashboardAggregates::compute`] runs them in one place so every
//! interaction hands the presentation layer a single consistent snapshot.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use time::Weekday;

use super::table::{EventRecord, EventTable};

/// Weekday rows of the heatmap, in display order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// How many products the ranking keeps.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// A labelled group size, used by the pie and bar rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// Dense weekday×hour visit counts. Unlike the hourly line, every one of
/// the 7×24 combinations is present, zero-filled — the heatmap needs the
/// full grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayHourMatrix {
    cells: [[u64; 24]; 7],
}

impl WeekdayHourMatrix {
    fn from_rows(rows: &[EventRecord]) -> Self {
        let mut cells = [[0u64; 24]; 7];
        for row in rows {
            cells[weekday_index(row.weekday)][row.hour as usize] += 1;
        }
        Self { cells }
    }

    pub fn get(&self, weekday: Weekday, hour: u8) -> u64 {
        self.cells[weekday_index(weekday)][hour as usize]
    }

    /// Rows Monday…Sunday, each a full 24-hour slice.
    pub fn rows(&self) -> impl Iterator<Item = (Weekday, &[u64; 24])> {
        WEEKDAYS.into_iter().zip(self.cells.iter())
    }

    pub fn max(&self) -> u64 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flat_map(|row| row.iter()).sum()
    }
}

fn weekday_index(weekday: Weekday) -> usize {
    weekday.number_days_from_monday() as usize
}

/// One consistent snapshot of everything the dashboard draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAggregates {
    /// Channel → row count, count-descending (pie input).
    pub channel_distribution: Vec<CategoryCount>,
    /// (hour, row count) ascending by hour; observed hours only, gaps are
    /// not zero-filled (line input).
    pub hourly_visits: Vec<(u8, u64)>,
    /// The ten most-clicked products, count-descending (bar input). Rows
    /// with no product click don't participate.
    pub top_products: Vec<CategoryCount>,
    /// Share of rows with `converted == "Yes"`, in percent. 0 when the
    /// table is empty.
    pub conversion_rate: f64,
    /// Dense weekday×hour counts (heatmap input).
    pub weekday_hour: WeekdayHourMatrix,
    pub total_rows: usize,
}

impl DashboardAggregates {
    pub fn compute(table: &EventTable) -> Self {
        let rows = table.rows();

        let channel_distribution = ranked_counts(rows.iter().map(|row| row.channel.as_str()));

        let mut by_hour: BTreeMap<u8, u64> = BTreeMap::new();
        for row in rows {
            *by_hour.entry(row.hour).or_insert(0) += 1;
        }
        let hourly_visits: Vec<(u8, u64)> = by_hour.into_iter().collect();

        let mut top_products = ranked_counts(
            rows.iter()
                .map(|row| row.product_clicked.as_str())
                .filter(|product| !product.is_empty()),
        );
        top_products.truncate(TOP_PRODUCTS_LIMIT);

        let converted = rows.iter().filter(|row| row.is_converted()).count();
        let conversion_rate = if rows.is_empty() {
            0.0
        } else {
            converted as f64 / rows.len() as f64 * 100.0
        };

        Self {
            channel_distribution,
            hourly_visits,
            top_products,
            conversion_rate,
            weekday_hour: WeekdayHourMatrix::from_rows(rows),
            total_rows: rows.len(),
        }
    }
}

/// Group sizes ordered by count descending; equal counts keep first-seen
/// row order (the stable sort leaves the insertion order untouched).
fn ranked_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for label in labels {
        if !counts.contains_key(label) {
            order.push(label);
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut ranked: Vec<CategoryCount> = order
        .into_iter()
        .map(|label| CategoryCount {
            count: counts[label],
            label: label.to_string(),
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
