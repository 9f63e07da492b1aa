#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially the
  dashboard cards, charts and export panel) remain present in the unified shared
  theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for charts, filters, export actions, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Dashboard layout & cards
    ".dashboard__grid",
    ".dashboard__sidebar",
    ".dashboard__charts",
    ".dashboard-card {",
    ".dashboard-card__header",
    ".dashboard-card__meta",
    ".dashboard-card__placeholder",
    ".dashboard-card__error",
    // Upload & filters
    ".upload-card__control",
    ".upload-card__input",
    ".upload-card__meta",
    ".filter-group {",
    ".filter-group__title",
    ".filter-group__option",
    // Pie chart & legend
    ".chart-pie__layout",
    ".chart-pie__legend",
    ".chart-legend__item",
    ".chart-legend__swatch",
    ".chart-legend__value",
    // Hourly line
    ".chart-line__svg",
    ".chart-line__axis",
    ".chart-line__tick",
    // Top products bars
    ".chart-bars__axes",
    ".chart-bars__row",
    ".chart-bars__track",
    ".chart-bars__fill",
    ".chart-bars__fill--leader",
    ".chart-bars__count",
    // Conversion metric tile
    ".metric-tile__label",
    ".metric-tile__value",
    ".metric-tile__meta",
    // Heatmap
    ".chart-heatmap__svg",
    ".chart-heatmap__row-label",
    ".chart-heatmap__tick",
    // Export panel
    ".export-panel__summary",
    ".export-panel__actions",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn grid_and_sidebar_stay_paired() {
    // Ensure the dashboard layout classes have expected pairing.
    let has_grid = THEME_CSS.contains(".dashboard__grid");
    let has_sidebar = THEME_CSS.contains(".dashboard__sidebar");
    assert!(
        has_grid && has_sidebar,
        "Dashboard layout sub‑selectors missing (grid: {has_grid}, sidebar: {has_sidebar})"
    );
}
