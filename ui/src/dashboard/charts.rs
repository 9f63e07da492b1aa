//! Geometry and color helpers shared by the SVG charts.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Slice colors for the pie, cycled when a table has more channels.
pub const PALETTE: [&str; 10] = [
    "#4C78A8", "#F58518", "#54A24B", "#E45756", "#72B7B2", "#EECA3B", "#B279A2", "#FF9DA6",
    "#9D755D", "#BAB0AC",
];

/// Stroke color of the hourly line.
pub const LINE_COLOR: &str = "#4C78A8";

/// Heat ramp stops, low to high (yellow → green → blue, the colormap the
/// heatmap's gradient interpolates between).
const HEAT_STOPS: [(u8, u8, u8); 4] = [(255, 255, 217), (199, 233, 180), (65, 182, 196), (34, 94, 168)];

/// SVG path for a pie slice covering `[start, end]` as fractions of the
/// whole, starting at 12 o'clock and sweeping clockwise. Callers handle the
/// degenerate full-circle slice themselves (an arc from a point to itself
/// renders as nothing).
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let angle = |fraction: f64| TAU * fraction - FRAC_PI_2;
    let (x1, y1) = on_circle(cx, cy, r, angle(start));
    let (x2, y2) = on_circle(cx, cy, r, angle(end));
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!("M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
}

fn on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Plot coordinates for an (hour, count) series inside a `width`×`height`
/// viewport with `pad` margins. X spreads over the observed hour range
/// (a single observed hour sits at the left edge), Y is normalised to the
/// series maximum.
pub fn line_points(series: &[(u8, u64)], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    if series.is_empty() {
        return Vec::new();
    }

    let min_hour = series.first().map(|(hour, _)| *hour as f64).unwrap_or(0.0);
    let max_hour = series.last().map(|(hour, _)| *hour as f64).unwrap_or(0.0);
    let hour_span = (max_hour - min_hour).max(1.0);
    let max_count = series
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(1)
        .max(1) as f64;

    series
        .iter()
        .map(|(hour, count)| {
            let x = pad + (*hour as f64 - min_hour) / hour_span * (width - 2.0 * pad);
            let y = height - pad - *count as f64 / max_count * (height - 2.0 * pad);
            (x, y)
        })
        .collect()
}

/// `points` attribute for an SVG polyline.
pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cell color for a heatmap count, interpolated along the ramp. A zero
/// maximum (empty table) pins every cell to the low end.
pub fn heat_color(count: u64, max: u64) -> String {
    let t = if max == 0 {
        0.0
    } else {
        count as f64 / max as f64
    };

    let scaled = t.clamp(0.0, 1.0) * (HEAT_STOPS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(HEAT_STOPS.len() - 2);
    let weight = scaled - lower as f64;

    let (r1, g1, b1) = HEAT_STOPS[lower];
    let (r2, g2, b2) = HEAT_STOPS[lower + 1];
    let blend = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * weight).round() as u8;

    format!("#{:02x}{:02x}{:02x}", blend(r1, r2), blend(g1, g2), blend(b1, b2))
}
