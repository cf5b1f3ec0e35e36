//! Bar chart geometry.
//!
//! Pure layout math for the dashboard's SVG bar charts. Amounts are scaled
//! against the largest absolute value so the tallest bar fills the plot area.
//! Negative amounts are drawn with zero height.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Plot area in SVG user units.
pub const CHART_WIDTH: f64 = 480.0;
pub const CHART_HEIGHT: f64 = 240.0;
/// Room below the plot for category labels.
pub const LABEL_BAND: f64 = 40.0;
const BAR_GAP_RATIO: f64 = 0.25;
const LABEL_MAX_CHARS: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

/// Lay out one bar per `(label, value)` pair.
pub fn layout_bars(series: &[(String, f64)]) -> Vec<Bar> {
    if series.is_empty() {
        return Vec::new();
    }
    let max = series
        .iter()
        .map(|(_, v)| if v.is_finite() { v.abs() } else { 0.0 })
        .fold(0.0_f64, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let slot = CHART_WIDTH / series.len() as f64;
    let width = slot * (1.0 - BAR_GAP_RATIO);

    series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let height = if max > 0.0 && value.is_finite() && *value > 0.0 {
                value / max * CHART_HEIGHT
            } else {
                0.0
            };
            #[allow(clippy::cast_precision_loss)]
            let x = slot * i as f64 + (slot - width) / 2.0;
            Bar { x, y: CHART_HEIGHT - height, width, height, label: short_label(label), value: *value }
        })
        .collect()
}

/// Truncate long category labels with an ellipsis.
pub fn short_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        return label.to_owned();
    }
    let mut out: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
    out.push('…');
    out
}
