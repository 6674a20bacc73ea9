//! Thin chart wrappers over `egui_plot`
//!
//! Each chart reads its columns from a `MetricTable` every frame and owns only
//! its presentation settings.

pub mod bar;
pub mod colors;
pub mod line;
pub mod pie;

pub use bar::{BarLayout, BarPlot};
pub use line::LinePlot;
pub use pie::PieChart;

use egui::{Color32, RichText, Ui};
use qm_data::{DataError, MetricTable};

/// One plotted field of a table
#[derive(Debug, Clone)]
pub struct Series {
    pub field: &'static str,
    pub name: &'static str,
    pub color: Color32,
}

impl Series {
    pub fn new(field: &'static str, name: &'static str, color: Color32) -> Self {
        Self { field, name, color }
    }
}

/// Group digits by thousands, keeping up to three decimals.
///
/// `207601.0` becomes `207,601` and `0.56` stays `0.56`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (digits, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let decimals = decimals.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    if value < 0.0 && (digits != "0" || !decimals.is_empty()) {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if !decimals.is_empty() {
        out.push('.');
        out.push_str(decimals);
    }
    out
}

/// Category labels for the x (or y, when horizontal) axis.
///
/// Text fields are used as-is; numeric fields such as years are printed plainly.
pub fn category_labels(table: &MetricTable, field: &str) -> Result<Vec<String>, DataError> {
    match table.text_column(field) {
        Ok(labels) => Ok(labels),
        Err(DataError::UnsupportedType { .. }) => Ok(table
            .numeric_column(field)?
            .into_iter()
            .map(|v| v.to_string())
            .collect()),
        Err(e) => Err(e),
    }
}

/// Axis formatter that maps whole positions to category labels
pub(crate) fn label_at(labels: &[String], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Placeholder shown where a chart cannot read its table
pub(crate) fn show_unavailable(ui: &mut Ui, table: &MetricTable, error: &DataError) {
    tracing::debug!("Chart over '{}' unavailable: {}", table.name(), error);
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(format!("No data to display ({})", error)).weak());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use qm_data::{DatasetRegistry, TableId};

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(207601.0), "207,601");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(-279.0), "-279");
        assert_eq!(format_thousands(-1441.0), "-1,441");
        assert_eq!(format_thousands(0.56), "0.56");
        assert_eq!(format_thousands(30.17227), "30.172");
    }

    #[test]
    fn test_category_labels() {
        let registry = DatasetRegistry::load().unwrap();
        let years = category_labels(registry.table(TableId::RampUp), "year").unwrap();
        assert_eq!(years[0], "2024");
        let names = category_labels(registry.table(TableId::TopIndustries), "name").unwrap();
        assert_eq!(names[1], "Construction");
        assert!(category_labels(registry.table(TableId::RampUp), "missing").is_err());
    }

    #[test]
    fn test_label_at() {
        let labels = vec!["2024".to_string(), "2027".to_string()];
        assert_eq!(label_at(&labels, 1.0), "2027");
        assert_eq!(label_at(&labels, 0.5), "");
        assert_eq!(label_at(&labels, -1.0), "");
        assert_eq!(label_at(&labels, 7.0), "");
    }
}
