//! Bar chart implementation

use egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use qm_data::{DataError, MetricTable};

use super::{category_labels, format_thousands, label_at, show_unavailable, Series};

/// How several series share one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarLayout {
    /// Side by side
    Grouped,
    /// On top of each other, first series at the base
    Stacked,
}

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarPlot {
    id: &'static str,
    category_field: &'static str,
    series: Vec<Series>,
    /// Lines drawn over the bars on the same axes
    overlay: Vec<Series>,
    pub layout: BarLayout,
    /// Categories on the y axis, ranked from the top
    pub horizontal: bool,
    pub height: f32,
    /// Width of one category's slot (0.0 to 1.0)
    pub bar_width: f64,
}

struct BarData {
    labels: Vec<String>,
    series: Vec<(Series, Vec<f64>)>,
    overlay: Vec<(Series, Vec<f64>)>,
}

impl BarPlot {
    pub fn new(id: &'static str, category_field: &'static str) -> Self {
        Self {
            id,
            category_field,
            series: Vec::new(),
            overlay: Vec::new(),
            layout: BarLayout::Grouped,
            horizontal: false,
            height: 260.0,
            bar_width: 0.7,
        }
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn overlay_line(mut self, series: Series) -> Self {
        self.overlay.push(series);
        self
    }

    pub fn stacked(mut self) -> Self {
        self.layout = BarLayout::Stacked;
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    fn fetch_data(&self, table: &MetricTable) -> Result<BarData, DataError> {
        let read = |series: &[Series]| {
            series
                .iter()
                .map(|s| Ok((s.clone(), table.numeric_column(s.field)?)))
                .collect::<Result<Vec<_>, DataError>>()
        };

        Ok(BarData {
            labels: category_labels(table, self.category_field)?,
            series: read(&self.series)?,
            overlay: read(&self.overlay)?,
        })
    }

    /// Axis position of category `index`. Horizontal charts put the first
    /// category at the top.
    fn position(&self, index: usize, count: usize) -> f64 {
        if self.horizontal {
            (count - 1 - index) as f64
        } else {
            index as f64
        }
    }

    /// Offset and width of series `series_index` within a category slot
    fn slot(&self, series_index: usize, series_count: usize) -> (f64, f64) {
        match self.layout {
            BarLayout::Stacked => (0.0, self.bar_width),
            BarLayout::Grouped => {
                let width = self.bar_width / series_count.max(1) as f64;
                let offset = (series_index as f64 - (series_count as f64 - 1.0) / 2.0) * width;
                (offset, width)
            }
        }
    }

    fn build_charts(&self, data: &BarData) -> Vec<BarChart> {
        let count = data.labels.len();
        let mut charts: Vec<BarChart> = Vec::with_capacity(data.series.len());

        for (series_index, (series, values)) in data.series.iter().enumerate() {
            let (offset, width) = self.slot(series_index, data.series.len());
            let bars = values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    Bar::new(self.position(i, count) + offset, *value)
                        .width(width)
                        .name(&data.labels[i])
                        .fill(series.color)
                })
                .collect();

            let mut chart = BarChart::new(bars)
                .name(series.name)
                .color(series.color)
                .element_formatter(Box::new(|bar, _chart| {
                    format!("{}\n{}", bar.name, format_thousands(bar.value))
                }));
            if self.horizontal {
                chart = chart.horizontal();
            }
            if self.layout == BarLayout::Stacked {
                let below: Vec<&BarChart> = charts.iter().collect();
                chart = chart.stack_on(&below);
            }
            charts.push(chart);
        }
        charts
    }

    pub fn ui(&self, ui: &mut Ui, table: &MetricTable) {
        let data = match self.fetch_data(table) {
            Ok(data) => data,
            Err(e) => return show_unavailable(ui, table, &e),
        };

        let charts = self.build_charts(&data);
        let count = data.labels.len() as f64;
        let horizontal = self.horizontal;
        // (category position, value) of a plot point
        let split = move |x: f64, y: f64| {
            if horizontal {
                (count - 1.0 - y, x)
            } else {
                (x, y)
            }
        };
        let hover_labels = data.labels.clone();
        let axis_labels = data.labels.clone();

        let mut plot = Plot::new(self.id)
            .height(self.height)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .label_formatter(move |name, point| {
                if name.is_empty() {
                    return String::new();
                }
                let (category, value) = split(point.x, point.y);
                format!(
                    "{}\n{}: {}",
                    label_at(&hover_labels, category),
                    name,
                    format_thousands(value)
                )
            });

        plot = if horizontal {
            plot.include_x(0.0)
                .y_axis_formatter(move |y, _max_chars, _range| {
                    label_at(&axis_labels, count - 1.0 - y)
                })
                .x_axis_formatter(|x, _max_chars, _range| format_thousands(x))
        } else {
            plot.include_y(0.0)
                .x_axis_formatter(move |x, _max_chars, _range| label_at(&axis_labels, x))
                .y_axis_formatter(|y, _max_chars, _range| format_thousands(y))
        };

        plot.show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
            for (series, values) in data.overlay {
                let points: Vec<[f64; 2]> = values
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, v])
                    .collect();
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .name(series.name)
                        .color(series.color)
                        .width(2.0),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::colors;

    #[test]
    fn test_grouped_slots_are_centred() {
        let plot = BarPlot::new("test", "year");
        let (left, width) = plot.slot(0, 3);
        let (middle, _) = plot.slot(1, 3);
        let (right, _) = plot.slot(2, 3);
        assert!((width - 0.7 / 3.0).abs() < 1e-9);
        assert!(middle.abs() < 1e-9);
        assert!((left + right).abs() < 1e-9);
    }

    #[test]
    fn test_stacked_slots_share_position() {
        let plot = BarPlot::new("test", "year").stacked();
        assert_eq!(plot.slot(0, 2), plot.slot(1, 2));
    }

    #[test]
    fn test_horizontal_ranks_from_top() {
        let plot = BarPlot::new("test", "name").horizontal();
        assert_eq!(plot.position(0, 10), 9.0);
        assert_eq!(plot.position(9, 10), 0.0);
        assert_eq!(BarPlot::new("test", "name").position(2, 10), 2.0);
    }

    #[test]
    fn test_fetch_missing_series() {
        let registry = qm_data::DatasetRegistry::load().unwrap();
        let table = registry.table(qm_data::TableId::RampUp);
        let plot = BarPlot::new("test", "year")
            .series(Series::new("annualQualificationsNeeded", "Needed", colors::PURPLE));
        assert!(plot.fetch_data(table).is_ok());

        let broken = plot.series(Series::new("entrants", "Entrants", colors::GREEN));
        assert!(matches!(broken.fetch_data(table), Err(DataError::MissingField { .. })));
    }
}
