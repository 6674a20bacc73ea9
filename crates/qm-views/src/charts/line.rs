//! Line chart over one category field and any number of numeric series

use egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use qm_data::{DataError, MetricTable};

use super::{category_labels, format_thousands, label_at, show_unavailable, Series};

/// Configuration for a line chart
#[derive(Debug, Clone)]
pub struct LinePlot {
    id: &'static str,
    category_field: &'static str,
    series: Vec<Series>,
    pub height: f32,
    pub line_width: f32,
    pub show_points: bool,
}

/// Points of every series, positioned at category indices
struct LineData {
    labels: Vec<String>,
    series: Vec<(Series, Vec<[f64; 2]>)>,
}

impl LinePlot {
    pub fn new(id: &'static str, category_field: &'static str) -> Self {
        Self {
            id,
            category_field,
            series: Vec::new(),
            height: 260.0,
            line_width: 2.0,
            show_points: true,
        }
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    fn fetch_data(&self, table: &MetricTable) -> Result<LineData, DataError> {
        let labels = category_labels(table, self.category_field)?;
        let series = self
            .series
            .iter()
            .map(|s| {
                let values = table.numeric_column(s.field)?;
                let points = values
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, v])
                    .collect();
                Ok((s.clone(), points))
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        Ok(LineData { labels, series })
    }

    pub fn ui(&self, ui: &mut Ui, table: &MetricTable) {
        let data = match self.fetch_data(table) {
            Ok(data) => data,
            Err(e) => return show_unavailable(ui, table, &e),
        };

        let axis_labels = data.labels.clone();
        let hover_labels = data.labels.clone();

        Plot::new(self.id)
            .height(self.height)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_y(0.0)
            .x_axis_formatter(move |x, _max_chars, _range| label_at(&axis_labels, x))
            .y_axis_formatter(|y, _max_chars, _range| format_thousands(y))
            .label_formatter(move |name, value| {
                if name.is_empty() {
                    return String::new();
                }
                format!(
                    "{}\n{}: {}",
                    label_at(&hover_labels, value.x),
                    name,
                    format_thousands(value.y)
                )
            })
            .show(ui, |plot_ui| {
                for (series, points) in data.series {
                    if self.show_points {
                        plot_ui.points(
                            Points::new(PlotPoints::from(points.clone()))
                                .radius(3.0)
                                .color(series.color),
                        );
                    }
                    plot_ui.line(
                        Line::new(PlotPoints::from(points))
                            .name(series.name)
                            .color(series.color)
                            .width(self.line_width),
                    );
                }
            });
    }
}
