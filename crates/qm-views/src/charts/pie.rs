//! Pie chart painted directly with egui shapes

use std::f32::consts::TAU;

use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui};
use qm_data::{DataError, MetricTable};

use super::{format_thousands, show_unavailable};

/// Radians per polygon segment
const SEGMENT_ANGLE: f32 = 0.05;

/// Pie over a name field and a value field
#[derive(Debug, Clone)]
pub struct PieChart {
    name_field: &'static str,
    value_field: &'static str,
    colors: fn(usize) -> Color32,
    pub radius: f32,
    pub height: f32,
}

/// One slice with its angular extent
#[derive(Debug, Clone, PartialEq)]
struct Slice {
    name: String,
    value: f64,
    fraction: f64,
    start: f32,
    end: f32,
}

impl PieChart {
    pub fn new(name_field: &'static str, value_field: &'static str, colors: fn(usize) -> Color32) -> Self {
        Self {
            name_field,
            value_field,
            colors,
            radius: 80.0,
            height: 240.0,
        }
    }

    fn slices(&self, table: &MetricTable) -> Result<Vec<Slice>, DataError> {
        let names = table.text_column(self.name_field)?;
        let values = table.numeric_column(self.value_field)?;
        Ok(layout_slices(names, values))
    }

    pub fn ui(&self, ui: &mut Ui, table: &MetricTable) {
        let slices = match self.slices(table) {
            Ok(slices) => slices,
            Err(e) => return show_unavailable(ui, table, &e),
        };

        let (rect, response) =
            ui.allocate_exact_size(vec2(ui.available_width(), self.height), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center() - vec2(0.0, 12.0);
        let text_color = ui.visuals().text_color();

        for (i, slice) in slices.iter().enumerate() {
            let color = (self.colors)(i);
            for triangle in wedge(center, self.radius, slice.start, slice.end) {
                painter.add(Shape::convex_polygon(triangle, color, Stroke::NONE));
            }

            // Outside label, as "<name>: <percent>%"
            let mid = (slice.start + slice.end) / 2.0;
            let anchor = center + vec2(mid.cos(), mid.sin()) * (self.radius + 10.0);
            let align = if mid.cos() >= 0.0 { Align2::LEFT_CENTER } else { Align2::RIGHT_CENTER };
            painter.text(anchor, align, percent_label(slice), FontId::proportional(12.0), color);
        }

        // Legend row along the bottom edge
        let mut x = rect.left() + 8.0;
        let y = rect.bottom() - 10.0;
        for (i, slice) in slices.iter().enumerate() {
            painter.rect_filled(
                egui::Rect::from_center_size(pos2(x + 5.0, y), vec2(10.0, 10.0)),
                0.0,
                (self.colors)(i),
            );
            let text = painter.text(
                pos2(x + 14.0, y),
                Align2::LEFT_CENTER,
                &slice.name,
                FontId::proportional(12.0),
                text_color,
            );
            x = text.right() + 16.0;
        }

        if let Some(pointer) = response.hover_pos() {
            if let Some(slice) = hit_test(&slices, center, self.radius, pointer) {
                response.on_hover_text(format!("{}: {}", slice.name, format_thousands(slice.value)));
            }
        }
    }
}

fn layout_slices(names: Vec<String>, values: Vec<f64>) -> Vec<Slice> {
    let total: f64 = values.iter().sum();
    let mut angle = -TAU / 4.0;

    names
        .into_iter()
        .zip(values)
        .map(|(name, value)| {
            let fraction = if total > 0.0 { value / total } else { 0.0 };
            let start = angle;
            angle += fraction as f32 * TAU;
            Slice { name, value, fraction, start, end: angle }
        })
        .collect()
}

fn percent_label(slice: &Slice) -> String {
    format!("{}: {:.0}%", slice.name, slice.fraction * 100.0)
}

/// Wedge as a fan of thin triangles, each convex
fn wedge(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Vec<Pos2>> {
    let steps = (((end - start) / SEGMENT_ANGLE).ceil() as usize).max(1);
    let step = (end - start) / steps as f32;
    let at = |angle: f32| center + vec2(angle.cos(), angle.sin()) * radius;

    (0..steps)
        .map(|i| {
            let a = start + step * i as f32;
            vec![center, at(a), at(a + step)]
        })
        .collect()
}

fn hit_test<'a>(slices: &'a [Slice], center: Pos2, radius: f32, pointer: Pos2) -> Option<&'a Slice> {
    let offset = pointer - center;
    if offset.length() > radius {
        return None;
    }
    // Normalise into the range the slices were laid out over
    let mut angle = offset.y.atan2(offset.x);
    if angle < -TAU / 4.0 {
        angle += TAU;
    }
    slices.iter().find(|s| angle >= s.start && angle < s.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap_slices() -> Vec<Slice> {
        layout_slices(
            vec!["Population Growth Can Provide".to_string(), "Migration Required".to_string()],
            vec![16256.0, 3781.0],
        )
    }

    #[test]
    fn test_percent_labels() {
        let slices = gap_slices();
        assert_eq!(percent_label(&slices[0]), "Population Growth Can Provide: 81%");
        assert_eq!(percent_label(&slices[1]), "Migration Required: 19%");
    }

    #[test]
    fn test_slices_cover_circle() {
        let slices = gap_slices();
        assert!((slices[0].start + TAU / 4.0).abs() < 1e-6);
        assert!((slices[1].end - slices[0].start - TAU).abs() < 1e-4);
        assert_eq!(slices[0].end, slices[1].start);
    }

    #[test]
    fn test_hit_test() {
        let slices = gap_slices();
        let center = pos2(100.0, 100.0);
        // Just right of twelve o'clock is the first slice
        let hit = hit_test(&slices, center, 80.0, pos2(105.0, 40.0));
        assert_eq!(hit.map(|s| s.name.as_str()), Some("Population Growth Can Provide"));
        // Just left of twelve o'clock is the last slice
        let hit = hit_test(&slices, center, 80.0, pos2(95.0, 40.0));
        assert_eq!(hit.map(|s| s.name.as_str()), Some("Migration Required"));
        assert!(hit_test(&slices, center, 80.0, pos2(300.0, 300.0)).is_none());
    }

    #[test]
    fn test_wedge_segments() {
        let triangles = wedge(pos2(0.0, 0.0), 10.0, 0.0, TAU / 2.0);
        assert!(triangles.len() > 1);
        assert!(triangles.iter().all(|t| t.len() == 3));
    }
}
