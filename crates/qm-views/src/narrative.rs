//! Text panels that accompany the charts

use egui::{Color32, Frame, Margin, RichText, Rounding, Stroke, Ui};

/// A bullet point with an optional bold lead-in
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub label: Option<&'static str>,
    pub text: &'static str,
}

/// Bullet with a bold lead-in
pub const fn fact(label: &'static str, text: &'static str) -> Bullet {
    Bullet { label: Some(label), text }
}

/// Plain bullet
pub const fn point(text: &'static str) -> Bullet {
    Bullet { label: None, text }
}

/// Accent for a panel's title and background tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Blue,
    Yellow,
    Purple,
    Green,
    Orange,
}

impl Tone {
    fn accent(self) -> Color32 {
        match self {
            Tone::Neutral => Color32::GRAY,
            Tone::Blue => Color32::from_rgb(59, 130, 246),
            Tone::Yellow => Color32::from_rgb(202, 138, 4),
            Tone::Purple => Color32::from_rgb(147, 51, 234),
            Tone::Green => Color32::from_rgb(22, 163, 74),
            Tone::Orange => Color32::from_rgb(234, 88, 12),
        }
    }
}

/// A titled block of paragraphs and bullets
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub title: &'static str,
    pub tone: Tone,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [Bullet],
}

impl Panel {
    pub fn ui(&self, ui: &mut Ui) {
        let accent = self.tone.accent();
        Frame::none()
            .fill(accent.linear_multiply(0.08))
            .stroke(Stroke::new(1.0, accent.linear_multiply(0.4)))
            .rounding(Rounding::same(6.0))
            .inner_margin(Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(self.title).heading().color(accent));
                ui.add_space(4.0);
                for paragraph in self.paragraphs {
                    ui.label(*paragraph);
                    ui.add_space(4.0);
                }
                bullets(ui, self.bullets);
            });
        ui.add_space(12.0);
    }
}

/// Render a bullet list
pub fn bullets(ui: &mut Ui, items: &[Bullet]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("•  ");
            if let Some(label) = item.label {
                ui.label(RichText::new(format!("{}: ", label)).strong());
            }
            ui.label(item.text);
        });
    }
}

/// Section heading used above each chart
pub fn section(ui: &mut Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).size(18.0).strong());
    ui.add_space(4.0);
}

/// Two panels side by side
pub fn pair(ui: &mut Ui, left: &Panel, right: &Panel) {
    ui.columns(2, |columns| {
        left.ui(&mut columns[0]);
        right.ui(&mut columns[1]);
    });
}

pub const DATA_SOURCES: &str = "VIF2023 Regions Population Age Sex Projections, Central Highlands Regional Workforce Data, Victorian Skills Plan Employment Projections Data 2024-2034";
pub const MODEL_ASSUMPTIONS: &str = "Linear progression from 56% to 80% post-secondary qualification rate (2024-2050), 1.4% annual employment growth";
pub const VSP_NOTE: &str = "VSP data represents employment projections for 2024-2034. Qualification model extends to 2050 to achieve 80% attainment target.";

/// Data sources and assumptions, shown under every tab
pub fn footer(ui: &mut Ui) {
    ui.separator();
    for (label, text) in [
        ("Data sources", DATA_SOURCES),
        ("Model assumptions", MODEL_ASSUMPTIONS),
        ("Note", VSP_NOTE),
    ] {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(RichText::new(format!("{}: ", label)).small().strong());
            ui.label(RichText::new(text).small().weak());
        });
    }
}
