use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Widget and panel colours for one mode
struct Palette {
    bg: Color32,
    panel: Color32,
    widget: Color32,
    hover: Color32,
    active: Color32,
    border: Color32,
    text: Color32,
}

const DARK: Palette = Palette {
    bg: Color32::from_rgb(23, 23, 23),
    panel: Color32::from_rgb(31, 31, 31),
    widget: Color32::from_rgb(40, 40, 40),
    hover: Color32::from_rgb(50, 50, 50),
    active: Color32::from_rgb(60, 60, 60),
    border: Color32::from_rgb(70, 70, 70),
    text: Color32::from_rgb(220, 220, 220),
};

const LIGHT: Palette = Palette {
    bg: Color32::from_rgb(255, 255, 255),
    panel: Color32::from_rgb(250, 250, 250),
    widget: Color32::from_rgb(243, 244, 246),
    hover: Color32::from_rgb(229, 231, 235),
    active: Color32::from_rgb(209, 213, 219),
    border: Color32::from_rgb(209, 213, 219),
    text: Color32::from_rgb(31, 41, 55),
};

/// Apply the dashboard theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let (mut visuals, palette) = if theme.dark_mode {
        (Visuals::dark(), &DARK)
    } else {
        (Visuals::light(), &LIGHT)
    };
    let accent = accent_color();

    // Window and panel styling
    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.extreme_bg_color = palette.bg;
    visuals.faint_bg_color = palette.widget;

    // Widget styling
    for (widgets, fill) in [
        (&mut visuals.widgets.noninteractive, palette.widget),
        (&mut visuals.widgets.inactive, palette.widget),
        (&mut visuals.widgets.hovered, palette.hover),
        (&mut visuals.widgets.active, palette.active),
    ] {
        widgets.bg_fill = fill;
        widgets.weak_bg_fill = fill;
        widgets.bg_stroke = Stroke::new(1.0, palette.border);
        widgets.fg_stroke = Stroke::new(1.0, palette.text);
        widgets.rounding = Rounding::same(4.0);
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);

    // Selection doubles as the active tab highlight
    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.indent = 20.0;

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
    tracing::debug!("Applied {} theme", if theme.dark_mode { "dark" } else { "light" });
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(37, 99, 235)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Get the success color for the theme
pub fn success_color() -> Color32 {
    Color32::from_rgb(22, 163, 74)
}
