//! Series colours shared by every chart

use egui::Color32;

pub const PURPLE: Color32 = Color32::from_rgb(0x88, 0x84, 0xd8);
pub const GREEN: Color32 = Color32::from_rgb(0x82, 0xca, 0x9d);
pub const ORANGE: Color32 = Color32::from_rgb(0xff, 0x80, 0x42);
pub const BLUE: Color32 = Color32::from_rgb(0x00, 0x88, 0xfe);
pub const YELLOW: Color32 = Color32::from_rgb(0xff, 0xc6, 0x58);

/// Get a categorical color from the dashboard palette
pub fn categorical_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[PURPLE, GREEN, ORANGE, BLUE, YELLOW];
    PALETTE[index % PALETTE.len()]
}

/// Two-slice palette used by the gap pies
pub fn gap_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[BLUE, ORANGE];
    PALETTE[index % PALETTE.len()]
}
