//! One view per dashboard tab

mod attainment_gap;
mod industries;
mod occupations;
mod population;
mod qualifications;
mod rampup;
mod summary;

pub use attainment_gap::AttainmentGapView;
pub use industries::IndustriesView;
pub use occupations::OccupationsView;
pub use population::PopulationView;
pub use qualifications::QualificationsView;
pub use rampup::RampUpView;
pub use summary::SummaryView;

use egui::{RichText, Ui};

/// Tab title
pub(crate) fn heading(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).size(24.0).strong());
    ui.add_space(8.0);
}

/// Muted line under a tab title
pub(crate) fn subtitle(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).weak());
    ui.add_space(8.0);
}
