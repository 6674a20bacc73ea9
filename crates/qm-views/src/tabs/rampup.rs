//! Ramp-up plan tab

use egui::Ui;
use qm_core::ViewId;
use qm_data::TableId;

use crate::charts::{colors, BarPlot, Series};
use crate::narrative::{self, point, Panel, Tone};
use crate::{DashboardView, ViewerContext};

const STRATEGY: Panel = Panel {
    title: "Ramp-Up Strategy",
    tone: Tone::Neutral,
    paragraphs: &[
        "The qualification ramp-up model considers a 3-year average lag between commencement and completion of qualifications. To meet 2035 targets, education providers need to rapidly scale their capacity beginning in 2027, increasing annual qualification production to approximately 1,780 completions per year by 2027-2030.",
        "Beyond 2035, continued growth in qualification production will be needed, reaching over 2,400 annual completions by 2045 to achieve the 80% attainment target by 2050.",
    ],
    bullets: &[],
};

const MIGRATION: Panel = Panel {
    title: "Migration Strategy Needed",
    tone: Tone::Orange,
    paragraphs: &["Analysis indicates that local population growth and qualification production cannot meet the projected demand. A targeted migration strategy is required, focusing on attracting approximately 4,700 skilled workers to the Central Highlands by 2035."],
    bullets: &[
        point("Focus international student recruitment on high-demand fields: healthcare, construction, and education"),
        point("Develop incentives for post-qualification regional work placements"),
        point("Improve regional liveability to attract and retain skilled workers"),
        point("Create pathways from temporary to permanent residency for qualified workers in key industries"),
    ],
};

pub struct RampUpView {
    annual: BarPlot,
}

impl RampUpView {
    pub fn new() -> Self {
        Self {
            annual: BarPlot::new("rampup_annual", "year").series(Series::new(
                "annualQualificationsNeeded",
                "Annual Qualifications Needed",
                colors::PURPLE,
            )),
        }
    }
}

impl Default for RampUpView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for RampUpView {
    fn id(&self) -> ViewId {
        ViewId::RampUp
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        super::heading(ui, "Qualification Ramp-Up Plan");

        narrative::section(ui, "Annual New Qualifications Needed (With 3-Year Education Lag)");
        self.annual.ui(ui, ctx.table(TableId::RampUp));

        STRATEGY.ui(ui);
        narrative::section(ui, "Migration Requirements");
        MIGRATION.ui(ui);
    }
}
