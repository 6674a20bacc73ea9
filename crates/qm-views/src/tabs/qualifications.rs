//! Qualification needs tab

use egui::Ui;
use qm_core::ViewId;
use qm_data::TableId;

use crate::charts::{colors, BarPlot, LinePlot, PieChart, Series};
use crate::narrative::{self, Panel, Tone};
use crate::{DashboardView, ViewerContext};

const ANALYSIS: Panel = Panel {
    title: "Qualification Gap Analysis",
    tone: Tone::Neutral,
    paragraphs: &[
        "Starting from a 56% post-secondary qualification rate in 2024, the model aims to achieve 80% by 2050. This requires producing 57,438 new qualifications over this period, with approximately 40% (22,975) needed to close the existing attainment gap among current workers and 60% (34,463) for new workforce entrants.",
        "By 2035, 20,037 new qualifications will be needed to meet projected workforce demands. The natural population growth can only support approximately 16,256 new qualifications by 2035, leaving a gap of 3,781 that must be addressed through skilled migration or significantly increased qualification rates among existing residents.",
        "Closing the existing attainment gap requires upskilling current workers through targeted training programs, while simultaneously ensuring 80% of new workforce entrants obtain post-secondary qualifications.",
    ],
    bullets: &[],
};

fn need_colors(index: usize) -> egui::Color32 {
    if index == 0 {
        colors::PURPLE
    } else {
        colors::GREEN
    }
}

pub struct QualificationsView {
    requirements: BarPlot,
    rate: LinePlot,
    cumulative: LinePlot,
    need_by_source: PieChart,
    gap_2035: PieChart,
}

impl QualificationsView {
    pub fn new() -> Self {
        Self {
            requirements: BarPlot::new("qualification_requirements", "year")
                .series(Series::new("qualifiedWorkersNeeded", "Qualified Workers Needed", colors::PURPLE))
                .overlay_line(Series::new("estimatedEmployment", "Total Employment", colors::ORANGE)),
            rate: LinePlot::new("qualification_rate", "year")
                .series(Series::new("qualificationRate", "Qualification Rate", colors::GREEN))
                .height(180.0),
            cumulative: LinePlot::new("cumulative_qualifications", "year").series(Series::new(
                "cumulativeQualifications",
                "Cumulative New Qualifications",
                colors::PURPLE,
            )),
            need_by_source: PieChart::new("name", "value", need_colors),
            gap_2035: PieChart::new("name", "value", colors::gap_color),
        }
    }
}

impl Default for QualificationsView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for QualificationsView {
    fn id(&self) -> ViewId {
        ViewId::Qualifications
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        super::heading(ui, "Qualification Needs");

        narrative::section(ui, "Projected Qualification Requirements");
        self.requirements.ui(ui, ctx.table(TableId::Qualifications));
        narrative::section(ui, "Post-Secondary Qualification Rate");
        self.rate.ui(ui, ctx.table(TableId::Qualifications));

        narrative::section(ui, "Cumulative New Qualifications Needed");
        self.cumulative.ui(ui, ctx.table(TableId::Qualifications));

        ui.columns(2, |columns| {
            narrative::section(&mut columns[0], "Total Qualification Need by Source (2024-2050)");
            self.need_by_source.ui(&mut columns[0], ctx.table(TableId::NeedBySource));
            narrative::section(&mut columns[1], "2035 Qualification Gap Analysis");
            self.gap_2035.ui(&mut columns[1], ctx.table(TableId::GapShare2035));
        });

        ANALYSIS.ui(ui);
    }
}
