//! Top occupations by VSP new workers

use egui::Ui;
use qm_core::ViewId;
use qm_data::TableId;

use crate::charts::{colors, BarPlot, Series};
use crate::narrative::{self, Panel, Tone};
use crate::tables::{CellFormat, TableColumn, TableView};
use crate::{DashboardView, ViewerContext};

const ANALYSIS: Panel = Panel {
    title: "Occupation Analysis",
    tone: Tone::Neutral,
    paragraphs: &[
        "The top occupations in demand according to the Victorian Skills Plan data align closely with the top industries. Aged and Disabled Carers (1,882), Sales Assistants (1,581), and Registered Nurses (1,503) will require the highest number of new workers by 2034. These occupations match the growth in healthcare, retail, and social assistance sectors.",
        "Each of these top occupations requires specific qualifications, with most requiring VET certificates, diplomas, or bachelor's degrees. The qualification model must ensure sufficient education pathways are available for these in-demand roles.",
    ],
    bullets: &[],
};

fn counts_columns(first: &'static str) -> Vec<TableColumn> {
    vec![
        TableColumn::new(first, "name", CellFormat::Plain),
        TableColumn::new("New Workers Needed", "value", CellFormat::Thousands),
        TableColumn::new("From Growth", "growth", CellFormat::Thousands),
        TableColumn::new("From Retirements", "retirements", CellFormat::Thousands),
    ]
}

pub struct OccupationsView {
    totals: BarPlot,
    breakdown: BarPlot,
    table: TableView,
    additional: TableView,
}

impl OccupationsView {
    pub fn new() -> Self {
        let mut columns = counts_columns("Occupation");
        columns.push(TableColumn::new("Typical Qualification", "typicalQualification", CellFormat::Plain));

        Self {
            totals: BarPlot::new("occupation_totals", "name")
                .series(Series::new("value", "Total New Workers Needed", colors::PURPLE))
                .horizontal()
                .height(360.0),
            breakdown: BarPlot::new("occupation_breakdown", "name")
                .series(Series::new("growth", "From Industry Growth", colors::GREEN))
                .series(Series::new("retirements", "From Retirements", colors::PURPLE))
                .stacked()
                .horizontal()
                .height(360.0),
            table: TableView::new("occupation_table", columns),
            additional: TableView::new("additional_occupation_table", counts_columns("Occupation")),
        }
    }
}

impl Default for OccupationsView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for OccupationsView {
    fn id(&self) -> ViewId {
        ViewId::VspOccupations
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let table = ctx.table(TableId::TopOccupations);

        super::heading(ui, "Top Occupations by New Workers Needed (2024-2034)");
        super::subtitle(
            ui,
            &format!("Based on Victorian Skills Plan data for {} region", ctx.config.region_name),
        );

        narrative::section(ui, "Top 10 Occupations by New Workers Needed");
        self.totals.ui(ui, table);

        narrative::section(ui, "Breakdown of New Workers by Growth vs. Replacement");
        self.breakdown.ui(ui, table);

        ANALYSIS.ui(ui);
        self.table.ui(ui, table);

        narrative::section(ui, "Additional Top Occupations (11-15)");
        self.additional.ui(ui, ctx.table(TableId::AdditionalOccupations));
    }
}
