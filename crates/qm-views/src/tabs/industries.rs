//! Top industries by VSP new workers

use egui::Ui;
use qm_core::ViewId;
use qm_data::registry::{VSP_TOTAL_FROM_GROWTH, VSP_TOTAL_FROM_RETIREMENTS, VSP_TOTAL_NEW_WORKERS};
use qm_data::TableId;

use crate::charts::{colors, format_thousands, BarPlot, Series};
use crate::narrative::{self, Panel, Tone};
use crate::tables::{CellFormat, TableColumn, TableView};
use crate::{DashboardView, ViewerContext};

const ANALYSIS: Panel = Panel {
    title: "Industry Analysis",
    tone: Tone::Neutral,
    paragraphs: &[
        "According to the Victorian Skills Plan data, the Healthcare and Social Assistance sector will require the highest number of new workers by 2034 (10,773), followed by Construction (4,133) and Education and Training (3,861). These three sectors account for 52.6% of all new worker requirements in the Central Highlands region.",
        "Most industries show worker growth coming from both industry expansion and retirement replacements, with the exception of Manufacturing which shows negative growth (-279) but still requires 1,146 new workers primarily to replace retirements (1,441).",
    ],
    bullets: &[],
};

pub struct IndustriesView {
    totals: BarPlot,
    breakdown: BarPlot,
    table: TableView,
}

impl IndustriesView {
    pub fn new() -> Self {
        let total_row = vec![
            "Total (All Industries)".to_string(),
            format_thousands(VSP_TOTAL_NEW_WORKERS as f64),
            format_thousands(VSP_TOTAL_FROM_GROWTH as f64),
            format_thousands(VSP_TOTAL_FROM_RETIREMENTS as f64),
            "100.0%".to_string(),
        ];

        Self {
            totals: BarPlot::new("industry_totals", "name")
                .series(Series::new("value", "Total New Workers Needed", colors::PURPLE))
                .horizontal()
                .height(360.0),
            breakdown: BarPlot::new("industry_breakdown", "name")
                .series(Series::new("growth", "From Industry Growth", colors::GREEN))
                .series(Series::new("retirements", "From Retirements", colors::PURPLE))
                .stacked()
                .horizontal()
                .height(360.0),
            table: TableView::new("industry_table", vec![
                TableColumn::new("Industry", "name", CellFormat::Plain),
                TableColumn::new("New Workers Needed", "value", CellFormat::Thousands),
                TableColumn::new("From Growth", "growth", CellFormat::Thousands),
                TableColumn::new("From Retirements", "retirements", CellFormat::Thousands),
                TableColumn::new("Percentage", "shareOfTotal", CellFormat::Percent),
            ])
            .with_footer(total_row),
        }
    }
}

impl Default for IndustriesView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for IndustriesView {
    fn id(&self) -> ViewId {
        ViewId::VspIndustries
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let table = ctx.table(TableId::TopIndustries);

        super::heading(ui, "Top Industries by New Workers Needed (2024-2034)");
        super::subtitle(
            ui,
            &format!("Based on Victorian Skills Plan data for {} region", ctx.config.region_name),
        );

        narrative::section(ui, "Top 10 Industries by New Workers Needed");
        self.totals.ui(ui, table);

        narrative::section(ui, "Breakdown of New Workers by Growth vs. Replacement");
        self.breakdown.ui(ui, table);

        ANALYSIS.ui(ui);
        self.table.ui(ui, table);
    }
}
