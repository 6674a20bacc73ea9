//! Population projections tab

use egui::Ui;
use qm_core::ViewId;
use qm_data::TableId;

use crate::charts::{colors, BarPlot, LinePlot, Series};
use crate::narrative::{self, Panel, Tone};
use crate::{DashboardView, ViewerContext};

const ANALYSIS: Panel = Panel {
    title: "Population Analysis",
    tone: Tone::Neutral,
    paragraphs: &[
        "The Central Highlands region is projected to grow from 207,601 residents in 2021 to 325,259 by 2051, representing a 57% increase over 30 years. The working age population (ages 15-60) will increase from 118,374 to 183,855 during this period, maintaining a relatively stable proportion of the total population at approximately 56-57%.",
        "According to the Victorian Skills Plan data, from 2024 to 2034, the Central Highlands will need 35,705 new workers, with 13,670 coming from employment growth and 22,035 from retirements. This workforce growth will require significant investment in post-secondary qualification pathways.",
    ],
    bullets: &[],
};

pub struct PopulationView {
    population: LinePlot,
    dynamics: BarPlot,
}

impl PopulationView {
    pub fn new() -> Self {
        Self {
            population: LinePlot::new("population_projection", "year")
                .series(Series::new("totalPopulation", "Total Population", colors::PURPLE))
                .series(Series::new(
                    "workingAgePopulation",
                    "Working Age Population (15-60)",
                    colors::GREEN,
                )),
            dynamics: BarPlot::new("population_dynamics", "year")
                .series(Series::new("entrants", "New Entrants", colors::PURPLE))
                .series(Series::new("exits", "Exits (Retirements etc.)", colors::ORANGE))
                .series(Series::new("netChange", "Net Change", colors::GREEN)),
        }
    }
}

impl Default for PopulationView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for PopulationView {
    fn id(&self) -> ViewId {
        ViewId::Population
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        super::heading(ui, "Population Projections");

        narrative::section(ui, &format!("{} Population (2021-2051)", ctx.config.region_name));
        self.population.ui(ui, ctx.table(TableId::Population));

        narrative::section(ui, "Working Age Population Dynamics");
        self.dynamics.ui(ui, ctx.table(TableId::WorkforceDynamics));

        ANALYSIS.ui(ui);
    }
}
