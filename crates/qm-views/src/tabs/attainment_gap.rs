//! Closing the attainment gap tab

use egui::Ui;
use qm_core::ViewId;
use qm_data::TableId;

use crate::charts::{colors, BarPlot, Series};
use crate::narrative::{self, fact, point, Panel, Tone};
use crate::tables::{CellFormat, TableColumn, TableView};
use crate::{DashboardView, ViewerContext};

const OVERVIEW: Panel = Panel {
    title: "Attainment Gap Overview",
    tone: Tone::Blue,
    paragraphs: &[],
    bullets: &[
        fact("Current qualification rate (2024)", "56% post-secondary attainment"),
        fact("Target qualification rate (2050)", "80% post-secondary attainment"),
        fact("Current attainment gap", "24 percentage points"),
        fact("Working age population (2024)", "125,372 people"),
        fact("Currently qualified workers", "70,208 (56% of working age population)"),
        fact("Target qualified workers", "100,298 (80% of working age population)"),
        fact("Workers needing qualifications to close gap", "30,090"),
        fact("Sub-goal for age 25-35 cohort", "55% university qualifications by 2050"),
    ],
};

const UNIVERSITY_ANALYSIS: &[&str] = &[
    "To achieve 55% university qualification in the 25-35 age cohort by 2050, Central Highlands needs to produce 12,288 NEW university qualifications above the current base of 4,902. This includes 6,391 qualifications to close the existing gap among the current workforce and 5,897 for new workforce entrants.",
    "For the first phase to 2035, the region needs to produce 4,171 NEW university graduates (379 per year) to reach a 36% interim target. The second phase from 2035 to 2050 requires accelerating to 546 NEW university graduates per year to reach the 55% target.",
    "This substantial increase in university qualifications will require a combination of strategies including expanded local university offerings, stronger pathways from VET to university, and attraction of university-qualified migrants to the region.",
];

const EXISTING_WORKERS: Panel = Panel {
    title: "Strategies for Existing Workers",
    tone: Tone::Blue,
    paragraphs: &[],
    bullets: &[
        point("Targeted upskilling programs for mid-career workers"),
        point("Recognition of prior learning to accelerate qualification attainment"),
        point("Industry partnerships for on-the-job qualification pathways"),
        point("Flexible delivery models (evening/weekend classes, online options)"),
        point("Subsidized training for priority industries and occupations"),
        point("Focus on workers aged 25-45 for maximum long-term benefit"),
    ],
};

const NEW_ENTRANTS: Panel = Panel {
    title: "Strategies for New Entrants",
    tone: Tone::Green,
    paragraphs: &[],
    bullets: &[
        point("School-to-work transition programs with built-in qualifications"),
        point("International student pathways to employment in skill shortage areas"),
        point("Skills attraction campaign targeting qualified workers from other regions"),
        point("Apprenticeship and traineeship expansion in key growth industries"),
        point("Career guidance emphasizing qualification pathways in schools"),
        point("Skilled migration programs targeting qualified workers in high-demand fields"),
    ],
};

const PATHWAYS: Panel = Panel {
    title: "Pathway Development",
    tone: Tone::Purple,
    paragraphs: &[],
    bullets: &[
        point("Expand university presence in Central Highlands region"),
        point("Develop articulation pathways from VET to university qualifications"),
        point("Increase university satellite campus offerings in high-demand fields"),
        point("Partner with metropolitan universities for local delivery options"),
        point("Create industry-sponsored degree programs with guaranteed employment"),
        point("Develop micro-credentials that stack toward university qualifications"),
        point("Establish pipeline from high school to university via early entry programs"),
    ],
};

const SUPPORT: Panel = Panel {
    title: "Support Mechanisms",
    tone: Tone::Blue,
    paragraphs: &[],
    bullets: &[
        point("Scholarships for students committed to working in the region post-graduation"),
        point("Housing support for university students to address affordability barriers"),
        point("Regional employment guarantees for specific university programs"),
        point("Transport subsidies for students traveling to university campuses"),
        point("Online learning hubs with mentoring support in regional centers"),
        point("Childcare support for mature age students pursuing university qualifications"),
        point("Employer subsidies for releasing workers to undertake university study"),
    ],
};

const UNIVERSITY_CHALLENGES: Panel = Panel {
    title: "University Qualification Implementation Challenges",
    tone: Tone::Purple,
    paragraphs: &["Achieving the 55% university qualification target for the 25-35 age cohort presents unique challenges:"],
    bullets: &[
        point("Limited university presence in the Central Highlands region"),
        point("Competition with metropolitan areas for university graduates"),
        point("Financial barriers to university education for regional students"),
        point("Need for strong articulation pathways between VET and university"),
        point("Ensuring university programs align with regional workforce needs"),
        point("Retention of university graduates in the region post-qualification"),
        point("Access to quality work placements for university students"),
        point("Development of specialized teaching staff in high-priority fields"),
    ],
};

const IMPLEMENTATION_CHALLENGES: Panel = Panel {
    title: "Key Implementation Challenges",
    tone: Tone::Orange,
    paragraphs: &["Achieving the qualification targets while aligning with Federation University's High Growth Community Partnership priorities requires addressing:"],
    bullets: &[
        point("Training capacity constraints, especially for specialized programs in renewable energy and advanced manufacturing"),
        point("Barriers to participation for adult learners (time, cost, confidence)"),
        point("Employer support for workforce upskilling during working hours"),
        point("Attracting and retaining skilled trainers in priority qualification areas"),
        point("Housing availability for new qualified workers moving to the region"),
        point("Competition with other regions for skilled workers and training resources"),
        point("Need for coordinated approach across education, industry and government"),
        point("Limited university infrastructure for expanded course offerings"),
        point("Funding alignment with infrastructure and program development timelines"),
    ],
};

const PARTNERSHIP_BENEFITS: Panel = Panel {
    title: "University Qualification and Federation University Partnership Benefits",
    tone: Tone::Purple,
    paragraphs: &["The Federation University proposals would significantly support the university qualification target through:"],
    bullets: &[
        point("Increased local university infrastructure in Ballarat central area, making higher education more accessible"),
        point("Expanded teaching capacity in key shortage areas aligned with industry needs"),
        point("Clear pathways between TAFE and university qualifications"),
        point("Scholarship support for equity groups to increase participation"),
        point("Industry partnerships ensuring qualifications match emerging workforce needs"),
        point("Focused international student attraction in critical skills shortage areas"),
        point("Integrated career support to maximize qualification completion and workforce entry"),
    ],
};

pub struct AttainmentGapView {
    gap_closure: BarPlot,
    university_rate: BarPlot,
    qualification_mix: BarPlot,
    university_gap_closure: BarPlot,
    cohort: TableView,
    timeframes: TableView,
}

impl AttainmentGapView {
    pub fn new() -> Self {
        Self {
            gap_closure: BarPlot::new("gap_closure", "category")
                .series(Series::new("existingWorkers", "Upskill Existing Workers", colors::PURPLE))
                .series(Series::new("newWorkers", "Qualify New Entrants", colors::GREEN))
                .stacked(),
            university_rate: BarPlot::new("university_rate", "category").series(Series::new(
                "value",
                "University Qualification Rate (%)",
                colors::PURPLE,
            )),
            qualification_mix: BarPlot::new("qualification_mix", "year")
                .series(Series::new("university", "University Qualification", colors::PURPLE))
                .series(Series::new("vet", "VET Qualification", colors::GREEN))
                .series(Series::new("noQual", "No Post-Secondary Qual", colors::YELLOW))
                .stacked(),
            university_gap_closure: BarPlot::new("university_gap_closure", "category")
                .series(Series::new(
                    "existingGap",
                    "Close University Gap (Existing Workers)",
                    colors::PURPLE,
                ))
                .series(Series::new(
                    "newEntrants",
                    "New Entrants University Qualifications",
                    colors::GREEN,
                ))
                .stacked(),
            cohort: TableView::new("university_cohort", vec![
                TableColumn::new("Metric", "metric", CellFormat::Plain),
                TableColumn::new("2024", "y2024", CellFormat::Plain),
                TableColumn::new("2035", "y2035", CellFormat::Plain),
                TableColumn::new("2050", "y2050", CellFormat::Plain),
            ]),
            timeframes: TableView::new("gap_timeframes", vec![
                TableColumn::new("Timeframe", "timeframe", CellFormat::Plain),
                TableColumn::new("Existing Workers to Upskill", "existingWorkers", CellFormat::Thousands),
                TableColumn::new("New Entrants to Qualify", "newEntrants", CellFormat::Thousands),
                TableColumn::new("Total Qualifications", "total", CellFormat::Thousands),
                TableColumn::new("Annual Production", "annualProduction", CellFormat::Plain),
            ]),
        }
    }
}

impl Default for AttainmentGapView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for AttainmentGapView {
    fn id(&self) -> ViewId {
        ViewId::AttainmentGap
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        super::heading(ui, "Closing the Attainment Gap");
        OVERVIEW.ui(ui);

        narrative::section(ui, "Closing the Gap: Existing vs. New Workers");
        self.gap_closure.ui(ui, ctx.table(TableId::GapClosure));

        narrative::section(ui, "University Qualification Sub-Goal (25-35 Age Cohort)");
        ui.columns(2, |columns| {
            columns[0].strong("Current vs. Target University Attainment");
            self.university_rate.ui(&mut columns[0], ctx.table(TableId::UniversityRate));
            columns[1].strong("Qualification Mix Evolution");
            self.qualification_mix.ui(&mut columns[1], ctx.table(TableId::QualificationMix));
        });

        narrative::section(ui, "University Qualification Analysis (25-35 Cohort)");
        self.cohort.ui(ui, ctx.table(TableId::UniversityCohort));
        ui.add_space(8.0);
        for paragraph in UNIVERSITY_ANALYSIS {
            ui.label(*paragraph);
            ui.add_space(4.0);
        }

        narrative::pair(ui, &EXISTING_WORKERS, &NEW_ENTRANTS);

        narrative::section(ui, "University Qualification Strategies");
        narrative::pair(ui, &PATHWAYS, &SUPPORT);

        narrative::section(ui, "Gap Closure Breakdown: University Qualifications");
        self.university_gap_closure.ui(ui, ctx.table(TableId::UniversityGapClosure));
        self.timeframes.ui(ui, ctx.table(TableId::GapTimeframes));
        ui.add_space(12.0);

        UNIVERSITY_CHALLENGES.ui(ui);
        IMPLEMENTATION_CHALLENGES.ui(ui);
        PARTNERSHIP_BENEFITS.ui(ui);
    }
}
