//! Executive summary tab

use egui::Ui;
use qm_core::ViewId;
use qm_data::TableId;

use crate::charts::{colors, BarPlot, PieChart, Series};
use crate::narrative::{self, fact, point, Panel, Tone};
use crate::{DashboardView, ViewerContext};

const KEY_FINDINGS: Panel = Panel {
    title: "Key Findings",
    tone: Tone::Blue,
    paragraphs: &[],
    bullets: &[
        fact("Current qualification rate (2024)", "56% post-secondary attainment (23% higher education, 33% VET)"),
        fact("Current qualification gap (2024)", "24% below target (difference between current 56% and target 80%)"),
        fact("Target qualification rate (2050)", "80% post-secondary attainment"),
        fact("Total qualifications needed by 2050", "57,438 new qualifications"),
        fact("Qualifications to close existing gap", "22,975 qualifications (40% of total need)"),
        fact("Qualifications for new workforce entrants", "34,463 qualifications (60% of total need)"),
        fact("Annual qualification production needed by 2045", "2,433 per year"),
        fact("VSP Data (2024-2034)", "35,705 new workers needed across all industries"),
    ],
};

const INDUSTRY_REQUIREMENTS: Panel = Panel {
    title: "2035 Industry Requirements",
    tone: Tone::Yellow,
    paragraphs: &[],
    bullets: &[
        fact("Total qualifications needed by 2035", "20,037 new qualifications"),
        fact("Qualifications to close existing gap", "8,015 qualifications (40% of 2035 need)"),
        fact("Qualifications for new workforce entrants", "12,022 qualifications (60% of 2035 need)"),
        fact("Population growth can support", "16,256 new qualifications"),
        fact("Qualification gap requiring migration", "3,781 qualified workers"),
        fact("Top 3 industries by VSP data (2024-2034)", "Healthcare (10,773), Construction (4,133), Education (3,861)"),
    ],
};

const UNIVERSITY_SUB_GOAL: Panel = Panel {
    title: "University Qualification Sub-Goal",
    tone: Tone::Purple,
    paragraphs: &[],
    bullets: &[
        fact("Current university qualification rate (25-35 cohort)", "23%"),
        fact("Target university qualification rate (2050)", "55% of 25-35 age cohort"),
        fact("Currently university-qualified young adults", "4,902 (of 21,312 in this age group)"),
        fact("Target university-qualified young adults (2050)", "17,190 (of 31,255 projected)"),
        fact("NEW university qualifications needed by 2050", "12,288 (additional to existing)"),
        fact("To close existing university attainment gap", "6,391 new university qualifications"),
        fact("For future workforce entrants", "5,897 new university qualifications"),
        fact("Annual NEW university qualifications required", "473 per year (average)"),
        fact("First phase (to 2035)", "379 NEW university qualifications per year"),
        fact("Second phase (2035-2050)", "546 NEW university qualifications per year"),
    ],
};

const OVERVIEW: &str = "The Central Highlands must dramatically increase qualification output to reach 80% post-secondary education attainment by 2050 while meeting critical industry workforce demands by 2035. Population projections show 74,841 new working age entrants through 2050, with 21,909 exits. Achieving the 80% target requires both maximizing qualification rates among new entrants and implementing immediate qualification ramp-up strategies for existing workers.";

const PARTNERSHIP: Panel = Panel {
    title: "Alignment with Federation University's High Growth Community Partnership",
    tone: Tone::Blue,
    paragraphs: &["The following recommendations are aligned with Federation University's Central Highlands High Growth Community Partnership election priorities to support a clean economy and advanced technology growth while addressing qualification targets:"],
    bullets: &[],
};

const EDUCATION_INFRASTRUCTURE: Panel = Panel {
    title: "Education Infrastructure Investment",
    tone: Tone::Purple,
    paragraphs: &[],
    bullets: &[
        point("Support the proposed Ballarat Co-Operative Education and Skills City Centre ($48m) as a central hub for university qualification delivery"),
        point("Invest in Refreshed Federation TAFE Training Facilities ($5m) to expand construction and automotive trades training"),
        point("Develop the Asia Pacific Regional Leadership Centre ($5m) to support business and government leadership qualifications"),
    ],
};

const PIPELINE_PROGRAMS: Panel = Panel {
    title: "Industry-Education Pipeline Programs",
    tone: Tone::Purple,
    paragraphs: &[],
    bullets: &[
        point("Implement the Community Teacher Training Program ($2.5m) to increase local teaching qualifications"),
        point("Establish the Federation Impact Career Support Service ($5m) to improve graduate outcomes"),
        point("Expand the Asia Pacific Renewable Energy Training Centre ($5m) for clean energy workforce qualifications"),
    ],
};

const ATTAINMENT_ACCELERATORS: Panel = Panel {
    title: "University Attainment Accelerators",
    tone: Tone::Purple,
    paragraphs: &[],
    bullets: &[
        point("Create 100 Science and Business Part Access Scholarships ($3m) targeting STEM qualifications"),
        point("Establish 200 High Growth Community Skills Scholarships ($3m) for priority sectors"),
        point("Support Regional Priority Skills Student Visa program to attract international students in shortage areas"),
        point("Expand undergraduate diplomas and vocational bachelor programs co-designed with industry"),
    ],
};

const WORK_INTEGRATED_LEARNING: Panel = Panel {
    title: "Work-Integrated Learning Expansion",
    tone: Tone::Purple,
    paragraphs: &[],
    bullets: &[
        point("Advocate for a National Paid Placement Fund to support work-integrated learning"),
        point("Implement paid placement requirements across major infrastructure projects"),
        point("Create tax incentives for employers supporting qualification pathways"),
        point("Develop partnerships with local career services and schools for student recruitment"),
    ],
};

const RECOMMENDATIONS: &[narrative::Bullet] = &[
    point("Implement a ramp-up plan starting in 2025 that increases education outputs to 1,781 qualifications annually by 2027."),
    point("Develop targeted migration programs to attract 4,726 skilled workers by 2035, focused on healthcare, construction, and education."),
    point("Improve liveability in the Central Highlands to retain qualified workforce and attract skilled migrants."),
    point("Focus international student programs on high-demand fields with pathways to permanent residency."),
    point("Create incentives for post-secondary qualifications aligned with regional workforce needs."),
    point("Continue scaling qualification production to 2,433 annually by 2045 to achieve 80% attainment by 2050."),
];

/// Key findings, the 2035 gap and the recommendations
pub struct SummaryView {
    gap_pie: PieChart,
    workforce_flow: BarPlot,
}

impl SummaryView {
    pub fn new() -> Self {
        Self {
            gap_pie: PieChart::new("name", "value", colors::gap_color),
            workforce_flow: BarPlot::new("summary_workforce_flow", "category")
                .series(Series::new("entrants", "Total Entrants (2024-2050)", colors::GREEN))
                .series(Series::new("exits", "Total Exits (2024-2050)", colors::ORANGE))
                .series(Series::new("netChange", "Net Change", colors::PURPLE)),
        }
    }
}

impl Default for SummaryView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for SummaryView {
    fn id(&self) -> ViewId {
        ViewId::Summary
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        super::heading(ui, "Executive Summary");
        KEY_FINDINGS.ui(ui);
        INDUSTRY_REQUIREMENTS.ui(ui);
        UNIVERSITY_SUB_GOAL.ui(ui);
        ui.label(OVERVIEW);

        narrative::section(ui, "2035 Qualification Gap Analysis");
        self.gap_pie.ui(ui, ctx.table(TableId::GapShare2035));

        narrative::section(ui, "Workforce Flow Analysis (2024-2034)");
        self.workforce_flow.ui(ui, ctx.table(TableId::WorkforceFlow));

        narrative::section(ui, "Key Recommendations");
        PARTNERSHIP.ui(ui);
        narrative::pair(ui, &EDUCATION_INFRASTRUCTURE, &PIPELINE_PROGRAMS);
        narrative::pair(ui, &ATTAINMENT_ACCELERATORS, &WORK_INTEGRATED_LEARNING);
        narrative::bullets(ui, RECOMMENDATIONS);
    }
}
