//! The fixed dataset behind every chart and export
//!
//! Sources: VIF2023 regional population projections, Central Highlands
//! regional workforce data and the Victorian Skills Plan (VSP) employment
//! projections 2024-2034.

use crate::table::{float_column, int_column, text_column, MetricTable, TableId};
use crate::DataError;

/// VSP new workers needed across all industries, 2024-2034
pub const VSP_TOTAL_NEW_WORKERS: i64 = 35_705;
/// Of which from employment growth
pub const VSP_TOTAL_FROM_GROWTH: i64 = 13_670;
/// Of which from retirements
pub const VSP_TOTAL_FROM_RETIREMENTS: i64 = 22_035;

const POPULATION_YEARS: [i64; 7] = [2021, 2026, 2031, 2036, 2041, 2046, 2051];
const TOTAL_POPULATION: [i64; 7] = [207601, 225573, 244556, 263507, 283677, 304262, 325259];
const WORKING_AGE_POPULATION: [i64; 7] = [118374, 127930, 137729, 148251, 160617, 172377, 183855];

const MODEL_YEARS: [i64; 8] = [2024, 2026, 2031, 2035, 2041, 2046, 2050, 2051];
const QUALIFIED_WORKERS_NEEDED: [i64; 8] = [53216, 56520, 65423, 73253, 86292, 98459, 109126, 110654];
const CUMULATIVE_QUALIFICATIONS: [i64; 8] = [0, 3304, 12207, 20037, 33076, 45243, 55910, 57438];
const QUALIFICATION_RATE: [f64; 8] = [0.56, 0.58, 0.62, 0.66, 0.72, 0.76, 0.80, 0.80];
const ESTIMATED_EMPLOYMENT: [i64; 8] = [95028, 97707, 104741, 110731, 120364, 129029, 136408, 138317];

const WORKFORCE_YEARS: [i64; 6] = [2026, 2031, 2036, 2041, 2046, 2051];
const ENTRANTS: [i64; 6] = [13108, 13636, 14654, 16814, 16579, 16649];
const EXITS: [i64; 6] = [3551, 3838, 4132, 4448, 4819, 5171];
const NET_CHANGE: [i64; 6] = [9556, 9798, 10522, 12366, 11760, 11478];

/// (industry, new workers, from growth, from retirements)
const TOP_INDUSTRIES: [(&str, i64, i64, i64); 10] = [
    ("Health Care & Social Assistance", 10773, 5971, 4794),
    ("Construction", 4133, 1834, 2290),
    ("Education & Training", 3861, 1513, 2340),
    ("Retail Trade", 2546, 955, 1593),
    ("Accommodation & Food Services", 2305, 937, 1363),
    ("Agriculture, Forestry & Fishing", 1818, 109, 1704),
    ("Professional Services", 1763, 876, 879),
    ("Public Administration", 1693, 496, 1188),
    ("Transport & Warehousing", 1344, 405, 936),
    ("Manufacturing", 1146, -279, 1441),
];

/// (occupation, new workers, from growth, from retirements, typical qualification)
const TOP_OCCUPATIONS: [(&str, i64, i64, i64, &str); 10] = [
    ("Aged & Disabled Carers", 1882, 674, 1208, "Certificate III"),
    ("Sales Assistants", 1581, 723, 858, "Certificate II/III"),
    ("Registered Nurses", 1503, 741, 761, "Bachelor's Degree"),
    ("General Clerks", 891, 211, 681, "Certificate III/IV"),
    ("Primary School Teachers", 807, 411, 395, "Bachelor's Degree"),
    ("Commercial Cleaners", 732, 144, 584, "Certificate II"),
    ("Receptionists", 708, 331, 376, "Certificate III"),
    ("Secondary School Teachers", 706, 318, 388, "Bachelor's Degree"),
    ("Truck Drivers", 661, 192, 467, "License + Certificate"),
    ("Retail Managers", 482, 102, 380, "Certificate IV/Diploma"),
];

/// Occupations ranked 11-15
const ADDITIONAL_OCCUPATIONS: [(&str, i64, i64, i64); 5] = [
    ("Livestock Farmers", 474, 33, 441),
    ("Handypersons", 462, 86, 377),
    ("Nursing Support Workers", 459, 221, 238),
    ("Construction Managers", 451, 249, 203),
    ("Child Carers", 444, 303, 143),
];

const GAP_SHARE_2035: [(&str, i64); 2] = [
    ("Population Growth Can Provide", 16256),
    ("Migration Required", 3781),
];

const NEED_BY_SOURCE: [(&str, i64); 2] = [
    ("Close Existing Gap", 22975),
    ("New Workforce Entrants", 34463),
];

/// (category, existing workers, new workers)
const GAP_CLOSURE: [(&str, i64, i64); 2] = [
    ("2035 Need", 8015, 12022),
    ("Total 2050 Need", 22975, 34463),
];

const UNIVERSITY_RATE: [(&str, i64); 2] = [
    ("Current (2024)", 23),
    ("Target (2050)", 55),
];

/// (year, university %, VET %, no post-secondary %)
const QUALIFICATION_MIX: [(&str, i64, i64, i64); 3] = [
    ("2024", 23, 33, 44),
    ("2035", 36, 31, 33),
    ("2050", 55, 25, 20),
];

const UNIVERSITY_GAP_CLOSURE: [(&str, i64, i64); 2] = [
    ("2035 Need", 2169, 2002),
    ("Total 2050 Need", 6391, 5897),
];

/// 25-35 age cohort analysis, displayed as-is
const UNIVERSITY_COHORT: [(&str, &str, &str, &str); 7] = [
    ("Estimated 25-35 age cohort size", "21,312", "25,202", "31,255"),
    ("University qualification rate", "23%", "36%", "55%"),
    ("Number with university qualifications", "4,902", "9,073", "17,190"),
    ("NEW university qualifications needed", "-", "4,171", "12,288"),
    ("For closing existing gap", "-", "2,169", "6,391"),
    ("For new entrants", "-", "2,002", "5,897"),
    ("Annual NEW university qualifications required", "-", "379 per year", "473 per year (avg)"),
];

/// (timeframe, existing workers, new entrants, total, annual production)
const GAP_TIMEFRAMES: [(&str, i64, i64, i64, &str); 3] = [
    ("2024-2035", 8015, 12022, 20037, "1,821 per year"),
    ("2035-2050", 14960, 22441, 37401, "2,493 per year"),
    ("2024-2050 Total", 22975, 34463, 57438, "2,209 per year (avg.)"),
];

/// Annual completions with a 3-year education lag
const RAMPUP_YEARS: [i64; 7] = [2024, 2027, 2030, 2035, 2040, 2045, 2050];
const ANNUAL_QUALIFICATIONS_NEEDED: [i64; 7] = [0, 1781, 1781, 1957, 2173, 2433, 1528];

/// Working age entrants and exits through 2050
const WORKFORCE_FLOW: (&str, i64, i64, i64) = ("Working Age Population", 74841, 21909, 52932);

/// All tables, built once at start-up and never mutated
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    population: MetricTable,
    qualifications: MetricTable,
    workforce_dynamics: MetricTable,
    workforce_flow: MetricTable,
    top_industries: MetricTable,
    top_occupations: MetricTable,
    additional_occupations: MetricTable,
    gap_share_2035: MetricTable,
    attainment_gap: MetricTable,
    need_by_source: MetricTable,
    gap_closure: MetricTable,
    university_rate: MetricTable,
    qualification_mix: MetricTable,
    university_gap_closure: MetricTable,
    university_cohort: MetricTable,
    gap_timeframes: MetricTable,
    rampup: MetricTable,
}

impl DatasetRegistry {
    /// Build every table from the literal constants
    pub fn load() -> Result<Self, DataError> {
        let gap_share_2035 = name_value_table(TableId::GapShare2035, &GAP_SHARE_2035)?;
        let attainment_gap = pivot_gap_share(&gap_share_2035)?;

        let registry = Self {
            population: MetricTable::try_new(TableId::Population, vec![
                ("year", int_column(&POPULATION_YEARS)),
                ("totalPopulation", int_column(&TOTAL_POPULATION)),
                ("workingAgePopulation", int_column(&WORKING_AGE_POPULATION)),
            ])?,
            qualifications: MetricTable::try_new(TableId::Qualifications, vec![
                ("year", int_column(&MODEL_YEARS)),
                ("qualifiedWorkersNeeded", int_column(&QUALIFIED_WORKERS_NEEDED)),
                ("cumulativeQualifications", int_column(&CUMULATIVE_QUALIFICATIONS)),
                ("qualificationRate", float_column(&QUALIFICATION_RATE)),
                ("estimatedEmployment", int_column(&ESTIMATED_EMPLOYMENT)),
            ])?,
            workforce_dynamics: MetricTable::try_new(TableId::WorkforceDynamics, vec![
                ("year", int_column(&WORKFORCE_YEARS)),
                ("entrants", int_column(&ENTRANTS)),
                ("exits", int_column(&EXITS)),
                ("netChange", int_column(&NET_CHANGE)),
            ])?,
            workforce_flow: MetricTable::try_new(TableId::WorkforceFlow, vec![
                ("category", text_column(&[WORKFORCE_FLOW.0])),
                ("entrants", int_column(&[WORKFORCE_FLOW.1])),
                ("exits", int_column(&[WORKFORCE_FLOW.2])),
                ("netChange", int_column(&[WORKFORCE_FLOW.3])),
            ])?,
            top_industries: industries_table()?,
            top_occupations: MetricTable::try_new(TableId::TopOccupations, vec![
                ("name", text_column(&TOP_OCCUPATIONS.map(|r| r.0))),
                ("value", int_column(&TOP_OCCUPATIONS.map(|r| r.1))),
                ("growth", int_column(&TOP_OCCUPATIONS.map(|r| r.2))),
                ("retirements", int_column(&TOP_OCCUPATIONS.map(|r| r.3))),
                ("typicalQualification", text_column(&TOP_OCCUPATIONS.map(|r| r.4))),
            ])?,
            additional_occupations: MetricTable::try_new(TableId::AdditionalOccupations, vec![
                ("name", text_column(&ADDITIONAL_OCCUPATIONS.map(|r| r.0))),
                ("value", int_column(&ADDITIONAL_OCCUPATIONS.map(|r| r.1))),
                ("growth", int_column(&ADDITIONAL_OCCUPATIONS.map(|r| r.2))),
                ("retirements", int_column(&ADDITIONAL_OCCUPATIONS.map(|r| r.3))),
            ])?,
            gap_share_2035,
            attainment_gap,
            need_by_source: name_value_table(TableId::NeedBySource, &NEED_BY_SOURCE)?,
            gap_closure: MetricTable::try_new(TableId::GapClosure, vec![
                ("category", text_column(&GAP_CLOSURE.map(|r| r.0))),
                ("existingWorkers", int_column(&GAP_CLOSURE.map(|r| r.1))),
                ("newWorkers", int_column(&GAP_CLOSURE.map(|r| r.2))),
            ])?,
            university_rate: MetricTable::try_new(TableId::UniversityRate, vec![
                ("category", text_column(&UNIVERSITY_RATE.map(|r| r.0))),
                ("value", int_column(&UNIVERSITY_RATE.map(|r| r.1))),
            ])?,
            qualification_mix: MetricTable::try_new(TableId::QualificationMix, vec![
                ("year", text_column(&QUALIFICATION_MIX.map(|r| r.0))),
                ("university", int_column(&QUALIFICATION_MIX.map(|r| r.1))),
                ("vet", int_column(&QUALIFICATION_MIX.map(|r| r.2))),
                ("noQual", int_column(&QUALIFICATION_MIX.map(|r| r.3))),
            ])?,
            university_gap_closure: MetricTable::try_new(TableId::UniversityGapClosure, vec![
                ("category", text_column(&UNIVERSITY_GAP_CLOSURE.map(|r| r.0))),
                ("existingGap", int_column(&UNIVERSITY_GAP_CLOSURE.map(|r| r.1))),
                ("newEntrants", int_column(&UNIVERSITY_GAP_CLOSURE.map(|r| r.2))),
            ])?,
            university_cohort: MetricTable::try_new(TableId::UniversityCohort, vec![
                ("metric", text_column(&UNIVERSITY_COHORT.map(|r| r.0))),
                ("y2024", text_column(&UNIVERSITY_COHORT.map(|r| r.1))),
                ("y2035", text_column(&UNIVERSITY_COHORT.map(|r| r.2))),
                ("y2050", text_column(&UNIVERSITY_COHORT.map(|r| r.3))),
            ])?,
            gap_timeframes: MetricTable::try_new(TableId::GapTimeframes, vec![
                ("timeframe", text_column(&GAP_TIMEFRAMES.map(|r| r.0))),
                ("existingWorkers", int_column(&GAP_TIMEFRAMES.map(|r| r.1))),
                ("newEntrants", int_column(&GAP_TIMEFRAMES.map(|r| r.2))),
                ("total", int_column(&GAP_TIMEFRAMES.map(|r| r.3))),
                ("annualProduction", text_column(&GAP_TIMEFRAMES.map(|r| r.4))),
            ])?,
            rampup: MetricTable::try_new(TableId::RampUp, vec![
                ("year", int_column(&RAMPUP_YEARS)),
                ("annualQualificationsNeeded", int_column(&ANNUAL_QUALIFICATIONS_NEEDED)),
            ])?,
        };

        tracing::info!("Loaded {} tables", TableId::ALL.len());
        Ok(registry)
    }

    /// Look up a table. Every `TableId` has one.
    pub fn table(&self, id: TableId) -> &MetricTable {
        match id {
            TableId::Population => &self.population,
            TableId::Qualifications => &self.qualifications,
            TableId::WorkforceDynamics => &self.workforce_dynamics,
            TableId::WorkforceFlow => &self.workforce_flow,
            TableId::TopIndustries => &self.top_industries,
            TableId::TopOccupations => &self.top_occupations,
            TableId::AdditionalOccupations => &self.additional_occupations,
            TableId::GapShare2035 => &self.gap_share_2035,
            TableId::AttainmentGap => &self.attainment_gap,
            TableId::NeedBySource => &self.need_by_source,
            TableId::GapClosure => &self.gap_closure,
            TableId::UniversityRate => &self.university_rate,
            TableId::QualificationMix => &self.qualification_mix,
            TableId::UniversityGapClosure => &self.university_gap_closure,
            TableId::UniversityCohort => &self.university_cohort,
            TableId::GapTimeframes => &self.gap_timeframes,
            TableId::RampUp => &self.rampup,
        }
    }
}

fn name_value_table(id: TableId, rows: &[(&str, i64)]) -> Result<MetricTable, DataError> {
    let names: Vec<&str> = rows.iter().map(|r| r.0).collect();
    let values: Vec<i64> = rows.iter().map(|r| r.1).collect();
    MetricTable::try_new(id, vec![
        ("name", text_column(&names)),
        ("value", int_column(&values)),
    ])
}

/// Industries with each one's share of the VSP total, in percent
fn industries_table() -> Result<MetricTable, DataError> {
    let values = TOP_INDUSTRIES.map(|r| r.1);
    let shares: Vec<f64> = values
        .iter()
        .map(|v| *v as f64 / VSP_TOTAL_NEW_WORKERS as f64 * 100.0)
        .collect();

    MetricTable::try_new(TableId::TopIndustries, vec![
        ("name", text_column(&TOP_INDUSTRIES.map(|r| r.0))),
        ("value", int_column(&values)),
        ("growth", int_column(&TOP_INDUSTRIES.map(|r| r.2))),
        ("retirements", int_column(&TOP_INDUSTRIES.map(|r| r.3))),
        ("shareOfTotal", float_column(&shares)),
    ])
}

/// One-row view of the 2035 gap pair, as exported from the attainment gap tab
fn pivot_gap_share(gap_share: &MetricTable) -> Result<MetricTable, DataError> {
    let values = gap_share.numeric_column("value")?;
    let (provided, migration) = match values.as_slice() {
        [provided, migration] => (*provided as i64, *migration as i64),
        _ => {
            return Err(DataError::RecordOutOfBounds {
                table: gap_share.name(),
                row: 1,
                len: values.len(),
            })
        }
    };

    MetricTable::try_new(TableId::AttainmentGap, vec![
        ("category", text_column(&["2035 Qualification Gap"])),
        ("populationGrowth", int_column(&[provided])),
        ("migrationRequired", int_column(&[migration])),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;

    #[test]
    fn test_every_table_loads() {
        let registry = DatasetRegistry::load().unwrap();
        for id in TableId::ALL {
            let table = registry.table(id);
            assert_eq!(table.id(), id);
            assert!(table.num_records() > 0, "{} is empty", id.name());
        }
    }

    #[test]
    fn test_population_is_chronological() {
        let registry = DatasetRegistry::load().unwrap();
        let years = registry.table(TableId::Population).numeric_column("year").unwrap();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(years.first(), Some(&2021.0));
        assert_eq!(years.last(), Some(&2051.0));
    }

    #[test]
    fn test_vsp_totals() {
        let registry = DatasetRegistry::load().unwrap();
        let industries = registry.table(TableId::TopIndustries);
        assert_eq!(industries.num_records(), 10);
        assert!(industries.sum("value").unwrap() < VSP_TOTAL_NEW_WORKERS as f64);
        assert_eq!(VSP_TOTAL_FROM_GROWTH + VSP_TOTAL_FROM_RETIREMENTS, VSP_TOTAL_NEW_WORKERS);

        let growth = industries.numeric_column("growth").unwrap();
        assert_eq!(growth.last(), Some(&-279.0));
    }

    #[test]
    fn test_industry_share() {
        let registry = DatasetRegistry::load().unwrap();
        let shares = registry.table(TableId::TopIndustries).numeric_column("shareOfTotal").unwrap();
        assert_eq!(format!("{:.1}", shares[0]), "30.2");
        assert_eq!(format!("{:.1}", shares[9]), "3.2");
    }

    #[test]
    fn test_attainment_gap_pivot() {
        let registry = DatasetRegistry::load().unwrap();
        let gap = registry.table(TableId::AttainmentGap);
        assert_eq!(gap.num_records(), 1);
        assert_eq!(
            gap.record(0).unwrap(),
            vec![
                CellValue::Text("2035 Qualification Gap".to_string()),
                CellValue::Int(16256),
                CellValue::Int(3781),
            ]
        );
    }

    #[test]
    fn test_cumulative_reaches_total_need() {
        let registry = DatasetRegistry::load().unwrap();
        let cumulative = registry.table(TableId::Qualifications)
            .numeric_column("cumulativeQualifications")
            .unwrap();
        let need = registry.table(TableId::NeedBySource).sum("value").unwrap();
        assert_eq!(cumulative.last().copied(), Some(need));
    }
}
