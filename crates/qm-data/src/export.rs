//! CSV export of the table bound to each dashboard tab

use std::sync::Arc;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use qm_core::ViewId;

use crate::registry::DatasetRegistry;
use crate::table::{MetricTable, TableId};
use crate::DataError;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Subject used in the filename when a view has nothing to export
const DEFAULT_SUBJECT: &str = "qualification-model";

/// One exported column: CSV header and the table field it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    pub header: &'static str,
    pub field: &'static str,
}

/// Which table a view exports, which columns, and under what filename subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportBinding {
    pub table: TableId,
    pub columns: &'static [ExportColumn],
    pub subject: &'static str,
}

impl ExportBinding {
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.header)
    }
}

const fn col(header: &'static str, field: &'static str) -> ExportColumn {
    ExportColumn { header, field }
}

const POPULATION_COLUMNS: &[ExportColumn] = &[
    col("Year", "year"),
    col("Total Population", "totalPopulation"),
    col("Working Age Population", "workingAgePopulation"),
];

const QUALIFICATION_COLUMNS: &[ExportColumn] = &[
    col("Year", "year"),
    col("Qualified Workers Needed", "qualifiedWorkersNeeded"),
    col("Cumulative Qualifications", "cumulativeQualifications"),
    col("Qualification Rate", "qualificationRate"),
    col("Estimated Employment", "estimatedEmployment"),
];

const INDUSTRY_COLUMNS: &[ExportColumn] = &[
    col("Industry", "name"),
    col("Total New Workers", "value"),
    col("From Growth", "growth"),
    col("From Retirements", "retirements"),
];

const OCCUPATION_COLUMNS: &[ExportColumn] = &[
    col("Occupation", "name"),
    col("Total New Workers", "value"),
    col("From Growth", "growth"),
    col("From Retirements", "retirements"),
];

const RAMPUP_COLUMNS: &[ExportColumn] = &[
    col("Year", "year"),
    col("Annual Qualifications Needed", "annualQualificationsNeeded"),
];

const ATTAINMENT_GAP_COLUMNS: &[ExportColumn] = &[
    col("Category", "category"),
    col("Population Growth Can Provide", "populationGrowth"),
    col("Migration Required", "migrationRequired"),
];

/// Export binding for a view, or `None` if the view exports nothing.
///
/// The executive summary exports the population series, like the population tab.
pub fn export_binding(view: ViewId) -> Option<ExportBinding> {
    let binding = match view {
        ViewId::Summary | ViewId::Population => ExportBinding {
            table: TableId::Population,
            columns: POPULATION_COLUMNS,
            subject: "population-data",
        },
        ViewId::Qualifications => ExportBinding {
            table: TableId::Qualifications,
            columns: QUALIFICATION_COLUMNS,
            subject: "qualification-data",
        },
        ViewId::AttainmentGap => ExportBinding {
            table: TableId::AttainmentGap,
            columns: ATTAINMENT_GAP_COLUMNS,
            subject: "attainment-gap",
        },
        ViewId::VspIndustries => ExportBinding {
            table: TableId::TopIndustries,
            columns: INDUSTRY_COLUMNS,
            subject: "top-industries",
        },
        ViewId::VspOccupations => ExportBinding {
            table: TableId::TopOccupations,
            columns: OCCUPATION_COLUMNS,
            subject: "top-occupations",
        },
        ViewId::RampUp => ExportBinding {
            table: TableId::RampUp,
            columns: RAMPUP_COLUMNS,
            subject: "qualification-rampup",
        },
    };
    Some(binding)
}

/// A finished export, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content: Vec<u8>,
    pub mime: &'static str,
}

impl ExportArtifact {
    /// Number of data lines, excluding the header
    pub fn data_lines(&self) -> usize {
        self.content
            .split(|b| *b == b'\n')
            .filter(|line| !line.is_empty())
            .count()
            .saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Serializes the table bound to a view
pub struct CsvExporter {
    registry: Arc<DatasetRegistry>,
    region_slug: String,
}

impl CsvExporter {
    pub fn new(registry: Arc<DatasetRegistry>, region_slug: impl Into<String>) -> Self {
        Self {
            registry,
            region_slug: region_slug.into(),
        }
    }

    pub fn region_slug(&self) -> &str {
        &self.region_slug
    }

    /// Serialize the table bound to `view`.
    ///
    /// A view without a binding yields an empty artifact, not an error.
    pub fn export(&self, view: ViewId) -> Result<ExportArtifact, DataError> {
        let Some(binding) = export_binding(view) else {
            tracing::info!("View '{}' has no export binding", view);
            return Ok(self.artifact(DEFAULT_SUBJECT, Vec::new()));
        };

        let table = self.registry.table(binding.table);
        let content = write_csv(table, binding.columns)?;

        tracing::info!(
            "Exported {} records of '{}' for view '{}' ({} bytes)",
            table.num_records(),
            table.name(),
            view,
            content.len()
        );
        Ok(self.artifact(binding.subject, content))
    }

    fn artifact(&self, subject: &str, content: Vec<u8>) -> ExportArtifact {
        ExportArtifact {
            filename: format!("{}-{}.csv", self.region_slug, subject),
            content,
            mime: CSV_MIME_TYPE,
        }
    }
}

fn write_csv(table: &MetricTable, columns: &[ExportColumn]) -> Result<Vec<u8>, DataError> {
    // Resolve every field before writing anything
    let indices = columns
        .iter()
        .map(|c| table.field_index(c.field))
        .collect::<Result<Vec<_>, _>>()?;

    let mut header = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header.write_record(columns.iter().map(|c| c.header))?;
    let buffer = header.into_inner().map_err(|e| DataError::Io(e.into_error()))?;

    // Numbers stay bare, text is quoted
    let mut rows = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);
    for row in 0..table.num_records() {
        let fields = indices
            .iter()
            .map(|col| table.value(row, *col).map(|v| v.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        rows.write_record(&fields)?;
    }

    rows.into_inner().map_err(|e| DataError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qm_core::{EventBus, ViewSelector};

    fn exporter() -> CsvExporter {
        CsvExporter::new(Arc::new(DatasetRegistry::load().unwrap()), "central-highlands")
    }

    fn lines(artifact: &ExportArtifact) -> Vec<String> {
        String::from_utf8(artifact.content.clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_population_export() {
        let artifact = exporter().export(ViewId::Population).unwrap();
        assert_eq!(artifact.filename, "central-highlands-population-data.csv");
        assert_eq!(artifact.mime, "text/csv;charset=utf-8");

        let lines = lines(&artifact);
        assert_eq!(lines[0], "Year,Total Population,Working Age Population");
        assert_eq!(lines[1], "2021,207601,118374");
        assert_eq!(lines[7], "2051,325259,183855");
        assert!(artifact.content.ends_with(b"\n"));
    }

    #[test]
    fn test_summary_exports_population() {
        let exporter = exporter();
        let summary = exporter.export(ViewId::Summary).unwrap();
        let population = exporter.export(ViewId::Population).unwrap();
        assert_eq!(summary, population);
    }

    #[test]
    fn test_industries_export() {
        let artifact = exporter().export(ViewId::VspIndustries).unwrap();
        assert_eq!(artifact.filename, "central-highlands-top-industries.csv");

        let lines = lines(&artifact);
        assert_eq!(lines[0], "Industry,Total New Workers,From Growth,From Retirements");
        assert_eq!(lines[1], "\"Health Care & Social Assistance\",10773,5971,4794");
        assert_eq!(lines[6], "\"Agriculture, Forestry & Fishing\",1818,109,1704");
        assert_eq!(lines[10], "\"Manufacturing\",1146,-279,1441");
    }

    #[test]
    fn test_occupations_export_omits_qualification() {
        let artifact = exporter().export(ViewId::VspOccupations).unwrap();
        let lines = lines(&artifact);
        assert_eq!(lines[0], "Occupation,Total New Workers,From Growth,From Retirements");
        assert_eq!(lines[1], "\"Aged & Disabled Carers\",1882,674,1208");
    }

    #[test]
    fn test_qualification_rates_unrounded() {
        let artifact = exporter().export(ViewId::Qualifications).unwrap();
        assert_eq!(artifact.filename, "central-highlands-qualification-data.csv");

        let lines = lines(&artifact);
        assert_eq!(
            lines[0],
            "Year,Qualified Workers Needed,Cumulative Qualifications,Qualification Rate,Estimated Employment"
        );
        assert_eq!(lines[1], "2024,53216,0,0.56,95028");
        assert_eq!(lines[7], "2050,109126,55910,0.8,136408");
    }

    #[test]
    fn test_attainment_gap_single_row() {
        let artifact = exporter().export(ViewId::AttainmentGap).unwrap();
        let text = String::from_utf8(artifact.content).unwrap();
        assert_eq!(
            text,
            "Category,Population Growth Can Provide,Migration Required\n\"2035 Qualification Gap\",16256,3781\n"
        );
    }

    #[test]
    fn test_rampup_export() {
        let artifact = exporter().export(ViewId::RampUp).unwrap();
        assert_eq!(artifact.filename, "central-highlands-qualification-rampup.csv");
        assert_eq!(lines(&artifact)[2], "2027,1781");
    }

    #[test]
    fn test_export_is_deterministic() {
        let exporter = exporter();
        for view in ViewId::ALL {
            assert_eq!(exporter.export(view).unwrap(), exporter.export(view).unwrap());
        }
    }

    #[test]
    fn test_data_lines_match_records() {
        let registry = Arc::new(DatasetRegistry::load().unwrap());
        let exporter = CsvExporter::new(registry.clone(), "central-highlands");
        for view in ViewId::ALL {
            let binding = export_binding(view).unwrap();
            let artifact = exporter.export(view).unwrap();
            assert_eq!(artifact.data_lines(), registry.table(binding.table).num_records());
        }
    }

    #[test]
    fn test_every_binding_field_exists() {
        let registry = DatasetRegistry::load().unwrap();
        for view in ViewId::ALL {
            let Some(binding) = export_binding(view) else { continue };
            let table = registry.table(binding.table);
            for column in binding.columns {
                assert!(table.field_index(column.field).is_ok(), "{} missing {}", table.name(), column.field);
            }
        }
    }

    #[test]
    fn test_missing_field_is_error() {
        let registry = DatasetRegistry::load().unwrap();
        let table = registry.table(TableId::RampUp);
        let result = write_csv(table, &[col("Year", "year"), col("Total", "total")]);
        assert!(matches!(result, Err(DataError::MissingField { field, .. }) if field == "total"));
    }

    #[test]
    fn test_region_slug_in_filename() {
        let exporter = CsvExporter::new(Arc::new(DatasetRegistry::load().unwrap()), "grampians");
        let artifact = exporter.export(ViewId::RampUp).unwrap();
        assert_eq!(artifact.filename, "grampians-qualification-rampup.csv");
    }

    #[test]
    fn test_switch_then_export() {
        let exporter = exporter();
        let selector = ViewSelector::new(ViewId::Population, Arc::new(EventBus::new()));

        selector.set_active_view(ViewId::RampUp);
        let artifact = exporter.export(selector.active_view()).unwrap();
        assert_eq!(artifact.filename, "central-highlands-qualification-rampup.csv");

        // Rejected slug keeps the previous view and its export
        assert!(selector.select("not-a-tab").is_err());
        assert_eq!(exporter.export(selector.active_view()).unwrap(), artifact);
    }
}
