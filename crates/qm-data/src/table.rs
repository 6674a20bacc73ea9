//! Metric tables backed by Arrow record batches

use std::fmt;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::DataError;

/// Identifies one table in the dataset registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Population,
    Qualifications,
    WorkforceDynamics,
    WorkforceFlow,
    TopIndustries,
    TopOccupations,
    AdditionalOccupations,
    GapShare2035,
    AttainmentGap,
    NeedBySource,
    GapClosure,
    UniversityRate,
    QualificationMix,
    UniversityGapClosure,
    UniversityCohort,
    GapTimeframes,
    RampUp,
}

impl TableId {
    pub const ALL: [TableId; 17] = [
        TableId::Population,
        TableId::Qualifications,
        TableId::WorkforceDynamics,
        TableId::WorkforceFlow,
        TableId::TopIndustries,
        TableId::TopOccupations,
        TableId::AdditionalOccupations,
        TableId::GapShare2035,
        TableId::AttainmentGap,
        TableId::NeedBySource,
        TableId::GapClosure,
        TableId::UniversityRate,
        TableId::QualificationMix,
        TableId::UniversityGapClosure,
        TableId::UniversityCohort,
        TableId::GapTimeframes,
        TableId::RampUp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TableId::Population => "population",
            TableId::Qualifications => "qualifications",
            TableId::WorkforceDynamics => "workforce_dynamics",
            TableId::WorkforceFlow => "workforce_flow",
            TableId::TopIndustries => "top_industries",
            TableId::TopOccupations => "top_occupations",
            TableId::AdditionalOccupations => "additional_occupations",
            TableId::GapShare2035 => "gap_share_2035",
            TableId::AttainmentGap => "attainment_gap",
            TableId::NeedBySource => "need_by_source",
            TableId::GapClosure => "gap_closure",
            TableId::UniversityRate => "university_rate",
            TableId::QualificationMix => "qualification_mix",
            TableId::UniversityGapClosure => "university_gap_closure",
            TableId::UniversityCohort => "university_cohort",
            TableId::GapTimeframes => "gap_timeframes",
            TableId::RampUp => "rampup",
        }
    }
}

/// A single field of a single record
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Numeric value, if this cell holds one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            CellValue::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }
}

/// Literal rendering: no separators, no rounding.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

/// Column of 64-bit integers
pub fn int_column(values: &[i64]) -> ArrayRef {
    Arc::new(Int64Array::from(values.to_vec()))
}

/// Column of 64-bit floats
pub fn float_column(values: &[f64]) -> ArrayRef {
    Arc::new(Float64Array::from(values.to_vec()))
}

/// Column of UTF-8 labels
pub fn text_column(values: &[&str]) -> ArrayRef {
    Arc::new(StringArray::from(values.to_vec()))
}

/// An ordered sequence of records sharing one field set.
///
/// Record order is significant and preserved by every accessor.
#[derive(Debug, Clone)]
pub struct MetricTable {
    id: TableId,
    batch: RecordBatch,
}

impl MetricTable {
    /// Build a table from named columns.
    ///
    /// Fails if the columns differ in length, so every record has every field.
    pub fn try_new(id: TableId, columns: Vec<(&str, ArrayRef)>) -> Result<Self, DataError> {
        let fields: Vec<Field> = columns
            .iter()
            .map(|(name, array)| Field::new(*name, array.data_type().clone(), false))
            .collect();
        let arrays: Vec<ArrayRef> = columns.into_iter().map(|(_, array)| array).collect();

        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
        tracing::debug!("Built table '{}' with {} records", id.name(), batch.num_rows());

        Ok(Self { id, batch })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn num_records(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_fields(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// Underlying record batch
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Position of `field` in the schema
    pub fn field_index(&self, field: &str) -> Result<usize, DataError> {
        self.batch
            .schema()
            .index_of(field)
            .map_err(|_| DataError::MissingField {
                table: self.name(),
                field: field.to_string(),
            })
    }

    /// Value of field `col` in record `row`
    pub fn value(&self, row: usize, col: usize) -> Result<CellValue, DataError> {
        if row >= self.num_records() {
            return Err(DataError::RecordOutOfBounds {
                table: self.name(),
                row,
                len: self.num_records(),
            });
        }

        let column = self.batch.column(col);
        if let Some(ints) = column.as_any().downcast_ref::<Int64Array>() {
            Ok(CellValue::Int(ints.value(row)))
        } else if let Some(floats) = column.as_any().downcast_ref::<Float64Array>() {
            Ok(CellValue::Float(floats.value(row)))
        } else if let Some(strings) = column.as_any().downcast_ref::<StringArray>() {
            Ok(CellValue::Text(strings.value(row).to_string()))
        } else {
            Err(self.unsupported(col, column.data_type()))
        }
    }

    /// All fields of record `row`
    pub fn record(&self, row: usize) -> Result<Vec<CellValue>, DataError> {
        (0..self.num_fields()).map(|col| self.value(row, col)).collect()
    }

    /// Numeric field as `f64`, for plotting
    pub fn numeric_column(&self, field: &str) -> Result<Vec<f64>, DataError> {
        let col = self.field_index(field)?;
        let column = self.batch.column(col);

        if let Some(ints) = column.as_any().downcast_ref::<Int64Array>() {
            Ok(ints.values().iter().map(|v| *v as f64).collect())
        } else if let Some(floats) = column.as_any().downcast_ref::<Float64Array>() {
            Ok(floats.values().to_vec())
        } else {
            Err(self.unsupported(col, column.data_type()))
        }
    }

    /// Text field, for category axes and labels
    pub fn text_column(&self, field: &str) -> Result<Vec<String>, DataError> {
        let col = self.field_index(field)?;
        let column = self.batch.column(col);

        match column.as_any().downcast_ref::<StringArray>() {
            Some(strings) => Ok((0..strings.len()).map(|i| strings.value(i).to_string()).collect()),
            None => Err(self.unsupported(col, column.data_type())),
        }
    }

    /// Sum of a numeric field
    pub fn sum(&self, field: &str) -> Result<f64, DataError> {
        Ok(self.numeric_column(field)?.iter().sum())
    }

    fn unsupported(&self, col: usize, data_type: &DataType) -> DataError {
        DataError::UnsupportedType {
            table: self.name(),
            field: self.batch.schema().field(col).name().clone(),
            data_type: format!("{:?}", data_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricTable {
        MetricTable::try_new(TableId::RampUp, vec![
            ("year", int_column(&[2024, 2027])),
            ("rate", float_column(&[0.56, 0.8])),
            ("label", text_column(&["start", "ramp"])),
        ]).unwrap()
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = MetricTable::try_new(TableId::RampUp, vec![
            ("year", int_column(&[2024, 2027, 2030])),
            ("annualQualificationsNeeded", int_column(&[0, 1781])),
        ]);
        assert!(matches!(result, Err(DataError::Arrow(_))));
    }

    #[test]
    fn test_record_values() {
        let table = sample();
        assert_eq!(table.num_records(), 2);
        assert_eq!(table.field_names(), vec!["year", "rate", "label"]);
        assert_eq!(
            table.record(1).unwrap(),
            vec![CellValue::Int(2027), CellValue::Float(0.8), CellValue::Text("ramp".to_string())]
        );
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(CellValue::Int(207601).to_string(), "207601");
        assert_eq!(CellValue::Int(-279).to_string(), "-279");
        assert_eq!(CellValue::Float(0.56).to_string(), "0.56");
        assert_eq!(CellValue::Float(0.8).to_string(), "0.8");
        assert_eq!(CellValue::Float(1.0 / 3.0).to_string(), "0.3333333333333333");
    }

    #[test]
    fn test_missing_field_and_bounds() {
        let table = sample();
        assert!(matches!(
            table.field_index("population"),
            Err(DataError::MissingField { table: "rampup", .. })
        ));
        assert!(matches!(
            table.value(5, 0),
            Err(DataError::RecordOutOfBounds { row: 5, len: 2, .. })
        ));
    }

    #[test]
    fn test_typed_columns() {
        let table = sample();
        assert_eq!(table.numeric_column("year").unwrap(), vec![2024.0, 2027.0]);
        assert_eq!(table.text_column("label").unwrap(), vec!["start", "ramp"]);
        assert!(matches!(table.numeric_column("label"), Err(DataError::UnsupportedType { .. })));
        assert_eq!(table.sum("year").unwrap(), 4051.0);
    }
}
