//! Table view implementation

use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use qm_data::{CellValue, DataError, MetricTable};

use crate::charts::format_thousands;

/// How a cell is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// As stored
    Plain,
    /// Thousands separators
    Thousands,
    /// Already a percentage, one decimal place
    Percent,
}

/// One displayed column
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: &'static str,
    pub field: &'static str,
    pub format: CellFormat,
}

impl TableColumn {
    pub fn new(header: &'static str, field: &'static str, format: CellFormat) -> Self {
        Self { header, field, format }
    }
}

/// Configuration for table views
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub columns: Vec<TableColumn>,
    /// Emphasised last row, e.g. totals
    pub footer: Option<Vec<String>>,
    pub striped_rows: bool,
}

/// Table view that displays a metric table with formatted cells
pub struct TableView {
    id: &'static str,
    pub config: TableConfig,
}

impl TableView {
    pub fn new(id: &'static str, columns: Vec<TableColumn>) -> Self {
        Self {
            id,
            config: TableConfig {
                columns,
                footer: None,
                striped_rows: true,
            },
        }
    }

    pub fn with_footer(mut self, footer: Vec<String>) -> Self {
        self.config.footer = Some(footer);
        self
    }

    /// Formatted cells of every record
    fn rows(&self, table: &MetricTable) -> Result<Vec<Vec<String>>, DataError> {
        let indices = self
            .config
            .columns
            .iter()
            .map(|c| table.field_index(c.field))
            .collect::<Result<Vec<_>, _>>()?;

        (0..table.num_records())
            .map(|row| {
                indices
                    .iter()
                    .zip(&self.config.columns)
                    .map(|(col, column)| Ok(format_cell(&table.value(row, *col)?, column.format)))
                    .collect::<Result<Vec<String>, DataError>>()
            })
            .collect()
    }

    pub fn ui(&self, ui: &mut Ui, table: &MetricTable) {
        let rows = match self.rows(table) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::debug!("Table '{}' unavailable: {}", table.name(), e);
                ui.label(RichText::new(format!("No data to display ({})", e)).weak());
                return;
            }
        };

        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
        let columns = &self.config.columns;

        ui.push_id(self.id, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(self.config.striped_rows)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .vscroll(false);
            for (i, _) in columns.iter().enumerate() {
                builder = if i == 0 {
                    builder.column(Column::auto().at_least(160.0))
                } else {
                    builder.column(Column::auto().at_least(90.0))
                };
            }

            builder
                .header(20.0, |mut header| {
                    for column in columns {
                        header.col(|ui| {
                            ui.strong(column.header);
                        });
                    }
                })
                .body(|mut body| {
                    for cells in &rows {
                        body.row(text_height, |mut row| {
                            for cell in cells {
                                row.col(|ui| {
                                    let response = ui.label(cell);

                                    // Right-click menu for the whole record
                                    response.context_menu(|ui| {
                                        if ui.button("📋 Copy Row Data").clicked() {
                                            ui.output_mut(|o| o.copied_text = cells.join("\t"));
                                            ui.close_menu();
                                        }
                                    });
                                });
                            }
                        });
                    }

                    if let Some(footer) = &self.config.footer {
                        body.row(text_height, |mut row| {
                            for cell in footer {
                                row.col(|ui| {
                                    ui.strong(cell);
                                });
                            }
                        });
                    }
                });
        });
    }
}

/// Render one cell for display
pub fn format_cell(value: &CellValue, format: CellFormat) -> String {
    match (value, format) {
        (CellValue::Text(text), _) => text.clone(),
        (value, CellFormat::Plain) => value.to_string(),
        (CellValue::Int(v), CellFormat::Thousands) => format_thousands(*v as f64),
        (CellValue::Float(v), CellFormat::Thousands) => format_thousands(*v),
        (CellValue::Int(v), CellFormat::Percent) => format!("{:.1}%", *v as f64),
        (CellValue::Float(v), CellFormat::Percent) => format!("{:.1}%", v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qm_data::{DatasetRegistry, TableId};

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&CellValue::Int(10773), CellFormat::Thousands), "10,773");
        assert_eq!(format_cell(&CellValue::Int(10773), CellFormat::Plain), "10773");
        assert_eq!(format_cell(&CellValue::Float(30.172), CellFormat::Percent), "30.2%");
        assert_eq!(format_cell(&CellValue::Text("2024".into()), CellFormat::Thousands), "2024");
    }

    #[test]
    fn test_industry_rows() {
        let registry = DatasetRegistry::load().unwrap();
        let view = TableView::new("industries", vec![
            TableColumn::new("Industry", "name", CellFormat::Plain),
            TableColumn::new("New Workers Needed", "value", CellFormat::Thousands),
            TableColumn::new("Percentage", "shareOfTotal", CellFormat::Percent),
        ]);
        let rows = view.rows(registry.table(TableId::TopIndustries)).unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], vec!["Health Care & Social Assistance", "10,773", "30.2%"]);
        assert_eq!(rows[9], vec!["Manufacturing", "1,146", "3.2%"]);
    }

    #[test]
    fn test_unknown_column() {
        let registry = DatasetRegistry::load().unwrap();
        let view = TableView::new("broken", vec![TableColumn::new("X", "x", CellFormat::Plain)]);
        assert!(view.rows(registry.table(TableId::RampUp)).is_err());
    }
}
