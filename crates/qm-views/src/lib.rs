//! Dashboard views for the qualification model

pub mod charts;
pub mod narrative;
mod tables;
mod tabs;

pub use tables::{format_cell, CellFormat, TableColumn, TableConfig, TableView};
pub use tabs::{
    AttainmentGapView, IndustriesView, OccupationsView, PopulationView, QualificationsView,
    RampUpView, SummaryView,
};

use std::sync::Arc;

use egui::Ui;
use qm_core::{EventBus, ViewError, ViewId, ViewSelector};
use qm_data::{CsvExporter, DashboardConfig, DatasetRegistry, MetricTable, TableId};

/// Context passed to views during rendering
#[derive(Clone)]
pub struct ViewerContext {
    /// Active tab
    pub selector: Arc<ViewSelector>,

    /// Every table, read-only
    pub registry: Arc<DatasetRegistry>,

    /// Serializes the active tab's table
    pub exporter: Arc<CsvExporter>,

    pub config: Arc<DashboardConfig>,
}

impl ViewerContext {
    /// Fails if the configured initial view is not a known slug
    pub fn new(
        config: DashboardConfig,
        registry: Arc<DatasetRegistry>,
        event_bus: Arc<EventBus>,
    ) -> Result<Self, ViewError> {
        let initial = config.initial_view()?;
        let exporter = CsvExporter::new(registry.clone(), config.region_slug.clone());

        Ok(Self {
            selector: Arc::new(ViewSelector::new(initial, event_bus)),
            registry,
            exporter: Arc::new(exporter),
            config: Arc::new(config),
        })
    }

    pub fn active_view(&self) -> ViewId {
        self.selector.active_view()
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        self.selector.event_bus()
    }

    pub fn table(&self, id: TableId) -> &MetricTable {
        self.registry.table(id)
    }
}

/// Base trait for every dashboard tab
pub trait DashboardView: Send + Sync {
    /// The tab this view renders
    fn id(&self) -> ViewId;

    /// Get the display name
    fn title(&self) -> &str {
        self.id().tab_label()
    }

    /// Draw the UI
    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui);
}

/// Build the view for a tab
pub fn create_view(id: ViewId) -> Box<dyn DashboardView> {
    match id {
        ViewId::Summary => Box::new(SummaryView::new()),
        ViewId::Population => Box::new(PopulationView::new()),
        ViewId::Qualifications => Box::new(QualificationsView::new()),
        ViewId::AttainmentGap => Box::new(AttainmentGapView::new()),
        ViewId::VspIndustries => Box::new(IndustriesView::new()),
        ViewId::VspOccupations => Box::new(OccupationsView::new()),
        ViewId::RampUp => Box::new(RampUpView::new()),
    }
}

/// One view per tab, in tab-strip order
pub fn create_all_views() -> Vec<Box<dyn DashboardView>> {
    ViewId::ALL.into_iter().map(create_view).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config: DashboardConfig) -> Result<ViewerContext, ViewError> {
        ViewerContext::new(
            config,
            Arc::new(DatasetRegistry::load().unwrap()),
            Arc::new(EventBus::new()),
        )
    }

    #[test]
    fn test_views_match_tabs() {
        let views = create_all_views();
        assert_eq!(views.len(), ViewId::ALL.len());
        for (view, id) in views.iter().zip(ViewId::ALL) {
            assert_eq!(view.id(), id);
            assert_eq!(view.title(), id.tab_label());
        }
    }

    #[test]
    fn test_context_starts_on_configured_view() {
        let config = DashboardConfig {
            initial_view: "vsp-occupations".to_string(),
            ..Default::default()
        };
        let ctx = context(config).unwrap();
        assert_eq!(ctx.active_view(), ViewId::VspOccupations);
        assert_eq!(ctx.exporter.region_slug(), "central-highlands");
    }

    #[test]
    fn test_context_rejects_unknown_view() {
        let config = DashboardConfig {
            initial_view: "pdf".to_string(),
            ..Default::default()
        };
        assert!(matches!(context(config), Err(ViewError::InvalidView(_))));
    }

    #[test]
    fn test_export_follows_selection() {
        let ctx = context(DashboardConfig::default()).unwrap();
        ctx.selector.set_active_view(ViewId::AttainmentGap);
        let artifact = ctx.exporter.export(ctx.active_view()).unwrap();
        assert_eq!(artifact.filename, "central-highlands-attainment-gap.csv");
        assert_eq!(artifact.data_lines(), 1);
    }
}
