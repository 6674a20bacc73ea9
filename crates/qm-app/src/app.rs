//! The dashboard window

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Context};
use parking_lot::Mutex;
use qm_core::events::events::{ExportCompleted, ExportFailed, ViewChanged};
use qm_core::{handler_from_fn, ViewId};
use qm_data::ExportArtifact;
use qm_ui::{ShellAction, StatusKind, Theme, UiState};
use qm_views::{DashboardView, ViewerContext};

use crate::output;

/// Status updates produced by event handlers, drained once per frame
type PendingStatus = Arc<Mutex<Vec<(StatusKind, String, String)>>>;

/// Main application state
pub struct QualificationModelApp {
    /// Viewer context shared between all views
    viewer: ViewerContext,

    /// One view per tab, in `ViewId::ALL` order
    views: Vec<Box<dyn DashboardView>>,

    ui_state: UiState,
    pending_status: PendingStatus,
}

impl QualificationModelApp {
    pub fn new(cc: &eframe::CreationContext<'_>, viewer: ViewerContext) -> Self {
        qm_ui::apply_theme(&cc.egui_ctx, &Theme { dark_mode: viewer.config.dark_mode });

        let pending_status = PendingStatus::default();
        subscribe_handlers(&viewer, &cc.egui_ctx, &pending_status);

        tracing::info!("Dashboard opened on '{}'", viewer.active_view());
        Self {
            viewer,
            views: qm_views::create_all_views(),
            ui_state: UiState::default(),
            pending_status,
        }
    }

    /// Export the active tab and hand the bytes to the save collaborator
    fn download_csv(&mut self) {
        let view = self.viewer.active_view();
        let artifact = match self.viewer.exporter.export(view) {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::error!("Export of '{}' failed: {}", view, e);
                self.viewer.event_bus().publish(ExportFailed { view, error: e.to_string() });
                return;
            }
        };

        if artifact.is_empty() {
            tracing::info!("Nothing to export for '{}'", view);
            return;
        }

        match self.save(&artifact) {
            Ok(Some(path)) => self.viewer.event_bus().publish(ExportCompleted {
                view,
                filename: path.display().to_string(),
                bytes: artifact.content.len(),
            }),
            Ok(None) => tracing::info!("Export of '{}' cancelled", view),
            Err(e) => {
                tracing::error!("Saving '{}' failed: {:#}", artifact.filename, e);
                self.viewer.event_bus().publish(ExportFailed { view, error: format!("{:#}", e) });
            }
        }
    }

    /// Write to the configured export directory, or ask where to save.
    ///
    /// `Ok(None)` means the dialog was dismissed.
    fn save(&self, artifact: &ExportArtifact) -> anyhow::Result<Option<PathBuf>> {
        if let Some(dir) = &self.viewer.config.export_dir {
            return output::save_to_dir(artifact, dir).map(Some);
        }

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&artifact.filename)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return Ok(None);
        };
        output::save_to_path(artifact, &path)?;
        Ok(Some(path))
    }

    fn active_view_mut(&mut self) -> Option<&mut Box<dyn DashboardView>> {
        let active = self.viewer.active_view();
        self.views.iter_mut().find(|v| v.id() == active)
    }
}

fn subscribe_handlers(viewer: &ViewerContext, egui_ctx: &Context, pending: &PendingStatus) {
    let bus = viewer.event_bus();

    let ctx = egui_ctx.clone();
    bus.subscribe::<ViewChanged>(handler_from_fn(move |event| {
        if let Some(changed) = event.as_any().downcast_ref::<ViewChanged>() {
            tracing::debug!("Switching tab to {}", changed.to.tab_label());
            ctx.request_repaint();
        }
    }));

    let sink = pending.clone();
    bus.subscribe::<ExportCompleted>(handler_from_fn(move |event| {
        if let Some(done) = event.as_any().downcast_ref::<ExportCompleted>() {
            tracing::info!("Saved {} ({} bytes)", done.filename, done.bytes);
            sink.lock().push((StatusKind::Info, "Export saved".to_string(), done.filename.clone()));
        }
    }));

    let sink = pending.clone();
    bus.subscribe::<ExportFailed>(handler_from_fn(move |event| {
        if let Some(failed) = event.as_any().downcast_ref::<ExportFailed>() {
            sink.lock().push((
                StatusKind::Error,
                format!("Export of {} failed", failed.view.tab_label()),
                failed.error.clone(),
            ));
        }
    }));
}

impl eframe::App for QualificationModelApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        for (kind, title, message) in self.pending_status.lock().drain(..) {
            match kind {
                StatusKind::Info => self.ui_state.push_info(title, message),
                StatusKind::Error => self.ui_state.push_error(title, message),
            }
        }

        if qm_ui::header(ctx, &self.viewer) == ShellAction::DownloadCsv {
            self.download_csv();
        }

        let viewer = self.viewer.clone();
        let mut ui_state = std::mem::take(&mut self.ui_state);
        match self.active_view_mut() {
            Some(view) => qm_ui::central_panel(ctx, &viewer, &mut ui_state, view.as_mut()),
            None => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.label(format!("No view for {}", viewer.active_view()));
                });
            }
        }
        self.ui_state = ui_state;

        // Keep expiring status messages moving
        if !self.ui_state.status_messages.is_empty() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

/// Initial tab, overridden on the command line
pub fn resolve_initial_view(viewer: &ViewerContext, requested: Option<&str>) -> anyhow::Result<ViewId> {
    match requested {
        Some(slug) => Ok(viewer.selector.select(slug)?),
        None => Ok(viewer.active_view()),
    }
}
