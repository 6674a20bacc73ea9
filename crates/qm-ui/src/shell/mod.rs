use egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel};
use qm_core::ViewId;
use qm_views::{narrative, DashboardView, ViewerContext};

use crate::{StatusKind, UiState};

/// What the user asked for in the header this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    None,
    /// Export the active tab's table
    DownloadCsv,
}

/// Render the title, the export button and the tab strip
pub fn header(ctx: &Context, viewer: &ViewerContext) -> ShellAction {
    let mut action = ShellAction::None;

    TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} Qualification Attainment Model (2024-2034)",
                    viewer.config.region_name
                ))
                .size(22.0)
                .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("⬇ Download CSV")
                    .on_hover_text("Export the data behind the current tab")
                    .clicked()
                {
                    action = ShellAction::DownloadCsv;
                }
            });
        });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            let active = viewer.active_view();
            for view in ViewId::ALL {
                if ui.selectable_label(active == view, view.tab_label()).clicked() {
                    viewer.selector.set_active_view(view);
                }
            }
        });
        ui.add_space(4.0);
    });

    action
}

/// Render the active view, status messages and the footer
pub fn central_panel(
    ctx: &Context,
    viewer: &ViewerContext,
    ui_state: &mut UiState,
    view: &mut dyn DashboardView,
) {
    CentralPanel::default().show(ctx, |ui| {
        show_status_messages(ui, ui_state);

        ScrollArea::vertical()
            .id_source(("tab_scroll", view.id().slug()))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                view.ui(viewer, ui);
                ui.add_space(16.0);
                narrative::footer(ui);
            });
    });
}

/// Show status messages
pub fn show_status_messages(ui: &mut egui::Ui, ui_state: &mut UiState) {
    ui_state.expire_messages(std::time::Instant::now());

    for msg in &ui_state.status_messages {
        let (icon, color) = match msg.kind {
            StatusKind::Info => ("✔", crate::theme::success_color()),
            StatusKind::Error => ("⚠", crate::theme::error_color()),
        };

        egui::Frame::none()
            .fill(color.linear_multiply(0.2))
            .stroke(egui::Stroke::new(1.0, color))
            .rounding(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).color(color));
                    ui.label(&msg.title);
                    ui.separator();
                    ui.label(&msg.message);
                });
            });
    }
}
