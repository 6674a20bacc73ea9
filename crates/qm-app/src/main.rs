//! Qualification model dashboard entry point
//!
//! Opens the dashboard window by default; `export` writes one tab's CSV
//! without opening a window.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qm_core::EventBus;
use qm_data::{DashboardConfig, DatasetRegistry};
use qm_views::ViewerContext;

mod app;
mod output;

/// Central Highlands qualification attainment model.
///
/// Population, qualification and workforce projections with CSV export of
/// the data behind each tab.
#[derive(Parser, Debug)]
#[command(name = "qualification-model", version, about)]
struct Cli {
    /// Tab to open on (e.g. population, vsp-industries)
    #[arg(long, global = true)]
    view: Option<String>,

    /// Config file (defaults to ./qualification-model.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the CSV for one tab without opening a window
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Directory to write into (defaults to the configured export_dir, then .)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the CSV instead of writing a file
    #[arg(long, conflicts_with = "out")]
    stdout: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = DashboardConfig::discover(cli.config.as_deref()).context("Failed to load config")?;
    let registry = Arc::new(DatasetRegistry::load().context("Failed to build dataset tables")?);
    let viewer = ViewerContext::new(config, registry, Arc::new(EventBus::new()))
        .context("Invalid initial view in config")?;
    app::resolve_initial_view(&viewer, cli.view.as_deref())?;

    match cli.command {
        Some(Command::Export(args)) => run_export(&viewer, &args),
        None => run_gui(viewer),
    }
}

fn run_export(viewer: &ViewerContext, args: &ExportArgs) -> Result<()> {
    let view = viewer.active_view();
    let artifact = viewer
        .exporter
        .export(view)
        .with_context(|| format!("Failed to export '{}'", view))?;

    if artifact.is_empty() {
        info!("'{}' has nothing to export", view);
        return Ok(());
    }

    if args.stdout {
        return output::write_to(&artifact, std::io::stdout().lock());
    }

    let dir = args
        .out
        .as_deref()
        .or(viewer.config.export_dir.as_deref())
        .unwrap_or(Path::new("."));
    let path = output::save_to_dir(&artifact, dir)?;
    info!("Exported '{}' to {}", view, path.display());
    Ok(())
}

fn run_gui(viewer: ViewerContext) -> Result<()> {
    info!("Starting {} qualification model", viewer.config.region_name);

    let title = format!("{} Qualification Attainment Model", viewer.config.region_name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title(title.clone()),
        default_theme: if viewer.config.dark_mode {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        },
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Box::new(app::QualificationModelApp::new(cc, viewer))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qm_core::ViewId;

    fn viewer(config: DashboardConfig) -> ViewerContext {
        ViewerContext::new(
            config,
            Arc::new(DatasetRegistry::load().unwrap()),
            Arc::new(EventBus::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from([
            "qualification-model", "export", "--view", "rampup", "--out", "/tmp/x",
        ])
        .unwrap();
        assert_eq!(cli.view.as_deref(), Some("rampup"));
        match cli.command {
            Some(Command::Export(args)) => {
                assert_eq!(args.out, Some(PathBuf::from("/tmp/x")));
                assert!(!args.stdout);
            }
            None => panic!("expected export subcommand"),
        }
    }

    #[test]
    fn test_cli_rejects_out_with_stdout() {
        let result = Cli::try_parse_from([
            "qualification-model", "export", "--stdout", "--out", "/tmp/x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_defaults_to_gui() {
        let cli = Cli::try_parse_from(["qualification-model"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.view.is_none());
    }

    #[test]
    fn test_unknown_view_is_error() {
        let viewer = viewer(DashboardConfig::default());
        assert!(app::resolve_initial_view(&viewer, Some("pdf")).is_err());
        assert_eq!(viewer.active_view(), ViewId::Summary);
    }

    #[test]
    fn test_export_writes_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let viewer = viewer(DashboardConfig::default());
        app::resolve_initial_view(&viewer, Some("vsp-industries")).unwrap();

        let args = ExportArgs { out: Some(dir.path().to_path_buf()), stdout: false };
        run_export(&viewer, &args).unwrap();

        let written = std::fs::read_to_string(dir.path().join("central-highlands-top-industries.csv")).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("Industry,Total New Workers,From Growth,From Retirements"));
        assert_eq!(lines.next(), Some("\"Health Care & Social Assistance\",10773,5971,4794"));
    }

    #[test]
    fn test_export_falls_back_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            region_slug: "grampians".to_string(),
            export_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let viewer = viewer(config);

        run_export(&viewer, &ExportArgs { out: None, stdout: false }).unwrap();
        assert!(dir.path().join("grampians-population-data.csv").is_file());
    }
}
