//! Main application entry point

mod composer;
mod settings;

use std::sync::Arc;
use eframe::egui::{self, Context};
use anyhow::Result;
use tracing::info;

use qd_core::AxisSelectionStore;
use qd_data::source_for_location;
use qd_ui::Theme;
use qd_views::{ChartView, RepaintOnChange, TableView, ViewerContext, Viewport, DEFAULT_SPLIT};

use composer::{Composer, LoadState};
use settings::{AppSettings, SETTINGS_FILE};

/// Views built once the dataset is available
struct Dashboard {
    viewer_context: ViewerContext,
    viewport: Viewport,
}

/// Main application state
struct QuakeDashApp {
    settings: AppSettings,

    /// Load lifecycle shared with the background task
    composer: Composer,

    /// Axis selection, lives as long as the app
    axes: Arc<AxisSelectionStore>,

    /// Built on the first frame after `Ready`
    dashboard: Option<Dashboard>,

    /// Repaint hook registered on the stores
    repaint: Arc<RepaintOnChange>,

    /// Tokio runtime; owns the load task
    _runtime: tokio::runtime::Runtime,
}

impl QuakeDashApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings, runtime: tokio::runtime::Runtime) -> Self {
        qd_ui::apply_theme(&cc.egui_ctx, &Theme { dark_mode: settings.dark_mode });

        let repaint = Arc::new(RepaintOnChange::new(cc.egui_ctx.clone()));
        let axes = Arc::new(AxisSelectionStore::new());
        axes.add_subscriber(repaint.clone());

        let composer = Composer::new();
        let ctx = cc.egui_ctx.clone();
        composer.spawn_load(runtime.handle(), source_for_location(&settings.source), move || {
            ctx.request_repaint();
        });

        Self {
            settings,
            composer,
            axes,
            dashboard: None,
            repaint,
            _runtime: runtime,
        }
    }

    fn build_dashboard(&self, dataset: Arc<qd_data::Dataset>) -> Dashboard {
        let viewer_context = ViewerContext::new(dataset, self.axes.clone());
        viewer_context.selection.add_subscriber(self.repaint.clone());

        let viewport = Viewport::two_panel(
            Box::new(ChartView::new(self.settings.chart.clone())),
            Box::new(TableView::new(self.settings.table.clone())),
            DEFAULT_SPLIT,
        );
        info!("Created dashboard layout for {}", viewer_context.dataset.source_name());

        Dashboard {
            viewer_context,
            viewport,
        }
    }
}

impl eframe::App for QuakeDashApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let state = self.composer.state();

        if self.dashboard.is_none() {
            if let LoadState::Ready(dataset) = &state {
                self.dashboard = Some(self.build_dashboard(dataset.clone()));
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match &state {
            LoadState::Loading => qd_ui::loading_panel(ui),
            LoadState::Error(message) => qd_ui::error_panel(ui, message),
            LoadState::Ready(_) => {
                if let Some(dashboard) = &mut self.dashboard {
                    qd_ui::dashboard_heading(ui);
                    dashboard.viewport.ui(ui, &dashboard.viewer_context);
                }
            }
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let settings = AppSettings::load_or_default(SETTINGS_FILE);
    info!("Starting quakedash, records from {}", settings.source.location);

    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([800.0, 600.0]),
        default_theme: if settings.dark_mode {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        },
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        qd_ui::DASHBOARD_TITLE,
        options,
        Box::new(move |cc| Box::new(QuakeDashApp::new(cc, settings, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
