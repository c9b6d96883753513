//! PlotBoard Main Application
//! Main window wiring the control panel, data table and figure together.

use crate::charts::StaticChartRenderer;
use crate::config::AppConfig;
use crate::data::{RowKey, TableState};
use crate::gui::{ChartView, ControlPanel, ControlPanelAction, TableView, TableViewAction};
use egui::SidePanel;
use tracing::{debug, info, warn};

/// Main application window. Owns all mutable state; the widgets report
/// interactions back as actions and never mutate the table themselves.
pub struct PlotBoardApp {
    table: TableState,
    control_panel: ControlPanel,
    table_view: TableView,
    chart_view: ChartView,
}

impl PlotBoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            table: TableState::new(config.mode),
            control_panel: ControlPanel::new(&config),
            table_view: TableView::new(),
            chart_view: ChartView::new(),
        }
    }

    /// Handle the append button.
    fn handle_append(&mut self) {
        self.table.append();
        self.control_panel
            .set_status(&format!("{} rows", self.table.len()));
    }

    /// Handle a per-row delete click. A key that no longer matches any row
    /// is a silent no-op.
    fn handle_remove(&mut self, key: RowKey) {
        if self.table.remove(&key) {
            self.control_panel
                .set_status(&format!("{} rows", self.table.len()));
        }
    }

    /// Handle the table mode radio; the row collection resets.
    fn handle_mode_change(&mut self) {
        self.table.set_mode(self.control_panel.table_mode);
        self.table_view.reset();
        self.control_panel.set_status("Table reset");
    }

    /// Handle PNG export - render the current figure and reveal the file.
    fn handle_export_png(&mut self) {
        let Some(figure) = self.chart_view.figure() else {
            self.control_panel.set_status("No figure to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("plotboard_chart.png")
            .save_file()
        else {
            return; // user cancelled
        };

        let size = self.control_panel.figure;
        match StaticChartRenderer::render_png(figure, &path, size.export_width, size.export_height)
        {
            Ok(()) => {
                info!(path = %path.display(), "chart exported");
                self.control_panel
                    .set_status(&format!("Exported {}", path.display()));
                if let Err(err) = open::that(&path) {
                    warn!("could not open exported file: {err}");
                }
            }
            Err(err) => {
                self.control_panel.set_status(&format!("Error: {err}"));
            }
        }
    }
}

impl eframe::App for PlotBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - controls and the data table
        SidePanel::left("control_panel")
            .min_width(320.0)
            .max_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.control_panel.export_enabled = !self.table.is_empty();

                    let action = self.control_panel.show(ui);
                    match action {
                        ControlPanelAction::AppendRow => self.handle_append(),
                        ControlPanelAction::TableModeChanged => self.handle_mode_change(),
                        ControlPanelAction::ChartKindChanged => {
                            debug!(kind = ?self.control_panel.chart_kind, "chart kind selected");
                        }
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);

                    let table_action = self.table_view.show(ui, &self.table);
                    match table_action {
                        TableViewAction::Remove(key) => self.handle_remove(key),
                        TableViewAction::None => {}
                    }
                });
            });

        // Rebuild the figure if anything it depends on moved this frame
        self.chart_view.refresh(
            &self.table,
            self.control_panel.chart_kind,
            &self.control_panel.figure,
            &self.control_panel.overlay,
        );

        // Central panel - figure display
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_view
                .show(ui, self.control_panel.figure.plot_height);
        });
    }
}
