//! Control Panel Widget
//! Left side panel with the chart selector and table controls.

use crate::charts::{ChartKind, OverlayConfig};
use crate::config::{AppConfig, FigureConfig};
use crate::data::TableMode;
use egui::{Color32, ComboBox, RichText};

/// Left side control panel with the chart selector, append button and
/// figure settings. Interactions are reported back as actions.
pub struct ControlPanel {
    pub chart_kind: ChartKind,
    pub table_mode: TableMode,
    pub figure: FigureConfig,
    pub overlay: OverlayConfig,
    pub export_enabled: bool,
    pub status: String,
}

impl ControlPanel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            chart_kind: config.chart,
            table_mode: config.mode,
            figure: config.figure,
            overlay: config.overlay.clone(),
            export_enabled: false,
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 PlotBoard")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Interactive Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Chart Section =====
        ui.label(RichText::new("📈 Chart").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([90.0, 20.0], egui::Label::new("Chart Kind:"));
            ComboBox::from_id_salt("chart_kind")
                .width(150.0)
                .selected_text(self.chart_kind.label())
                .show_ui(ui, |ui| {
                    for kind in ChartKind::ALL {
                        if ui
                            .selectable_label(self.chart_kind == kind, kind.label())
                            .clicked()
                        {
                            self.chart_kind = kind;
                            action = ControlPanelAction::ChartKindChanged;
                        }
                    }
                });
        });

        ui.add_space(5.0);
        ui.add(
            egui::Slider::new(&mut self.figure.plot_height, 240.0..=720.0).text("Plot height"),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Table Section =====
        ui.label(RichText::new("🧮 Table").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if ui
                .radio_value(&mut self.table_mode, TableMode::Counter, "Counter")
                .clicked()
            {
                action = ControlPanelAction::TableModeChanged;
            }
            if ui
                .radio_value(&mut self.table_mode, TableMode::Series, "Series (X/Y)")
                .clicked()
            {
                action = ControlPanelAction::TableModeChanged;
            }
        });

        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("Update Table").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::AppendRow;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Overlay Section =====
        ui.label(RichText::new("✨ Scatter Overlay").size(14.0).strong());
        ui.add_space(5.0);

        // Only meaningful for Series-mode scatter plots; seed and point
        // count come from the config file.
        ui.add_enabled_ui(self.table_mode == TableMode::Series, |ui| {
            ui.checkbox(&mut self.overlay.enabled, "Decorative random points");
            ui.label(
                RichText::new(format!(
                    "seed {}, {} points",
                    self.overlay.seed, self.overlay.points
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("📄 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(10.0);

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    AppendRow,
    ChartKindChanged,
    TableModeChanged,
    ExportPng,
}
