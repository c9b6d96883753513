//! Chart Plotter Module
//! Draws figures interactively using egui_plot.

use crate::charts::{ChartKind, Figure};
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Color palette for the two chart kinds, after the original dashboard:
/// red scatter points under a faint oversized blue halo layer, a black
/// line with green markers.
pub const SCATTER_COLOR: Color32 = Color32::from_rgb(231, 76, 60);
pub const OVERLAY_COLOR: Color32 = Color32::from_rgb(52, 152, 219);
pub const LINE_COLOR: Color32 = Color32::BLACK;
pub const MARKER_COLOR: Color32 = Color32::from_rgb(46, 204, 113);

/// Creates interactive chart visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a figure. The plot contents are re-emitted from the figure on
    /// every frame; nothing is retained between calls.
    pub fn draw(ui: &mut egui::Ui, figure: &Figure, height: f32) {
        Plot::new("dashboard_figure")
            .height(height)
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(false)
            .x_axis_label(figure.x_label)
            .y_axis_label(figure.y_label)
            .legend(Legend::default())
            .show(ui, |plot_ui| match figure.kind {
                ChartKind::Scatter => {
                    if !figure.overlay.is_empty() {
                        plot_ui.points(
                            Points::new(PlotPoints::from_iter(
                                figure.overlay.iter().copied(),
                            ))
                            .radius(8.0)
                            .color(OVERLAY_COLOR.gamma_multiply(0.25))
                            .name("Overlay"),
                        );
                    }

                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(figure.points.iter().copied()))
                            .radius(5.0)
                            .color(SCATTER_COLOR.gamma_multiply(0.7))
                            .name("Rows"),
                    );
                }
                ChartKind::Line => {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(figure.points.iter().copied()))
                            .color(LINE_COLOR)
                            .width(3.0)
                            .name("Rows"),
                    );

                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(figure.points.iter().copied()))
                            .radius(5.0)
                            .color(MARKER_COLOR),
                    );
                }
            });
    }
}
