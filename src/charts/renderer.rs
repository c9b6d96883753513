//! Static Chart Renderer
//! Writes the current figure to a PNG file via the plotters bitmap backend.

use crate::charts::{ChartKind, Figure};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Figure has no data to export")]
    EmptyFigure,
    #[error("Drawing error: {0}")]
    Drawing(String),
}

// Same palette as the interactive plotter
const SCATTER_COLOR: RGBColor = RGBColor(231, 76, 60);
const OVERLAY_COLOR: RGBColor = RGBColor(52, 152, 219);
const MARKER_COLOR: RGBColor = RGBColor(46, 204, 113);

/// Axis padding as a fraction of the data range.
const BOUNDS_MARGIN: f64 = 0.08;

/// Renders a figure to a static image file.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `figure` to a PNG at `path`.
    pub fn render_png(
        figure: &Figure,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        if figure.is_empty() {
            return Err(RenderError::EmptyFigure);
        }

        let (x_range, y_range) = Self::bounds(figure);

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(figure.title, ("sans-serif", 24))
            .margin(30)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label)
            .y_desc(figure.y_label)
            .draw()
            .map_err(draw_err)?;

        let points = figure.points.iter().map(|p| (p[0], p[1]));

        match figure.kind {
            ChartKind::Scatter => {
                chart
                    .draw_series(
                        figure
                            .overlay
                            .iter()
                            .map(|p| Circle::new((p[0], p[1]), 8, OVERLAY_COLOR.mix(0.2).filled())),
                    )
                    .map_err(draw_err)?;

                chart
                    .draw_series(
                        points.map(|p| Circle::new(p, 5, SCATTER_COLOR.mix(0.7).filled())),
                    )
                    .map_err(draw_err)?;
            }
            ChartKind::Line => {
                chart
                    .draw_series(LineSeries::new(points.clone(), BLACK.stroke_width(3)))
                    .map_err(draw_err)?;

                chart
                    .draw_series(points.map(|p| Circle::new(p, 5, MARKER_COLOR.filled())))
                    .map_err(draw_err)?;
            }
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }

    /// Padded axis ranges covering every row and overlay point.
    fn bounds(figure: &Figure) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for p in figure.points.iter().chain(figure.overlay.iter()) {
            x_min = x_min.min(p[0]);
            x_max = x_max.max(p[0]);
            y_min = y_min.min(p[1]);
            y_max = y_max.max(p[1]);
        }

        // degenerate ranges (a single point) still need a visible span
        let x_pad = ((x_max - x_min) * BOUNDS_MARGIN).max(0.5);
        let y_pad = ((y_max - y_min) * BOUNDS_MARGIN).max(0.5);

        (
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )
    }
}

fn draw_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Drawing(err.to_string())
}
