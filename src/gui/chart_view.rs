//! Chart View Widget
//! Central figure region. Holds the current figure and the inputs it was
//! built from; when any input moves, the figure is rebuilt from scratch
//! and the old one is replaced wholesale.

use crate::charts::{ChartKind, ChartPlotter, Figure, OverlayConfig};
use crate::config::FigureConfig;
use crate::data::TableState;
use egui::RichText;
use tracing::debug;

/// Inputs the cached figure was built from.
#[derive(Debug, Clone, PartialEq)]
struct FigureStamp {
    revision: u64,
    kind: ChartKind,
    figure: FigureConfig,
    overlay: OverlayConfig,
}

/// Figure display area with change-driven rebuilds.
pub struct ChartView {
    figure: Option<Figure>,
    stamp: Option<FigureStamp>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            figure: None,
            stamp: None,
        }
    }
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the figure if the table revision, the chart kind or the
    /// figure configuration changed since the last build.
    pub fn refresh(
        &mut self,
        table: &TableState,
        kind: ChartKind,
        figure: &FigureConfig,
        overlay: &OverlayConfig,
    ) {
        let stamp = FigureStamp {
            revision: table.revision(),
            kind,
            figure: *figure,
            overlay: overlay.clone(),
        };

        if self.stamp.as_ref() == Some(&stamp) {
            return;
        }

        debug!(revision = stamp.revision, ?kind, "rebuilding figure");
        self.figure = Some(Figure::build(kind, table, overlay));
        self.stamp = Some(stamp);
    }

    /// The current figure, if one has been built.
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// Draw the figure region.
    pub fn show(&self, ui: &mut egui::Ui, plot_height: f32) {
        match &self.figure {
            Some(figure) if !figure.is_empty() => {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);
                    ui.label(RichText::new(figure.title).size(18.0).strong());
                });
                ui.add_space(5.0);
                ChartPlotter::draw(ui, figure, plot_height);
            }
            _ => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TableMode;

    fn refresh_default(view: &mut ChartView, table: &TableState, kind: ChartKind) {
        view.refresh(
            table,
            kind,
            &FigureConfig::default(),
            &OverlayConfig::default(),
        );
    }

    #[test]
    fn test_refresh_builds_on_first_call() {
        let table = TableState::new(TableMode::Counter);
        let mut view = ChartView::new();
        assert!(view.figure().is_none());

        refresh_default(&mut view, &table, ChartKind::Scatter);
        assert!(view.figure().is_some());
    }

    #[test]
    fn test_row_change_triggers_rebuild() {
        let mut table = TableState::new(TableMode::Counter);
        let mut view = ChartView::new();

        refresh_default(&mut view, &table, ChartKind::Scatter);
        assert!(view.figure().unwrap().points.is_empty());

        table.append();
        refresh_default(&mut view, &table, ChartKind::Scatter);
        assert_eq!(view.figure().unwrap().points, vec![[1.0, 1.0]]);
    }

    #[test]
    fn test_kind_switch_rebuilds_without_stale_rows() {
        let mut table = TableState::new(TableMode::Series);
        table.append();
        table.append();

        let mut view = ChartView::new();
        refresh_default(&mut view, &table, ChartKind::Scatter);

        refresh_default(&mut view, &table, ChartKind::Line);
        let figure = view.figure().unwrap();
        assert_eq!(figure.kind, ChartKind::Line);
        assert_eq!(figure.points, vec![[1.0, 1.0], [2.0, -1.5]]);
    }

    #[test]
    fn test_unchanged_inputs_keep_the_figure() {
        let mut table = TableState::new(TableMode::Counter);
        table.append();

        let mut view = ChartView::new();
        refresh_default(&mut view, &table, ChartKind::Scatter);
        let before = view.figure().cloned();

        // same revision, kind and config: the figure must not be rebuilt
        refresh_default(&mut view, &table, ChartKind::Scatter);
        assert_eq!(view.figure().cloned(), before);

        // a miss-remove does not move the revision, so still no rebuild
        table.remove(&crate::data::RowKey::Value(99));
        refresh_default(&mut view, &table, ChartKind::Scatter);
        assert_eq!(view.figure().cloned(), before);
    }

    #[test]
    fn test_figure_config_change_triggers_rebuild() {
        let mut table = TableState::new(TableMode::Series);
        table.append();

        let mut view = ChartView::new();
        refresh_default(&mut view, &table, ChartKind::Scatter);
        assert!(view.figure().unwrap().overlay.is_empty());

        let overlay = OverlayConfig {
            enabled: true,
            ..OverlayConfig::default()
        };
        view.refresh(
            &table,
            ChartKind::Scatter,
            &FigureConfig::default(),
            &overlay,
        );
        assert_eq!(view.figure().unwrap().overlay.len(), overlay.points);
    }
}
