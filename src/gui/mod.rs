//! GUI module - User interface components

mod app;
mod chart_view;
mod control_panel;
mod table_view;

pub use app::PlotBoardApp;
pub use chart_view::ChartView;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use table_view::{TableView, TableViewAction};
