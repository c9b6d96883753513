//! PlotBoard - Interactive Table & Chart Dashboard
//!
//! Append rows to a data table and visualize them as a scatter or line
//! plot, re-rendered whenever the rows, the chart selection or the figure
//! configuration changes.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
