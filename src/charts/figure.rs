//! Figure Module
//! Chart kind selection and figure building.
//!
//! A `Figure` is rebuilt from scratch on every recomputation; no drawing
//! state is retained between builds, so a figure can never show stale rows.

use crate::data::{Row, TableMode, TableState};
use serde::{Deserialize, Serialize};

/// The selected visualization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Scatter,
    Line,
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Scatter
    }
}

impl ChartKind {
    /// The closed set of selectable kinds, in selector order.
    pub const ALL: [ChartKind; 2] = [ChartKind::Scatter, ChartKind::Line];

    /// Label shown in the chart selector.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Line => "Line Plot",
        }
    }
}

/// Decorative pseudo-random scatter overlay.
///
/// Off by default. When enabled, the batch is fully determined by `seed`:
/// the same seed and point count always produce the same overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub enabled: bool,
    pub seed: u64,
    pub points: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            seed: 0x5eed_0f00d,
            points: 100,
        }
    }
}

impl OverlayConfig {
    /// Generate the overlay batch as standard-normal points around the origin.
    pub fn generate(&self) -> Vec<[f64; 2]> {
        let mut rng = XorShift64Star::new(self.seed);
        (0..self.points)
            .map(|_| [rng.next_normal(), rng.next_normal()])
            .collect()
    }
}

/// xorshift64* stream; deterministic for a given seed.
struct XorShift64Star(u64);

impl XorShift64Star {
    fn new(seed: u64) -> Self {
        // the all-zero state is a fixed point of the shift sequence
        Self(seed | 1)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal via Box-Muller.
    fn next_normal(&mut self) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

/// An in-memory renderable chart, rebuilt fully on each recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub kind: ChartKind,
    /// Row points in insertion order.
    pub points: Vec<[f64; 2]>,
    /// Decorative overlay points; only populated for Series-mode scatter.
    pub overlay: Vec<[f64; 2]>,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl Figure {
    /// Build a figure for `kind` from the rows as of this invocation.
    pub fn build(kind: ChartKind, table: &TableState, overlay: &OverlayConfig) -> Figure {
        let points = row_points(table);

        let overlay_points = match kind {
            ChartKind::Scatter if overlay.enabled && table.mode() == TableMode::Series => {
                overlay.generate()
            }
            _ => Vec::new(),
        };

        Figure {
            kind,
            points,
            overlay: overlay_points,
            title: kind.label(),
            x_label: "X axis",
            y_label: "Y axis",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.overlay.is_empty()
    }
}

/// Plot coordinates for every row, in insertion order.
///
/// Counter rows plot at their 1-based table position; Series rows carry
/// their own coordinates.
fn row_points(table: &TableState) -> Vec<[f64; 2]> {
    table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| match *row {
            Row::Counter { value } => [(i + 1) as f64, value as f64],
            Row::Series { x, y } => [x, y],
        })
        .collect()
}
