//! Table State Module
//! Reactive row collection: append/remove with revision-based change signaling.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Action label carried by every row, shown in the table's action column.
pub const ROW_ACTION: &str = "Remove";

/// Row generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// Single-series mode: one monotonically increasing counter value per row
    Counter,
    /// Two-series mode: x counts up, y alternates sign and grows by 1.5x
    Series,
}

impl Default for TableMode {
    fn default() -> Self {
        TableMode::Counter
    }
}

/// One entry in the table, representing one data point to be plotted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row {
    Counter { value: i64 },
    Series { x: f64, y: f64 },
}

impl Row {
    /// Key used by per-row removal. Counter rows match on their value,
    /// Series rows on the conjunction of both coordinates.
    pub fn key(&self) -> RowKey {
        match *self {
            Row::Counter { value } => RowKey::Value(value),
            Row::Series { x, y } => RowKey::Point { x, y },
        }
    }
}

/// Exact-equality key identifying a row for removal.
///
/// Coordinates compare bit-exact; keys always originate from rows the
/// process itself generated, so representation drift cannot occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowKey {
    Value(i64),
    Point { x: f64, y: f64 },
}

/// Ordered row collection with out-of-band change signaling.
///
/// Observers cache the last `revision` they rendered from and re-read the
/// rows whenever it moves; the revision only moves on an actual mutation.
pub struct TableState {
    mode: TableMode,
    rows: Vec<Row>,
    revision: u64,
}

impl TableState {
    /// Create an empty table in the given mode.
    pub fn new(mode: TableMode) -> Self {
        Self {
            mode,
            rows: Vec::new(),
            revision: 0,
        }
    }

    pub fn mode(&self) -> TableMode {
        self.mode
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Change signal: bumped by every mutation that actually changed the rows.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append the next row in the sequence.
    ///
    /// Counter mode: last value + 1, or 1 when empty. Series mode:
    /// x = last x + 1 (or 1), y = last y * -1.5 (or 1).
    pub fn append(&mut self) {
        let row = match self.mode {
            TableMode::Counter => {
                let value = match self.rows.last() {
                    Some(Row::Counter { value }) => value + 1,
                    _ => 1,
                };
                Row::Counter { value }
            }
            TableMode::Series => {
                let (x, y) = match self.rows.last() {
                    Some(Row::Series { x, y }) => (x + 1.0, y * -1.5),
                    _ => (1.0, 1.0),
                };
                Row::Series { x, y }
            }
        };

        self.rows.push(row);
        self.revision += 1;
        debug!(
            revision = self.revision,
            rows = self.rows.len(),
            "row appended"
        );
    }

    /// Remove the first row whose key matches exactly.
    ///
    /// Silent no-op when nothing matches: the rows and the revision are
    /// left untouched and `false` is returned.
    pub fn remove(&mut self, key: &RowKey) -> bool {
        let Some(pos) = self.rows.iter().position(|row| row.key() == *key) else {
            debug!(?key, "remove matched no row");
            return false;
        };

        self.rows.remove(pos);
        self.revision += 1;
        debug!(
            revision = self.revision,
            rows = self.rows.len(),
            "row removed"
        );
        true
    }

    /// Switch the row generation mode.
    ///
    /// The collection resets because the two modes produce incompatible
    /// row shapes; switching to the current mode is a no-op.
    pub fn set_mode(&mut self, mode: TableMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.rows.clear();
        self.revision += 1;
        debug!(?mode, "table mode changed, rows cleared");
    }

    #[cfg(test)]
    pub(crate) fn push_raw(&mut self, row: Row) {
        self.rows.push(row);
        self.revision += 1;
    }
}
