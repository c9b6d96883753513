//! Table View Widget
//! Paginated data table with multi-column sort, filtering and per-row removal.
//!
//! Sorting and filtering are display-only: the underlying row collection
//! keeps insertion order and is never reordered from here.

use crate::data::{Row, RowKey, TableMode, TableState, ROW_ACTION};
use egui::{Color32, RichText};
use std::cmp::Ordering;

/// Rows shown per table page.
const ROWS_PER_PAGE: usize = 5;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Value,
    X,
    Y,
}

impl TableColumn {
    fn header(&self) -> &'static str {
        match self {
            TableColumn::Value => "Values",
            TableColumn::X => "X",
            TableColumn::Y => "Y",
        }
    }

    /// Columns shown for a table mode.
    fn for_mode(mode: TableMode) -> &'static [TableColumn] {
        match mode {
            TableMode::Counter => &[TableColumn::Value],
            TableMode::Series => &[TableColumn::X, TableColumn::Y],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Actions triggered by the table view
#[derive(Debug, Clone, PartialEq)]
pub enum TableViewAction {
    None,
    Remove(RowKey),
}

/// Paginated table display with clickable sort headers and a filter box.
pub struct TableView {
    page: usize,
    filter: String,
    sort: Vec<(TableColumn, SortOrder)>,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            page: 0,
            filter: String::new(),
            sort: Vec::new(),
        }
    }
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset paging, sorting and filtering (used when the table mode changes).
    pub fn reset(&mut self) {
        self.page = 0;
        self.filter.clear();
        self.sort.clear();
    }

    /// Draw the table; a click on a row's delete button is reported back.
    pub fn show(&mut self, ui: &mut egui::Ui, table: &TableState) -> TableViewAction {
        let mut action = TableViewAction::None;

        ui.label(RichText::new("📋 Data Table").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Filter:");
            if ui.text_edit_singleline(&mut self.filter).changed() {
                self.page = 0;
            }
        });
        ui.add_space(5.0);

        if table.is_empty() {
            ui.label(RichText::new("No rows yet").size(12.0).color(Color32::GRAY));
            return action;
        }

        let columns = TableColumn::for_mode(table.mode());
        // drop sort entries left over from the other mode
        self.sort.retain(|(col, _)| columns.contains(col));

        let order = display_order(table.rows(), &self.filter, &self.sort);
        let page_count = order.len().div_ceil(ROWS_PER_PAGE).max(1);
        self.page = self.page.min(page_count - 1);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("data_table")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        // Headers: click to cycle ascending -> descending -> unsorted
                        for &column in columns {
                            let marker = match self.sort.iter().find(|(c, _)| *c == column) {
                                Some((_, SortOrder::Ascending)) => " ⬆",
                                Some((_, SortOrder::Descending)) => " ⬇",
                                None => "",
                            };
                            let header = RichText::new(format!("{}{}", column.header(), marker))
                                .strong()
                                .size(11.0);
                            if ui.button(header).clicked() {
                                self.toggle_sort(column);
                            }
                        }
                        ui.label(RichText::new("Actions").strong().size(11.0));
                        ui.end_row();

                        let start = self.page * ROWS_PER_PAGE;
                        for &idx in order.iter().skip(start).take(ROWS_PER_PAGE) {
                            let row = &table.rows()[idx];
                            for cell in cells(row) {
                                ui.label(RichText::new(cell).size(11.0));
                            }

                            let delete = egui::Button::new(
                                RichText::new("🗑").color(Color32::from_rgb(220, 53, 69)),
                            )
                            .small();
                            if ui.add(delete).on_hover_text(ROW_ACTION).clicked() {
                                action = TableViewAction::Remove(row.key());
                            }
                            ui.end_row();
                        }
                    });
            });

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.page > 0, egui::Button::new("◀").small())
                .clicked()
            {
                self.page -= 1;
            }
            ui.label(
                RichText::new(format!("Page {}/{}", self.page + 1, page_count)).size(11.0),
            );
            if ui
                .add_enabled(self.page + 1 < page_count, egui::Button::new("▶").small())
                .clicked()
            {
                self.page += 1;
            }
            ui.label(
                RichText::new(format!("{} rows", order.len()))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });

        action
    }

    fn toggle_sort(&mut self, column: TableColumn) {
        match self.sort.iter().position(|(c, _)| *c == column) {
            None => self.sort.push((column, SortOrder::Ascending)),
            Some(i) => match self.sort[i].1 {
                SortOrder::Ascending => self.sort[i].1 = SortOrder::Descending,
                SortOrder::Descending => {
                    self.sort.remove(i);
                }
            },
        }
        self.page = 0;
    }
}

/// Indices of `rows` after filtering and multi-column sorting, in display
/// order. The input slice itself is never reordered.
fn display_order(rows: &[Row], filter: &str, sort: &[(TableColumn, SortOrder)]) -> Vec<usize> {
    let needle = filter.trim();
    let mut order: Vec<usize> = (0..rows.len())
        .filter(|&i| needle.is_empty() || row_matches(&rows[i], needle))
        .collect();

    if !sort.is_empty() {
        order.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], sort));
    }
    order
}

fn row_matches(row: &Row, needle: &str) -> bool {
    cells(row).iter().any(|cell| cell.contains(needle))
}

/// Cell text for a row, one entry per data column.
fn cells(row: &Row) -> Vec<String> {
    match *row {
        Row::Counter { value } => vec![value.to_string()],
        Row::Series { x, y } => vec![format_number(x), format_number(y)],
    }
}

fn format_number(v: f64) -> String {
    if v == v.trunc() {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

fn sort_value(row: &Row, column: TableColumn) -> f64 {
    match (*row, column) {
        (Row::Counter { value }, TableColumn::Value) => value as f64,
        (Row::Series { x, .. }, TableColumn::X) => x,
        (Row::Series { y, .. }, TableColumn::Y) => y,
        // column from the other mode; show() prunes these before sorting
        _ => 0.0,
    }
}

fn compare_rows(a: &Row, b: &Row, sort: &[(TableColumn, SortOrder)]) -> Ordering {
    for &(column, order) in sort {
        let cmp = sort_value(a, column)
            .partial_cmp(&sort_value(b, column))
            .unwrap_or(Ordering::Equal);
        let cmp = match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        };
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_rows() -> Vec<Row> {
        vec![
            Row::Series { x: 1.0, y: 2.0 },
            Row::Series { x: 2.0, y: 2.0 },
            Row::Series { x: 3.0, y: 1.0 },
        ]
    }

    #[test]
    fn test_unsorted_order_is_insertion_order() {
        let rows = series_rows();
        assert_eq!(display_order(&rows, "", &[]), vec![0, 1, 2]);
    }

    #[test]
    fn test_single_column_sort() {
        let rows = series_rows();
        let sort = [(TableColumn::Y, SortOrder::Ascending)];
        assert_eq!(display_order(&rows, "", &sort), vec![2, 0, 1]);
    }

    #[test]
    fn test_multi_column_sort_breaks_ties_in_listed_order() {
        let rows = series_rows();
        let sort = [
            (TableColumn::Y, SortOrder::Ascending),
            (TableColumn::X, SortOrder::Descending),
        ];
        // y=1 first, then the two y=2 rows by descending x
        assert_eq!(display_order(&rows, "", &sort), vec![2, 1, 0]);
    }

    #[test]
    fn test_sort_does_not_touch_the_rows() {
        let rows = series_rows();
        let before = rows.clone();
        let _ = display_order(&rows, "", &[(TableColumn::X, SortOrder::Descending)]);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_filter_matches_cell_text() {
        let rows = vec![
            Row::Counter { value: 1 },
            Row::Counter { value: 10 },
            Row::Counter { value: 12 },
            Row::Counter { value: 5 },
        ];
        assert_eq!(display_order(&rows, "1", &[]), vec![0, 1, 2]);
        assert_eq!(display_order(&rows, "12", &[]), vec![2]);
        assert!(display_order(&rows, "7", &[]).is_empty());
    }

    #[test]
    fn test_series_cells_use_compact_formatting() {
        let row = Row::Series { x: 2.0, y: -1.5 };
        assert_eq!(cells(&row), vec!["2".to_string(), "-1.5".to_string()]);
    }

    #[test]
    fn test_toggle_sort_cycles() {
        let mut view = TableView::new();
        view.toggle_sort(TableColumn::X);
        assert_eq!(view.sort, vec![(TableColumn::X, SortOrder::Ascending)]);

        view.toggle_sort(TableColumn::Y);
        assert_eq!(view.sort.len(), 2);

        view.toggle_sort(TableColumn::X);
        assert_eq!(view.sort[0], (TableColumn::X, SortOrder::Descending));

        view.toggle_sort(TableColumn::X);
        assert_eq!(view.sort, vec![(TableColumn::Y, SortOrder::Ascending)]);
    }
}
