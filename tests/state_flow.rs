//! End-to-end state flow scenarios: append/remove cycles driving figure
//! rebuilds through the public API.

use plotboard::charts::{ChartKind, Figure, OverlayConfig};
use plotboard::config::AppConfig;
use plotboard::data::{Row, RowKey, TableMode, TableState};

#[test]
fn single_append_then_line_chart() {
    let mut table = TableState::new(TableMode::Counter);
    table.append();
    assert_eq!(table.rows(), &[Row::Counter { value: 1 }]);

    let figure = Figure::build(ChartKind::Line, &table, &OverlayConfig::default());
    assert_eq!(figure.kind, ChartKind::Line);
    assert_eq!(figure.points, vec![[1.0, 1.0]]);
}

#[test]
fn series_appends_then_remove_by_coordinates() {
    let mut table = TableState::new(TableMode::Series);
    table.append();
    table.append();
    table.append();
    assert_eq!(
        table.rows(),
        &[
            Row::Series { x: 1.0, y: 1.0 },
            Row::Series { x: 2.0, y: -1.5 },
            Row::Series { x: 3.0, y: 2.25 },
        ]
    );

    assert!(table.remove(&RowKey::Point { x: 2.0, y: -1.5 }));
    assert_eq!(
        table.rows(),
        &[
            Row::Series { x: 1.0, y: 1.0 },
            Row::Series { x: 3.0, y: 2.25 },
        ]
    );
}

#[test]
fn default_configuration_starts_empty_scatter() {
    let config = AppConfig::default();
    assert_eq!(config.chart, ChartKind::Scatter);

    let table = TableState::new(config.mode);
    assert!(table.is_empty());

    let figure = Figure::build(config.chart, &table, &config.overlay);
    assert!(figure.is_empty());
}

#[test]
fn kind_switch_reflects_all_current_rows() {
    let mut table = TableState::new(TableMode::Counter);
    for _ in 0..5 {
        table.append();
    }

    let scatter = Figure::build(ChartKind::Scatter, &table, &OverlayConfig::default());
    let line = Figure::build(ChartKind::Line, &table, &OverlayConfig::default());
    assert_eq!(scatter.points, line.points);
    assert_eq!(line.points.len(), 5);
}

#[test]
fn counter_continues_from_last_row_after_removal() {
    let mut table = TableState::new(TableMode::Counter);
    table.append();
    table.append();
    table.append();

    // removing a middle row does not disturb the increment rule
    assert!(table.remove(&RowKey::Value(2)));
    table.append();
    let values: Vec<i64> = table
        .rows()
        .iter()
        .map(|row| match row {
            Row::Counter { value } => *value,
            other => panic!("unexpected row {other:?}"),
        })
        .collect();
    assert_eq!(values, vec![1, 3, 4]);

    // removing the last row rewinds it
    assert!(table.remove(&RowKey::Value(4)));
    table.append();
    assert_eq!(table.rows().last(), Some(&Row::Counter { value: 4 }));
}

#[test]
fn append_remove_round_trip_is_identity() {
    let mut table = TableState::new(TableMode::Series);
    table.append();
    table.append();
    let before: Vec<Row> = table.rows().to_vec();
    let revision_before = table.revision();

    table.append();
    let key = table.rows().last().expect("appended row").key();
    assert!(table.remove(&key));

    assert_eq!(table.rows(), before.as_slice());
    // both mutations signaled a change
    assert_eq!(table.revision(), revision_before + 2);
}
