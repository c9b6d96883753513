//! Data module - Table state management

mod table;

pub use table::{Row, RowKey, TableMode, TableState, ROW_ACTION};
