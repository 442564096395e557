//! # Setup Sheet Import
//!
//! 設定單刀具清單匯入：以啟發式規則定位表頭與欄位，解析刀具列

pub mod classify;
pub mod header;
pub mod parser;
pub mod sheet;

// Re-export 主要類型
pub use classify::{classify_component_type, extract_manufacturer};
pub use header::{find_columns, find_header_row, ColumnIndices};
pub use parser::{ParsedTool, SetupSheetParser};
pub use sheet::Worksheet;
