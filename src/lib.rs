//! # Tooling
//!
//! CNC 工序刀具可用性系統
//!
//! - [`domain`]：資料模型、錯誤、配置、資料載入器介面
//! - [`calc`]：工序刀具可用性匯總
//! - [`import`]：設定單刀具清單解析
//! - [`store`]：記憶體內目錄、操作員查詢、匯入與示範資料

pub use tooling_calc as calc;
pub use tooling_core as domain;
pub use tooling_import as import;
pub use tooling_store as store;

pub use tooling_calc::{AssemblyAvailability, AvailabilityStatus, AvailabilitySummary, ToolingAggregator};
pub use tooling_core::{Result, ToolingConfig, ToolingError};
pub use tooling_import::SetupSheetParser;
pub use tooling_store::{InMemoryCatalog, OperatorService};
