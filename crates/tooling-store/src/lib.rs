//! # Tooling Store
//!
//! 記憶體內刀具目錄：資料載入器實作、目錄維護、操作員查詢、設定單匯入與示範資料

pub mod catalog;
pub mod import;
pub mod queries;
pub mod seed;

// Re-export 主要類型
pub use catalog::{InMemoryCatalog, LocationRef};
pub use import::{apply_parsed_tools, import_setup_sheet, ImportOutcome};
pub use queries::{
    OperationSetupSheets, OperatorService, PartDetail, PartSetupSheets, RevisionDetail, RevisionSetupSheets,
};
pub use seed::seed_demo_data;
