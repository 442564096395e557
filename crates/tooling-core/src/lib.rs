//! # Tooling Core
//!
//! 刀具管理核心資料模型與類型定義

pub mod assembly;
pub mod component;
pub mod config;
pub mod inventory;
pub mod loader;
pub mod location;
pub mod operation;

// Re-export 主要類型
pub use assembly::{AssemblyComponent, ToolAssembly};
pub use component::{ComponentType, ToolComponent};
pub use config::{AggregatorConfig, ImporterConfig, ToolingConfig};
pub use inventory::{InventoryStatus, InventoryStatusRecord, StockLocation};
pub use loader::ToolingLoader;
pub use location::{CribLocation, Machine, SetupKit};
pub use operation::{Operation, Part, PartRevision, RequiredAssembly, SetupSheet};

use uuid::Uuid;

/// 刀具管理錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ToolingError {
    #[error("找不到工序: {0}")]
    OperationNotFound(Uuid),

    #[error("找不到刀具組件: {0}")]
    AssemblyNotFound(Uuid),

    #[error("找不到刀具零件: {0}")]
    ComponentNotFound(Uuid),

    #[error("找不到零件號: {0}")]
    PartNotFound(String),

    #[error("找不到資料: {0}")]
    NotFound(String),

    #[error("無效的數量: {0}")]
    InvalidQuantity(String),

    #[error("無效的庫存狀態: {0}")]
    InvalidStatus(String),

    #[error("資料重複: {0}")]
    Duplicate(String),

    #[error("設定單中找不到刀具清單表頭")]
    HeaderRowNotFound,

    #[error("設定單中找不到必要欄位 'Tool #'（表頭第 {0} 列）")]
    ToolNumberColumnNotFound(usize),

    #[error("讀取設定單失敗: {0}")]
    SheetReadError(String),

    #[error("設定解析錯誤: {0}")]
    ConfigError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ToolingError>;
