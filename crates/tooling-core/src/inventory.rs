//! 庫存狀態模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ToolingError;

/// 庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryStatus {
    /// 在刀具室可用
    Available,
    /// 在機台刀庫中
    InMachine,
    /// 在備刀套件中
    InSetupKit,
    /// 外送研磨
    OutForRegrind,
    /// 報廢
    Scrap,
    /// 遺失
    Lost,
}

impl InventoryStatus {
    /// 全部狀態
    pub const ALL: [InventoryStatus; 6] = [
        InventoryStatus::Available,
        InventoryStatus::InMachine,
        InventoryStatus::InSetupKit,
        InventoryStatus::OutForRegrind,
        InventoryStatus::Scrap,
        InventoryStatus::Lost,
    ];

    /// 是否計入可用庫存
    pub fn is_countable(&self) -> bool {
        matches!(
            self,
            InventoryStatus::Available | InventoryStatus::InMachine | InventoryStatus::InSetupKit
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::Available => "Available",
            InventoryStatus::InMachine => "InMachine",
            InventoryStatus::InSetupKit => "InSetupKit",
            InventoryStatus::OutForRegrind => "OutForRegrind",
            InventoryStatus::Scrap => "Scrap",
            InventoryStatus::Lost => "Lost",
        }
    }
}

impl std::fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InventoryStatus {
    type Err = ToolingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolingError::InvalidStatus(s.to_string()))
    }
}

/// 庫存所在位置（至多一個）
///
/// 載入層負責把名稱/代碼一併解析進來，匯總時不需再查詢。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StockLocation {
    /// 刀具室儲位
    #[serde(rename_all = "camelCase")]
    Crib {
        location_id: Uuid,
        location_code: String,
    },

    /// 機台（可選刀套號）
    #[serde(rename_all = "camelCase")]
    Machine {
        machine_id: Uuid,
        machine_name: String,
        pocket_number: Option<u32>,
    },

    /// 備刀套件
    #[serde(rename_all = "camelCase")]
    SetupKit { kit_id: Uuid, kit_name: String },
}

/// 零件庫存狀態記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStatusRecord {
    /// 記錄ID
    pub id: Uuid,

    /// 零件ID
    pub component_id: Uuid,

    /// 位置
    pub location: Option<StockLocation>,

    /// 狀態
    pub status: InventoryStatus,

    /// 現有數量
    pub quantity_on_hand: u32,

    /// 最後異動時間
    pub last_movement_at: DateTime<Utc>,

    pub notes: Option<String>,
}

impl InventoryStatusRecord {
    /// 創建新的庫存狀態記錄
    pub fn new(component_id: Uuid, status: InventoryStatus, quantity_on_hand: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            component_id,
            location: None,
            status,
            quantity_on_hand,
            last_movement_at: Utc::now(),
            notes: None,
        }
    }

    /// 建構器模式：設置位置
    pub fn with_location(mut self, location: StockLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// 是否計入可用庫存
    pub fn is_countable(&self) -> bool {
        self.status.is_countable()
    }

    /// 計入可用庫存的數量（不計入的狀態為 0）
    pub fn countable_quantity(&self) -> u32 {
        if self.is_countable() {
            self.quantity_on_hand
        } else {
            0
        }
    }
}
