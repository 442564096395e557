//! 刀具組件模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::component::ToolComponent;

/// 刀具組件（刀把 + 筒夾 + 刃具等組裝完成、可上機的刀具）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAssembly {
    /// 組件ID
    pub id: Uuid,

    /// 組件名稱
    pub assembly_name: String,

    /// 描述
    pub description: String,

    /// 刀號（如 T1）
    pub tool_number: Option<String>,

    /// CAM 系統刀具ID
    pub esprit_tool_id: Option<String>,

    pub notes: Option<String>,

    /// 是否啟用（軟刪除標記）
    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl ToolAssembly {
    /// 創建新的刀具組件
    pub fn new(assembly_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            assembly_name: assembly_name.into(),
            description: description.into(),
            tool_number: None,
            esprit_tool_id: None,
            notes: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// 建構器模式：設置刀號
    pub fn with_tool_number(mut self, tool_number: impl Into<String>) -> Self {
        self.tool_number = Some(tool_number.into());
        self
    }

    /// 軟刪除
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// 組件用料：組件中的一個零件及其用量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyComponent {
    /// 零件
    pub component: ToolComponent,

    /// 每個組件需要的數量（≥1）
    pub quantity_required: u32,

    /// 是否為主要零件（決定組件整體可用性）
    pub is_primary: bool,

    pub notes: Option<String>,
}

impl AssemblyComponent {
    /// 創建新的組件用料
    pub fn new(component: ToolComponent, quantity_required: u32, is_primary: bool) -> Self {
        Self {
            component,
            quantity_required,
            is_primary,
            notes: None,
        }
    }

    /// 建構器模式：設置備註
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// 有效需求量 = 零件用量 × 組件需求量
    pub fn effective_required(&self, assembly_quantity: u32) -> u32 {
        self.quantity_required.saturating_mul(assembly_quantity)
    }
}
