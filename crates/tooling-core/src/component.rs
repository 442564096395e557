//! 刀具零件模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 零件類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// 切削刃具（通用）
    Cutter,
    /// 刀把
    Holder,
    /// 筒夾
    Collet,
    /// 刀片
    Insert,
    /// 延長桿
    Extension,
    /// 鑽頭
    Drill,
    /// 端銑刀
    Endmill,
    /// 絲攻
    Tap,
    /// 搪孔刀
    #[serde(rename = "Boring Bar")]
    BoringBar,
    /// 鉸刀
    Reamer,
    /// 其他
    Other,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Cutter => "Cutter",
            ComponentType::Holder => "Holder",
            ComponentType::Collet => "Collet",
            ComponentType::Insert => "Insert",
            ComponentType::Extension => "Extension",
            ComponentType::Drill => "Drill",
            ComponentType::Endmill => "Endmill",
            ComponentType::Tap => "Tap",
            ComponentType::BoringBar => "Boring Bar",
            ComponentType::Reamer => "Reamer",
            ComponentType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 刀具零件（單一實體物品：刃具、刀把、筒夾、刀片、延長桿）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolComponent {
    /// 零件ID（不可變）
    pub id: Uuid,

    /// 零件類型
    pub component_type: ComponentType,

    /// 零件編碼（通常為廠商料號）
    pub component_code: String,

    /// 描述
    pub description: String,

    /// 製造商
    pub manufacturer: Option<String>,

    /// 資產標籤
    pub asset_tag: Option<String>,

    /// 單價
    pub unit_cost: Option<Decimal>,

    /// CAM 系統刀具ID
    pub esprit_tool_id: Option<String>,

    pub notes: Option<String>,

    /// 是否啟用（軟刪除標記）
    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl ToolComponent {
    /// 創建新的刀具零件
    pub fn new(
        component_type: ComponentType,
        component_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            component_type,
            component_code: component_code.into(),
            description: description.into(),
            manufacturer: None,
            asset_tag: None,
            unit_cost: None,
            esprit_tool_id: None,
            notes: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// 建構器模式：設置製造商
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// 建構器模式：設置資產標籤
    pub fn with_asset_tag(mut self, asset_tag: impl Into<String>) -> Self {
        self.asset_tag = Some(asset_tag.into());
        self
    }

    /// 建構器模式：設置單價
    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    /// 軟刪除
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    /// 更新修改時間
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
