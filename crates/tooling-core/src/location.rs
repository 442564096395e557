//! 實體位置模型：機台、刀具室儲位、備刀套件

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 機台
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: Uuid,

    /// 機台名稱（如 VF-3 #1）
    pub name: String,

    pub description: Option<String>,

    /// 機型（3 軸、5 軸...）
    pub machine_type: String,

    pub manufacturer: Option<String>,

    pub model: Option<String>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl Machine {
    pub fn new(name: impl Into<String>, machine_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            machine_type: machine_type.into(),
            manufacturer: None,
            model: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 建構器模式：設置製造商與型號
    pub fn with_make(mut self, manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self.model = Some(model.into());
        self
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Some(Utc::now());
    }
}

/// 刀具室儲位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CribLocation {
    pub id: Uuid,

    /// 儲位代碼（如 CRIB-A1）
    pub location_code: String,

    pub description: String,

    /// 儲位類型（CribBin, CabinetDrawer, Offsite...）
    pub location_type: String,

    pub is_active: bool,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl CribLocation {
    pub fn new(
        location_code: impl Into<String>,
        description: impl Into<String>,
        location_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            location_code: location_code.into(),
            description: description.into(),
            location_type: location_type.into(),
            is_active: true,
            notes: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Some(Utc::now());
    }
}

/// 備刀套件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupKit {
    pub id: Uuid,

    pub kit_name: String,

    /// 對應工序
    pub operation_id: Option<Uuid>,

    /// 套件狀態（Planned, InProgress, Complete, Archived）
    pub status: String,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl SetupKit {
    pub fn new(kit_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kit_name: kit_name.into(),
            operation_id: None,
            status: "Planned".to_string(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// 建構器模式：設置對應工序
    pub fn for_operation(mut self, operation_id: Uuid) -> Self {
        self.operation_id = Some(operation_id);
        self
    }
}
