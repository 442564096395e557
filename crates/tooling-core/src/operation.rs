//! 零件、版次、工序與設定單模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assembly::ToolAssembly;

/// 零件（被加工的產品）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: Uuid,

    /// 零件號（唯一）
    pub part_number: String,

    pub description: String,

    pub customer: Option<String>,

    /// 預設版次
    pub default_revision_id: Option<Uuid>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

impl Part {
    pub fn new(part_number: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_number: part_number.into(),
            description: description.into(),
            customer: None,
            default_revision_id: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// 零件版次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRevision {
    pub id: Uuid,

    pub part_id: Uuid,

    /// 版次代碼（如 A、B）
    pub revision_code: String,

    pub is_active: bool,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl PartRevision {
    pub fn new(part_id: Uuid, revision_code: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_id,
            revision_code: revision_code.into(),
            is_active: true,
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// 工序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: Uuid,

    /// 所屬零件版次
    pub part_revision_id: Uuid,

    /// 工序名稱（如 OP10）
    pub operation_name: String,

    /// 工序順序號
    pub sequence_number: u32,

    /// CAM 程式名稱
    pub esprit_program_name: Option<String>,

    /// 設定單連結
    pub setup_sheet_url: Option<String>,

    pub is_active: bool,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Operation {
    pub fn new(part_revision_id: Uuid, operation_name: impl Into<String>, sequence_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_revision_id,
            operation_name: operation_name.into(),
            sequence_number,
            esprit_program_name: None,
            setup_sheet_url: None,
            is_active: true,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// 建構器模式：設置 CAM 程式名稱
    pub fn with_program_name(mut self, program_name: impl Into<String>) -> Self {
        self.esprit_program_name = Some(program_name.into());
        self
    }

    /// 建構器模式：設置設定單連結
    pub fn with_setup_sheet_url(mut self, url: impl Into<String>) -> Self {
        self.setup_sheet_url = Some(url.into());
        self
    }
}

/// 工序所需刀具組件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredAssembly {
    /// 刀具組件
    pub assembly: ToolAssembly,

    /// 需要的組數（≥1）
    pub quantity_required: u32,
}

impl RequiredAssembly {
    pub fn new(assembly: ToolAssembly, quantity_required: u32) -> Self {
        Self {
            assembly,
            quantity_required,
        }
    }
}

/// 設定單（操作員用的刀具與作業說明文件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupSheet {
    pub id: Uuid,

    pub operation_id: Uuid,

    /// 檔案路徑
    pub file_path: Option<String>,

    pub url: Option<String>,

    /// 格式（PDF、XLSX...）
    pub format: String,

    pub description: String,

    pub is_active: bool,

    /// 是否已封存（被新版設定單取代或手動封存）
    #[serde(default)]
    pub is_archived: bool,

    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,

    /// 封存原因
    #[serde(default)]
    pub archive_reason: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl SetupSheet {
    pub fn new(operation_id: Uuid, format: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation_id,
            file_path: None,
            url: None,
            format: format.into(),
            description: description.into(),
            is_active: true,
            is_archived: false,
            archived_at: None,
            archive_reason: None,
            created_at: Utc::now(),
        }
    }

    /// 建構器模式：設置檔案路徑
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// 建構器模式：設置建立時間
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// 封存設定單（保留記錄，不再列為目前設定單）
    pub fn archive(&mut self, reason: impl Into<String>) {
        self.is_archived = true;
        self.archived_at = Some(Utc::now());
        self.archive_reason = Some(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_setup_sheet() {
        let mut sheet = SetupSheet::new(Uuid::new_v4(), "PDF", "OP10 Setup Sheet");
        assert!(!sheet.is_archived);

        sheet.archive("Replaced by new setup sheet");

        assert!(sheet.is_archived);
        assert!(sheet.archived_at.is_some());
        assert_eq!(sheet.archive_reason.as_deref(), Some("Replaced by new setup sheet"));
        // 封存不等於停用
        assert!(sheet.is_active);
    }

    #[test]
    fn test_setup_sheet_without_archive_fields_deserializes() {
        let sheet = SetupSheet::new(Uuid::new_v4(), "PDF", "OP10");
        let mut json = serde_json::to_value(&sheet).unwrap();
        let object = json.as_object_mut().unwrap();
        object.remove("isArchived");
        object.remove("archivedAt");
        object.remove("archiveReason");

        let parsed: SetupSheet = serde_json::from_value(json).unwrap();
        assert!(!parsed.is_archived);
        assert_eq!(parsed.archive_reason, None);
    }
}
