//! 操作員查詢服務
//!
//! 以零件號查找工序、設定單與工序刀具可用性。

use serde::{Deserialize, Serialize};
use tooling_calc::{AssemblyAvailability, AvailabilitySummary, ToolingAggregator};
use tooling_core::{
    AggregatorConfig, Operation, Part, PartRevision, Result, SetupSheet, ToolingError,
};
use uuid::Uuid;

use crate::catalog::InMemoryCatalog;

/// 版次與其有效工序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionDetail {
    pub revision: PartRevision,

    /// 有效工序（依工序順序號排序）
    pub operations: Vec<Operation>,
}

/// 零件明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartDetail {
    pub part: Part,

    /// 預設版次（不論是否有效）
    pub default_revision: Option<RevisionDetail>,

    /// 有效版次
    pub revisions: Vec<RevisionDetail>,
}

/// 工序與其設定單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSetupSheets {
    pub operation: Operation,

    /// 設定單（新到舊）
    pub setup_sheets: Vec<SetupSheet>,
}

/// 版次與各工序設定單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSetupSheets {
    pub revision: PartRevision,
    pub operations: Vec<OperationSetupSheets>,
}

/// 零件的設定單總覽：零件 → 版次 → 工序 → 設定單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartSetupSheets {
    pub part: Part,
    pub revisions: Vec<RevisionSetupSheets>,
}

/// 操作員查詢服務
pub struct OperatorService<'a> {
    catalog: &'a InMemoryCatalog,
    config: AggregatorConfig,
}

impl<'a> OperatorService<'a> {
    pub fn new(catalog: &'a InMemoryCatalog) -> Self {
        Self {
            catalog,
            config: AggregatorConfig::default(),
        }
    }

    /// 建構器模式：設置匯總配置
    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    fn revision_detail(&self, revision: &PartRevision) -> RevisionDetail {
        RevisionDetail {
            revision: revision.clone(),
            operations: self
                .catalog
                .operations_for_revision(revision.id)
                .into_iter()
                .filter(|o| o.is_active)
                .cloned()
                .collect(),
        }
    }

    /// 以零件號查詢零件明細
    pub fn part_by_number(&self, part_number: &str) -> Result<PartDetail> {
        let part = self
            .catalog
            .find_part_by_number(part_number)
            .ok_or_else(|| ToolingError::PartNotFound(part_number.to_string()))?;

        let default_revision = part
            .default_revision_id
            .and_then(|id| self.catalog.revision(id))
            .map(|revision| self.revision_detail(revision));

        let revisions = self
            .catalog
            .revisions_for_part(part.id)
            .into_iter()
            .filter(|r| r.is_active)
            .map(|revision| self.revision_detail(revision))
            .collect();

        Ok(PartDetail {
            part: part.clone(),
            default_revision,
            revisions,
        })
    }

    /// 零件的有效工序（依工序順序號排序）
    ///
    /// 指定版次代碼時只看該版次（不論版次是否有效）；否則只看有效版次。
    /// 零件不存在時回傳空列表。
    pub fn part_operations(&self, part_number: &str, revision_code: Option<&str>) -> Vec<Operation> {
        let part = match self.catalog.find_part_by_number(part_number) {
            Some(part) => part,
            None => return Vec::new(),
        };

        let revision_code = revision_code.filter(|code| !code.is_empty());
        let mut operations: Vec<Operation> = self
            .catalog
            .revisions_for_part(part.id)
            .into_iter()
            .filter(|r| match revision_code {
                Some(code) => r.revision_code == code,
                None => r.is_active,
            })
            .flat_map(|r| self.catalog.operations_for_revision(r.id))
            .filter(|o| o.is_active)
            .cloned()
            .collect();

        operations.sort_by_key(|o| o.sequence_number);
        operations
    }

    /// 以ID查詢工序
    pub fn operation(&self, operation_id: Uuid) -> Result<&'a Operation> {
        self.catalog
            .operation(operation_id)
            .ok_or(ToolingError::OperationNotFound(operation_id))
    }

    /// 工序最新的有效設定單（不含已封存）
    pub fn setup_sheet(&self, operation_id: Uuid) -> Option<&'a SetupSheet> {
        self.catalog
            .setup_sheets_for_operation(operation_id)
            .into_iter()
            .find(|s| s.is_active && !s.is_archived)
    }

    fn part_setup_sheets(&self, part: &Part, include_archived: bool) -> PartSetupSheets {
        let revisions = self
            .catalog
            .revisions_for_part(part.id)
            .into_iter()
            .map(|revision| RevisionSetupSheets {
                revision: revision.clone(),
                operations: self
                    .catalog
                    .operations_for_revision(revision.id)
                    .into_iter()
                    .map(|operation| OperationSetupSheets {
                        operation: operation.clone(),
                        setup_sheets: self
                            .catalog
                            .setup_sheets_for_operation(operation.id)
                            .into_iter()
                            .filter(|s| include_archived || !s.is_archived)
                            .cloned()
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        PartSetupSheets {
            part: part.clone(),
            revisions,
        }
    }

    /// 所有有效零件的設定單總覽（不含已封存設定單）
    pub fn setup_sheets_by_part(&self) -> Vec<PartSetupSheets> {
        self.catalog
            .list_parts(true)
            .into_iter()
            .map(|part| self.part_setup_sheets(part, false))
            .collect()
    }

    /// 單一零件的設定單總覽（含已封存設定單）
    pub fn setup_sheets_for_part(&self, part_id: Uuid) -> Result<PartSetupSheets> {
        let part = self
            .catalog
            .part(part_id)
            .ok_or_else(|| ToolingError::NotFound(format!("零件 {}", part_id)))?;
        Ok(self.part_setup_sheets(part, true))
    }

    /// 工序刀具可用性報告
    pub fn operation_tooling(&self, operation_id: Uuid, include_locations: bool) -> Result<Vec<AssemblyAvailability>> {
        self.operation(operation_id)?;

        ToolingAggregator::new(self.catalog)
            .with_config(self.config.clone())
            .aggregate(operation_id, include_locations)
    }

    /// 工序刀具備妥摘要
    pub fn operation_readiness(&self, operation_id: Uuid) -> Result<AvailabilitySummary> {
        let reports = self.operation_tooling(operation_id, false)?;
        let summary = AvailabilitySummary::from_reports(&reports);

        if !summary.is_ready() {
            tracing::warn!(
                "工序 {} 刀具未備妥：部分可用 {} 組，不可用 {} 組",
                operation_id,
                summary.partially_available,
                summary.not_available
            );
        }

        Ok(summary)
    }
}
