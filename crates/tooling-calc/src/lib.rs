//! # Tooling Availability Engine
//!
//! 工序刀具可用性匯總引擎

pub mod aggregator;
pub mod location;
pub mod quantity;
pub mod status;

// Re-export 主要類型
pub use aggregator::ToolingAggregator;
pub use location::{LocationDescriptor, LocationType};
pub use status::AvailabilityStatus;

use serde::{Deserialize, Serialize};
use tooling_core::{ToolAssembly, ToolComponent};

/// 單一刀具組件的可用性報告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyAvailability {
    /// 組件目錄資料
    pub assembly: ToolAssembly,

    /// 組件整體可用性
    pub availability_status: AvailabilityStatus,

    /// 工序需要的組數
    pub quantity_required: u32,

    /// 各零件可用性（依組件用料順序）
    pub component_availability: Vec<ComponentAvailability>,
}

impl AssemblyAvailability {
    /// 判斷組件可用性的零件（有主要零件時只看主要零件）
    pub fn gating_components(&self) -> Vec<&ComponentAvailability> {
        status::gating_components(&self.component_availability)
    }

    /// 短缺的零件（決定性零件中可用量不足者）
    pub fn shortages(&self) -> Vec<&ComponentAvailability> {
        self.gating_components()
            .into_iter()
            .filter(|c| !c.is_satisfied())
            .collect()
    }
}

/// 單一零件的可用性
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAvailability {
    pub component: ToolComponent,

    /// 有效需求量（零件用量 × 組件需求組數）
    pub quantity_required: u32,

    /// 可用數量
    pub quantity_available: u32,

    pub is_primary: bool,

    /// 位置明細（未要求時為空）
    pub locations: Vec<LocationDescriptor>,
}

impl ComponentAvailability {
    /// 可用量是否滿足需求
    pub fn is_satisfied(&self) -> bool {
        self.quantity_available >= self.quantity_required
    }

    /// 短缺數量
    pub fn shortage(&self) -> u32 {
        self.quantity_required.saturating_sub(self.quantity_available)
    }
}

/// 工序刀具可用性摘要
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySummary {
    pub fully_available: usize,
    pub partially_available: usize,
    pub not_available: usize,
}

impl AvailabilitySummary {
    /// 從報告建立摘要
    pub fn from_reports(reports: &[AssemblyAvailability]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.availability_status {
                AvailabilityStatus::FullyAvailable => summary.fully_available += 1,
                AvailabilityStatus::PartiallyAvailable => summary.partially_available += 1,
                AvailabilityStatus::NotAvailable => summary.not_available += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.fully_available + self.partially_available + self.not_available
    }

    /// 所有組件是否皆完全可用（無組件時為 true）
    pub fn is_ready(&self) -> bool {
        self.partially_available == 0 && self.not_available == 0
    }
}
