//! 組件可用性判定

use serde::{Deserialize, Serialize};

use crate::ComponentAvailability;

/// 組件可用性狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    NotAvailable,
    PartiallyAvailable,
    FullyAvailable,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::NotAvailable => "NotAvailable",
            AvailabilityStatus::PartiallyAvailable => "PartiallyAvailable",
            AvailabilityStatus::FullyAvailable => "FullyAvailable",
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 決定性零件：有主要零件時只取主要零件，否則取全部零件
pub fn gating_components(components: &[ComponentAvailability]) -> Vec<&ComponentAvailability> {
    let primary: Vec<_> = components.iter().filter(|c| c.is_primary).collect();
    if primary.is_empty() {
        components.iter().collect()
    } else {
        primary
    }
}

/// 可用性判定器
pub struct StatusCalculator;

impl StatusCalculator {
    /// 判定組件整體可用性
    ///
    /// - 所有決定性零件皆滿足 → FullyAvailable（無零件時亦同）
    /// - 至少一個決定性零件滿足 → PartiallyAvailable
    /// - 否則 → NotAvailable
    ///
    /// 存在主要零件時，非主要零件的短缺不影響結果。
    pub fn determine(components: &[ComponentAvailability]) -> AvailabilityStatus {
        let gating = gating_components(components);

        if gating.iter().all(|c| c.is_satisfied()) {
            AvailabilityStatus::FullyAvailable
        } else if gating.iter().any(|c| c.is_satisfied()) {
            AvailabilityStatus::PartiallyAvailable
        } else {
            AvailabilityStatus::NotAvailable
        }
    }
}
