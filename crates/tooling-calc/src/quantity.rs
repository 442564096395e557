//! 可用數量計算

use tooling_core::{AssemblyComponent, InventoryStatusRecord};

/// 可用數量計算器
pub struct QuantityCalculator;

impl QuantityCalculator {
    /// 篩選計入可用庫存的記錄（Available / InMachine / InSetupKit）
    pub fn countable_records(records: &[InventoryStatusRecord]) -> Vec<&InventoryStatusRecord> {
        records.iter().filter(|r| r.is_countable()).collect()
    }

    /// 計算可用數量
    ///
    /// 報廢、遺失、外送研磨的記錄不計入；沒有記錄時為 0。
    pub fn quantity_available<'a, I>(records: I) -> u32
    where
        I: IntoIterator<Item = &'a InventoryStatusRecord>,
    {
        records
            .into_iter()
            .map(InventoryStatusRecord::countable_quantity)
            .fold(0u32, u32::saturating_add)
    }

    /// 有效需求量 = 零件用量 × 組件需求組數
    pub fn effective_required(line: &AssemblyComponent, assembly_quantity: u32) -> u32 {
        line.effective_required(assembly_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tooling_core::{ComponentType, InventoryStatus, ToolComponent};
    use uuid::Uuid;

    fn record(status: InventoryStatus, qty: u32) -> InventoryStatusRecord {
        InventoryStatusRecord::new(Uuid::nil(), status, qty)
    }

    #[test]
    fn test_sum_countable_statuses() {
        let records = vec![
            record(InventoryStatus::Available, 5),
            record(InventoryStatus::InMachine, 1),
            record(InventoryStatus::InSetupKit, 2),
        ];

        assert_eq!(QuantityCalculator::quantity_available(&records), 8);
        assert_eq!(QuantityCalculator::countable_records(&records).len(), 3);
    }

    #[test]
    fn test_excluded_statuses_never_count() {
        let records = vec![
            record(InventoryStatus::Available, 4),
            record(InventoryStatus::OutForRegrind, 10),
            record(InventoryStatus::Scrap, 7),
            record(InventoryStatus::Lost, 1),
        ];

        assert_eq!(QuantityCalculator::quantity_available(&records), 4);
        assert_eq!(QuantityCalculator::countable_records(&records).len(), 1);
    }

    #[test]
    fn test_no_records_is_zero() {
        let records: Vec<InventoryStatusRecord> = vec![];
        assert_eq!(QuantityCalculator::quantity_available(&records), 0);
    }

    #[test]
    fn test_effective_required() {
        let component = ToolComponent::new(ComponentType::Insert, "CCMT-432", "Insert");
        let line = AssemblyComponent::new(component, 2, true);

        assert_eq!(QuantityCalculator::effective_required(&line, 3), 6);
    }

    fn status_strategy() -> impl Strategy<Value = InventoryStatus> {
        prop::sample::select(InventoryStatus::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_available_equals_countable_sum(
            entries in prop::collection::vec((status_strategy(), 0u32..1000), 0..32)
        ) {
            let records: Vec<_> = entries.iter().map(|&(s, q)| record(s, q)).collect();

            let expected: u32 = entries
                .iter()
                .filter(|(s, _)| matches!(
                    s,
                    InventoryStatus::Available | InventoryStatus::InMachine | InventoryStatus::InSetupKit
                ))
                .map(|&(_, q)| q)
                .sum();

            prop_assert_eq!(QuantityCalculator::quantity_available(&records), expected);
        }
    }
}
