//! 庫存位置描述

use serde::{Deserialize, Serialize};
use tooling_core::{InventoryStatusRecord, StockLocation};

/// 位置類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    Machine,
    SetupKit,
    Crib,
    Other,
}

/// 單筆庫存記錄的位置描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDescriptor {
    pub location_type: LocationType,

    /// 人可讀的位置說明
    pub location_description: String,

    /// 庫存狀態
    pub status: String,

    pub quantity: u32,

    /// 機台名稱（僅機台位置）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_info: Option<String>,

    /// 刀套號（僅機台位置）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pocket_number: Option<u32>,
}

/// 位置描述產生器
pub struct LocationMapper;

impl LocationMapper {
    /// 產生單筆記錄的位置描述
    pub fn describe(record: &InventoryStatusRecord) -> LocationDescriptor {
        let (location_type, location_description, machine_info, pocket_number) =
            match &record.location {
                Some(StockLocation::Machine {
                    machine_name,
                    pocket_number,
                    ..
                }) => {
                    let description = match pocket_number {
                        Some(pocket) => format!("{} - Pocket {}", machine_name, pocket),
                        None => machine_name.clone(),
                    };
                    (
                        LocationType::Machine,
                        description,
                        Some(machine_name.clone()),
                        *pocket_number,
                    )
                }
                Some(StockLocation::SetupKit { kit_name, .. }) => (
                    LocationType::SetupKit,
                    format!("Kit: {}", kit_name),
                    None,
                    None,
                ),
                Some(StockLocation::Crib { location_code, .. }) => {
                    (LocationType::Crib, location_code.clone(), None, None)
                }
                None => (LocationType::Other, "Unknown".to_string(), None, None),
            };

        LocationDescriptor {
            location_type,
            location_description,
            status: record.status.to_string(),
            quantity: record.quantity_on_hand,
            machine_info,
            pocket_number,
        }
    }

    /// 為多筆記錄產生位置描述（保持原順序）
    pub fn describe_all<'a, I>(records: I) -> Vec<LocationDescriptor>
    where
        I: IntoIterator<Item = &'a InventoryStatusRecord>,
    {
        records.into_iter().map(Self::describe).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooling_core::InventoryStatus;
    use uuid::Uuid;

    fn record(status: InventoryStatus, qty: u32) -> InventoryStatusRecord {
        InventoryStatusRecord::new(Uuid::new_v4(), status, qty)
    }

    #[test]
    fn test_machine_with_pocket() {
        let rec = record(InventoryStatus::InMachine, 1).with_location(StockLocation::Machine {
            machine_id: Uuid::new_v4(),
            machine_name: "VF-3 #1".to_string(),
            pocket_number: Some(4),
        });

        let desc = LocationMapper::describe(&rec);
        assert_eq!(desc.location_type, LocationType::Machine);
        assert_eq!(desc.location_description, "VF-3 #1 - Pocket 4");
        assert_eq!(desc.machine_info.as_deref(), Some("VF-3 #1"));
        assert_eq!(desc.pocket_number, Some(4));
        assert_eq!(desc.status, "InMachine");
        assert_eq!(desc.quantity, 1);
    }

    #[test]
    fn test_machine_without_pocket() {
        let rec = record(InventoryStatus::InMachine, 2).with_location(StockLocation::Machine {
            machine_id: Uuid::new_v4(),
            machine_name: "DMU-50".to_string(),
            pocket_number: None,
        });

        let desc = LocationMapper::describe(&rec);
        assert_eq!(desc.location_description, "DMU-50");
        assert_eq!(desc.pocket_number, None);
    }

    #[test]
    fn test_setup_kit_and_crib() {
        let kit = record(InventoryStatus::InSetupKit, 1).with_location(StockLocation::SetupKit {
            kit_id: Uuid::new_v4(),
            kit_name: "Kit-12345-01".to_string(),
        });
        let crib = record(InventoryStatus::Available, 5).with_location(StockLocation::Crib {
            location_id: Uuid::new_v4(),
            location_code: "CRIB-A1".to_string(),
        });

        let kit_desc = LocationMapper::describe(&kit);
        assert_eq!(kit_desc.location_type, LocationType::SetupKit);
        assert_eq!(kit_desc.location_description, "Kit: Kit-12345-01");
        assert!(kit_desc.machine_info.is_none());

        let crib_desc = LocationMapper::describe(&crib);
        assert_eq!(crib_desc.location_type, LocationType::Crib);
        assert_eq!(crib_desc.location_description, "CRIB-A1");
    }

    #[test]
    fn test_unassigned_is_other() {
        let desc = LocationMapper::describe(&record(InventoryStatus::Available, 3));

        assert_eq!(desc.location_type, LocationType::Other);
        assert_eq!(desc.location_description, "Unknown");
    }

    #[test]
    fn test_optional_fields_omitted_in_json() {
        let desc = LocationMapper::describe(&record(InventoryStatus::Available, 3));
        let json = serde_json::to_value(&desc).unwrap();

        assert_eq!(json["locationType"], "Other");
        assert!(json.get("machineInfo").is_none());
        assert!(json.get("pocketNumber").is_none());
    }
}
