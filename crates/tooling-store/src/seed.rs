//! 示範資料

use rust_decimal::Decimal;
use tooling_core::{
    ComponentType, CribLocation, InventoryStatus, Machine, Operation, Part, PartRevision, Result,
    SetupKit, SetupSheet, ToolAssembly, ToolComponent,
};

use crate::catalog::{InMemoryCatalog, LocationRef};

/// 載入示範資料
///
/// 目錄中已有任何零件時不做任何事並回傳 `false`。
pub fn seed_demo_data(catalog: &mut InMemoryCatalog) -> Result<bool> {
    if catalog.has_parts() {
        tracing::debug!("目錄已有零件資料，略過示範資料");
        return Ok(false);
    }

    // 刀具室儲位
    let mut cribs = Vec::new();
    for (code, description, location_type) in [
        ("CRIB-A1", "Crib Drawer A1", "CribBin"),
        ("CRIB-A2", "Crib Drawer A2", "CribBin"),
        ("CRIB-B1", "Crib Drawer B1", "CribBin"),
        ("RACK-T1", "Tool Rack T1", "CabinetDrawer"),
        ("VENDOR", "Out at Vendor", "Offsite"),
    ] {
        cribs.push(catalog.add_crib_location(CribLocation::new(code, description, location_type))?);
    }

    // 機台
    let vf3_1 = catalog.add_machine(
        Machine::new("VF-3 #1", "3-axis mill")
            .with_description("Haas VF-3 Mill #1")
            .with_make("Haas", "VF-3"),
    )?;
    catalog.add_machine(
        Machine::new("VF-3 #2", "3-axis mill")
            .with_description("Haas VF-3 Mill #2")
            .with_make("Haas", "VF-3"),
    )?;
    catalog.add_machine(
        Machine::new("DMU-50", "5-axis mill")
            .with_description("DMG DMU-50 5-Axis")
            .with_make("DMG", "DMU-50"),
    )?;

    // 刀具零件
    let mut components = Vec::new();
    for (component_type, code, description, manufacturer, asset_tag, cents) in [
        (ComponentType::Cutter, "EM-500-4FL", "0.500\" 4-Flute End Mill", "Kennametal", None, 4550),
        (ComponentType::Cutter, "EM-250-2FL", "0.250\" 2-Flute End Mill", "OSG", None, 2875),
        (ComponentType::Holder, "CAT40-ER32-4", "CAT40 ER32 Collet Chuck 4\" Projection", "Haimer", Some("H-1001"), 38500),
        (ComponentType::Holder, "CAT40-ER16-3", "CAT40 ER16 Collet Chuck 3\" Projection", "Haimer", Some("H-1002"), 36500),
        (ComponentType::Collet, "ER32-12MM", "ER32 12mm Collet", "Techniks", None, 1850),
        (ComponentType::Collet, "ER16-6MM", "ER16 6mm Collet", "Techniks", None, 1550),
        (ComponentType::Insert, "CCMT-432", "CCMT 21.51 Carbide Insert", "Sandvik", None, 825),
        (ComponentType::Extension, "EXT-CAT40-6", "CAT40 6\" Extension", "Haimer", Some("E-2001"), 22500),
    ] {
        let mut component = ToolComponent::new(component_type, code, description)
            .with_manufacturer(manufacturer)
            .with_unit_cost(Decimal::new(cents, 2));
        if let Some(tag) = asset_tag {
            component = component.with_asset_tag(tag);
        }
        components.push(catalog.add_component(component)?);
    }

    // 刀具組件
    let rougher = catalog.add_assembly(
        ToolAssembly::new("T1 - 1/2\" Rougher", "1/2 inch roughing end mill assembly").with_tool_number("T1"),
    )?;
    let finisher = catalog.add_assembly(
        ToolAssembly::new("T2 - 1/4\" Finisher", "1/4 inch finishing end mill assembly").with_tool_number("T2"),
    )?;

    for (assembly, component, is_primary) in [
        (rougher, components[0], true),
        (rougher, components[2], false),
        (rougher, components[4], false),
        (finisher, components[1], true),
        (finisher, components[3], false),
        (finisher, components[5], false),
    ] {
        catalog.add_assembly_component(assembly, component, 1, is_primary)?;
    }

    // 零件、版次
    let bracket = catalog.add_part(Part::new("12345-01", "Mounting Bracket"))?;
    let cover = catalog.add_part(Part::new("67890-02", "Housing Cover"))?;
    let bracket_a = catalog.add_revision(PartRevision::new(bracket, "A").with_notes("Initial release"))?;
    let cover_b = catalog.add_revision(PartRevision::new(cover, "B").with_notes("Updated dimensions"))?;
    catalog.set_default_revision(bracket, bracket_a)?;
    catalog.set_default_revision(cover, cover_b)?;

    // 工序與設定單
    let mut operations = Vec::new();
    for (revision, part_number, name, sequence) in [
        (bracket_a, "12345-01", "OP10", 10),
        (bracket_a, "12345-01", "OP20", 20),
        (cover_b, "67890-02", "OP10", 10),
    ] {
        let sheet_path = format!("/setup-sheets/{}-{}.pdf", part_number, name);
        let operation_id = catalog.add_operation(
            Operation::new(revision, name, sequence)
                .with_program_name(format!("{}-{}.ESP", part_number, name))
                .with_setup_sheet_url(&sheet_path),
        )?;
        catalog.add_setup_sheet(
            SetupSheet::new(operation_id, "PDF", format!("{} Setup Sheet", name)).with_file_path(sheet_path),
        )?;
        operations.push(operation_id);
    }

    // 工序掛載刀具組件
    for (operation, assembly) in [
        (operations[0], rougher),
        (operations[0], finisher),
        (operations[1], finisher),
        (operations[2], rougher),
    ] {
        catalog.attach_assembly(operation, assembly, 1)?;
    }

    // 庫存
    for (component, crib, quantity) in [
        (components[0], cribs[0], 5),
        (components[1], cribs[0], 8),
        (components[2], cribs[1], 2),
        (components[3], cribs[1], 3),
        (components[4], cribs[2], 12),
        (components[5], cribs[2], 15),
    ] {
        catalog.record_inventory(component, Some(LocationRef::Crib(crib)), InventoryStatus::Available, quantity)?;
    }
    catalog.record_inventory(
        components[0],
        Some(LocationRef::Machine {
            machine_id: vf3_1,
            pocket_number: Some(1),
        }),
        InventoryStatus::InMachine,
        1,
    )?;

    // 備刀套件
    catalog.add_setup_kit(SetupKit::new("Kit-12345-01").for_operation(operations[0]))?;

    tracing::info!(
        "示範資料載入完成：零件 2 筆，工序 {} 道，刀具零件 {} 筆",
        operations.len(),
        components.len()
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::OperatorService;
    use tooling_calc::AvailabilityStatus;
    use tooling_core::StockLocation;

    #[test]
    fn test_seed_is_idempotent() {
        let mut catalog = InMemoryCatalog::new();

        assert!(seed_demo_data(&mut catalog).unwrap());
        assert!(!seed_demo_data(&mut catalog).unwrap());
        assert_eq!(catalog.list_components(true).len(), 8);
        assert_eq!(catalog.list_machines(true).len(), 3);
        assert_eq!(catalog.list_crib_locations(true).len(), 5);
        assert_eq!(catalog.list_assemblies(true).len(), 2);
    }

    #[test]
    fn test_seeded_op10_is_fully_available() {
        let mut catalog = InMemoryCatalog::new();
        seed_demo_data(&mut catalog).unwrap();

        let service = OperatorService::new(&catalog);
        let op10 = service.part_operations("12345-01", None)[0].id;
        let reports = service.operation_tooling(op10, true).unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports
            .iter()
            .all(|r| r.availability_status == AvailabilityStatus::FullyAvailable));

        let end_mill = &reports[0].component_availability[0];
        assert_eq!(end_mill.component.component_code, "EM-500-4FL");
        assert_eq!(end_mill.quantity_available, 6);
        assert_eq!(end_mill.locations.len(), 2);
        assert_eq!(end_mill.locations[1].location_description, "VF-3 #1 - Pocket 1");
    }

    #[test]
    fn test_seeded_machine_contents() {
        let mut catalog = InMemoryCatalog::new();
        seed_demo_data(&mut catalog).unwrap();

        let vf3 = catalog
            .list_machines(true)
            .into_iter()
            .find(|m| m.name == "VF-3 #1")
            .unwrap()
            .id;
        let contents = catalog.machine_contents(vf3).unwrap();

        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].status, InventoryStatus::InMachine);
        assert_eq!(contents[0].quantity_on_hand, 1);
        assert_eq!(
            catalog.component(contents[0].component_id).unwrap().component_code,
            "EM-500-4FL"
        );
        assert!(matches!(
            &contents[0].location,
            Some(StockLocation::Machine { machine_name, pocket_number: Some(1), .. }) if machine_name == "VF-3 #1"
        ));

        // 其他機台為空
        let dmu = catalog
            .list_machines(true)
            .into_iter()
            .find(|m| m.name == "DMU-50")
            .unwrap()
            .id;
        assert!(catalog.machine_contents(dmu).unwrap().is_empty());
    }
}
