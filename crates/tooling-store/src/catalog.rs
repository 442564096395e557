//! 記憶體內刀具目錄

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tooling_core::{
    AssemblyComponent, CribLocation, InventoryStatus, InventoryStatusRecord, Machine, Operation,
    Part, PartRevision, RequiredAssembly, Result, SetupKit, SetupSheet, StockLocation,
    ToolAssembly, ToolComponent, ToolingError, ToolingLoader,
};
use uuid::Uuid;

/// 庫存記錄的位置參照（正規化形式，載入時解析為 `StockLocation`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationRef {
    Crib(Uuid),
    Machine {
        machine_id: Uuid,
        pocket_number: Option<u32>,
    },
    SetupKit(Uuid),
}

/// 組件用料連結
#[derive(Debug, Clone)]
struct AssemblyLink {
    id: Uuid,
    component_id: Uuid,
    quantity_required: u32,
    is_primary: bool,
    notes: Option<String>,
}

/// 工序掛載的刀具組件
#[derive(Debug, Clone)]
struct OperationLink {
    assembly_id: Uuid,
    quantity_required: u32,
}

/// 庫存記錄（儲存形式）
#[derive(Debug, Clone)]
struct StoredInventory {
    id: Uuid,
    component_id: Uuid,
    location: Option<LocationRef>,
    status: InventoryStatus,
    quantity_on_hand: u32,
    last_movement_at: DateTime<Utc>,
    notes: Option<String>,
}

/// 記憶體內刀具目錄
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    components: HashMap<Uuid, ToolComponent>,
    assemblies: HashMap<Uuid, ToolAssembly>,
    machines: HashMap<Uuid, Machine>,
    crib_locations: HashMap<Uuid, CribLocation>,
    setup_kits: HashMap<Uuid, SetupKit>,
    parts: HashMap<Uuid, Part>,
    revisions: HashMap<Uuid, PartRevision>,
    operations: HashMap<Uuid, Operation>,
    setup_sheets: HashMap<Uuid, SetupSheet>,

    assembly_links: HashMap<Uuid, Vec<AssemblyLink>>,
    operation_links: HashMap<Uuid, Vec<OperationLink>>,
    inventory: Vec<StoredInventory>,
}

fn quantity_at_least_one(quantity: u32, what: &str) -> Result<()> {
    if quantity == 0 {
        return Err(ToolingError::InvalidQuantity(format!("{} 的需求數量必須 ≥ 1", what)));
    }
    Ok(())
}

fn insert_unique<T>(map: &mut HashMap<Uuid, T>, id: Uuid, value: T, kind: &str) -> Result<Uuid> {
    if map.contains_key(&id) {
        return Err(ToolingError::Duplicate(format!("{} {}", kind, id)));
    }
    map.insert(id, value);
    Ok(id)
}

fn active_sorted<'a, T, K: Ord>(
    map: &'a HashMap<Uuid, T>,
    active_only: bool,
    is_active: impl Fn(&T) -> bool,
    key: impl Fn(&T) -> K,
) -> Vec<&'a T> {
    let mut items: Vec<&T> = map
        .values()
        .filter(|item| !active_only || is_active(item))
        .collect();
    items.sort_by_key(|item| key(item));
    items
}

impl InMemoryCatalog {
    /// 創建空白目錄
    pub fn new() -> Self {
        Self::default()
    }

    // ---- 刀具零件 ----

    pub fn add_component(&mut self, component: ToolComponent) -> Result<Uuid> {
        insert_unique(&mut self.components, component.id, component, "刀具零件")
    }

    pub fn component(&self, id: Uuid) -> Option<&ToolComponent> {
        self.components.get(&id)
    }

    /// 依零件編碼查找
    pub fn find_component_by_code(&self, component_code: &str) -> Option<&ToolComponent> {
        self.components
            .values()
            .find(|c| c.component_code == component_code)
    }

    /// 列出零件（依零件編碼排序）
    pub fn list_components(&self, active_only: bool) -> Vec<&ToolComponent> {
        active_sorted(&self.components, active_only, |c| c.is_active, |c| c.component_code.clone())
    }

    /// 修改零件描述性欄位（ID 不可變）
    pub fn update_component(&mut self, id: Uuid, update: impl FnOnce(&mut ToolComponent)) -> Result<()> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(ToolingError::ComponentNotFound(id))?;
        update(component);
        component.id = id;
        component.touch();
        Ok(())
    }

    /// 軟刪除零件
    pub fn deactivate_component(&mut self, id: Uuid) -> Result<()> {
        self.components
            .get_mut(&id)
            .ok_or(ToolingError::ComponentNotFound(id))?
            .deactivate();
        Ok(())
    }

    // ---- 刀具組件 ----

    pub fn add_assembly(&mut self, assembly: ToolAssembly) -> Result<Uuid> {
        insert_unique(&mut self.assemblies, assembly.id, assembly, "刀具組件")
    }

    pub fn assembly(&self, id: Uuid) -> Option<&ToolAssembly> {
        self.assemblies.get(&id)
    }

    /// 列出組件（依組件名稱排序）
    pub fn list_assemblies(&self, active_only: bool) -> Vec<&ToolAssembly> {
        active_sorted(&self.assemblies, active_only, |a| a.is_active, |a| a.assembly_name.clone())
    }

    pub fn update_assembly(&mut self, id: Uuid, update: impl FnOnce(&mut ToolAssembly)) -> Result<()> {
        let assembly = self
            .assemblies
            .get_mut(&id)
            .ok_or(ToolingError::AssemblyNotFound(id))?;
        update(assembly);
        assembly.id = id;
        assembly.touch();
        Ok(())
    }

    pub fn deactivate_assembly(&mut self, id: Uuid) -> Result<()> {
        self.assemblies
            .get_mut(&id)
            .ok_or(ToolingError::AssemblyNotFound(id))?
            .deactivate();
        Ok(())
    }

    /// 將零件加入組件用料清單，回傳連結ID
    pub fn add_assembly_component(
        &mut self,
        assembly_id: Uuid,
        component_id: Uuid,
        quantity_required: u32,
        is_primary: bool,
    ) -> Result<Uuid> {
        if !self.assemblies.contains_key(&assembly_id) {
            return Err(ToolingError::AssemblyNotFound(assembly_id));
        }
        if !self.components.contains_key(&component_id) {
            return Err(ToolingError::ComponentNotFound(component_id));
        }
        quantity_at_least_one(quantity_required, "組件用料")?;

        let link_id = Uuid::new_v4();
        self.assembly_links
            .entry(assembly_id)
            .or_default()
            .push(AssemblyLink {
                id: link_id,
                component_id,
                quantity_required,
                is_primary,
                notes: None,
            });
        Ok(link_id)
    }

    /// 設置組件用料備註
    pub fn set_assembly_component_notes(
        &mut self,
        assembly_id: Uuid,
        link_id: Uuid,
        notes: Option<String>,
    ) -> Result<()> {
        let link = self
            .assembly_links
            .get_mut(&assembly_id)
            .and_then(|links| links.iter_mut().find(|link| link.id == link_id))
            .ok_or_else(|| ToolingError::NotFound(format!("組件用料 {}", link_id)))?;
        link.notes = notes;
        Ok(())
    }

    /// 從組件用料清單移除一筆連結
    pub fn remove_assembly_component(&mut self, assembly_id: Uuid, link_id: Uuid) -> Result<()> {
        let links = self
            .assembly_links
            .get_mut(&assembly_id)
            .ok_or_else(|| ToolingError::NotFound(format!("組件用料 {}", link_id)))?;
        let before = links.len();
        links.retain(|link| link.id != link_id);
        if links.len() == before {
            return Err(ToolingError::NotFound(format!("組件用料 {}", link_id)));
        }
        Ok(())
    }

    // ---- 機台、儲位、備刀套件 ----

    pub fn add_machine(&mut self, machine: Machine) -> Result<Uuid> {
        insert_unique(&mut self.machines, machine.id, machine, "機台")
    }

    pub fn machine(&self, id: Uuid) -> Option<&Machine> {
        self.machines.get(&id)
    }

    pub fn list_machines(&self, active_only: bool) -> Vec<&Machine> {
        active_sorted(&self.machines, active_only, |m| m.is_active, |m| m.name.clone())
    }

    pub fn update_machine(&mut self, id: Uuid, update: impl FnOnce(&mut Machine)) -> Result<()> {
        let machine = self
            .machines
            .get_mut(&id)
            .ok_or_else(|| ToolingError::NotFound(format!("機台 {}", id)))?;
        update(machine);
        machine.id = id;
        machine.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn deactivate_machine(&mut self, id: Uuid) -> Result<()> {
        self.machines
            .get_mut(&id)
            .ok_or_else(|| ToolingError::NotFound(format!("機台 {}", id)))?
            .deactivate();
        Ok(())
    }

    pub fn add_crib_location(&mut self, location: CribLocation) -> Result<Uuid> {
        insert_unique(&mut self.crib_locations, location.id, location, "儲位")
    }

    pub fn crib_location(&self, id: Uuid) -> Option<&CribLocation> {
        self.crib_locations.get(&id)
    }

    pub fn list_crib_locations(&self, active_only: bool) -> Vec<&CribLocation> {
        active_sorted(&self.crib_locations, active_only, |l| l.is_active, |l| l.location_code.clone())
    }

    pub fn update_crib_location(&mut self, id: Uuid, update: impl FnOnce(&mut CribLocation)) -> Result<()> {
        let location = self
            .crib_locations
            .get_mut(&id)
            .ok_or_else(|| ToolingError::NotFound(format!("儲位 {}", id)))?;
        update(location);
        location.id = id;
        location.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn deactivate_crib_location(&mut self, id: Uuid) -> Result<()> {
        self.crib_locations
            .get_mut(&id)
            .ok_or_else(|| ToolingError::NotFound(format!("儲位 {}", id)))?
            .deactivate();
        Ok(())
    }

    pub fn add_setup_kit(&mut self, kit: SetupKit) -> Result<Uuid> {
        if let Some(operation_id) = kit.operation_id {
            if !self.operations.contains_key(&operation_id) {
                return Err(ToolingError::OperationNotFound(operation_id));
            }
        }
        insert_unique(&mut self.setup_kits, kit.id, kit, "備刀套件")
    }

    pub fn setup_kit(&self, id: Uuid) -> Option<&SetupKit> {
        self.setup_kits.get(&id)
    }

    // ---- 零件、版次、工序、設定單 ----

    pub fn has_parts(&self) -> bool {
        !self.parts.is_empty()
    }

    /// 新增零件（零件號不可重複）
    pub fn add_part(&mut self, part: Part) -> Result<Uuid> {
        if self.find_part_by_number(&part.part_number).is_some() {
            return Err(ToolingError::Duplicate(format!("零件號 {}", part.part_number)));
        }
        insert_unique(&mut self.parts, part.id, part, "零件")
    }

    pub fn part(&self, id: Uuid) -> Option<&Part> {
        self.parts.get(&id)
    }

    /// 列出零件（依零件號排序）
    pub fn list_parts(&self, active_only: bool) -> Vec<&Part> {
        active_sorted(&self.parts, active_only, |p| p.is_active, |p| p.part_number.clone())
    }

    pub fn find_part_by_number(&self, part_number: &str) -> Option<&Part> {
        self.parts.values().find(|p| p.part_number == part_number)
    }

    pub fn add_revision(&mut self, revision: PartRevision) -> Result<Uuid> {
        if !self.parts.contains_key(&revision.part_id) {
            return Err(ToolingError::NotFound(format!("零件 {}", revision.part_id)));
        }
        insert_unique(&mut self.revisions, revision.id, revision, "零件版次")
    }

    /// 設置零件預設版次（版次必須屬於該零件）
    pub fn set_default_revision(&mut self, part_id: Uuid, revision_id: Uuid) -> Result<()> {
        match self.revisions.get(&revision_id) {
            Some(revision) if revision.part_id == part_id => {}
            _ => return Err(ToolingError::NotFound(format!("零件版次 {}", revision_id))),
        }
        let part = self
            .parts
            .get_mut(&part_id)
            .ok_or_else(|| ToolingError::NotFound(format!("零件 {}", part_id)))?;
        part.default_revision_id = Some(revision_id);
        Ok(())
    }

    pub fn revision(&self, id: Uuid) -> Option<&PartRevision> {
        self.revisions.get(&id)
    }

    /// 零件的所有版次（依版次代碼排序）
    pub fn revisions_for_part(&self, part_id: Uuid) -> Vec<&PartRevision> {
        let mut revisions: Vec<_> = self
            .revisions
            .values()
            .filter(|r| r.part_id == part_id)
            .collect();
        revisions.sort_by(|a, b| a.revision_code.cmp(&b.revision_code));
        revisions
    }

    pub fn add_operation(&mut self, operation: Operation) -> Result<Uuid> {
        if !self.revisions.contains_key(&operation.part_revision_id) {
            return Err(ToolingError::NotFound(format!(
                "零件版次 {}",
                operation.part_revision_id
            )));
        }
        insert_unique(&mut self.operations, operation.id, operation, "工序")
    }

    pub fn operation(&self, id: Uuid) -> Option<&Operation> {
        self.operations.get(&id)
    }

    /// 版次下的工序（依工序順序號排序）
    pub fn operations_for_revision(&self, revision_id: Uuid) -> Vec<&Operation> {
        let mut operations: Vec<_> = self
            .operations
            .values()
            .filter(|o| o.part_revision_id == revision_id)
            .collect();
        operations.sort_by_key(|o| o.sequence_number);
        operations
    }

    /// 將刀具組件掛載到工序（保持掛載順序）
    pub fn attach_assembly(&mut self, operation_id: Uuid, assembly_id: Uuid, quantity_required: u32) -> Result<()> {
        if !self.operations.contains_key(&operation_id) {
            return Err(ToolingError::OperationNotFound(operation_id));
        }
        if !self.assemblies.contains_key(&assembly_id) {
            return Err(ToolingError::AssemblyNotFound(assembly_id));
        }
        quantity_at_least_one(quantity_required, "工序刀具組件")?;

        self.operation_links
            .entry(operation_id)
            .or_default()
            .push(OperationLink {
                assembly_id,
                quantity_required,
            });
        Ok(())
    }

    pub fn add_setup_sheet(&mut self, sheet: SetupSheet) -> Result<Uuid> {
        if !self.operations.contains_key(&sheet.operation_id) {
            return Err(ToolingError::OperationNotFound(sheet.operation_id));
        }
        insert_unique(&mut self.setup_sheets, sheet.id, sheet, "設定單")
    }

    pub fn setup_sheet(&self, id: Uuid) -> Option<&SetupSheet> {
        self.setup_sheets.get(&id)
    }

    /// 工序的設定單（新到舊，含已封存）
    pub fn setup_sheets_for_operation(&self, operation_id: Uuid) -> Vec<&SetupSheet> {
        let mut sheets: Vec<_> = self
            .setup_sheets
            .values()
            .filter(|s| s.operation_id == operation_id)
            .collect();
        sheets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sheets
    }

    /// 列出所有設定單（新到舊）；預設不含已封存者
    pub fn list_setup_sheets(&self, include_archived: bool) -> Vec<&SetupSheet> {
        let mut sheets: Vec<_> = self
            .setup_sheets
            .values()
            .filter(|s| include_archived || !s.is_archived)
            .collect();
        sheets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sheets
    }

    /// 封存設定單
    pub fn archive_setup_sheet(&mut self, id: Uuid, reason: impl Into<String>) -> Result<()> {
        let sheet = self
            .setup_sheets
            .get_mut(&id)
            .ok_or_else(|| ToolingError::NotFound(format!("設定單 {}", id)))?;
        sheet.archive(reason);
        tracing::info!("設定單 {} 已封存: {:?}", id, sheet.archive_reason);
        Ok(())
    }

    // ---- 庫存 ----

    /// 新增庫存狀態記錄，回傳記錄ID
    pub fn record_inventory(
        &mut self,
        component_id: Uuid,
        location: Option<LocationRef>,
        status: InventoryStatus,
        quantity_on_hand: u32,
    ) -> Result<Uuid> {
        if !self.components.contains_key(&component_id) {
            return Err(ToolingError::ComponentNotFound(component_id));
        }
        match location {
            Some(LocationRef::Crib(id)) if !self.crib_locations.contains_key(&id) => {
                return Err(ToolingError::NotFound(format!("儲位 {}", id)));
            }
            Some(LocationRef::Machine { machine_id, .. }) if !self.machines.contains_key(&machine_id) => {
                return Err(ToolingError::NotFound(format!("機台 {}", machine_id)));
            }
            Some(LocationRef::SetupKit(id)) if !self.setup_kits.contains_key(&id) => {
                return Err(ToolingError::NotFound(format!("備刀套件 {}", id)));
            }
            _ => {}
        }

        let id = Uuid::new_v4();
        self.inventory.push(StoredInventory {
            id,
            component_id,
            location,
            status,
            quantity_on_hand,
            last_movement_at: Utc::now(),
            notes: None,
        });
        Ok(id)
    }

    /// 設置庫存記錄備註
    pub fn set_inventory_notes(&mut self, record_id: Uuid, notes: Option<String>) -> Result<()> {
        let stored = self
            .inventory
            .iter_mut()
            .find(|stored| stored.id == record_id)
            .ok_or_else(|| ToolingError::NotFound(format!("庫存記錄 {}", record_id)))?;
        stored.notes = notes;
        stored.last_movement_at = Utc::now();
        Ok(())
    }

    /// 機台上的刀具零件（依刀位排序，無刀位者排最後）
    pub fn machine_contents(&self, machine_id: Uuid) -> Result<Vec<InventoryStatusRecord>> {
        if !self.machines.contains_key(&machine_id) {
            return Err(ToolingError::NotFound(format!("機台 {}", machine_id)));
        }

        let mut contents: Vec<(Option<u32>, InventoryStatusRecord)> = self
            .inventory
            .iter()
            .filter_map(|stored| match stored.location {
                Some(LocationRef::Machine {
                    machine_id: id,
                    pocket_number,
                }) if id == machine_id => Some((pocket_number, self.to_record(stored))),
                _ => None,
            })
            .collect();

        contents.sort_by_key(|(pocket, _)| (pocket.is_none(), *pocket));
        Ok(contents.into_iter().map(|(_, record)| record).collect())
    }

    fn to_record(&self, stored: &StoredInventory) -> InventoryStatusRecord {
        InventoryStatusRecord {
            id: stored.id,
            component_id: stored.component_id,
            location: stored
                .location
                .as_ref()
                .and_then(|location| self.resolve_location(location)),
            status: stored.status,
            quantity_on_hand: stored.quantity_on_hand,
            last_movement_at: stored.last_movement_at,
            notes: stored.notes.clone(),
        }
    }

    /// 將位置參照解析為含名稱的位置
    fn resolve_location(&self, location: &LocationRef) -> Option<StockLocation> {
        match *location {
            LocationRef::Crib(id) => self.crib_locations.get(&id).map(|l| StockLocation::Crib {
                location_id: id,
                location_code: l.location_code.clone(),
            }),
            LocationRef::Machine {
                machine_id,
                pocket_number,
            } => self.machines.get(&machine_id).map(|m| StockLocation::Machine {
                machine_id,
                machine_name: m.name.clone(),
                pocket_number,
            }),
            LocationRef::SetupKit(id) => self.setup_kit(id).map(|k| StockLocation::SetupKit {
                kit_id: id,
                kit_name: k.kit_name.clone(),
            }),
        }
    }
}

impl ToolingLoader for InMemoryCatalog {
    fn load_required_assemblies(&self, operation_id: Uuid) -> Result<Vec<RequiredAssembly>> {
        let links = match self.operation_links.get(&operation_id) {
            Some(links) => links,
            None => return Ok(Vec::new()),
        };

        let mut required = Vec::with_capacity(links.len());
        for link in links {
            match self.assemblies.get(&link.assembly_id) {
                Some(assembly) => {
                    required.push(RequiredAssembly::new(assembly.clone(), link.quantity_required))
                }
                None => tracing::warn!(
                    "工序 {} 參照的刀具組件 {} 不存在，略過",
                    operation_id,
                    link.assembly_id
                ),
            }
        }
        Ok(required)
    }

    fn load_assembly_components(&self, assembly_id: Uuid) -> Result<Vec<AssemblyComponent>> {
        let links = match self.assembly_links.get(&assembly_id) {
            Some(links) => links,
            None => return Ok(Vec::new()),
        };

        let mut lines = Vec::with_capacity(links.len());
        for link in links {
            match self.components.get(&link.component_id) {
                Some(component) => {
                    let line = AssemblyComponent::new(component.clone(), link.quantity_required, link.is_primary);
                    lines.push(match &link.notes {
                        Some(notes) => line.with_notes(notes),
                        None => line,
                    });
                }
                None => tracing::warn!(
                    "刀具組件 {} 參照的零件 {} 不存在，略過",
                    assembly_id,
                    link.component_id
                ),
            }
        }
        Ok(lines)
    }

    fn load_inventory_records(&self, component_id: Uuid) -> Result<Vec<InventoryStatusRecord>> {
        Ok(self
            .inventory
            .iter()
            .filter(|stored| stored.component_id == component_id)
            .map(|stored| self.to_record(stored))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooling_core::ComponentType;

    fn catalog_with_component() -> (InMemoryCatalog, Uuid) {
        let mut catalog = InMemoryCatalog::new();
        let id = catalog
            .add_component(ToolComponent::new(ComponentType::Cutter, "EM-500-4FL", "1/2 End Mill"))
            .unwrap();
        (catalog, id)
    }

    #[test]
    fn test_component_lifecycle() {
        let (mut catalog, id) = catalog_with_component();

        catalog
            .update_component(id, |c| c.description = "0.500\" 4-Flute End Mill".to_string())
            .unwrap();
        assert_eq!(catalog.component(id).unwrap().description, "0.500\" 4-Flute End Mill");
        assert!(catalog.component(id).unwrap().updated_at.is_some());

        catalog.deactivate_component(id).unwrap();
        assert!(catalog.list_components(true).is_empty());
        assert_eq!(catalog.list_components(false).len(), 1);
        assert!(catalog.find_component_by_code("EM-500-4FL").is_some());
    }

    #[test]
    fn test_update_cannot_change_identity() {
        let (mut catalog, id) = catalog_with_component();

        catalog.update_component(id, |c| c.id = Uuid::new_v4()).unwrap();
        assert_eq!(catalog.component(id).unwrap().id, id);
    }

    #[test]
    fn test_missing_references() {
        let (mut catalog, component_id) = catalog_with_component();
        let unknown = Uuid::new_v4();

        assert!(matches!(
            catalog.add_assembly_component(unknown, component_id, 1, true),
            Err(ToolingError::AssemblyNotFound(_))
        ));
        assert!(matches!(
            catalog.attach_assembly(unknown, unknown, 1),
            Err(ToolingError::OperationNotFound(_))
        ));
        assert!(matches!(
            catalog.record_inventory(component_id, Some(LocationRef::Crib(unknown)), InventoryStatus::Available, 1),
            Err(ToolingError::NotFound(_))
        ));
        assert!(matches!(
            catalog.deactivate_component(unknown),
            Err(ToolingError::ComponentNotFound(_))
        ));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let (mut catalog, component_id) = catalog_with_component();
        let assembly_id = catalog.add_assembly(ToolAssembly::new("T1", "T1")).unwrap();

        assert!(matches!(
            catalog.add_assembly_component(assembly_id, component_id, 0, true),
            Err(ToolingError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_assembly_links_keep_order_and_can_be_removed() {
        let (mut catalog, cutter) = catalog_with_component();
        let holder = catalog
            .add_component(ToolComponent::new(ComponentType::Holder, "CAT40-ER32-4", "Holder"))
            .unwrap();
        let assembly_id = catalog.add_assembly(ToolAssembly::new("T1", "T1")).unwrap();

        catalog.add_assembly_component(assembly_id, cutter, 1, true).unwrap();
        let holder_link = catalog.add_assembly_component(assembly_id, holder, 1, false).unwrap();

        let lines = catalog.load_assembly_components(assembly_id).unwrap();
        assert_eq!(lines[0].component.id, cutter);
        assert_eq!(lines[1].component.id, holder);

        catalog.remove_assembly_component(assembly_id, holder_link).unwrap();
        assert_eq!(catalog.load_assembly_components(assembly_id).unwrap().len(), 1);
        assert!(catalog.remove_assembly_component(assembly_id, holder_link).is_err());
    }

    #[test]
    fn test_inventory_location_resolution() {
        let (mut catalog, component_id) = catalog_with_component();
        let machine_id = catalog.add_machine(Machine::new("VF-3 #1", "3-axis mill")).unwrap();
        let crib_id = catalog
            .add_crib_location(CribLocation::new("CRIB-A1", "Crib Drawer A1", "CribBin"))
            .unwrap();

        catalog
            .record_inventory(component_id, Some(LocationRef::Crib(crib_id)), InventoryStatus::Available, 5)
            .unwrap();
        catalog
            .record_inventory(
                component_id,
                Some(LocationRef::Machine {
                    machine_id,
                    pocket_number: Some(1),
                }),
                InventoryStatus::InMachine,
                1,
            )
            .unwrap();

        catalog
            .update_machine(machine_id, |m| m.name = "VF-3 Cell 1".to_string())
            .unwrap();

        let records = catalog.load_inventory_records(component_id).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].location,
            Some(StockLocation::Crib {
                location_id: crib_id,
                location_code: "CRIB-A1".to_string(),
            })
        );
        // 名稱於載入時解析，反映最新的機台名稱
        assert_eq!(
            records[1].location,
            Some(StockLocation::Machine {
                machine_id,
                machine_name: "VF-3 Cell 1".to_string(),
                pocket_number: Some(1),
            })
        );
    }

    #[test]
    fn test_duplicate_part_number() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_part(Part::new("12345-01", "Mounting Bracket")).unwrap();

        assert!(matches!(
            catalog.add_part(Part::new("12345-01", "Other")),
            Err(ToolingError::Duplicate(_))
        ));
    }

    #[test]
    fn test_default_revision_must_belong_to_part() {
        let mut catalog = InMemoryCatalog::new();
        let part_a = catalog.add_part(Part::new("A", "A")).unwrap();
        let part_b = catalog.add_part(Part::new("B", "B")).unwrap();
        let rev_b = catalog.add_revision(PartRevision::new(part_b, "A")).unwrap();

        assert!(catalog.set_default_revision(part_a, rev_b).is_err());
        catalog.set_default_revision(part_b, rev_b).unwrap();
        assert_eq!(catalog.part(part_b).unwrap().default_revision_id, Some(rev_b));
    }

    #[test]
    fn test_unknown_operation_loads_nothing() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.load_required_assemblies(Uuid::new_v4()).unwrap().is_empty());
    }

    #[test]
    fn test_assembly_component_notes() {
        let (mut catalog, cutter) = catalog_with_component();
        let assembly_id = catalog.add_assembly(ToolAssembly::new("T1", "T1")).unwrap();
        let link = catalog.add_assembly_component(assembly_id, cutter, 1, true).unwrap();

        catalog
            .set_assembly_component_notes(assembly_id, link, Some("Stickout 1.25".to_string()))
            .unwrap();
        let lines = catalog.load_assembly_components(assembly_id).unwrap();
        assert_eq!(lines[0].notes.as_deref(), Some("Stickout 1.25"));

        catalog.set_assembly_component_notes(assembly_id, link, None).unwrap();
        assert_eq!(catalog.load_assembly_components(assembly_id).unwrap()[0].notes, None);

        assert!(matches!(
            catalog.set_assembly_component_notes(assembly_id, Uuid::new_v4(), None),
            Err(ToolingError::NotFound(_))
        ));
    }

    #[test]
    fn test_inventory_notes_and_kit_location() {
        let (mut catalog, component_id) = catalog_with_component();
        let kit_id = catalog.add_setup_kit(SetupKit::new("Kit-12345-01")).unwrap();
        assert_eq!(catalog.setup_kit(kit_id).unwrap().status, "Planned");

        let record_id = catalog
            .record_inventory(component_id, Some(LocationRef::SetupKit(kit_id)), InventoryStatus::InSetupKit, 1)
            .unwrap();
        catalog
            .set_inventory_notes(record_id, Some("pulled for OP10".to_string()))
            .unwrap();

        let records = catalog.load_inventory_records(component_id).unwrap();
        assert_eq!(records[0].notes.as_deref(), Some("pulled for OP10"));
        assert_eq!(
            records[0].location,
            Some(StockLocation::SetupKit {
                kit_id,
                kit_name: "Kit-12345-01".to_string(),
            })
        );
        assert!(catalog.set_inventory_notes(Uuid::new_v4(), None).is_err());
    }

    #[test]
    fn test_machine_contents_ordered_by_pocket() {
        let (mut catalog, cutter) = catalog_with_component();
        let holder = catalog
            .add_component(ToolComponent::new(ComponentType::Holder, "CAT40-ER32-4", "Holder"))
            .unwrap();
        let machine_id = catalog.add_machine(Machine::new("DMU-50", "5-axis mill")).unwrap();
        let other_machine = catalog.add_machine(Machine::new("VF-3 #2", "3-axis mill")).unwrap();

        let at = |pocket_number| {
            Some(LocationRef::Machine {
                machine_id,
                pocket_number,
            })
        };
        catalog.record_inventory(holder, at(None), InventoryStatus::InMachine, 1).unwrap();
        catalog.record_inventory(cutter, at(Some(12)), InventoryStatus::InMachine, 1).unwrap();
        catalog.record_inventory(holder, at(Some(3)), InventoryStatus::InMachine, 1).unwrap();
        catalog
            .record_inventory(
                cutter,
                Some(LocationRef::Machine {
                    machine_id: other_machine,
                    pocket_number: Some(1),
                }),
                InventoryStatus::InMachine,
                1,
            )
            .unwrap();
        catalog.record_inventory(cutter, None, InventoryStatus::Available, 4).unwrap();

        let contents = catalog.machine_contents(machine_id).unwrap();
        let pockets: Vec<_> = contents
            .iter()
            .map(|record| match &record.location {
                Some(StockLocation::Machine { pocket_number, .. }) => *pocket_number,
                other => panic!("unexpected location {:?}", other),
            })
            .collect();
        assert_eq!(pockets, vec![Some(3), Some(12), None]);
        assert_eq!(contents[1].component_id, cutter);

        assert!(matches!(
            catalog.machine_contents(Uuid::new_v4()),
            Err(ToolingError::NotFound(_))
        ));
    }

    #[test]
    fn test_setup_sheet_archive_and_listing() {
        let mut catalog = InMemoryCatalog::new();
        let part = catalog.add_part(Part::new("12345-01", "Bracket")).unwrap();
        let revision = catalog.add_revision(PartRevision::new(part, "A")).unwrap();
        let operation_id = catalog.add_operation(Operation::new(revision, "OP10", 10)).unwrap();

        let now = Utc::now();
        let old = catalog
            .add_setup_sheet(SetupSheet::new(operation_id, "PDF", "v1").with_created_at(now - chrono::Duration::days(3)))
            .unwrap();
        let current = catalog
            .add_setup_sheet(SetupSheet::new(operation_id, "PDF", "v2").with_created_at(now))
            .unwrap();

        catalog.archive_setup_sheet(old, "Replaced by new setup sheet").unwrap();
        let archived = catalog.setup_sheet(old).unwrap();
        assert!(archived.is_archived);
        assert_eq!(archived.archive_reason.as_deref(), Some("Replaced by new setup sheet"));

        let visible: Vec<_> = catalog.list_setup_sheets(false).iter().map(|s| s.id).collect();
        assert_eq!(visible, vec![current]);
        let all: Vec<_> = catalog.list_setup_sheets(true).iter().map(|s| s.id).collect();
        assert_eq!(all, vec![current, old]);

        assert!(matches!(
            catalog.archive_setup_sheet(Uuid::new_v4(), "n/a"),
            Err(ToolingError::NotFound(_))
        ));
    }

    #[test]
    fn test_loader_skips_dangling_links() {
        let (mut catalog, cutter) = catalog_with_component();
        let holder = catalog
            .add_component(ToolComponent::new(ComponentType::Holder, "CAT40-ER32-4", "Holder"))
            .unwrap();
        let part = catalog.add_part(Part::new("P", "P")).unwrap();
        let revision = catalog.add_revision(PartRevision::new(part, "A")).unwrap();
        let operation_id = catalog.add_operation(Operation::new(revision, "OP10", 10)).unwrap();
        let kept = catalog.add_assembly(ToolAssembly::new("T1", "T1")).unwrap();
        let dropped = catalog.add_assembly(ToolAssembly::new("T2", "T2")).unwrap();
        catalog.add_assembly_component(kept, cutter, 1, true).unwrap();
        catalog.add_assembly_component(kept, holder, 1, false).unwrap();
        catalog.attach_assembly(operation_id, dropped, 1).unwrap();
        catalog.attach_assembly(operation_id, kept, 1).unwrap();

        // 直接移除底層資料，模擬連結指向不存在的實體
        catalog.assemblies.remove(&dropped);
        catalog.components.remove(&holder);

        let required = catalog.load_required_assemblies(operation_id).unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0].assembly.id, kept);

        let lines = catalog.load_assembly_components(kept).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].component.id, cutter);
    }
}
