//! 資料存取介面
//!
//! 匯總器只透過這三個窄查詢讀取資料，不做導覽屬性式的隱式載入。
//! 實作方負責排除懸空參照（已不存在的組件/零件）。

use uuid::Uuid;

use crate::{AssemblyComponent, InventoryStatusRecord, RequiredAssembly, Result};

/// 刀具資料載入器
pub trait ToolingLoader {
    /// 載入工序所需的刀具組件（依掛載順序）
    fn load_required_assemblies(&self, operation_id: Uuid) -> Result<Vec<RequiredAssembly>>;

    /// 載入刀具組件的用料清單（依加入順序）
    fn load_assembly_components(&self, assembly_id: Uuid) -> Result<Vec<AssemblyComponent>>;

    /// 載入零件的所有庫存狀態記錄（位置資訊已解析）
    fn load_inventory_records(&self, component_id: Uuid) -> Result<Vec<InventoryStatusRecord>>;
}

impl<T: ToolingLoader + ?Sized> ToolingLoader for &T {
    fn load_required_assemblies(&self, operation_id: Uuid) -> Result<Vec<RequiredAssembly>> {
        (**self).load_required_assemblies(operation_id)
    }

    fn load_assembly_components(&self, assembly_id: Uuid) -> Result<Vec<AssemblyComponent>> {
        (**self).load_assembly_components(assembly_id)
    }

    fn load_inventory_records(&self, component_id: Uuid) -> Result<Vec<InventoryStatusRecord>> {
        (**self).load_inventory_records(component_id)
    }
}
