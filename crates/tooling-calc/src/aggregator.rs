//! 工序刀具可用性匯總器

use tooling_core::{AggregatorConfig, AssemblyComponent, RequiredAssembly, ToolingLoader};
use uuid::Uuid;

use crate::location::LocationMapper;
use crate::quantity::QuantityCalculator;
use crate::status::StatusCalculator;
use crate::{AssemblyAvailability, ComponentAvailability};

/// 刀具可用性匯總器
///
/// 唯讀、無狀態：每次呼叫只透過載入器讀取資料，不快取。
pub struct ToolingAggregator<L> {
    /// 資料載入器
    loader: L,

    /// 匯總配置
    config: AggregatorConfig,
}

impl<L: ToolingLoader> ToolingAggregator<L> {
    /// 創建新的匯總器
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            config: AggregatorConfig::default(),
        }
    }

    /// 建構器模式：設置配置
    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// 使用配置中的預設位置明細設定進行匯總
    pub fn aggregate_default(&self, operation_id: Uuid) -> tooling_core::Result<Vec<AssemblyAvailability>> {
        self.aggregate(operation_id, self.config.include_locations_by_default)
    }

    /// 主匯總入口
    ///
    /// 依工序掛載順序輸出每個刀具組件的可用性報告。工序沒有刀具組件時回傳空列表。
    /// 工序是否存在由呼叫方判斷。
    pub fn aggregate(
        &self,
        operation_id: Uuid,
        include_locations: bool,
    ) -> tooling_core::Result<Vec<AssemblyAvailability>> {
        let start_time = std::time::Instant::now();

        // Step 1: 載入需求清單
        let required_assemblies = self.loader.load_required_assemblies(operation_id)?;
        tracing::info!(
            "開始匯總工序 {} 刀具可用性：刀具組件 {} 組，位置明細 {}",
            operation_id,
            required_assemblies.len(),
            include_locations
        );

        // Step 2: 逐組件計算
        let mut reports = Vec::with_capacity(required_assemblies.len());
        for required in &required_assemblies {
            reports.push(self.assembly_availability(required, include_locations)?);
        }

        tracing::info!(
            "工序 {} 刀具可用性匯總完成，耗時 {:?}",
            operation_id,
            start_time.elapsed()
        );

        Ok(reports)
    }

    /// 單一刀具組件的可用性
    fn assembly_availability(
        &self,
        required: &RequiredAssembly,
        include_locations: bool,
    ) -> tooling_core::Result<AssemblyAvailability> {
        let assembly = &required.assembly;
        let lines = self.loader.load_assembly_components(assembly.id)?;

        tracing::debug!(
            "計算刀具組件 {}（{}）：零件 {} 項，需求 {} 組",
            assembly.assembly_name,
            assembly.id,
            lines.len(),
            required.quantity_required
        );

        let mut component_availability = Vec::with_capacity(lines.len());
        for line in &lines {
            component_availability.push(self.component_availability(
                line,
                required.quantity_required,
                include_locations,
            )?);
        }

        let availability_status = StatusCalculator::determine(&component_availability);

        tracing::debug!(
            "刀具組件 {} 可用性: {}",
            assembly.assembly_name,
            availability_status
        );

        Ok(AssemblyAvailability {
            assembly: assembly.clone(),
            availability_status,
            quantity_required: required.quantity_required,
            component_availability,
        })
    }

    /// 單一零件的可用性
    fn component_availability(
        &self,
        line: &AssemblyComponent,
        assembly_quantity: u32,
        include_locations: bool,
    ) -> tooling_core::Result<ComponentAvailability> {
        let records = self.loader.load_inventory_records(line.component.id)?;
        let countable = QuantityCalculator::countable_records(&records);

        let quantity_available = QuantityCalculator::quantity_available(countable.iter().copied());
        let quantity_required = QuantityCalculator::effective_required(line, assembly_quantity);

        let locations = if include_locations {
            LocationMapper::describe_all(countable.iter().copied())
        } else {
            Vec::new()
        };

        tracing::debug!(
            "零件 {}: 需求 {}, 可用 {}（記錄 {} 筆，計入 {} 筆）",
            line.component.component_code,
            quantity_required,
            quantity_available,
            records.len(),
            countable.len()
        );

        Ok(ComponentAvailability {
            component: line.component.clone(),
            quantity_required,
            quantity_available,
            is_primary: line.is_primary,
            locations,
        })
    }
}
