//! 設定單匯入目錄

use serde::{Deserialize, Serialize};
use tooling_core::{Result, ToolAssembly, ToolComponent, ToolingError};
use tooling_import::{classify_component_type, extract_manufacturer, ParsedTool, SetupSheetParser, Worksheet};
use uuid::Uuid;

use crate::catalog::InMemoryCatalog;

/// 匯入結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    /// 設定單中找到的刀具數
    pub tools_found: usize,

    /// 建立並掛載到工序的刀具組件數
    pub tools_imported: usize,

    /// 新建立的刀具零件數
    pub components_created: usize,
}

/// 刀具零件編碼：廠商料號，空白時改用描述，再改用刀號
fn component_code(tool: &ParsedTool) -> &str {
    [&tool.manufacturer_part_number, &tool.description, &tool.tool_number]
        .into_iter()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

fn new_component(code: &str, tool: &ParsedTool) -> ToolComponent {
    let mut component = ToolComponent::new(classify_component_type(&tool.description), code, &tool.description)
        .with_asset_tag(&tool.tool_number);

    let manufacturer = extract_manufacturer(&tool.manufacturer_part_number);
    if !manufacturer.is_empty() {
        component = component.with_manufacturer(manufacturer);
    }
    component
}

/// 將解析出的刀具寫入目錄並掛載到工序
///
/// 每把刀建立一組刀具組件 `T<刀號> - <描述>`，主要零件依編碼查找，
/// 找不到時新建。組件與零件、組件與工序的需求數量皆為 1。
pub fn apply_parsed_tools(
    catalog: &mut InMemoryCatalog,
    operation_id: Uuid,
    tools: &[ParsedTool],
) -> Result<ImportOutcome> {
    if catalog.operation(operation_id).is_none() {
        return Err(ToolingError::OperationNotFound(operation_id));
    }

    let mut outcome = ImportOutcome {
        tools_found: tools.len(),
        ..ImportOutcome::default()
    };

    for tool in tools {
        let code = component_code(tool);

        let component_id = match catalog.find_component_by_code(code) {
            Some(existing) => existing.id,
            None => {
                outcome.components_created += 1;
                catalog.add_component(new_component(code, tool))?
            }
        };

        let assembly = ToolAssembly::new(format!("T{} - {}", tool.tool_number, tool.description), &tool.description)
            .with_tool_number(&tool.tool_number);
        let assembly_id = catalog.add_assembly(assembly)?;

        catalog.add_assembly_component(assembly_id, component_id, 1, true)?;
        catalog.attach_assembly(operation_id, assembly_id, 1)?;

        tracing::debug!("刀號 {} 匯入為組件 {}（零件 {}）", tool.tool_number, assembly_id, code);
        outcome.tools_imported += 1;
    }

    tracing::info!(
        "工序 {} 匯入刀具 {} 把，新建零件 {} 筆",
        operation_id,
        outcome.tools_imported,
        outcome.components_created
    );

    Ok(outcome)
}

/// 讀取設定單檔案（CSV 匯出）並匯入到其所屬工序
pub fn import_setup_sheet(
    catalog: &mut InMemoryCatalog,
    setup_sheet_id: Uuid,
    parser: &SetupSheetParser,
) -> Result<ImportOutcome> {
    let sheet = catalog
        .setup_sheet(setup_sheet_id)
        .ok_or_else(|| ToolingError::NotFound(format!("設定單 {}", setup_sheet_id)))?;

    let file_path = sheet
        .file_path
        .clone()
        .filter(|path| !path.trim().is_empty())
        .ok_or_else(|| ToolingError::SheetReadError(format!("設定單 {} 沒有檔案路徑", setup_sheet_id)))?;
    let operation_id = sheet.operation_id;

    let worksheet = Worksheet::from_csv_path(&file_path)?;
    let tools = parser.parse(&worksheet)?;

    apply_parsed_tools(catalog, operation_id, &tools)
}
