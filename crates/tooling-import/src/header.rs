//! 表頭列與欄位定位

use serde::{Deserialize, Serialize};
use tooling_core::{ImporterConfig, Result, ToolingError};

use crate::sheet::Worksheet;

/// 刀號欄位的表頭文字（完全比對）
const TOOL_NUMBER_HEADERS: [&str; 3] = ["#", "tool #", "t#"];

/// 刀具清單區段標題
const SECTION_TITLE: &str = "tooling setup";

/// 各欄位所在欄號（從 1 開始，None 表示找不到）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnIndices {
    pub tool_number: Option<usize>,
    pub description: Option<usize>,
    pub manufacturer: Option<usize>,
    pub tool_life: Option<usize>,
    pub holder: Option<usize>,
    pub stick_out: Option<usize>,
}

fn is_tool_number_header(value: &str) -> bool {
    TOOL_NUMBER_HEADERS.contains(&value)
}

/// 定位表頭列
///
/// 先在前 N 列中尋找含 "tooling setup" 的儲存格，表頭為其下一列；
/// 找不到時改在前幾欄尋找 "#"、"tool #"、"t#"，表頭即該列。
pub fn find_header_row(sheet: &Worksheet, config: &ImporterConfig) -> Result<usize> {
    let last_row = config.header_scan_rows.min(sheet.row_count());

    for row in 1..=last_row {
        for col in 1..=sheet.column_count() {
            if sheet.cell(row, col).to_lowercase().contains(SECTION_TITLE) {
                tracing::debug!("第 {} 列找到刀具清單標題，表頭為第 {} 列", row, row + 1);
                return Ok(row + 1);
            }
        }
    }

    for row in 1..=last_row {
        for col in 1..=config.tool_number_scan_columns {
            if is_tool_number_header(&sheet.cell(row, col).to_lowercase()) {
                tracing::debug!("第 {} 列第 {} 欄找到刀號表頭", row, col);
                return Ok(row);
            }
        }
    }

    Err(ToolingError::HeaderRowNotFound)
}

/// 在表頭列中定位各欄位
///
/// 比對不分大小寫；多個儲存格符合同一欄位時，以較右側者為準。
pub fn find_columns(sheet: &Worksheet, header_row: usize) -> ColumnIndices {
    let mut indices = ColumnIndices::default();

    for col in 1..=sheet.column_count() {
        let header = sheet.cell(header_row, col).to_lowercase();
        let header = header.trim();

        if is_tool_number_header(header) {
            indices.tool_number = Some(col);
        } else if header == "tool" || (header.contains("tool") && header.contains("descrip")) {
            indices.description = Some(col);
        } else if header.contains("manufacture") || header.contains("mfg") {
            indices.manufacturer = Some(col);
        } else if header.contains("tool life") {
            indices.tool_life = Some(col);
        } else if header.contains("holder") {
            indices.holder = Some(col);
        } else if header.contains("stick") {
            indices.stick_out = Some(col);
        }
    }

    indices
}
