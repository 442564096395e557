//! 設定單刀具列解析

use serde::{Deserialize, Serialize};
use tooling_core::{ImporterConfig, Result, ToolingError};

use crate::header::{find_columns, find_header_row, ColumnIndices};
use crate::sheet::Worksheet;

/// 刀具清單後接的其他區段標記（出現在刀號欄時停止解析）
const STOP_MARKERS: [&str; 3] = ["comment", "note", "replace"];

/// 從設定單解析出的刀具
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTool {
    pub tool_number: String,
    pub description: String,
    pub manufacturer_part_number: String,
    pub tool_life: String,
    pub holder: String,
    pub stick_out: String,
}

/// 設定單解析器
#[derive(Debug, Clone, Default)]
pub struct SetupSheetParser {
    config: ImporterConfig,
}

impl SetupSheetParser {
    pub fn new(config: ImporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// 解析工作表中的刀具清單
    ///
    /// 找不到表頭列或刀號欄位時回傳錯誤；其他欄位缺少時以空字串填入。
    pub fn parse(&self, sheet: &Worksheet) -> Result<Vec<ParsedTool>> {
        let header_row = find_header_row(sheet, &self.config)?;
        let columns = find_columns(sheet, header_row);

        let tool_number_col = columns
            .tool_number
            .ok_or(ToolingError::ToolNumberColumnNotFound(header_row))?;

        let mut tools = Vec::new();

        for row in (header_row + 1)..=sheet.row_count() {
            let tool_number = sheet.cell(row, tool_number_col);

            if tool_number.is_empty() {
                if self.config.skip_blank_rows {
                    continue;
                }
                tracing::debug!("第 {} 列刀號空白，刀具清單結束", row);
                break;
            }

            let lowered = tool_number.to_lowercase();
            if STOP_MARKERS.iter().any(|marker| lowered.contains(marker)) {
                tracing::debug!("第 {} 列遇到區段標記 {:?}，刀具清單結束", row, tool_number);
                break;
            }

            tools.push(Self::read_row(sheet, row, tool_number, &columns));
        }

        tracing::info!(
            "設定單 {} 解析完成：表頭第 {} 列，刀具 {} 筆",
            sheet.name(),
            header_row,
            tools.len()
        );

        Ok(tools)
    }

    fn read_row(sheet: &Worksheet, row: usize, tool_number: &str, columns: &ColumnIndices) -> ParsedTool {
        let field = |col: Option<usize>| col.map(|c| sheet.cell(row, c).to_string()).unwrap_or_default();

        ParsedTool {
            tool_number: tool_number.to_string(),
            description: field(columns.description),
            manufacturer_part_number: field(columns.manufacturer),
            tool_life: field(columns.tool_life),
            holder: field(columns.holder),
            stick_out: field(columns.stick_out),
        }
    }
}
