//! 刀具管理配置模型

use serde::{Deserialize, Serialize};

use crate::{Result, ToolingError};

/// 可用性匯總配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatorConfig {
    /// 呼叫方未指定時，是否輸出位置明細
    pub include_locations_by_default: bool,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            include_locations_by_default: false,
        }
    }
}

impl AggregatorConfig {
    /// 建構器模式：設置預設是否輸出位置明細
    pub fn with_include_locations_by_default(mut self, include: bool) -> Self {
        self.include_locations_by_default = include;
        self
    }
}

/// 設定單匯入配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImporterConfig {
    /// 尋找表頭時掃描的列數
    pub header_scan_rows: usize,

    /// 尋找 "#" / "Tool #" 表頭時掃描的欄數
    pub tool_number_scan_columns: usize,

    /// 刀號空白時：
    /// - false: 視為刀具清單結束（預設）
    /// - true: 跳過該列繼續解析
    pub skip_blank_rows: bool,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            header_scan_rows: 20,
            tool_number_scan_columns: 3,
            skip_blank_rows: false,
        }
    }
}

impl ImporterConfig {
    /// 建構器模式：設置表頭掃描列數
    pub fn with_header_scan_rows(mut self, rows: usize) -> Self {
        self.header_scan_rows = rows;
        self
    }

    /// 建構器模式：設置刀號表頭掃描欄數
    pub fn with_tool_number_scan_columns(mut self, columns: usize) -> Self {
        self.tool_number_scan_columns = columns;
        self
    }

    /// 建構器模式：設置是否跳過空白刀號列
    pub fn with_skip_blank_rows(mut self, skip: bool) -> Self {
        self.skip_blank_rows = skip;
        self
    }
}

/// 整體配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolingConfig {
    pub aggregator: AggregatorConfig,
    pub importer: ImporterConfig,
}

impl ToolingConfig {
    /// 從 JSON 字串載入配置，缺少的欄位使用預設值
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ToolingError::ConfigError(e.to_string()))
    }

    /// 建構器模式：設置匯總配置
    pub fn with_aggregator(mut self, aggregator: AggregatorConfig) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// 建構器模式：設置匯入配置
    pub fn with_importer(mut self, importer: ImporterConfig) -> Self {
        self.importer = importer;
        self
    }
}
