//! 工作表格線
//!
//! 二進位試算表的儲存格解碼不在此處理；呼叫方可提供已解碼的列資料，
//! 或提供工作表匯出的 CSV。

use std::io::Read;
use std::path::Path;

use tooling_core::{Result, ToolingError};

/// 工作表（列、欄皆從 1 開始）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    name: String,
    rows: Vec<Vec<String>>,
    column_count: usize,
}

impl Worksheet {
    /// 創建空白工作表
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            column_count: 0,
        }
    }

    /// 從列資料建立工作表（儲存格內容會去除前後空白）
    pub fn from_rows<R, C, S>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sheet = Self::new(name);
        for row in rows {
            sheet.push_row(row);
        }
        sheet
    }

    /// 從 CSV 讀取工作表（無表頭、允許每列欄數不同）
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = Self::new(name);
        for record in csv_reader.records() {
            let record = record.map_err(|e| ToolingError::SheetReadError(e.to_string()))?;
            sheet.push_row(record.iter());
        }

        tracing::debug!(
            "讀取工作表 {}: {} 列 × {} 欄",
            sheet.name,
            sheet.row_count(),
            sheet.column_count()
        );

        Ok(sheet)
    }

    /// 從 CSV 檔案讀取工作表
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| ToolingError::SheetReadError(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_csv_reader(name, file)
    }

    /// 新增一列
    pub fn push_row<C, S>(&mut self, cells: C)
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let row: Vec<String> = cells
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .collect();
        self.column_count = self.column_count.max(row.len());
        self.rows.push(row);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 最後一列的列號
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 最後一欄的欄號
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// 讀取儲存格；超出範圍時為空字串
    pub fn cell(&self, row: usize, col: usize) -> &str {
        if row == 0 || col == 0 {
            return "";
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_is_one_based() {
        let sheet = Worksheet::from_rows("OP10", vec![vec!["Tool #", " Tool "], vec!["1"]]);

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_count(), 2);
        assert_eq!(sheet.cell(1, 1), "Tool #");
        assert_eq!(sheet.cell(1, 2), "Tool");
        assert_eq!(sheet.cell(2, 2), "");
        assert_eq!(sheet.cell(0, 1), "");
        assert_eq!(sheet.cell(9, 9), "");
    }

    #[test]
    fn test_from_csv_reader_flexible_rows() {
        let data = "Part,12345-01\n#,Tool,Holder\n1,1/2 EM,CAT40\n";
        let sheet = Worksheet::from_csv_reader("setup", data.as_bytes()).unwrap();

        assert_eq!(sheet.name(), "setup");
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.column_count(), 3);
        assert_eq!(sheet.cell(3, 2), "1/2 EM");
    }

    #[test]
    fn test_missing_csv_file() {
        let result = Worksheet::from_csv_path("/nonexistent/setup-sheet.csv");
        assert!(matches!(result, Err(ToolingError::SheetReadError(_))));
    }
}
