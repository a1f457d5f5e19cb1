// ==========================================
// 库位报表系统 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: Excel (.xlsx/.xlsm/.xlsb/.xls/.ods) / CSV (.csv)
// 约定: 第 1 行为表头,数据按列下标定位
// ==========================================

use crate::domain::RawRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_importer_trait::FileParser;
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const EXCEL_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

// ==========================================
// ParsedSheet - 解析后的表格
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl ParsedSheet {
    /// 表格列数（表头与数据行中的最大宽度）
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(RawRow::width)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        // 检查扩展名
        let ext = file_extension(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // 行号以物理行为准（引号内换行时不等于 idx + 2）
            let row_number = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2);
            let cells = record.iter().map(|v| v.trim().to_string()).collect();
            let row = RawRow::new(row_number, cells);

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        debug!(
            "CSV 解析完成: {} 列表头, {} 数据行",
            headers.len(),
            rows.len()
        );
        Ok(ParsedSheet { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        // 检查扩展名
        let ext = file_extension(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // 有效区域不一定从 A1 开始: 补齐左侧空列,保证列下标与 Excel 一致
        let (start_row, start_col) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无表头行".to_string()))?;

        let headers = pad_left(start_col, header_row.iter().map(cell_to_text));

        let mut rows = Vec::new();
        for (idx, data_row) in sheet_rows.enumerate() {
            // 行号: 有效区域起始行 + 表头 1 行 + 数据偏移,转为 1 基
            let row_number = start_row + idx + 2;
            let cells = pad_left(start_col, data_row.iter().map(cell_to_text));
            let row = RawRow::new(row_number, cells);

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        debug!(
            "Excel 解析完成: 工作表 {}, {} 列表头, {} 数据行",
            sheet_name,
            headers.len(),
            rows.len()
        );
        Ok(ParsedSheet { headers, rows })
    }
}

fn pad_left(count: usize, cells: impl Iterator<Item = String>) -> Vec<String> {
    std::iter::repeat(String::new())
        .take(count)
        .chain(cells)
        .collect()
}

/// 单元格转文本
///
/// 整数值浮点数去掉 ".0"（Excel 中数字一律以浮点存储）
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        let ext = file_extension(file_path);

        match ext.as_str() {
            "csv" => CsvParser.parse_sheet(file_path),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser.parse_sheet(file_path),
            _ => {
                ensure_exists(file_path)?;
                Err(ImportError::UnsupportedFormat(ext))
            }
        }
    }
}
