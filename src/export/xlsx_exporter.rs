// ==========================================
// 库位报表系统 - Excel 导出
// ==========================================
// 列: 固定 12 列（Field::EXPORT_COLUMNS）
// 类型: 位置字段写为数字,其余写为文本
// ==========================================

use crate::domain::{Field, FieldValue, NormalizedRecord};
use crate::export::error::ExportResult;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

pub struct XlsxExporter {
    sheet_name: String,
}

impl XlsxExporter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    fn build_workbook(&self, records: &[NormalizedRecord]) -> ExportResult<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        // 表头
        for (col, field) in Field::EXPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, field.header(), &header_format)?;
            worksheet.set_column_width(col as u16, column_width(*field))?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        // 数据行
        for (row_idx, record) in records.iter().enumerate() {
            let row = (row_idx + 1) as u32;
            for (col, field) in Field::EXPORT_COLUMNS.iter().enumerate() {
                match record.get(*field) {
                    Some(FieldValue::Integer(n)) => {
                        worksheet.write_number(row, col as u16, *n as f64)?;
                    }
                    Some(FieldValue::Text(s)) => {
                        worksheet.write_string(row, col as u16, s)?;
                    }
                    None => {}
                }
            }
        }

        Ok(workbook)
    }

    /// 写入文件
    pub fn write_to_path(&self, records: &[NormalizedRecord], path: &Path) -> ExportResult<()> {
        let mut workbook = self.build_workbook(records)?;
        workbook.save(path)?;
        info!("Excel 已导出: {} ({} 行)", path.display(), records.len());
        Ok(())
    }

    /// 写入内存（供下载接口直接返回）
    pub fn write_to_buffer(&self, records: &[NormalizedRecord]) -> ExportResult<Vec<u8>> {
        let mut workbook = self.build_workbook(records)?;
        Ok(workbook.save_to_buffer()?)
    }
}

fn column_width(field: Field) -> f64 {
    match field {
        Field::Name => 32.0,
        Field::SerialNumber | Field::OriginalLocation | Field::Customer | Field::Client => 18.0,
        _ => 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_buffer_is_zip() {
        let record = NormalizedRecord::new(2)
            .with_text(Field::Storage, Some("1"))
            .with_value(Field::Position1, Some(FieldValue::Integer(4)));

        let bytes = XlsxExporter::new("Locations")
            .write_to_buffer(&[record])
            .unwrap();

        // xlsx 为 zip 容器
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_invalid_sheet_name_is_error() {
        let result = XlsxExporter::new("bad[name]").write_to_buffer(&[]);
        assert!(result.is_err());
    }
}
