// ==========================================
// 库位报表系统 - 记录导入器实现
// ==========================================
// 流程:
// 1. 文件解析（CSV / Excel）
// 2. 列结构校验（缺列整批失败）
// 3. 字段抽取 + 展平排序
// 4. 完整性报告
// ==========================================

use crate::config::{column_letter, ColumnLayout};
use crate::domain::ImportBatch;
use crate::engine::{extract_and_normalize, CompletenessValidator};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{ParsedSheet, UniversalFileParser};
use crate::importer::record_importer_trait::{FileParser, RecordImporter};
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use uuid::Uuid;
use tracing::{info, warn};

// ==========================================
// RecordImporterImpl - 导入器
// ==========================================
pub struct RecordImporterImpl<P: FileParser = UniversalFileParser> {
    parser: P,
    layout: ColumnLayout,
}

impl RecordImporterImpl<UniversalFileParser> {
    /// 按扩展名自动选择解析器
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            parser: UniversalFileParser,
            layout,
        }
    }
}

impl<P: FileParser> RecordImporterImpl<P> {
    pub fn with_parser(parser: P, layout: ColumnLayout) -> Self {
        Self { parser, layout }
    }
}

/// 列结构校验: 布局中的每一列都必须存在于表格中
pub fn check_columns(sheet: &ParsedSheet, layout: &ColumnLayout) -> ImportResult<()> {
    let sheet_width = sheet.width();
    let missing: Vec<String> = layout
        .missing_columns(sheet_width)
        .into_iter()
        .map(|(column, index)| format!("{}({}列,下标{})", column, column_letter(index), index))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingColumns {
            sheet_width,
            missing,
        })
    }
}

impl<P: FileParser> RecordImporter for RecordImporterImpl<P> {
    fn import(&self, file_path: &Path) -> ImportResult<ImportBatch> {
        let started = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());

        info!(
            "[{}] 开始处理文件: {}",
            batch_id,
            file_path.display()
        );

        // === 步骤 1: 文件解析 ===
        let sheet = self.parser.parse_sheet(file_path)?;

        // === 步骤 2: 列结构校验 ===
        if let Err(e) = check_columns(&sheet, &self.layout) {
            warn!("[{}] 列结构校验失败: {}", batch_id, e);
            return Err(e);
        }

        // === 步骤 3: 抽取 + 展平排序 ===
        let records = extract_and_normalize(&sheet.rows, &self.layout)?;

        // === 步骤 4: 完整性报告 ===
        let dq_report = CompletenessValidator.validate(&records);

        let elapsed_ms = started.elapsed().as_millis();
        info!(
            "[{}] 处理完成: {} 行, 完整 {} 行, 不完整 {} 行, 耗时 {}ms",
            batch_id,
            dq_report.summary.total_rows,
            dq_report.summary.complete,
            dq_report.summary.incomplete,
            elapsed_ms
        );

        Ok(ImportBatch {
            batch_id,
            file_name,
            total_rows: sheet.rows.len(),
            imported_at: Utc::now(),
            elapsed_ms,
            records,
            dq_report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawRow;

    /// 固定返回给定表格的解析器
    struct StubParser(ParsedSheet);

    impl FileParser for StubParser {
        fn parse_sheet(&self, _file_path: &Path) -> ImportResult<ParsedSheet> {
            Ok(self.0.clone())
        }
    }

    fn sheet(width: usize, rows: Vec<Vec<&str>>) -> ParsedSheet {
        ParsedSheet {
            headers: (0..width).map(|i| format!("col{}", i)).collect(),
            rows: rows
                .into_iter()
                .enumerate()
                .map(|(i, cells)| {
                    RawRow::new(i + 2, cells.into_iter().map(String::from).collect())
                })
                .collect(),
        }
    }

    #[test]
    fn test_check_columns_reports_missing() {
        let result = check_columns(&sheet(7, vec![]), &ColumnLayout::default());

        match result {
            Err(ImportError::MissingColumns {
                sheet_width,
                missing,
            }) => {
                assert_eq!(sheet_width, 7);
                assert_eq!(missing.len(), 5);
                assert_eq!(missing[0], "序列号(J列,下标9)");
                assert_eq!(missing[4], "委托方(O列,下标14)");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_import_with_stub_parser() {
        let mut cells = vec![""; 15];
        cells[6] = "Widget (1A-1/5)";
        cells[3] = "2";
        let importer =
            RecordImporterImpl::with_parser(StubParser(sheet(15, vec![cells])), ColumnLayout::default());

        let batch = importer.import(Path::new("stub.xlsx")).unwrap();

        assert_eq!(batch.file_name.as_deref(), Some("stub.xlsx"));
        assert_eq!(batch.total_rows, 1);
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].position2(), Some(5));
        assert_eq!(batch.dq_report.summary.incomplete, 1);
    }

    #[test]
    fn test_import_without_data_rows_fails() {
        let importer =
            RecordImporterImpl::with_parser(StubParser(sheet(15, vec![])), ColumnLayout::default());

        let result = importer.import(Path::new("stub.xlsx"));

        assert!(matches!(result, Err(ImportError::EmptyBatch(_))));
    }
}
