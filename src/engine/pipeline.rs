// ==========================================
// 库位报表系统 - 处理流水线
// ==========================================
// 预览路径: 原始行 → 抽取 → 展平排序（不过滤）
// 导出路径: 已标准化记录 → 重新排序 → 完整性过滤
// ==========================================

use crate::config::ColumnLayout;
use crate::domain::{NormalizedRecord, RawRow};
use crate::engine::normalizer::{filter_for_export, normalize_and_sort};
use crate::engine::ordering::sort_records;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_extractor::FieldExtractor;
use crate::importer::record_importer_trait::FieldExtractor as FieldExtractorTrait;
use tracing::info;

/// 预览路径
pub fn extract_and_normalize(
    rows: &[RawRow],
    layout: &ColumnLayout,
) -> ImportResult<Vec<NormalizedRecord>> {
    let extractor = FieldExtractor::new(layout);
    let extracted: Vec<_> = rows.iter().map(|row| extractor.extract(row)).collect();

    let located = extracted.iter().filter(|r| r.location.is_some()).count();
    info!(
        "字段抽取完成: {} 行, 其中 {} 行库位可解析",
        extracted.len(),
        located
    );

    normalize_and_sort(&extracted)
}

/// 导出路径
///
/// # 错误
/// - 输入为空: ImportError::EmptyBatch
pub fn prepare_export(records: Vec<NormalizedRecord>) -> ImportResult<Vec<NormalizedRecord>> {
    if records.is_empty() {
        return Err(ImportError::EmptyBatch("导出数据为空".to_string()));
    }

    let total = records.len();
    let mut sorted = records;
    sort_records(&mut sorted);
    let exported = filter_for_export(sorted);

    info!(
        "导出过滤完成: 共 {} 行, 保留 {} 行, 剔除 {} 行",
        total,
        exported.len(),
        total - exported.len()
    );
    Ok(exported)
}
