// ==========================================
// 库位报表系统 - 批量标准化与排序
// ==========================================
// 职责: 库位展平 / 多键稳定排序 / 导出完整性过滤
// ==========================================

use crate::domain::{ExtractedRecord, Field, FieldValue, NormalizedRecord};
use crate::engine::ordering::sort_records;
use crate::importer::error::{ImportError, ImportResult};

/// 展平单条记录: 库位拆为库区/货架/位置1/位置2 四个字段
pub fn flatten(record: &ExtractedRecord) -> NormalizedRecord {
    let mut normalized = NormalizedRecord::new(record.row_number);

    for (field, value) in record.text_values() {
        normalized = normalized.with_value(field, Some(FieldValue::Text(value.clone())));
    }

    let location = record.location.as_ref();
    normalized
        .with_value(
            Field::Storage,
            location.map(|l| FieldValue::Text(l.storage.to_string())),
        )
        .with_value(
            Field::Shelf,
            location.map(|l| FieldValue::Text(l.shelf.to_string())),
        )
        .with_value(
            Field::Position1,
            location.map(|l| FieldValue::Integer(l.position1)),
        )
        .with_value(
            Field::Position2,
            location.map(|l| FieldValue::Integer(l.position2)),
        )
}

/// 展平并排序
///
/// # 错误
/// - 输入为空: ImportError::EmptyBatch
pub fn normalize_and_sort(records: &[ExtractedRecord]) -> ImportResult<Vec<NormalizedRecord>> {
    if records.is_empty() {
        return Err(ImportError::EmptyBatch("没有可处理的数据行".to_string()));
    }

    let mut normalized: Vec<NormalizedRecord> = records.iter().map(flatten).collect();
    sort_records(&mut normalized);
    Ok(normalized)
}

/// 导出过滤: 剔除缺少任一导出必填字段的记录
pub fn filter_for_export(records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    records
        .into_iter()
        .filter(NormalizedRecord::is_export_complete)
        .collect()
}
