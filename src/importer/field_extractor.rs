// ==========================================
// 库位报表系统 - 字段抽取器实现
// ==========================================
// 职责: 源列 → 逻辑字段（规则表驱动）
// 红线: 单字段失败按缺失处理,不阻断同行其它字段
// ==========================================

use crate::config::{ColumnLayout, SourceColumn};
use crate::domain::{ExtractedRecord, Field, RawRow};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::location_parser::parse_location;
use crate::importer::record_importer_trait::{
    DataCleaner as DataCleanerTrait, FieldExtractor as FieldExtractorTrait,
};
use tracing::debug;

// ==========================================
// FieldRule - 字段抽取规则
// ==========================================
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: Field,                        // 目标字段
    pub source: SourceColumn,                // 源列
    pub extract: fn(&str) -> Option<String>, // 抽取函数（输入为非空单元格）
}

/// 字段抽取规则表
///
/// 库位（Location）由 Original_Location 派生,不在表中
pub const FIELD_RULES: [FieldRule; 8] = [
    FieldRule {
        field: Field::OriginalLocation,
        source: SourceColumn::Description,
        extract: extract_location_text,
    },
    FieldRule {
        field: Field::Name,
        source: SourceColumn::Description,
        extract: extract_name,
    },
    FieldRule {
        field: Field::SerialNumber,
        source: SourceColumn::SerialNumber,
        extract: extract_plain,
    },
    FieldRule {
        field: Field::Quantity,
        source: SourceColumn::Quantity,
        extract: extract_quantity,
    },
    FieldRule {
        field: Field::Customer,
        source: SourceColumn::Customer,
        extract: extract_plain,
    },
    FieldRule {
        field: Field::Client,
        source: SourceColumn::Client,
        extract: extract_plain,
    },
    FieldRule {
        field: Field::PricePerUnit,
        source: SourceColumn::PricePerUnit,
        extract: extract_plain,
    },
    FieldRule {
        field: Field::Total,
        source: SourceColumn::Total,
        extract: extract_plain,
    },
];

/// 描述列末尾括号内的库位文本
pub fn extract_location_text(text: &str) -> Option<String> {
    DataCleaner.trailing_group(text)
}

/// 品名: 去掉末尾括号组与占位符,结果为空视为缺失
pub fn extract_name(text: &str) -> Option<String> {
    let cleaner = DataCleaner;
    let name = cleaner.strip_trailing_group(text.trim());
    let name = cleaner.strip_placeholder(&name);
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// 普通文本字段: 去掉占位符（结果为空字符串时仍视为存在）
pub fn extract_plain(text: &str) -> Option<String> {
    Some(DataCleaner.strip_placeholder(text))
}

/// 数量: 仅保留数字（保留前导零）,无数字视为缺失
pub fn extract_quantity(text: &str) -> Option<String> {
    let digits = DataCleaner.digits_only(text);
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

// ==========================================
// FieldExtractor 实现
// ==========================================
pub struct FieldExtractor<'a> {
    layout: &'a ColumnLayout,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(layout: &'a ColumnLayout) -> Self {
        Self { layout }
    }
}

impl FieldExtractorTrait for FieldExtractor<'_> {
    fn extract(&self, row: &RawRow) -> ExtractedRecord {
        let mut record = ExtractedRecord::new(row.row_number);

        for rule in FIELD_RULES.iter() {
            let cell = self
                .layout
                .index_of(rule.source)
                .and_then(|index| row.cell(index));

            let value = cell.and_then(rule.extract);
            if let (Some(cell), None) = (cell, &value) {
                debug!(
                    "行 {} 字段 {} 无法抽取,按缺失处理: {:?}",
                    row.row_number,
                    rule.field,
                    cell
                );
            }
            record = record.with_value(rule.field, value);
        }

        let location = parse_location(record.original_location());
        if let (Some(text), None) = (record.original_location(), &location) {
            debug!(
                "行 {} 库位编码无法解析,按缺失处理: {:?}",
                row.row_number,
                text
            );
        }
        record.with_location(location)
    }
}

/// 单行抽取（按给定列布局）
pub fn extract_record(row: &RawRow, layout: &ColumnLayout) -> ExtractedRecord {
    FieldExtractor::new(layout).extract(row)
}
