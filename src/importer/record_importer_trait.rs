// ==========================================
// 库位报表系统 - 导入层 Trait 定义
// ==========================================
// 职责: 定义导入流水线各阶段接口（不包含实现）
// 流程: 文件解析 → 列结构校验 → 字段抽取 → 标准化排序
// ==========================================

use crate::domain::{ExtractedRecord, ImportBatch, RawRow};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::ParsedSheet;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser / ExcelParser
pub trait FileParser {
    /// 读取文件为按列下标定位的表格
    ///
    /// # 返回
    /// - 表头 + 数据行（已跳过全空行）
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<ParsedSheet>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格文本清洗,所有方法均为全函数（不返回错误）
pub trait DataCleaner {
    /// 去除占位符 "None"（连同两侧空白）
    fn strip_placeholder(&self, value: &str) -> String;

    /// 仅保留数字字符
    fn digits_only(&self, value: &str) -> String;

    /// 提取末尾括号内的文本（已 TRIM）
    fn trailing_group(&self, value: &str) -> Option<String>;

    /// 去掉末尾括号组
    fn strip_trailing_group(&self, value: &str) -> String;
}

// ==========================================
// FieldExtractor Trait
// ==========================================
pub trait FieldExtractor {
    /// 单行字段抽取,任何字段失败都不影响其它字段
    fn extract(&self, row: &RawRow) -> ExtractedRecord;
}

// ==========================================
// RecordImporter Trait
// ==========================================
pub trait RecordImporter {
    /// 处理一个上传文件,返回已排序的导入批次
    ///
    /// # 错误
    /// - 文件不可读 / 格式不支持
    /// - 缺少布局要求的列（整批失败）
    /// - 无数据行（整批失败）
    fn import(&self, file_path: &Path) -> ImportResult<ImportBatch>;
}
