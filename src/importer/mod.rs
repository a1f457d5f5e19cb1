// ==========================================
// 库位报表系统 - 导入层
// ==========================================
// 职责: 上传表格 → 原始行 → 字段抽取结果
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_extractor;
pub mod file_parser;
pub mod location_parser;
pub mod record_importer_impl;
pub mod record_importer_trait;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_extractor::{extract_record, FieldExtractor as FieldExtractorImpl, FieldRule, FIELD_RULES};
pub use file_parser::{CsvParser, ExcelParser, ParsedSheet, UniversalFileParser};
pub use location_parser::parse_location;
pub use record_importer_impl::{check_columns, RecordImporterImpl};

// 重导出 Trait 接口
pub use record_importer_trait::{DataCleaner, FieldExtractor, FileParser, RecordImporter};
