// ==========================================
// 库位报表系统 - 核心库
// ==========================================
// 输入: Excel / CSV 库存表（按列位置读取）
// 输出: 排序后的库位记录预览、Excel 与 PDF 报表
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 库位编码、记录与数据质量模型
pub mod domain;

// 配置层 - 列布局与导出设置
pub mod config;

// 导入层 - 文件解析与字段抽取
pub mod importer;

// 引擎层 - 展平、排序、完整性校验
pub mod engine;

// 导出层 - Excel / PDF
pub mod export;

// API 层 - 预览与导出接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    DqLevel, DqReport, DqSummary, DqViolation, ExtractedRecord, Field, FieldValue, ImportBatch,
    LocationCode, NormalizedRecord, RawRow,
};

// 配置
pub use config::{ColumnLayout, ConfigManager, ReportConfig, SourceColumn};

// 导入
pub use importer::{extract_record, parse_location, ImportError, RecordImporter, RecordImporterImpl};

// 引擎
pub use engine::{extract_and_normalize, prepare_export, sort_records, CompletenessValidator};

// 导出
pub use export::{PdfExporter, XlsxExporter};

// API
pub use api::{ApiError, ExportRequest, ExportResponse, PreviewResponse, ReportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库位报表系统";
