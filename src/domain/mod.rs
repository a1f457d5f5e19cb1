// ==========================================
// 库位报表系统 - 领域模型层
// ==========================================
// 职责: 定义库位编码、记录、字段与数据质量模型
// 红线: 不含文件读写逻辑,不含排序逻辑
// ==========================================

pub mod batch;
pub mod field;
pub mod location;
pub mod quality;
pub mod record;

// 重导出核心类型
pub use batch::ImportBatch;
pub use field::Field;
pub use location::LocationCode;
pub use quality::{DqLevel, DqReport, DqSummary, DqViolation};
pub use record::{ExtractedRecord, FieldValue, NormalizedRecord, RawRow};
