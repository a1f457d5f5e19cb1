// ==========================================
// 库位报表系统 - 导入批次
// ==========================================
// 用途: 单次上传的处理结果,不落库,随请求结束而释放
// ==========================================

use crate::domain::quality::DqReport;
use crate::domain::record::NormalizedRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ==========================================
// ImportBatch - 导入批次
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ImportBatch {
    pub batch_id: String,                 // 批次 ID（UUID,仅用于日志追踪）
    pub file_name: Option<String>,        // 源文件名
    pub total_rows: usize,                // 数据行数（不含空行）
    pub imported_at: DateTime<Utc>,       // 处理时间
    pub elapsed_ms: u128,                 // 处理耗时（毫秒）
    pub records: Vec<NormalizedRecord>,   // 已排序记录（未过滤）
    pub dq_report: DqReport,              // 完整性报告
}
