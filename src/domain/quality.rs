// ==========================================
// 库位报表系统 - 数据质量模型
// ==========================================
// 用途: 标记不完整记录（预览保留,导出剔除）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DqLevel - 数据质量级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DqLevel {
    Warning, // 警告（预览保留,导出剔除）
    Info,    // 提示（仅记录）
}

// ==========================================
// DqViolation - 数据质量违规记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DqViolation {
    pub row_number: usize, // 原始文件行号
    pub level: DqLevel,    // 违规级别
    pub field: String,     // 违规字段（导出列名）
    pub message: String,   // 违规描述
}

// ==========================================
// DqSummary - 数据质量汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DqSummary {
    pub total_rows: usize, // 总行数
    pub complete: usize,   // 满足导出要求
    pub incomplete: usize, // 缺少导出必填字段
}

// ==========================================
// DqReport - 数据质量报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DqReport {
    pub summary: DqSummary,           // 汇总统计
    pub violations: Vec<DqViolation>, // 违规明细
}
