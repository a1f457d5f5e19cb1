// ==========================================
// 库位报表系统 - API 层
// ==========================================
// 职责: 提供预览与导出接口,供命令行调用
// ==========================================

pub mod error;
pub mod report_api;

// 重导出核心类型
pub use error::{map_api_error, ApiError, ApiResult, ErrorResponse};
pub use report_api::{
    parse_export_payload, ExportRequest, ExportResponse, PreviewResponse, ReportApi,
};
