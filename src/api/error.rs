// ==========================================
// 库位报表系统 - API层错误类型
// ==========================================
// 职责: 汇总导入/导出/配置错误,统一转换为带错误代码的响应
// ==========================================

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::importer::ImportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}")]
    UnsupportedFormat(String),

    // ==========================================
    // 结构错误（整批失败）
    // ==========================================
    #[error("缺少必需列 (表格共 {sheet_width} 列): {}", .missing.join(", "))]
    MissingColumns {
        sheet_width: usize,
        missing: Vec<String>,
    },

    #[error("记录集为空: {0}")]
    EmptyBatch(String),

    // ==========================================
    // 处理错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ImportError 转换
// 结构错误保留字段,其余归入 IMPORT_ERROR
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(path) => ApiError::FileNotFound(path),
            ImportError::UnsupportedFormat(ext) => ApiError::UnsupportedFormat(ext),
            ImportError::MissingColumns {
                sheet_width,
                missing,
            } => ApiError::MissingColumns {
                sheet_width,
                missing,
            },
            ImportError::EmptyBatch(msg) => ApiError::EmptyBatch(msg),
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            ImportError::Other(e) => ApiError::Other(e),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 错误响应
// ==========================================

/// 错误响应（命令行以 JSON 输出到 stderr）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// 错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::FileNotFound(_) => "FILE_NOT_FOUND",
            ApiError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ApiError::MissingColumns { .. } => "MISSING_COLUMNS",
            ApiError::EmptyBatch(_) => "EMPTY_BATCH",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::InternalError(_) | ApiError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

/// 将 ApiError 转换为错误响应
pub fn map_api_error(err: &ApiError) -> ErrorResponse {
    ErrorResponse {
        code: err.code().to_string(),
        message: err.to_string(),
        details: match err {
            ApiError::MissingColumns {
                sheet_width,
                missing,
            } => Some(serde_json::json!({
                "sheet_width": sheet_width,
                "missing_columns": missing,
            })),
            _ => None,
        },
    }
}
