// ==========================================
// 库位报表系统 - 配置错误类型
// ==========================================

use thiserror::Error;

/// 配置模块错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    NotFound(String),

    #[error("配置文件读取失败 ({path}): {message}")]
    Read { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    Parse { path: String, message: String },

    #[error("配置值无效: {0}")]
    Invalid(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
