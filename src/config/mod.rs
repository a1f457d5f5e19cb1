// ==========================================
// 库位报表系统 - 配置层
// ==========================================
// 职责: 列布局与导出设置的加载、校验
// 存储: JSON 配置文件（可选）
// ==========================================

pub mod column_layout;
pub mod config_manager;
pub mod error;
pub mod report_config;

// 重导出核心配置类型
pub use column_layout::{column_letter, ColumnLayout, SourceColumn};
pub use config_manager::{ConfigManager, CONFIG_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
pub use report_config::{ExportSettings, ReportConfig};
