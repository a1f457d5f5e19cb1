// ==========================================
// 库位报表系统 - 报表配置
// ==========================================
// 存储: JSON 文件,缺省项使用默认值
// ==========================================

use crate::config::column_layout::{ColumnLayout, SourceColumn};
use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

// ==========================================
// ReportConfig - 报表配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub column_layout: ColumnLayout, // 源表格列布局
    pub export: ExportSettings,      // 导出设置
}

impl ReportConfig {
    /// 校验配置
    ///
    /// 描述列是库位与品名的唯一来源,不允许缺失
    pub fn validate(&self) -> ConfigResult<()> {
        if self.column_layout.index_of(SourceColumn::Description).is_none() {
            return Err(ConfigError::Invalid(
                "column_layout 缺少 description 列".to_string(),
            ));
        }
        if self.export.sheet_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export.sheet_name 不能为空".to_string()));
        }
        // Excel 工作表名称上限 31 个字符
        if self.export.sheet_name.chars().count() > 31 {
            return Err(ConfigError::Invalid(format!(
                "export.sheet_name 超过 31 个字符: {}",
                self.export.sheet_name
            )));
        }
        Ok(())
    }
}

// ==========================================
// ExportSettings - 导出设置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub report_title: String,  // PDF 标题
    pub sheet_name: String,    // Excel 工作表名
    pub xlsx_filename: String, // 默认 Excel 文件名
    pub pdf_filename: String,  // 默认 PDF 文件名
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            report_title: "Inventory Location Report".to_string(),
            sheet_name: "Locations".to_string(),
            xlsx_filename: "formatted_locations.xlsx".to_string(),
            pdf_filename: "formatted_locations.pdf".to_string(),
        }
    }
}
