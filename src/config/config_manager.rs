// ==========================================
// 库位报表系统 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照
// 查找顺序: 显式路径 → 环境变量 → 用户配置目录 → 默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::report_config::ReportConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "INVENTORY_REPORT_CONFIG";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ReportConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 加载配置
    ///
    /// # 参数
    /// - path: 显式指定的配置文件（必须存在）
    ///
    /// # 返回
    /// - 未找到任何配置文件时返回默认配置
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(p) = path {
            if !p.exists() {
                return Err(ConfigError::NotFound(p.display().to_string()));
            }
            return Self::from_file(p);
        }

        if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
            let env_path = env_path.trim();
            if !env_path.is_empty() {
                let p = Path::new(env_path);
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                return Self::from_file(p);
            }
        }

        if let Some(p) = Self::default_config_path() {
            if p.exists() {
                return Self::from_file(&p);
            }
        }

        debug!("未找到配置文件,使用默认配置");
        Ok(Self::from_config(ReportConfig::default()))
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: ReportConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;

        info!("已加载配置文件: {}", path.display());
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 从已有配置创建（测试与库调用使用）
    pub fn from_config(config: ReportConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 用户级默认配置路径: <config_dir>/inventory-report/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inventory-report").join("config.json"))
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn into_config(self) -> ReportConfig {
        self.config
    }

    /// 配置来源文件（默认配置时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 配置快照（JSON）,写入日志便于追溯
    pub fn snapshot_json(&self) -> ConfigResult<String> {
        serde_json::to_string(&self.config)
            .map_err(|e| ConfigError::Invalid(format!("配置序列化失败: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::column_layout::SourceColumn;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"column_layout": {{"description": 1, "quantity": 0}}}}"#
        )
        .unwrap();

        let manager = ConfigManager::load(Some(file.path())).unwrap();
        let layout = &manager.config().column_layout;

        assert_eq!(layout.index_of(SourceColumn::Description), Some(1));
        assert_eq!(layout.index_of(SourceColumn::Client), None);
        assert_eq!(manager.source(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = ConfigManager::load(Some(Path::new("no_such_config.json")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ not json").unwrap();

        let result = ConfigManager::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_snapshot_json() {
        let manager = ConfigManager::from_config(ReportConfig::default());
        let snapshot = manager.snapshot_json().unwrap();
        assert!(snapshot.contains("\"description\":6"));
    }
}
