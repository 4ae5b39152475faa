use crate::config::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 证书中出现规则表未收录的化学元素时的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownElementPolicy {
    /// 记录 warn 日志
    #[default]
    Warn,
    /// 忽略
    Ignore,
}

/// 校验运行配置（JSON 文件，全部字段可省略）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSettings {
    /// 钢厂别名 → 规则表中的钢厂名称
    #[serde(default)]
    pub plant_aliases: BTreeMap<String, String>,

    /// 批量校验时是否多线程并行
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// 日志过滤器（覆盖 RUST_LOG 默认值），如 "mill_cert_audit=debug"
    #[serde(default)]
    pub log_filter: Option<String>,

    #[serde(default)]
    pub unknown_element_policy: UnknownElementPolicy,
}

fn default_parallel() -> bool {
    true
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            plant_aliases: BTreeMap::new(),
            parallel: default_parallel(),
            log_filter: None,
            unknown_element_policy: UnknownElementPolicy::default(),
        }
    }
}

impl AuditSettings {
    /// 从 JSON 文本解析并校验
    pub fn from_json(text: &str) -> SettingsResult<Self> {
        let settings: AuditSettings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// 别名与目标钢厂名不能为空
    pub fn validate(&self) -> SettingsResult<()> {
        for (alias, plant) in &self.plant_aliases {
            if alias.trim().is_empty() || plant.trim().is_empty() {
                return Err(SettingsError::Invalid(format!(
                    "钢厂别名不能为空: \"{}\" → \"{}\"",
                    alias, plant
                )));
            }
        }
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(SettingsError::Invalid("log_filter 不能为空串".to_string()));
            }
        }
        Ok(())
    }
}
