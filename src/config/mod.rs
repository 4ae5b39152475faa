// ==========================================
// 钢板质量证明书校验 - 配置层
// ==========================================
// 职责: 运行配置（钢厂别名、并行、日志、未知元素策略）
// 存储: JSON 文件，缺省字段取默认值
// ==========================================

pub mod error;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{AuditSettings, UnknownElementPolicy};
