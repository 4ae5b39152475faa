// ==========================================
// 钢板质量证明书校验 - 规则表配置错误
// ==========================================
// 工具: thiserror 派生宏
// 性质: 致命错误，中止当前证书的校验，不重试
// ==========================================

use crate::domain::types::{LimitKind, TestDirection};
use thiserror::Error;

/// 规则表配置错误
///
/// 需要 Clone: 进程级共享规则表在 OnceLock 中缓存构建结果（含错误）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    // ===== 查询错误 =====
    #[error("化学成分限值表中找不到钢级 {0}")]
    UnknownGrade(String),

    #[error("力学性能限值表中找不到钢级 {0}")]
    MissingMechanicalLimit(String),

    #[error("钢厂规则表中找不到钢厂 {0}")]
    UnknownPlant(String),

    #[error("钢厂 {plant} 没有钢级 {grade} 交货状态 {delivery_condition} 的细晶元素组合")]
    NoCombination {
        plant: String,
        grade: String,
        delivery_condition: String,
    },

    #[error("钢级 {grade} 没有化学元素 {element} 的限值")]
    MissingElementLimit { grade: String, element: String },

    #[error("厚度 {0} mm 超出预定义范围 0 - 150 mm")]
    ThicknessOutOfRange(f64),

    #[error("钢级 {grade} 在厚度 {thickness} mm、方向 {direction} 下没有冲击功限值")]
    MissingImpactLimit {
        grade: String,
        thickness: f64,
        direction: TestDirection,
    },

    // ===== 构建错误 =====
    #[error("化学元素 {element} 的 {kind} 限值定义不完整: {message}")]
    MalformedLimit {
        element: String,
        kind: LimitKind,
        message: String,
    },

    #[error("钢厂别名 {alias} 指向未注册的钢厂 {plant}")]
    InvalidAlias { alias: String, plant: String },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
