// ==========================================
// 钢板质量证明书校验 - 引擎错误
// ==========================================
// 校验失败不是错误: 记录为失败结果，不中止
// 配置错误 / 输入错误: 中止当前证书，批量中其余证书继续
// ==========================================

use crate::domain::measurement::MeasurementStateError;
use crate::rules::error::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("规则表配置错误: {0}")]
    Configuration(#[from] ConfigError),

    #[error("钢板 {serial_number} 输入数据无效: {reason}")]
    InvalidInput {
        serial_number: String,
        reason: String,
    },

    #[error("测量值状态错误: {0}")]
    MeasurementState(#[from] MeasurementStateError),
}

impl EngineError {
    /// 是否为规则表配置错误（区别于输入数据问题）
    pub fn is_configuration(&self) -> bool {
        matches!(self, EngineError::Configuration(_))
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
