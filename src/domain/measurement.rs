// ==========================================
// 钢板质量证明书校验 - 测量值与校验状态
// ==========================================
// 状态机: UNVERIFIED → VERIFIED(passed, message)
// 唯一允许的重入: VERIFIED → VERIFIED（替代限值覆盖）
// ==========================================

use crate::domain::certificate::ChemicalReading;
use crate::domain::types::FieldId;
use serde::{Deserialize, Serialize};

// ==========================================
// VerificationOutcome - 单字段校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub field_id: FieldId,
    pub passed: bool,
    pub message: String,
}

impl VerificationOutcome {
    pub fn new(field_id: FieldId, passed: bool, message: impl Into<String>) -> Self {
        Self {
            field_id,
            passed,
            message: message.into(),
        }
    }
}

/// 可校验: 能给出字段标识与当前校验结果
pub trait Verifiable {
    fn field_id(&self) -> &FieldId;
    fn outcome(&self) -> Option<&VerificationOutcome>;

    fn is_verified(&self) -> bool {
        self.outcome().is_some()
    }
}

/// 可展示: 消息模板中数值的文本形式
pub trait Displayable {
    fn display_value(&self) -> String;
}

impl Displayable for i32 {
    fn display_value(&self) -> String {
        self.to_string()
    }
}

/// 整数值保留一位小数（20.0），其余按最短形式输出（12.5）
impl Displayable for f64 {
    fn display_value(&self) -> String {
        if self.is_finite() && self.fract() == 0.0 {
            format!("{:.1}", self)
        } else {
            self.to_string()
        }
    }
}

impl Displayable for ChemicalReading {
    fn display_value(&self) -> String {
        self.to_string()
    }
}

// ==========================================
// 状态转换错误
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasurementStateError {
    #[error("字段 {0} 已校验，只有替代限值可以覆盖结果")]
    AlreadyVerified(FieldId),

    #[error("字段 {0} 尚未校验，无法应用替代限值")]
    NotYetVerified(FieldId),
}

#[derive(Debug, Clone, PartialEq)]
enum MeasurementState {
    Unverified,
    Verified {
        outcome: VerificationOutcome,
        overridden: bool,
    },
}

// ==========================================
// Measurement<T> - 带校验状态的测量值
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<T> {
    field_id: FieldId,
    value: Option<T>,
    state: MeasurementState,
}

impl<T: Displayable> Measurement<T> {
    /// 创建未校验的测量值
    pub fn new(field_id: FieldId, value: T) -> Self {
        Self {
            field_id,
            value: Some(value),
            state: MeasurementState::Unverified,
        }
    }

    /// 缺失数据占位: 直接处于失败状态，保证报告形态一致
    pub fn missing(field_id: FieldId, message: impl Into<String>) -> Self {
        let outcome = VerificationOutcome::new(field_id.clone(), false, message);
        Self {
            field_id,
            value: None,
            state: MeasurementState::Verified {
                outcome,
                overridden: false,
            },
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// 首次记录校验结果（UNVERIFIED → VERIFIED）
    pub fn record(&mut self, passed: bool, message: String) -> Result<(), MeasurementStateError> {
        if self.is_verified() {
            return Err(MeasurementStateError::AlreadyVerified(self.field_id.clone()));
        }

        self.state = MeasurementState::Verified {
            outcome: VerificationOutcome::new(self.field_id.clone(), passed, message),
            overridden: false,
        };
        Ok(())
    }

    /// 替代限值覆盖（VERIFIED → VERIFIED，仅一次）
    pub fn override_with(
        &mut self,
        passed: bool,
        message: String,
    ) -> Result<(), MeasurementStateError> {
        if !self.is_verified() {
            return Err(MeasurementStateError::NotYetVerified(self.field_id.clone()));
        }
        if self.is_overridden() {
            return Err(MeasurementStateError::AlreadyVerified(self.field_id.clone()));
        }

        self.state = MeasurementState::Verified {
            outcome: VerificationOutcome::new(self.field_id.clone(), passed, message),
            overridden: true,
        };
        Ok(())
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self.state, MeasurementState::Verified { overridden: true, .. })
    }

    pub fn passed(&self) -> bool {
        self.outcome().map(|o| o.passed).unwrap_or(false)
    }

    /// 取出最终校验结果；未校验返回 None
    pub fn into_outcome(self) -> Option<VerificationOutcome> {
        match self.state {
            MeasurementState::Verified { outcome, .. } => Some(outcome),
            MeasurementState::Unverified => None,
        }
    }

    /// 取出最终校验结果；未校验视为状态错误
    pub fn finish(self) -> Result<VerificationOutcome, MeasurementStateError> {
        let field_id = self.field_id.clone();
        self.into_outcome()
            .ok_or(MeasurementStateError::NotYetVerified(field_id))
    }
}

impl<T> Verifiable for Measurement<T> {
    fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    fn outcome(&self) -> Option<&VerificationOutcome> {
        match &self.state {
            MeasurementState::Verified { outcome, .. } => Some(outcome),
            MeasurementState::Unverified => None,
        }
    }
}
