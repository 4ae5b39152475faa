// ==========================================
// 钢板质量证明书校验 - 限值定义
// ==========================================
// 消息模板（下游按此解析，措辞不可随意修改）:
//   "[PASS|FAIL] <field> value is <value>, meets|violates <constraint>."
// ==========================================

use crate::domain::certificate::ChemicalReading;
use crate::domain::types::{FieldId, LimitKind};
use crate::rules::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

// ==========================================
// Bound<T> - 数值约束
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bound<T> {
    Maximum { maximum: T },
    Minimum { minimum: T },
    Range { minimum: T, maximum: T },
    Unique { value: T },
}

impl<T> Bound<T>
where
    T: PartialOrd + Copy + Display,
{
    pub fn kind(&self) -> LimitKind {
        match self {
            Bound::Maximum { .. } => LimitKind::Maximum,
            Bound::Minimum { .. } => LimitKind::Minimum,
            Bound::Range { .. } => LimitKind::Range,
            Bound::Unique { .. } => LimitKind::Unique,
        }
    }

    /// 数值是否满足约束（边界值视为满足）
    pub fn admits(&self, value: T) -> bool {
        match *self {
            Bound::Maximum { maximum } => value <= maximum,
            Bound::Minimum { minimum } => value >= minimum,
            Bound::Range { minimum, maximum } => minimum <= value && value <= maximum,
            Bound::Unique { value: expected } => value == expected,
        }
    }

    /// 约束描述，如 "the valid range [0.9, 1.6]" / "the valid range 440 - 570 MPa" /
    /// "the minimum limit 315 MPa"
    ///
    /// 带单位的区间以 "A - B" 书写，无单位（化学成分）以 "[A, B]" 书写。
    pub fn describe(&self, unit: &str) -> String {
        let suffix = if unit.is_empty() {
            String::new()
        } else {
            format!(" {}", unit)
        };

        match self {
            Bound::Maximum { maximum } => format!("the maximum limit {}{}", maximum, suffix),
            Bound::Minimum { minimum } => format!("the minimum limit {}{}", minimum, suffix),
            Bound::Range { minimum, maximum } if unit.is_empty() => {
                format!("the valid range [{}, {}]", minimum, maximum)
            }
            Bound::Range { minimum, maximum } => {
                format!("the valid range {} - {}{}", minimum, maximum, suffix)
            }
            Bound::Unique { value } => format!("the valid value {}{}", value, suffix),
        }
    }

    /// 校验并生成模板消息
    ///
    /// # 参数
    /// - `field`: 字段标识（决定消息中的字段名称）
    /// - `shown`: 消息中展示的数值文本（化学成分保留读数精度）
    /// - `value`: 参与比较的数值
    /// - `unit`: 单位，化学成分为空串
    pub fn evaluate(&self, field: &FieldId, shown: &str, value: T, unit: &str) -> (bool, String) {
        let passed = self.admits(value);
        let message = format!(
            "[{}] {} value is {}, {} {}.",
            if passed { "PASS" } else { "FAIL" },
            field.label(),
            shown,
            if passed { "meets" } else { "violates" },
            self.describe(unit)
        );
        (passed, message)
    }
}

// ==========================================
// LimitDefinition - 化学成分限值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitDefinition {
    element: String,
    bound: Bound<f64>,
    mandatory: bool,
}

impl LimitDefinition {
    /// 按限值类型构造，并做构建期自检
    ///
    /// # 规则
    /// - MAXIMUM / RANGE 必须给出 maximum
    /// - MINIMUM / RANGE 必须给出 minimum
    /// - UNIQUE 必须给出 unique_value
    /// - 边界值必须为有限数；RANGE 要求 minimum <= maximum
    pub fn new(
        element: &str,
        kind: LimitKind,
        minimum: Option<f64>,
        maximum: Option<f64>,
        unique_value: Option<f64>,
        mandatory: bool,
    ) -> ConfigResult<Self> {
        let malformed = |message: &str| ConfigError::MalformedLimit {
            element: element.to_string(),
            kind,
            message: message.to_string(),
        };

        let require = |value: Option<f64>, name: &str| -> ConfigResult<f64> {
            match value {
                Some(v) if v.is_finite() => Ok(v),
                Some(v) => Err(malformed(&format!("{} 不是有限数: {}", name, v))),
                None => Err(malformed(&format!("缺少 {}", name))),
            }
        };

        let bound = match kind {
            LimitKind::Maximum => Bound::Maximum {
                maximum: require(maximum, "maximum")?,
            },
            LimitKind::Minimum => Bound::Minimum {
                minimum: require(minimum, "minimum")?,
            },
            LimitKind::Range => {
                let minimum = require(minimum, "minimum")?;
                let maximum = require(maximum, "maximum")?;
                if minimum > maximum {
                    return Err(malformed(&format!(
                        "minimum {} 大于 maximum {}",
                        minimum, maximum
                    )));
                }
                Bound::Range { minimum, maximum }
            }
            LimitKind::Unique => Bound::Unique {
                value: require(unique_value, "unique_value")?,
            },
        };

        Ok(Self {
            element: element.to_string(),
            bound,
            mandatory,
        })
    }

    pub fn maximum(element: &str, maximum: f64) -> ConfigResult<Self> {
        Self::new(element, LimitKind::Maximum, None, Some(maximum), None, true)
    }

    pub fn minimum(element: &str, minimum: f64) -> ConfigResult<Self> {
        Self::new(element, LimitKind::Minimum, Some(minimum), None, None, true)
    }

    pub fn range(element: &str, minimum: f64, maximum: f64) -> ConfigResult<Self> {
        Self::new(element, LimitKind::Range, Some(minimum), Some(maximum), None, true)
    }

    /// 标记为非必检
    pub fn optional(mut self) -> Self {
        self.mandatory = false;
        self
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn kind(&self) -> LimitKind {
        self.bound.kind()
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// 以计算值校验化学成分读数
    pub fn verify(&self, reading: &ChemicalReading) -> (bool, String) {
        let field = FieldId::ChemicalElement(self.element.clone());
        self.bound.evaluate(
            &field,
            &reading.to_string(),
            reading.calculated_value(),
            "",
        )
    }
}
