// ==========================================
// 钢板质量证明书校验 - 领域类型定义
// ==========================================
// 依据: 船级社高强度船体结构钢规范 Table 9 (化学成分) / 力学性能表
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 限值类型 (Limit Kind)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LimitKind {
    Maximum, // 上限
    Minimum, // 下限
    Range,   // 区间 [min, max]
    Unique,  // 唯一值
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Maximum => write!(f, "MAXIMUM"),
            LimitKind::Minimum => write!(f, "MINIMUM"),
            LimitKind::Range => write!(f, "RANGE"),
            LimitKind::Unique => write!(f, "UNIQUE"),
        }
    }
}

// ==========================================
// 冲击试验方向 (Test Direction)
// ==========================================
// 证书位置方向代码: C=横向, L=纵向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestDirection {
    Transverse,   // 横向
    Longitudinal, // 纵向
}

impl TestDirection {
    /// 从证书上的位置方向代码解析试验方向
    ///
    /// # 规则
    /// - 仅含 `C` → Transverse
    /// - 仅含 `L` → Longitudinal
    /// - 同时含 `C` 与 `L`，或两者都不含（含空串）→ Err(原因)
    pub fn from_position_code(code: &str) -> Result<Self, String> {
        let has_c = code.contains('C');
        let has_l = code.contains('L');

        match (has_c, has_l) {
            (true, false) => Ok(TestDirection::Transverse),
            (false, true) => Ok(TestDirection::Longitudinal),
            (true, true) => Err(format!(
                "位置方向代码 '{}' 同时包含 C (横向) 与 L (纵向)",
                code
            )),
            (false, false) => Err(format!(
                "位置方向代码 '{}' 既不包含 C (横向) 也不包含 L (纵向)",
                code
            )),
        }
    }
}

impl fmt::Display for TestDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestDirection::Transverse => write!(f, "TRANSVERSE"),
            TestDirection::Longitudinal => write!(f, "LONGITUDINAL"),
        }
    }
}

// ==========================================
// 校验阶段 (Check Stage)
// ==========================================
// 单块钢板按固定顺序执行三个阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStage {
    MandatoryChemical, // 必检化学成分
    Structural,        // 钢厂细晶元素组合
    Mechanical,        // 力学性能
}

impl fmt::Display for CheckStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStage::MandatoryChemical => write!(f, "MANDATORY_CHEMICAL"),
            CheckStage::Structural => write!(f, "STRUCTURAL"),
            CheckStage::Mechanical => write!(f, "MECHANICAL"),
        }
    }
}

// ==========================================
// 字段标识 (Field Id)
// ==========================================
// 报告中每条校验结果对应的字段
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "key")]
pub enum FieldId {
    ChemicalElement(String),
    Thickness,
    YieldStrength,
    TensileStrength,
    Elongation,
    Temperature,
    /// 冲击功读数，按证书顺序编号
    ImpactEnergy(usize),
}

impl FieldId {
    /// 消息模板中使用的字段名称
    pub fn label(&self) -> String {
        match self {
            FieldId::ChemicalElement(element) => format!("Chemical element {}", element),
            FieldId::Thickness => "Thickness".to_string(),
            FieldId::YieldStrength => "Yield Strength".to_string(),
            FieldId::TensileStrength => "Tensile Strength".to_string(),
            FieldId::Elongation => "Elongation".to_string(),
            FieldId::Temperature => "Temperature".to_string(),
            FieldId::ImpactEnergy(_) => "Impact Energy".to_string(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::ChemicalElement(element) => write!(f, "chemical.{}", element),
            FieldId::Thickness => write!(f, "thickness"),
            FieldId::YieldStrength => write!(f, "yield_strength"),
            FieldId::TensileStrength => write!(f, "tensile_strength"),
            FieldId::Elongation => write!(f, "elongation"),
            FieldId::Temperature => write!(f, "temperature"),
            FieldId::ImpactEnergy(index) => write!(f, "impact_energy[{}]", index),
        }
    }
}

// ==========================================
// 已知化学元素目录
// ==========================================
// 证书化学成分表中可能出现的元素（含碳当量 Ceq、酸溶铝 Als、全铝 Alt）
pub const KNOWN_CHEMICAL_ELEMENTS: [&str; 17] = [
    "C", "Si", "Mn", "P", "S", "Cr", "Mo", "Ni", "Cu", "Al", "Nb", "V", "Ti", "N", "Ceq", "Als",
    "Alt",
];

/// 是否为已知化学元素
pub fn is_known_element(element: &str) -> bool {
    KNOWN_CHEMICAL_ELEMENTS.contains(&element)
}
