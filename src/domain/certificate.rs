// ==========================================
// 钢板质量证明书校验 - 证书输入模型
// ==========================================
// 职责: 上游抽取环节交付的结构化证书数据
// 红线: 校验引擎只读不写，不回写任何校验结果
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ==========================================
// ChemicalReading - 化学成分读数
// ==========================================
// 原始整数 + 定点精度: raw=120, precision=2 → 1.20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalReading {
    pub raw_value: i64,
    pub precision: u32,
}

impl ChemicalReading {
    /// f64 能精确往返的最大小数位数
    pub const MAX_PRECISION: u32 = 15;

    pub fn new(raw_value: i64, precision: u32) -> Self {
        Self {
            raw_value,
            precision,
        }
    }

    /// 计算值 = round(raw × 10^-precision, precision)
    ///
    /// 使用除法而非乘以 10^-precision，保证 90/100 与字面量 0.90 位级一致
    pub fn calculated_value(&self) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        let value = self.raw_value as f64 / scale;
        ((value * scale).round()) / scale
    }

    /// 精度超出 MAX_PRECISION 的读数无法换算为有效计算值
    pub fn has_valid_precision(&self) -> bool {
        self.precision <= Self::MAX_PRECISION
    }
}

impl fmt::Display for ChemicalReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$}",
            self.calculated_value(),
            prec = self.precision as usize
        )
    }
}

/// 化学成分: 元素 → 读数（按元素名排序，保证报告稳定）
pub type Composition = BTreeMap<String, ChemicalReading>;

// ==========================================
// Plate - 单块钢板（按炉批号/钢板号）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub serial_number: String,
    #[serde(default)]
    pub composition: Composition,
    pub delivery_condition: String,
    pub yield_strength: i32,   // MPa
    pub tensile_strength: i32, // MPa
    pub elongation: i32,       // %
    pub position_direction_code: String,
    pub temperature: i32, // ℃
    #[serde(default)]
    pub impact_energy_readings: Vec<i32>, // J
}

// ==========================================
// Certificate - 质量证明书
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub steel_plant: String,
    pub grade: String,
    pub thickness: f64, // mm
    #[serde(default)]
    pub plates: Vec<Plate>,
}
