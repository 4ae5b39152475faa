// ==========================================
// 钢板质量证明书校验 - 力学性能限值表
// ==========================================
// 结构: 钢级 → {屈服下限, 抗拉区间, 延伸率下限, 试验温度, 冲击功表}
// 冲击功表: 厚度档 × 试验方向 → 最小冲击功 (J)
// 厚度档固定且不重叠: [0,50], (50,70], (70,150]
// ==========================================

use crate::domain::types::TestDirection;
use crate::rules::error::{ConfigError, ConfigResult};
use crate::rules::limit::Bound;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// ThicknessBand - 冲击功厚度档
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThicknessBand {
    UpTo50,      // [0, 50]
    Over50To70,  // (50, 70]
    Over70To150, // (70, 150]
}

impl ThicknessBand {
    pub const ALL: [ThicknessBand; 3] = [
        ThicknessBand::UpTo50,
        ThicknessBand::Over50To70,
        ThicknessBand::Over70To150,
    ];

    /// 按厚度定位厚度档；超出 [0, 150] 或非数值为配置错误
    pub fn for_thickness(thickness: f64) -> ConfigResult<Self> {
        if (0.0..=50.0).contains(&thickness) {
            Ok(ThicknessBand::UpTo50)
        } else if thickness > 50.0 && thickness <= 70.0 {
            Ok(ThicknessBand::Over50To70)
        } else if thickness > 70.0 && thickness <= 150.0 {
            Ok(ThicknessBand::Over70To150)
        } else {
            Err(ConfigError::ThicknessOutOfRange(thickness))
        }
    }
}

impl fmt::Display for ThicknessBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThicknessBand::UpTo50 => write!(f, "[0, 50]"),
            ThicknessBand::Over50To70 => write!(f, "(50, 70]"),
            ThicknessBand::Over70To150 => write!(f, "(70, 150]"),
        }
    }
}

// ==========================================
// ImpactEnergyTable - 冲击功限值表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactEnergyTable {
    minimums: HashMap<(ThicknessBand, TestDirection), i32>,
}

impl ImpactEnergyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以 (纵向, 横向) 成对设置某厚度档的最小冲击功
    pub fn with_band(mut self, band: ThicknessBand, longitudinal: i32, transverse: i32) -> Self {
        self.set(band, TestDirection::Longitudinal, longitudinal);
        self.set(band, TestDirection::Transverse, transverse);
        self
    }

    pub fn set(&mut self, band: ThicknessBand, direction: TestDirection, minimum: i32) {
        self.minimums.insert((band, direction), minimum);
    }

    pub fn minimum(&self, band: ThicknessBand, direction: TestDirection) -> Option<i32> {
        self.minimums.get(&(band, direction)).copied()
    }
}

// ==========================================
// MechanicalLimitBundle - 单钢级力学性能限值
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct MechanicalLimitBundle {
    pub grade: String,
    pub yield_strength: Bound<i32>,   // MPa
    pub tensile_strength: Bound<i32>, // MPa
    pub elongation: Bound<i32>,       // %
    pub temperature: Bound<i32>,      // ℃
    pub impact_energy: ImpactEnergyTable,
}

impl MechanicalLimitBundle {
    pub fn new(
        grade: &str,
        yield_minimum: i32,
        tensile_range: (i32, i32),
        elongation_minimum: i32,
        temperature: i32,
        impact_energy: ImpactEnergyTable,
    ) -> Self {
        Self {
            grade: grade.to_string(),
            yield_strength: Bound::Minimum {
                minimum: yield_minimum,
            },
            tensile_strength: Bound::Range {
                minimum: tensile_range.0,
                maximum: tensile_range.1,
            },
            elongation: Bound::Minimum {
                minimum: elongation_minimum,
            },
            temperature: Bound::Unique { value: temperature },
            impact_energy,
        }
    }

    /// 按厚度档 × 方向选定唯一的冲击功下限
    pub fn impact_energy_limit(
        &self,
        thickness: f64,
        direction: TestDirection,
    ) -> ConfigResult<Bound<i32>> {
        let band = ThicknessBand::for_thickness(thickness)?;
        self.impact_energy
            .minimum(band, direction)
            .map(|minimum| Bound::Minimum { minimum })
            .ok_or_else(|| ConfigError::MissingImpactLimit {
                grade: self.grade.clone(),
                thickness,
                direction,
            })
    }
}

// ==========================================
// MechanicalLimitRegistry - 力学性能限值表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MechanicalLimitRegistry {
    bundles: HashMap<String, MechanicalLimitBundle>,
}

impl MechanicalLimitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册（同一钢级重复注册时后注册者生效）
    pub fn register(&mut self, bundle: MechanicalLimitBundle) {
        self.bundles.insert(bundle.grade.clone(), bundle);
    }

    pub fn bundle(&self, grade: &str) -> ConfigResult<&MechanicalLimitBundle> {
        self.bundles
            .get(grade)
            .ok_or_else(|| ConfigError::MissingMechanicalLimit(grade.to_string()))
    }

    pub fn contains_grade(&self, grade: &str) -> bool {
        self.bundles.contains_key(grade)
    }
}
