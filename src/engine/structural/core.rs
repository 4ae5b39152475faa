// ==========================================
// 钢板质量证明书校验 - 钢厂细晶元素结构校验
// ==========================================
// 选择规则:
// 1. 组合元素全部出现在化学成分中的候选里，取元素最多者
// 2. 无完全出现的组合时，取元素最少者（最低标准），随后必然在元素校验中失败
// 3. 平手按注册顺序取先者（严格比较）
// ==========================================

use crate::domain::certificate::Composition;
use crate::domain::measurement::{Displayable, Measurement, VerificationOutcome};
use crate::domain::types::FieldId;
use crate::engine::chemical::ChemicalCompositionVerifier;
use crate::engine::error::EngineResult;
use crate::rules::chemical::ChemicalLimitRegistry;
use crate::rules::error::ConfigError;
use crate::rules::limit::Bound;
use crate::rules::plant::{ElementCombination, PlantRuleRegistry};
use tracing::{debug, warn};

/// 从候选组合中选定适用组合；候选为空时返回 None
pub fn select_combination<'c>(
    candidates: &'c [ElementCombination],
    composition: &Composition,
) -> Option<&'c ElementCombination> {
    // 最佳组合: 完全出现且元素最多
    let mut best: Option<&ElementCombination> = None;
    for candidate in candidates.iter().filter(|c| c.is_present_in(composition)) {
        if best.is_none_or(|b| candidate.len() > b.len()) {
            best = Some(candidate);
        }
    }
    if best.is_some() {
        return best;
    }

    // 最低标准: 元素最少
    let mut minimum: Option<&ElementCombination> = None;
    for candidate in candidates {
        if minimum.is_none_or(|m| candidate.len() < m.len()) {
            minimum = Some(candidate);
        }
    }
    minimum
}

// ==========================================
// StructuralRuleResolver - 结构校验器
// ==========================================
pub struct StructuralRuleResolver<'a> {
    plants: &'a PlantRuleRegistry,
    chemical: &'a ChemicalLimitRegistry,
}

impl<'a> StructuralRuleResolver<'a> {
    pub fn new(plants: &'a PlantRuleRegistry, chemical: &'a ChemicalLimitRegistry) -> Self {
        Self { plants, chemical }
    }

    /// 结构校验
    ///
    /// # 返回
    /// - 厚度超限: 仅一条失败的厚度结果，不再校验元素
    /// - 厚度满足: 厚度结果 + 组合内各元素结果（非必检元素同样检查）
    ///
    /// # 错误
    /// - 钢厂未注册、无候选组合、组合元素在钢级限值表中缺失 → 配置错误
    pub fn verify(
        &self,
        plant: &str,
        grade: &str,
        delivery_condition: &str,
        thickness: f64,
        composition: &Composition,
    ) -> EngineResult<Vec<VerificationOutcome>> {
        let candidates = self.plants.combinations(plant, grade, delivery_condition)?;
        let combination = select_combination(candidates, composition).ok_or_else(|| {
            ConfigError::NoCombination {
                plant: plant.to_string(),
                grade: grade.to_string(),
                delivery_condition: delivery_condition.to_string(),
            }
        })?;

        debug!(
            plant = %plant,
            grade = %grade,
            delivery_condition = %delivery_condition,
            combination = %combination.label(),
            max_thickness = combination.max_thickness(),
            "选定细晶元素组合"
        );

        let thickness_outcome = check_thickness(thickness, combination)?;
        let thickness_passed = thickness_outcome.passed;
        let mut outcomes = vec![thickness_outcome];

        if !thickness_passed {
            warn!(
                plant = %plant,
                grade = %grade,
                combination = %combination.label(),
                "厚度超出细晶元素组合允许范围，跳过元素校验"
            );
            return Ok(outcomes);
        }

        let limit_set = self.chemical.locate_many(grade, combination.elements())?;
        let verifier = ChemicalCompositionVerifier::new(self.chemical);
        outcomes.extend(verifier.verify(
            grade,
            thickness,
            composition,
            Some(limit_set.as_slice()),
            false,
        )?);

        Ok(outcomes)
    }
}

fn check_thickness(
    thickness: f64,
    combination: &ElementCombination,
) -> EngineResult<VerificationOutcome> {
    let bound = Bound::Maximum {
        maximum: combination.max_thickness(),
    };
    let mut measurement = Measurement::new(FieldId::Thickness, thickness);
    let (passed, message) =
        bound.evaluate(&FieldId::Thickness, &thickness.display_value(), thickness, "mm");
    measurement.record(passed, message)?;

    Ok(measurement.finish()?)
}
