// ==========================================
// 钢板质量证明书校验 - 化学成分校验器
// ==========================================
// 输入: 钢级 + 厚度 + 化学成分 + 可选受限限值集
// 输出: 每个被检元素一条结果（按限值注册顺序）
// 替代限值: 常规校验失败后查询，首个命中者覆盖结果
// 缺失元素: 只要该限值被检查，缺失即失败（不区分必检/非必检）
// ==========================================

use crate::domain::certificate::{ChemicalReading, Composition};
use crate::domain::measurement::{Measurement, Verifiable, VerificationOutcome};
use crate::domain::types::FieldId;
use crate::engine::error::EngineResult;
use crate::rules::chemical::ChemicalLimitRegistry;
use crate::rules::limit::LimitDefinition;
use tracing::{debug, warn};

pub struct ChemicalCompositionVerifier<'a> {
    registry: &'a ChemicalLimitRegistry,
}

impl<'a> ChemicalCompositionVerifier<'a> {
    pub fn new(registry: &'a ChemicalLimitRegistry) -> Self {
        Self { registry }
    }

    /// 校验化学成分
    ///
    /// # 参数
    /// - `limit_set`: 为 None 时按钢级取全部限值；结构校验传入组合元素的受限限值集
    /// - `mandatory_only`: 为 true 时跳过非必检限值（不产生结果）
    ///
    /// # 错误
    /// - 钢级不在限值表中 → 配置错误
    pub fn verify(
        &self,
        grade: &str,
        thickness: f64,
        composition: &Composition,
        limit_set: Option<&[LimitDefinition]>,
        mandatory_only: bool,
    ) -> EngineResult<Vec<VerificationOutcome>> {
        let limits = match limit_set {
            Some(limits) => limits,
            None => self.registry.limits_for(grade)?,
        };

        let mut outcomes = Vec::with_capacity(limits.len());
        for limit in limits {
            if mandatory_only && !limit.is_mandatory() {
                continue;
            }

            let measurement = match composition.get(limit.element()) {
                Some(reading) => self.check_present(grade, thickness, composition, limit, reading)?,
                None => missing_element(limit.element()),
            };

            if let Some(outcome) = measurement.outcome() {
                if outcome.passed {
                    debug!(grade = %grade, field = %outcome.field_id, "{}", outcome.message);
                } else {
                    warn!(grade = %grade, field = %outcome.field_id, "{}", outcome.message);
                }
            }
            outcomes.extend(measurement.into_outcome());
        }

        Ok(outcomes)
    }

    /// 全部结果为通过
    pub fn passes(outcomes: &[VerificationOutcome]) -> bool {
        outcomes.iter().all(|o| o.passed)
    }

    fn check_present(
        &self,
        grade: &str,
        thickness: f64,
        composition: &Composition,
        limit: &LimitDefinition,
        reading: &ChemicalReading,
    ) -> EngineResult<Measurement<ChemicalReading>> {
        let mut measurement =
            Measurement::new(FieldId::ChemicalElement(limit.element().to_string()), *reading);

        let (passed, message) = limit.verify(reading);
        measurement.record(passed, message)?;

        if !passed {
            if let Some(alternative) =
                self.registry
                    .find_alternative(grade, limit.element(), thickness, composition)
            {
                let (passed, message) = alternative.verify(reading);
                debug!(
                    grade = %grade,
                    element = %limit.element(),
                    passed = passed,
                    "常规限值未通过，按替代限值重新校验"
                );
                measurement.override_with(passed, message)?;
            }
        }

        Ok(measurement)
    }
}

fn missing_element(element: &str) -> Measurement<ChemicalReading> {
    Measurement::missing(
        FieldId::ChemicalElement(element.to_string()),
        format!(
            "[FAIL] Chemical element {} is required to be checked, but is not present in the certificate.",
            element
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::EngineError;
    use crate::rules::chemical::{AlternativeCondition, AlternativeLimitRule};
    use crate::rules::error::ConfigError;

    fn registry() -> ChemicalLimitRegistry {
        let mut registry = ChemicalLimitRegistry::new();
        registry.register(&["G1"], LimitDefinition::maximum("C", 0.18).unwrap());
        registry.register(&["G1"], LimitDefinition::range("Mn", 0.90, 1.60).unwrap());
        registry.register(&["G1"], LimitDefinition::minimum("Al", 0.020).unwrap().optional());
        registry.register_alternative(AlternativeLimitRule::new(
            &["G1"],
            AlternativeCondition::ThicknessAtMost { thickness: 12.5 },
            LimitDefinition::range("Mn", 0.70, 1.60).unwrap(),
        ));
        registry
    }

    fn composition(items: &[(&str, i64, u32)]) -> Composition {
        items
            .iter()
            .map(|(el, raw, p)| (el.to_string(), ChemicalReading::new(*raw, *p)))
            .collect()
    }

    #[test]
    fn test_mandatory_only_skips_optional() {
        let registry = registry();
        let verifier = ChemicalCompositionVerifier::new(&registry);
        let comp = composition(&[("C", 15, 2), ("Mn", 120, 2)]);

        let outcomes = verifier.verify("G1", 20.0, &comp, None, true).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(ChemicalCompositionVerifier::passes(&outcomes));

        // 非必检元素被检查时，缺失即失败
        let outcomes = verifier.verify("G1", 20.0, &comp, None, false).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[2].passed);
        assert_eq!(
            outcomes[2].message,
            "[FAIL] Chemical element Al is required to be checked, but is not present in the certificate."
        );
    }

    #[test]
    fn test_alternative_overrides_failure() {
        let registry = registry();
        let verifier = ChemicalCompositionVerifier::new(&registry);
        let comp = composition(&[("C", 15, 2), ("Mn", 80, 2)]);

        let outcomes = verifier.verify("G1", 10.0, &comp, None, true).unwrap();
        assert!(outcomes[1].passed);
        assert_eq!(
            outcomes[1].message,
            "[PASS] Chemical element Mn value is 0.80, meets the valid range [0.7, 1.6]."
        );

        // 厚度不满足替代条件，常规失败保留
        let outcomes = verifier.verify("G1", 20.0, &comp, None, true).unwrap();
        assert!(!outcomes[1].passed);
        assert!(outcomes[1].message.contains("[0.9, 1.6]"));
    }

    #[test]
    fn test_alternative_can_still_fail() {
        let registry = registry();
        let verifier = ChemicalCompositionVerifier::new(&registry);
        let comp = composition(&[("C", 15, 2), ("Mn", 60, 2)]);

        let outcomes = verifier.verify("G1", 10.0, &comp, None, true).unwrap();
        assert!(!outcomes[1].passed);
        assert!(outcomes[1].message.contains("[0.7, 1.6]"));
    }

    #[test]
    fn test_restricted_limit_set() {
        let registry = registry();
        let verifier = ChemicalCompositionVerifier::new(&registry);
        let comp = composition(&[("Al", 30, 3)]);
        let limits = registry.locate_many("G1", &["Al".to_string()]).unwrap();

        let outcomes = verifier.verify("G1", 20.0, &comp, Some(limits.as_slice()), false).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].passed);
        assert_eq!(outcomes[0].field_id, FieldId::ChemicalElement("Al".to_string()));
    }

    #[test]
    fn test_unknown_grade_is_configuration_error() {
        let registry = registry();
        let verifier = ChemicalCompositionVerifier::new(&registry);
        let err = verifier
            .verify("G9", 20.0, &Composition::new(), None, true)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Configuration(ConfigError::UnknownGrade("G9".to_string()))
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let registry = registry();
        let verifier = ChemicalCompositionVerifier::new(&registry);
        let comp = composition(&[("C", 15, 2)]);
        let before = comp.clone();
        verifier.verify("G1", 20.0, &comp, None, false).unwrap();
        assert_eq!(comp, before);
    }
}
