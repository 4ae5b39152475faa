// ==========================================
// 钢板质量证明书校验 - 力学性能校验器
// ==========================================
// 五项检查全部执行，互不短路:
//   屈服强度(下限) / 抗拉强度(区间) / 延伸率(下限) / 试验温度(定值) / 冲击功(下限)
// 冲击功: 每个试样读数都按 厚度档 × 方向 选定的同一下限校验
// 厚度超出 [0, 150] 为配置错误，在任何检查之前中止
// ==========================================

use crate::domain::certificate::Plate;
use crate::domain::measurement::{Displayable, Measurement, VerificationOutcome};
use crate::domain::types::{FieldId, TestDirection};
use crate::engine::error::EngineResult;
use crate::rules::limit::Bound;
use crate::rules::mechanical::MechanicalLimitRegistry;
use tracing::{debug, warn};

const UNIT_STRENGTH: &str = "MPa";
const UNIT_ELONGATION: &str = "%";
const UNIT_TEMPERATURE: &str = "Degrees Celsius";
const UNIT_IMPACT_ENERGY: &str = "J";

pub struct MechanicalPropertyVerifier<'a> {
    registry: &'a MechanicalLimitRegistry,
}

impl<'a> MechanicalPropertyVerifier<'a> {
    pub fn new(registry: &'a MechanicalLimitRegistry) -> Self {
        Self { registry }
    }

    /// 校验单块钢板的力学性能
    ///
    /// # 错误
    /// - 钢级无力学性能限值、厚度超出分档范围 → 配置错误
    pub fn verify(
        &self,
        grade: &str,
        thickness: f64,
        direction: TestDirection,
        plate: &Plate,
    ) -> EngineResult<Vec<VerificationOutcome>> {
        let bundle = self.registry.bundle(grade)?;
        let impact_limit = bundle.impact_energy_limit(thickness, direction)?;

        debug!(
            grade = %grade,
            thickness = thickness,
            direction = %direction,
            impact_limit = ?impact_limit,
            "选定冲击功下限"
        );

        let mut outcomes = Vec::with_capacity(4 + plate.impact_energy_readings.len());
        outcomes.push(check(
            FieldId::YieldStrength,
            &bundle.yield_strength,
            plate.yield_strength,
            UNIT_STRENGTH,
        )?);
        outcomes.push(check(
            FieldId::TensileStrength,
            &bundle.tensile_strength,
            plate.tensile_strength,
            UNIT_STRENGTH,
        )?);
        outcomes.push(check(
            FieldId::Elongation,
            &bundle.elongation,
            plate.elongation,
            UNIT_ELONGATION,
        )?);
        outcomes.push(check(
            FieldId::Temperature,
            &bundle.temperature,
            plate.temperature,
            UNIT_TEMPERATURE,
        )?);

        if plate.impact_energy_readings.is_empty() {
            outcomes.push(VerificationOutcome::new(
                FieldId::ImpactEnergy(0),
                false,
                "[FAIL] Impact Energy is required to be checked, but is not present in the certificate.",
            ));
        }
        for (index, reading) in plate.impact_energy_readings.iter().enumerate() {
            outcomes.push(check(
                FieldId::ImpactEnergy(index),
                &impact_limit,
                *reading,
                UNIT_IMPACT_ENERGY,
            )?);
        }

        for outcome in outcomes.iter().filter(|o| !o.passed) {
            warn!(
                serial_number = %plate.serial_number,
                field = %outcome.field_id,
                "{}",
                outcome.message
            );
        }

        Ok(outcomes)
    }
}

fn check(
    field_id: FieldId,
    bound: &Bound<i32>,
    value: i32,
    unit: &str,
) -> EngineResult<VerificationOutcome> {
    let mut measurement = Measurement::new(field_id.clone(), value);
    let (passed, message) = bound.evaluate(&field_id, &value.display_value(), value, unit);
    measurement.record(passed, message)?;
    Ok(measurement.finish()?)
}
