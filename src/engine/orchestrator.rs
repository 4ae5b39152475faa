// ==========================================
// 钢板质量证明书校验 - 校验编排器
// ==========================================
// 主流程（每块钢板）: 必检化学成分 → 钢厂细晶元素结构 → 力学性能
// 三项全部执行，互不短路；证书内所有钢板全部校验
// 结论: 所有钢板、所有阶段结果的 AND
// ==========================================
// 中止: 试样方向代码非法（校验开始前统一检查）或规则表配置错误
// 批量: 证书之间无共享可变状态，可并行；单张中止不影响其余证书
// ==========================================

use crate::config::{AuditSettings, UnknownElementPolicy};
use crate::domain::certificate::{Certificate, ChemicalReading, Plate};
use crate::domain::report::{BatchSummary, CertificateReport, PlateReport, StageReport};
use crate::domain::types::{is_known_element, CheckStage, TestDirection};
use crate::engine::chemical::ChemicalCompositionVerifier;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::mechanical::MechanicalPropertyVerifier;
use crate::engine::structural::StructuralRuleResolver;
use crate::rules::RuleBook;
use rayon::prelude::*;
use tracing::{debug, error, info, info_span, warn};

/// 校验开始前的输入检查，返回试样方向
fn validate_plate(plate: &Plate) -> EngineResult<TestDirection> {
    let invalid = |reason: String| EngineError::InvalidInput {
        serial_number: plate.serial_number.clone(),
        reason,
    };

    let direction = TestDirection::from_position_code(&plate.position_direction_code)
        .map_err(invalid)?;

    if let Some((element, reading)) = plate
        .composition
        .iter()
        .find(|(_, reading)| !reading.has_valid_precision())
    {
        return Err(invalid(format!(
            "化学元素 {} 的精度 {} 超出上限 {}",
            element,
            reading.precision,
            ChemicalReading::MAX_PRECISION
        )));
    }

    Ok(direction)
}

// ==========================================
// VerificationOrchestrator - 校验编排器
// ==========================================
pub struct VerificationOrchestrator<'a> {
    settings: AuditSettings,
    chemical: ChemicalCompositionVerifier<'a>,
    structural: StructuralRuleResolver<'a>,
    mechanical: MechanicalPropertyVerifier<'a>,
}

impl<'a> VerificationOrchestrator<'a> {
    /// 使用默认运行配置创建编排器
    pub fn new(book: &'a RuleBook) -> Self {
        Self::with_settings(book, AuditSettings::default())
    }

    pub fn with_settings(book: &'a RuleBook, settings: AuditSettings) -> Self {
        Self {
            settings,
            chemical: ChemicalCompositionVerifier::new(&book.chemical),
            structural: StructuralRuleResolver::new(&book.plant, &book.chemical),
            mechanical: MechanicalPropertyVerifier::new(&book.mechanical),
        }
    }

    // ==========================================
    // 单张证书
    // ==========================================

    /// 校验一张证书
    ///
    /// # 错误
    /// - `InvalidInput`: 某块钢板的试样方向代码为空或同时含 C/L
    /// - `Configuration`: 钢级 / 钢厂 / 交货状态 / 厚度档在规则表中无法解析
    pub fn verify_certificate(&self, certificate: &Certificate) -> EngineResult<CertificateReport> {
        let span = info_span!(
            "certificate",
            plant = %certificate.steel_plant,
            grade = %certificate.grade,
            thickness = certificate.thickness
        );
        let _guard = span.enter();

        // 1. 输入预检: 方向代码、化学成分精度
        let directions = certificate
            .plates
            .iter()
            .map(validate_plate)
            .collect::<EngineResult<Vec<_>>>()?;

        // 2. 逐块钢板校验
        let mut plates = Vec::with_capacity(certificate.plates.len());
        for (plate, direction) in certificate.plates.iter().zip(directions) {
            plates.push(self.verify_plate(certificate, plate, direction)?);
        }

        let report = CertificateReport::new(
            certificate.steel_plant.clone(),
            certificate.grade.clone(),
            certificate.thickness,
            plates,
        );

        info!(
            report_id = %report.report_id,
            plates = report.plates.len(),
            failed_plates = report.failed_plates().count(),
            passed = report.passed,
            "证书校验完成"
        );
        Ok(report)
    }

    fn verify_plate(
        &self,
        certificate: &Certificate,
        plate: &Plate,
        direction: TestDirection,
    ) -> EngineResult<PlateReport> {
        self.report_unknown_elements(plate);

        let grade = certificate.grade.as_str();
        let thickness = certificate.thickness;

        let chemical = self
            .chemical
            .verify(grade, thickness, &plate.composition, None, true)?;
        let structural = self.structural.verify(
            &certificate.steel_plant,
            grade,
            &plate.delivery_condition,
            thickness,
            &plate.composition,
        )?;
        let mechanical = self.mechanical.verify(grade, thickness, direction, plate)?;

        let report = PlateReport::new(
            plate.serial_number.clone(),
            plate.delivery_condition.clone(),
            direction,
            StageReport::from_outcomes(CheckStage::MandatoryChemical, chemical),
            StageReport::from_outcomes(CheckStage::Structural, structural),
            StageReport::from_outcomes(CheckStage::Mechanical, mechanical),
        );

        if !report.passed {
            warn!(
                serial_number = %report.serial_number,
                failures = report.failure_count(),
                "钢板校验未通过"
            );
            for stage in report.stages() {
                for outcome in stage.failures() {
                    debug!(
                        serial_number = %report.serial_number,
                        stage = %stage.stage,
                        field = %outcome.field_id,
                        "{}",
                        outcome.message
                    );
                }
            }
        }
        Ok(report)
    }

    fn report_unknown_elements(&self, plate: &Plate) {
        if self.settings.unknown_element_policy == UnknownElementPolicy::Ignore {
            return;
        }
        for element in plate.composition.keys().filter(|e| !is_known_element(e)) {
            warn!(
                serial_number = %plate.serial_number,
                element = %element,
                "化学成分中出现未知元素"
            );
        }
    }

    // ==========================================
    // 批量
    // ==========================================

    /// 批量校验；结果顺序与输入一致
    pub fn verify_batch(
        &self,
        certificates: &[Certificate],
    ) -> (Vec<EngineResult<CertificateReport>>, BatchSummary) {
        let results: Vec<EngineResult<CertificateReport>> = if self.settings.parallel {
            certificates
                .par_iter()
                .map(|c| self.verify_certificate(c))
                .collect()
        } else {
            certificates
                .iter()
                .map(|c| self.verify_certificate(c))
                .collect()
        };

        let mut summary = BatchSummary {
            total: results.len(),
            ..BatchSummary::default()
        };
        for (certificate, result) in certificates.iter().zip(&results) {
            match result {
                Ok(report) if report.passed => summary.passed += 1,
                Ok(_) => summary.failed += 1,
                Err(e) => {
                    error!(
                        plant = %certificate.steel_plant,
                        grade = %certificate.grade,
                        error = %e,
                        "证书校验中止"
                    );
                    summary.aborted += 1;
                }
            }
        }

        info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            aborted = summary.aborted,
            "批量校验完成"
        );
        (results, summary)
    }
}
