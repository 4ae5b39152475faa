// ==========================================
// 钢板质量证明书校验 - 校验报告
// ==========================================
// 职责: 汇总各阶段字段结果 → 钢板结论 → 证书结论
// 红线: 每条失败结论必须带可读原因 (message)
// ==========================================

use crate::domain::measurement::VerificationOutcome;
use crate::domain::types::{CheckStage, TestDirection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// StageReport - 单阶段结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    pub stage: CheckStage,
    pub passed: bool,
    pub outcomes: Vec<VerificationOutcome>,
}

impl StageReport {
    /// 由字段结果构造阶段结果；passed 为所有字段结果的 AND
    pub fn from_outcomes(stage: CheckStage, outcomes: Vec<VerificationOutcome>) -> Self {
        let passed = outcomes.iter().all(|o| o.passed);
        Self {
            stage,
            passed,
            outcomes,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &VerificationOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

// ==========================================
// PlateReport - 单块钢板结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateReport {
    pub serial_number: String,
    pub delivery_condition: String,
    pub direction: TestDirection,
    pub chemical: StageReport,
    pub structural: StageReport,
    pub mechanical: StageReport,
    pub passed: bool,
}

impl PlateReport {
    pub fn new(
        serial_number: String,
        delivery_condition: String,
        direction: TestDirection,
        chemical: StageReport,
        structural: StageReport,
        mechanical: StageReport,
    ) -> Self {
        let passed = chemical.passed && structural.passed && mechanical.passed;
        Self {
            serial_number,
            delivery_condition,
            direction,
            chemical,
            structural,
            mechanical,
            passed,
        }
    }

    /// 按阶段顺序遍历全部字段结果
    pub fn outcomes(&self) -> impl Iterator<Item = &VerificationOutcome> {
        self.chemical
            .outcomes
            .iter()
            .chain(self.structural.outcomes.iter())
            .chain(self.mechanical.outcomes.iter())
    }

    pub fn stages(&self) -> [&StageReport; 3] {
        [&self.chemical, &self.structural, &self.mechanical]
    }

    pub fn failure_count(&self) -> usize {
        self.stages().iter().map(|s| s.failures().count()).sum()
    }
}

// ==========================================
// CertificateReport - 证书结果
// ==========================================
// report_id / generated_at 为报告元数据，不参与结论比较
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub steel_plant: String,
    pub grade: String,
    pub thickness: f64,
    pub plates: Vec<PlateReport>,
    pub passed: bool,
}

impl CertificateReport {
    pub fn new(steel_plant: String, grade: String, thickness: f64, plates: Vec<PlateReport>) -> Self {
        let passed = plates.iter().all(|p| p.passed);
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            steel_plant,
            grade,
            thickness,
            plates,
            passed,
        }
    }

    pub fn failed_plates(&self) -> impl Iterator<Item = &PlateReport> {
        self.plates.iter().filter(|p| !p.passed)
    }
}

// ==========================================
// BatchSummary - 批量校验统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// 配置错误/输入错误导致中止的证书
    pub aborted: usize,
}

impl BatchSummary {
    pub fn all_passed(&self) -> bool {
        self.total == self.passed
    }
}
