// ==========================================
// 钢板质量证明书校验 - 领域模型层
// ==========================================
// 职责: 证书输入模型、测量值状态机、校验报告、领域类型
// 红线: 不含规则表，不含校验逻辑
// ==========================================

pub mod certificate;
pub mod measurement;
pub mod report;
pub mod types;

// 重导出核心类型
pub use certificate::{Certificate, ChemicalReading, Composition, Plate};
pub use measurement::{
    Displayable, Measurement, MeasurementStateError, Verifiable, VerificationOutcome,
};
pub use report::{BatchSummary, CertificateReport, PlateReport, StageReport};
pub use types::{CheckStage, FieldId, LimitKind, TestDirection, KNOWN_CHEMICAL_ELEMENTS};
