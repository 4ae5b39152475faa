// ==========================================
// 钢板质量证明书校验 - 核心库
// ==========================================
// 职责: 按船级社规则表校验钢板质量证明书
//   化学成分限值 / 钢厂细晶元素组合与厚度 / 力学性能
// 输入: 上游抽取环节交付的结构化证书数据
// 输出: 逐字段 PASS/FAIL 结论 + 钢板结论 + 证书结论
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 证书模型、测量值、报告
pub mod domain;

// 规则表层 - 限值定义与三张规则表
pub mod rules;

// 引擎层 - 校验器与编排器
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CheckStage, FieldId, LimitKind, TestDirection};

// 领域实体
pub use domain::{
    BatchSummary, Certificate, CertificateReport, ChemicalReading, Composition, Plate,
    PlateReport, StageReport, VerificationOutcome,
};

// 规则表
pub use rules::{ConfigError, LimitDefinition, RuleBook};

// 引擎
pub use engine::{
    ChemicalCompositionVerifier, EngineError, EngineResult, MechanicalPropertyVerifier,
    StructuralRuleResolver, VerificationOrchestrator,
};

// 配置
pub use config::AuditSettings;

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "钢板质量证明书校验";
