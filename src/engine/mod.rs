// ==========================================
// 钢板质量证明书校验 - 引擎层
// ==========================================
// 职责: 化学成分 / 钢厂结构 / 力学性能校验与编排
// 红线: 校验器为纯函数，不修改输入证书；每条结果必须带 message
// ==========================================

pub mod chemical;
pub mod error;
pub mod mechanical;
pub mod orchestrator;
pub mod structural;

// 重导出核心引擎
pub use chemical::ChemicalCompositionVerifier;
pub use error::{EngineError, EngineResult};
pub use mechanical::MechanicalPropertyVerifier;
pub use orchestrator::VerificationOrchestrator;
pub use structural::{select_combination, StructuralRuleResolver};
