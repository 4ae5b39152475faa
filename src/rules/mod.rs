// ==========================================
// 钢板质量证明书校验 - 规则表层
// ==========================================
// 职责: 限值定义、三张规则表、内置标准数据
// 红线: 构建后只读；规则表不含校验流程
// ==========================================

pub mod chemical;
pub mod error;
pub mod limit;
pub mod mechanical;
pub mod plant;
pub mod rule_book;
pub mod standard;

pub use chemical::{AlternativeCondition, AlternativeLimitRule, ChemicalLimitRegistry};
pub use error::{ConfigError, ConfigResult};
pub use limit::{Bound, LimitDefinition};
pub use mechanical::{
    ImpactEnergyTable, MechanicalLimitBundle, MechanicalLimitRegistry, ThicknessBand,
};
pub use plant::{ElementCombination, PlantRuleRegistry};
pub use rule_book::RuleBook;
