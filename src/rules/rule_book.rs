// ==========================================
// 钢板质量证明书校验 - 规则总表
// ==========================================
// 职责: 持有化学成分 / 钢厂 / 力学性能三张规则表
// 生命周期: 进程启动时构建一次，之后只读，跨线程共享
// ==========================================

use crate::config::AuditSettings;
use crate::rules::chemical::ChemicalLimitRegistry;
use crate::rules::error::ConfigResult;
use crate::rules::mechanical::MechanicalLimitRegistry;
use crate::rules::plant::PlantRuleRegistry;
use crate::rules::standard;
use std::sync::LazyLock;
use tracing::{debug, info};

static SHARED: LazyLock<ConfigResult<RuleBook>> = LazyLock::new(|| RuleBook::standard());

#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    pub chemical: ChemicalLimitRegistry,
    pub plant: PlantRuleRegistry,
    pub mechanical: MechanicalLimitRegistry,
}

impl RuleBook {
    /// 由三张规则表组装（测试可注入合成规则表）
    pub fn new(
        chemical: ChemicalLimitRegistry,
        plant: PlantRuleRegistry,
        mechanical: MechanicalLimitRegistry,
    ) -> Self {
        Self {
            chemical,
            plant,
            mechanical,
        }
    }

    /// 内置标准规则表
    pub fn standard() -> ConfigResult<Self> {
        let book = Self::new(
            standard::chemical_limits()?,
            standard::plant_rules()?,
            standard::mechanical_limits(),
        );
        info!(
            grades = book.chemical.grades().count(),
            plants = book.plant.plants().count(),
            "标准规则表构建完成"
        );
        Ok(book)
    }

    /// 内置标准规则表 + 配置文件中的钢厂别名
    pub fn with_settings(settings: &AuditSettings) -> ConfigResult<Self> {
        let mut book = Self::standard()?;
        for (alias, plant) in &settings.plant_aliases {
            book.plant.register_alias(alias, plant)?;
            debug!(alias = %alias, plant = %plant, "注册钢厂别名");
        }
        Ok(book)
    }

    /// 进程级共享的标准规则表（首次调用时构建，构建结果含错误一并缓存）
    pub fn shared() -> ConfigResult<&'static RuleBook> {
        SHARED.as_ref().map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::error::ConfigError;
    use std::collections::BTreeMap;

    #[test]
    fn test_shared_is_built_once() {
        let a = RuleBook::shared().unwrap();
        let b = RuleBook::shared().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(a.chemical.contains_grade("VL A32"));
        assert!(a.mechanical.contains_grade("VL F40"));
    }

    #[test]
    fn test_settings_aliases_merged() {
        let mut aliases = BTreeMap::new();
        aliases.insert("BAOSTEEL SHANGHAI".to_string(), standard::BAOSHAN.to_string());
        let settings = AuditSettings {
            plant_aliases: aliases,
            ..AuditSettings::default()
        };

        let book = RuleBook::with_settings(&settings).unwrap();
        assert_eq!(
            book.plant.resolve_plant("BAOSTEEL SHANGHAI").unwrap(),
            standard::BAOSHAN
        );
    }

    #[test]
    fn test_settings_alias_to_unknown_plant_rejected() {
        let mut aliases = BTreeMap::new();
        aliases.insert("X".to_string(), "NO SUCH PLANT".to_string());
        let settings = AuditSettings {
            plant_aliases: aliases,
            ..AuditSettings::default()
        };

        assert!(matches!(
            RuleBook::with_settings(&settings),
            Err(ConfigError::InvalidAlias { .. })
        ));
    }
}
