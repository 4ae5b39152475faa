// ==========================================
// 钢板质量证明书校验 - 化学成分限值表
// ==========================================
// 结构: 钢级 → 元素 → 限值定义（按注册顺序保存）
// 注册: 一条限值扇出到钢级簇内所有钢级
// 覆盖策略: 同一 (钢级, 元素) 重复注册时后注册者生效，保留原位置
// ==========================================

use crate::domain::certificate::Composition;
use crate::rules::error::{ConfigError, ConfigResult};
use crate::rules::limit::LimitDefinition;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

// ==========================================
// AlternativeCondition - 替代限值触发条件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlternativeCondition {
    /// 厚度 <= 给定值 (mm)
    ThicknessAtMost { thickness: f64 },
    /// 证书化学成分中出现给定元素
    ElementPresent { element: String },
    /// 全部条件同时成立
    All { conditions: Vec<AlternativeCondition> },
}

impl AlternativeCondition {
    pub fn holds(&self, thickness: f64, composition: &Composition) -> bool {
        match self {
            AlternativeCondition::ThicknessAtMost { thickness: limit } => thickness <= *limit,
            AlternativeCondition::ElementPresent { element } => composition.contains_key(element),
            AlternativeCondition::All { conditions } => conditions
                .iter()
                .all(|c| c.holds(thickness, composition)),
        }
    }
}

// ==========================================
// AlternativeLimitRule - 替代限值规则
// ==========================================
// 仅在常规限值校验失败后查询；按注册顺序，首个命中者生效
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeLimitRule {
    grades: BTreeSet<String>,
    condition: AlternativeCondition,
    replacement: LimitDefinition,
}

impl AlternativeLimitRule {
    pub fn new(grades: &[&str], condition: AlternativeCondition, replacement: LimitDefinition) -> Self {
        Self {
            grades: grades.iter().map(|g| g.to_string()).collect(),
            condition,
            replacement,
        }
    }

    pub fn element(&self) -> &str {
        self.replacement.element()
    }

    pub fn replacement(&self) -> &LimitDefinition {
        &self.replacement
    }

    pub fn matches(
        &self,
        grade: &str,
        element: &str,
        thickness: f64,
        composition: &Composition,
    ) -> bool {
        self.grades.contains(grade)
            && self.element() == element
            && self.condition.holds(thickness, composition)
    }
}

// ==========================================
// ChemicalLimitRegistry - 化学成分限值表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ChemicalLimitRegistry {
    limits: HashMap<String, Vec<LimitDefinition>>,
    alternatives: Vec<AlternativeLimitRule>,
}

impl ChemicalLimitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将一条限值扇出注册到多个钢级
    pub fn register(&mut self, grades: &[&str], limit: LimitDefinition) {
        for grade in grades {
            let entries = self.limits.entry(grade.to_string()).or_default();
            match entries
                .iter_mut()
                .find(|existing| existing.element() == limit.element())
            {
                Some(existing) => {
                    debug!(
                        grade = %grade,
                        element = %limit.element(),
                        "重复注册化学成分限值，后注册者生效"
                    );
                    *existing = limit.clone();
                }
                None => entries.push(limit.clone()),
            }
        }
    }

    /// 按钢级簇批量注册（簇仅为构建便利，不在运行期保留）
    pub fn register_clusters(&mut self, clusters: &[&[&str]], limit: LimitDefinition) {
        for cluster in clusters {
            self.register(cluster, limit.clone());
        }
    }

    pub fn register_alternative(&mut self, rule: AlternativeLimitRule) {
        self.alternatives.push(rule);
    }

    pub fn contains_grade(&self, grade: &str) -> bool {
        self.limits.contains_key(grade)
    }

    pub fn grades(&self) -> impl Iterator<Item = &str> {
        self.limits.keys().map(|g| g.as_str())
    }

    /// 钢级的全部常规限值（注册顺序）
    pub fn limits_for(&self, grade: &str) -> ConfigResult<&[LimitDefinition]> {
        self.limits
            .get(grade)
            .map(|v| v.as_slice())
            .ok_or_else(|| ConfigError::UnknownGrade(grade.to_string()))
    }

    /// 查找单个 (钢级, 元素) 限值
    pub fn locate(&self, grade: &str, element: &str) -> ConfigResult<&LimitDefinition> {
        self.limits_for(grade)?
            .iter()
            .find(|limit| limit.element() == element)
            .ok_or_else(|| ConfigError::MissingElementLimit {
                grade: grade.to_string(),
                element: element.to_string(),
            })
    }

    /// 按元素列表顺序查找限值，组成受限限值集
    pub fn locate_many(&self, grade: &str, elements: &[String]) -> ConfigResult<Vec<LimitDefinition>> {
        elements
            .iter()
            .map(|element| self.locate(grade, element).cloned())
            .collect()
    }

    /// 查找替代限值（首个命中者生效）
    pub fn find_alternative(
        &self,
        grade: &str,
        element: &str,
        thickness: f64,
        composition: &Composition,
    ) -> Option<&LimitDefinition> {
        self.alternatives
            .iter()
            .find(|rule| rule.matches(grade, element, thickness, composition))
            .map(|rule| rule.replacement())
    }
}
